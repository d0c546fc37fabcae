//! Source front end for binding-expression analysis.
//!
//! Parses a small C#-flavoured call language (function declarations with
//! attributed parameters, `let` statements, calls, member access and lambdas)
//! into a spanned syntax tree, and lowers binding lambdas into the resolved
//! [`bindpath_expr::Expr`] form.

pub mod ast;
pub mod error;
pub mod lower;
mod parser;
pub mod visit;

// --- Public API ---
pub use ast::{
    Argument, FunctionDecl, Item, Lambda, ParameterDecl, SourceUnit, Span, Statement, SyntaxExpr,
    SyntaxKind,
};
pub use error::{LowerError, SyntaxError};
pub use lower::{CLOSURE_CLASS, Scope, lower_binding, lower_lambda};
pub use parser::{parse_expression, parse_source};
pub use visit::Visitor;
