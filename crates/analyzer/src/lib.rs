//! Static checker for binding-expression arguments.
//!
//! A call argument bound to a parameter marked `[BindingExpression]` must be
//! a lambda whose body is a member access (`() => viewModel.Items`). Every
//! other shape is reported as `BEX0001` at the argument.

pub mod analyzer;
pub mod diagnostic;
pub mod marker;
pub mod shape;

// --- Public API ---
pub use analyzer::{Analyzer, CallSite, SourceFile, check_call_site, check_file};
pub use diagnostic::{
    BINDING_EXPRESSION_ID, BINDING_EXPRESSION_MESSAGE, Diagnostic, DiagnosticSink, Severity,
};
pub use marker::{DEFAULT_MARKER, DeclarationIndex, MarkerLookup, ParameterInfo, Signature};
pub use shape::{ShapeVerdict, validate_argument, validate_lambda};
