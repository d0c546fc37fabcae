//! Binding expressions: the shared node model and the runtime path extractor.
//!
//! A binding expression is a zero-argument lambda whose body is a chain of
//! member accesses on one captured value, like `() => viewModel.Date.Day`.
//! [`extract_binding_path`] turns such a lambda into the dotted key
//! `Date.Day`, or `.` when the body is the captured value itself. Anything
//! else is rejected with [`ExtractError::UnsupportedExpressionKind`].

pub mod chain;
pub mod error;
pub mod expr;
pub mod extract;
pub mod node;

// --- Public API ---
pub use chain::{MemberChain, walk};
pub use error::ExtractError;
pub use expr::{BinaryOperator, BindingLambda, Constant, Expr, UnaryOperator};
pub use extract::{CanonicalPath, CaptureRepresentation, extract_binding_path, extract_with};
pub use node::{ExpressionNode, NodeKind, Shape};
