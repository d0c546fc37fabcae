//! The syntactic shape rule applied to binding-expression arguments.
use bindpath_expr::{ExpressionNode, Shape};
use bindpath_syntax::{Argument, Lambda, Span};

/// Outcome of checking one lambda body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeVerdict {
    Accepted,
    Rejected { shape: Shape, span: Span },
    /// The lambda declares parameters; binding expressions take none.
    Parameterized { arity: usize },
}

impl ShapeVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ShapeVerdict::Accepted)
    }
}

/// Accepts a parameterless lambda whose body is, at the top level, a member
/// access.
///
/// Only the outermost node is inspected: `() => vm.ToString().Length` passes
/// because its top node is `.Length`.
pub fn validate_lambda(lambda: &Lambda) -> ShapeVerdict {
    if !lambda.params.is_empty() {
        return ShapeVerdict::Parameterized {
            arity: lambda.params.len(),
        };
    }
    match lambda.body.shape() {
        Shape::Member => ShapeVerdict::Accepted,
        shape => ShapeVerdict::Rejected {
            shape,
            span: lambda.body.span,
        },
    }
}

/// Classifies an argument, or returns `None` when it is not a lambda and so
/// cannot be judged syntactically.
pub fn validate_argument(arg: &Argument) -> Option<ShapeVerdict> {
    let lambda = arg.value.as_lambda()?;
    Some(validate_lambda(lambda))
}
