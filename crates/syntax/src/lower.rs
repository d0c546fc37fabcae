//! Lowers a parsed lambda into the resolved tree the path extractor reads.
//!
//! Identifiers declared outside the lambda are captured: under
//! [`CaptureRepresentation::Wrapped`] they become fields of a closure object,
//! under [`CaptureRepresentation::Bare`] they stay plain variables.
use crate::ast::{Argument, Lambda, SyntaxExpr, SyntaxKind};
use crate::error::LowerError;
use bindpath_expr::{BindingLambda, CaptureRepresentation, Expr};
use std::collections::HashSet;

/// Class name given to the object that holds captured locals.
pub const CLOSURE_CLASS: &str = "<>c__DisplayClass0_0";

/// Names visible to a binding lambda from its enclosing code.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    locals: HashSet<String>,
    capture_free: bool,
}

impl Scope {
    /// A scope that treats every unresolved identifier as a captured local.
    pub fn capture_free_identifiers() -> Self {
        Self {
            locals: HashSet::new(),
            capture_free: true,
        }
    }

    pub fn with_locals<I, S>(locals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locals: locals.into_iter().map(Into::into).collect(),
            capture_free: false,
        }
    }

    pub fn is_captured(&self, name: &str) -> bool {
        self.capture_free || self.locals.contains(name)
    }
}

/// Lowers `expr`, which must be a parameterless lambda.
pub fn lower_binding(
    expr: &SyntaxExpr,
    scope: &Scope,
    capture: CaptureRepresentation,
) -> Result<BindingLambda, LowerError> {
    let lambda = expr.as_lambda().ok_or(LowerError::NotALambda)?;
    lower_lambda(lambda, scope, capture)
}

pub fn lower_lambda(
    lambda: &Lambda,
    scope: &Scope,
    capture: CaptureRepresentation,
) -> Result<BindingLambda, LowerError> {
    if !lambda.params.is_empty() {
        return Err(LowerError::NotNullary {
            arity: lambda.params.len(),
        });
    }
    let lowering = Lowering {
        scope,
        capture,
        params: Vec::new(),
    };
    lowering.lower(&lambda.body).map(BindingLambda::new)
}

struct Lowering<'s> {
    scope: &'s Scope,
    capture: CaptureRepresentation,
    /// Parameters of nested lambdas currently in scope, innermost last.
    params: Vec<String>,
}

impl Lowering<'_> {
    fn lower(&self, expr: &SyntaxExpr) -> Result<Expr, LowerError> {
        Ok(match &expr.kind {
            SyntaxKind::Literal(value) => Expr::constant(value.clone()),
            SyntaxKind::Identifier(name) => self.resolve(name, expr)?,
            SyntaxKind::MemberAccess { target, name } => self.lower(target)?.member(name.as_str()),
            SyntaxKind::Invocation { callee, args } => {
                let args = self.lower_args(args)?;
                match &callee.kind {
                    SyntaxKind::MemberAccess { target, name } => {
                        self.lower(target)?.call(name.as_str(), args)
                    }
                    SyntaxKind::Identifier(name) if !self.is_bound(name) => {
                        Expr::call_static(name.as_str(), args)
                    }
                    // Delegates are invoked through their `Invoke` method.
                    _ => self.lower(callee)?.call("Invoke", args),
                }
            }
            SyntaxKind::Lambda(lambda) => {
                let mut nested = Lowering {
                    scope: self.scope,
                    capture: self.capture,
                    params: self.params.clone(),
                };
                nested.params.extend(lambda.params.iter().cloned());
                Expr::lambda(lambda.params.clone(), nested.lower(&lambda.body)?)
            }
            SyntaxKind::Unary { op, operand } => Expr::unary(*op, self.lower(operand)?),
            SyntaxKind::Binary { left, op, right } => {
                Expr::binary(self.lower(left)?, *op, self.lower(right)?)
            }
            SyntaxKind::ElementAccess { target, index } => {
                self.lower(target)?.index(self.lower(index)?)
            }
            SyntaxKind::Conditional {
                test,
                if_true,
                if_false,
            } => Expr::conditional(
                self.lower(test)?,
                self.lower(if_true)?,
                self.lower(if_false)?,
            ),
            SyntaxKind::ObjectCreation { type_name, args } => {
                Expr::new_object(type_name.as_str(), self.lower_args(args)?)
            }
            // Grouping parentheses leave no trace in the resolved tree.
            SyntaxKind::Parenthesized(inner) => self.lower(inner)?,
            SyntaxKind::Cast { type_name, operand } => {
                self.lower(operand)?.convert(type_name.as_str())
            }
            SyntaxKind::ConditionalAccess { .. } | SyntaxKind::MemberBinding(_) => {
                return Err(unsupported("null-propagating access", expr));
            }
            SyntaxKind::Block(_) => return Err(unsupported("statement body", expr)),
        })
    }

    fn lower_args(&self, args: &[Argument]) -> Result<Vec<Expr>, LowerError> {
        args.iter().map(|arg| self.lower(&arg.value)).collect()
    }

    fn is_bound(&self, name: &str) -> bool {
        self.params.iter().any(|p| p == name) || self.scope.is_captured(name)
    }

    fn resolve(&self, name: &str, at: &SyntaxExpr) -> Result<Expr, LowerError> {
        if self.params.iter().any(|p| p == name) {
            return Ok(Expr::parameter(name));
        }
        if !self.scope.is_captured(name) {
            return Err(LowerError::UnresolvedName {
                name: name.to_string(),
                line: at.span.line,
                column: at.span.column,
            });
        }
        Ok(match self.capture {
            CaptureRepresentation::Wrapped => Expr::closure(CLOSURE_CLASS).member(name),
            CaptureRepresentation::Bare => Expr::variable(name),
        })
    }
}

fn unsupported(construct: &'static str, at: &SyntaxExpr) -> LowerError {
    LowerError::Unsupported {
        construct,
        line: at.span.line,
        column: at.span.column,
    }
}
