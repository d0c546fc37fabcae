//! The resolved expression tree handed to the path extractor.
//!
//! This mirrors what a compiler front end produces for a lambda after name
//! resolution: captured locals are reached through a closure object (or, for
//! hosts that do not box captures, appear as bare variables), literals are
//! constants, and everything else keeps its structure so it can be rendered
//! in error messages.
use crate::node::{ExpressionNode, NodeKind};
use itertools::Itertools;
use serde_json::Value;
use std::fmt;

/// A constant leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// A literal value, like a string, number, boolean or null.
    Value(Value),
    /// The compiler-generated object that holds captured locals.
    Closure(String),
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Value(value) => write!(f, "{}", value),
            Constant::Closure(class) => write!(f, "value({})", class),
        }
    }
}

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Negate,
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Logical
    OrElse,
    AndAlso,
    // Equality
    Equal,
    NotEqual,
    // Relational
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    // Additive
    Add,
    Subtract,
    // Multiplicative
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::OrElse => "||",
            BinaryOperator::AndAlso => "&&",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
        }
    }
}

/// A resolved expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(Constant),
    /// A formal parameter of the enclosing lambda.
    Parameter(String),
    /// A captured local surfaced directly as a leaf.
    Variable(String),
    Member {
        inner: Box<Expr>,
        member: String,
    },
    Call {
        receiver: Option<Box<Expr>>,
        method: String,
        args: Vec<Expr>,
    },
    Unary {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    Index {
        target: Box<Expr>,
        index: Box<Expr>,
    },
    Convert {
        operand: Box<Expr>,
        type_name: String,
    },
    Conditional {
        test: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },
    New {
        type_name: String,
        args: Vec<Expr>,
    },
    /// A nested lambda, such as the predicate handed to a query method.
    Lambda {
        params: Vec<String>,
        body: Box<Expr>,
    },
}

impl Expr {
    pub fn constant(value: impl Into<Value>) -> Self {
        Expr::Constant(Constant::Value(value.into()))
    }

    pub fn closure(class: impl Into<String>) -> Self {
        Expr::Constant(Constant::Closure(class.into()))
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        Expr::Parameter(name.into())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// Accesses `member` on `self`.
    pub fn member(self, member: impl Into<String>) -> Self {
        Expr::Member {
            inner: Box::new(self),
            member: member.into(),
        }
    }

    /// Invokes `method` on `self`.
    pub fn call(self, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            receiver: Some(Box::new(self)),
            method: method.into(),
            args,
        }
    }

    /// Invokes a free function.
    pub fn call_static(method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            receiver: None,
            method: method.into(),
            args,
        }
    }

    pub fn unary(op: UnaryOperator, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn index(self, index: Expr) -> Self {
        Expr::Index {
            target: Box::new(self),
            index: Box::new(index),
        }
    }

    pub fn convert(self, type_name: impl Into<String>) -> Self {
        Expr::Convert {
            operand: Box::new(self),
            type_name: type_name.into(),
        }
    }

    pub fn conditional(test: Expr, if_true: Expr, if_false: Expr) -> Self {
        Expr::Conditional {
            test: Box::new(test),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    pub fn new_object(type_name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::New {
            type_name: type_name.into(),
            args,
        }
    }

    pub fn lambda(params: Vec<String>, body: Expr) -> Self {
        Expr::Lambda {
            params,
            body: Box::new(body),
        }
    }
}

impl ExpressionNode for Expr {
    fn kind(&self) -> NodeKind<'_, Self> {
        match self {
            Expr::Constant(_) | Expr::Parameter(_) | Expr::Variable(_) => NodeKind::Root,
            Expr::Member { inner, member } => NodeKind::Member {
                inner: inner.as_ref(),
                name: member.as_str(),
            },
            Expr::Call { .. } => NodeKind::Call,
            Expr::Unary { .. }
            | Expr::Binary { .. }
            | Expr::Index { .. }
            | Expr::Convert { .. }
            | Expr::Conditional { .. }
            | Expr::New { .. }
            | Expr::Lambda { .. } => NodeKind::Other,
        }
    }

    fn is_captured_value(&self) -> bool {
        matches!(
            self,
            Expr::Variable(_) | Expr::Parameter(_) | Expr::Constant(Constant::Closure(_))
        )
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(constant) => write!(f, "{}", constant),
            Expr::Parameter(name) | Expr::Variable(name) => f.write_str(name),
            Expr::Member { inner, member } => write!(f, "{}.{}", inner, member),
            Expr::Call {
                receiver,
                method,
                args,
            } => {
                if let Some(receiver) = receiver {
                    write!(f, "{}.", receiver)?;
                }
                write!(f, "{}({})", method, args.iter().join(", "))
            }
            Expr::Unary {
                op: UnaryOperator::Not,
                operand,
            } => write!(f, "Not({})", operand),
            Expr::Unary {
                op: UnaryOperator::Negate,
                operand,
            } => write!(f, "-{}", operand),
            Expr::Binary { left, op, right } => write!(f, "({} {} {})", left, op.symbol(), right),
            Expr::Index { target, index } => write!(f, "{}[{}]", target, index),
            Expr::Convert { operand, type_name } => write!(f, "Convert({}, {})", operand, type_name),
            Expr::Conditional {
                test,
                if_true,
                if_false,
            } => write!(f, "IIF({}, {}, {})", test, if_true, if_false),
            Expr::New { type_name, args } => {
                write!(f, "new {}({})", type_name, args.iter().join(", "))
            }
            Expr::Lambda { params, body } if params.len() == 1 => {
                write!(f, "{} => {}", params[0], body)
            }
            Expr::Lambda { params, body } => {
                write!(f, "({}) => {}", params.iter().join(", "), body)
            }
        }
    }
}

/// A zero-argument, single-expression function value: `() => body`.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingLambda {
    body: Expr,
}

impl BindingLambda {
    pub fn new(body: Expr) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }
}

impl fmt::Display for BindingLambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "() => {}", self.body)
    }
}
