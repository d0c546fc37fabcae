//! Defines the syntax tree produced by the source parser.
//!
//! Nodes are never resolved or evaluated here; they only record what was
//! written and where.
use bindpath_expr::{BinaryOperator, ExpressionNode, NodeKind, UnaryOperator};
use serde::Serialize;
use serde_json::Value;

/// A region of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Byte offset of the first character.
    pub offset: usize,
    /// Length in bytes.
    pub len: usize,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column (in characters) of the first character.
    pub column: usize,
}

impl Span {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        let (first, last) = if self.offset <= other.offset {
            (self, other)
        } else {
            (other, self)
        };
        Span {
            offset: first.offset,
            len: last.end().max(first.end()) - first.offset,
            line: first.line,
            column: first.column,
        }
    }
}

/// A parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceUnit {
    pub items: Vec<Item>,
}

impl SourceUnit {
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Function(decl) => Some(decl),
            Item::Statement(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Function(FunctionDecl),
    Statement(Statement),
}

/// `fn Name([Marker] param, other) { ... }` or a body-less `fn Name(...);`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<ParameterDecl>,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDecl {
    pub name: String,
    /// Attribute names written in front of the parameter, without brackets.
    pub attributes: Vec<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name = value;` (or `var`).
    Let {
        name: String,
        value: SyntaxExpr,
        span: Span,
    },
    Return {
        value: Option<SyntaxExpr>,
        span: Span,
    },
    Expr(SyntaxExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxExpr {
    pub kind: SyntaxKind,
    pub span: Span,
}

impl SyntaxExpr {
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn as_lambda(&self) -> Option<&Lambda> {
        match &self.kind {
            SyntaxKind::Lambda(lambda) => Some(lambda),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxKind {
    Literal(Value),
    Identifier(String),
    /// `target.name`
    MemberAccess {
        target: Box<SyntaxExpr>,
        name: String,
    },
    /// `callee(args)`
    Invocation {
        callee: Box<SyntaxExpr>,
        args: Vec<Argument>,
    },
    Lambda(Lambda),
    Unary {
        op: UnaryOperator,
        operand: Box<SyntaxExpr>,
    },
    Binary {
        left: Box<SyntaxExpr>,
        op: BinaryOperator,
        right: Box<SyntaxExpr>,
    },
    /// `target[index]`
    ElementAccess {
        target: Box<SyntaxExpr>,
        index: Box<SyntaxExpr>,
    },
    Conditional {
        test: Box<SyntaxExpr>,
        if_true: Box<SyntaxExpr>,
        if_false: Box<SyntaxExpr>,
    },
    /// `new TypeName(args)`
    ObjectCreation {
        type_name: String,
        args: Vec<Argument>,
    },
    Parenthesized(Box<SyntaxExpr>),
    /// `(TypeName)operand`
    Cast {
        type_name: String,
        operand: Box<SyntaxExpr>,
    },
    /// `target?.rest`. Everything after `?.` belongs to `when_not_null`,
    /// which is rooted at a [`SyntaxKind::MemberBinding`].
    ConditionalAccess {
        target: Box<SyntaxExpr>,
        when_not_null: Box<SyntaxExpr>,
    },
    /// The `.name` that follows `?` in a conditional access.
    MemberBinding(String),
    /// `{ statements }` as a lambda body.
    Block(Vec<Statement>),
}

/// An argument at a call site, optionally named: `binding: () => vm.Items`.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: Option<String>,
    pub value: SyntaxExpr,
    pub span: Span,
}

/// `() => body`, `(a, b) => body` or `a => body`. A block body is a
/// [`SyntaxKind::Block`].
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub params: Vec<String>,
    pub body: Box<SyntaxExpr>,
}

impl ExpressionNode for SyntaxExpr {
    fn kind(&self) -> NodeKind<'_, Self> {
        match &self.kind {
            SyntaxKind::Literal(_) | SyntaxKind::Identifier(_) => NodeKind::Root,
            SyntaxKind::MemberAccess { target, name } => NodeKind::Member {
                inner: target.as_ref(),
                name: name.as_str(),
            },
            SyntaxKind::Invocation { .. } => NodeKind::Call,
            SyntaxKind::Lambda(_)
            | SyntaxKind::Unary { .. }
            | SyntaxKind::Binary { .. }
            | SyntaxKind::ElementAccess { .. }
            | SyntaxKind::Conditional { .. }
            | SyntaxKind::ObjectCreation { .. }
            | SyntaxKind::Parenthesized(_)
            | SyntaxKind::Cast { .. }
            | SyntaxKind::ConditionalAccess { .. }
            | SyntaxKind::MemberBinding(_)
            | SyntaxKind::Block(_) => NodeKind::Other,
        }
    }

    fn is_captured_value(&self) -> bool {
        matches!(self.kind, SyntaxKind::Identifier(_))
    }
}
