//! The closed set of node kinds every expression representation is reduced to.
//!
//! Both the resolved expression tree ([`crate::Expr`]) and the source syntax
//! tree implement [`ExpressionNode`], so the member-chain traversal in
//! [`crate::chain`] is written once and never sees a concrete host type.
use std::fmt;

/// The payload-free discriminant of a [`NodeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An opaque leaf: a captured value, a parameter or a literal constant.
    Root,
    /// Access of a named field or property.
    Member,
    /// A method or function invocation.
    Call,
    /// Operators, indexers, casts, conditionals, construction, ...
    Other,
}

impl Shape {
    pub fn describe(self) -> &'static str {
        match self {
            Shape::Root => "root reference",
            Shape::Member => "member access",
            Shape::Call => "call",
            Shape::Other => "unsupported expression",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// One node as seen by the shared traversal.
///
/// `Member::inner` borrows a full node of the same representation, so chains
/// are right-nested: the outermost access wraps the rest.
pub enum NodeKind<'a, N: ?Sized> {
    Root,
    Member { inner: &'a N, name: &'a str },
    Call,
    Other,
}

impl<N: ?Sized> NodeKind<'_, N> {
    pub fn shape(&self) -> Shape {
        match self {
            NodeKind::Root => Shape::Root,
            NodeKind::Member { .. } => Shape::Member,
            NodeKind::Call => Shape::Call,
            NodeKind::Other => Shape::Other,
        }
    }
}

/// A read-only view over a host expression tree.
pub trait ExpressionNode {
    /// Classifies this node into one of the closed [`NodeKind`]s.
    fn kind(&self) -> NodeKind<'_, Self>;

    /// True when this node is a root that stands for a captured value rather
    /// than a literal constant. Hosts that cannot tell the two apart keep the
    /// default.
    fn is_captured_value(&self) -> bool {
        false
    }

    fn shape(&self) -> Shape {
        self.kind().shape()
    }
}
