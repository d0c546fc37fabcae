//! Member-chain traversal shared by the path extractor and the shape validator.
use crate::node::{ExpressionNode, NodeKind, Shape};

/// The result of walking `inner` links from a starting node until the first
/// node that is not a member access.
pub struct MemberChain<'a, N: ?Sized> {
    /// Member names in leaf-to-root order: the first entry is the outermost
    /// access in source text.
    names: Vec<&'a str>,
    terminal: &'a N,
}

impl<'a, N: ExpressionNode + ?Sized> MemberChain<'a, N> {
    pub fn names_root_to_leaf(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The node the walk stopped at. Never a member access.
    pub fn terminal(&self) -> &'a N {
        self.terminal
    }

    pub fn terminal_shape(&self) -> Shape {
        self.terminal.shape()
    }
}

/// Walks `node` through consecutive member accesses.
pub fn walk<N: ExpressionNode + ?Sized>(node: &N) -> MemberChain<'_, N> {
    let mut names = Vec::new();
    let mut current = node;
    while let NodeKind::Member { inner, name } = current.kind() {
        names.push(name);
        current = inner;
    }
    log::trace!(
        "member chain of {} name(s) ends at {}",
        names.len(),
        current.shape()
    );
    MemberChain {
        names,
        terminal: current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Expr;

    #[test]
    fn test_walk_collects_every_name() {
        let expr = Expr::closure("c").member("vm").member("Date").member("Day");
        let chain = walk(&expr);
        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.names_root_to_leaf().collect::<Vec<_>>(),
            vec!["vm", "Date", "Day"]
        );
        assert_eq!(chain.terminal_shape(), Shape::Root);
    }

    #[test]
    fn test_walk_stops_at_call() {
        let expr = Expr::closure("c")
            .member("vm")
            .call("ToString", vec![])
            .member("Length");
        let chain = walk(&expr);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.terminal_shape(), Shape::Call);
    }

    #[test]
    fn test_walk_of_non_member_is_empty() {
        let expr = Expr::constant(true);
        let chain = walk(&expr);
        assert!(chain.is_empty());
        assert_eq!(chain.terminal(), &expr);
    }
}
