//! Last-in-first-out frontier

use super::TraversalStrategy;
use crate::node::Node;

/// Depth-first traversal order backed by a stack.
///
/// Children are pushed so that the first child returned by the problem is
/// the first one visited.
#[derive(Debug, Clone)]
pub struct DepthFirst<S, A> {
    stack: Vec<Node<S, A>>,
}

impl<S, A> DepthFirst<S, A> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<S, A> Default for DepthFirst<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> TraversalStrategy<S, A> for DepthFirst<S, A> {
    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn select(&mut self) -> Option<Node<S, A>> {
        self.stack.pop()
    }

    fn add_frontier(&mut self, children: Vec<Node<S, A>>) -> bool {
        if children.is_empty() {
            return false;
        }
        self.stack.extend(children.into_iter().rev());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_child_is_selected_first() {
        let root: Node<u8, u8> = Node::root(0);
        let mut frontier = DepthFirst::new();
        assert!(frontier.add_frontier(vec![root.child(1, 1, 1.0), root.child(2, 2, 1.0)]));
        assert!(!frontier.add_frontier(Vec::new()));

        assert_eq!(frontier.select().map(|n| *n.state()), Some(1));
        assert_eq!(frontier.select().map(|n| *n.state()), Some(2));
        assert!(frontier.is_empty());
    }
}
