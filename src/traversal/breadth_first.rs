//! First-in-first-out frontier

use std::collections::VecDeque;

use super::TraversalStrategy;
use crate::node::Node;

/// Breadth-first traversal order backed by a queue.
#[derive(Debug, Clone)]
pub struct BreadthFirst<S, A> {
    queue: VecDeque<Node<S, A>>,
}

impl<S, A> BreadthFirst<S, A> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<S, A> Default for BreadthFirst<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> TraversalStrategy<S, A> for BreadthFirst<S, A> {
    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn select(&mut self) -> Option<Node<S, A>> {
        self.queue.pop_front()
    }

    fn add_frontier(&mut self, children: Vec<Node<S, A>>) -> bool {
        if children.is_empty() {
            return false;
        }
        self.queue.extend(children);
        true
    }
}
