//! Problem port - the collaborator every search driver works against
//!
//! A search driver never inspects states itself. It only asks the problem
//! for the initial state, for the children of a node and whether a node is
//! a solution.

use crate::node::Node;

/// A general search problem over states `State` and actions `Action`.
///
/// Implementations must be pure functions of the state: expanding the same
/// node twice must produce the same children. Drivers rely on this but
/// never do it, since each node is expanded at most once per traversal.
///
/// # Examples
///
/// ```
/// use statespace::{Node, SearchProblem};
///
/// /// Count up from zero until reaching a target.
/// struct CountTo(u32);
///
/// impl SearchProblem for CountTo {
///     type State = u32;
///     type Action = ();
///
///     fn initial_state(&self) -> u32 {
///         0
///     }
///
///     fn expand(&self, node: &Node<u32, ()>) -> Vec<Node<u32, ()>> {
///         vec![node.child(node.state() + 1, (), 1.0)]
///     }
///
///     fn is_solution(&self, node: &Node<u32, ()>) -> bool {
///         *node.state() == self.0
///     }
/// }
/// ```
pub trait SearchProblem {
    type State: Clone;
    type Action: Clone;

    fn initial_state(&self) -> Self::State;

    /// Successors of `node`, each carrying its incoming action and
    /// accumulated cost.
    fn expand(&self, node: &Node<Self::State, Self::Action>) -> Vec<Node<Self::State, Self::Action>>;

    fn is_solution(&self, node: &Node<Self::State, Self::Action>) -> bool;
}

/// The node type produced by problem `P`.
pub type NodeOf<P> = Node<<P as SearchProblem>::State, <P as SearchProblem>::Action>;

impl<P: SearchProblem + ?Sized> SearchProblem for &P {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> Self::State {
        (**self).initial_state()
    }

    fn expand(&self, node: &Node<Self::State, Self::Action>) -> Vec<Node<Self::State, Self::Action>> {
        (**self).expand(node)
    }

    fn is_solution(&self, node: &Node<Self::State, Self::Action>) -> bool {
        (**self).is_solution(node)
    }
}

/// Evaluation function f(n) used by bounding searches and local optimizers.
pub trait EvaluationFunction<S, A> {
    fn evaluate(&self, node: &Node<S, A>) -> f64;
}

impl<S, A, F> EvaluationFunction<S, A> for F
where
    F: Fn(&Node<S, A>) -> f64,
{
    fn evaluate(&self, node: &Node<S, A>) -> f64 {
        self(node)
    }
}

/// f(n) = depth(n), the number of actions from the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Depth;

impl<S, A> EvaluationFunction<S, A> for Depth {
    fn evaluate(&self, node: &Node<S, A>) -> f64 {
        node.depth() as f64
    }
}

/// f(n) = g(n), the accumulated path cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathCost;

impl<S, A> EvaluationFunction<S, A> for PathCost {
    fn evaluate(&self, node: &Node<S, A>) -> f64 {
        node.cost()
    }
}

/// f(n) = g(n) + h(n) for a heuristic estimate h of the remaining cost.
#[derive(Debug, Clone, Copy)]
pub struct CostPlusHeuristic<H> {
    heuristic: H,
}

impl<H> CostPlusHeuristic<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<S, A, H> EvaluationFunction<S, A> for CostPlusHeuristic<H>
where
    H: EvaluationFunction<S, A>,
{
    fn evaluate(&self, node: &Node<S, A>) -> f64 {
        node.cost() + self.heuristic.evaluate(node)
    }
}
