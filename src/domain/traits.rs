use crate::domain::graph::Graph;

/// Decides whether a graph contains a directed cycle.
///
/// Implementations may repaint vertex colours; callers reset before their
/// next traversal either way.
pub trait CycleDetector {
    fn has_cycle(&self, graph: &mut Graph) -> bool;
}

