use crate::domain::graph::Graph;
use crate::domain::traits::CycleDetector;

/// Restarts a lowest-id depth-first sweep from every vertex. Quadratic, but
/// paints the vertices exactly as the traversal engine does.
pub struct SweepCycleDetector;

impl CycleDetector for SweepCycleDetector {
    fn has_cycle(&self, graph: &mut Graph) -> bool {
        graph.has_cycle()
    }
}
