use crate::domain::graph::Graph;
use crate::domain::model::VertexId;

impl Graph {
    /// Warshall closure over the adjacency matrix.
    ///
    /// Intermediate vertex outermost, then row, then column. Each edge the
    /// pass adds is also appended to the adjacency list of its source, and is
    /// returned as `(row, col)` in the order it was found.
    pub fn transitive_closure(&mut self) -> Vec<(usize, usize)> {
        let n = self.vertex_count();
        let mut new_edges = Vec::new();

        for via in 0..n {
            for row in 0..n {
                if !self.matrix.get(row, via) {
                    continue;
                }
                for col in 0..n {
                    if self.matrix.get(via, col) && self.add_edge(VertexId(row), VertexId(col)) {
                        new_edges.push((row, col));
                    }
                }
            }
        }

        new_edges
    }
}
