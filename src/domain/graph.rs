use crate::domain::error::{InvalidInputError, VertexNotFoundError};
use crate::domain::model::{Color, Vertex, VertexId};
use std::collections::BTreeSet;

/// Dense N×N edge grid, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    dimension: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![false; dimension * dimension],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.dimension && col < self.dimension && self.cells[row * self.dimension + col]
    }

    /// Sets the cell and reports whether it was previously unset.
    pub fn set(&mut self, row: usize, col: usize) -> bool {
        if row >= self.dimension || col >= self.dimension {
            return false;
        }
        let cell = &mut self.cells[row * self.dimension + col];
        let added = !*cell;
        *cell = true;
        added
    }

    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Directed graph over the dense vertex ids `0..N`.
///
/// The adjacency list keeps every edge in input order (parallel edges and
/// self-loops included); the matrix holds the same relation deduplicated.
/// Both are updated together by [`Graph::add_edge`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(super) vertices: Vec<Vertex>,
    pub(super) adjacency: Vec<Vec<VertexId>>,
    pub(super) matrix: AdjacencyMatrix,
}

impl Graph {
    /// Builds a graph from alternating source/destination tokens.
    pub fn build<S: AsRef<str>>(tokens: &[S]) -> Result<Self, InvalidInputError> {
        let mut ids = Vec::with_capacity(tokens.len());
        for (position, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            let id = token
                .parse::<usize>()
                .map_err(|_| InvalidInputError::InvalidToken {
                    position,
                    token: token.to_string(),
                })?;
            ids.push(id);
        }

        if ids.len() % 2 != 0 {
            return Err(InvalidInputError::DanglingVertex { tokens: ids.len() });
        }

        let edges: Vec<(usize, usize)> = ids.chunks_exact(2).map(|p| (p[0], p[1])).collect();
        Self::from_edges(&edges)
    }

    /// Builds a graph from `(source, destination)` pairs.
    ///
    /// Every id in `0..N` must appear in at least one pair, where N is the
    /// number of distinct ids; ids are used directly as indices.
    pub fn from_edges(edges: &[(usize, usize)]) -> Result<Self, InvalidInputError> {
        let distinct: BTreeSet<usize> = edges.iter().flat_map(|&(u, v)| [u, v]).collect();

        if let Some((missing, _)) = distinct.iter().enumerate().find(|(i, id)| i != *id) {
            return Err(InvalidInputError::SparseVertexIds {
                vertex_count: distinct.len(),
                missing,
            });
        }

        let n = distinct.len();
        let vertices: Vec<Vertex> = (0..n).map(Vertex::new).collect();

        let mut adjacency: Vec<Vec<VertexId>> = vec![Vec::new(); n];
        for &(u, v) in edges {
            adjacency[u].push(VertexId(v));
        }

        let mut matrix = AdjacencyMatrix::new(n);
        for (u, outs) in adjacency.iter().enumerate() {
            for v in outs {
                matrix.set(u, v.0);
            }
        }

        Ok(Self {
            vertices,
            adjacency,
            matrix,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of adjacency-list entries, parallel edges counted separately.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|v| v.len()).sum()
    }

    pub fn distinct_edge_count(&self) -> usize {
        self.matrix.count_set()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn successors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.matrix.get(from.0, to.0)
    }

    /// All adjacency-list edges in per-source insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, outs)| outs.iter().map(move |&v| (VertexId(u), v)))
    }

    pub fn contains_vertex_id(&self, id: i64) -> bool {
        usize::try_from(id).is_ok_and(|i| i < self.vertices.len())
    }

    /// Inserts `from -> to` into both the matrix and the adjacency list.
    ///
    /// Returns false when the edge already exists or either endpoint is not a
    /// vertex of this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        if to.0 >= self.vertices.len() || !self.matrix.set(from.0, to.0) {
            return false;
        }
        self.adjacency[from.0].push(to);
        true
    }

    pub fn find_vertices_by_id(
        &self,
        src: i64,
        dest: i64,
    ) -> Result<(VertexId, VertexId), VertexNotFoundError> {
        match (usize::try_from(src), usize::try_from(dest)) {
            (Ok(s), Ok(d)) if s < self.vertices.len() && d < self.vertices.len() => {
                Ok((VertexId(s), VertexId(d)))
            }
            _ => Err(VertexNotFoundError { src, dest }),
        }
    }

    pub(super) fn paint(&mut self, id: VertexId, color: Color) {
        self.vertices[id.0].color = color;
    }

    pub(super) fn clear_colors(&mut self) {
        for v in self.vertices.iter_mut() {
            v.color = Color::Unvisited;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_indexes_vertices_by_id() {
        let g = Graph::build(&["2", "0", "0", "1"]).expect("build");
        assert_eq!(g.vertex_count(), 3);
        for (i, v) in g.vertices().iter().enumerate() {
            assert_eq!(v.id, VertexId(i));
            assert_eq!(v.color, Color::Unvisited);
        }
    }

    #[test]
    fn build_keeps_parallel_edges_in_list_but_not_in_matrix() {
        let g = Graph::build(&["0", "1", "0", "1", "1", "1"]).expect("build");
        assert_eq!(g.successors(VertexId(0)), &[VertexId(1), VertexId(1)]);
        assert_eq!(g.successors(VertexId(1)), &[VertexId(1)]);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.distinct_edge_count(), 2);
        assert!(g.has_edge(VertexId(1), VertexId(1)));
        assert!(!g.has_edge(VertexId(1), VertexId(0)));
    }

    #[test]
    fn build_preserves_insertion_order_of_successors() {
        let g = Graph::build(&["0", "2", "0", "1", "0", "3"]).expect("build");
        assert_eq!(
            g.successors(VertexId(0)),
            &[VertexId(2), VertexId(1), VertexId(3)]
        );
    }

    #[test]
    fn build_rejects_non_integer_and_negative_tokens() {
        let err = Graph::build(&["0", "x"]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::InvalidToken {
                position: 1,
                token: "x".into()
            }
        );

        let err = Graph::build(&["-1", "0"]).unwrap_err();
        assert!(matches!(err, InvalidInputError::InvalidToken { position: 0, .. }));
    }

    #[test]
    fn build_rejects_odd_token_count() {
        let err = Graph::build(&["0", "1", "2"]).unwrap_err();
        assert_eq!(err, InvalidInputError::DanglingVertex { tokens: 3 });
    }

    #[test]
    fn build_rejects_sparse_ids() {
        let err = Graph::build(&["0", "5"]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::SparseVertexIds {
                vertex_count: 2,
                missing: 1
            }
        );
    }

    #[test]
    fn empty_input_builds_empty_graph() {
        let tokens: [&str; 0] = [];
        let g = Graph::build(&tokens).expect("build");
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn add_edge_updates_list_and_matrix_together() {
        let mut g = Graph::from_edges(&[(0, 1), (1, 2)]).expect("build");
        assert!(g.add_edge(VertexId(0), VertexId(2)));
        assert!(g.has_edge(VertexId(0), VertexId(2)));
        assert_eq!(g.successors(VertexId(0)), &[VertexId(1), VertexId(2)]);

        assert!(!g.add_edge(VertexId(0), VertexId(2)));
        assert!(!g.add_edge(VertexId(0), VertexId(9)));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn find_vertices_by_id_rejects_absent_ids() {
        let g = Graph::from_edges(&[(0, 1)]).expect("build");
        assert_eq!(
            g.find_vertices_by_id(1, 0).expect("present"),
            (VertexId(1), VertexId(0))
        );
        assert_eq!(
            g.find_vertices_by_id(0, 2).unwrap_err(),
            VertexNotFoundError { src: 0, dest: 2 }
        );
        assert!(g.find_vertices_by_id(-1, 0).is_err());
        assert!(g.contains_vertex_id(1));
        assert!(!g.contains_vertex_id(-3));
    }

    #[test]
    fn contains_vertex_id_checks_both_bounds() {
        let g = Graph::from_edges(&[(0, 1), (1, 2)]).expect("build");
        assert!(g.contains_vertex_id(0));
        assert!(g.contains_vertex_id(2));
        assert!(!g.contains_vertex_id(3));
        assert!(!g.contains_vertex_id(-1));
        assert!(!g.contains_vertex_id(i64::MIN));
    }

    #[test]
    fn edges_iterates_in_source_order() {
        let g = Graph::from_edges(&[(1, 0), (0, 1), (0, 0)]).expect("build");
        let edges: Vec<(usize, usize)> = g.edges().map(|(u, v)| (u.0, v.0)).collect();
        assert_eq!(edges, vec![(0, 1), (0, 0), (1, 0)]);
    }

    #[test]
    fn matrix_ignores_out_of_range_cells() {
        let mut m = AdjacencyMatrix::new(2);
        assert!(m.set(0, 1));
        assert!(!m.set(0, 1));
        assert!(!m.set(2, 0));
        assert!(!m.get(5, 5));
        assert!(m.get(0, 1));
        assert!(!m.get(1, 0));
        assert_eq!(m.count_set(), 1);
    }
}
