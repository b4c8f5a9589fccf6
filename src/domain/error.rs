use thiserror::Error;

/// The edge token stream could not be turned into a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error(
        "invalid vertex in input at token {position}: {token:?} (vertices must be expressed as non-negative integers)"
    )]
    InvalidToken { position: usize, token: String },

    #[error("a vertex in the input maps to nowhere ({tokens} tokens, expected source/destination pairs)")]
    DanglingVertex { tokens: usize },

    #[error("vertex ids must be dense in 0..{vertex_count}: vertex {missing} never appears")]
    SparseVertexIds { vertex_count: usize, missing: usize },
}

/// A requested source or destination vertex is not part of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("vertices specified do not exist in the graph: {src} -> {dest}")]
pub struct VertexNotFoundError {
    pub src: i64,
    pub dest: i64,
}
