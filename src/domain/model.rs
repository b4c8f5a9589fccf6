use serde::Serialize;
use std::fmt;

/// Index of a vertex in the graph arena. Vertex ids are dense, so the id
/// doubles as the index into every per-vertex table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Traversal state of a vertex.
///
/// `Visiting` marks a vertex that is currently on the traversal stack; the
/// cycle search relies on that distinction from `Done`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Unvisited,
    Visiting,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vertex {
    pub id: VertexId,
    pub color: Color,
}

impl Vertex {
    pub fn new(id: usize) -> Self {
        Self {
            id: VertexId(id),
            color: Color::Unvisited,
        }
    }

    pub fn is_unvisited(&self) -> bool {
        self.color == Color::Unvisited
    }

    pub fn is_visiting(&self) -> bool {
        self.color == Color::Visiting
    }
}
