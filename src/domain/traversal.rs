//! Colour-driven depth-first traversals.
//!
//! Both traversals keep an explicit stack and always expand the unvisited
//! successor with the lowest id, so their visiting order depends only on the
//! edge relation and never on the order edges were read.

use crate::domain::graph::Graph;
use crate::domain::model::{Color, Vertex, VertexId};
use serde::Serialize;

/// Result of a single depth-first search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Traversal {
    /// Every vertex in the order it was first reached, including dead ends
    /// that were backtracked out of.
    pub discovered: Vec<Vertex>,
    /// Root-to-destination path; empty when the destination was not reached.
    pub path: Vec<Vertex>,
}

impl Traversal {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn discovered_ids(&self) -> Vec<usize> {
        self.discovered.iter().map(|v| v.id.0).collect()
    }

    pub fn path_ids(&self) -> Vec<usize> {
        self.path.iter().map(|v| v.id.0).collect()
    }
}

/// A graph whose vertex colours were just reset.
///
/// Only [`Graph::reset_colors`] hands one out, and running a traversal
/// consumes it, so every search starts from a clean colouring.
#[must_use = "colours are reset for a traversal; run one with `dfs`"]
pub struct Fresh<'g> {
    graph: &'g mut Graph,
}

impl Graph {
    pub fn reset_colors(&mut self) -> Fresh<'_> {
        self.clear_colors();
        Fresh { graph: self }
    }

    fn lowest_unvisited_successor(&self, of: VertexId) -> Option<VertexId> {
        self.adjacency[of.0]
            .iter()
            .copied()
            .filter(|s| self.vertices[s.0].is_unvisited())
            .min()
    }

    /// Runs an independent depth-first sweep from every vertex in id order,
    /// resetting colours before each one, and reports whether any sweep
    /// reaches a vertex that is still on its stack.
    ///
    /// Colours are left as the last sweep painted them.
    pub fn has_cycle(&mut self) -> bool {
        let mut stack: Vec<VertexId> = Vec::new();

        for root in 0..self.vertices.len() {
            let root = VertexId(root);
            self.clear_colors();
            self.paint(root, Color::Visiting);
            stack.clear();
            stack.push(root);

            while let Some(&top) = stack.last() {
                let mut lowest: Option<VertexId> = None;
                for &s in &self.adjacency[top.0] {
                    let succ = &self.vertices[s.0];
                    if succ.is_visiting() {
                        return true;
                    }
                    if succ.is_unvisited() && lowest.map_or(true, |l| s < l) {
                        lowest = Some(s);
                    }
                }

                match lowest {
                    None => {
                        self.paint(top, Color::Done);
                        stack.pop();
                    }
                    Some(next) => {
                        self.paint(next, Color::Visiting);
                        stack.push(next);
                    }
                }
            }
        }

        false
    }
}

impl Fresh<'_> {
    /// Depth-first search from `source` until `dest` is pushed or the
    /// reachable part of the graph is exhausted.
    ///
    /// # Panics
    ///
    /// If either id is not a vertex of the graph; resolve ids with
    /// [`Graph::find_vertices_by_id`] first.
    pub fn dfs(self, source: VertexId, dest: VertexId) -> Traversal {
        let graph = self.graph;
        assert!(
            source.0 < graph.vertices.len(),
            "source {source} is not a vertex of the graph"
        );
        assert!(
            dest.0 < graph.vertices.len(),
            "destination {dest} is not a vertex of the graph"
        );

        graph.paint(source, Color::Visiting);
        let mut stack = vec![source];
        let mut discovered = vec![graph.vertices[source.0]];
        let mut path = vec![graph.vertices[source.0]];

        if source == dest {
            return Traversal { discovered, path };
        }

        while let Some(&top) = stack.last() {
            match graph.lowest_unvisited_successor(top) {
                None => {
                    graph.paint(top, Color::Done);
                    stack.pop();
                    path.pop();
                }
                Some(next) => {
                    graph.paint(next, Color::Visiting);
                    stack.push(next);
                    let reached = graph.vertices[next.0];
                    discovered.push(reached);
                    path.push(reached);
                    if next == dest {
                        return Traversal { discovered, path };
                    }
                }
            }
        }

        Traversal {
            discovered,
            path: Vec::new(),
        }
    }
}
