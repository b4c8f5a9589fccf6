//! Domain layer: the graph store and its algorithms. Pure and synchronous.

pub mod closure;
pub mod error;
pub mod graph;
pub mod model;
pub mod traits;
pub mod traversal;
