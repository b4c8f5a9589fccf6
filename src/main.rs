//! Binary entrypoint.
//!
//! This crate is split into Clean Architecture layers:
//! - domain: the graph store and its traversals, pure and synchronous
//! - usecase: the analysis workflow + progress events
//! - infrastructure: file reading, cycle detectors, event and report output
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    digraph_reach::interface::cli::run().await
}
