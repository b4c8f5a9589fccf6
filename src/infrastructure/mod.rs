// Infrastructure layer: adapters, file I/O, serde, eventing
pub mod cycle_sweep;
pub mod edge_tokens;
pub mod event_ndjson;
pub mod report;
pub mod scc_kosaraju;
