//! Usecase layer: the analysis workflow + events.

pub mod analyze;
pub mod event;
pub mod stats;
