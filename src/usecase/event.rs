use crate::usecase::stats::AnalysisStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphBuilt {
        vertices: usize,
        edges: usize,
        distinct_edges: usize,
    },

    QueryResolved {
        source: usize,
        dest: usize,
    },

    DfsCompleted {
        discovered: usize,
        path_len: usize,
        found: bool,
    },

    ClosureComputed {
        new_edges: usize,
    },

    CycleChecked {
        has_cycle: bool,
    },

    Finished {
        stats: AnalysisStats,
    },
}
