use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisStats {
    pub vertices: usize,
    pub edges: usize,
    pub distinct_edges: usize,
    pub discovered: usize,
    pub path_len: usize,
    pub new_edges: usize,
    pub has_cycle: bool,
}
