use crate::domain::graph::Graph;
use crate::domain::traits::CycleDetector;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::AnalysisStats;
use anyhow::Result;
use serde::Serialize;
use tokio::sync::mpsc;

/// What one analysis run hands to the report renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub discovered: Vec<usize>,
    pub path: Vec<usize>,
    pub new_edges: Vec<(usize, usize)>,
    pub has_cycle: bool,
}

pub async fn load_graph(
    tokens: &[String],
    sink: &Option<mpsc::Sender<AppEvent>>,
) -> Result<Graph> {
    emit(
        sink,
        AppEvent::PhaseStarted {
            name: "build_graph".into(),
        },
    )
    .await;
    let graph = Graph::build(tokens)?;
    emit(
        sink,
        AppEvent::GraphBuilt {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            distinct_edges: graph.distinct_edge_count(),
        },
    )
    .await;
    emit(
        sink,
        AppEvent::PhaseFinished {
            name: "build_graph".into(),
        },
    )
    .await;
    Ok(graph)
}

/// DFS from `src` to `dest`, then transitive closure, then cycle search.
///
/// The closure runs before the cycle search and leaves its edges in the
/// graph; adding reachability edges never creates or removes a cycle.
pub async fn analyze_graph(
    mut graph: Graph,
    src: i64,
    dest: i64,
    detector: &dyn CycleDetector,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(AnalysisReport, AnalysisStats)> {
    let mut stats = AnalysisStats {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        distinct_edges: graph.distinct_edge_count(),
        ..AnalysisStats::default()
    };

    let (source, target) = graph.find_vertices_by_id(src, dest)?;
    emit(
        &sink,
        AppEvent::QueryResolved {
            source: source.0,
            dest: target.0,
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "dfs".into() }).await;
    let traversal = graph.reset_colors().dfs(source, target);
    stats.discovered = traversal.discovered.len();
    stats.path_len = traversal.path.len();
    emit(
        &sink,
        AppEvent::DfsCompleted {
            discovered: stats.discovered,
            path_len: stats.path_len,
            found: traversal.found(),
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "dfs".into() }).await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "transitive_closure".into(),
        },
    )
    .await;
    let new_edges = graph.transitive_closure();
    stats.new_edges = new_edges.len();
    emit(
        &sink,
        AppEvent::ClosureComputed {
            new_edges: stats.new_edges,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "transitive_closure".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "cycle_search".into(),
        },
    )
    .await;
    let has_cycle = detector.has_cycle(&mut graph);
    stats.has_cycle = has_cycle;
    emit(&sink, AppEvent::CycleChecked { has_cycle }).await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "cycle_search".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;

    let report = AnalysisReport {
        discovered: traversal.discovered_ids(),
        path: traversal.path_ids(),
        new_edges,
        has_cycle,
    };
    Ok((report, stats))
}

/// Builds the graph from tokens and analyses it in one go.
pub async fn run_analysis(
    tokens: &[String],
    src: i64,
    dest: i64,
    detector: &dyn CycleDetector,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(AnalysisReport, AnalysisStats)> {
    let graph = load_graph(tokens, &sink).await?;
    analyze_graph(graph, src, dest, detector, sink).await
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
