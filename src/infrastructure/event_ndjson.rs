use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphBuilt {
            vertices,
            edges,
            distinct_edges,
        } => {
            json!({"type":"graph_built","vertices":vertices,"edges":edges,"distinct_edges":distinct_edges})
        }
        AppEvent::QueryResolved { source, dest } => {
            json!({"type":"query_resolved","source":source,"dest":dest})
        }
        AppEvent::DfsCompleted {
            discovered,
            path_len,
            found,
        } => {
            json!({"type":"dfs_completed","discovered":discovered,"path_len":path_len,"found":found})
        }
        AppEvent::ClosureComputed { new_edges } => {
            json!({"type":"closure_computed","new_edges":new_edges})
        }
        AppEvent::CycleChecked { has_cycle } => {
            json!({"type":"cycle_checked","has_cycle":has_cycle})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
