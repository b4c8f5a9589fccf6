use crate::domain::graph::Graph;
use crate::domain::model::VertexId;
use crate::domain::traits::CycleDetector;

/// Cycle detection through strongly connected components.
///
/// Linear in vertices plus edges and never touches vertex colours. A graph
/// is cyclic iff one of its components has more than one vertex or a
/// vertex with a self-loop.
pub struct KosarajuCycleDetector;

impl CycleDetector for KosarajuCycleDetector {
    fn has_cycle(&self, graph: &mut Graph) -> bool {
        let n = graph.vertex_count();
        let edges: Vec<Vec<usize>> = (0..n)
            .map(|u| graph.successors(VertexId(u)).iter().map(|v| v.0).collect())
            .collect();

        kosaraju_components(&edges)
            .iter()
            .any(|comp| comp.len() > 1 || edges[comp[0]].contains(&comp[0]))
    }
}

fn kosaraju_components(edges: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let n = edges.len();
    let mut rev: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (u, outs) in edges.iter().enumerate() {
        for &v in outs {
            rev[v].push(u);
        }
    }

    for outs in rev.iter_mut() {
        outs.sort_unstable();
        outs.dedup();
    }

    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut seen = vec![false; n];

    for start in 0..n {
        if seen[start] {
            continue;
        }
        iterative_finish_order(start, edges, &mut seen, &mut order);
    }

    let mut assigned = vec![false; n];
    let mut components: Vec<Vec<usize>> = Vec::new();

    for &v in order.iter().rev() {
        if assigned[v] {
            continue;
        }

        let mut stack = vec![v];
        assigned[v] = true;
        let mut comp = Vec::new();

        while let Some(x) = stack.pop() {
            comp.push(x);
            for &p in rev[x].iter() {
                if !assigned[p] {
                    assigned[p] = true;
                    stack.push(p);
                }
            }
        }

        comp.sort_unstable();
        components.push(comp);
    }

    components
}

fn iterative_finish_order(
    start: usize,
    edges: &[Vec<usize>],
    seen: &mut [bool],
    order: &mut Vec<usize>,
) {
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

    while let Some((v, next_i)) = stack.pop() {
        seen[v] = true;

        if next_i < edges[v].len() {
            let to = edges[v][next_i];
            stack.push((v, next_i + 1));
            if !seen[to] {
                stack.push((to, 0));
            }
            continue;
        }

        order.push(v);
    }
}
