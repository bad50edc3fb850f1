//! CLI command implementations

use crate::config::ShellConfig;
use crate::render;
use crate::shell::Session;
use relief_core::{CampId, ReliefGraph};
use std::io::Write;

/// Location the demo scenario searches from.
pub const DEMO_ORIGIN: CampId = CampId(1001);

pub fn shell(config: ShellConfig, json: bool) -> anyhow::Result<()> {
    tracing::info!("Starting interactive session");

    let mut session = Session::new(ReliefGraph::new(), config, json);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout.lock())?;

    tracing::info!(
        "Session ended with {} camps, {} connections",
        session.graph().camp_count(),
        session.graph().edge_count()
    );
    Ok(())
}

pub fn demo(json: bool) -> anyhow::Result<()> {
    let graph = demo_graph()?;
    tracing::info!("Demo network: {} camps, {} connections", graph.camp_count(), graph.edge_count());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let nearest = graph.nearest_camp(DEMO_ORIGIN)?;
    let nearest = nearest.and_then(|(id, d)| graph.camp(id).map(|c| (c, d)));
    render::nearest(&mut out, nearest, json)?;

    let table = graph.shortest_distances(DEMO_ORIGIN)?;
    render::distances(&mut out, DEMO_ORIGIN, &table, json)?;
    render::mst(&mut out, &graph.spanning_forest(), json)?;
    out.flush()?;
    Ok(())
}

/// A user location linked through two waypoints to two camps.
pub fn demo_graph() -> relief_core::Result<ReliefGraph> {
    let mut graph = ReliefGraph::new();

    graph.register_camp(CampId(1), "Riverside", "Unknown", "Unknown");
    graph.register_camp(CampId(2), "Hilltop", "Unknown", "Unknown");
    graph.register_camp(DEMO_ORIGIN, "User Location", "Unknown", "Unknown");
    graph.register_camp(CampId(1002), "Node A", "Unknown", "Unknown");
    graph.register_camp(CampId(1003), "Node B", "Unknown", "Unknown");

    graph.connect(DEMO_ORIGIN, CampId(1002), 10, false)?;
    graph.connect(DEMO_ORIGIN, CampId(1003), 20, false)?;
    graph.connect(CampId(1002), CampId(1), 30, false)?;
    graph.connect(CampId(1003), CampId(2), 40, false)?;

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_core::INFINITE;

    #[test]
    fn test_demo_graph_distances() {
        let graph = demo_graph().unwrap();
        let table = graph.shortest_distances(DEMO_ORIGIN).unwrap();
        assert_eq!(table.get(CampId(1002)), Some(10));
        assert_eq!(table.get(CampId(1)), Some(40));
        assert_eq!(table.get(CampId(2)), Some(60));
        assert!(table.iter().all(|(_, d)| d != INFINITE));
        assert_eq!(graph.nearest_camp(DEMO_ORIGIN).unwrap(), Some((CampId(1002), 10)));
    }
}
