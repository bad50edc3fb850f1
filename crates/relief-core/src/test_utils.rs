//! Test fixtures for camp networks

use crate::edges::EdgeStore;
use crate::graph::ReliefGraph;
use crate::model::{CampId, Weight};
use crate::registry::CampRegistry;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a graph from camp ids and `(a, b, weight)` links.
pub fn graph_with(camps: &[u32], links: &[(u32, u32, Weight)]) -> ReliefGraph {
    let mut graph = ReliefGraph::new();
    for &id in camps {
        graph.register_camp(CampId(id), format!("Camp {id}"), format!("{id} Relief Rd"), "000");
    }
    for &(a, b, w) in links {
        graph.connect(CampId(a), CampId(b), w, false).unwrap();
    }
    graph
}

/// Registry and edge store for the free-standing algorithm functions.
pub fn network(camps: &[u32], links: &[(u32, u32, Weight)]) -> (CampRegistry, EdgeStore) {
    let graph = graph_with(camps, links);
    (graph.registry().clone(), graph.edges().clone())
}

/// Four camps on a ring, every hop costing 10.
pub fn four_camp_cycle() -> ReliefGraph {
    graph_with(
        &[1, 2, 3, 4],
        &[(1, 2, 10), (2, 3, 10), (3, 4, 10), (4, 1, 10)],
    )
}

/// Seeded generator so randomized graph tests are reproducible.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random graph on `camps` camps where each pair is linked with
/// probability one half and weights fall in `1..=max_weight`.
pub fn random_graph(rng: &mut impl Rng, camps: u32, max_weight: Weight) -> ReliefGraph {
    let ids: Vec<u32> = (1..=camps).collect();
    let mut links = Vec::new();
    for a in 1..=camps {
        for b in (a + 1)..=camps {
            if rng.gen_bool(0.5) {
                links.push((a, b, rng.gen_range(1..=max_weight)));
            }
        }
    }
    graph_with(&ids, &links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_with_builds_links() {
        let graph = graph_with(&[1, 2, 3], &[(1, 2, 4), (2, 3, 5)]);
        assert_eq!(graph.camp_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.camp(CampId(2)).map(|c| c.name.as_str()), Some("Camp 2"));
    }

    #[test]
    fn test_random_graph_is_reproducible() {
        let a = random_graph(&mut seeded_rng(7), 6, 9);
        let b = random_graph(&mut seeded_rng(7), 6, 9);
        assert_eq!(a.all_edges(), b.all_edges());
    }
}
