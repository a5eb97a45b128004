use log::info;

use super::config::GraphConfig;
use crate::{RouteGraph, store::Route};

/// Compiles every route into a fresh graph
///
/// Each consecutive point pair becomes a directed edge weighted by the planar
/// distance of its raw coordinates. A later edge between the same ordered pair
/// of keys overwrites an earlier one. Never fails; no routes give an empty graph.
pub fn compile(routes: &[Route], config: &GraphConfig) -> RouteGraph {
    let mut graph = RouteGraph::new(config.canonicalizer());

    for route in routes {
        for (from, to) in route.segments() {
            let from_idx = graph.ensure_node(from);
            let to_idx = graph.ensure_node(to);
            graph.set_edge(from_idx, to_idx, from.planar_distance(&to));
        }
    }

    info!(
        "Compiled route graph: {} nodes, {} edges from {} routes",
        graph.node_count(),
        graph.edge_count(),
        routes.len()
    );

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Precision, RouteStore};

    fn store_with(routes: &[&[(f64, f64)]]) -> RouteStore {
        let mut store = RouteStore::new();
        for points in routes {
            let coordinates: Vec<Coordinate> = points
                .iter()
                .map(|&(lng, lat)| Coordinate::new(lng, lat).unwrap())
                .collect();
            store.commit_route(coordinates).unwrap();
        }
        store
    }

    fn key(graph: &RouteGraph, lng: f64, lat: f64) -> crate::NodeKey {
        graph.key_of(Coordinate::new(lng, lat).unwrap())
    }

    #[test]
    fn empty_store_gives_empty_graph() {
        let graph = compile(&[], &GraphConfig::default());
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn edges_follow_drawing_direction() {
        let store = store_with(&[&[(0.0, 0.0), (3.0, 4.0)]]);
        let graph = compile(store.routes(), &GraphConfig::default());

        let (a, b) = (key(&graph, 0.0, 0.0), key(&graph, 3.0, 4.0));
        assert_eq!(graph.edge(&a, &b).unwrap().weight(), 5.0);
        assert!(graph.edge(&b, &a).is_none());
    }

    #[test]
    fn shared_endpoints_join_routes() {
        let store = store_with(&[&[(0.0, 0.0), (1.0, 0.0)], &[(1.0, 0.0), (1.0, 1.0)]]);
        let graph = compile(store.routes(), &GraphConfig::default());

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn later_route_overwrites_duplicate_edge() {
        // both segments join the same keys once rounded, with different raw lengths
        let store = store_with(&[
            &[(0.0, 0.0), (1.0, 0.0)],
            &[(0.0, 0.0), (1.04, 0.0)],
        ]);
        let config = GraphConfig::with_precision(Precision::Decimals(1));
        let graph = compile(store.routes(), &config);

        assert_eq!(graph.edge_count(), 1);
        let weight = graph
            .edge(&key(&graph, 0.0, 0.0), &key(&graph, 1.0, 0.0))
            .unwrap()
            .weight();
        assert_eq!(weight, 1.04);
    }

    #[test]
    fn repeated_point_gives_zero_weight_self_edge() {
        let store = store_with(&[&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0)]]);
        let graph = compile(store.routes(), &GraphConfig::default());

        let a = key(&graph, 0.0, 0.0);
        assert_eq!(graph.edge(&a, &a).unwrap().weight(), 0.0);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn compilation_is_deterministic() {
        let store = store_with(&[
            &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)],
            &[(1.0, 1.0), (2.0, 0.5), (0.0, 0.0)],
        ]);
        let config = GraphConfig::default();
        assert_eq!(compile(store.routes(), &config), compile(store.routes(), &config));
    }
}
