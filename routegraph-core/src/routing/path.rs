use geo::{Coord, LineString};
use serde::Serialize;

use super::dijkstra::dijkstra_tree;
use crate::{
    Coordinate, Endpoint, Error, NodeKey, RouteGraph, Weight, model::RouteNode,
};

/// Outcome of a shortest-path query
pub type PathResult = Result<ShortestPath, Error>;

/// Ordered nodes from source to destination, both inclusive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    nodes: Vec<RouteNode>,
    total_weight: Weight,
}

impl ShortestPath {
    pub fn nodes(&self) -> &[RouteNode] {
        &self.nodes
    }

    /// Originating coordinate of each node along the path
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.nodes.iter().map(|node| node.coordinate).collect()
    }

    pub fn keys(&self) -> Vec<NodeKey> {
        self.nodes.iter().map(|node| node.key).collect()
    }

    /// Sum of edge weights along the path
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        self.nodes
            .iter()
            .map(|node| Coord::from(node.coordinate))
            .collect()
    }
}

/// Finds the cheapest directed path between two coordinates on `graph`.
///
/// Both coordinates are keyed with the graph's own canonicalizer.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if either key is not a node of `graph` (source is checked first)
/// - [`Error::NoPathFound`] if the destination cannot be reached from the source
///   at a finite distance
pub fn find_path(graph: &RouteGraph, source: Coordinate, destination: Coordinate) -> PathResult {
    let source_key = graph.key_of(source);
    let destination_key = graph.key_of(destination);

    let start = graph
        .node_index(&source_key)
        .ok_or(Error::NodeNotFound {
            endpoint: Endpoint::Source,
            key: source_key,
        })?;
    let target = graph
        .node_index(&destination_key)
        .ok_or(Error::NodeNotFound {
            endpoint: Endpoint::Destination,
            key: destination_key,
        })?;

    let tree = dijkstra_tree(graph, start, Some(target));
    let no_path = || Error::NoPathFound {
        from: source_key,
        to: destination_key,
    };

    let node_path = tree.path_to(target).ok_or_else(no_path)?;
    let total_weight = tree
        .distances
        .get(&target)
        .copied()
        .filter(|weight| weight.is_finite())
        .ok_or_else(no_path)?;

    let nodes = node_path
        .into_iter()
        .filter_map(|idx| graph.node_weight(idx).copied())
        .collect();

    Ok(ShortestPath {
        nodes,
        total_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphConfig, Precision, RouteStore, compile};

    fn coord(lng: f64, lat: f64) -> Coordinate {
        Coordinate::new(lng, lat).unwrap()
    }

    fn graph_of(routes: &[&[(f64, f64)]], config: GraphConfig) -> RouteGraph {
        let mut store = RouteStore::new();
        for points in routes {
            let coordinates: Vec<Coordinate> =
                points.iter().map(|&(lng, lat)| coord(lng, lat)).collect();
            store.commit_route(coordinates).unwrap();
        }
        compile(store.routes(), &config)
    }

    #[test]
    fn prefers_cheaper_detour_over_direct_edge() {
        // the first route reaches (2,0) in two hops through a far-away bend
        let graph = graph_of(
            &[
                &[(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)],
                &[(0.0, 0.0), (1.0, 0.0)],
                &[(1.0, 0.0), (2.0, 0.0)],
            ],
            GraphConfig::default(),
        );

        let path = find_path(&graph, coord(0.0, 0.0), coord(2.0, 0.0)).unwrap();
        assert_eq!(
            path.coordinates(),
            vec![coord(0.0, 0.0), coord(1.0, 0.0), coord(2.0, 0.0)]
        );
        assert_eq!(path.total_weight(), 2.0);
    }

    #[test]
    fn same_source_and_destination_is_single_node() {
        let graph = graph_of(&[&[(0.0, 0.0), (1.0, 0.0)]], GraphConfig::default());
        let path = find_path(&graph, coord(1.0, 0.0), coord(1.0, 0.0)).unwrap();
        assert_eq!(path.coordinates(), vec![coord(1.0, 0.0)]);
        assert_eq!(path.total_weight(), 0.0);
    }

    #[test]
    fn zero_weight_self_edge_does_not_loop() {
        let graph = graph_of(
            &[&[(0.0, 0.0), (0.0, 0.0), (0.0, 1.0), (0.0, 1.0)]],
            GraphConfig::default(),
        );
        let path = find_path(&graph, coord(0.0, 0.0), coord(0.0, 1.0)).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.total_weight(), 1.0);
    }

    #[test]
    fn reports_which_endpoint_is_missing() {
        let graph = graph_of(&[&[(0.0, 0.0), (1.0, 0.0)]], GraphConfig::default());

        let err = find_path(&graph, coord(9.0, 9.0), coord(1.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            Error::NodeNotFound {
                endpoint: Endpoint::Source,
                ..
            }
        ));

        let err = find_path(&graph, coord(0.0, 0.0), coord(9.0, 9.0)).unwrap_err();
        assert!(matches!(
            err,
            Error::NodeNotFound {
                endpoint: Endpoint::Destination,
                ..
            }
        ));
    }

    #[test]
    fn clicked_point_resolves_only_under_matching_precision() {
        let routes: &[&[(f64, f64)]] = &[&[(-74.009_012, 40.712_79), (-74.0, 40.72)]];
        let clicked = coord(-74.0090, 40.7128);

        let full = graph_of(routes, GraphConfig::default());
        assert!(matches!(
            find_path(&full, clicked, coord(-74.0, 40.72)),
            Err(Error::NodeNotFound { .. })
        ));

        let rounded = graph_of(routes, GraphConfig::with_precision(Precision::Decimals(4)));
        let path = find_path(&rounded, clicked, coord(-74.0, 40.72)).unwrap();
        // the node keeps the drawn coordinate, not the clicked one
        assert_eq!(path.coordinates()[0], coord(-74.009_012, 40.712_79));
    }

    #[test]
    fn huge_but_finite_segment_is_routable() {
        let graph = graph_of(&[&[(0.0, 1e200), (0.0, -1e200)]], GraphConfig::default());
        let path = find_path(&graph, coord(0.0, 1e200), coord(0.0, -1e200)).unwrap();
        assert_eq!(path.total_weight(), 2e200);
    }

    #[test]
    fn overflowing_distance_is_no_path() {
        let graph = graph_of(
            &[&[(0.0, -1e308), (0.0, 1e308), (0.0, -1e308), (1.0, -1e308)]],
            GraphConfig::default(),
        );
        // every way to (1, -1e308) from (0, 1e308) runs through a segment longer than f64::MAX
        let err = find_path(&graph, coord(0.0, 1e308), coord(1.0, -1e308)).unwrap_err();
        assert!(matches!(err, Error::NoPathFound { .. }));
    }

    #[test]
    fn line_string_follows_path_order() {
        let graph = graph_of(&[&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]], GraphConfig::default());
        let path = find_path(&graph, coord(0.0, 0.0), coord(1.0, 1.0)).unwrap();
        let line = path.to_line_string();
        let points: Vec<(f64, f64)> = line.coords().map(|c| (c.x, c.y)).collect();
        assert_eq!(points, vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
    }
}
