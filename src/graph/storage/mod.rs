//! Storage strategies for the graph ADT
//!
//! Each strategy implements [`Graph`](crate::graph::Graph) over a different
//! layout:
//!
//! |                  | edge list | adjacency list | adjacency map | adjacency matrix |
//! |------------------|-----------|----------------|---------------|------------------|
//! | insert vertex    | O(V)      | O(1)           | O(1)          | O(V²)            |
//! | insert edge      | O(1)*     | O(d)           | O(1)          | O(V)             |
//! | get edge         | O(E)      | O(d)           | O(1)          | O(V)             |
//! | out degree       | O(E)      | O(1)           | O(1)          | O(V)             |
//! | in degree        | O(E)      | O(V + E)       | O(1)          | O(V)             |
//! | remove vertex    | O(E)      | O(V + E)       | O(V + d)      | O(V²)            |
//! | remove edge      | O(E)      | O(d)           | O(1)          | O(V)             |
//! | parallel edges   | yes       | no             | no            | no               |
//!
//! *V* is the vertex count, *E* the edge count, *d* the vertex degree.
//! Matrix costs are dominated by the linear scan that maps a vertex to its
//! row; the edge list is the only storage that creates missing endpoints on
//! `insert_edge`.

pub mod adjacency_list;
pub mod adjacency_map;
pub mod adjacency_matrix;
pub mod edge_list;

pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_map::AdjacencyMapGraph;
pub use adjacency_matrix::AdjacencyMatrixGraph;
pub use edge_list::EdgeListGraph;

use super::adt::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Vertex-keyed map preserving insertion order
pub(crate) type VertexMap<V> = indexmap::IndexMap<super::types::VertexId, V, rustc_hash::FxBuildHasher>;

/// Name of a storage strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    EdgeList,
    AdjacencyList,
    #[default]
    AdjacencyMap,
    AdjacencyMatrix,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown storage strategy '{0}'")]
pub struct UnknownStrategy(pub String);

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::EdgeList,
        Strategy::AdjacencyList,
        Strategy::AdjacencyMap,
        Strategy::AdjacencyMatrix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::EdgeList => "edge_list",
            Strategy::AdjacencyList => "adjacency_list",
            Strategy::AdjacencyMap => "adjacency_map",
            Strategy::AdjacencyMatrix => "adjacency_matrix",
        }
    }

    /// Build an empty graph backed by this strategy
    pub fn build<T, W>(self, directed: bool) -> Box<dyn Graph<T, W>>
    where
        T: 'static,
        W: Clone + 'static,
    {
        match self {
            Strategy::EdgeList => Box::new(EdgeListGraph::new(directed)),
            Strategy::AdjacencyList => Box::new(AdjacencyListGraph::new(directed)),
            Strategy::AdjacencyMap => Box::new(AdjacencyMapGraph::new(directed)),
            Strategy::AdjacencyMatrix => Box::new(AdjacencyMatrixGraph::new(directed)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "edge_list" | "edges" => Ok(Strategy::EdgeList),
            "adjacency_list" | "list" => Ok(Strategy::AdjacencyList),
            "adjacency_map" | "map" => Ok(Strategy::AdjacencyMap),
            "adjacency_matrix" | "matrix" => Ok(Strategy::AdjacencyMatrix),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Checks shared by every storage; each storage module runs them against
/// its own graph type in both orientations.
#[cfg(test)]
pub(crate) mod tests {
    use crate::graph::{Direction, Graph, GraphError, Vertex};

    pub type TestGraph = dyn Graph<&'static str, i32>;

    fn with_vertices<G: Graph<&'static str, i32>>(graph: &mut G) -> [Vertex<&'static str>; 4] {
        let vertices = [
            Vertex::new("u"),
            Vertex::new("v"),
            Vertex::new("w"),
            Vertex::new("z"),
        ];
        assert_eq!(graph.insert_vertices(&vertices), 4);
        vertices
    }

    pub fn vertex_operations<G: Graph<&'static str, i32>>(make: impl Fn(bool) -> G) {
        for directed in [false, true] {
            let mut graph = make(directed);
            assert!(graph.is_empty());
            assert_eq!(graph.is_directed(), directed);

            let [u, v, _, _] = with_vertices(&mut graph);
            assert_eq!(graph.vertex_count(), 4);

            // Re-inserting the same handle is a no-op
            assert!(!graph.insert_vertex(u.clone()));
            assert_eq!(graph.vertex_count(), 4);

            graph.remove_vertex(&u).unwrap();
            assert_eq!(graph.vertex_count(), 3);
            assert!(!graph.contains_vertex(&u));
            assert!(graph.contains_vertex(&v));
            assert!(!graph.vertices().contains(&u));
        }
    }

    pub fn payload_equal_vertices_are_distinct<G: Graph<&'static str, i32>>(make: impl Fn(bool) -> G) {
        for directed in [false, true] {
            let mut graph = make(directed);
            let a = graph.add_vertex("twin");
            let b = graph.add_vertex("twin");
            assert_eq!(graph.vertex_count(), 2);

            graph.insert_edge(&a, &b, None).unwrap();
            assert_eq!(graph.degree(&a, Direction::Outgoing).unwrap(), 1);

            graph.remove_vertex(&a).unwrap();
            assert_eq!(graph.vertex_count(), 1);
            assert!(graph.contains_vertex(&b));
            assert_eq!(graph.edge_count(), 0);
        }
    }

    pub fn undirected_edge_counting<G: Graph<&'static str, i32>>(make: impl Fn(bool) -> G) {
        let mut graph = make(false);
        let [u, v, w, _] = with_vertices(&mut graph);

        graph.insert_edge(&u, &v, Some(1)).unwrap();
        assert_eq!(graph.edge_count(), 1);
        graph.insert_edge(&v, &w, Some(2)).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges().len(), 2);

        // Both orientations find the same logical edge
        let forward = graph.get_edge(&u, &v).unwrap().unwrap();
        let backward = graph.get_edge(&v, &u).unwrap().unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.weight(), Some(&1));
    }

    pub fn directed_asymmetry<G: Graph<&'static str, i32>>(make: impl Fn(bool) -> G) {
        let mut graph = make(true);
        let [u, v, _, _] = with_vertices(&mut graph);

        let edge = graph.insert_edge(&u, &v, Some(7)).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_edge(&u, &v).unwrap(), Some(edge.clone()));
        assert_eq!(graph.get_edge(&v, &u).unwrap(), None);
        assert!(graph.get_edges(&v, &u).unwrap().is_empty());

        let found = graph.get_edge(&u, &v).unwrap().unwrap();
        assert_eq!(found.endpoints(), (&u, &v));
        assert_eq!(found.weight(), Some(&7));
    }

    pub fn degree_and_incidence<G: Graph<&'static str, i32>>(make: impl Fn(bool) -> G) {
        let mut graph = make(false);
        let [u, v, w, z] = with_vertices(&mut graph);
        graph.insert_edge(&u, &v, Some(1)).unwrap();
        graph.insert_edge(&u, &w, Some(2)).unwrap();

        assert_eq!(graph.degree(&u, Direction::Outgoing).unwrap(), 2);
        assert_eq!(graph.degree(&v, Direction::Outgoing).unwrap(), 1);
        assert_eq!(graph.degree(&z, Direction::Outgoing).unwrap(), 0);
        // Direction is ignored when undirected
        assert_eq!(graph.degree(&u, Direction::Incoming).unwrap(), 2);
        assert_eq!(graph.degree(&v, Direction::Incoming).unwrap(), 1);

        let incident: Vec<_> = graph.incident_edges(&u, Direction::Outgoing).unwrap().collect();
        assert_eq!(incident.len(), 2);
        let mut neighbours: Vec<_> = incident.iter().map(|e| *e.opposite(&u).value()).collect();
        neighbours.sort();
        assert_eq!(neighbours, vec!["v", "w"]);
        assert_eq!(graph.incident_edges(&v, Direction::Incoming).unwrap().count(), 1);

        let mut digraph = make(true);
        let [a, b, c, _] = with_vertices(&mut digraph);
        digraph.insert_edge(&a, &b, Some(1)).unwrap();
        digraph.insert_edge(&a, &c, Some(2)).unwrap();

        assert_eq!(digraph.degree(&a, Direction::Outgoing).unwrap(), 2);
        assert_eq!(digraph.degree(&a, Direction::Incoming).unwrap(), 0);
        assert_eq!(digraph.degree(&b, Direction::Incoming).unwrap(), 1);
        assert_eq!(digraph.degree(&b, Direction::Outgoing).unwrap(), 0);

        assert_eq!(digraph.incident_edges(&a, Direction::Outgoing).unwrap().count(), 2);
        assert_eq!(digraph.incident_edges(&b, Direction::Incoming).unwrap().count(), 1);
        assert_eq!(digraph.incident_edges(&c, Direction::Incoming).unwrap().count(), 1);
        assert_eq!(digraph.incident_edges(&b, Direction::Outgoing).unwrap().count(), 0);

        let incoming: Vec<_> = digraph.incident_edges(&c, Direction::Incoming).unwrap().collect();
        assert_eq!(incoming[0].endpoints(), (&a, &c));
    }

    pub fn remove_vertex_cascades<G: Graph<&'static str, i32>>(make: impl Fn(bool) -> G) {
        for directed in [false, true] {
            let mut graph = make(directed);
            let [u, v, w, z] = with_vertices(&mut graph);
            graph.insert_edge(&u, &v, Some(1)).unwrap();
            graph.insert_edge(&w, &u, Some(2)).unwrap();
            graph.insert_edge(&v, &w, Some(3)).unwrap();
            graph.insert_edge(&z, &v, Some(4)).unwrap();

            assert_eq!(graph.remove_vertex(&u).unwrap(), 2);
            assert_eq!(graph.vertex_count(), 3);
            assert_eq!(graph.edge_count(), 2);
            assert_eq!(
                graph.degree(&u, Direction::Outgoing),
                Err(GraphError::VertexNotFound(u.id()))
            );
            assert!(graph.edges().iter().all(|e| !e.touches(u.id())));
            for vertex in [&v, &w, &z] {
                for direction in [Direction::Outgoing, Direction::Incoming] {
                    assert!(graph
                        .incident_edges(vertex, direction)
                        .unwrap()
                        .all(|e| !e.touches(u.id())));
                }
            }
        }
    }

    pub fn remove_edge_round_trip<G: Graph<&'static str, i32>>(make: impl Fn(bool) -> G) {
        for directed in [false, true] {
            let mut graph = make(directed);
            let [u, v, w, _] = with_vertices(&mut graph);
            graph.insert_edge(&v, &w, None).unwrap();
            let before = graph.edge_count();

            graph.insert_edge(&u, &v, Some(5)).unwrap();
            let edge = graph.get_edge(&u, &v).unwrap().unwrap();
            graph.remove_edge(&edge).unwrap();

            assert_eq!(graph.get_edge(&u, &v).unwrap(), None);
            assert_eq!(graph.get_edge(&v, &u).unwrap(), None);
            assert_eq!(graph.edge_count(), before);
            assert_eq!(graph.degree(&u, Direction::Outgoing).unwrap(), 0);

            // A second removal has nothing left to remove
            assert_eq!(graph.remove_edge(&edge), Err(GraphError::EdgeNotFound(edge.id())));
        }
    }

    pub fn undirected_removal_from_either_side<G: Graph<&'static str, i32>>(make: impl Fn(bool) -> G) {
        let mut graph = make(false);
        let [u, v, _, _] = with_vertices(&mut graph);
        graph.insert_edge(&u, &v, Some(9)).unwrap();

        let seen_from_v = graph.get_edge(&v, &u).unwrap().unwrap();
        graph.remove_edge(&seen_from_v).unwrap();

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(&u, Direction::Outgoing).unwrap(), 0);
        assert_eq!(graph.degree(&v, Direction::Outgoing).unwrap(), 0);
    }

    pub fn missing_vertex_errors<G: Graph<&'static str, i32>>(make: impl Fn(bool) -> G) {
        for directed in [false, true] {
            let mut graph = make(directed);
            let [u, _, _, _] = with_vertices(&mut graph);
            let ghost = Vertex::new("ghost");
            let missing = Err(GraphError::VertexNotFound(ghost.id()));

            assert_eq!(graph.degree(&ghost, Direction::Outgoing), missing);
            assert_eq!(graph.degree(&ghost, Direction::Incoming), missing);
            assert!(graph.incident_edges(&ghost, Direction::Outgoing).is_err());
            assert_eq!(graph.get_edge(&u, &ghost), Err(GraphError::VertexNotFound(ghost.id())));
            assert_eq!(graph.get_edge(&ghost, &u), Err(GraphError::VertexNotFound(ghost.id())));
            assert_eq!(graph.remove_vertex(&ghost), Err(GraphError::VertexNotFound(ghost.id())));
            assert_eq!(graph.vertex_count(), 4);
        }
    }

    pub fn self_loop<G: Graph<&'static str, i32>>(make: impl Fn(bool) -> G) {
        for directed in [false, true] {
            let mut graph = make(directed);
            let [u, v, _, _] = with_vertices(&mut graph);
            graph.insert_edge(&u, &u, Some(1)).unwrap();
            graph.insert_edge(&u, &v, Some(2)).unwrap();

            assert_eq!(graph.edge_count(), 2);
            assert_eq!(graph.degree(&u, Direction::Outgoing).unwrap(), 2);
            assert!(graph.get_edge(&u, &u).unwrap().unwrap().is_self_loop());

            assert_eq!(graph.remove_vertex(&u).unwrap(), 2);
            assert_eq!(graph.edge_count(), 0);
        }
    }

    pub fn foreign_edge_is_rejected<G: Graph<&'static str, i32>>(make: impl Fn(bool) -> G) {
        for directed in [false, true] {
            let mut first = make(directed);
            let [a, b, _, _] = with_vertices(&mut first);
            let foreign = first.insert_edge(&a, &b, Some(1)).unwrap();

            let mut second = make(directed);
            let [p, q, _, _] = with_vertices(&mut second);
            let own = second.insert_edge(&p, &q, Some(2)).unwrap();

            assert_eq!(second.remove_edge(&foreign), Err(GraphError::EdgeNotFound(foreign.id())));
            assert_eq!(second.edge_count(), 1);
            assert_eq!(second.get_edge(&p, &q).unwrap(), Some(own));
        }

        // Shared vertex handles do not make an edge shared
        let mut first = make(true);
        let mut second = make(true);
        let [u, v, w, _] = with_vertices(&mut first);
        second.insert_vertices(&[u.clone(), v.clone(), w.clone()]);
        let foreign = first.insert_edge(&u, &v, None).unwrap();
        second.insert_edge(&u, &w, None).unwrap();

        assert_eq!(second.remove_edge(&foreign), Err(GraphError::EdgeNotFound(foreign.id())));
        assert_eq!(second.edge_count(), 1);
    }

    pub fn undirected_orientation_follows_query<G: Graph<&'static str, i32>>(make: impl Fn(bool) -> G) {
        let mut graph = make(false);
        let [u, v, _, _] = with_vertices(&mut graph);
        let edge = graph.insert_edge(&u, &v, Some(6)).unwrap();

        let from_v = graph.get_edge(&v, &u).unwrap().unwrap();
        assert_eq!(from_v, edge);
        assert_eq!(from_v.origin(), &v);
        assert_eq!(from_v.destination(), &u);
        assert_eq!(from_v.weight(), Some(&6));

        for direction in [Direction::Outgoing, Direction::Incoming] {
            let incident: Vec<_> = graph.incident_edges(&v, direction).unwrap().collect();
            assert_eq!(incident.len(), 1);
            assert_eq!(incident[0].origin(), &v);
            assert_eq!(incident[0].opposite(&v), &u);
        }
        let from_u = graph.get_edge(&u, &v).unwrap().unwrap();
        assert_eq!(from_u.origin(), &u);
    }

    pub fn trait_object_dispatch(graph: &mut TestGraph) {
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        graph.insert_edge(&a, &b, Some(3)).unwrap();

        let stats = graph.statistics();
        assert_eq!(stats.vertex_count, 2);
        assert_eq!(stats.edge_count, 1);
        assert_eq!(stats.strategy, graph.strategy());
    }

    #[test]
    fn test_strategy_names() {
        use super::Strategy;

        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>(), Ok(strategy));
            assert_eq!(format!("{}", strategy), strategy.as_str());
        }
        assert_eq!("matrix".parse::<Strategy>(), Ok(Strategy::AdjacencyMatrix));
        assert_eq!("Adjacency-List".parse::<Strategy>(), Ok(Strategy::AdjacencyList));
        assert!("tree".parse::<Strategy>().is_err());
        assert_eq!(Strategy::default(), Strategy::AdjacencyMap);
    }

    #[test]
    fn test_build_every_strategy() {
        use super::Strategy;

        for strategy in Strategy::ALL {
            for directed in [false, true] {
                let mut graph = strategy.build::<&'static str, i32>(directed);
                assert_eq!(graph.strategy(), strategy);
                assert_eq!(graph.is_directed(), directed);
                trait_object_dispatch(graph.as_mut());
            }
        }
    }
}
