//! Relief Core — camp network model, spanning backbone and shortest paths

pub mod model;
pub mod error;
pub mod registry;
pub mod edges;
pub mod union_find;
pub mod mst;
pub mod shortest_path;
pub mod cost;
pub mod graph;


#[cfg(test)]
pub mod test_utils;

pub use model::{CampId, Camp, Connection, Resource, Weight, Need, INFINITE};
pub use error::{GraphError, Result};
pub use registry::CampRegistry;
pub use edges::{EdgeStore, ConnectOutcome};
pub use union_find::DisjointSet;
pub use mst::{SpanningForest, kruskal};
pub use shortest_path::{DistanceTable, Route, ShortestPaths, dijkstra};
pub use cost::{CostInputs, CostModel};
pub use graph::ReliefGraph;
