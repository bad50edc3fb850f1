//! Core data structures for the camp network

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cost of a connection, or a total distance along a route.
pub type Weight = i64;

/// Sentinel weight: the connection exists but its cost is unknown,
/// or (in a distance table) the camp is unreachable.
pub const INFINITE: Weight = Weight::MAX;

/// Per-camp relief priority.
pub type Need = i64;

/// Unique identifier of a camp, chosen by whoever registers it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct CampId(pub u32);

impl fmt::Display for CampId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CampId {
    fn from(value: u32) -> Self {
        CampId(value)
    }
}

/// A named quantity of supplies held by a camp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub quantity: i64,
}

/// A registered relief camp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camp {
    pub id: CampId,
    pub name: String,
    pub address: String,
    pub contact: String,
    /// Relief priority; higher means more urgent.
    pub need: Need,
    /// Supplies in the order they were recorded.
    pub resources: Vec<Resource>,
}

impl Camp {
    /// Build a camp with default need and no resources.
    pub fn new(
        id: CampId,
        name: impl Into<String>,
        address: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Camp {
            id,
            name: name.into(),
            address: address.into(),
            contact: contact.into(),
            need: 0,
            resources: Vec::new(),
        }
    }
}

/// One undirected, weighted connection between two camps.
///
/// `src` and `dest` keep the orientation of the call that created the
/// connection; every lookup treats the pair as unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub src: CampId,
    pub dest: CampId,
    pub weight: Weight,
}

impl Connection {
    pub fn new(src: CampId, dest: CampId, weight: Weight) -> Self {
        Connection { src, dest, weight }
    }

    /// True if this connection links `a` and `b`, in either direction.
    pub fn joins(&self, a: CampId, b: CampId) -> bool {
        (self.src == a && self.dest == b) || (self.src == b && self.dest == a)
    }

    /// The endpoint opposite `id`, if `id` is an endpoint at all.
    pub fn other(&self, id: CampId) -> Option<CampId> {
        if self.src == id {
            Some(self.dest)
        } else if self.dest == id {
            Some(self.src)
        } else {
            None
        }
    }

    /// Whether the cost of this connection has been set.
    pub fn has_known_cost(&self) -> bool {
        self.weight != INFINITE
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_known_cost() {
            write!(f, "Camp {} - Camp {} Cost: {}", self.src, self.dest, self.weight)
        } else {
            write!(f, "Camp {} - Camp {} Cost: unknown", self.src, self.dest)
        }
    }
}
