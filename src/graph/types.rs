//! Core type definitions for the graph ADT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of vertex identities.
///
/// Vertices are created by the client before any graph sees them, so their
/// identities come from a process-wide counter rather than from a graph.
static NEXT_VERTEX_ID: AtomicU64 = AtomicU64::new(1);

/// Source of edge identities, shared by every graph: an edge id names at
/// most one logical edge in the process.
static NEXT_EDGE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        VertexId(id)
    }

    /// Allocate a fresh identity, never handed out before in this process
    pub fn next() -> Self {
        VertexId(NEXT_VERTEX_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        VertexId(id)
    }
}

/// Unique identifier for a logical edge
///
/// Both mirrored records of an undirected edge carry the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    /// Allocate a fresh identity, never handed out before in this process
    pub fn next() -> Self {
        EdgeId(NEXT_EDGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

/// Which side of a vertex an incidence query looks at.
///
/// Only meaningful for directed graphs; undirected graphs treat
/// `Incoming` exactly like `Outgoing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Outgoing,
    Incoming,
}

impl Direction {
    pub fn is_outgoing(self) -> bool {
        self == Direction::Outgoing
    }

    /// Direction actually used by a graph with the given orientation
    pub fn effective(self, directed: bool) -> Direction {
        if directed {
            self
        } else {
            Direction::Outgoing
        }
    }
}

impl From<bool> for Direction {
    /// `true` selects outgoing edges, `false` incoming ones
    fn from(outgoing: bool) -> Self {
        if outgoing {
            Direction::Outgoing
        } else {
            Direction::Incoming
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Outgoing => write!(f, "out"),
            Direction::Incoming => write!(f, "in"),
        }
    }
}
