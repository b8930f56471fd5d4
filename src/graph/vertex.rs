//! Vertex handle
//!
//! A vertex is an identity plus a shared payload. Two handles compare equal
//! only when they carry the same [`VertexId`], so vertices with equal
//! payloads are still distinct graph elements.

use super::types::VertexId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A vertex in the graph
///
/// Cloning a handle is cheap and never clones the payload; graphs store
/// handles, not payloads.
pub struct Vertex<T> {
    /// Identity of this vertex
    id: VertexId,

    /// Client payload, shared between all clones of the handle
    value: Arc<T>,
}

impl<T> Vertex<T> {
    /// Create a new vertex with a fresh identity
    pub fn new(value: T) -> Self {
        Vertex {
            id: VertexId::next(),
            value: Arc::new(value),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Get the payload
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Clone for Vertex<T> {
    fn clone(&self) -> Self {
        Vertex {
            id: self.id,
            value: Arc::clone(&self.value),
        }
    }
}

impl<T> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Vertex<T> {}

impl<T> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("id", &self.id.as_u64())
            .field("value", &self.value)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_create_vertex() {
        let v = Vertex::new("u");
        assert_eq!(*v.value(), "u");
        assert_eq!(format!("{}", v), "u");
    }

    #[test]
    fn test_identity_equality() {
        let a = Vertex::new("same");
        let b = Vertex::new("same");

        // Equal payloads, distinct vertices
        assert_ne!(a, b);
        assert_eq!(a, a.clone());

        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(b.clone());
        set.insert(a.clone());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_clone_shares_payload() {
        let a = Vertex::new(String::from("payload"));
        let b = a.clone();
        assert!(std::ptr::eq(a.value(), b.value()));
        assert_eq!(a.id(), b.id());
    }
}
