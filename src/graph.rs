//! Directed graph stored as adjacency sets, with a depth-first path finder.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Graph lookup errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Vertex not found in graph")]
    VertexNotFound,
}

/// Directed graph over vertices of type `V`.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: HashMap<V, HashSet<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `v`. Returns `true` if it was not already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, HashSet::new());
        true
    }

    /// Insert the edge `from -> to`, adding either endpoint if missing.
    /// Returns `true` if the edge is new.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        self.add_vertex(to.clone());
        self.adjacency.entry(from).or_default().insert(to)
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Copy of the set of vertices reachable from `v` by one edge.
    pub fn adjacents(&self, v: &V) -> Result<HashSet<V>, GraphError> {
        self.adjacency
            .get(v)
            .cloned()
            .ok_or(GraphError::VertexNotFound)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    /// Iterate over all vertices in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Find some path from `from` to `to` by depth-first search.
    ///
    /// Exploration order follows hash-set iteration, so the path is valid but
    /// not necessarily the shortest. Returns `None` when either endpoint is
    /// absent or `to` is unreachable.
    pub fn one_path(&self, from: &V, to: &V) -> Option<Vec<V>> {
        if !self.contains_vertex(from) || !self.contains_vertex(to) {
            return None;
        }

        // Parent of each discovered vertex; the start has none.
        let mut trace: HashMap<V, Option<V>> = HashMap::new();
        let mut open = vec![from.clone()];
        trace.insert(from.clone(), None);

        let mut found = false;
        while let Some(v) = open.pop() {
            if &v == to {
                found = true;
                break;
            }
            match self.adjacents(&v) {
                Ok(adjacents) => {
                    for s in adjacents {
                        if !trace.contains_key(&s) {
                            trace.insert(s.clone(), Some(v.clone()));
                            open.push(s);
                        }
                    }
                }
                // Dead end; keep exploring the remaining branches.
                Err(GraphError::VertexNotFound) => continue,
            }
        }

        if !found {
            return None;
        }

        let mut path = Vec::new();
        let mut current = Some(to.clone());
        while let Some(v) = current {
            current = trace.get(&v).cloned().flatten();
            path.push(v);
        }
        path.reverse();
        Some(path)
    }
}

impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, adjacents) in &self.adjacency {
            write!(f, "{}:", v)?;
            for a in adjacents {
                write!(f, " {}", a)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
