//! matrix::subgraph
//!
//! Partitioning of a platform group into locally-connected clusters.
//!
//! # Architecture
//!
//! Within one platform group, an undirected edge joins units `p` and
//! `q` whenever `q` is a direct dependency of `p` and `q` belongs to
//! the same group. Dependency edges into other groups are dropped:
//! matrices are generated per group, and a cross-group edge cannot be
//! represented within one matrix. The connected components of this
//! graph are the subgraphs, each becoming one build leg.
//!
//! Components are computed with union-find (path compression plus union
//! by rank), so the partition needs no recursion and no assumption
//! about the directed graph being acyclic.
//!
//! # Ordering
//!
//! Subgraphs are emitted in order of their earliest member's position
//! in the group; members within a subgraph keep the stable group order.

use std::collections::HashMap;

use crate::core::catalog::{Catalog, UnitId};

use super::resolver;
use super::MatrixError;

/// Disjoint-set forest over dense indices.
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Create a forest of `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// Find the representative of `x`, compressing the path walked.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b`.
    pub fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }

    /// Whether `a` and `b` share a set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

/// Partition a platform group into maximal locally-connected subgraphs.
///
/// `members` is the group in its stable order. The result is a
/// partition of `members`: pairwise disjoint, exhaustive, with both
/// subgraph order and member order derived from the stable order. A
/// unit with no same-group edges forms a singleton subgraph.
///
/// # Errors
///
/// Propagates [`MatrixError::ManifestInconsistency`] from dependency
/// resolution; a dangling internal reference is fatal even when its
/// producer would have belonged to another group.
pub fn partition(catalog: &Catalog, members: &[UnitId]) -> Result<Vec<Vec<UnitId>>, MatrixError> {
    let positions: HashMap<UnitId, usize> = members
        .iter()
        .enumerate()
        .map(|(position, &id)| (id, position))
        .collect();

    let mut forest = UnionFind::new(members.len());
    for (position, &id) in members.iter().enumerate() {
        for dependency in resolver::direct_dependencies(catalog, id)? {
            // Cross-group edges are dropped here
            if let Some(&dep_position) = positions.get(&dependency) {
                forest.union(position, dep_position);
            }
        }
    }

    let mut cluster_of_root: HashMap<usize, usize> = HashMap::new();
    let mut clusters: Vec<Vec<UnitId>> = Vec::new();
    for (position, &id) in members.iter().enumerate() {
        let root = forest.find(position);
        match cluster_of_root.get(&root) {
            Some(&cluster) => clusters[cluster].push(id),
            None => {
                cluster_of_root.insert(root, clusters.len());
                clusters.push(vec![id]);
            }
        }
    }

    Ok(clusters)
}
