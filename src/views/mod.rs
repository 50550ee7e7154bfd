/*!
# Views

Lazy iterator views over any graph implementing the trait contract.

- [`Vertexlist`] pairs ascending vertex ids with their handles.
- [`DfsVertices`] / [`DfsEdges`] walk the graph depth-first from a seed, yielding each
  discovered vertex (or the edge that discovered it) exactly once. Both report their
  current [`depth`](DfsVertices::depth) and honor [`Cancel`] requests between elements.

All views borrow the graph shared for their whole lifetime, so the graph cannot be
mutated while a view exists, and they allocate only at construction time.

The [`Traversal`] extension trait offers the views as methods on the graph itself.
*/

pub mod dfs;
pub mod vertexlist;

pub use dfs::*;
pub use vertexlist::*;

use crate::{error::Result, ops::AdjacencyList};

/// Offers the traversal views as methods of the graph representation.
///
/// Implemented for every [`AdjacencyList`].
pub trait Traversal: AdjacencyList {
    /// Returns a view pairing all vertex ids with their handles, ascending from zero.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (1, 2)]).unwrap();
    /// let ids: Vec<u32> = g.vertexlist().map(|(id, _)| id).collect();
    /// assert_eq!(ids, vec![0, 1, 2]);
    /// ```
    fn vertexlist(&self) -> Vertexlist<'_, Self> {
        Vertexlist::new(self)
    }

    /// Returns a vertexlist view over the id sub-range `[first, last)`.
    fn vertexlist_range(&self, first: Self::VId, last: Self::VId) -> Vertexlist<'_, Self> {
        Vertexlist::range(self, first, last)
    }

    /// Returns an iterator yielding the vertices reachable from `seed` in depth-first
    /// order; the seed itself is not yielded.
    ///
    /// # Errors
    /// [`GraphError::SeedOutOfRange`](crate::error::GraphError::SeedOutOfRange) if
    /// `seed >= n`.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (0, 2), (1, 2)]).unwrap();
    /// let order: Vec<u32> = g.dfs_vertices(0).unwrap().map(|(vid, _)| vid).collect();
    /// assert_eq!(order, vec![1, 2]);
    /// ```
    fn dfs_vertices(&self, seed: Self::VId) -> Result<DfsVertices<'_, Self>> {
        DfsVertices::new(self, seed)
    }

    /// Returns an iterator yielding the tree edges of a depth-first walk from `seed`,
    /// paired with the id of the vertex each edge discovered.
    ///
    /// # Errors
    /// [`GraphError::SeedOutOfRange`](crate::error::GraphError::SeedOutOfRange) if
    /// `seed >= n`.
    fn dfs_edges(&self, seed: Self::VId) -> Result<DfsEdges<'_, Self>> {
        DfsEdges::new(self, seed)
    }

    /// Like [`Traversal::dfs_edges`] but each element additionally carries the source id
    /// of the edge.
    fn dfs_edges_sourced(&self, seed: Self::VId) -> Result<SourcedDfsEdges<'_, Self>> {
        DfsEdges::new(self, seed)
    }
}

impl<G: AdjacencyList> Traversal for G {}
