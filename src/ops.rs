/*!
# Graph Operations

Core graph traits and operations.

This module defines the **fundamental traits** that all graph representations in `vgraphs`
should implement (if possible). It covers:
- **Vertex and edge counts plus handle lookup** ([`GraphOrder`]).
- **Neighborhood access** ([`AdjacencyList`]).
- **Value access** ([`VertexValues`], [`EdgeValues`], [`GraphValue`]).

These traits form the backbone for views and algorithms to work across graph
representations without committing to a concrete storage layout. Handles returned by the
traits ([`VertexRef`], [`EdgeRef`]) are plain `Copy` data valid for the lifetime of the
borrow they were obtained under; shared borrows may be used concurrently, while any
mutation requires exclusive access and therefore cannot overlap with live handles.

# Examples
```
use vgraphs::prelude::*;

// Build a small directed graph
let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (0, 2), (2, 0)]).unwrap();

assert_eq!(g.number_of_vertices(), 3);
assert_eq!(g.number_of_edges(), 3);
assert_eq!(g.degree_of(0), 2);
```
*/

use stream_bitset::{PrimIndex, bitset::BitSetImpl};

use crate::{edge::EdgeRef, vertex::*};

/// Provides vertex/edge counts and constant-time handle lookup.
///
/// Every graph representation **must implement this trait**. Vertex ids are dense: a graph
/// with `n` vertices uses exactly the ids `0..n`.
///
/// # Examples
/// ```
/// use vgraphs::prelude::*;
///
/// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (1, 2)]).unwrap();
/// assert_eq!(g.number_of_vertices(), 3);
/// assert_eq!(g.len(), 3);
/// assert!(!g.is_empty());
/// assert_eq!(g.vertex_ids().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
pub trait GraphOrder {
    /// Vertex id type; wide enough for the vertex count.
    type VId: PrimIndex;

    /// Edge index type; wide enough for the edge count plus one sentinel.
    type EIdx: PrimIndex;

    /// Iterator over all vertex handles in ascending id order.
    ///
    /// Returned by [`GraphOrder::vertices`].
    type VertexIter<'a>: Iterator<Item = VertexRef<Self::VId, Self::EIdx>> + 'a
    where
        Self: 'a;

    /// Returns the number of vertices in the graph.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (1, 2)]).unwrap();
    /// assert_eq!(g.number_of_vertices(), 3);
    /// ```
    fn number_of_vertices(&self) -> Self::VId;

    /// Returns the number of edges in the graph.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (1, 2)]).unwrap();
    /// assert_eq!(g.number_of_edges(), 2);
    /// ```
    fn number_of_edges(&self) -> Self::EIdx;

    /// Returns the number of vertices as a `usize`.
    ///
    /// Equivalent to `number_of_vertices()` but as a `usize`.
    fn len(&self) -> usize {
        self.number_of_vertices().to_usize().unwrap()
    }

    /// Returns `true` if the graph has no vertices (and therefore no edges).
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let g: CsrGraph = CsrGraph::new();
    /// assert!(g.is_empty());
    /// ```
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all vertex ids in ascending order.
    ///
    /// Unlike [`GraphOrder::vertices`], this does not borrow `self` and can be used where
    /// additional mutable references are needed.
    fn vertex_ids(&self) -> VidRange<Self::VId> {
        VidRange::new_to(self.len())
    }

    /// Returns an iterator over all vertex handles in ascending id order.
    ///
    /// The sequence has length `number_of_vertices()` and each step is `O(1)`.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (1, 2)]).unwrap();
    /// let ids: Vec<u32> = g.vertices().map(|v| v.id()).collect();
    /// assert_eq!(ids, vec![0, 1, 2]);
    /// ```
    fn vertices(&self) -> Self::VertexIter<'_>;

    /// Returns the handle for a vertex id in constant time, or `None` if the id is out of
    /// range.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (1, 2)]).unwrap();
    /// assert_eq!(g.find_vertex(1).unwrap().id(), 1);
    /// assert!(g.find_vertex(3).is_none());
    /// ```
    fn find_vertex(&self, uid: Self::VId) -> Option<VertexRef<Self::VId, Self::EIdx>>;

    /// Returns an empty bitset with one entry per vertex.
    ///
    /// Useful for marking or filtering vertices.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (1, 2)]).unwrap();
    /// let bs = g.vertex_bitset_unset();
    /// assert!(!bs.get_bit(0));
    /// ```
    fn vertex_bitset_unset(&self) -> BitSetImpl<Self::VId> {
        BitSetImpl::new(self.number_of_vertices())
    }
}

/// Trait providing access to the outgoing edges of a vertex.
///
/// The order of edges within `edges_of(u)` is whatever the container persisted during
/// load; for CSR representations that is the input order of the source's edges. Many
/// views and algorithms rely on this trait for traversals.
///
/// # Examples
/// ```
/// use vgraphs::prelude::*;
///
/// let g: CsrGraph = CsrGraph::from_edges([(0u32, 2u32), (0, 1), (1, 2)]).unwrap();
///
/// assert_eq!(g.degree_of(0), 2);
/// let targets: Vec<u32> = g.edges_of(0).map(|e| e.target_id()).collect();
/// assert_eq!(targets, vec![2, 1]); // input order, not sorted
/// ```
pub trait AdjacencyList: GraphOrder + Sized {
    /// Iterator over the outgoing edges of a single vertex.
    ///
    /// Returned by [`AdjacencyList::edges_of`] and [`AdjacencyList::edges`].
    type EdgeIter<'a>: Iterator<Item = EdgeRef<Self::VId, Self::EIdx>> + ExactSizeIterator + 'a
    where
        Self: 'a;

    /// Returns an iterator over the outgoing edges of the vertex with id `u`.
    ///
    /// Obtaining the iterator is `O(1)`; iterating it is `O(degree)`.
    ///
    /// **Panics if `u >= n`.**
    fn edges_of(&self, u: Self::VId) -> Self::EdgeIter<'_>;

    /// Returns an iterator over the outgoing edges of a vertex handle.
    ///
    /// Equivalent to `edges_of(u.id())` but resolvable without consulting the offset
    /// array again.
    fn edges(&self, u: VertexRef<Self::VId, Self::EIdx>) -> Self::EdgeIter<'_>;

    /// Returns the number of outgoing edges of the vertex with id `u`.
    ///
    /// **Panics if `u >= n`.**
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (0, 2)]).unwrap();
    /// assert_eq!(g.degree_of(0), 2);
    /// assert_eq!(g.degree_of(2), 0);
    /// ```
    fn degree_of(&self, u: Self::VId) -> Self::EIdx;

    /// Returns the id of the vertex at the far end of an edge.
    #[inline(always)]
    fn target_id(&self, e: EdgeRef<Self::VId, Self::EIdx>) -> Self::VId {
        e.target_id()
    }

    /// Returns the handle of the vertex at the far end of an edge.
    ///
    /// Equivalent to `find_vertex(target_id(e))` for edges of this graph.
    ///
    /// **Panics if the edge's target lies outside the graph** (only possible for handles
    /// not produced by this graph).
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (1, 2)]).unwrap();
    /// let e = g.edges_of(0).next().unwrap();
    /// assert_eq!(g.target(e).id(), 1);
    /// ```
    fn target(&self, e: EdgeRef<Self::VId, Self::EIdx>) -> VertexRef<Self::VId, Self::EIdx> {
        self.find_vertex(e.target_id())
            .expect("edge target out of range")
    }
}

/// Read access to per-vertex values.
///
/// Only meaningful for graphs whose vertex-value slot is populated; a graph that never
/// loaded vertex values panics on access (documented per method).
///
/// # Examples
/// ```
/// use vgraphs::prelude::*;
///
/// let mut g: CsrGraph<(), &str> = CsrGraph::new();
/// g.load_edges([(0u32, 1u32), (1, 2)], |e| e.into()).unwrap();
/// g.load_vertices([(2u32, "c"), (0, "a")], |v| v.into(), 0).unwrap();
///
/// assert_eq!(*g.vertex_value(0), "a");
/// assert_eq!(*g.vertex_value(2), "c");
/// ```
pub trait VertexValues: GraphOrder {
    /// The value type stored per vertex.
    type VertexValue;

    /// Returns a reference to the value of the vertex with id `u`.
    ///
    /// **Panics if `u >= n` or if no vertex values were loaded.**
    fn vertex_value(&self, u: Self::VId) -> &Self::VertexValue;

    /// Returns a reference to the value of a vertex handle.
    ///
    /// **Panics if no vertex values were loaded.**
    fn vertex_value_of(&self, v: VertexRef<Self::VId, Self::EIdx>) -> &Self::VertexValue {
        self.vertex_value(v.id())
    }
}

/// Read access to per-edge values.
///
/// # Examples
/// ```
/// use vgraphs::prelude::*;
///
/// let g: CsrGraph<u32> = CsrGraph::from_edges([(0u32, 1u32, 85u32), (1, 2, 80)]).unwrap();
/// let e = g.edges_of(1).next().unwrap();
/// assert_eq!(*g.edge_value(e), 80);
/// ```
pub trait EdgeValues: AdjacencyList {
    /// The value type stored per edge.
    type EdgeValue;

    /// Returns a reference to the value carried by an edge.
    ///
    /// **Panics if the handle was not produced by this graph.**
    fn edge_value(&self, e: EdgeRef<Self::VId, Self::EIdx>) -> &Self::EdgeValue;
}

/// Read access to the single value attached to the whole graph.
///
/// # Examples
/// ```
/// use vgraphs::prelude::*;
///
/// let g: CsrGraph<(), (), u32> = CsrGraph::with_graph_value(42);
/// assert_eq!(*g.graph_value(), 42);
/// ```
pub trait GraphValue {
    /// The value type attached to the graph.
    type Value;

    /// Returns a reference to the graph's value.
    fn graph_value(&self) -> &Self::Value;
}
