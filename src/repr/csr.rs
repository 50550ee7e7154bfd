/*!
# Compressed Sparse Row (CSR) Graph

This module provides the adjacency representation based on the **Compressed Sparse Row
(CSR)** format. It is designed for **memory efficiency** and **fast iteration** over
adjacency lists in sparse graphs.

[`CsrGraph`] stores all adjacency lists in two flattened arrays:

- `row_offsets`: one entry per vertex plus a terminating sentinel; entry `u` is the start
  of `u`'s edges in `col_targets`, the sentinel equals the edge count.
- `col_targets`: the target ids of all edges, grouped by source and kept in input order
  within each source.

Two optional arrays run parallel to these: `edge_values` (one entry per edge) and
`vertex_values` (one entry per vertex), plus a single graph-wide value. Unit-typed slots
occupy no memory at all.

### Invariants

After a successful load the following hold and justify unchecked interior accesses:

1. `row_offsets` is non-decreasing with `row_offsets[0] == 0`
2. `row_offsets.len() == n + 1` and the last entry equals `col_targets.len()`
3. every entry of `col_targets` is `< n`
4. `edge_values` (if used) has the length of `col_targets`

Loading is streaming and single-pass: edge records must arrive ordered by source id
(targets may be unordered within a source), rows for skipped sources are materialized as
empty, and the final vertex count is the maximum of the provider's end-access hint, the
largest source and the largest target. A failed load clears the container.
*/

use itertools::Itertools;
use stream_bitset::PrimIndex;

use crate::{
    edge::{EdgeRecord, EdgeRef},
    error::{GraphError, Result},
    ops::*,
    provider::Provider,
    vertex::{VertexRecord, VertexRef},
};
use std::{iter::FusedIterator, marker::PhantomData, slice::Iter};

/// Compressed-Sparse-Row graph with optional edge, vertex and graph values.
///
/// The five type slots are the edge-value, vertex-value and graph-value types followed by
/// the vertex-id and edge-index widths. All slots default to the cheapest choice: unit
/// values and `u32` indices.
///
/// A graph is created empty, loaded exactly once (edges, and optionally vertex values in
/// either order) and is read-only afterwards. See the module docs for the layout.
///
/// # Examples
/// ```
/// use vgraphs::prelude::*;
///
/// let g: CsrGraph<u32> =
///     CsrGraph::from_edges([(0u32, 1u32, 85u32), (0, 4, 217), (1, 2, 80)]).unwrap();
///
/// assert_eq!(g.number_of_vertices(), 5);
/// assert_eq!(g.number_of_edges(), 3);
/// assert_eq!(g.raw_row_offsets(), &[0, 2, 3, 3, 3, 3]);
/// assert_eq!(g.raw_col_targets(), &[1, 4, 2]);
/// ```
#[derive(Clone)]
pub struct CsrGraph<EV = (), VV = (), GV = (), VId = u32, EIdx = u32>
where
    VId: PrimIndex,
    EIdx: PrimIndex,
{
    row_offsets: Vec<EIdx>,
    col_targets: Vec<VId>,
    edge_values: Vec<EV>,
    vertex_values: Vec<VV>,
    graph_value: GV,
}

impl<EV, VV, GV, VId, EIdx> Default for CsrGraph<EV, VV, GV, VId, EIdx>
where
    GV: Default,
    VId: PrimIndex,
    EIdx: PrimIndex,
{
    fn default() -> Self {
        Self::with_graph_value(GV::default())
    }
}

impl<EV, VV, GV, VId, EIdx> CsrGraph<EV, VV, GV, VId, EIdx>
where
    VId: PrimIndex,
    EIdx: PrimIndex,
{
    /// Creates an empty graph.
    pub fn new() -> Self
    where
        GV: Default,
    {
        Self::default()
    }

    /// Creates an empty graph carrying the given graph value.
    pub fn with_graph_value(value: GV) -> Self {
        Self {
            row_offsets: Vec::new(),
            col_targets: Vec::new(),
            edge_values: Vec::new(),
            vertex_values: Vec::new(),
            graph_value: value,
        }
    }

    /// Creates a graph directly from a literal edge list.
    ///
    /// The list must be ordered by source id, like any other edge input.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (1, 2), (2, 0)]).unwrap();
    /// assert_eq!(g.number_of_vertices(), 3);
    /// ```
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<EdgeRecord<VId, EV>>,
        EV: Clone,
        VV: Default + Clone,
        GV: Default,
    {
        let mut graph = Self::default();
        graph.load_edges(edges.into_iter().map_into().collect_vec(), |e| e)?;
        Ok(graph)
    }

    /// Reserves capacity for at least `n` vertices (plus the terminating sentinel).
    pub fn reserve_vertices(&mut self, n: usize) {
        self.row_offsets.reserve(n + 1);
        self.vertex_values.reserve(n);
    }

    /// Reserves capacity for at least `m` edges.
    pub fn reserve_edges(&mut self, m: usize) {
        self.col_targets.reserve(m);
        self.edge_values.reserve(m);
    }

    /// Loads the edges of the graph from a record provider.
    ///
    /// `eproj` extracts an [`EdgeRecord`] from each provider item; pass `|e| e.into()`
    /// when the items already convert. Records must be ordered by `source_id` (targets
    /// may be unordered within a source) and the graph must not contain edge data yet.
    ///
    /// The provider's optional capabilities are used to pre-reserve the arrays: a known
    /// length bounds the edge count, and cheap end access bounds the vertex count via the
    /// last record (valid because the sequence is ordered by source).
    ///
    /// Vertices that only appear as skipped sources receive empty edge ranges; the final
    /// vertex count also covers the largest target id. If vertex values were loaded
    /// beforehand but cover fewer vertices than the edges reveal, they are extended with
    /// default values.
    ///
    /// An empty input is a no-op and leaves the graph entirely empty.
    ///
    /// # Errors
    /// [`GraphError::NotEmpty`] if edge data was already loaded (the existing graph is
    /// untouched) and [`GraphError::OutOfOrder`] on the first record whose source id
    /// regresses (the container is cleared).
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let mut g: CsrGraph<u32> = CsrGraph::new();
    /// g.load_edges([(0u32, 1u32, 85u32), (0, 4, 217), (1, 2, 80)], |e| e.into())
    ///     .unwrap();
    /// assert_eq!(g.number_of_vertices(), 5);
    ///
    /// let mut g: CsrGraph = CsrGraph::new();
    /// let err = g.load_edges([(1u32, 0u32), (0, 1)], |e| e.into()).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     GraphError::OutOfOrder { index: 1, source_id: 0, previous_id: 1 }
    /// );
    /// assert!(g.is_empty());
    /// ```
    pub fn load_edges<P, F>(&mut self, edges: P, mut eproj: F) -> Result<()>
    where
        P: Provider,
        F: FnMut(P::Item) -> EdgeRecord<VId, EV>,
        VV: Default + Clone,
    {
        if !self.row_offsets.is_empty()
            || !self.col_targets.is_empty()
            || !self.edge_values.is_empty()
        {
            return Err(GraphError::NotEmpty);
        }

        // An ordered sequence ends on its largest source id; together with that record's
        // target this bounds the vertex count from below.
        let vertex_hint = edges.peek_last().map(|rec| {
            let e = eproj(rec);
            e.source_id
                .to_usize()
                .unwrap()
                .max(e.target_id.to_usize().unwrap())
                + 1
        });
        if let Some(n) = vertex_hint {
            self.reserve_vertices(n);
        }
        if let Some(m) = edges.len_hint() {
            self.reserve_edges(m);
        }

        let mut previous_id: Option<usize> = None;
        let mut max_target = 0usize;

        for (index, rec) in edges.records().enumerate() {
            let EdgeRecord {
                source_id,
                target_id,
                value,
            } = eproj(rec);
            let source = source_id.to_usize().unwrap();

            if let Some(prev) = previous_id {
                if source < prev {
                    self.clear();
                    return Err(GraphError::OutOfOrder {
                        index,
                        source_id: source,
                        previous_id: prev,
                    });
                }
            }

            // Open the row for `source`, implicitly closing every skipped row as empty.
            let cur_len = EIdx::from_usize(self.col_targets.len()).unwrap();
            while self.row_offsets.len() <= source {
                self.row_offsets.push(cur_len);
            }

            self.col_targets.push(target_id);
            self.edge_values.push(value);
            max_target = max_target.max(target_id.to_usize().unwrap());
            previous_id = Some(source);
        }

        // Empty input leaves the graph empty, sentinel row included.
        if previous_id.is_none() {
            return Ok(());
        }

        let vertex_count = vertex_hint
            .unwrap_or(0)
            .max(self.row_offsets.len())
            .max(max_target + 1);

        let sentinel = EIdx::from_usize(self.col_targets.len()).unwrap();
        self.row_offsets.resize(vertex_count + 1, sentinel);

        // Vertex values loaded up front may cover fewer vertices than the edges revealed.
        if !self.vertex_values.is_empty() && self.vertex_values.len() < vertex_count {
            self.vertex_values.resize(vertex_count, VV::default());
        }

        Ok(())
    }

    /// Loads per-vertex values from a record provider; ids may arrive in any order.
    ///
    /// `vproj` extracts a [`VertexRecord`] from each provider item. The value array grows
    /// to the maximum of the current vertex count, `vertex_count` and the provider's
    /// known length, filling new slots with `VV::default()`. Later records overwrite
    /// earlier ones for the same id, so repeating a load is idempotent.
    ///
    /// May be called before or after [`CsrGraph::load_edges`]; pass `vertex_count = 0`
    /// when no better bound is known.
    ///
    /// # Errors
    /// [`GraphError::IdOutOfRange`] if a record refers to an id beyond the grown array.
    /// On error the vertex values are cleared.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let mut g: CsrGraph<(), &str> = CsrGraph::new();
    /// g.load_edges([(0u32, 1u32), (1, 2)], |e| e.into()).unwrap();
    /// g.load_vertices([(1u32, "b"), (0, "a"), (2, "c")], |v| v.into(), 0).unwrap();
    /// assert_eq!(*g.vertex_value(1), "b");
    /// ```
    pub fn load_vertices<P, F>(&mut self, vertices: P, mut vproj: F, vertex_count: usize) -> Result<()>
    where
        P: Provider,
        F: FnMut(P::Item) -> VertexRecord<VId, VV>,
        VV: Default + Clone,
    {
        let target_len = self
            .len()
            .max(vertex_count)
            .max(vertices.len_hint().unwrap_or(0))
            .max(self.vertex_values.len());
        if self.vertex_values.len() < target_len {
            self.vertex_values.resize(target_len, VV::default());
        }

        for (index, rec) in vertices.records().enumerate() {
            let VertexRecord { id, value } = vproj(rec);
            let id = id.to_usize().unwrap();
            if id >= self.vertex_values.len() {
                let vertex_count = self.vertex_values.len();
                self.vertex_values.clear();
                return Err(GraphError::IdOutOfRange {
                    index,
                    id,
                    vertex_count,
                });
            }
            self.vertex_values[id] = value;
        }

        Ok(())
    }

    /// Loads edges and then vertex values. See [`CsrGraph::load_edges`] and
    /// [`CsrGraph::load_vertices`] for the individual contracts.
    pub fn load<PE, FE, PV, FV>(
        &mut self,
        edges: PE,
        eproj: FE,
        vertices: PV,
        vproj: FV,
    ) -> Result<()>
    where
        PE: Provider,
        FE: FnMut(PE::Item) -> EdgeRecord<VId, EV>,
        PV: Provider,
        FV: FnMut(PV::Item) -> VertexRecord<VId, VV>,
        VV: Default + Clone,
    {
        self.load_edges(edges, eproj)?;
        self.load_vertices(vertices, vproj, 0)
    }

    /// Releases all four arrays together, returning the graph to its freshly-created
    /// state. The graph value is kept.
    pub fn clear(&mut self) {
        self.row_offsets.clear();
        self.col_targets.clear();
        self.edge_values.clear();
        self.vertex_values.clear();
    }

    /// Returns the offset array: one entry per vertex plus the terminating sentinel.
    #[inline(always)]
    pub fn raw_row_offsets(&self) -> &[EIdx] {
        &self.row_offsets
    }

    /// Returns the flattened target array, grouped by source in input order.
    #[inline(always)]
    pub fn raw_col_targets(&self) -> &[VId] {
        &self.col_targets
    }

    /// Returns the edge-value array parallel to [`CsrGraph::raw_col_targets`].
    #[inline(always)]
    pub fn raw_edge_values(&self) -> &[EV] {
        &self.edge_values
    }

    /// Returns the vertex-value array, indexed by vertex id.
    ///
    /// Empty if no vertex values were loaded.
    #[inline(always)]
    pub fn raw_vertex_values(&self) -> &[VV] {
        &self.vertex_values
    }

    /// Returns a mutable reference to the value of the vertex with id `u`.
    ///
    /// **Panics if `u >= n` or if no vertex values were loaded.**
    pub fn vertex_value_mut(&mut self, u: VId) -> &mut VV {
        &mut self.vertex_values[u.to_usize().unwrap()]
    }

    /// Returns a mutable reference to the value carried by an edge.
    ///
    /// **Panics if the handle was not produced by this graph.**
    pub fn edge_value_mut(&mut self, e: EdgeRef<VId, EIdx>) -> &mut EV {
        &mut self.edge_values[e.index().to_usize().unwrap()]
    }

    /// Returns a mutable reference to the graph's value.
    pub fn graph_value_mut(&mut self) -> &mut GV {
        &mut self.graph_value
    }
}

impl<EV, VV, GV, VId, EIdx> GraphOrder for CsrGraph<EV, VV, GV, VId, EIdx>
where
    VId: PrimIndex,
    EIdx: PrimIndex,
{
    type VId = VId;
    type EIdx = EIdx;

    type VertexIter<'a>
        = CsrVertexIter<'a, VId, EIdx>
    where
        Self: 'a;

    fn number_of_vertices(&self) -> VId {
        VId::from_usize(self.row_offsets.len().saturating_sub(1)).unwrap()
    }

    fn number_of_edges(&self) -> EIdx {
        EIdx::from_usize(self.col_targets.len()).unwrap()
    }

    fn vertices(&self) -> CsrVertexIter<'_, VId, EIdx> {
        CsrVertexIter {
            offsets: &self.row_offsets,
            next: 0,
            _vid: PhantomData,
        }
    }

    fn find_vertex(&self, uid: VId) -> Option<VertexRef<VId, EIdx>> {
        let u = uid.to_usize().unwrap();
        (u + 1 < self.row_offsets.len())
            .then(|| VertexRef::new(uid, self.row_offsets[u], self.row_offsets[u + 1]))
    }
}

impl<EV, VV, GV, VId, EIdx> AdjacencyList for CsrGraph<EV, VV, GV, VId, EIdx>
where
    VId: PrimIndex,
    EIdx: PrimIndex,
{
    type EdgeIter<'a>
        = CsrEdgeIter<'a, VId, EIdx>
    where
        Self: 'a;

    fn edges_of(&self, u: VId) -> CsrEdgeIter<'_, VId, EIdx> {
        let u = u.to_usize().unwrap();
        let start = self.row_offsets[u].to_usize().unwrap();
        let end = self.row_offsets[u + 1].to_usize().unwrap();

        // using unchecked here is safe, since load_edges established that all entries
        // within `self.row_offsets` are
        //  (i) non-decreasing (i.e. produce a valid range) and
        //  (ii) are within bounds of `self.col_targets`
        let targets = unsafe { self.col_targets.get_unchecked(start..end) };
        CsrEdgeIter {
            targets: targets.iter(),
            index: start,
            _eidx: PhantomData,
        }
    }

    fn edges(&self, u: VertexRef<VId, EIdx>) -> CsrEdgeIter<'_, VId, EIdx> {
        let start = u.first_edge().to_usize().unwrap();
        let end = u.last_edge().to_usize().unwrap();
        CsrEdgeIter {
            targets: self.col_targets[start..end].iter(),
            index: start,
            _eidx: PhantomData,
        }
    }

    fn degree_of(&self, u: VId) -> EIdx {
        let u = u.to_usize().unwrap();
        self.row_offsets[u + 1] - self.row_offsets[u]
    }
}

impl<EV, VV, GV, VId, EIdx> VertexValues for CsrGraph<EV, VV, GV, VId, EIdx>
where
    VId: PrimIndex,
    EIdx: PrimIndex,
{
    type VertexValue = VV;

    fn vertex_value(&self, u: VId) -> &VV {
        &self.vertex_values[u.to_usize().unwrap()]
    }
}

impl<EV, VV, GV, VId, EIdx> EdgeValues for CsrGraph<EV, VV, GV, VId, EIdx>
where
    VId: PrimIndex,
    EIdx: PrimIndex,
{
    type EdgeValue = EV;

    fn edge_value(&self, e: EdgeRef<VId, EIdx>) -> &EV {
        &self.edge_values[e.index().to_usize().unwrap()]
    }
}

impl<EV, VV, GV, VId, EIdx> GraphValue for CsrGraph<EV, VV, GV, VId, EIdx>
where
    VId: PrimIndex,
    EIdx: PrimIndex,
{
    type Value = GV;

    fn graph_value(&self) -> &GV {
        &self.graph_value
    }
}

// ---------- Custom Iterators ----------
//
// As of now `#![feature(impl_trait_in_assoc_type)]` is not stable yet which is why we rely
// on custom wrappers where the *real* type would be obfuscated by a closure.

/// Iterator over all vertex handles of a [`CsrGraph`] in ascending id order.
pub struct CsrVertexIter<'a, VId, EIdx> {
    offsets: &'a [EIdx],
    next: usize,
    _vid: PhantomData<VId>,
}

impl<'a, VId, EIdx> Iterator for CsrVertexIter<'a, VId, EIdx>
where
    VId: PrimIndex,
    EIdx: PrimIndex,
{
    type Item = VertexRef<VId, EIdx>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (self.next + 1 < self.offsets.len()).then(|| {
            let v = VertexRef::new(
                VId::from_usize(self.next).unwrap(),
                self.offsets[self.next],
                self.offsets[self.next + 1],
            );
            self.next += 1;
            v
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.offsets.len().saturating_sub(1).saturating_sub(self.next);
        (size, Some(size))
    }
}

impl<'a, VId: PrimIndex, EIdx: PrimIndex> ExactSizeIterator for CsrVertexIter<'a, VId, EIdx> {}
impl<'a, VId: PrimIndex, EIdx: PrimIndex> FusedIterator for CsrVertexIter<'a, VId, EIdx> {}

/// Iterator over the outgoing edges of a single vertex of a [`CsrGraph`].
pub struct CsrEdgeIter<'a, VId, EIdx> {
    targets: Iter<'a, VId>,
    index: usize,
    _eidx: PhantomData<EIdx>,
}

impl<'a, VId, EIdx> Iterator for CsrEdgeIter<'a, VId, EIdx>
where
    VId: PrimIndex,
    EIdx: PrimIndex,
{
    type Item = EdgeRef<VId, EIdx>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let &target = self.targets.next()?;
        let e = EdgeRef::new(EIdx::from_usize(self.index).unwrap(), target);
        self.index += 1;
        Some(e)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }
}

impl<'a, VId: PrimIndex, EIdx: PrimIndex> ExactSizeIterator for CsrEdgeIter<'a, VId, EIdx> {}
impl<'a, VId: PrimIndex, EIdx: PrimIndex> FusedIterator for CsrEdgeIter<'a, VId, EIdx> {}

// ---------- Testing ----------
