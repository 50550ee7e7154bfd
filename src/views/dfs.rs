/*!
# Depth-First Views

A single traversal engine drives two view families: [`DfsVertices`] yields every vertex
reachable from the seed exactly once (the seed itself is not yielded), [`DfsEdges`]
yields the tree edge that discovered each of those vertices. Children are visited in the
order `edges_of` returns them, so for CSR graphs the walk is deterministic in input
order.

The views are single-pass: the view *is* the iterator, and `depth()` / `cancel()` are
called on it between `next()` calls. Cancellation is level-triggered and consumed by the
next advance.
*/

use smallvec::SmallVec;
use stream_bitset::{PrimIndex, bitset::BitSetImpl};

use crate::{
    edge::EdgeRef,
    error::{GraphError, Result},
    ops::{AdjacencyList, GraphOrder},
    vertex::VertexRef,
};

/// Cancellation policies understood by the depth-first views.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cancel {
    /// Terminate the traversal: the next advance reports exhaustion.
    All,
    /// Prune the subtree rooted at the vertex yielded last; its siblings are still
    /// visited.
    Branch,
}

/// Number of traversal frames kept inline before the stack spills to the heap.
const INLINE_FRAMES: usize = 8;

/// One level of the traversal: a vertex and the live cursor into its out-edges.
struct Frame<'a, G: AdjacencyList> {
    vertex: G::VId,
    edges: G::EdgeIter<'a>,
}

/// Shared engine behind the vertex and edge views.
///
/// The visited bitmap is allocated once at construction; advancing allocates only when
/// the frame stack outgrows its inline capacity.
struct DfsWalk<'a, G: AdjacencyList> {
    graph: &'a G,
    visited: BitSetImpl<G::VId>,
    stack: SmallVec<[Frame<'a, G>; INLINE_FRAMES]>,
    pending: Option<Cancel>,
}

impl<'a, G: AdjacencyList> DfsWalk<'a, G> {
    fn new(graph: &'a G, seed: G::VId) -> Result<Self> {
        let n = graph.len();
        let s = seed.to_usize().unwrap();
        if s >= n {
            return Err(GraphError::SeedOutOfRange {
                seed: s,
                vertex_count: n,
            });
        }

        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(seed);

        let mut stack = SmallVec::new();
        stack.push(Frame {
            vertex: seed,
            edges: graph.edges_of(seed),
        });

        Ok(Self {
            graph,
            visited,
            stack,
            pending: None,
        })
    }

    fn depth(&self) -> usize {
        self.stack.len()
    }

    fn cancel(&mut self, policy: Cancel) {
        self.pending = Some(policy);
    }

    /// Produces the next discovery event as `(source, edge)`.
    fn advance(&mut self) -> Option<(G::VId, EdgeRef<G::VId, G::EIdx>)> {
        match self.pending.take() {
            Some(Cancel::All) => {
                self.stack.clear();
                return None;
            }
            // unwind exactly the frame pushed by the most recent yield
            Some(Cancel::Branch) => {
                self.stack.pop();
            }
            None => {}
        }

        loop {
            let next = match self.stack.last_mut() {
                None => return None,
                Some(frame) => frame.edges.next().map(|e| (frame.vertex, e)),
            };

            match next {
                // row exhausted, backtrack
                None => {
                    self.stack.pop();
                }
                Some((source, e)) => {
                    let target = e.target_id();
                    if self.visited.get_bit(target) {
                        continue;
                    }
                    self.visited.set_bit(target);
                    self.stack.push(Frame {
                        vertex: target,
                        edges: self.graph.edges_of(target),
                    });
                    return Some((source, e));
                }
            }
        }
    }
}

/// Depth-first **vertex** view: yields `(id, handle)` for every vertex reachable from
/// the seed, each exactly once and in discovery order. The seed is not yielded.
///
/// # Examples
/// ```
/// use vgraphs::prelude::*;
///
/// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (0, 2), (1, 2)]).unwrap();
/// let mut dfs = g.dfs_vertices(0).unwrap();
///
/// assert_eq!(dfs.next().map(|(vid, _)| vid), Some(1));
/// assert_eq!(dfs.depth(), 2);
/// assert_eq!(dfs.next().map(|(vid, _)| vid), Some(2));
/// assert_eq!(dfs.depth(), 3);
/// assert_eq!(dfs.next(), None);
/// ```
pub struct DfsVertices<'a, G: AdjacencyList> {
    walk: DfsWalk<'a, G>,
}

impl<'a, G: AdjacencyList> DfsVertices<'a, G> {
    /// Starts a depth-first walk at `seed`.
    ///
    /// # Errors
    /// [`GraphError::SeedOutOfRange`] if `seed >= n`.
    pub fn new(graph: &'a G, seed: G::VId) -> Result<Self> {
        Ok(Self {
            walk: DfsWalk::new(graph, seed)?,
        })
    }

    /// Current stack height, i.e. the depth of the element yielded last. The seed sits
    /// at depth 1, its neighbors are yielded at depth 2.
    pub fn depth(&self) -> usize {
        self.walk.depth()
    }

    /// Requests cancellation; takes effect on (and is consumed by) the next advance.
    pub fn cancel(&mut self, policy: Cancel) {
        self.walk.cancel(policy);
    }

    /// Attaches a value function evaluated on every yielded vertex handle.
    pub fn with_values<F, T>(self, vvf: F) -> DfsVertexValues<'a, G, F>
    where
        F: FnMut(VertexRef<G::VId, G::EIdx>) -> T,
    {
        DfsVertexValues { inner: self, vvf }
    }
}

impl<'a, G: AdjacencyList> Iterator for DfsVertices<'a, G> {
    type Item = (G::VId, VertexRef<G::VId, G::EIdx>);

    fn next(&mut self) -> Option<Self::Item> {
        let (_, e) = self.walk.advance()?;
        Some((e.target_id(), self.walk.graph.target(e)))
    }
}

/// [`DfsVertices`] with a vertex-value function attached: yields
/// `(id, handle, vvf(handle))`.
pub struct DfsVertexValues<'a, G: AdjacencyList, F> {
    inner: DfsVertices<'a, G>,
    vvf: F,
}

impl<'a, G: AdjacencyList, F> DfsVertexValues<'a, G, F> {
    /// See [`DfsVertices::depth`].
    pub fn depth(&self) -> usize {
        self.inner.depth()
    }

    /// See [`DfsVertices::cancel`].
    pub fn cancel(&mut self, policy: Cancel) {
        self.inner.cancel(policy);
    }
}

impl<'a, G, F, T> Iterator for DfsVertexValues<'a, G, F>
where
    G: AdjacencyList,
    F: FnMut(VertexRef<G::VId, G::EIdx>) -> T,
{
    type Item = (G::VId, VertexRef<G::VId, G::EIdx>, T);

    fn next(&mut self) -> Option<Self::Item> {
        let (vid, v) = self.inner.next()?;
        let value = (self.vvf)(v);
        Some((vid, v, value))
    }
}

/// Depth-first **edge** view: yields the tree edge that discovered each vertex, paired
/// with the discovered (target) id — or with both endpoint ids in the sourced variant.
///
/// # Examples
/// ```
/// use vgraphs::prelude::*;
///
/// let g: CsrGraph<u32> =
///     CsrGraph::from_edges([(0u32, 1u32, 85u32), (1, 2, 80)]).unwrap();
///
/// let hops: Vec<(u32, u32)> = g
///     .dfs_edges(0)
///     .unwrap()
///     .map(|(vid, e)| (vid, *g.edge_value(e)))
///     .collect();
/// assert_eq!(hops, vec![(1, 85), (2, 80)]);
///
/// let sourced: Vec<(u32, u32)> = g
///     .dfs_edges_sourced(0)
///     .unwrap()
///     .map(|(uid, vid, _)| (uid, vid))
///     .collect();
/// assert_eq!(sourced, vec![(0, 1), (1, 2)]);
/// ```
pub struct DfsEdges<'a, G: AdjacencyList, const SOURCED: bool = false> {
    walk: DfsWalk<'a, G>,
}

/// Depth-first edge view whose elements carry the source id as well.
pub type SourcedDfsEdges<'a, G> = DfsEdges<'a, G, true>;

impl<'a, G: AdjacencyList, const SOURCED: bool> DfsEdges<'a, G, SOURCED> {
    /// Starts a depth-first walk at `seed`.
    ///
    /// # Errors
    /// [`GraphError::SeedOutOfRange`] if `seed >= n`.
    pub fn new(graph: &'a G, seed: G::VId) -> Result<Self> {
        Ok(Self {
            walk: DfsWalk::new(graph, seed)?,
        })
    }

    /// See [`DfsVertices::depth`].
    pub fn depth(&self) -> usize {
        self.walk.depth()
    }

    /// See [`DfsVertices::cancel`].
    pub fn cancel(&mut self, policy: Cancel) {
        self.walk.cancel(policy);
    }

    /// Attaches a value function evaluated on every yielded edge handle.
    pub fn with_values<F, T>(self, evf: F) -> DfsEdgeValues<'a, G, F, SOURCED>
    where
        F: FnMut(EdgeRef<G::VId, G::EIdx>) -> T,
    {
        DfsEdgeValues { inner: self, evf }
    }
}

impl<'a, G: AdjacencyList> Iterator for DfsEdges<'a, G, false> {
    type Item = (G::VId, EdgeRef<G::VId, G::EIdx>);

    fn next(&mut self) -> Option<Self::Item> {
        let (_, e) = self.walk.advance()?;
        Some((e.target_id(), e))
    }
}

impl<'a, G: AdjacencyList> Iterator for DfsEdges<'a, G, true> {
    type Item = (G::VId, G::VId, EdgeRef<G::VId, G::EIdx>);

    fn next(&mut self) -> Option<Self::Item> {
        let (source, e) = self.walk.advance()?;
        Some((source, e.target_id(), e))
    }
}

/// [`DfsEdges`] with an edge-value function attached: the yielded tuples additionally
/// carry `evf(edge)`.
pub struct DfsEdgeValues<'a, G: AdjacencyList, F, const SOURCED: bool> {
    inner: DfsEdges<'a, G, SOURCED>,
    evf: F,
}

impl<'a, G: AdjacencyList, F, const SOURCED: bool> DfsEdgeValues<'a, G, F, SOURCED> {
    /// See [`DfsVertices::depth`].
    pub fn depth(&self) -> usize {
        self.inner.depth()
    }

    /// See [`DfsVertices::cancel`].
    pub fn cancel(&mut self, policy: Cancel) {
        self.inner.cancel(policy);
    }
}

impl<'a, G, F, T> Iterator for DfsEdgeValues<'a, G, F, false>
where
    G: AdjacencyList,
    F: FnMut(EdgeRef<G::VId, G::EIdx>) -> T,
{
    type Item = (G::VId, EdgeRef<G::VId, G::EIdx>, T);

    fn next(&mut self) -> Option<Self::Item> {
        let (vid, e) = self.inner.next()?;
        let value = (self.evf)(e);
        Some((vid, e, value))
    }
}

impl<'a, G, F, T> Iterator for DfsEdgeValues<'a, G, F, true>
where
    G: AdjacencyList,
    F: FnMut(EdgeRef<G::VId, G::EIdx>) -> T,
{
    type Item = (G::VId, G::VId, EdgeRef<G::VId, G::EIdx>, T);

    fn next(&mut self) -> Option<Self::Item> {
        let (uid, vid, e) = self.inner.next()?;
        let value = (self.evf)(e);
        Some((uid, vid, e, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{prelude::*, testing::routes_graph};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn vertex_order_matches_discovery() {
        let graph = routes_graph();

        let mut dfs = graph.dfs_vertices(0).unwrap();
        let mut order = Vec::new();
        let mut depths = Vec::new();
        while let Some((vid, v)) = dfs.next() {
            assert_eq!(vid, v.id());
            order.push(vid);
            depths.push(dfs.depth());
        }

        assert_eq!(order, vec![1, 2, 3, 8, 4, 5, 9, 7, 6]);
        assert_eq!(depths, vec![2, 3, 4, 5, 2, 3, 4, 3, 2]);
    }

    #[test]
    fn vertex_view_projects_values() {
        let graph = routes_graph();

        let names: Vec<String> = graph
            .dfs_vertices(0)
            .unwrap()
            .with_values(|v| graph.vertex_value_of(v).clone())
            .map(|(_, _, name)| name)
            .collect();

        assert_eq!(
            names,
            vec![
                "Mannheim",
                "Karlsruhe",
                "Augsburg",
                "München",
                "Würzburg",
                "Nürnberg",
                "Stuttgart",
                "Erfurt",
                "Kassel"
            ]
        );
    }

    #[test]
    fn edge_order_matches_discovery() {
        let graph = routes_graph();

        let hops: Vec<(u32, u32)> = graph
            .dfs_edges(0)
            .unwrap()
            .map(|(vid, e)| (vid, *graph.edge_value(e)))
            .collect();

        assert_eq!(
            hops,
            vec![
                (1, 85),
                (2, 80),
                (3, 250),
                (8, 84),
                (4, 217),
                (5, 103),
                (9, 183),
                (7, 186),
                (6, 173)
            ]
        );
    }

    #[test]
    fn sourced_edge_view_reports_both_endpoints() {
        let graph = routes_graph();

        let hops: Vec<(u32, u32)> = graph
            .dfs_edges_sourced(0)
            .unwrap()
            .map(|(uid, vid, _)| (uid, vid))
            .collect();

        assert_eq!(
            hops,
            vec![
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 8),
                (0, 4),
                (4, 5),
                (5, 9),
                (4, 7),
                (0, 6)
            ]
        );
    }

    #[test]
    fn edge_view_projects_values() {
        let graph = routes_graph();

        let head: Vec<(u32, u32)> = graph
            .dfs_edges(0)
            .unwrap()
            .with_values(|e| *graph.edge_value(e))
            .map(|(vid, _, km)| (vid, km))
            .take(2)
            .collect();
        assert_eq!(head, vec![(1, 85), (2, 80)]);

        let sourced_head: Vec<(u32, u32, u32)> = graph
            .dfs_edges_sourced(0)
            .unwrap()
            .with_values(|e| *graph.edge_value(e))
            .map(|(uid, vid, _, km)| (uid, vid, km))
            .take(2)
            .collect();
        assert_eq!(sourced_head, vec![(0, 1, 85), (1, 2, 80)]);
    }

    #[test]
    fn cancel_all_truncates_immediately() {
        let graph = routes_graph();

        let mut dfs = graph.dfs_vertices(0).unwrap();
        let mut count = 0;
        while let Some((vid, _)) = dfs.next() {
            count += 1;
            if vid == 2 {
                dfs.cancel(Cancel::All);
            }
        }
        assert_eq!(count, 2);

        let mut dfs = graph.dfs_edges(0).unwrap();
        let mut count = 0;
        while let Some((vid, _)) = dfs.next() {
            count += 1;
            if vid == 2 {
                dfs.cancel(Cancel::All);
            }
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn cancel_branch_skips_the_subtree() {
        let graph = routes_graph();

        let mut dfs = graph.dfs_vertices(0).unwrap();
        let mut order = Vec::new();
        while let Some((vid, _)) = dfs.next() {
            order.push(vid);
            if vid == 4 {
                dfs.cancel(Cancel::Branch);
            }
        }
        // the subtree below Würzburg (5, 9, 7) is pruned, its sibling Kassel is not
        assert_eq!(order, vec![1, 2, 3, 8, 4, 6]);

        let mut dfs = graph.dfs_edges(0).unwrap();
        let mut count = 0;
        while let Some((vid, _)) = dfs.next() {
            count += 1;
            if vid == 4 {
                dfs.cancel(Cancel::Branch);
            }
        }
        assert_eq!(count, 6);
    }

    #[test]
    fn cancel_branch_pops_exactly_one_frame() {
        // chain: pruning the first discovery unwinds everything
        let graph: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (1, 2)]).unwrap();
        let mut dfs = graph.dfs_vertices(0).unwrap();
        assert_eq!(dfs.next().map(|(vid, _)| vid), Some(1));
        dfs.cancel(Cancel::Branch);
        assert_eq!(dfs.next(), None);

        // fork: siblings of the pruned branch survive
        let graph: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (0, 2), (1, 3)]).unwrap();
        let mut dfs = graph.dfs_vertices(0).unwrap();
        assert_eq!(dfs.next().map(|(vid, _)| vid), Some(1));
        dfs.cancel(Cancel::Branch);
        let rest: Vec<u32> = dfs.map(|(vid, _)| vid).collect();
        assert_eq!(rest, vec![2]);
    }

    #[test]
    fn seed_out_of_range_is_rejected() {
        let graph: CsrGraph = CsrGraph::from_edges([(0u32, 1u32)]).unwrap();
        assert_eq!(
            graph.dfs_vertices(2).err(),
            Some(GraphError::SeedOutOfRange {
                seed: 2,
                vertex_count: 2
            })
        );

        let empty: CsrGraph = CsrGraph::new();
        assert!(empty.dfs_edges(0).is_err());
    }

    #[test]
    fn each_reachable_vertex_appears_exactly_once() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [10u32, 30] {
            for m in [n, n * 3] {
                let mut edges: Vec<(u32, u32)> = (0..m)
                    .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                    .collect();
                edges.sort_by_key(|&(s, _)| s);

                let graph: CsrGraph = CsrGraph::from_edges(edges.clone()).unwrap();
                let nv = graph.len() as u32;
                let seed = rng.random_range(0..nv);

                let discovered: Vec<u32> = graph
                    .dfs_vertices(seed)
                    .unwrap()
                    .map(|(vid, _)| vid)
                    .collect();

                // no vertex twice, seed never yielded
                let mut seen = vec![false; nv as usize];
                seen[seed as usize] = true;
                for &v in &discovered {
                    assert!(!seen[v as usize]);
                    seen[v as usize] = true;
                }

                // reachability closure computed independently of the traversal
                let mut reach = vec![false; nv as usize];
                reach[seed as usize] = true;
                loop {
                    let mut changed = false;
                    for &(s, t) in &edges {
                        if reach[s as usize] && !reach[t as usize] {
                            reach[t as usize] = true;
                            changed = true;
                        }
                    }
                    if !changed {
                        break;
                    }
                }
                assert_eq!(seen, reach);
            }
        }
    }

    #[test]
    fn depth_moves_by_single_levels() {
        let graph = routes_graph();

        let mut dfs = graph.dfs_vertices(0).unwrap();
        let mut previous = 1usize; // seed depth
        while dfs.next().is_some() {
            let depth = dfs.depth();
            assert!(depth >= 2);
            // descending deepens by exactly one level, backtracking may drop several
            assert!(depth <= previous + 1);
            previous = depth;
        }
    }
}
