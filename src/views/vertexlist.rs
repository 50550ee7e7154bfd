/*!
# Vertexlist View

A lazy, forward-only enumeration producing `(id, handle)` pairs in ascending id order.

The iterator advances its vertex cursor and its id counter in lockstep and materializes
the pair only when stepped. By default the id equals the cursor position; a caller may
override the starting id ([`Vertexlist::range_from`]), in which case keeping the drifted
ids meaningful is the caller's contract.
*/

use std::iter::FusedIterator;

use stream_bitset::PrimIndex;

use crate::{ops::GraphOrder, vertex::VertexRef};

/// Paired `(id, handle)` enumeration over the vertices of a graph.
///
/// # Examples
/// ```
/// use vgraphs::prelude::*;
///
/// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (1, 2)]).unwrap();
/// for (id, v) in g.vertexlist() {
///     assert_eq!(id, v.id());
/// }
/// ```
pub struct Vertexlist<'a, G: GraphOrder> {
    graph: &'a G,
    cursor: usize,
    end: usize,
    next_id: usize,
}

impl<'a, G: GraphOrder> Vertexlist<'a, G> {
    /// Enumerates all vertices of the graph, ids ascending from zero.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            cursor: 0,
            end: graph.len(),
            next_id: 0,
        }
    }

    /// Enumerates the vertex sub-range `[first, last)`; the starting id is derived from
    /// `first`'s offset.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    /// use vgraphs::views::Vertexlist;
    ///
    /// let g: CsrGraph = CsrGraph::from_edges([(0u32, 1u32), (3, 2)]).unwrap();
    /// let ids: Vec<u32> = Vertexlist::range(&g, 1, 3).map(|(id, _)| id).collect();
    /// assert_eq!(ids, vec![1, 2]);
    /// ```
    pub fn range(graph: &'a G, first: G::VId, last: G::VId) -> Self {
        let first = first.to_usize().unwrap();
        Self {
            graph,
            cursor: first,
            end: last.to_usize().unwrap(),
            next_id: first,
        }
    }

    /// Enumerates the vertex sub-range `[first, last)` with a caller-chosen starting id.
    pub fn range_from(graph: &'a G, first: G::VId, last: G::VId, start_at: G::VId) -> Self {
        Self {
            graph,
            cursor: first.to_usize().unwrap(),
            end: last.to_usize().unwrap(),
            next_id: start_at.to_usize().unwrap(),
        }
    }
}

impl<'a, G: GraphOrder> Iterator for Vertexlist<'a, G> {
    type Item = (G::VId, VertexRef<G::VId, G::EIdx>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }

        let vertex = self
            .graph
            .find_vertex(G::VId::from_usize(self.cursor).unwrap())?;
        let id = G::VId::from_usize(self.next_id).unwrap();

        self.cursor += 1;
        self.next_id += 1;

        Some((id, vertex))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self
            .end
            .min(self.graph.len())
            .saturating_sub(self.cursor);
        (size, Some(size))
    }
}

impl<'a, G: GraphOrder> ExactSizeIterator for Vertexlist<'a, G> {}
impl<'a, G: GraphOrder> FusedIterator for Vertexlist<'a, G> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{prelude::*, testing::routes_graph};

    #[test]
    fn enumerates_all_vertices_in_order() {
        let graph = routes_graph();

        let pairs: Vec<(u32, u32)> = graph.vertexlist().map(|(id, v)| (id, v.id())).collect();
        assert_eq!(pairs.len(), 10);
        assert!(
            pairs
                .iter()
                .enumerate()
                .all(|(i, &(id, vid))| id == i as u32 && vid == i as u32)
        );

        let empty: CsrGraph = CsrGraph::new();
        assert!(empty.vertexlist().next().is_none());
    }

    #[test]
    fn sub_range_derives_its_start_id() {
        let graph = routes_graph();

        let pairs: Vec<(u32, u32)> = Vertexlist::range(&graph, 3, 6)
            .map(|(id, v)| (id, v.id()))
            .collect();
        assert_eq!(pairs, vec![(3, 3), (4, 4), (5, 5)]);
    }

    #[test]
    fn start_at_overrides_the_identifier() {
        let graph = routes_graph();

        let pairs: Vec<(u32, u32)> = Vertexlist::range_from(&graph, 3, 6, 0)
            .map(|(id, v)| (id, v.id()))
            .collect();
        assert_eq!(pairs, vec![(0, 3), (1, 4), (2, 5)]);
    }

    #[test]
    fn pairs_expose_live_handles() {
        let graph = routes_graph();

        assert_eq!(graph.vertexlist().len(), 10);
        let total: u32 = graph.vertexlist().map(|(_, v)| v.degree()).sum();
        assert_eq!(total, graph.number_of_edges());
    }
}
