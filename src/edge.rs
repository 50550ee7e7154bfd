/*!
# Edge Primitives

This module defines the edge-side building blocks of the library.

- [`EdgeRef`] is the opaque edge handle handed out by graph containers.
- [`EdgeRecord`] is the input record consumed when loading edges.

An edge has no identity beyond its position in the flattened adjacency buffer; the handle
pairs that position with the stored target id so that resolving the far end of an edge is
a field read rather than an array lookup.
*/

/// Handle to an edge of a loaded graph.
///
/// Carries the edge's position in the flattened adjacency buffer together with the target
/// id stored there. Handles are plain `Copy` data and stay valid for as long as the graph
/// they were obtained from is not mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef<VId, EIdx> {
    index: EIdx,
    target: VId,
}

impl<VId: Copy, EIdx: Copy> EdgeRef<VId, EIdx> {
    /// Creates a new handle from a buffer position and the target stored there.
    ///
    /// Graph containers are responsible for only handing out positions that lie within
    /// their adjacency buffer.
    #[inline(always)]
    pub fn new(index: EIdx, target: VId) -> Self {
        Self { index, target }
    }

    /// Returns the position of the edge in the adjacency buffer.
    #[inline(always)]
    pub fn index(&self) -> EIdx {
        self.index
    }

    /// Returns the id of the vertex at the far end of the edge.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::prelude::*;
    ///
    /// let g: CsrGraph = CsrGraph::from_edges([(0u32, 2u32), (0, 1)]).unwrap();
    /// let targets: Vec<u32> = g.edges_of(0).map(|e| e.target_id()).collect();
    /// assert_eq!(targets, vec![2, 1]);
    /// ```
    #[inline(always)]
    pub fn target_id(&self) -> VId {
        self.target
    }
}

/// Input-edge record: a source/target id pair plus the value carried by the edge.
///
/// For unvalued graphs the value slot is `()` and records can be built straight from
/// `(source, target)` tuples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord<VId, EV> {
    /// Id of the vertex the edge leaves.
    pub source_id: VId,
    /// Id of the vertex the edge points to.
    pub target_id: VId,
    /// The value carried by the edge.
    pub value: EV,
}

impl<VId, EV> EdgeRecord<VId, EV> {
    /// Creates a new edge record.
    pub fn new(source_id: VId, target_id: VId, value: EV) -> Self {
        Self {
            source_id,
            target_id,
            value,
        }
    }
}

impl<VId> From<(VId, VId)> for EdgeRecord<VId, ()> {
    fn from(value: (VId, VId)) -> Self {
        Self::new(value.0, value.1, ())
    }
}

impl<VId, EV> From<(VId, VId, EV)> for EdgeRecord<VId, EV> {
    fn from(value: (VId, VId, EV)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl<VId, EV> From<&EdgeRecord<VId, EV>> for EdgeRecord<VId, EV>
where
    VId: Copy,
    EV: Clone,
{
    fn from(value: &EdgeRecord<VId, EV>) -> Self {
        Self::new(value.source_id, value.target_id, value.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_convert_from_tuples() {
        let unvalued: EdgeRecord<u32, ()> = (1u32, 2u32).into();
        assert_eq!(unvalued, EdgeRecord::new(1, 2, ()));

        let valued: EdgeRecord<u32, u64> = (1u32, 2u32, 85u64).into();
        assert_eq!(valued.value, 85);
        assert_eq!(EdgeRecord::from(&valued), valued);
    }
}
