/*!
`vgraphs` is a graph data structure & traversal library designed for graphs that are
- **v**alued : Vertices, edges and the graph itself may carry a typed value each (or none)
- **v**ertex-indexed : Vertices are numbered `0` to `n - 1` and all lookups are plain array offsets
- **v**iew-driven : Enumeration and search are exposed as lazy, cancellable iterator views

# Representation

Vertices are identified by a dense unsigned integer id (`u32` by default, configurable through
the `VId` type slot), edges by their position in the flattened adjacency buffer (`EIdx`).
The single storage backend is [`CsrGraph`](crate::repr::CsrGraph), a **Compressed Sparse Row**
container: one offset array per vertex plus one flattened target array, with optional parallel
value arrays for edge and vertex values. The structure is loaded once from a streaming record
source and is immutable afterwards, trading construction cost for compact storage and fast,
allocation-free queries.

### Value slots

The container is generic over three value slots `(EV, VV, GV)` which all default to `()`.
A unit slot stores nothing: `Vec<()>` never allocates, so an unvalued graph pays zero space
for the machinery. Non-unit slots keep their values in arrays parallel to the adjacency
buffers and expose them through the [`EdgeValues`](crate::ops::EdgeValues),
[`VertexValues`](crate::ops::VertexValues) and [`GraphValue`](crate::ops::GraphValue) traits.

# Design

Graph capabilities are modelled as traits in the [`ops`] module; algorithms and views are
generic over any implementer. Loading goes through the [`provider`] module which captures the
two optional capabilities of an input source (known length, cheap end access) so the loader
can pre-reserve its buffers without demanding more than single-pass iteration.

Traversals live in the [`views`] module: [`Vertexlist`](crate::views::Vertexlist) pairs ids
with vertex handles, [`DfsVertices`](crate::views::DfsVertices) and
[`DfsEdges`](crate::views::DfsEdges) walk the graph depth-first while reporting their depth
and honoring [`Cancel`](crate::views::Cancel) requests between elements.

# Usage

```
use vgraphs::prelude::*;

let mut graph: CsrGraph<u32, &str> = CsrGraph::new();
graph
    .load_edges([(0u32, 1u32, 85u32), (0, 2, 217), (1, 2, 80)], |e| e.into())
    .unwrap();
graph
    .load_vertices([(0u32, "a"), (1, "b"), (2, "c")], |v| v.into(), 0)
    .unwrap();

assert_eq!(graph.number_of_vertices(), 3);
assert_eq!(graph.degree_of(0), 2);

let order: Vec<u32> = graph.dfs_vertices(0).unwrap().map(|(vid, _)| vid).collect();
assert_eq!(order, vec![1, 2]);
```

# When to use

You should only use this library if the following apply:
- Your graphs are static after construction
- You want dense integer ids and value access without hashing
- Performance and memory layout are important

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive library for
general graphs in *Rust*.
*/

pub mod edge;
pub mod error;
pub mod ops;
pub mod provider;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod vertex;
pub mod views;

/// `vgraphs::prelude` includes definitions for records and handles, all graph operation
/// traits, the CSR container as well as all traversal views.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, ops::*, provider::*, repr::*, vertex::*, views::*};
}
