/*!
# Graph Representation

This module contains the concrete graph storage backend.

- [`CsrGraph`] (Compressed Sparse Row)
  Stores adjacency lists in a single flattened array with offset indices.
  - Memory-efficient for sparse graphs.
  - Good cache locality and iteration speed.
  - Construction cost is paid once up front; the structure is immutable afterwards.
  - Optional parallel arrays carry per-edge and per-vertex values; a single slot
    carries a whole-graph value.

The container implements the full trait contract from [`crate::ops`], so views and
algorithms written against the traits work with it unchanged.
*/

pub mod csr;

pub use csr::*;
