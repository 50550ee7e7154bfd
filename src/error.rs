/*!
# Errors

Error kinds surfaced by graph loading and traversal construction.

Loads fail fast on the first violation: the offending record index is reported and the
affected storage is cleared, so a failed load never leaves a half-committed graph behind.
Queries on a well-formed graph do not fail; passing an out-of-range id to a query method
is a contract violation that panics instead (documented per method).
*/

use thiserror::Error;

/// Errors produced while building or seeding work on a graph.
///
/// Record indices and ids are reported as `usize` regardless of the graph's
/// configured id width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// `load_edges` was called on a graph that already contains edge data.
    #[error("cannot load edges into a non-empty graph")]
    NotEmpty,

    /// An edge record's source id was smaller than its predecessor's.
    #[error("edge record {index}: source id {source_id} regresses below preceding source id {previous_id}")]
    OutOfOrder {
        /// Position of the offending record in the input sequence.
        index: usize,
        /// Source id of the offending record.
        source_id: usize,
        /// Source id of the record immediately before it.
        previous_id: usize,
    },

    /// A vertex-value record referred to an id beyond the established vertex count.
    #[error("vertex record {index}: id {id} exceeds the vertex count {vertex_count}")]
    IdOutOfRange {
        /// Position of the offending record in the input sequence.
        index: usize,
        /// The out-of-range vertex id.
        id: usize,
        /// Established vertex count at the time of the failure.
        vertex_count: usize,
    },

    /// A traversal was seeded with a vertex id outside the graph.
    #[error("traversal seed {seed} exceeds the vertex count {vertex_count}")]
    SeedOutOfRange {
        /// The rejected seed id.
        seed: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

/// Result alias for fallible graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = GraphError::OutOfOrder {
            index: 3,
            source_id: 1,
            previous_id: 4,
        };
        assert_eq!(
            err.to_string(),
            "edge record 3: source id 1 regresses below preceding source id 4"
        );

        let err = GraphError::SeedOutOfRange {
            seed: 10,
            vertex_count: 10,
        };
        assert_eq!(err.to_string(), "traversal seed 10 exceeds the vertex count 10");
    }
}
