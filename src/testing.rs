//! Shared fixtures for the unit tests: the nine-edge German routes graph used
//! throughout the traversal and container tests.

use crate::{edge::EdgeRecord, provider::streamed, repr::CsrGraph, vertex::VertexRecord};

/// `(source, target, km)` route records, ordered by source.
pub(crate) const ROUTES: [(u32, u32, u32); 9] = [
    (0, 1, 85),
    (0, 4, 217),
    (0, 6, 173),
    (1, 2, 80),
    (2, 3, 250),
    (3, 8, 84),
    (4, 5, 103),
    (4, 7, 186),
    (5, 9, 183),
];

/// City names by vertex id.
pub(crate) const CITIES: [&str; 10] = [
    "Frankfurt",
    "Mannheim",
    "Karlsruhe",
    "Augsburg",
    "Würzburg",
    "Nürnberg",
    "Kassel",
    "Erfurt",
    "München",
    "Stuttgart",
];

/// Builds the routes graph with distances as edge values and city names as vertex
/// values.
pub(crate) fn routes_graph() -> CsrGraph<u32, String> {
    let mut graph = CsrGraph::new();
    graph
        .load_edges(ROUTES, |(s, t, km)| EdgeRecord::new(s, t, km))
        .unwrap();
    graph
        .load_vertices(
            streamed(CITIES.iter().enumerate()),
            |(id, name)| VertexRecord::new(id as u32, name.to_string()),
            0,
        )
        .unwrap();
    graph
}
