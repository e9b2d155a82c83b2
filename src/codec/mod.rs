//! Path/map codec
//!
//! Folds a batch of facet operations over the current URL path and `map`
//! parameter. The path carries one human-readable segment per active filter,
//! the map carries one type code per filter at the same position:
//!
//! ```text
//! path: shoes / nike / color_red
//! map:  c     , b    , specificationFilter
//! ```
//!
//! Facets are applied left to right, each one seeing the state left by the
//! previous one. After the fold, category and specification codes are dropped
//! from the map (but not from the path) to produce the persisted `map` value.
//!
//! # Examples
//!
//! ```
//! use facetnav::codec::build_query_and_map;
//! use facetnav::facets::Facet;
//!
//! let result = build_query_and_map("shoes/nike", "c,b", &[Facet::category("running", false)]);
//! assert_eq!(result.query, "shoes/running/nike");
//! assert_eq!(result.map, "b");
//! ```

pub mod path;
pub mod state;

pub use path::{
    MAP_VALUES_SEP, PATH_SEPARATOR, decode_segment, facet_path_name, segment_matches,
};
pub use state::PathMapState;

use crate::facets::{Facet, MAP_CATEGORY_CHAR, is_specification_code};
use serde::Serialize;
use tracing::debug;

/// Rendered path and persisted map string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryAndMap {
    pub query: String,
    pub map: String,
}

/// Fold `facets` over `state` without post-processing
///
/// The returned state keeps segments and codes positionally aligned.
#[must_use]
pub fn fold(mut state: PathMapState, facets: &[Facet]) -> PathMapState {
    for facet in facets {
        state.apply(facet);
    }
    state
}

/// Drop category and specification codes from a map sequence
///
/// Applies to every code, including the ones that were already present before
/// the current batch.
#[must_use]
pub fn strip_persisted_codes(map: &[String]) -> Vec<String> {
    map.iter()
        .filter(|code| code.as_str() != MAP_CATEGORY_CHAR && !is_specification_code(code))
        .cloned()
        .collect()
}

/// Apply a batch of facets to the current path and map strings
///
/// Never fails: unmatched removals and empty batches leave the state as is.
#[must_use]
pub fn build_query_and_map(query: &str, map: &str, facets: &[Facet]) -> QueryAndMap {
    let state = fold(PathMapState::parse(query, map), facets);
    debug!(
        facets = facets.len(),
        query = %state.render_query(),
        map = %state.render_map(),
        "folded facet batch"
    );

    QueryAndMap {
        query: state.render_query(),
        map: strip_persisted_codes(&state.map).join(MAP_VALUES_SEP),
    }
}
