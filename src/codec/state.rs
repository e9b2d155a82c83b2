//! Positional path/map state
//!
//! `PathMapState` holds the path segments and map codes of the current URL as
//! two parallel sequences. Every mutation keeps position `i` of `query` paired
//! with position `i` of `map`.

use super::path::{
    MAP_VALUES_SEP, PATH_SEPARATOR, facet_path_name, segment_matches, split_nonempty,
};
use crate::facets::{Facet, FacetOp, MAP_CATEGORY_CHAR};
use tracing::{debug, trace};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMapState {
    pub query: Vec<String>,
    pub map: Vec<String>,
}

impl PathMapState {
    /// Parse a `/`-separated path and a `,`-separated map
    ///
    /// Empty strings parse to empty sequences.
    #[must_use]
    pub fn parse(query: &str, map: &str) -> Self {
        Self {
            query: split_nonempty(query, PATH_SEPARATOR),
            map: split_nonempty(map, MAP_VALUES_SEP),
        }
    }

    #[must_use]
    pub fn render_query(&self) -> String {
        self.query.join(PATH_SEPARATOR)
    }

    #[must_use]
    pub fn render_map(&self) -> String {
        self.map.join(MAP_VALUES_SEP)
    }

    /// Whether segment and code counts agree
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.query.len() == self.map.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.query.len().min(self.map.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the entry matching both the facet path name and its map code
    #[must_use]
    pub fn position_of(&self, facet: &Facet) -> Option<usize> {
        let path_name = facet_path_name(facet);
        self.query
            .iter()
            .zip(&self.map)
            .position(|(segment, code)| {
                code == facet.code() && segment_matches(segment, &path_name)
            })
    }

    /// Index of the last category code
    #[must_use]
    pub fn last_category_index(&self) -> Option<usize> {
        self.map.iter().rposition(|code| code == MAP_CATEGORY_CHAR)
    }

    /// Remove the pair at `index` from both sequences
    ///
    /// Returns `false` and leaves the state untouched when `index` is out of
    /// range for either sequence.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.query.len() || index >= self.map.len() {
            return false;
        }
        self.query.remove(index);
        self.map.remove(index);
        true
    }

    /// Apply one facet operation
    pub fn apply(&mut self, facet: &Facet) {
        match facet.op() {
            FacetOp::Remove => self.remove(facet),
            FacetOp::Add if facet.kind.is_category() => self.add_category(facet),
            FacetOp::Add => self.push(facet_path_name(facet), facet.code()),
        }
    }

    fn remove(&mut self, facet: &Facet) {
        match self.position_of(facet) {
            Some(index) => {
                trace!(index, value = %facet.value, "removing facet");
                self.remove_at(index);
            }
            None => {
                debug!(
                    value = %facet.value,
                    code = facet.code(),
                    "no applied facet matches, skipping removal"
                );
            }
        }
    }

    fn add_category(&mut self, facet: &Facet) {
        match self.last_category_index() {
            Some(last) if last + 1 < self.map.len() => {
                // Other filters already sit right of the categories: keep the
                // category run contiguous.
                let at = last + 1;
                trace!(index = at, value = %facet.value, "inserting category after last category");
                self.query.insert(at.min(self.query.len()), facet.value.clone());
                self.map.insert(at, MAP_CATEGORY_CHAR.to_string());
            }
            _ => self.push(facet.value.clone(), MAP_CATEGORY_CHAR),
        }
    }

    fn push(&mut self, segment: String, code: &str) {
        trace!(segment = %segment, code, "appending facet");
        self.query.push(segment);
        self.map.push(code.to_string());
    }
}
