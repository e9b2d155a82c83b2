//! Path segment naming and comparison
//!
//! Segments are compared after percent-decoding and lowercasing both sides, so
//! `Camisetas%20Polo` in the URL matches a facet valued `camisetas polo` and
//! `%C3%89l%C3%A9gance` matches `élégance`.

use crate::facets::{FILTER_TITLE_SEP, Facet, SPACE_REPLACER};
use percent_encoding::percent_decode_str;

/// Separates path segments
pub const PATH_SEPARATOR: &str = "/";

/// Separates map codes
pub const MAP_VALUES_SEP: &str = ",";

/// Replace every whitespace character with `-`
///
/// Each whitespace character is replaced individually, runs are not collapsed.
///
/// # Examples
/// ```
/// # use facetnav::codec::path::replace_whitespace;
/// assert_eq!(replace_whitespace("Screen Size"), "Screen-Size");
/// assert_eq!(replace_whitespace("a  b"), "a--b");
/// ```
#[must_use]
pub fn replace_whitespace(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_whitespace() { SPACE_REPLACER } else { c })
        .collect()
}

/// Canonical path segment of a facet
///
/// Specification facets become `title_value` with both halves lowercased and
/// whitespace replaced; every other facet uses its raw value.
///
/// # Examples
/// ```
/// # use facetnav::facets::Facet;
/// # use facetnav::codec::path::facet_path_name;
/// let color = Facet::specification("Main Color", "Dark Red", false);
/// assert_eq!(facet_path_name(&color), "main-color_dark-red");
///
/// let brand = Facet::new("Nike", "b", "Brand", false);
/// assert_eq!(facet_path_name(&brand), "Nike");
/// ```
#[must_use]
pub fn facet_path_name(facet: &Facet) -> String {
    if facet.kind.is_specification() {
        format!(
            "{}{FILTER_TITLE_SEP}{}",
            replace_whitespace(&facet.title).to_lowercase(),
            replace_whitespace(&facet.value).to_lowercase()
        )
    } else {
        facet.value.clone()
    }
}

/// Percent-decode a segment, absorbing malformed UTF-8
#[must_use]
pub fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Compare a URL segment against a facet path name
///
/// Both sides are percent-decoded and then lowercased, so encoded non-ASCII
/// capitals fold like plain ones.
#[must_use]
pub fn segment_matches(segment: &str, path_name: &str) -> bool {
    decode_segment(segment).to_lowercase() == decode_segment(path_name).to_lowercase()
}

/// Split a separated string, treating the empty string as no elements
pub(crate) fn split_nonempty(s: &str, sep: &str) -> Vec<String> {
    if s.is_empty() {
        Vec::new()
    } else {
        s.split(sep).map(str::to_string).collect()
    }
}
