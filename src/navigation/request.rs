//! Navigation request types
//!
//! Field names serialize in camelCase, the shape client-side runtimes expect.

use serde::Serialize;
use std::collections::BTreeMap;

/// Scroll directive applied after navigating
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollOptions {
    pub base_element_id: String,
    pub top: i32,
}

/// Path the runtime must leave un-normalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModifierIgnore {
    pub path: String,
}

/// Request handed to the navigation transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationRequest {
    /// Target path, always starting with `/`
    pub to: String,
    /// Encoded query string without the leading `?`
    pub query: String,
    pub scroll_options: ScrollOptions,
    pub modifiers_ignore: BTreeMap<String, ModifierIgnore>,
}

impl NavigationRequest {
    /// Value of a query parameter, decoded
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<String> {
        url::form_urlencoded::parse(self.query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

/// Current URL state a navigation starts from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Path without the leading `/`
    pub query: String,
    /// Map string as read from the map parameter
    pub map: String,
    /// Raw search string, with or without the leading `?`
    pub search: String,
}

impl Location {
    #[must_use]
    pub fn new(
        query: impl Into<String>,
        map: impl Into<String>,
        search: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            map: map.into(),
            search: search.into(),
        }
    }
}
