//! Facet navigation gateway
//!
//! Composes codec output into a `NavigationRequest`:
//! - target path `/` + folded path
//! - query parameters with `map` set to the persisted map, or removed when empty
//! - scroll directive from configuration
//! - normalization-exception hint from the selection tracker

use super::error::NavigationError;
use super::navigator::Navigator;
use super::request::{Location, ModifierIgnore, NavigationRequest, ScrollOptions};
use crate::codec::{PATH_SEPARATOR, build_query_and_map};
use crate::config::FacetnavConfig;
use crate::facets::Facet;
use crate::selection::SelectionTracker;
use std::collections::BTreeMap;
use tracing::debug;
use url::form_urlencoded;

/// Set `key` to `value` in an encoded query string, or drop it when `value` is empty
///
/// The first existing occurrence is replaced in place and later ones are
/// dropped; a missing key is appended.
///
/// # Examples
/// ```
/// # use facetnav::navigation::set_query_param;
/// assert_eq!(set_query_param("?page=2&map=c", "map", "b"), "page=2&map=b");
/// assert_eq!(set_query_param("page=2&map=c", "map", ""), "page=2");
/// ```
#[must_use]
pub fn set_query_param(search: &str, key: &str, value: &str) -> String {
    let search = search.strip_prefix('?').unwrap_or(search);
    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(search.as_bytes())
        .into_owned()
        .collect();

    if value.is_empty() {
        pairs.retain(|(k, _)| k != key);
    } else {
        let mut replaced = false;
        pairs.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if replaced {
                return false;
            }
            value.clone_into(v);
            replaced = true;
            true
        });
        if !replaced {
            pairs.push((key.to_string(), value.to_string()));
        }
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Navigation entry point for facet clicks
///
/// Owns the session's `SelectionTracker` and the transport.
#[derive(Debug)]
pub struct NavigationGateway<N: Navigator> {
    config: FacetnavConfig,
    tracker: SelectionTracker,
    navigator: N,
}

impl<N: Navigator> NavigationGateway<N> {
    #[must_use]
    pub fn new(config: FacetnavConfig, navigator: N) -> Self {
        Self {
            config,
            tracker: SelectionTracker::new(),
            navigator,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &FacetnavConfig {
        &self.config
    }

    #[must_use]
    pub const fn tracker(&self) -> &SelectionTracker {
        &self.tracker
    }

    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Remember a facet for later normalization hints
    pub fn record(&mut self, facet: Option<&Facet>) {
        self.tracker.record(facet);
    }

    /// Build the request for applying `facets` at `location` without sending it
    #[must_use]
    pub fn request_for(&self, location: &Location, facets: &[Facet]) -> NavigationRequest {
        let result = build_query_and_map(&location.query, &location.map, facets);
        let query = set_query_param(&location.search, &self.config.map_query_key, &result.map);

        let hint = self.tracker.non_normalizable_fields(facets);
        let mut modifiers_ignore = BTreeMap::new();
        modifiers_ignore.insert(hint.clone(), ModifierIgnore { path: hint });

        NavigationRequest {
            to: format!("{PATH_SEPARATOR}{}", result.query),
            query,
            scroll_options: ScrollOptions {
                base_element_id: self.config.scroll_anchor.clone(),
                top: self.config.scroll_top(),
            },
            modifiers_ignore,
        }
    }

    /// Apply `facets` at `location` and navigate
    ///
    /// The batch is recorded in the tracker before the request is built, so its
    /// non-category facets appear twice in this request's hint: once from the
    /// batch and once from the tracker.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError` if the transport rejects the request.
    pub fn navigate_to_facets(
        &mut self,
        location: &Location,
        facets: &[Facet],
    ) -> Result<NavigationRequest, NavigationError> {
        for facet in facets {
            self.tracker.record(Some(facet));
        }

        let request = self.request_for(location, facets);
        debug!(to = %request.to, query = %request.query, "navigating to facets");
        self.navigator.navigate(&request)?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use crate::testing::{brand, category, spec};

    fn gateway() -> NavigationGateway<RecordingNavigator> {
        NavigationGateway::new(FacetnavConfig::default(), RecordingNavigator::new())
    }

    struct RejectingNavigator;

    impl Navigator for RejectingNavigator {
        fn navigate(&mut self, request: &NavigationRequest) -> Result<(), NavigationError> {
            Err(NavigationError::Rejected {
                to: request.to.clone(),
                reason: "offline".into(),
            })
        }
    }

    #[test]
    fn test_set_query_param_appends() {
        assert_eq!(set_query_param("", "map", "b"), "map=b");
        assert_eq!(set_query_param("?q=red+shoes", "map", "b,1"), "q=red+shoes&map=b%2C1");
    }

    #[test]
    fn test_set_query_param_replaces_first_and_drops_duplicates() {
        assert_eq!(
            set_query_param("map=c&page=2&map=b", "map", "1"),
            "map=1&page=2"
        );
    }

    #[test]
    fn test_set_query_param_removes_on_empty() {
        assert_eq!(set_query_param("map=c&page=2&map=b", "map", ""), "page=2");
        assert_eq!(set_query_param("", "map", ""), "");
    }

    #[test]
    fn test_request_targets_folded_path() {
        let gateway = gateway();
        let location = Location::new("shoes", "c", "?map=c&order=price");
        let request = gateway.request_for(&location, &[category("running", false)]);

        assert_eq!(request.to, "/shoes/running");
        assert_eq!(request.query, "order=price");
        assert_eq!(request.query_param("map"), None);
        assert_eq!(request.scroll_options.base_element_id, "search-result-anchor");
        assert_eq!(request.scroll_options.top, -130);
    }

    #[test]
    fn test_request_keeps_other_codes_in_map() {
        let gateway = gateway();
        let location = Location::new("shoes", "c", "map=c");
        let request = gateway.request_for(&location, &[brand("nike", false)]);

        assert_eq!(request.to, "/shoes/nike");
        assert_eq!(request.query_param("map").as_deref(), Some("b"));
    }

    #[test]
    fn test_hint_combines_batch_and_tracker() {
        let mut gateway = gateway();
        gateway.record(Some(&spec("Color", "Red", false)));
        let location = Location::new("shoes", "c", "");
        let request = gateway.request_for(&location, &[brand("nike", false)]);

        let hint = request.modifiers_ignore.get("nike/color_red").unwrap();
        assert_eq!(hint.path, "nike/color_red");
        assert_eq!(request.modifiers_ignore.len(), 1);
    }

    #[test]
    fn test_navigate_sends_and_records() {
        let mut gateway = gateway();
        let location = Location::new("shoes", "c", "");
        let sent = gateway
            .navigate_to_facets(&location, &[brand("nike", false)])
            .unwrap();

        assert_eq!(gateway.navigator().last(), Some(&sent));
        assert!(gateway.tracker().get("nike").is_some());
    }

    #[test]
    fn test_navigate_records_batch_before_building_hint() {
        let mut gateway = gateway();
        let location = Location::new("shoes", "c", "");
        let sent = gateway
            .navigate_to_facets(&location, &[brand("nike", false), category("running", false)])
            .unwrap();

        assert!(sent.modifiers_ignore.contains_key("nike/nike"));
        assert_eq!(gateway.tracker().len(), 2);
    }

    #[test]
    fn test_navigate_propagates_transport_error() {
        let mut gateway = NavigationGateway::new(FacetnavConfig::default(), RejectingNavigator);
        let err = gateway
            .navigate_to_facets(&Location::default(), &[brand("nike", false)])
            .unwrap_err();
        assert!(err.to_string().contains("/nike"));
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let gateway = gateway();
        let request = gateway.request_for(&Location::new("shoes", "c", ""), &[]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["to"], "/shoes");
        assert_eq!(json["scrollOptions"]["baseElementId"], "search-result-anchor");
        assert_eq!(json["modifiersIgnore"][""]["path"], "");
    }
}
