//! Integration tests for facetnav
//!
//! These tests drive the public API the way a search page does: derive the
//! category chain, turn clicks into facet batches, and navigate.

use facetnav::{
    CategoryFilter, CategoryNode, Facet, Location, NavigationGateway, PathMapState,
    build_query_and_map,
    category::{deselect_from, selected_chain},
    codec::fold,
    config::FacetnavConfig,
    navigation::RecordingNavigator,
};

/// Helper to build the tree `Shoes > Running > Trail`, with `Road` unselected
fn shoe_tree() -> CategoryNode {
    let trail = CategoryNode::new("3", "Trail").with_selected(true);
    let running = CategoryNode::new("2", "Running")
        .with_selected(true)
        .with_children(vec![trail, CategoryNode::new("4", "Road")]);
    CategoryNode::new("1", "Shoes")
        .with_selected(true)
        .with_children(vec![running])
}

fn gateway() -> NavigationGateway<RecordingNavigator> {
    NavigationGateway::new(FacetnavConfig::default(), RecordingNavigator::new())
}

#[test]
fn test_breadcrumb_deselect_navigates_to_parent() {
    let tree = shoe_tree();
    let filter = CategoryFilter::new(&tree, "c,c,c,b", false);
    let selection = filter.breadcrumb_click(1);

    let mut gateway = gateway();
    let location = Location::new("shoes/running/trail/nike", "c,c,c,b", "?map=c%2Cc%2Cc%2Cb");
    let request = gateway
        .navigate_to_facets(&location, selection.facets())
        .unwrap();

    assert_eq!(request.to, "/shoes/nike");
    assert_eq!(request.query_param("map").as_deref(), Some("b"));
    assert_eq!(gateway.navigator().requests().len(), 1);
}

#[test]
fn test_deselect_batch_order_does_not_matter() {
    let tree = shoe_tree();
    let chain = selected_chain(&tree);
    let mut facets: Vec<Facet> = deselect_from(&chain, 1)
        .into_iter()
        .map(CategoryNode::to_facet)
        .collect();

    let forward = fold(PathMapState::parse("shoes/running/trail/nike", "c,c,c,b"), &facets);
    facets.reverse();
    let backward = fold(PathMapState::parse("shoes/running/trail/nike", "c,c,c,b"), &facets);

    assert_eq!(forward, backward);
    assert_eq!(forward.render_query(), "shoes/nike");
}

#[test]
fn test_selecting_child_after_other_filters() {
    let tree = CategoryNode::new("1", "Shoes").with_selected(true).with_children(vec![
        CategoryNode::new("2", "Running"),
        CategoryNode::new("3", "Casual"),
    ]);
    let filter = CategoryFilter::new(&tree, "c,b,priceFrom", false);
    let child = &filter.selectable_children()[0];
    let selection = filter.child_click(child);

    let result = build_query_and_map("shoes/nike/0 TO 100", "c,b,priceFrom", selection.facets());
    assert_eq!(result.query, "shoes/running/nike/0 TO 100");
    assert_eq!(result.map, "b,priceFrom");
}

#[test]
fn test_session_hint_accumulates_across_navigations() {
    let mut gateway = gateway();
    let nike = Facet::new("nike", "b", "Brand", false);
    let red = Facet::new("Red", "specificationFilter_12", "Main Color", false);

    let first = gateway
        .navigate_to_facets(&Location::new("shoes", "c", ""), &[nike])
        .unwrap();
    assert!(first.modifiers_ignore.contains_key("nike/nike"));

    let second = gateway
        .navigate_to_facets(&Location::new("shoes/nike", "c,b", "map=b"), &[red])
        .unwrap();
    assert_eq!(second.to, "/shoes/nike/main-color_red");
    assert!(second.modifiers_ignore.contains_key("main-color_red/nike/main-color_red"));
    assert_eq!(second.query_param("map").as_deref(), Some("b"));
}

#[test]
fn test_remove_everything_drops_map_param() {
    let mut gateway = gateway();
    let location = Location::new("shoes/nike", "c,b", "order=price&map=c%2Cb");
    let request = gateway
        .navigate_to_facets(
            &location,
            &[Facet::new("nike", "b", "Brand", true), Facet::category("shoes", true)],
        )
        .unwrap();

    assert_eq!(request.to, "/");
    assert_eq!(request.query, "order=price");
}

#[test]
fn test_shallow_root_click_returns_map() {
    let tree = shoe_tree();
    let filter = CategoryFilter::new(&tree, "b", true);
    assert_eq!(
        filter.root_click(),
        Some(facetnav::CategorySelection::Map("b".to_string()))
    );
}
