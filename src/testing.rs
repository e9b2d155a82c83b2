//! Testing utilities for facetnav
//!
//! Facet and category tree builders shared by the unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::category::CategoryNode;
use crate::facets::{Facet, SPEC_FILTER};

/// Category facet
pub fn category(value: &str, selected: bool) -> Facet {
    Facet::category(value, selected)
}

/// Brand facet, map code `b`
pub fn brand(value: &str, selected: bool) -> Facet {
    Facet::new(value, "b", "Brand", selected)
}

/// Price range facet, map code `priceFrom`
pub fn price(value: &str, selected: bool) -> Facet {
    Facet::new(value, "priceFrom", "Price", selected)
}

/// Specification facet with the plain `specificationFilter` code
pub fn spec(title: &str, value: &str, selected: bool) -> Facet {
    Facet::new(value, SPEC_FILTER, title, selected)
}

/// Tree whose selected chain is `Root > A > B > C`
///
/// ```text
/// Root
/// ├── A (selected)
/// │   ├── B (selected)
/// │   │   └── C (selected)
/// │   │       ├── D
/// │   │       └── E
/// │   └── X
/// └── Y
/// ```
pub fn sample_tree() -> CategoryNode {
    let c = CategoryNode::new("4", "C")
        .with_selected(true)
        .with_children(vec![CategoryNode::new("5", "D"), CategoryNode::new("6", "E")]);
    let b = CategoryNode::new("3", "B").with_selected(true).with_children(vec![c]);
    let a = CategoryNode::new("2", "A")
        .with_selected(true)
        .with_children(vec![b, CategoryNode::new("7", "X")]);

    CategoryNode::new("1", "Root").with_children(vec![a, CategoryNode::new("8", "Y")])
}
