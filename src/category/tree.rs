//! Category tree and selected-chain walking
//!
//! The tree comes from the search backend with the current selection already
//! marked. At most one child is selected per level, so the selection forms a
//! single chain from the root down.

use crate::codec::path::replace_whitespace;
use crate::facets::Facet;
use serde::{Deserialize, Serialize};

/// Node of a category tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub selected: bool,
    /// Path value used in URLs; derived from `name` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CategoryNode>>,
}

impl CategoryNode {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            selected: false,
            value: None,
            children: None,
        }
    }

    #[must_use]
    pub const fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = Some(children);
        self
    }

    /// Children as a slice, empty when absent
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }

    /// The selected child, if any
    #[must_use]
    pub fn selected_child(&self) -> Option<&Self> {
        self.children().iter().find(|child| child.selected)
    }

    /// Value of this category as a path segment
    ///
    /// # Examples
    /// ```
    /// # use facetnav::category::CategoryNode;
    /// assert_eq!(CategoryNode::new("1", "Running Shoes").facet_value(), "running-shoes");
    /// let shoes = CategoryNode::new("1", "Shoes").with_value("calcados");
    /// assert_eq!(shoes.facet_value(), "calcados");
    /// ```
    #[must_use]
    pub fn facet_value(&self) -> String {
        self.value
            .clone()
            .unwrap_or_else(|| replace_whitespace(&self.name).to_lowercase())
    }

    /// Category facet for this node; `selected` mirrors the node
    #[must_use]
    pub fn to_facet(&self) -> Facet {
        let mut facet = Facet::category(self.facet_value(), self.selected);
        facet.title.clone_from(&self.name);
        facet
    }
}

/// Chain of selected categories starting at `root`
///
/// The root is always the first element, selected or not. The walk stops at
/// the first level without children or without a selected child.
#[must_use]
pub fn selected_chain(root: &CategoryNode) -> Vec<&CategoryNode> {
    let mut chain = vec![root];
    let mut node = root;
    while let Some(child) = node.selected_child() {
        chain.push(child);
        node = child;
    }
    chain
}

/// Nodes to deselect when the breadcrumb entry at `index` is activated
///
/// Index 0 deselects the whole chain including the root. An index past the
/// end yields nothing.
#[must_use]
pub fn deselect_from<'a>(chain: &[&'a CategoryNode], index: usize) -> Vec<&'a CategoryNode> {
    chain.get(index..).map(<[_]>::to_vec).unwrap_or_default()
}
