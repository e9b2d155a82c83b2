//! Category filter interactions
//!
//! Turns clicks on the category breadcrumb and on the child list into facet
//! batches for the codec. Rendering stays with the caller.

use super::tree::{CategoryNode, deselect_from, selected_chain};
use crate::codec::path::{MAP_VALUES_SEP, split_nonempty};
use crate::facets::{Facet, MAP_CATEGORY_CHAR};

/// Outcome of a category click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    /// Apply these facets through the codec
    Facets(Vec<Facet>),
    /// Shallow mode: navigate with this map string unchanged
    Map(String),
}

impl CategorySelection {
    /// Facet batch, empty for `Map`
    #[must_use]
    pub fn facets(&self) -> &[Facet] {
        match self {
            Self::Facets(facets) => facets,
            Self::Map(_) => &[],
        }
    }
}

/// The root can be deselected only when no category code is in the map
///
/// # Examples
/// ```
/// # use facetnav::category::can_disable_root;
/// assert!(can_disable_root("b,1"));
/// assert!(!can_disable_root("c,b"));
/// ```
#[must_use]
pub fn can_disable_root(map: &str) -> bool {
    !split_nonempty(map, MAP_VALUES_SEP)
        .iter()
        .any(|code| code == MAP_CATEGORY_CHAR)
}

/// Category filter over a borrowed tree
///
/// In shallow mode the filter only offers the root and its direct children,
/// and picking a child selects the root together with it.
#[derive(Debug)]
pub struct CategoryFilter<'a> {
    root: &'a CategoryNode,
    map: &'a str,
    shallow: bool,
    chain: Vec<&'a CategoryNode>,
}

impl<'a> CategoryFilter<'a> {
    #[must_use]
    pub fn new(root: &'a CategoryNode, map: &'a str, shallow: bool) -> Self {
        Self {
            root,
            map,
            shallow,
            chain: selected_chain(root),
        }
    }

    #[must_use]
    pub fn chain(&self) -> &[&'a CategoryNode] {
        &self.chain
    }

    #[must_use]
    pub fn last_selected(&self) -> &'a CategoryNode {
        self.chain.last().copied().unwrap_or(self.root)
    }

    /// Children offered below the deepest selected category
    #[must_use]
    pub fn selectable_children(&self) -> &'a [CategoryNode] {
        self.last_selected().children()
    }

    #[must_use]
    pub fn can_disable_root(&self) -> bool {
        can_disable_root(self.map)
    }

    /// Click on the root entry
    ///
    /// `None` when the root cannot be disabled.
    #[must_use]
    pub fn root_click(&self) -> Option<CategorySelection> {
        if !self.can_disable_root() {
            return None;
        }
        if self.shallow {
            Some(CategorySelection::Map(self.map.to_string()))
        } else {
            Some(self.breadcrumb_click(0))
        }
    }

    /// Click on the breadcrumb entry at `index`, deselecting it and everything below
    #[must_use]
    pub fn breadcrumb_click(&self, index: usize) -> CategorySelection {
        CategorySelection::Facets(
            deselect_from(&self.chain, index)
                .into_iter()
                .map(|node| node.to_facet().with_selected(true))
                .collect(),
        )
    }

    /// Click on a child category
    #[must_use]
    pub fn child_click(&self, child: &CategoryNode) -> CategorySelection {
        let child = child.to_facet().with_selected(false);
        if self.shallow {
            CategorySelection::Facets(vec![self.root.to_facet().with_selected(false), child])
        } else {
            CategorySelection::Facets(vec![child])
        }
    }
}
