//! Facet data structures
//!
//! - `Facet`: one pending filter operation coming from the filter UI
//! - `FacetKind`: the resolved type of a facet's map code
//! - `FacetOp`: whether the facet is being added to or removed from the URL
//!
//! Facets travel over the wire with the shape `{value, map, title, selected}`.
//! The `map` code is resolved into a `FacetKind` once, at construction or
//! deserialization, and the raw code is kept for map-string comparisons.

use serde::{Deserialize, Serialize};

/// Map code reserved for category filters
pub const MAP_CATEGORY_CHAR: &str = "c";

/// Marker carried by the map code of specification (attribute) filters
pub const SPEC_FILTER: &str = "specificationFilter";

/// Replaces whitespace in specification path names
pub const SPACE_REPLACER: char = '-';

/// Separates title and value in specification path names
pub const FILTER_TITLE_SEP: char = '_';

/// Resolved type of a facet map code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FacetKind {
    /// Category filter, map code `c`
    Category,
    /// Specification filter of the attribute `title`
    ///
    /// `code` is the full map code, e.g. `specificationFilter` or
    /// `specificationFilter_25`.
    Specification { title: String, code: String },
    /// Any other filter type (brand, price range, ...)
    Other(String),
}

impl FacetKind {
    /// Resolve a raw map code
    ///
    /// # Examples
    /// ```
    /// # use facetnav::facets::FacetKind;
    /// assert_eq!(FacetKind::resolve("c", "Shoes"), FacetKind::Category);
    /// assert_eq!(FacetKind::resolve("b", "Brand"), FacetKind::Other("b".into()));
    /// assert!(FacetKind::resolve("specificationFilter_12", "Color").is_specification());
    /// ```
    #[must_use]
    pub fn resolve(code: &str, title: &str) -> Self {
        if code == MAP_CATEGORY_CHAR {
            Self::Category
        } else if is_specification_code(code) {
            Self::Specification {
                title: title.to_string(),
                code: code.to_string(),
            }
        } else {
            Self::Other(code.to_string())
        }
    }

    /// The raw map code this kind was resolved from
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Category => MAP_CATEGORY_CHAR,
            Self::Specification { code, .. } | Self::Other(code) => code,
        }
    }

    #[must_use]
    pub const fn is_category(&self) -> bool {
        matches!(self, Self::Category)
    }

    #[must_use]
    pub const fn is_specification(&self) -> bool {
        matches!(self, Self::Specification { .. })
    }
}

/// Check whether a raw map code marks a specification filter
#[must_use]
pub fn is_specification_code(code: &str) -> bool {
    code.contains(SPEC_FILTER)
}

/// Operation a facet requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetOp {
    /// Facet is not applied yet and gets added
    Add,
    /// Facet is currently applied and gets removed
    Remove,
}

/// Wire shape of a facet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct FacetRepr {
    value: String,
    map: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    selected: bool,
}

/// One pending filter operation
///
/// `selected` tells whether the facet is *currently applied*: a selected facet
/// is removed from the URL, an unselected one is added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "FacetRepr", into = "FacetRepr")]
pub struct Facet {
    pub value: String,
    pub title: String,
    pub kind: FacetKind,
    pub selected: bool,
}

impl Facet {
    /// Create a facet from its raw map code
    #[must_use]
    pub fn new(
        value: impl Into<String>,
        map: &str,
        title: impl Into<String>,
        selected: bool,
    ) -> Self {
        let title = title.into();
        let kind = FacetKind::resolve(map, &title);
        Self {
            value: value.into(),
            title,
            kind,
            selected,
        }
    }

    /// Category facet
    #[must_use]
    pub fn category(value: impl Into<String>, selected: bool) -> Self {
        let value = value.into();
        Self {
            title: value.clone(),
            value,
            kind: FacetKind::Category,
            selected,
        }
    }

    /// Specification facet using the plain `specificationFilter` code
    #[must_use]
    pub fn specification(
        title: impl Into<String>,
        value: impl Into<String>,
        selected: bool,
    ) -> Self {
        Self::new(value, SPEC_FILTER, title, selected)
    }

    /// Raw map code of this facet
    #[must_use]
    pub fn code(&self) -> &str {
        self.kind.code()
    }

    #[must_use]
    pub const fn op(&self) -> FacetOp {
        if self.selected {
            FacetOp::Remove
        } else {
            FacetOp::Add
        }
    }

    #[must_use]
    pub const fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Same facet with the opposite `selected` state
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            selected: !self.selected,
            ..self.clone()
        }
    }
}

impl From<FacetRepr> for Facet {
    fn from(repr: FacetRepr) -> Self {
        Self::new(repr.value, &repr.map, repr.title, repr.selected)
    }
}

impl From<Facet> for FacetRepr {
    fn from(facet: Facet) -> Self {
        Self {
            map: facet.code().to_string(),
            value: facet.value,
            title: facet.title,
            selected: facet.selected,
        }
    }
}
