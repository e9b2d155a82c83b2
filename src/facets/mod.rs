//! Facet model shared by the codec, the category walker and navigation
//!
//! A facet is one search refinement (category, brand, price range,
//! specification attribute, ...) together with the operation the UI wants
//! applied to it.

pub mod types;

pub use types::{
    FILTER_TITLE_SEP, Facet, FacetKind, FacetOp, MAP_CATEGORY_CHAR, SPACE_REPLACER, SPEC_FILTER,
    is_specification_code,
};
