//! Category tree walking
//!
//! Derives the chain of selected categories for breadcrumb display and turns
//! breadcrumb and child clicks into facet batches for the codec.

pub mod filter;
pub mod tree;

pub use filter::{CategoryFilter, CategorySelection, can_disable_root};
pub use tree::{CategoryNode, deselect_from, selected_chain};
