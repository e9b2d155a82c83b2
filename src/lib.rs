//! Facetnav - positional URL encoding of faceted search filters
//!
//! This library keeps a human-readable search path (one segment per active
//! filter) and a compact `map` string (one type code per filter) in step as
//! filters are added and removed, walks category trees to find the selected
//! chain, and builds navigation requests for a client-side transport.

use thiserror::Error;

pub mod category;
pub mod codec;
pub mod config;
pub mod facets;
pub mod navigation;
pub mod selection;

pub mod cli;

#[cfg(test)]
pub mod testing;

pub use category::{CategoryFilter, CategoryNode, CategorySelection};
pub use codec::{PathMapState, QueryAndMap, build_query_and_map};
pub use facets::{Facet, FacetKind, FacetOp};
pub use navigation::{Location, NavigationGateway, NavigationRequest, Navigator};
pub use selection::{SelectionTracker, SharedSelectionTracker};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FacetnavError {
    /// Navigation transport error
    #[error("Navigation error: {0}")]
    NavigationError(#[from] navigation::NavigationError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Malformed JSON input
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
