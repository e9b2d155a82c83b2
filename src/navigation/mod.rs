//! Navigation adapter
//!
//! Turns a facet batch into a request for an external navigation transport.
//! The transport itself sits behind the `Navigator` trait.

pub mod error;
pub mod gateway;
pub mod navigator;
pub mod request;

pub use error::NavigationError;
pub use gateway::{NavigationGateway, set_query_param};
pub use navigator::{Navigator, RecordingNavigator};
pub use request::{Location, ModifierIgnore, NavigationRequest, ScrollOptions};
