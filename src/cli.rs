//! Command-line interface definitions and parsing
//!
//! The `facetnav` binary runs the library in-process for inspection:
//!
//! - **build**: fold a facet batch over a path and map
//! - **chain**: print the selected chain of a category tree
//! - **navigate**: print the navigation request a facet batch produces
//!
//! Facets are given as JSON, either one object or an array:
//!
//! ```text
//! facetnav build -q shoes -m c -f '{"value":"running","map":"c"}'
//! facetnav chain --tree tree.json --deselect-from 1
//! ```

use crate::facets::Facet;
use crate::{FacetnavError, category::CategoryNode};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "facetnav")]
#[command(about = "Inspect faceted search path/map encoding", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log codec and navigation decisions (overrides RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fold facets over a path and map
    #[command(visible_alias = "b")]
    Build {
        /// Current path, without the leading slash
        #[arg(short = 'q', long = "query", default_value = "")]
        query: String,

        /// Current map string
        #[arg(short = 'm', long = "map", default_value = "")]
        map: String,

        /// Facet JSON (object or array)
        #[arg(short = 'f', long = "facets", value_name = "JSON")]
        facets: String,

        /// Print the aligned state before map stripping as well
        #[arg(long = "intermediate")]
        intermediate: bool,
    },

    /// Print the selected chain of a category tree
    #[command(visible_alias = "c")]
    Chain {
        /// Category tree JSON file
        #[arg(short = 't', long = "tree", value_name = "FILE")]
        tree: PathBuf,

        /// Print the deselect batch for the breadcrumb at this index
        #[arg(short = 'd', long = "deselect-from", value_name = "INDEX")]
        deselect_from: Option<usize>,
    },

    /// Print the navigation request for a facet batch
    #[command(visible_alias = "n")]
    Navigate {
        /// Current path, without the leading slash
        #[arg(short = 'q', long = "query", default_value = "")]
        query: String,

        /// Current map string
        #[arg(short = 'm', long = "map", default_value = "")]
        map: String,

        /// Current search string
        #[arg(short = 's', long = "search", default_value = "")]
        search: String,

        /// Facet JSON (object or array)
        #[arg(short = 'f', long = "facets", value_name = "JSON")]
        facets: String,

        /// Facets seen earlier in the session (JSON object or array)
        #[arg(long = "seen", value_name = "JSON")]
        seen: Option<String>,

        /// Config file to use instead of the default location
        #[arg(long = "config", value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FacetInput {
    Many(Vec<Facet>),
    One(Facet),
}

/// Parse one facet or an array of facets
///
/// # Errors
///
/// Returns `FacetnavError::JsonError` if the input is neither.
pub fn parse_facets(json: &str) -> Result<Vec<Facet>, FacetnavError> {
    Ok(match serde_json::from_str(json)? {
        FacetInput::Many(facets) => facets,
        FacetInput::One(facet) => vec![facet],
    })
}

/// Read a category tree from a JSON file
///
/// # Errors
///
/// Returns `FacetnavError` if the file cannot be read or parsed.
pub fn read_tree(path: &Path) -> Result<CategoryNode, FacetnavError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::FacetKind;

    #[test]
    fn test_parse_single_facet() {
        let facets = parse_facets(r#"{"value":"running","map":"c"}"#).unwrap();
        assert_eq!(facets.len(), 1);
        assert_eq!(facets[0].kind, FacetKind::Category);
    }

    #[test]
    fn test_parse_facet_array() {
        let json = r#"[
            {"value": "nike", "map": "b", "selected": true},
            {"value": "red", "map": "specificationFilter", "title": "Color"}
        ]"#;
        let facets = parse_facets(json).unwrap();
        assert_eq!(facets.len(), 2);
        assert!(facets[0].selected);
        assert!(facets[1].kind.is_specification());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_facets("nope"), Err(FacetnavError::JsonError(_))));
        assert!(parse_facets(r#"{"map":"c"}"#).is_err());
    }

    #[test]
    fn test_cli_parses_build() {
        let cli = Cli::try_parse_from([
            "facetnav", "build", "-q", "shoes", "-m", "c", "-f", "[]", "--intermediate",
        ])
        .unwrap();
        match cli.command {
            Commands::Build { query, map, intermediate, .. } => {
                assert_eq!(query, "shoes");
                assert_eq!(map, "c");
                assert!(intermediate);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_read_tree() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tree.json");
        fs::write(&path, r#"{"id":"1","name":"Shoes","children":[]}"#).unwrap();
        let tree = read_tree(&path).unwrap();
        assert_eq!(tree.name, "Shoes");
    }
}
