//! Facetnav CLI entry point
//!
//! Developer tool for inspecting how facet batches fold into search paths,
//! map strings and navigation requests.
//!
//! # Usage
//!
//! ```bash
//! # Add a category next to the existing ones
//! facetnav build -q shoes/nike -m c,b -f '{"value":"running","map":"c"}'
//!
//! # Show the selected chain and what clicking the second crumb removes
//! facetnav chain -t tree.json -d 1
//!
//! # Show the full navigation request
//! facetnav navigate -q shoes -m c -s '?order=price' -f '{"value":"nike","map":"b"}'
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG`; `--verbose` forces `debug`.

use colored::Colorize;
use facetnav::{
    FacetnavError,
    category::{CategoryFilter, CategorySelection},
    cli::{Cli, Commands, parse_facets, read_tree},
    codec::{PathMapState, build_query_and_map, fold},
    config::FacetnavConfig,
    navigation::{Location, NavigationGateway, RecordingNavigator},
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, FacetnavError>;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("facetnav=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_build(query: &str, map: &str, facets: &str, intermediate: bool) -> Result<()> {
    let facets = parse_facets(facets)?;

    if intermediate {
        let state = fold(PathMapState::parse(query, map), &facets);
        println!("{} {}", "path:".dimmed(), state.render_query());
        println!("{} {}", "codes:".dimmed(), state.render_map());
    }

    let result = build_query_and_map(query, map, &facets);
    println!("{} {}", "query:".bold(), result.query);
    println!("{} {}", "map:".bold(), result.map);
    Ok(())
}

fn run_chain(tree: &std::path::Path, deselect_from: Option<usize>) -> Result<()> {
    let root = read_tree(tree)?;
    let filter = CategoryFilter::new(&root, "", false);

    let names: Vec<&str> = filter.chain().iter().map(|node| node.name.as_str()).collect();
    println!("{}", names.join(" > "));

    for child in filter.selectable_children() {
        println!("  {} {}", "+".green(), child.name);
    }

    if let Some(index) = deselect_from {
        if index >= filter.chain().len() {
            return Err(FacetnavError::InvalidInput(format!(
                "breadcrumb index {index} is past the end of a chain of {}",
                filter.chain().len()
            )));
        }
        if let CategorySelection::Facets(facets) = filter.breadcrumb_click(index) {
            println!("{}", serde_json::to_string_pretty(&facets)?);
        }
    }
    Ok(())
}

fn run_navigate(
    location: &Location,
    facets: &str,
    seen: Option<&str>,
    config: Option<&std::path::Path>,
) -> Result<()> {
    let config = match config {
        Some(path) => FacetnavConfig::load_from(path)?,
        None => FacetnavConfig::load()?,
    };
    let facets = parse_facets(facets)?;

    let mut gateway = NavigationGateway::new(config, RecordingNavigator::new());
    if let Some(seen) = seen {
        for facet in parse_facets(seen)? {
            gateway.record(Some(&facet));
        }
    }

    let request = gateway.navigate_to_facets(location, &facets)?;
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Build {
            query,
            map,
            facets,
            intermediate,
        } => run_build(&query, &map, &facets, intermediate),
        Commands::Chain {
            tree,
            deselect_from,
        } => run_chain(&tree, deselect_from),
        Commands::Navigate {
            query,
            map,
            search,
            facets,
            seen,
            config,
        } => run_navigate(
            &Location::new(query, map, search),
            &facets,
            seen.as_deref(),
            config.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "❌".red());
        std::process::exit(1);
    }
}
