//! navtrail CLI
//!
//! Derives breadcrumb trails from category paths or request documents and
//! prints them as JSON, YAML, ANSI or plain text.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use navtrail_core::{
    format_output, load_document, parse_document, slugify, BreadcrumbRequest, CollectionStyle,
    InputFormat, OutputFormat, RenderContext, SelectedFacet, TrailBuilder, TrailConfig,
    TrailDocument,
};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Breadcrumb trail derivation from category paths
#[derive(Parser)]
#[command(name = "navtrail")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Breadcrumb trails - URL slugs and ordered navigation links from category paths")]
#[command(long_about = r#"
navtrail: Breadcrumb Trail Derivation

Turns category paths such as "/Department/Category", or a pre-built
navigation list, into an ordered breadcrumb trail of labelled links.

Sources (highest priority first):
  - breadcrumb    - explicit navigation list, used as is
  - categoryTree  - precomputed navigation list, used as is
  - categories    - raw category paths, ordered shortest first

Output formats:
  - JSON (default) - Structured JSON for programmatic use
  - YAML - Human-readable YAML format
  - ANSI - Colorful terminal output
  - Summary - Single "Home / A / B" line

Examples:
  navtrail categories /Shoes /Shoes/Running       # Trail from paths
  navtrail categories /Shoes --term boots         # With trailing term
  navtrail categories /Shoes --facet productClusterIds --current-path /sale
  navtrail resolve request.yaml --format ansi     # Trail from a document
  cat request.json | navtrail resolve -           # Document from stdin
  navtrail slug "Café Noir"                       # Print a slug
"#)]
pub struct Args {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormatArg::Json)]
    pub format: OutputFormatArg,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Keep one relabelled link per item under the collection override
    #[arg(long, global = true)]
    pub relabel_collection: bool,

    /// Omit the leading home link
    #[arg(long, global = true)]
    pub no_home: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Build a trail from a JSON or YAML request document
    Resolve {
        /// Path to the document, or "-" for stdin
        path: PathBuf,

        /// Document format (default: from file extension)
        #[arg(long, value_enum)]
        input_format: Option<InputFormatArg>,
    },

    /// Build a trail from category paths given on the command line
    Categories {
        /// Category paths, e.g. /Department /Department/Category
        #[arg(required = true)]
        paths: Vec<String>,

        /// Trailing free-text term
        #[arg(long)]
        term: Option<String>,

        /// Render on mobile devices too
        #[arg(long)]
        show_on_mobile: bool,

        /// Treat the current device as mobile
        #[arg(long)]
        mobile: bool,

        /// Selected facet key (can be specified multiple times)
        #[arg(long = "facet", action = clap::ArgAction::Append)]
        facets: Vec<String>,

        /// Path of the current page
        #[arg(long, default_value = "/")]
        current_path: String,
    },

    /// Print the URL slug of each label
    Slug {
        /// Labels to slugify
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

/// Output format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Ansi,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

/// Input format argument
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum InputFormatArg {
    Json,
    Yaml,
}

impl From<InputFormatArg> for InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Json => InputFormat::Json,
            InputFormatArg::Yaml => InputFormat::Yaml,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match &args.command {
        Commands::Resolve { path, input_format } => {
            run_resolve(path, input_format.map(Into::into), &args)
        }
        Commands::Categories {
            paths,
            term,
            show_on_mobile,
            mobile,
            facets,
            current_path,
        } => {
            let mut request = BreadcrumbRequest::from_categories(paths.iter().cloned())
                .with_show_on_mobile(*show_on_mobile);
            if let Some(term) = term {
                request = request.with_term(term.clone());
            }

            let mut context = RenderContext::new(current_path.clone()).with_mobile(*mobile);
            if !facets.is_empty() {
                context = context.with_facets(facets.iter().map(SelectedFacet::new).collect());
            }

            run_trail(&TrailDocument { request, context }, &args)
        }
        Commands::Slug { labels } => {
            let output = labels
                .iter()
                .map(|label| slugify(label))
                .collect::<Vec<_>>()
                .join("\n");
            write_output(&output, args.output.as_ref())
        }
    }
}

/// Log to stderr; RUST_LOG wins over --verbose
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Build trail configuration from args
fn build_config(args: &Args) -> TrailConfig {
    let style = if args.relabel_collection {
        CollectionStyle::Relabel
    } else {
        CollectionStyle::Collapse
    };

    TrailConfig::new()
        .with_home(!args.no_home)
        .with_collection_style(style)
}

fn run_resolve(path: &PathBuf, input_format: Option<InputFormat>, args: &Args) -> Result<()> {
    let document = if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        let format = input_format.unwrap_or(InputFormat::Json);
        parse_document(&source, format).context("Failed to parse request from stdin")?
    } else {
        check_input_path(path)?;
        load_document(path, input_format)
            .with_context(|| format!("Failed to load request: {}", path.display()))?
    };

    run_trail(&document, args)
}

/// Reject missing paths and directories before loading
fn check_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Not a file: {}", path.display());
    }
    Ok(())
}

fn run_trail(document: &TrailDocument, args: &Args) -> Result<()> {
    let builder = TrailBuilder::new(build_config(args)).context("Invalid trail configuration")?;
    let trail = builder.build(&document.request, &document.context);

    match &trail {
        Some(trail) => debug!(entries = trail.entries.len(), "trail built"),
        None => debug!("trail suppressed, nothing to render"),
    }

    let format: OutputFormat = args.format.clone().into();
    let output = format_output(trail.as_ref(), format)?;

    write_output(&output, args.output.as_ref())
}

fn write_output(output: &str, path: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, output).context("Failed to write output file")?;
    } else if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_input_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("request.json");
        fs::write(&file, "{}").unwrap();

        assert!(check_input_path(&file).is_ok());

        let err = check_input_path(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Not a file:"));

        let err = check_input_path(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().starts_with("Path does not exist:"));
    }
}
