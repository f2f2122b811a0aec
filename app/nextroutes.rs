//! Command-line interface for nextroutes.
//!
//! Locates the `app/` or `pages/` directory of a Next.js project (or takes one via
//! `--dir`) and prints the routes it defines.

use clap::{ArgAction, Parser, ValueEnum};
use nextroutes::{
    AnalyzerBuilder, AnalyzerOptions, RouteError, RouterKind, Substitutions, analyze_routes,
    find_router_dir, parse_substitution,
};
use std::env;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// nextroutes — list the routes of a Next.js project
#[derive(Parser)]
#[command(name = "nextroutes", version, about, long_about = None, disable_help_flag = true)]
struct Cli {
    /// Display routes in directory structure format
    #[arg(short, long)]
    tree: bool,

    /// Base host URL
    #[arg(short = 'h', long, default_value = nextroutes::DEFAULT_HOST)]
    host: String,

    /// Next.js app or pages directory (searched from the current directory if omitted)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Force router type (app or pages)
    #[arg(short, long, value_parser = parse_router_kind)]
    force: Option<RouterKind>,

    /// Replace a dynamic route segment, e.g. slug=github (can be repeated)
    #[arg(short, long = "replace", value_parser = parse_replace)]
    replace: Vec<(String, String)>,

    /// Output format (overrides --tree)
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Indented JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Glob patterns for entry names to skip (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Recognized route file extensions
    #[arg(long, value_delimiter = ',', default_value = "js,jsx,ts,tsx")]
    page_extensions: Vec<String>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Urls,
    Tree,
    Json,
}

/// Parse string into RouterKind enum.
fn parse_router_kind(s: &str) -> Result<RouterKind, String> {
    s.parse().map_err(|e: RouteError| e.to_string())
}

fn parse_replace(s: &str) -> Result<(String, String), String> {
    parse_substitution(s).map_err(|e| e.to_string())
}

impl Cli {
    fn into_options(self, root: PathBuf, router: Option<RouterKind>) -> AnalyzerOptions {
        let format = match self.format {
            Some(Format::Urls) => nextroutes::OutputFormat::Urls,
            Some(Format::Tree) => nextroutes::OutputFormat::Tree,
            Some(Format::Json) => nextroutes::OutputFormat::Json,
            None if self.tree => nextroutes::OutputFormat::Tree,
            None => nextroutes::OutputFormat::Urls,
        };
        let substitutions: Substitutions = self.replace.into_iter().collect();

        AnalyzerBuilder::new(root)
            .host(self.host)
            .format(format)
            .pretty(self.pretty)
            .router(router)
            .substitutions(substitutions)
            .ignore_patterns(self.ignore_patterns)
            .page_extensions(self.page_extensions)
            .build()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "error".into()))
        .init();

    let cli = Cli::parse();
    let (root, router) = match locate(&cli) {
        Ok(found) => found,
        Err(message) => {
            eprintln!("{}", message);
            exit(1);
        }
    };
    let options = cli.into_options(root, router);

    if let Err(e) = analyze_routes(&options) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

/// Resolves the directory to analyze and the router type to force, if any.
fn locate(cli: &Cli) -> Result<(PathBuf, Option<RouterKind>), String> {
    let (dir, router) = match &cli.dir {
        Some(dir) => (dir.clone(), cli.force),
        None => {
            let cwd = env::current_dir().map_err(|e| format!("Error: {}", e))?;
            match find_router_dir(&cwd) {
                Some((dir, kind)) => (dir, cli.force.or(Some(kind))),
                None => {
                    return Err("Cannot find Next.js directory.\n\
                         Please run from the Next.js project root or use the -d option to specify the app or pages directory."
                        .to_string());
                }
            }
        }
    };

    let resolved = if dir.is_absolute() {
        dir
    } else {
        env::current_dir()
            .map_err(|e| format!("Error: {}", e))?
            .join(dir)
    };
    if !resolved.exists() {
        return Err(format!("Error: {}", RouteError::DirectoryNotFound(resolved)));
    }
    if !resolved.is_dir() {
        return Err(format!("Error: {}", RouteError::NotADirectory(resolved)));
    }
    Ok((resolved, router))
}
