//! # Nextroutes
//!
//! `nextroutes` reconstructs the URL routes of a Next.js project from its file-system
//! layout, without running or importing any application code.
//!
//! Both router styles are supported:
//!
//! - **App Router** (`app/`, `src/app/`): folders containing a `page.{js,jsx,ts,tsx}` file
//!   are routes; `(group)` folders add no URL segment; `_private` folders and `api` are skipped.
//! - **Pages Router** (`pages/`, `src/pages/`): every script file is a route, `index` files
//!   make their directory reachable, and `_app`-style files and API routes are skipped.
//!
//! Dynamic segments (`[id]`, `[...slug]`, `[[...slug]]`, `[[id]]`) render as `:id`, `:slug*`,
//! `:slug*?` and `:id?`, or as a literal value when a substitution is supplied.
//!
//! # Example
//!
//! ```no_run
//! use nextroutes::{AnalyzerBuilder, analyze_routes};
//!
//! let options = AnalyzerBuilder::new("app")
//!     .host("https://example.com")
//!     .tree_mode(true)
//!     .substitute("slug", "hello-world")
//!     .build();
//!
//! let tree = analyze_routes(&options).expect("no routes found");
//! for url in tree.route_paths() {
//!     println!("{}", url);
//! }
//! ```

mod detect;
mod engine;
mod error;
mod files;
mod options;
pub mod output;
mod segment;
mod tree;
mod types;

pub use detect::{detect_router_type, detect_router_type_with, find_router_dir};
pub use engine::{RouteScanner, analyze_routes, analyze_routes_to};
pub use error::RouteError;
pub use files::RouteFiles;
pub use options::{
    AnalyzerBuilder, AnalyzerOptions, DEFAULT_HOST, DEFAULT_PAGE_EXTENSIONS, OutputFormat,
    RouterKind, Substitutions, parse_substitution,
};
pub use segment::{Segment, is_route_group, resolve_segment};
pub use tree::render_tree;
pub use types::{FOLDER_MARKER, RouteNode, compare_names};
