//! Output formatting for route trees.
//!
//! Provides the flat URL list, the annotated tree and JSON renditions of a [`RouteNode`].

use crate::options::OutputFormat;
use crate::tree::render_tree;
use crate::{RouteError, RouteNode};

/// Formats the route tree into a string.
pub fn format_routes(root: &RouteNode, format: OutputFormat, pretty: bool) -> Result<String, RouteError> {
    match format {
        OutputFormat::Urls => Ok(render_urls(root)),
        OutputFormat::Tree => Ok(render_tree(root)),
        OutputFormat::Json => format_json(root, pretty),
    }
}

/// One URL per line, depth-first, parents before their children.
pub fn render_urls(root: &RouteNode) -> String {
    let mut out = String::new();
    for path in root.route_paths() {
        out.push_str(path);
        out.push('\n');
    }
    out
}
fn format_json(root: &RouteNode, pretty: bool) -> Result<String, RouteError> {
    let mut json = if pretty {
        serde_json::to_string_pretty(root)?
    } else {
        serde_json::to_string(root)?
    };
    json.push('\n');
    Ok(json)
}
