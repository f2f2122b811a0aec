//! Internal module for drawing a route tree as indented text.

use crate::types::RouteNode;

const TEE: &str = "├─ ";
const CORNER: &str = "└─ ";
const PIPE: &str = "│  ";
const BLANK: &str = "   ";

/// Renders `root` like the `tree` command, each node annotated with its URL.
///
/// ```text
/// / [http://localhost:3000]
/// ├─ 📁 about [http://localhost:3000/about]
/// └─ 📁 blog
///    └─ 📁 :slug [http://localhost:3000/blog/:slug]
/// ```
///
/// Every line, including the last, ends with a newline.
pub fn render_tree(root: &RouteNode) -> String {
    let mut out = String::new();
    out.push_str(&label(root));
    out.push('\n');
    render_children(root, "", &mut out);
    out
}
fn render_children(node: &RouteNode, prefix: &str, out: &mut String) {
    let count = node.children().len();
    for (i, child) in node.children().iter().enumerate() {
        let is_last = i + 1 == count;
        out.push_str(prefix);
        out.push_str(if is_last { CORNER } else { TEE });
        out.push_str(&label(child));
        out.push('\n');
        if !child.is_leaf() {
            let next = format!("{}{}", prefix, if is_last { BLANK } else { PIPE });
            render_children(child, &next, out);
        }
    }
}
fn label(node: &RouteNode) -> String {
    match node.route_path() {
        Some(url) => format!("{} [{}]", node.name(), url),
        None => node.name().to_string(),
    }
}
