use feruca::{Collator, Locale, Tailoring};
use serde::Serialize;
use std::cmp::Ordering;

/// Prefix marking a node that came from a directory.
pub const FOLDER_MARKER: &str = "📁 ";

/// One node of the reconstructed route tree.
///
/// Nodes are built bottom-up and never change once attached to a parent; the only
/// transformation is [`RouteNode::into_folder`], which consumes the node and returns
/// a renamed one before it is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    route_path: Option<String>,
    children: Vec<RouteNode>,
}
impl RouteNode {
    /// Creates a node, sorting `children` by display name.
    pub fn new(name: impl Into<String>, route_path: Option<String>, mut children: Vec<RouteNode>) -> Self {
        let mut collator = name_collator();
        children.sort_by(|a, b| collator.collate(&a.name, &b.name));
        Self {
            name: name.into(),
            route_path,
            children,
        }
    }

    /// A node with a route and no children.
    pub fn leaf(name: impl Into<String>, route_path: String) -> Self {
        Self::new(name, Some(route_path), Vec::new())
    }
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified URL of this node, when it is reachable.
    pub fn route_path(&self) -> Option<&str> {
        self.route_path.as_deref()
    }
    pub fn children(&self) -> &[RouteNode] {
        &self.children
    }
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Renames the node for display under its parent directory.
    pub(crate) fn into_folder(self) -> Self {
        Self {
            name: format!("{}{}", FOLDER_MARKER, self.name),
            ..self
        }
    }

    /// Every route path in depth-first, pre-order.
    pub fn route_paths(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        self.collect_route_paths(&mut paths);
        paths
    }
    fn collect_route_paths<'a>(&'a self, paths: &mut Vec<&'a str>) {
        if let Some(path) = self.route_path() {
            paths.push(path);
        }
        for child in &self.children {
            child.collect_route_paths(paths);
        }
    }
}

/// Orders display names with the Unicode Collation Algorithm at the CLDR root locale.
///
/// Punctuation is not ignorable, so `:id` sorts before `(group)` and `a_b` before `a-b`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    name_collator().collate(a, b)
}
fn name_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}
