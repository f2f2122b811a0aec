use crate::detect::detect_router_type_with;
use crate::error::RouteError;
use crate::files::RouteFiles;
use crate::options::{AnalyzerOptions, RouterKind, Substitutions};
use crate::output::format_routes;
use crate::segment::{Segment, join_resolved, resolve_segment};
use crate::types::RouteNode;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Builds route trees for one run: a host, a substitution table and the compiled
/// filename matchers, shared read-only by every recursive call.
#[derive(Debug, Clone)]
pub struct RouteScanner {
    host: String,
    substitutions: Substitutions,
    files: RouteFiles,
}

/// Accumulated position of a directory below the router root.
#[derive(Debug, Default, Clone)]
struct Location {
    /// Every raw segment, route groups included.
    relative: Vec<String>,
    /// Raw segments that contribute to the URL.
    route: Vec<String>,
}
impl Location {
    fn child(&self, name: &str, in_route: bool) -> Self {
        let mut next = self.clone();
        next.relative.push(name.to_string());
        if in_route {
            next.route.push(name.to_string());
        }
        next
    }
    fn node_name(&self, substitutions: &Substitutions) -> String {
        match self.relative.last() {
            Some(last) => resolve_segment(last, substitutions),
            None => "/".to_string(),
        }
    }
}
impl RouteScanner {
    pub fn new(host: impl Into<String>, substitutions: Substitutions, files: RouteFiles) -> Self {
        Self {
            host: host.into(),
            substitutions,
            files,
        }
    }
    pub fn from_options(options: &AnalyzerOptions) -> Result<Self, RouteError> {
        let files = RouteFiles::new(&options.page_extensions, &options.ignore_patterns)?;
        Ok(Self::new(
            options.host.clone(),
            options.substitutions.clone(),
            files,
        ))
    }
    pub fn files(&self) -> &RouteFiles {
        &self.files
    }
    pub fn build(&self, router: RouterKind, dir: &Path) -> Option<RouteNode> {
        match router {
            RouterKind::App => self.build_app_tree(dir),
            RouterKind::Pages => self.build_pages_tree(dir),
        }
    }

    /// Walks an App Router directory (`app/`): a folder is a route when it holds a
    /// `page` file, `(group)` folders add no URL segment, `_private` folders and `api`
    /// are skipped.
    ///
    /// Returns `None` for a missing directory or one without any routes beneath it.
    pub fn build_app_tree(&self, dir: &Path) -> Option<RouteNode> {
        self.app_node(dir, &Location::default())
    }

    /// Walks a Pages Router directory (`pages/`): every script file is a route of
    /// its own and only `index` files make their directory reachable. Anything below
    /// a path containing `api` is left out.
    pub fn build_pages_tree(&self, dir: &Path) -> Option<RouteNode> {
        self.pages_node(dir, &Location::default())
    }
    fn app_node(&self, dir: &Path, location: &Location) -> Option<RouteNode> {
        if !dir.exists() {
            return None;
        }
        self.read_app_dir(dir, location)
            .unwrap_or_else(contain)
    }
    fn read_app_dir(&self, dir: &Path, location: &Location) -> Result<Option<RouteNode>, RouteError> {
        let entries = list_dir(dir)?;
        let has_page = entries.iter().any(|(name, _)| self.files.is_page(name));
        let mut children = Vec::new();
        for (name, path) in &entries {
            if name.starts_with('_') || name == "api" || self.files.is_ignored(name) {
                tracing::debug!("Skipping {}", path.display());
                continue;
            }
            if !is_dir(path)? {
                continue;
            }
            let in_route = !Segment::parse(name).is_route_group();
            if let Some(child) = self.app_node(path, &location.child(name, in_route)) {
                children.push(child.into_folder());
            }
        }
        if !has_page && children.is_empty() {
            return Ok(None);
        }
        let route_path = has_page.then(|| self.url(&location.route));
        Ok(Some(RouteNode::new(
            location.node_name(&self.substitutions),
            route_path,
            children,
        )))
    }
    fn pages_node(&self, dir: &Path, location: &Location) -> Option<RouteNode> {
        if !dir.exists() {
            return None;
        }
        self.read_pages_dir(dir, location)
            .unwrap_or_else(contain)
    }
    fn read_pages_dir(&self, dir: &Path, location: &Location) -> Result<Option<RouteNode>, RouteError> {
        let in_api = location.relative.join("/").contains("api");
        let mut children = Vec::new();
        let mut is_route = false;
        for (name, path) in list_dir(dir)? {
            if name.starts_with('_') || self.files.is_ignored(&name) {
                tracing::debug!("Skipping {}", path.display());
                continue;
            }
            if is_dir(&path)? {
                if let Some(child) = self.pages_node(&path, &location.child(&name, true)) {
                    children.push(child.into_folder());
                }
            } else if self.files.is_index(&name) {
                is_route |= !in_api;
            } else if let Some(stem) = self.files.script_stem(&name) {
                if stem == "api" || in_api {
                    continue;
                }
                let leaf = resolve_segment(stem, &self.substitutions);
                let mut segments = location.relative.clone();
                segments.push(stem.to_string());
                children.push(RouteNode::leaf(leaf, self.url(&segments)));
            }
        }
        if !is_route && children.is_empty() {
            return Ok(None);
        }
        let route_path = is_route.then(|| self.url(&location.relative));
        Ok(Some(RouteNode::new(
            location.node_name(&self.substitutions),
            route_path,
            children,
        )))
    }

    /// `host` followed by the resolved segments; just `host` at the root.
    fn url(&self, segments: &[String]) -> String {
        if segments.is_empty() {
            return self.host.clone();
        }
        format!("{}/{}", self.host, join_resolved(segments, &self.substitutions))
    }
}
fn contain(error: RouteError) -> Option<RouteNode> {
    tracing::error!("Directory analysis error: {}", error);
    None
}
fn list_dir(dir: &Path) -> Result<Vec<(String, PathBuf)>, RouteError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| RouteError::io(dir, e))? {
        let entry = entry.map_err(|e| RouteError::io(dir, e))?;
        entries.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
    }
    Ok(entries)
}
fn is_dir(path: &Path) -> Result<bool, RouteError> {
    fs::metadata(path)
        .map(|metadata| metadata.is_dir())
        .map_err(|e| RouteError::io(path, e))
}

/// Detects the router type (unless forced), builds the route tree and writes it to
/// standard output in the configured format.
pub fn analyze_routes(options: &AnalyzerOptions) -> Result<RouteNode, RouteError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    analyze_routes_to(options, &mut handle)
}

/// Same as [`analyze_routes`], writing to `out`.
pub fn analyze_routes_to<W: Write>(options: &AnalyzerOptions, out: &mut W) -> Result<RouteNode, RouteError> {
    let scanner = RouteScanner::from_options(options)?;
    let router = match options.router {
        Some(forced) => forced,
        None => detect_router_type_with(&options.root, scanner.files()),
    };
    tracing::debug!("Analyzing {} router at {}", router, options.root.display());
    let Some(tree) = scanner.build(router, &options.root) else {
        tracing::warn!(
            "Route structure not found for {} router in {}",
            router,
            options.root.display()
        );
        return Err(RouteError::NoRoutes {
            router,
            dir: options.root.clone(),
        });
    };
    let rendered = format_routes(&tree, options.format, options.pretty)?;
    out.write_all(rendered.as_bytes())
        .map_err(|e| RouteError::io("<stdout>", e))?;
    Ok(tree)
}
