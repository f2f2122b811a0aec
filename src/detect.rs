//! Router-type detection and router-directory discovery.

use crate::files::RouteFiles;
use crate::options::RouterKind;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Picks the router type for `dir` using the standard `page.{js,jsx,ts,tsx}` names.
///
/// A directory named `app` or `pages` decides by name alone. Otherwise any `page`
/// file below it means App Router; Pages Router is the fallback.
pub fn detect_router_type(dir: &Path) -> RouterKind {
    match RouteFiles::standard() {
        Ok(files) => detect_router_type_with(dir, &files),
        Err(e) => {
            tracing::debug!("Falling back to directory-name detection: {}", e);
            detect_by_name(dir).unwrap_or(RouterKind::Pages)
        }
    }
}

/// [`detect_router_type`] with the page file matcher of a configured run.
pub fn detect_router_type_with(dir: &Path, files: &RouteFiles) -> RouterKind {
    if let Some(kind) = detect_by_name(dir) {
        return kind;
    }
    if contains_page_file(dir, files) {
        tracing::debug!("Found page file under {}, using app router", dir.display());
        RouterKind::App
    } else {
        RouterKind::Pages
    }
}
fn detect_by_name(dir: &Path) -> Option<RouterKind> {
    match dir.file_name().and_then(|name| name.to_str()) {
        Some("app") => Some(RouterKind::App),
        Some("pages") => Some(RouterKind::Pages),
        _ => None,
    }
}

/// Symlinked folders are followed like the tree builders do. Unreadable entries
/// are skipped; they count as "not found".
fn contains_page_file(dir: &Path, files: &RouteFiles) -> bool {
    WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(true)
        .build()
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Ignoring walk error during detection: {}", e);
                None
            }
        })
        .filter(|entry| entry.depth() > 0)
        .any(|entry| files.is_page(&entry.file_name().to_string_lossy()))
}

/// Router directories probed under a project root, first match wins.
const CANDIDATES: [(&str, RouterKind); 4] = [
    ("src/app", RouterKind::App),
    ("app", RouterKind::App),
    ("src/pages", RouterKind::Pages),
    ("pages", RouterKind::Pages),
];

/// Finds the router directory of the project rooted at `start`.
pub fn find_router_dir(start: &Path) -> Option<(PathBuf, RouterKind)> {
    CANDIDATES.iter().find_map(|(candidate, kind)| {
        let path = start.join(candidate);
        path.is_dir().then_some((path, *kind))
    })
}
