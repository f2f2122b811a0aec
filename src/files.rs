//! Filename matchers shared by both tree builders and the router detector.

use crate::error::RouteError;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled matchers for the file naming conventions of a router directory.
#[derive(Debug, Clone)]
pub struct RouteFiles {
    page: GlobSet,
    script: GlobSet,
    index: GlobSet,
    ignored: Option<GlobSet>,
}
impl RouteFiles {
    /// Builds matchers for the given extensions (without leading dot) and
    /// user ignore patterns.
    pub fn new<E, P>(extensions: &[E], ignore_patterns: &[P]) -> Result<Self, RouteError>
    where
        E: AsRef<str>,
        P: AsRef<str>,
    {
        let extensions: Vec<&str> = extensions
            .iter()
            .map(|ext| ext.as_ref().trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .collect();
        if extensions.is_empty() {
            return Err(RouteError::InvalidPattern(
                "at least one page extension is required".to_string(),
            ));
        }
        let alternatives = format!("{{{}}}", extensions.join(","));
        let ignored = if ignore_patterns.is_empty() {
            None
        } else {
            Some(glob_set(ignore_patterns.iter().map(|p| p.as_ref().to_string()))?)
        };
        Ok(Self {
            page: glob_set([format!("page.{}", alternatives)])?,
            script: glob_set([format!("*.{}", alternatives)])?,
            index: glob_set([format!("index.{}", alternatives)])?,
            ignored,
        })
    }

    /// Matchers for `js`, `jsx`, `ts` and `tsx` with no ignore patterns.
    pub fn standard() -> Result<Self, RouteError> {
        Self::new(&crate::options::DEFAULT_PAGE_EXTENSIONS, &[] as &[&str])
    }

    /// `page.<ext>`: the App Router route definition file.
    pub fn is_page(&self, name: &str) -> bool {
        self.page.is_match(name)
    }

    /// `index.<ext>`: makes a Pages Router directory reachable at its own path.
    pub fn is_index(&self, name: &str) -> bool {
        self.index.is_match(name)
    }

    /// Stem of a route script (`about.tsx` → `about`), or `None` for other files.
    pub fn script_stem<'a>(&self, name: &'a str) -> Option<&'a str> {
        if !self.script.is_match(name) {
            return None;
        }
        name.rsplit_once('.').map(|(stem, _)| stem)
    }
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored
            .as_ref()
            .is_some_and(|matcher| matcher.is_match(name))
    }
}
fn glob_set(patterns: impl IntoIterator<Item = String>) -> Result<GlobSet, RouteError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(&pattern)
            .map_err(|e| RouteError::InvalidPattern(format!("'{}': {}", pattern, e)))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| RouteError::InvalidPattern(format!("failed to build glob set: {}", e)))
}
