use crate::error::RouteError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Host prepended to every route when none is given.
pub const DEFAULT_HOST: &str = "http://localhost:3000";

/// Extensions recognized for route files unless overridden.
pub const DEFAULT_PAGE_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// Literal values for dynamic segments, keyed by segment name (`brand` for `[brand]`).
pub type Substitutions = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterKind {
    App,
    Pages,
}
impl RouterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouterKind::App => "app",
            RouterKind::Pages => "pages",
        }
    }
}
impl fmt::Display for RouterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for RouterKind {
    type Err = RouteError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "app" => Ok(RouterKind::App),
            "pages" => Ok(RouterKind::Pages),
            _ => Err(RouteError::InvalidRouterType(s.to_string())),
        }
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutputFormat {
    Urls,
    Tree,
    Json,
}
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzerOptions {
    pub root: PathBuf,
    pub host: String,
    pub format: OutputFormat,
    pub pretty: bool,
    pub router: Option<RouterKind>,
    pub substitutions: Substitutions,
    pub ignore_patterns: Vec<String>,
    pub page_extensions: Vec<String>,
}
impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            host: DEFAULT_HOST.to_string(),
            format: OutputFormat::Urls,
            pretty: false,
            router: None,
            substitutions: Substitutions::new(),
            ignore_patterns: Vec::new(),
            page_extensions: DEFAULT_PAGE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}
#[derive(Debug, Default)]
pub struct AnalyzerBuilder {
    options: AnalyzerOptions,
}
impl AnalyzerBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: AnalyzerOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.options.host = host.into();
        self
    }
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.options.format = format;
        self
    }
    pub fn tree_mode(mut self, yes: bool) -> Self {
        self.options.format = if yes {
            OutputFormat::Tree
        } else {
            OutputFormat::Urls
        };
        self
    }
    pub fn pretty(mut self, yes: bool) -> Self {
        self.options.pretty = yes;
        self
    }
    pub fn router(mut self, router: Option<RouterKind>) -> Self {
        self.options.router = router;
        self
    }
    pub fn substitute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.substitutions.insert(key.into(), value.into());
        self
    }
    pub fn substitutions(mut self, substitutions: Substitutions) -> Self {
        self.options.substitutions = substitutions;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn page_extensions(mut self, extensions: Vec<String>) -> Self {
        self.options.page_extensions = extensions;
        self
    }
    pub fn build(self) -> AnalyzerOptions {
        self.options
    }
}

/// Parses a `key=value` pair as given on the command line.
///
/// Only the first `=` separates key from value, so values may contain `=`.
pub fn parse_substitution(pair: &str) -> Result<(String, String), RouteError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() && !value.is_empty() => {
            Ok((key.to_string(), value.to_string()))
        }
        _ => Err(RouteError::InvalidSubstitution(pair.to_string())),
    }
}
