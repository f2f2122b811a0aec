//! Classification and display of single path segments.
//!
//! Every folder or file stem under a router directory is parsed once into a [`Segment`],
//! which then decides both how the segment is displayed and whether it contributes
//! to the URL at all.

use crate::options::Substitutions;

/// One raw path segment, classified by its bracket syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text, used as-is.
    Static(&'a str),
    /// `[key]`
    Dynamic(&'a str),
    /// `[...key]`
    CatchAll(&'a str),
    /// `[[...key]]`
    OptionalCatchAll(&'a str),
    /// `[[key]]`
    OptionalDynamic(&'a str),
    /// `(name)`: organizes files without adding a URL component.
    RouteGroup(&'a str),
}
impl<'a> Segment<'a> {
    pub fn parse(raw: &'a str) -> Self {
        if let Some(inner) = raw.strip_prefix("[[").and_then(|s| s.strip_suffix("]]")) {
            return match inner.strip_prefix("...") {
                Some(key) if !key.is_empty() => Segment::OptionalCatchAll(key),
                None if !inner.is_empty() => Segment::OptionalDynamic(inner),
                _ => Segment::Static(raw),
            };
        }
        if let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return match inner.strip_prefix("...") {
                Some(key) if !key.is_empty() => Segment::CatchAll(key),
                None if !inner.is_empty() => Segment::Dynamic(inner),
                _ => Segment::Static(raw),
            };
        }
        if raw.len() >= 2 && raw.starts_with('(') && raw.ends_with(')') {
            return Segment::RouteGroup(raw);
        }
        Segment::Static(raw)
    }
    pub fn is_route_group(&self) -> bool {
        matches!(self, Segment::RouteGroup(_))
    }

    /// Display form of the segment. A non-empty substitution for a dynamic key wins
    /// over the `:key` placeholder.
    pub fn resolve(&self, substitutions: &Substitutions) -> String {
        let (key, suffix) = match *self {
            Segment::Static(raw) | Segment::RouteGroup(raw) => return raw.to_string(),
            Segment::Dynamic(key) => (key, ""),
            Segment::CatchAll(key) => (key, "*"),
            Segment::OptionalCatchAll(key) => (key, "*?"),
            Segment::OptionalDynamic(key) => (key, "?"),
        };
        match substitutions.get(key).filter(|value| !value.is_empty()) {
            Some(value) => value.clone(),
            None => format!(":{}{}", key, suffix),
        }
    }
}

/// Resolves a raw segment to its display name (`[slug]` → `:slug`, or the substituted value).
pub fn resolve_segment(raw: &str, substitutions: &Substitutions) -> String {
    Segment::parse(raw).resolve(substitutions)
}

/// True for `(group)` folders.
pub fn is_route_group(raw: &str) -> bool {
    Segment::parse(raw).is_route_group()
}

/// Resolves and `/`-joins the given segments.
pub(crate) fn join_resolved<S: AsRef<str>>(segments: &[S], substitutions: &Substitutions) -> String {
    segments
        .iter()
        .map(|segment| resolve_segment(segment.as_ref(), substitutions))
        .collect::<Vec<_>>()
        .join("/")
}
