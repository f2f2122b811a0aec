use crate::options::RouterKind;
use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Route structure not found. Please check your Next.js {router} directory: {dir}")]
    NoRoutes { router: RouterKind, dir: PathBuf },
    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),
    #[error("Invalid substitution '{0}', expected key=value")]
    InvalidSubstitution(String),
    #[error("Invalid router type '{0}', expected app or pages")]
    InvalidRouterType(String),
    #[error("Specified path does not exist: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("Specified path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
impl RouteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RouteError::Io {
            path: path.into(),
            source,
        }
    }
}
