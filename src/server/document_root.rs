//! The directory files are served from, and access to the files in it.

use std::io;
use std::path::{Component, Path, PathBuf};

use log::debug;

/// Absolute directory that request paths are resolved against.
///
/// Built once at startup and shared read-only between connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRoot {
    path: PathBuf,
}

/// Outcome of reading a file below the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReadResult {
    /// The full file content.
    Found(Vec<u8>),
    /// The file is missing or could not be read.
    NotFound,
}

impl DocumentRoot {
    /// Use `path` as the root, made absolute against the current directory.
    ///
    /// The file system is not consulted, so the directory need not exist yet.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            path: std::path::absolute(path)?,
        })
    }

    /// Use the current working directory as the root.
    pub fn current_dir() -> io::Result<Self> {
        Ok(Self {
            path: std::env::current_dir()?,
        })
    }

    /// The absolute root directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Map a request path onto the file system.
    ///
    /// `/` is served as `/index.html`. Leading slashes are stripped before
    /// joining, so the result always lies below the root. Returns `None` if
    /// the path contains a `..` segment.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let request_path = if request_path == "/" {
            "/index.html"
        } else {
            request_path
        };

        let relative = Path::new(request_path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
        {
            return None;
        }

        Some(self.path.join(relative))
    }

    /// Read the whole file at `path`.
    ///
    /// Every failure, not only a missing file, is reported as
    /// [`FileReadResult::NotFound`].
    pub async fn read(&self, path: &Path) -> FileReadResult {
        match tokio::fs::read(path).await {
            Ok(content) => FileReadResult::Found(content),
            Err(e) => {
                debug!("Cannot read {path}: {e}", path = path.display());
                FileReadResult::NotFound
            }
        }
    }
}
