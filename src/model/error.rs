//! Error types for release model operations.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building, resolving or rendering the release model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Free-form error with a message.
    #[error("{0}")]
    GenericError(String),

    /// Raw I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// I/O error with the action and path that caused it.
    #[error("{context} ({}): {source}", .path.display())]
    Fs {
        /// What was being done.
        context: String,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// Template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Packager name is not known.
    #[error("unknown packager: {0}")]
    UnknownPackager(String),

    /// Distribution type name is not known.
    #[error("unknown distribution type: {0}")]
    UnknownDistributionType(String),

    /// Checksum algorithm name is not known.
    #[error("unknown checksum algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Named distribution does not exist in the model.
    #[error("distribution not found: {0}")]
    DistributionNotFound(String),
}

/// Attaches a message to a failure, turning it into [`Error::GenericError`].
pub trait Context<T> {
    /// Wraps the failure with `msg`.
    fn context<C: Display>(self, msg: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Adds filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Records `context` and `path` alongside the I/O error.
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Returns early with a formatted [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::model::Error::GenericError(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_context_produces_generic_error() {
        let missing: Option<u8> = None;
        let err = missing.context("value is required").unwrap_err();
        assert_eq!(err.to_string(), "value is required");
    }

    #[test]
    fn fs_context_keeps_path() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = result.fs_context("reading artifact", "/tmp/a.zip").unwrap_err();
        assert_eq!(err.to_string(), "reading artifact (/tmp/a.zip): gone");
    }

    fn fails() -> Result<()> {
        crate::bail!("bad {}", 42);
    }

    #[test]
    fn bail_returns_generic_error() {
        assert_eq!(fails().unwrap_err().to_string(), "bad 42");
    }
}
