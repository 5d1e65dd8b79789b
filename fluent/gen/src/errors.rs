//! Error types for the fluent generator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during code generation.
///
/// Every variant is terminal: generation is never retried and nothing is
/// rolled back beyond discarding the staged output.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The directory meant to hold the destination file does not exist.
    ///
    /// Checked before anything is written.
    #[error("Code file directory not found: {}", path.display())]
    DestinationNotFound { path: PathBuf },

    /// Writing or committing the generated file failed.
    #[error("Failed to generate '{}'", path.display())]
    GenerationFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize descriptors for `--list`.
    #[error("Failed to serialize method descriptors")]
    Serialize(#[from] serde_json::Error),
}

impl GeneratorError {
    /// Wraps an I/O error raised while producing `path`.
    pub fn failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::GenerationFailure {
            path: path.into(),
            source,
        }
    }
}
