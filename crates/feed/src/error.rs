//! Error types for the tripcal-feed crate.

use std::path::PathBuf;

/// Error type for feed loading and parsing.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Returned when the feed file cannot be read.
    #[error("failed to read feed {}", path.display())]
    Read {
        /// Path of the feed file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when the feed content is not valid feed JSON.
    #[error("failed to parse feed JSON")]
    Parse {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
