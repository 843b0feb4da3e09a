use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the I/O edges of the crate.
///
/// The review, enhance and report functions themselves never fail; only
/// loading questions or configuration from disk does.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ReviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ReviewError::Config("min_word_count must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: min_word_count must be positive"
        );
    }

    #[test]
    fn io_error_names_path() {
        let err = ReviewError::Io {
            path: PathBuf::from("questions.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("questions.json"));
    }
}
