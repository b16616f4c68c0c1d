//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Input errors are raised at the parsing boundary before any policy runs.
/// The simulation itself only fails on violated preconditions.
#[derive(Debug, Error)]
pub enum Error {
    /// A reference-string token is not an integer.
    #[error("Invalid page '{token}' at position {position}")]
    InvalidPage { position: usize, token: String },

    /// The frame count is not an integer.
    #[error("Invalid frame count '{0}'")]
    InvalidFrameCount(String),

    /// The frame count parsed but is zero or negative.
    #[error("Frame count must be positive, got {0}")]
    NonPositiveFrames(i64),

    /// The reference string holds no pages.
    #[error("Reference string is empty")]
    EmptyStream,

    /// A simulation was requested with zero frames.
    #[error("Simulation requires at least one frame")]
    ZeroFrames,

    /// I/O error while reading an input or config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON config, or a report that failed to serialize.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error was caused by user input rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidPage { .. }
                | Error::InvalidFrameCount(_)
                | Error::NonPositiveFrames(_)
                | Error::EmptyStream
                | Error::ZeroFrames
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidPage {
            position: 2,
            token: "x".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid page 'x' at position 2");

        let err = Error::NonPositiveFrames(-1);
        assert_eq!(format!("{}", err), "Frame count must be positive, got -1");

        assert_eq!(format!("{}", Error::EmptyStream), "Reference string is empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
        assert!(!Error::Io(std::io::Error::other("x")).is_invalid_input());
    }

    #[test]
    fn test_invalid_input_classification() {
        assert!(Error::EmptyStream.is_invalid_input());
        assert!(Error::ZeroFrames.is_invalid_input());
        assert!(Error::InvalidFrameCount("abc".into()).is_invalid_input());
    }
}
