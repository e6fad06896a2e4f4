//! Error types for the Lexi Core Library

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the lexi core library
///
/// Scheduling and cache operations are pure or best-effort and do not
/// fail; errors here come from the durable progress store boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing the progress store failed
    #[error("progress store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored progress data could not be parsed
    #[error("corrupt progress data: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The store rejected an operation
    #[error("progress store error: {message}")]
    Store { message: String },
}

impl Error {
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let error = Error::store("backend unavailable");
        assert!(error.to_string().contains("backend unavailable"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
