//! Error handling.
//!
//! The mock search path never fails; these errors come from argument
//! handling, the terminal and file I/O.

use colored::*;
use std::fmt;

/// Result type alias for the application.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type for the application.
#[derive(Debug)]
pub enum SearchError {
    /// Invalid command line arguments.
    InvalidArguments(String),

    /// IO error.
    IoError(std::io::Error),

    /// TUI rendering error.
    TuiError(String),

    /// Terminal related error.
    TerminalError(String),

    /// File access error.
    FileAccessError { path: String, reason: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let warn_msg = match self {
            SearchError::InvalidArguments(msg) => format!("Invalid arguments: {}", msg),
            SearchError::IoError(err) => format!("IO error: {}", err),
            SearchError::TuiError(err) => format!("TUI error: {}", err),
            SearchError::TerminalError(err) => format!(
                "Terminal error: {}\n Try running in a proper terminal.",
                err
            ),
            SearchError::FileAccessError { path, reason } => {
                format!("File access error: Path: {}\n Reason: {}", path, reason)
            }
        };
        write!(f, "{}", warn_msg.red().bold())
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        SearchError::IoError(err)
    }
}

impl SearchError {
    /// Create a terminal error with context
    pub fn terminal_error(err: &str) -> Self {
        SearchError::TerminalError(err.to_string())
    }

    /// Create a file access error with context
    pub fn file_access_error(path: &str, reason: &str) -> Self {
        SearchError::FileAccessError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            SearchError::FileAccessError { .. } => true,
            SearchError::InvalidArguments(_)
            | SearchError::IoError(_)
            | SearchError::TuiError(_)
            | SearchError::TerminalError(_) => false,
        }
    }

    /// Get user-friendly recovery suggestion
    pub fn get_recovery_suggestion(&self) -> Option<String> {
        match self {
            SearchError::InvalidArguments(..) => {
                Some("Run with --help to see the accepted arguments.".to_string())
            }
            SearchError::FileAccessError { .. } => {
                Some("Check file permissions and try again.".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::InvalidArguments("test error".to_string());
        assert!(err.to_string().contains("Invalid arguments"));
        assert!(err.to_string().contains("test error"));

        let err = SearchError::TuiError("draw failed".to_string());
        assert!(err.to_string().contains("TUI error:"));
        assert!(err.to_string().contains("draw failed"));

        let err = SearchError::TerminalError("terminal test error".to_string());
        assert!(err.to_string().contains("Terminal error:"));
        assert!(err
            .to_string()
            .contains("Try running in a proper terminal."));

        let err = SearchError::FileAccessError {
            path: "/path".to_string(),
            reason: "access reason".to_string(),
        };
        assert!(err.to_string().contains("File access error:"));
        assert!(err.to_string().contains("Path:"));
        assert!(err.to_string().contains("Reason:"));
    }

    #[test]
    fn test_error_helper_functions() {
        let err = SearchError::terminal_error("terminal error");
        assert!(matches!(err, SearchError::TerminalError(_)));

        let err = SearchError::file_access_error("/path/to/file", "access denied");
        assert!(matches!(err, SearchError::FileAccessError { .. }));
    }

    #[test]
    fn test_io_error_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "io error");
        let err: SearchError = io.into();
        assert!(matches!(err, SearchError::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(SearchError::file_access_error("/path", "reason").is_recoverable());

        assert!(!SearchError::InvalidArguments("args error".to_string()).is_recoverable());
        assert!(!SearchError::TerminalError("terminal error".to_string()).is_recoverable());
        assert!(
            !SearchError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "io error"))
                .is_recoverable()
        );
        assert!(!SearchError::TuiError("tui error".to_string()).is_recoverable());
    }

    #[test]
    fn test_recovery_suggestion() {
        let err = SearchError::file_access_error("/path", "reason");
        assert_eq!(
            err.get_recovery_suggestion().unwrap(),
            "Check file permissions and try again."
        );

        let err = SearchError::InvalidArguments("args error".to_string());
        assert!(err.get_recovery_suggestion().unwrap().contains("--help"));

        let err = SearchError::TuiError("tui error".to_string());
        assert!(err.get_recovery_suggestion().is_none());

        let err = SearchError::TerminalError("terminal error".to_string());
        assert!(err.get_recovery_suggestion().is_none());
    }
}
