use anyhow::Error;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    PermissionDenied,
    NotFound,
    DirectoryNotEmpty,
    Other,
}

/// Classify a removal error by the `io::Error` kinds in its chain
pub fn classify_error(error: &Error) -> ErrorType {
    for cause in error.chain() {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            match io_err.kind() {
                io::ErrorKind::PermissionDenied => return ErrorType::PermissionDenied,
                io::ErrorKind::NotFound => return ErrorType::NotFound,
                _ => {}
            }
        }
    }

    // Non-empty directories are recognized by the OS message
    let error_msg = format!("{:#}", error).to_lowercase();
    if error_msg.contains("directory not empty") {
        return ErrorType::DirectoryNotEmpty;
    }

    ErrorType::Other
}

/// Format error message for the toast - show the root cause, not the context wrappers
pub fn format_error_message(error: &Error) -> String {
    error
        .chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| error.to_string())
}
