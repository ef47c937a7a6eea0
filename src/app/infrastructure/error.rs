use std::path::PathBuf;

use thiserror::Error;

/// Failures from file and settings I/O. None are fatal: file errors are
/// shown to the user, settings errors are logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Shown verbatim under "Could not open/save file:".
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings path {} is a directory", .0.display())]
    SettingsPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_shows_os_message_only() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert_eq!(app_err.to_string(), "file not found");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
        assert!(app_err.to_string().starts_with("malformed settings:"));
    }

    #[test]
    fn test_settings_path_display() {
        let err = AppError::SettingsPath(PathBuf::from("/tmp/conf"));
        assert_eq!(err.to_string(), "settings path /tmp/conf is a directory");
    }
}
