use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing error in {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration file {} is not valid UTF-8 text: {source}", path.display())]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported YAML tag {tag} in {}", path.display())]
    UnsupportedTag { path: PathBuf, tag: String },

    #[error("Configuration in {} must be a mapping at the top level, found {found}", path.display())]
    NotAMapping { path: PathBuf, found: &'static str },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Unable to resolve the configuration base directory: {0}")]
    BaseDirectory(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The file could not be read, or output could not be written.
    Io,
    /// The file was read but is not a usable YAML mapping.
    Parse,
    /// The base directory for the configuration path could not be resolved.
    Environment,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::FileNotFound { .. } | AppError::Io { .. } | AppError::Output(_) => {
                ErrorCategory::Io
            }
            AppError::ParseError { .. }
            | AppError::InvalidEncoding { .. }
            | AppError::UnsupportedTag { .. }
            | AppError::NotAMapping { .. } => ErrorCategory::Parse,
            AppError::BaseDirectory(_) => ErrorCategory::Environment,
        }
    }

    /// Process exit status for this error. `2` is left to clap usage errors.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Io => 1,
            ErrorCategory::Parse => 3,
            ErrorCategory::Environment => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::FileNotFound { path } => {
                format!("Cannot find configuration file '{}'", path.display())
            }
            AppError::Io { path, source } => {
                format!("Cannot read configuration file '{}': {}", path.display(), source)
            }
            AppError::ParseError { path, source } => {
                format!("Configuration file '{}' is not valid YAML: {}", path.display(), source)
            }
            AppError::InvalidEncoding { path, .. } => {
                format!("Configuration file '{}' is not UTF-8 text", path.display())
            }
            AppError::UnsupportedTag { path, tag } => format!(
                "Configuration file '{}' uses the unsupported tag {}",
                path.display(),
                tag
            ),
            AppError::NotAMapping { path, found } => format!(
                "Configuration file '{}' holds a {} instead of key/value pairs",
                path.display(),
                found
            ),
            AppError::Output(source) => format!("Cannot write to standard output: {}", source),
            AppError::BaseDirectory(source) => {
                format!("Cannot determine where to look for the configuration: {}", source)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::FileNotFound { .. } => {
                "Create config/config.yaml one level above the directory holding the executable"
            }
            AppError::Io { .. } => "Check that the configuration path is a regular, readable file",
            AppError::ParseError { .. } => "Fix the YAML syntax, e.g. `message: hello docker`",
            AppError::InvalidEncoding { .. } => "Save the configuration file as UTF-8",
            AppError::UnsupportedTag { .. } => "Remove custom `!tag` markers from the values",
            AppError::NotAMapping { .. } => {
                "Use `key: value` pairs at the top level, e.g. `message: hello docker`"
            }
            AppError::Output(_) => "Check that standard output is still open",
            AppError::BaseDirectory(_) => "Run the program from a regular file on disk",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_exit_code() {
        let err = AppError::FileNotFound {
            path: PathBuf::from("config/config.yaml"),
        };
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("config/config.yaml"));
    }

    #[test]
    fn test_parse_errors_share_exit_code() {
        let source = serde_yaml::from_str::<serde_yaml::Value>("a: [1, 2").unwrap_err();
        let parse = AppError::ParseError {
            path: PathBuf::from("c.yaml"),
            source,
        };
        let shape = AppError::NotAMapping {
            path: PathBuf::from("c.yaml"),
            found: "sequence",
        };

        assert_eq!(parse.exit_code(), 3);
        assert_eq!(shape.exit_code(), 3);
        assert!(shape.user_friendly_message().contains("sequence"));
    }

    #[test]
    fn test_encoding_and_tag_errors_are_parse_kind() {
        let encoding = AppError::InvalidEncoding {
            path: PathBuf::from("c.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        };
        let tag = AppError::UnsupportedTag {
            path: PathBuf::from("c.yaml"),
            tag: "!greet".to_string(),
        };

        assert_eq!(encoding.category(), ErrorCategory::Parse);
        assert_eq!(encoding.exit_code(), 3);
        assert_eq!(tag.exit_code(), 3);
        assert!(tag.to_string().contains("!greet"));
    }
}
