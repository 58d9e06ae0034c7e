//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Domain(DomainError::InvalidPickupCode(_)) => {
                    crate::exitcode::DATAERR
                }
                ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exitcode;

    #[test]
    fn exit_codes_follow_error_layer() {
        let config = CliError::from(ApplicationError::Config {
            message: "x".into(),
        });
        assert_eq!(config.exit_code(), exitcode::CONFIG);

        let io = CliError::io("stdin", std::io::Error::other("closed"));
        assert_eq!(io.exit_code(), exitcode::IOERR);
        assert_eq!(io.to_string(), "I/O error: stdin");

        let data = CliError::from(ApplicationError::from(DomainError::InvalidPickupCode(
            "abc".into(),
        )));
        assert_eq!(data.exit_code(), exitcode::DATAERR);

        let domain = CliError::from(ApplicationError::from(DomainError::UnknownStation(
            "Harbour".into(),
        )));
        assert_eq!(domain.exit_code(), exitcode::SOFTWARE);
    }
}
