// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    Email(EmailError),
}

/// Specific error types for message delivery issues.
/// The visitor only ever sees a generic failure message; these variants
/// exist so the underlying cause can be logged for diagnostics.
#[derive(Debug, Clone)]
pub enum EmailError {
    /// The request never reached the provider (DNS, TLS, connection reset).
    Network(String),

    /// The provider answered with a non-success status.
    Rejected { status: u16, body: String },
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailError::Network(msg) => write!(f, "Network error: {}", msg),
            EmailError::Rejected { status, body } => {
                if body.is_empty() {
                    write!(f, "Delivery rejected with HTTP status {}", status)
                } else {
                    write!(f, "Delivery rejected with HTTP status {}: {}", status, body)
                }
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Email(e) => write!(f, "Email Error: {}", e),
        }
    }
}

impl From<EmailError> for Error {
    fn from(err: EmailError) -> Self {
        Error::Email(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn email_error_converts_to_email_variant() {
        let err: Error = EmailError::Network("connection refused".to_string()).into();
        assert!(matches!(err, Error::Email(EmailError::Network(_))));
    }

    #[test]
    fn rejected_without_body_omits_trailing_colon() {
        let err = EmailError::Rejected {
            status: 403,
            body: String::new(),
        };
        assert_eq!(format!("{}", err), "Delivery rejected with HTTP status 403");
    }

    #[test]
    fn rejected_with_body_includes_it() {
        let err = EmailError::Rejected {
            status: 400,
            body: "The service ID is invalid".to_string(),
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("400"));
        assert!(rendered.contains("service ID"));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
