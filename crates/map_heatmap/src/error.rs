//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, interpolation contract violations, numerical guards,
//! IO, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("interpolation requires at least one sample point")]
    EmptySamples,

    #[error("non-finite value produced in {context}")]
    NonFinite { context: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn from_str_allocates_owned_message() {
        let err: Error = "issue".into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "issue"));
    }

    #[test]
    fn display_messages_name_the_problem() {
        assert_eq!(
            Error::InvalidConfig("rows must be > 0".into()).to_string(),
            "invalid configuration: rows must be > 0"
        );
        assert_eq!(
            Error::NonFinite {
                context: "gaussian".into()
            }
            .to_string(),
            "non-finite value produced in gaussian"
        );
        assert!(Error::EmptySamples.to_string().contains("at least one sample"));
    }
}
