use thiserror::Error;

use crate::http_client::HttpError;

/// Malformed calendar scalar text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("time must be formatted as HH:MM:SS: '{value}'")]
    InvalidTime { value: String },
    #[error("date-time must be formatted as YYYY-MM-DDTHH:MM:SS: '{value}'")]
    InvalidDateTime { value: String },
    #[error("date range end {to} precedes start {from}")]
    InvertedRange { from: String, to: String },
}

/// Raised while a polymorphic family registry is assembled.
///
/// These reflect broken variant definitions rather than bad input, so callers
/// treat them as fatal initialization failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryBuildError {
    #[error("{family}: discriminator '{discriminator}' claimed by both {first} and {second}")]
    DuplicateDiscriminator {
        family: &'static str,
        discriminator: String,
        first: &'static str,
        second: &'static str,
    },
    #[error("{family}: discriminator of {variant} does not encode as a JSON string")]
    UnrepresentableDiscriminator {
        family: &'static str,
        variant: &'static str,
    },
}

/// Failure to turn a JSON tree into a member of a polymorphic family.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{family}: type field is missing")]
    MissingDiscriminator { family: &'static str },

    #[error("{family}: type field is invalid: {value}")]
    InvalidDiscriminator { family: &'static str, value: String },

    #[error("{family}: expected a JSON object, found {found}")]
    NotAnObject {
        family: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    Registry(#[from] RegistryBuildError),

    #[error("decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error type returned by the serializer facade.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stream error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Registry(#[from] RegistryBuildError),
}

impl CodecError {
    /// True when the input was not well-formed JSON at all.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Decode(error) if error.is_syntax() || error.is_eof())
    }
}

/// Failure of a call made through the REST client.
#[derive(Debug, Error)]
pub enum RestError {
    #[error("server responded {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("expected an application/json response, received '{content_type}'")]
    UnsupportedMediaType { content_type: String },

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("no portfolio selected for this session")]
    PortfolioNotSelected,

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl RestError {
    /// HTTP status associated with the failure, if any.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::UnsupportedMediaType { .. } => Some(415),
            _ => None,
        }
    }
}
