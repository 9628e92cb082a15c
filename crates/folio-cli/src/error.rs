use thiserror::Error;

use folio_core::{CodecError, FormatError, RestError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Rest(#[from] RestError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Rest(error) => match error {
                RestError::Status { .. } | RestError::UnsupportedMediaType { .. } => 3,
                RestError::Codec(codec) => codec_exit_code(codec),
                RestError::PortfolioNotSelected | RestError::InvalidConfig(_) => 2,
                RestError::Transport(_) => 10,
            },
            Self::Codec(error) => codec_exit_code(error),
            Self::Format(_) => 2,
            Self::Serialization(_) => 4,
            Self::Logging(_) | Self::Io(_) => 10,
        }
    }
}

fn codec_exit_code(error: &CodecError) -> u8 {
    match error {
        CodecError::Io(_) => 10,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_rest_failures_to_exit_codes() {
        let status = CliError::from(RestError::Status {
            status: 404,
            reason: String::from("Not Found"),
        });
        assert_eq!(status.exit_code(), 3);

        assert_eq!(CliError::from(RestError::PortfolioNotSelected).exit_code(), 2);

        let decode = serde_json::from_str::<serde_json::Value>("{").expect_err("must fail");
        let codec = CliError::from(RestError::Codec(CodecError::Decode(decode)));
        assert_eq!(codec.exit_code(), 4);
    }

    #[test]
    fn inverted_ranges_are_usage_errors() {
        let error = CliError::from(FormatError::InvertedRange {
            from: String::from("2020-01-02"),
            to: String::from("2020-01-01"),
        });
        assert_eq!(error.exit_code(), 2);
    }
}
