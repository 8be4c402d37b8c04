use crate::types::observation::FailureKind;
use polars::error::PolarsError;
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Meteomatics API returned an error status")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse CSV response from {url}")]
    CsvParse {
        url: String,
        #[source]
        source: PolarsError,
    },

    #[error("No data returned by Meteomatics API")]
    EmptyResult,

    #[error("Response has none of the requested parameter columns (found: {found})")]
    MissingParameters { found: String },

    #[error("Year {0} has no valid observation instant")]
    InvalidYear(i32),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}

impl WeatherDataError {
    /// Classifies the error for the record handed to the presentation layer.
    pub fn kind(&self) -> FailureKind {
        match self {
            WeatherDataError::ClientBuild(_)
            | WeatherDataError::NetworkRequest(..)
            | WeatherDataError::HttpStatus { .. }
            | WeatherDataError::TaskJoin(_) => FailureKind::UpstreamUnavailable,
            WeatherDataError::EmptyResult => FailureKind::EmptyResult,
            WeatherDataError::CsvParse { .. }
            | WeatherDataError::MissingParameters { .. }
            | WeatherDataError::DataFrame(_) => FailureKind::MalformedResponse,
            WeatherDataError::InvalidYear(_) => FailureKind::InvalidRequest,
        }
    }

    /// The error message followed by its chain of causes, separated by `: `.
    ///
    /// Request URLs appear only once, in the text of the underlying `reqwest` error.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
