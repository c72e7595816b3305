//! Typed client for the Adzuna job-search API (v1).
//!
//! Six read-only endpoints are covered: job search, salary histogram,
//! salary history, regional breakdown, top companies and categories.

pub mod client;
mod de;
pub mod params;
pub mod types;

pub use client::{Client, Credentials};
pub use params::{
    CategoriesParams, GeodataParams, HistogramParams, HistoricalParams, SearchParams, SortBy,
    TopCompaniesParams,
};
pub use types::{
    CategoriesResult, Category, Company, GeodataLocation, GeodataResult, HistogramResult,
    HistoricalResult, JobListing, Location, SearchResult, TopCompaniesResult, TopCompany,
};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Credentials are missing, or the API rejected them with a 401.
    #[error("{0}")]
    Authentication(String),
    /// HTTP 429. Counts as an API error, see [`Error::is_api_error`].
    #[error("Adzuna API rate limit exceeded")]
    RateLimited,
    #[error("Adzuna API error: {status}")]
    Api { status: u16, body: String },
    /// No response was received: timeout or connection failure.
    #[error("Adzuna API request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Unexpected response shape from '{endpoint}': {source}")]
    Parse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Unexpected error calling Adzuna API: {0}")]
    Service(String),
}

impl Error {
    /// True for errors carrying an HTTP error status, including rate limiting.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::RateLimited | Error::Api { .. })
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RateLimited => Some(429),
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Rate limits and transport failures may succeed when tried again later.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::RateLimited | Error::Transport(_))
    }
}

impl From<reqwest::Error> for Error {
    /// Drops the request url, its query string carries the credentials.
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() || err.is_connect() || err.is_request() {
            Error::Transport(err)
        } else {
            Error::Service(err.to_string())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rate_limit_is_api_error() {
        assert!(Error::RateLimited.is_api_error());
        assert_eq!(Error::RateLimited.status(), Some(429));
        let err = Error::Api {
            status: 503,
            body: String::new(),
        };
        assert!(err.is_api_error());
        assert!(!err.is_transient());
        assert!(!Error::Authentication("bad".to_owned()).is_api_error());
    }

    #[test]
    fn test_api_error_message_names_status() {
        let err = Error::Api {
            status: 500,
            body: "boom".to_owned(),
        };
        assert_eq!(err.to_string(), "Adzuna API error: 500");
    }
}
