use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::params::{
    CategoriesParams, GeodataParams, HistogramParams, HistoricalParams, Query, SearchParams,
    TopCompaniesParams,
};
use crate::types::{
    CategoriesResult, GeodataResult, HistogramResult, HistoricalResult, SearchResult,
    TopCompaniesResult,
};
use crate::{Error, Result};

pub const BASE_URL: &str = "https://api.adzuna.com/v1/api";
pub const TIMEOUT: Duration = Duration::from_secs(30);

pub const APP_ID_VAR: &str = "ADZUNA_APP_ID";
pub const APP_KEY_VAR: &str = "ADZUNA_APP_KEY";

/// Static API credentials, sent as the `app_id` and `app_key` query parameters.
#[derive(Clone)]
pub struct Credentials {
    app_id: String,
    app_key: String,
}

impl Credentials {
    /// Fails if either value is blank.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Result<Self> {
        let app_id = app_id.into().trim().to_owned();
        let app_key = app_key.into().trim().to_owned();
        if app_id.is_empty() || app_key.is_empty() {
            log::error!("Adzuna API credentials not configured");
            return Err(Error::Authentication(format!(
                "Adzuna API credentials not configured. Set {} and {} in .env",
                APP_ID_VAR, APP_KEY_VAR
            )));
        }
        Ok(Self { app_id, app_key })
    }

    /// Reads `ADZUNA_APP_ID` and `ADZUNA_APP_KEY`.
    pub fn from_env() -> Result<Self> {
        let app_id = std::env::var(APP_ID_VAR).unwrap_or_default();
        let app_key = std::env::var(APP_KEY_VAR).unwrap_or_default();
        Self::new(app_id, app_key)
    }

    fn as_query(&self) -> [(&'static str, &str); 2] {
        [("app_id", self.app_id.as_str()), ("app_key", self.app_key.as_str())]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &"***MASKED***")
            .field("app_key", &"***MASKED***")
            .finish()
    }
}

/// Adzuna API client.
///
/// Cheap to clone; clones share the connection pool. Build one at startup and
/// hand it to every call site.
#[derive(Clone, Debug)]
pub struct Client {
    client: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl Client {
    pub fn new(credentials: Credentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| Error::Service(e.to_string()))?;
        Ok(Self::with_http_client(credentials, BASE_URL, client))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Uses the given transport and base url instead of the defaults.
    /// The transport is expected to carry its own timeout.
    pub fn with_http_client(
        credentials: Credentials,
        base_url: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        log::info!("Adzuna client initialized");
        Self {
            client,
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Issues one authenticated GET and parses the body into `T`.
    async fn get<Q, T>(&self, params: &Q) -> Result<T>
    where
        Q: Query,
        T: DeserializeOwned,
    {
        let endpoint = params.endpoint();
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {}", endpoint);

        let resp = self
            .client
            .get(&url)
            .query(params)
            .query(&self.credentials.as_query())
            .send()
            .await
            .map_err(|e| {
                let err = Error::from(e);
                log::error!("Adzuna request to {} failed: {}", endpoint, err);
                err
            })?;

        let status = resp.status();
        match status {
            StatusCode::UNAUTHORIZED => {
                log::error!("Invalid Adzuna API credentials, endpoint: {}", endpoint);
                return Err(Error::Authentication(
                    "Invalid Adzuna API credentials".to_owned(),
                ));
            }
            StatusCode::TOO_MANY_REQUESTS => {
                log::warn!("Adzuna API rate limit exceeded, endpoint: {}", endpoint);
                return Err(Error::RateLimited);
            }
            status if status.as_u16() >= 400 => {
                let body = resp.text().await.unwrap_or_default();
                log::error!(
                    "Adzuna API error, endpoint: {}, status: {}, body: {}",
                    endpoint,
                    status,
                    body
                );
                return Err(Error::Api {
                    status: status.as_u16(),
                    body,
                });
            }
            _ => {}
        }

        let body = resp.text().await.map_err(|e| {
            let err = Error::from(e);
            log::error!("Failed reading body from {}: {}", endpoint, err);
            err
        })?;
        match serde_json::from_str::<T>(&body) {
            Ok(parsed) => {
                log::info!("Adzuna request succeeded, endpoint: {}", endpoint);
                Ok(parsed)
            }
            Err(source) => {
                log::error!("Failed to parse response from {}: {}", endpoint, source);
                Err(Error::Parse { endpoint, source })
            }
        }
    }

    pub async fn search_jobs(&self, params: &SearchParams) -> Result<SearchResult> {
        log::debug!(
            "Searching Adzuna jobs, what: {:?}, where: {:?}",
            params.keyword(),
            params.location()
        );
        self.get(params).await
    }

    pub async fn salary_histogram(&self, params: &HistogramParams) -> Result<HistogramResult> {
        self.get(params).await
    }

    pub async fn historical_data(&self, params: &HistoricalParams) -> Result<HistoricalResult> {
        self.get(params).await
    }

    pub async fn geodata(&self, params: &GeodataParams) -> Result<GeodataResult> {
        self.get(params).await
    }

    /// At most five companies, ranked by open vacancies.
    pub async fn top_companies(&self, params: &TopCompaniesParams) -> Result<TopCompaniesResult> {
        self.get(params).await
    }

    pub async fn categories(&self, params: &CategoriesParams) -> Result<CategoriesResult> {
        self.get(params).await
    }
}
