//! Tool arguments as an agent supplies them.
//!
//! Each input converts into the matching `adzuna` params, which is where
//! ranges and country codes are validated.

use adzuna::{
    CategoriesParams, GeodataParams, HistogramParams, HistoricalParams, SearchParams, SortBy,
    TopCompaniesParams,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNTRY: &str = "us";
pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const DEFAULT_MONTHS: u32 = 12;

fn default_country() -> String {
    DEFAULT_COUNTRY.to_owned()
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

fn default_months() -> u32 {
    DEFAULT_MONTHS
}

fn required(name: &str, value: &str) -> adzuna::Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(adzuna::Error::InvalidParameter(format!(
            "{} must not be empty",
            name
        )));
    }
    Ok(value.to_owned())
}

/// Trimmed, with blank treated as absent.
pub(crate) fn optional(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct JobSearchInput {
    /// Keywords, e.g. "Python developer"
    pub query: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_country")]
    pub country: String,
    /// 1 to 50
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Relevance when absent
    #[serde(default)]
    pub sort_by: Option<SortBy>,
}

impl JobSearchInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: None,
            country: default_country(),
            max_results: DEFAULT_MAX_RESULTS,
            sort_by: None,
        }
    }
}

impl TryFrom<&JobSearchInput> for SearchParams {
    type Error = adzuna::Error;

    fn try_from(input: &JobSearchInput) -> adzuna::Result<Self> {
        let mut params = SearchParams::new(&input.country)?
            .with_keyword(required("query", &input.query)?)
            .with_page(1)?
            .with_results_per_page(input.max_results)?;
        if let Some(location) = optional(&input.location) {
            params = params.with_location(location);
        }
        if let Some(sort_by) = input.sort_by {
            params = params.with_sort_by(sort_by);
        }
        Ok(params)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SalaryAnalysisInput {
    pub job_title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_country")]
    pub country: String,
}

impl SalaryAnalysisInput {
    pub fn new(job_title: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            location: None,
            country: default_country(),
        }
    }
}

impl TryFrom<&SalaryAnalysisInput> for HistogramParams {
    type Error = adzuna::Error;

    fn try_from(input: &SalaryAnalysisInput) -> adzuna::Result<Self> {
        let mut params = HistogramParams::new(&input.country)?
            .with_keyword(required("job_title", &input.job_title)?);
        if let Some(location) = optional(&input.location) {
            params = params.with_location(location);
        }
        Ok(params)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TopCompaniesInput {
    /// Category tag, e.g. "it-jobs"
    #[serde(default)]
    pub job_category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_country")]
    pub country: String,
}

impl Default for TopCompaniesInput {
    fn default() -> Self {
        Self {
            job_category: None,
            location: None,
            country: default_country(),
        }
    }
}

impl TryFrom<&TopCompaniesInput> for TopCompaniesParams {
    type Error = adzuna::Error;

    fn try_from(input: &TopCompaniesInput) -> adzuna::Result<Self> {
        let mut params = TopCompaniesParams::new(&input.country)?;
        if let Some(category) = optional(&input.job_category) {
            params = params.with_category(category);
        }
        if let Some(location) = optional(&input.location) {
            params = params.with_location(location);
        }
        Ok(params)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct JobCategoriesInput {
    #[serde(default = "default_country")]
    pub country: String,
}

impl Default for JobCategoriesInput {
    fn default() -> Self {
        Self {
            country: default_country(),
        }
    }
}

impl TryFrom<&JobCategoriesInput> for CategoriesParams {
    type Error = adzuna::Error;

    fn try_from(input: &JobCategoriesInput) -> adzuna::Result<Self> {
        CategoriesParams::new(&input.country)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RegionalStatsInput {
    /// Parent region, e.g. "California"
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_country")]
    pub country: String,
}

impl Default for RegionalStatsInput {
    fn default() -> Self {
        Self {
            location: None,
            country: default_country(),
        }
    }
}

impl TryFrom<&RegionalStatsInput> for GeodataParams {
    type Error = adzuna::Error;

    fn try_from(input: &RegionalStatsInput) -> adzuna::Result<Self> {
        let mut params = GeodataParams::new(&input.country)?;
        if let Some(location) = optional(&input.location) {
            params = params.with_location(location);
        }
        Ok(params)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HistoricalTrendsInput {
    pub job_title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_country")]
    pub country: String,
    /// 1 to 24
    #[serde(default = "default_months")]
    pub months: u32,
}

impl HistoricalTrendsInput {
    pub fn new(job_title: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            location: None,
            country: default_country(),
            months: DEFAULT_MONTHS,
        }
    }
}

impl TryFrom<&HistoricalTrendsInput> for HistoricalParams {
    type Error = adzuna::Error;

    fn try_from(input: &HistoricalTrendsInput) -> adzuna::Result<Self> {
        let mut params = HistoricalParams::new(&input.country)?
            .with_keyword(required("job_title", &input.job_title)?)
            .with_months(input.months)?;
        if let Some(location) = optional(&input.location) {
            params = params.with_location(location);
        }
        Ok(params)
    }
}
