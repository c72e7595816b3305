use serde::{Deserialize, Serialize};

use crate::de::flag;
use crate::{Error, Result};

pub const MAX_RESULTS_PER_PAGE: u32 = 50;
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 20;
pub const MAX_HISTORY_MONTHS: u32 = 24;
pub const DEFAULT_HISTORY_MONTHS: u32 = 12;

/// Parameters of a single endpoint call.
///
/// Serializing a value yields its query string minus credentials; path
/// components are skipped and `None` fields are left out entirely.
pub trait Query: Serialize {
    /// Endpoint path relative to the API base url.
    fn endpoint(&self) -> String;
}

fn normalize_country(country: &str) -> Result<String> {
    let country = country.trim().to_lowercase();
    if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidParameter(format!(
            "country must be a two-letter code, got '{}'",
            country
        )));
    }
    Ok(country)
}

fn non_blank(value: impl Into<String>) -> Option<String> {
    let value: String = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn check_range(name: &str, value: u32, min: u32, max: u32) -> Result<u32> {
    if value < min || value > max {
        return Err(Error::InvalidParameter(format!(
            "{} must be between {} and {}, got {}",
            name, min, max, value
        )));
    }
    Ok(value)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Relevance,
    Date,
    Salary,
}

impl std::str::FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(SortBy::Relevance),
            "date" => Ok(SortBy::Date),
            "salary" => Ok(SortBy::Salary),
            other => Err(Error::InvalidParameter(format!(
                "sort_by must be one of relevance, date, salary, got '{}'",
                other
            ))),
        }
    }
}

/// `GET jobs/{country}/search/{page}`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SearchParams {
    #[serde(skip)]
    country: String,
    #[serde(skip)]
    page: u32,
    #[serde(rename = "what", skip_serializing_if = "Option::is_none")]
    keyword: Option<String>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    salary_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    salary_max: Option<u32>,
    #[serde(serialize_with = "flag", skip_serializing_if = "Option::is_none")]
    full_time: Option<bool>,
    #[serde(serialize_with = "flag", skip_serializing_if = "Option::is_none")]
    part_time: Option<bool>,
    #[serde(serialize_with = "flag", skip_serializing_if = "Option::is_none")]
    permanent: Option<bool>,
    #[serde(serialize_with = "flag", skip_serializing_if = "Option::is_none")]
    contract: Option<bool>,
    results_per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by: Option<SortBy>,
}

impl SearchParams {
    pub fn new(country: &str) -> Result<Self> {
        Ok(Self {
            country: normalize_country(country)?,
            page: 1,
            keyword: None,
            location: None,
            salary_min: None,
            salary_max: None,
            full_time: None,
            part_time: None,
            permanent: None,
            contract: None,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            category: None,
            sort_by: Some(SortBy::default()),
        })
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = non_blank(keyword);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category);
        self
    }

    pub fn with_page(mut self, page: u32) -> Result<Self> {
        self.page = check_range("page", page, 1, u32::MAX)?;
        Ok(self)
    }

    pub fn with_results_per_page(mut self, results_per_page: u32) -> Result<Self> {
        self.results_per_page =
            check_range("results_per_page", results_per_page, 1, MAX_RESULTS_PER_PAGE)?;
        Ok(self)
    }

    /// Annual salary bounds. Either side may be left open.
    pub fn with_salary_range(mut self, min: Option<u32>, max: Option<u32>) -> Result<Self> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(Error::InvalidParameter(format!(
                    "salary_min ({}) exceeds salary_max ({})",
                    min, max
                )));
            }
        }
        self.salary_min = min;
        self.salary_max = max;
        Ok(self)
    }

    pub fn with_full_time(mut self, full_time: bool) -> Self {
        self.full_time = Some(full_time);
        self
    }

    pub fn with_part_time(mut self, part_time: bool) -> Self {
        self.part_time = Some(part_time);
        self
    }

    pub fn with_permanent(mut self, permanent: bool) -> Self {
        self.permanent = Some(permanent);
        self
    }

    pub fn with_contract(mut self, contract: bool) -> Self {
        self.contract = Some(contract);
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn results_per_page(&self) -> u32 {
        self.results_per_page
    }

    pub fn sort_by(&self) -> Option<SortBy> {
        self.sort_by
    }
}

impl Query for SearchParams {
    fn endpoint(&self) -> String {
        format!("jobs/{}/search/{}", self.country, self.page)
    }
}

/// `GET jobs/{country}/histogram`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HistogramParams {
    #[serde(skip)]
    country: String,
    #[serde(rename = "what", skip_serializing_if = "Option::is_none")]
    keyword: Option<String>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

impl HistogramParams {
    pub fn new(country: &str) -> Result<Self> {
        Ok(Self {
            country: normalize_country(country)?,
            keyword: None,
            location: None,
        })
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = non_blank(keyword);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location);
        self
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl Query for HistogramParams {
    fn endpoint(&self) -> String {
        format!("jobs/{}/histogram", self.country)
    }
}

/// `GET jobs/{country}/history`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HistoricalParams {
    #[serde(skip)]
    country: String,
    #[serde(rename = "what", skip_serializing_if = "Option::is_none")]
    keyword: Option<String>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    months: u32,
}

impl HistoricalParams {
    pub fn new(country: &str) -> Result<Self> {
        Ok(Self {
            country: normalize_country(country)?,
            keyword: None,
            location: None,
            months: DEFAULT_HISTORY_MONTHS,
        })
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = non_blank(keyword);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location);
        self
    }

    pub fn with_months(mut self, months: u32) -> Result<Self> {
        self.months = check_range("months", months, 1, MAX_HISTORY_MONTHS)?;
        Ok(self)
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn months(&self) -> u32 {
        self.months
    }
}

impl Query for HistoricalParams {
    fn endpoint(&self) -> String {
        format!("jobs/{}/history", self.country)
    }
}

/// `GET jobs/{country}/geodata`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GeodataParams {
    #[serde(skip)]
    country: String,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl GeodataParams {
    pub fn new(country: &str) -> Result<Self> {
        Ok(Self {
            country: normalize_country(country)?,
            location: None,
            category: None,
        })
    }

    /// Parent region whose sub-regions are reported.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category);
        self
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Query for GeodataParams {
    fn endpoint(&self) -> String {
        format!("jobs/{}/geodata", self.country)
    }
}

/// `GET jobs/{country}/top_companies`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TopCompaniesParams {
    #[serde(skip)]
    country: String,
    #[serde(rename = "what", skip_serializing_if = "Option::is_none")]
    keyword: Option<String>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl TopCompaniesParams {
    pub fn new(country: &str) -> Result<Self> {
        Ok(Self {
            country: normalize_country(country)?,
            keyword: None,
            location: None,
            category: None,
        })
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = non_blank(keyword);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category);
        self
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl Query for TopCompaniesParams {
    fn endpoint(&self) -> String {
        format!("jobs/{}/top_companies", self.country)
    }
}

/// `GET jobs/{country}/categories`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CategoriesParams {
    #[serde(skip)]
    country: String,
}

impl CategoriesParams {
    pub fn new(country: &str) -> Result<Self> {
        Ok(Self {
            country: normalize_country(country)?,
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl Query for CategoriesParams {
    fn endpoint(&self) -> String {
        format!("jobs/{}/categories", self.country)
    }
}
