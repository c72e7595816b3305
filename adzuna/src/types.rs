use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::de::loose_bool;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Company {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Location {
    #[serde(default)]
    pub display_name: Option<String>,
    /// Location hierarchy, broadest first, e.g. `["UK", "London", "Central London"]`.
    #[serde(default)]
    pub area: Vec<String>,
}

impl Location {
    /// Display name, falling back to the most specific area.
    pub fn name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.area.last().map(String::as_str))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub tag: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "created")]
    pub created_at: chrono::DateTime<Utc>,
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub location: Location,
    #[serde(rename = "redirect_url")]
    pub apply_url: String,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub salary_is_predicted: Option<bool>,
    #[serde(default)]
    pub contract_type: Option<String>,
    #[serde(default)]
    pub contract_time: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
}

impl JobListing {
    /// Only reported when both bounds are known.
    pub fn salary_range(&self) -> Option<(f64, f64)> {
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    #[serde(default)]
    pub results: Vec<JobListing>,
    /// Total matches across all pages.
    pub count: u64,
    #[serde(default)]
    pub mean: Option<f64>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Salary distribution keyed by the lower bound of each bucket.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct HistogramResult {
    #[serde(default)]
    pub histogram: BTreeMap<u64, u64>,
}

impl HistogramResult {
    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.histogram.values().sum()
    }
}

/// Average advertised salary per month, keyed `YYYY-MM`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct HistoricalResult {
    #[serde(default)]
    pub month: BTreeMap<String, f64>,
}

impl HistoricalResult {
    pub fn is_empty(&self) -> bool {
        self.month.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeodataLocation {
    #[serde(default)]
    pub location: Location,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct GeodataResult {
    #[serde(default)]
    pub locations: Vec<GeodataLocation>,
}

impl GeodataResult {
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopCompany {
    #[serde(alias = "canonical_name")]
    pub name: String,
    pub count: u64,
    #[serde(default)]
    pub average_salary: Option<f64>,
}

/// The API truncates the leaderboard to five entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TopCompaniesResult {
    #[serde(default)]
    pub leaderboard: Vec<TopCompany>,
}

impl TopCompaniesResult {
    pub fn is_empty(&self) -> bool {
        self.leaderboard.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CategoriesResult {
    #[serde(default)]
    pub results: Vec<Category>,
}

impl CategoriesResult {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_search_result() {
        let body = json!({
            "count": 2,
            "mean": 101234.5,
            "results": [
                {
                    "id": "4211",
                    "title": "Backend Engineer",
                    "description": "Build APIs",
                    "created": "2024-03-01T10:00:00Z",
                    "company": {"display_name": "Acme"},
                    "location": {"display_name": "Austin, TX", "area": ["US", "Texas", "Austin"]},
                    "redirect_url": "https://adzuna.example/4211",
                    "salary_min": 90000,
                    "salary_max": 120000.0,
                    "salary_is_predicted": "1",
                    "contract_time": "full_time",
                    "category": {"tag": "it-jobs", "label": "IT Jobs"}
                },
                {
                    "id": "4212",
                    "title": "Data Engineer",
                    "created": "2024-03-02T10:00:00Z",
                    "company": {},
                    "location": {"area": ["US", "Ohio"]},
                    "redirect_url": "https://adzuna.example/4212"
                }
            ]
        });
        let result: SearchResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(result.results.len(), 2);
        let first = &result.results[0];
        assert_eq!(first.salary_range(), Some((90000.0, 120000.0)));
        assert_eq!(first.salary_is_predicted, Some(true));
        assert_eq!(first.company.display_name.as_deref(), Some("Acme"));
        let second = &result.results[1];
        assert_eq!(second.salary_range(), None);
        assert_eq!(second.description, "");
        assert_eq!(second.location.name(), Some("Ohio"));
    }

    #[test]
    fn test_salary_range_needs_both_bounds() {
        let body = json!({
            "id": "1",
            "title": "t",
            "created": "2024-03-01T10:00:00Z",
            "redirect_url": "u",
            "salary_min": 50000
        });
        let job: JobListing = serde_json::from_value(body).unwrap();
        assert_eq!(job.salary_range(), None);
    }

    #[test]
    fn test_histogram_keys_are_numeric() {
        let result: HistogramResult =
            serde_json::from_str(r#"{"histogram": {"50000": 10, "30000": 5, "100000": 1}}"#)
                .unwrap();
        let keys: Vec<u64> = result.histogram.keys().copied().collect();
        assert_eq!(keys, vec![30000, 50000, 100000]);
        assert_eq!(result.total(), 16);
    }

    #[test]
    fn test_histogram_rejects_non_numeric_bucket() {
        let result = serde_json::from_str::<HistogramResult>(r#"{"histogram": {"lots": 10}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_historical_months_are_ordered() {
        let result: HistoricalResult =
            serde_json::from_str(r#"{"month": {"2024-03": 95000.0, "2024-01": 90000.0}}"#)
                .unwrap();
        let months: Vec<&str> = result.month.keys().map(String::as_str).collect();
        assert_eq!(months, vec!["2024-01", "2024-03"]);
    }

    #[test]
    fn test_top_company_accepts_canonical_name() {
        let result: TopCompaniesResult = serde_json::from_str(
            r#"{"leaderboard": [{"canonical_name": "Acme", "count": 42, "average_salary": 71000}]}"#,
        )
        .unwrap();
        assert_eq!(result.leaderboard[0].name, "Acme");
        assert_eq!(result.leaderboard[0].count, 42);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        assert!(serde_json::from_str::<GeodataResult>("{}").unwrap().is_empty());
        assert!(serde_json::from_str::<CategoriesResult>("{}").unwrap().is_empty());
        assert!(serde_json::from_str::<TopCompaniesResult>("{}").unwrap().is_empty());
        assert!(serde_json::from_str::<HistoricalResult>("{}").unwrap().is_empty());
    }
}
