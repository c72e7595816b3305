use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use adzuna::{
    CategoriesParams, GeodataParams, HistogramParams, HistoricalParams, SearchParams,
    TopCompaniesParams,
};
use futures::FutureExt;
use serde::Serialize;

use crate::api::JobMarket;
use crate::format;
use crate::inputs::{
    optional, HistoricalTrendsInput, JobCategoriesInput, JobSearchInput, RegionalStatsInput,
    SalaryAnalysisInput, TopCompaniesInput,
};

/// What a tool hands back to the agent. Both variants carry display text;
/// a failure never escapes as an `Err` or a panic.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum ToolOutput {
    Success(String),
    Failure(String),
}

impl ToolOutput {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutput::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            ToolOutput::Success(text) | ToolOutput::Failure(text) => text,
        }
    }

    pub(crate) fn failure(action: &str, err: impl fmt::Display) -> Self {
        log::error!("Tool failed while {}: {}", action, err);
        ToolOutput::Failure(format!("Error {}: {}", action, err))
    }
}

impl fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Runs one market call, turning a panic into an error.
async fn guarded<T>(call: impl Future<Output = adzuna::Result<T>>) -> adzuna::Result<T> {
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(result) => result,
        Err(_) => Err(adzuna::Error::Service("job market call panicked".to_owned())),
    }
}

/// The six job market tools over one shared market.
///
/// Build it once with the process-wide client and pass it to whoever
/// dispatches tool calls. Errors and panics of the market both come back
/// as [`ToolOutput::Failure`].
#[derive(Clone, Debug)]
pub struct Toolbox<M> {
    market: M,
}

impl<M: JobMarket> Toolbox<M> {
    pub fn new(market: M) -> Self {
        Self { market }
    }

    pub fn market(&self) -> &M {
        &self.market
    }

    /// Current openings matching keywords and an optional location.
    pub async fn search_adzuna_jobs(&self, input: &JobSearchInput) -> ToolOutput {
        log::info!(
            "Executing Adzuna job search for '{}' in {:?}, country: {}",
            input.query,
            input.location,
            input.country
        );
        let outcome = match SearchParams::try_from(input) {
            Ok(params) => guarded(self.market.search_jobs(&params)).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(result) => {
                ToolOutput::Success(format::search_results(input.query.trim(), &result))
            }
            Err(e) => ToolOutput::failure("searching for jobs", e),
        }
    }

    /// Salary distribution across bands for a job title.
    pub async fn analyze_salary_trends(&self, input: &SalaryAnalysisInput) -> ToolOutput {
        log::info!(
            "Analyzing Adzuna salary trends for '{}' in {:?}",
            input.job_title,
            input.location
        );
        let outcome = match HistogramParams::try_from(input) {
            Ok(params) => guarded(self.market.salary_histogram(&params)).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(result) => ToolOutput::Success(format::salary_histogram(
                input.job_title.trim(),
                &result,
            )),
            Err(e) => ToolOutput::failure("analyzing salary trends", e),
        }
    }

    /// The five companies with the most openings.
    pub async fn get_top_hiring_companies(&self, input: &TopCompaniesInput) -> ToolOutput {
        log::info!(
            "Fetching top hiring companies for '{}' in {}",
            optional(&input.job_category).unwrap_or("all categories"),
            optional(&input.location).unwrap_or("all locations")
        );
        let outcome = match TopCompaniesParams::try_from(input) {
            Ok(params) => guarded(self.market.top_companies(&params)).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(result) => ToolOutput::Success(format::top_companies(
                optional(&input.job_category),
                &result,
            )),
            Err(e) => ToolOutput::failure("fetching top companies", e),
        }
    }

    /// Category tags usable as filters by the other tools.
    pub async fn list_job_categories(&self, input: &JobCategoriesInput) -> ToolOutput {
        log::info!("Listing Adzuna job categories for {}", input.country);
        let outcome = match CategoriesParams::try_from(input) {
            Ok(params) => guarded(self.market.categories(&params)).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(result) => ToolOutput::Success(format::categories(&input.country, &result)),
            Err(e) => ToolOutput::failure("listing categories", e),
        }
    }

    /// Job counts per sub-region of a location.
    pub async fn get_regional_job_stats(&self, input: &RegionalStatsInput) -> ToolOutput {
        log::info!(
            "Fetching Adzuna regional stats for '{}' in {}",
            optional(&input.location).unwrap_or("root"),
            input.country
        );
        let outcome = match GeodataParams::try_from(input) {
            Ok(params) => guarded(self.market.geodata(&params)).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(result) => ToolOutput::Success(format::regional_stats(
                optional(&input.location),
                input.country.trim(),
                &result,
            )),
            Err(e) => ToolOutput::failure("fetching regional stats", e),
        }
    }

    /// Monthly average salary over the last 1 to 24 months.
    pub async fn get_historical_salary_trends(&self, input: &HistoricalTrendsInput) -> ToolOutput {
        log::info!(
            "Fetching Adzuna historical trends for '{}' in {} over {} months",
            input.job_title,
            optional(&input.location).unwrap_or("all locations"),
            input.months
        );
        let outcome = match HistoricalParams::try_from(input) {
            Ok(params) => guarded(self.market.historical_data(&params)).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(result) => ToolOutput::Success(format::historical_trends(
                input.job_title.trim(),
                &result,
            )),
            Err(e) => ToolOutput::failure("fetching historical trends", e),
        }
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use adzuna::{
        CategoriesResult, Company, GeodataResult, HistogramResult, HistoricalResult, JobListing,
        Location, SearchResult, TopCompaniesResult,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned market; `fail_with` makes every call return that status,
    /// `panics` makes every call panic.
    #[derive(Default)]
    pub(crate) struct FakeMarket {
        pub search: Option<SearchResult>,
        pub histogram: HistogramResult,
        pub history: HistoricalResult,
        pub geodata: GeodataResult,
        pub leaderboard: TopCompaniesResult,
        pub categories: CategoriesResult,
        pub fail_with: Option<u16>,
        pub panics: bool,
        pub calls: AtomicUsize,
    }

    impl FakeMarket {
        fn answer<T: Clone>(&self, value: &T) -> adzuna::Result<T> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.panics {
                panic!("market exploded");
            }
            match self.fail_with {
                Some(401) => Err(adzuna::Error::Authentication(
                    "Invalid Adzuna API credentials".to_owned(),
                )),
                Some(429) => Err(adzuna::Error::RateLimited),
                Some(status) => Err(adzuna::Error::Api {
                    status,
                    body: String::new(),
                }),
                None => Ok(value.clone()),
            }
        }
    }

    #[async_trait]
    impl JobMarket for FakeMarket {
        async fn search_jobs(&self, _: &SearchParams) -> adzuna::Result<SearchResult> {
            let empty = SearchResult {
                results: vec![],
                count: 0,
                mean: None,
            };
            self.answer(self.search.as_ref().unwrap_or(&empty))
        }

        async fn salary_histogram(&self, _: &HistogramParams) -> adzuna::Result<HistogramResult> {
            self.answer(&self.histogram)
        }

        async fn historical_data(
            &self,
            _: &HistoricalParams,
        ) -> adzuna::Result<HistoricalResult> {
            self.answer(&self.history)
        }

        async fn geodata(&self, _: &GeodataParams) -> adzuna::Result<GeodataResult> {
            self.answer(&self.geodata)
        }

        async fn top_companies(
            &self,
            _: &TopCompaniesParams,
        ) -> adzuna::Result<TopCompaniesResult> {
            self.answer(&self.leaderboard)
        }

        async fn categories(&self, _: &CategoriesParams) -> adzuna::Result<CategoriesResult> {
            self.answer(&self.categories)
        }
    }

    fn backend_engineer() -> JobListing {
        JobListing {
            id: "1".to_owned(),
            title: "Backend Engineer".to_owned(),
            description: String::new(),
            created_at: chrono::Utc::now(),
            company: Company {
                display_name: Some("Acme".to_owned()),
            },
            location: Location {
                display_name: Some("Remote".to_owned()),
                area: vec![],
            },
            apply_url: "https://adzuna.example/1".to_owned(),
            salary_min: None,
            salary_max: None,
            salary_is_predicted: None,
            contract_type: None,
            contract_time: None,
            category: None,
        }
    }

    #[tokio::test]
    async fn test_search_end_to_end() {
        let market = FakeMarket {
            search: Some(SearchResult {
                results: vec![backend_engineer()],
                count: 1,
                mean: None,
            }),
            ..Default::default()
        };
        let toolbox = Toolbox::new(market);
        let mut input = JobSearchInput::new("python developer");
        input.max_results = 1;

        let output = toolbox.search_adzuna_jobs(&input).await;
        assert!(output.is_success());
        let text = output.text();
        assert!(text.lines().any(|l| l == "1. Backend Engineer"));
        assert!(text.lines().any(|l| l.trim_start().starts_with("Company: ")));
        assert!(text.lines().any(|l| l.trim_start().starts_with("Location: ")));
        assert!(text.lines().any(|l| l.trim_start().starts_with("Apply Here: ")));
        assert!(!text.contains("Salary"));
    }

    #[tokio::test]
    async fn test_errors_become_text() {
        let toolbox = Toolbox::new(FakeMarket {
            fail_with: Some(429),
            ..Default::default()
        });
        let output = toolbox
            .search_adzuna_jobs(&JobSearchInput::new("rust"))
            .await;
        assert_eq!(
            output,
            ToolOutput::Failure("Error searching for jobs: Adzuna API rate limit exceeded".to_owned())
        );

        let toolbox = Toolbox::new(FakeMarket {
            fail_with: Some(500),
            ..Default::default()
        });
        let cases = [
            (
                toolbox
                    .analyze_salary_trends(&SalaryAnalysisInput::new("nurse"))
                    .await,
                "Error analyzing salary trends: ",
            ),
            (
                toolbox
                    .get_top_hiring_companies(&TopCompaniesInput::default())
                    .await,
                "Error fetching top companies: ",
            ),
            (
                toolbox
                    .list_job_categories(&JobCategoriesInput::default())
                    .await,
                "Error listing categories: ",
            ),
            (
                toolbox
                    .get_regional_job_stats(&RegionalStatsInput::default())
                    .await,
                "Error fetching regional stats: ",
            ),
            (
                toolbox
                    .get_historical_salary_trends(&HistoricalTrendsInput::new("nurse"))
                    .await,
                "Error fetching historical trends: ",
            ),
        ];
        for (output, prefix) in cases {
            assert!(!output.is_success());
            assert!(output.text().starts_with(prefix), "got: {}", output);
            assert!(output.text().ends_with("Adzuna API error: 500"), "got: {}", output);
        }
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_market() {
        let toolbox = Toolbox::new(FakeMarket::default());
        let mut input = HistoricalTrendsInput::new("nurse");
        input.months = 30;
        let output = toolbox.get_historical_salary_trends(&input).await;
        assert!(output
            .text()
            .starts_with("Error fetching historical trends: Invalid parameter: months"));

        let mut input = JobSearchInput::new("rust");
        input.country = "usa".to_owned();
        let output = toolbox.search_adzuna_jobs(&input).await;
        assert!(!output.is_success());
        assert_eq!(toolbox.market().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_results_are_successful_text() {
        let toolbox = Toolbox::new(FakeMarket::default());
        let outputs = [
            toolbox.search_adzuna_jobs(&JobSearchInput::new("rust")).await,
            toolbox
                .analyze_salary_trends(&SalaryAnalysisInput::new("rust"))
                .await,
            toolbox
                .get_top_hiring_companies(&TopCompaniesInput::default())
                .await,
            toolbox
                .list_job_categories(&JobCategoriesInput::default())
                .await,
            toolbox
                .get_regional_job_stats(&RegionalStatsInput::default())
                .await,
            toolbox
                .get_historical_salary_trends(&HistoricalTrendsInput::new("rust"))
                .await,
        ];
        for output in outputs {
            assert!(output.is_success());
            assert!(output.text().starts_with("No "), "got: {}", output);
        }
        assert_eq!(toolbox.market().calls.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn test_market_panic_becomes_failure() {
        let toolbox = Toolbox::new(FakeMarket {
            panics: true,
            ..Default::default()
        });
        let output = toolbox
            .list_job_categories(&JobCategoriesInput::default())
            .await;
        assert_eq!(
            output,
            ToolOutput::Failure(
                "Error listing categories: Unexpected error calling Adzuna API: job market call panicked"
                    .to_owned()
            )
        );
        assert_eq!(toolbox.market().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_network_failure_text_hides_credentials() {
        let client = adzuna::Client::with_http_client(
            adzuna::Credentials::new("private-id", "SECRET-KEY").unwrap(),
            "http://127.0.0.1:9",
            reqwest::Client::new(),
        );
        let toolbox = Toolbox::new(client);
        let output = toolbox
            .search_adzuna_jobs(&JobSearchInput::new("rust"))
            .await;
        assert!(output
            .text()
            .starts_with("Error searching for jobs: Adzuna API request failed: "));
        assert!(!output.text().contains("SECRET-KEY"), "leaked: {}", output);
        assert!(!output.text().contains("private-id"), "leaked: {}", output);
    }

    #[test]
    fn test_tool_output_serializes_tagged() {
        let json = serde_json::to_value(ToolOutput::Failure("Error x: y".to_owned())).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["text"], "Error x: y");
    }
}
