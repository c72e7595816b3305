use adzuna::{
    CategoriesParams, CategoriesResult, GeodataParams, GeodataResult, HistogramParams,
    HistogramResult, HistoricalParams, HistoricalResult, SearchParams, SearchResult,
    TopCompaniesParams, TopCompaniesResult,
};
use async_trait::async_trait;

/// Source of job market data the tools read from.
///
/// Implemented by [`adzuna::Client`]; tests substitute canned data.
#[async_trait]
pub trait JobMarket: Send + Sync {
    async fn search_jobs(&self, params: &SearchParams) -> adzuna::Result<SearchResult>;

    async fn salary_histogram(&self, params: &HistogramParams) -> adzuna::Result<HistogramResult>;

    async fn historical_data(&self, params: &HistoricalParams)
        -> adzuna::Result<HistoricalResult>;

    async fn geodata(&self, params: &GeodataParams) -> adzuna::Result<GeodataResult>;

    async fn top_companies(
        &self,
        params: &TopCompaniesParams,
    ) -> adzuna::Result<TopCompaniesResult>;

    async fn categories(&self, params: &CategoriesParams) -> adzuna::Result<CategoriesResult>;
}
