use adzuna::{
    CategoriesParams, CategoriesResult, Client, GeodataParams, GeodataResult, HistogramParams,
    HistogramResult, HistoricalParams, HistoricalResult, SearchParams, SearchResult,
    TopCompaniesParams, TopCompaniesResult,
};
use async_trait::async_trait;

use crate::api::JobMarket;

#[async_trait]
impl JobMarket for Client {
    async fn search_jobs(&self, params: &SearchParams) -> adzuna::Result<SearchResult> {
        Client::search_jobs(self, params).await
    }

    async fn salary_histogram(&self, params: &HistogramParams) -> adzuna::Result<HistogramResult> {
        Client::salary_histogram(self, params).await
    }

    async fn historical_data(
        &self,
        params: &HistoricalParams,
    ) -> adzuna::Result<HistoricalResult> {
        Client::historical_data(self, params).await
    }

    async fn geodata(&self, params: &GeodataParams) -> adzuna::Result<GeodataResult> {
        Client::geodata(self, params).await
    }

    async fn top_companies(
        &self,
        params: &TopCompaniesParams,
    ) -> adzuna::Result<TopCompaniesResult> {
        Client::top_companies(self, params).await
    }

    async fn categories(&self, params: &CategoriesParams) -> adzuna::Result<CategoriesResult> {
        Client::categories(self, params).await
    }
}
