// src/integrations/catalog/client.rs
//
// HTTP catalog client.
//
// Single chokepoint for all outbound reads and writes: every endpoint
// goes through `get_json`/`post_json`, so failure normalization lives in
// exactly one place. Cancellation and per-feed retry policy are the
// callers' concern (services own slots and retry); this client only
// performs the call.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::domain::{MovieDetail, MovieId, MovieSummary, RatingEntry, UserId};
use crate::error::{AppError, AppResult};
use crate::integrations::catalog::api::CatalogApi;
use crate::integrations::catalog::query::FilterQuery;
use crate::integrations::catalog::types::{
    ActorCount, MovieDetailDto, MovieSummaryDto, PosterLookupDto, RateRequestDto, RatingEntryDto,
    Recommendations, RecommendationsDto,
};

pub struct HttpCatalogClient {
    base_url: String,
    http: Client,
}

impl HttpCatalogClient {
    pub fn new(config: &EngineConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    #[cfg(test)]
    fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .expect("client build"),
        }
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(AppError::from)?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        response.json::<T>().await.map_err(AppError::from)
    }

    async fn post_json<B>(&self, path: &str, body: &B) -> AppResult<()>
    where
        B: Serialize + Sync,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(AppError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn trending(&self) -> AppResult<Vec<MovieSummary>> {
        let dtos: Vec<MovieSummaryDto> = self.get_json("/popular", &[]).await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn recommendations(&self, user_id: UserId) -> AppResult<Recommendations> {
        let dto: RecommendationsDto = self.get_json(&format!("/recommend/{user_id}"), &[]).await?;
        Ok(dto.into())
    }

    async fn top_actors(&self) -> AppResult<Vec<ActorCount>> {
        self.get_json("/movies/actors", &[]).await
    }

    async fn movies_by_actor(&self, actor: &str) -> AppResult<Vec<MovieSummary>> {
        let path = format!("/movies/actor/{}", urlencoding::encode(actor));
        let dtos: Vec<MovieSummaryDto> = self.get_json(&path, &[]).await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn movies_by_genre(&self, genre: &str) -> AppResult<Vec<MovieSummary>> {
        let path = format!("/movies/genre/{}", urlencoding::encode(genre));
        let dtos: Vec<MovieSummaryDto> = self.get_json(&path, &[]).await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn filter_movies(&self, query: &FilterQuery) -> AppResult<Vec<MovieSummary>> {
        let pairs: Vec<(&str, &str)> = query.pairs().collect();
        let dtos: Vec<MovieSummaryDto> = self.get_json("/movies/filter", &pairs).await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn search(&self, query: &str) -> AppResult<Vec<MovieSummary>> {
        let dtos: Vec<MovieSummaryDto> = self.get_json("/search", &[("q", query)]).await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn movie_details(&self, movie_id: MovieId) -> AppResult<MovieDetail> {
        let dto: MovieDetailDto = self
            .get_json(&format!("/movies/details/{movie_id}"), &[])
            .await?;
        Ok(dto.into())
    }

    async fn user_ratings(&self, user_id: UserId) -> AppResult<Vec<RatingEntry>> {
        let dtos: Vec<RatingEntryDto> = self.get_json(&format!("/ratings/{user_id}"), &[]).await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn submit_rating(
        &self,
        user_id: UserId,
        movie_id: MovieId,
        rating: u8,
    ) -> AppResult<()> {
        self.post_json(
            "/rate",
            &RateRequestDto {
                user_id,
                movie_id,
                rating,
            },
        )
        .await
    }

    async fn poster_lookup(&self, catalog_id: i64) -> AppResult<Option<String>> {
        let dto: PosterLookupDto = self
            .get_json(&format!("/movies/poster/{catalog_id}"), &[])
            .await?;
        Ok(dto.poster_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed_from_base_url() {
        let client = HttpCatalogClient::with_base_url("http://localhost:5000/api/");
        assert_eq!(client.base_url, "http://localhost:5000/api");
    }
}
