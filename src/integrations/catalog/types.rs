// src/integrations/catalog/types.rs
//
// Wire DTOs for the catalog service.
//
// This is infrastructure, not domain: external payload shapes are mapped
// into domain value objects here and nowhere else. The service sends
// `genres` as a single `|`-separated string; it becomes an ordered list
// at this boundary.

use serde::{Deserialize, Serialize};

use crate::domain::{MovieDetail, MovieId, MovieSummary, RatingEntry, UserId};

fn split_genres(raw: Option<String>) -> Vec<String> {
    raw.map(|joined| {
        joined
            .split('|')
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Movie summary as it travels on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummaryDto {
    pub movie_id: MovieId,
    pub title: String,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub tmdb_id: Option<i64>,
    #[serde(default)]
    pub predicted_rating: Option<f32>,
}

impl From<MovieSummaryDto> for MovieSummary {
    fn from(dto: MovieSummaryDto) -> Self {
        MovieSummary {
            id: dto.movie_id,
            title: dto.title,
            release_year: dto.release_year,
            genres: split_genres(dto.genres),
            poster_url: dto.poster_url,
            actors: dto.actors,
            catalog_id: dto.tmdb_id,
            predicted_rating: dto.predicted_rating,
        }
    }
}

/// Full movie detail payload.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetailDto {
    pub movie_id: MovieId,
    pub title: String,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub backdrop_url: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub certification: Option<String>,
    #[serde(default)]
    pub trailer_url: Option<String>,
}

impl From<MovieDetailDto> for MovieDetail {
    fn from(dto: MovieDetailDto) -> Self {
        MovieDetail {
            id: dto.movie_id,
            title: dto.title,
            release_year: dto.release_year,
            genres: split_genres(dto.genres),
            poster_url: dto.poster_url,
            backdrop_url: dto.backdrop_url,
            tagline: dto.tagline,
            overview: dto.overview,
            runtime: dto.runtime,
            certification: dto.certification,
            trailer_url: dto.trailer_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsDto {
    #[allow(dead_code)] // part of the response schema
    pub user_id: UserId,
    #[serde(default)]
    pub recommendations: Vec<MovieSummaryDto>,
    #[serde(default)]
    pub basis: Option<String>,
}

/// Personalized recommendations plus the marker describing what they
/// were derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub movies: Vec<MovieSummary>,
    pub basis: Option<String>,
}

impl From<RecommendationsDto> for Recommendations {
    fn from(dto: RecommendationsDto) -> Self {
        Recommendations {
            movies: dto.recommendations.into_iter().map(Into::into).collect(),
            basis: dto.basis,
        }
    }
}

/// An actor name with how many catalog movies they appear in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorCount {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatingEntryDto {
    pub movie_id: MovieId,
    pub rating: f32,
}

impl From<RatingEntryDto> for RatingEntry {
    fn from(dto: RatingEntryDto) -> Self {
        // Stored server-side as a float; submitted values are whole stars
        RatingEntry::new(dto.movie_id, dto.rating.round() as u8)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RateRequestDto {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PosterLookupDto {
    #[serde(default)]
    pub poster_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_genres_split_on_pipe() {
        let dto: MovieSummaryDto = serde_json::from_str(
            r#"{"movie_id": 12, "title": "Heat", "genres": "Action|Crime|Drama",
                "release_year": 1995, "tmdb_id": 949}"#,
        )
        .unwrap();
        let summary: MovieSummary = dto.into();
        assert_eq!(summary.genres, vec!["Action", "Crime", "Drama"]);
        assert_eq!(summary.poster_url, None);
        assert_eq!(summary.catalog_id, Some(949));
    }

    #[test]
    fn test_predicted_rating_only_in_personalized_payloads() {
        let dto: MovieSummaryDto = serde_json::from_str(
            r#"{"movie_id": 3, "title": "Arrival", "predicted_rating": 4.4}"#,
        )
        .unwrap();
        let summary: MovieSummary = dto.into();
        assert_eq!(summary.predicted_rating, Some(4.4));
        assert!(summary.genres.is_empty());
    }

    #[test]
    fn test_rating_entry_rounds_to_whole_stars() {
        let dto = RatingEntryDto {
            movie_id: 7,
            rating: 4.0,
        };
        assert_eq!(RatingEntry::from(dto), RatingEntry::new(7, 4));
    }

    #[test]
    fn test_detail_optional_fields_default() {
        let dto: MovieDetailDto =
            serde_json::from_str(r#"{"movie_id": 5, "title": "Alien"}"#).unwrap();
        let detail: MovieDetail = dto.into();
        assert_eq!(detail.runtime, None);
        assert_eq!(detail.trailer_url, None);
    }
}
