// src/services/search_service_tests.rs
//
// Debounce and ordering-race tests for the search controller, driven on
// a paused clock so timing is deterministic.

#[cfg(test)]
mod controller_tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::domain::{MovieDetail, MovieId, MovieSummary, RatingEntry, UserId};
    use crate::error::{AppError, AppResult};
    use crate::integrations::catalog::{ActorCount, CatalogApi, FilterQuery, Recommendations};
    use crate::services::search_service::{SearchController, SearchPhase, SearchState};

    const DEBOUNCE: Duration = Duration::from_millis(350);

    fn movie(id: MovieId) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            release_year: Some(2001),
            genres: vec!["Drama".into()],
            poster_url: Some(format!("http://posters/{id}.jpg")),
            actors: Vec::new(),
            catalog_id: None,
            predicted_rating: None,
        }
    }

    fn bare_movie(id: MovieId, catalog_id: i64) -> MovieSummary {
        MovieSummary {
            poster_url: None,
            catalog_id: Some(catalog_id),
            ..movie(id)
        }
    }

    #[derive(Default)]
    struct StubSearch {
        results_for: HashMap<String, Vec<MovieSummary>>,
        search_delays: HashMap<String, Duration>,
        search_calls: Mutex<Vec<String>>,
        /// catalog_id -> Some(url) | None (no poster known); absent id
        /// means the lookup errors
        posters: HashMap<i64, Option<String>>,
        lookup_delay: Duration,
        lookup_calls: AtomicU32,
    }

    #[async_trait]
    impl CatalogApi for StubSearch {
        async fn trending(&self) -> AppResult<Vec<MovieSummary>> {
            unimplemented!()
        }
        async fn recommendations(&self, _user_id: UserId) -> AppResult<Recommendations> {
            unimplemented!()
        }
        async fn top_actors(&self) -> AppResult<Vec<ActorCount>> {
            unimplemented!()
        }
        async fn movies_by_actor(&self, _actor: &str) -> AppResult<Vec<MovieSummary>> {
            unimplemented!()
        }
        async fn movies_by_genre(&self, _genre: &str) -> AppResult<Vec<MovieSummary>> {
            unimplemented!()
        }
        async fn filter_movies(&self, _query: &FilterQuery) -> AppResult<Vec<MovieSummary>> {
            unimplemented!()
        }
        async fn search(&self, query: &str) -> AppResult<Vec<MovieSummary>> {
            self.search_calls.lock().unwrap().push(query.to_string());
            if let Some(delay) = self.search_delays.get(query) {
                tokio::time::sleep(*delay).await;
            }
            Ok(self.results_for.get(query).cloned().unwrap_or_default())
        }
        async fn movie_details(&self, _movie_id: MovieId) -> AppResult<MovieDetail> {
            unimplemented!()
        }
        async fn user_ratings(&self, _user_id: UserId) -> AppResult<Vec<RatingEntry>> {
            unimplemented!()
        }
        async fn submit_rating(
            &self,
            _user_id: UserId,
            _movie_id: MovieId,
            _rating: u8,
        ) -> AppResult<()> {
            unimplemented!()
        }
        async fn poster_lookup(&self, catalog_id: i64) -> AppResult<Option<String>> {
            self.lookup_calls.fetch_add(1, Ordering::SeqCst);
            if !self.lookup_delay.is_zero() {
                tokio::time::sleep(self.lookup_delay).await;
            }
            match self.posters.get(&catalog_id) {
                Some(found) => Ok(found.clone()),
                None => Err(AppError::UpstreamStatus(502)),
            }
        }
    }

    fn controller(stub: StubSearch) -> (Arc<SearchController>, Arc<StubSearch>) {
        let stub = Arc::new(stub);
        let controller = Arc::new(SearchController::new(
            Arc::clone(&stub) as Arc<dyn CatalogApi>,
            DEBOUNCE,
        ));
        (controller, stub)
    }

    async fn feed(controller: &Arc<SearchController>, text: &'static str) -> tokio::task::JoinHandle<()> {
        let controller = Arc::clone(controller);
        let handle = tokio::spawn(async move { controller.input(text).await });
        // Let the keystroke reach its debounce await before the next one
        tokio::task::yield_now().await;
        handle
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_fire_single_request_for_final_text() {
        let (controller, stub) = controller(StubSearch {
            results_for: HashMap::from([("bat".to_string(), vec![movie(1)])]),
            ..StubSearch::default()
        });

        let handles = vec![
            feed(&controller, "b").await,
            feed(&controller, "ba").await,
            feed(&controller, "bat").await,
        ];
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(*stub.search_calls.lock().unwrap(), vec!["bat"]);
        let state = controller.state();
        assert_eq!(state.phase, SearchPhase::Settled);
        assert_eq!(state.query, "bat");
        assert_eq!(state.results, vec![movie(1)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_query_settles_idle_without_network() {
        let (controller, stub) = controller(StubSearch::default());

        controller.input("a").await;

        assert!(stub.search_calls.lock().unwrap().is_empty());
        assert_eq!(controller.state().phase, SearchPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_never_overwrites_newer() {
        let (controller, _stub) = controller(StubSearch {
            results_for: HashMap::from([
                ("alpha".to_string(), vec![movie(1)]),
                ("beta".to_string(), vec![movie(2)]),
            ]),
            search_delays: HashMap::from([("alpha".to_string(), Duration::from_millis(500))]),
            ..StubSearch::default()
        });

        let slow = feed(&controller, "alpha").await;
        // Let "alpha" pass its debounce window and go in flight
        tokio::time::sleep(DEBOUNCE + Duration::from_millis(50)).await;

        controller.input("beta").await;
        assert_eq!(controller.state().results, vec![movie(2)]);

        // "alpha" resolves after "beta" but must be discarded
        slow.await.unwrap();
        let state = controller.state();
        assert_eq!(state.query, "beta");
        assert_eq!(state.results, vec![movie(2)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enrichment_fills_missing_posters_independently() {
        let (controller, stub) = controller(StubSearch {
            results_for: HashMap::from([(
                "batman".to_string(),
                vec![bare_movie(10, 100), bare_movie(11, 101), movie(12)],
            )]),
            // 100 resolves; 101 errors (absent from the map)
            posters: HashMap::from([(100, Some("http://posters/enriched.jpg".to_string()))]),
            ..StubSearch::default()
        });

        controller.input("batman").await;

        let results = controller.state().results;
        assert_eq!(
            results[0].poster_url.as_deref(),
            Some("http://posters/enriched.jpg")
        );
        // The failed lookup leaves its own item untouched and nothing else
        assert_eq!(results[1].poster_url, None);
        assert_eq!(results[2].poster_url, movie(12).poster_url);
        // Only the two posterless entries were looked up
        assert_eq!(stub.lookup_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enrichment_of_superseded_results_is_dropped() {
        let (controller, _stub) = controller(StubSearch {
            results_for: HashMap::from([("gone".to_string(), vec![bare_movie(10, 100)])]),
            posters: HashMap::from([(100, Some("http://posters/late.jpg".to_string()))]),
            lookup_delay: Duration::from_millis(200),
            ..StubSearch::default()
        });

        let pending = feed(&controller, "gone").await;
        // Results settle at the debounce boundary; enrichment is still in
        // flight when the field is cleared
        tokio::time::sleep(DEBOUNCE + Duration::from_millis(50)).await;
        controller.clear();

        pending.await.unwrap();
        assert_eq!(controller.state(), SearchState::default());
    }
}
