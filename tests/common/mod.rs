#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use std::sync::Arc;
use url_shortener::application::services::UrlService;
use url_shortener::config::Environment;
use url_shortener::domain::entities::UrlMapping;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::error::AppError;
use url_shortener::infrastructure::persistence::InMemoryUrlRepository;
use url_shortener::routes;
use url_shortener::state::AppState;

pub const BASE_URL: &str = "http://sho.rt";

pub fn create_test_state(environment: Environment) -> AppState {
    state_with_repository(Arc::new(InMemoryUrlRepository::new()), environment)
}

pub fn state_with_repository(
    repository: Arc<dyn UrlRepository>,
    environment: Environment,
) -> AppState {
    let service = UrlService::new(repository, BASE_URL);
    AppState::new(Arc::new(service), environment)
}

/// Full application router over an empty in-memory store.
pub fn make_server(environment: Environment) -> TestServer {
    server_for(create_test_state(environment))
}

/// Same as [`make_server`] but through the production entry point, with
/// trailing-slash normalization in front of the router.
pub fn make_app_server(environment: Environment) -> TestServer {
    let app = routes::app_router(create_test_state(environment));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn server_for(state: AppState) -> TestServer {
    let app: Router = routes::router(state);
    TestServer::new(app).unwrap()
}

/// Store whose every call fails the way an unreachable database would.
pub struct UnavailableRepository;

#[async_trait]
impl UrlRepository for UnavailableRepository {
    async fn create(&self, _mapping: UrlMapping) -> Result<UrlMapping, AppError> {
        Err(AppError::storage(
            "Failed to create URL",
            std::io::Error::other("connection refused"),
        ))
    }

    async fn find_by_short_code(&self, _short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(AppError::storage(
            "Failed to find URL",
            std::io::Error::other("connection refused"),
        ))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::storage(
            "Failed to count URLs",
            std::io::Error::other("connection refused"),
        ))
    }
}
