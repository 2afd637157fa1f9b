//! Shared state handed to every HTTP handler.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::config::Environment;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, environment: Environment) -> Self {
        Self {
            url_service,
            environment,
        }
    }
}
