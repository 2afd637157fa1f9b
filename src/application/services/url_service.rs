//! URL shortening and lookup service.

use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::application::dto::{ShortenUrlRequest, ShortenUrlResponse};
use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, DEFAULT_CODE_LENGTH, RandomCodeGenerator};

/// Number of candidate codes tried before allocation gives up.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 10;

/// Service for creating and resolving short URLs.
///
/// Holds the store and generator it was given at construction; there is no
/// shared client behind it.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
}

impl UrlService {
    /// Creates a service using the random code generator.
    pub fn new(repository: Arc<dyn UrlRepository>, base_url: impl Into<String>) -> Self {
        Self::with_generator(repository, Arc::new(RandomCodeGenerator), base_url)
    }

    pub fn with_generator(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            generator,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shortens a URL and returns the response view.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `long_url` is not an absolute URL with a host (nothing is written)
    /// - no free code was found within [`MAX_ALLOCATION_ATTEMPTS`] candidates
    ///
    /// Returns [`AppError::Storage`] if a lookup or the final insert fails.
    pub async fn shorten_url(
        &self,
        request: ShortenUrlRequest,
    ) -> Result<ShortenUrlResponse, AppError> {
        request.validate()?;

        let short_code = self.allocate_short_code().await?;
        let mapping = UrlMapping::unsaved(short_code, request.long_url)?;

        let created = self.repository.create(mapping).await?;
        info!(
            short_code = created.short_code(),
            "Shortened {}",
            created.long_url()
        );

        Ok(ShortenUrlResponse::from_mapping(&created, &self.base_url))
    }

    /// Resolves a short code to its stored mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with `Short code '<code>' not found` if
    /// the code is unknown, [`AppError::Storage`] on lookup failure.
    pub async fn get_url(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Short code '{}' not found", short_code)))
    }

    /// Finds a code that is not yet stored.
    ///
    /// Each candidate's lookup result is checked before the attempt budget,
    /// so a free code found on the last attempt is still used.
    async fn allocate_short_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let candidate = self.generator.generate(DEFAULT_CODE_LENGTH);

            if self
                .repository
                .find_by_short_code(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }

            debug!(attempt, candidate = %candidate, "Short code collision");
        }

        Err(AppError::validation(
            "Failed to generate unique short code. Please try again.",
        ))
    }
}
