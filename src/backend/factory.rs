//! Backend factory for creating backend instances from configuration.

use anyhow::{Context, Result};
use std::sync::Arc;

use super::{http::HttpBackend, TriviaBackend};
use crate::config::ApiConfig;

/// Create the catalog backend described by the `[api]` section.
///
/// # Errors
/// Returns error if the base URL is invalid or the HTTP client cannot be built.
pub fn create_backend(config: &ApiConfig) -> Result<Arc<dyn TriviaBackend>> {
    let backend = HttpBackend::new(config)
        .with_context(|| format!("Failed to create backend for {}", config.base_url))?;
    log::info!(
        "Using {} backend at {} (search mode {:?})",
        backend.backend_type(),
        config.base_url,
        backend.search_mode()
    );
    Ok(Arc::new(backend))
}
