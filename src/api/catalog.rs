//! Catalog page endpoint.

use axum::{extract::State, response::Html};

use crate::catalog;
use crate::errors::AppError;
use crate::render;
use crate::AppState;

/// Fallback handler - any path other than /purchase serves the catalog page.
///
/// The catalog is fetched and parsed on every request; nothing is cached
/// between invocations.
pub async fn catalog_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let key = &state.config.catalog_key;

    let data = state.objects.get(key).await?.ok_or_else(|| {
        tracing::error!("Catalog object not found: {}", key);
        AppError::Storage(format!("catalog object not found: {}", key))
    })?;

    let products = catalog::parse(&data)?;
    tracing::info!(products = products.len(), "Rendering catalog");

    let html = render::catalog_page(&products)?;

    Ok(Html(html))
}
