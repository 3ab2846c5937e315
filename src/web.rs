//! Web presentation surface
//!
//! A single-route axum application: `GET /` fetches a fresh quote/image pair
//! through the facade and renders the HTML page. Query parameters mirror the
//! terminal flags (`key`, `width`, `height`, `filters`); anything the
//! extractor cannot parse is a 400, any pipeline failure a 500 — there is no
//! partial-content rendering.

use crate::config::{ImageConfigBuilder, QuoteConfigBuilder};
use crate::error::Result;
use crate::facade::Facade;
use crate::render;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Image width used when the request does not specify one
pub const DEFAULT_WEB_IMAGE_WIDTH: u32 = 600;

/// Image height used when the request does not specify one
pub const DEFAULT_WEB_IMAGE_HEIGHT: u32 = 400;

/// Shared application state accessible to the route handler
#[derive(Clone)]
pub struct AppState {
    /// The acquisition facade serving every request
    pub facade: Arc<Facade>,
}

/// Query parameters accepted by the page route
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Quote key; omitted or <= 0 means no key filter
    pub key: Option<i64>,
    /// Requested image width in pixels
    pub width: Option<u32>,
    /// Requested image height in pixels
    pub height: Option<u32>,
    /// Comma-separated image filter identifiers
    pub filters: Option<String>,
}

/// Create the router serving the random quote-and-image page at `/`
pub fn create_router(facade: Arc<Facade>) -> Router {
    Router::new()
        .route("/", get(random_quote_page))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { facade })
}

/// Bind the listener and serve the application until the process exits
pub async fn serve(facade: Arc<Facade>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "starting web application");
    axum::serve(listener, create_router(facade)).await?;
    Ok(())
}

/// GET / - fetch a fresh pair and render the page
async fn random_quote_page(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Response {
    let quote_config = QuoteConfigBuilder::new()
        .with_key(params.key.unwrap_or(0))
        .build();

    let mut image_builder = ImageConfigBuilder::new()
        .with_width(params.width.unwrap_or(DEFAULT_WEB_IMAGE_WIDTH))
        .with_height(params.height.unwrap_or(DEFAULT_WEB_IMAGE_HEIGHT));
    if let Some(filters) = &params.filters {
        image_builder = image_builder.with_filters(
            filters
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty()),
        );
    }
    let image_config = image_builder.build();

    match state
        .facade
        .fetch_quote_and_image(&quote_config, &image_config)
        .await
    {
        Ok((quote, raster)) => match render::html_page(&quote, &raster) {
            Ok(body) => Html(body).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "failed to render page");
                (StatusCode::INTERNAL_SERVER_ERROR, "failed to render content").into_response()
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch quote and image");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to fetch data").into_response()
        }
    }
}
