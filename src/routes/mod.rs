//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the static endpoints (user collection, WASM bundle, health check)
//! and the Leptos SSR page under a single Axum router.

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Non-Leptos routes: the user collection, the `/pkg` bundle and `/healthz`.
fn static_routes(data_file: &Path, site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route_service("/db.json", ServeFile::new(data_file))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

/// Full application router, with Leptos options read from the environment
/// or the `Cargo.toml` `[package.metadata.leptos]` section.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(app_with_options(config, conf.leptos_options))
}

/// Static routes plus the SSR page at `/`.
fn app_with_options(config: &ServerConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = leptos_options.site_root.as_ref();

    static_routes(&config.data_file, Path::new(site_root))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
