//! HTMX + Tailwind web server for the FAFSA guide
//!
//! Serves the same pages the static export writes, plus the htmx form
//! endpoint and a JSON health check.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::{MethodRouter, get};
use fafsa_core::{BuildConfig, FafsaConfig};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::WebError;
use crate::api::api_health;
use crate::pages::{
    ApplicationForm, FAVICON_FILE, FAVICON_SVG, Page, PageContext, apply_form, apply_page_with,
    not_found_page,
};

/// Shared, read-only server state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<FafsaConfig>,
}

impl AppState {
    pub fn new(config: Arc<FafsaConfig>) -> Self {
        Self { config }
    }

    pub fn page_context(&self) -> PageContext<'_> {
        PageContext::new(&self.config)
    }
}

/// Paths a route answers on: the canonical link and its trailing slash twin.
fn route_paths(build: &BuildConfig, route: &str) -> Vec<String> {
    let canonical = build.href(route);
    let alternate = if canonical.ends_with('/') {
        canonical.trim_end_matches('/').to_string()
    } else {
        format!("{canonical}/")
    };

    let mut paths = vec![canonical];
    if !alternate.is_empty() {
        paths.push(alternate);
    }
    paths
}

fn page_route(page: Page) -> MethodRouter<AppState> {
    let render = get(move |State(state): State<AppState>| async move {
        Html(page.render(&state.page_context()))
    });
    match page {
        Page::Apply => render.post(submit_application),
        _ => render,
    }
}

/// htmx posts get the form fragment; plain form posts get the whole page.
async fn submit_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ApplicationForm>,
) -> Html<String> {
    let errors = form.validate();
    let htmx = headers.contains_key("hx-request");
    info!(errors = errors.len(), htmx, "Student information submitted");

    let ctx = state.page_context();
    if htmx {
        Html(apply_form(&ctx, &form, &errors, true))
    } else {
        Html(apply_page_with(&ctx, &form, &errors, true))
    }
}

async fn favicon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], FAVICON_SVG)
}

async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(not_found_page(&state.page_context())),
    )
}

/// Builds the application router.
///
/// Every route lives under the configured base path. `static_dir`, when
/// given, is served at `<base>/static`.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let build = state.config.build.clone();
    let mut router = Router::new();

    for page in Page::ALL {
        for path in route_paths(&build, page.route()) {
            router = router.route(&path, page_route(page));
        }
    }
    router = router
        .route(&format!("{}/api/health", build.base_path), get(api_health))
        .route(&build.asset(FAVICON_FILE), get(favicon));

    if let Some(dir) = static_dir {
        router = router.nest_service(&format!("{}/static", build.base_path), ServeDir::new(dir));
    }

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the server until Ctrl-C.
///
/// # Errors
///
/// - `WebError::Bind` - the configured address cannot be bound
/// - `WebError::Io` - the server failed while running
pub async fn run_server(
    config: Arc<FafsaConfig>,
    static_dir: Option<PathBuf>,
) -> Result<(), WebError> {
    let address = config.server.bind_address();
    let app = build_router(AppState::new(Arc::clone(&config)), static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| WebError::Bind {
            address: address.clone(),
            source,
        })?;

    info!(
        mode = %config.build.mode,
        database = %config.database.redacted(),
        "FAFSA guide running on http://{address}{}",
        config.build.href("/")
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, finishing in-flight requests");
}
