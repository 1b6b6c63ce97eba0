use axum::{
    extract::{Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::directory::{spawn_refresher, CorpusLoader, DirectoryHandle, FileLoader};
use crate::matching::engine::{MatchingConfig, SearchError};
use crate::utils::validation::{clamp_limit, validate_cutoff, validate_query};

/// Security configuration constants to prevent `DoS` attacks
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Shared application state
pub struct AppState {
    pub directory: Arc<DirectoryHandle>,
    pub config: MatchingConfig,
}

/// Enhanced error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Query parameters for autocomplete
#[derive(Deserialize)]
struct AutocompleteParams {
    /// Name fragment typed by the user
    person: Option<String>,
    /// Maximum number of names (default: 10, max: 100)
    limit: Option<usize>,
    /// Minimum fuzzy similarity (default: 40)
    cutoff: Option<f64>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    // Log detailed error server-side for debugging (not exposed to client)
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

fn error_response(status: StatusCode, error: ErrorResponse) -> Response {
    (status, Json(error)).into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Routes and per-response middleware, without rate limiting.
///
/// Rate limiting keys on the peer address, which only exists when serving
/// real connections; see [`create_router`].
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/autocomplete", get(autocomplete_handler))
        .route("/api/directory", get(directory_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // Autocomplete fires on every keystroke from browsers on other origins
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("access-control-allow-origin"),
                    HeaderValue::from_static("*"),
                ))
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    REQUEST_TIMEOUT,
                ))
                // Limit concurrent requests to prevent DOS
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS)),
        )
}

/// Create the application router with all routes and middleware configured.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
pub fn create_router(state: Arc<AppState>) -> Router {
    // Autocomplete is chattier than a form post: allow more per IP
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(20)
        .burst_size(100)
        .finish()
        .unwrap();

    api_router(state).layer(GovernorLayer::new(Arc::new(governor_conf)))
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let directory = Arc::new(DirectoryHandle::new());
    let loader: Arc<dyn CorpusLoader> = Arc::new(FileLoader::new(&args.corpus));
    let _refresher = spawn_refresher(
        Arc::clone(&directory),
        loader,
        Duration::from_secs(args.refresh_secs),
    );

    let state = Arc::new(AppState {
        directory,
        config: MatchingConfig::default(),
    });
    let app = create_router(state);

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting name-resolver web server at http://{addr}");
    tracing::info!(
        "Serving directory {} (reload every {}s)",
        args.corpus.display(),
        args.refresh_secs
    );

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Resolve a name fragment into display names
async fn autocomplete_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AutocompleteParams>,
) -> Response {
    let Some(person) = params.person else {
        return error_response(
            StatusCode::BAD_REQUEST,
            create_safe_error_response("missing_person", "Missing person parameter", None),
        );
    };

    if let Err(e) = validate_query(&person) {
        return error_response(
            StatusCode::BAD_REQUEST,
            create_safe_error_response("invalid_query", &e.to_string(), None),
        );
    }

    let cutoff = match validate_cutoff(params.cutoff.unwrap_or(state.config.default_cutoff)) {
        Ok(cutoff) => cutoff,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                create_safe_error_response("invalid_cutoff", &e.to_string(), None),
            );
        }
    };
    let limit = clamp_limit(params.limit.unwrap_or(state.config.default_limit));

    match state
        .directory
        .search_with_config(&state.config, &person, limit, cutoff)
    {
        Ok(names) => Json(names).into_response(),
        Err(SearchError::InvalidInput) => error_response(
            StatusCode::BAD_REQUEST,
            create_safe_error_response("invalid_query", "Query is empty", None),
        ),
        Err(SearchError::DirectoryUnavailable) => error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            create_safe_error_response(
                "directory_unavailable",
                "The name directory has not been loaded yet. Please retry shortly.",
                None,
            ),
        ),
        Err(e @ SearchError::Scorer(_)) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            create_safe_error_response(
                "search_failed",
                "Unable to complete the search. Please try again.",
                Some(&e.to_string()),
            ),
        ),
    }
}

/// Summary of the currently served directory
async fn directory_handler(State(state): State<Arc<AppState>>) -> Response {
    let Some(snapshot) = state.directory.current() else {
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            create_safe_error_response(
                "directory_unavailable",
                "The name directory has not been loaded yet.",
                None,
            ),
        );
    };

    Json(serde_json::json!({
        "version": snapshot.version(),
        "loaded_at": snapshot.loaded_at().to_rfc3339(),
        "record_count": snapshot.len(),
        "canonical_count": snapshot.canonical_count(),
    }))
    .into_response()
}
