use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use obras_sociales_search::{
    sources::{load_with_fallback, sources_from_config, CatalogSource},
    CatalogOrigin, CatalogStats, LookupConfig, LookupEngine, LookupError, SearchOptions,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<RwLock<Arc<LookupEngine>>>,
}

impl AppState {
    async fn engine(&self) -> Arc<LookupEngine> {
        self.engine.read().await.clone()
    }
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: String,
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    origin: CatalogOrigin,
    records: usize,
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    stats: CatalogStats,
    origin: CatalogOrigin,
    loaded_at: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "obras_server=debug,obras_sociales_search=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = LookupConfig::from_env()?;

    tracing::info!("🚀 Starting Obras Sociales Server");
    tracing::info!("📦 Dataset: {}", config.data_path.display());
    if let Some(base) = &config.api_base {
        tracing::info!("📡 Remote: {}", base);
    }
    tracing::info!("🔌 Port: {}", config.port);

    let sources = sources_from_config(&config)?;
    let options = SearchOptions::from(&config);
    let catalog = load_with_fallback(&sources).await;

    let state = AppState {
        engine: Arc::new(RwLock::new(Arc::new(LookupEngine::new(
            Arc::new(catalog),
            options.clone(),
        )))),
    };

    tokio::spawn(refresh_loop(
        state.clone(),
        sources,
        options,
        config.clone(),
    ));

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/obras-sociales", get(catalog_handler))
        .route("/v1/search", get(search_handler))
        .route("/v1/suggest", get(suggest_handler))
        .route("/v1/resolve", get(resolve_handler))
        .route("/v1/stats", get(stats_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("🏥 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Reload the catalog while it did not come from the remote source
async fn refresh_loop(
    state: AppState,
    sources: Vec<Arc<dyn CatalogSource>>,
    options: SearchOptions,
    config: LookupConfig,
) {
    let mut interval = tokio::time::interval(config.refresh_interval());
    // First tick fires immediately
    interval.tick().await;

    loop {
        interval.tick().await;

        let origin = state.engine().await.catalog().origin();
        let degraded = match origin {
            CatalogOrigin::Remote | CatalogOrigin::InMemory => false,
            CatalogOrigin::LocalFile => config.api_base.is_some(),
            CatalogOrigin::Empty => true,
        };
        if !degraded {
            continue;
        }

        tracing::info!("🔄 Catalog origin is {:?}, reloading...", origin);
        let catalog = load_with_fallback(&sources).await;
        let engine = LookupEngine::new(Arc::new(catalog), options.clone());
        *state.engine.write().await = Arc::new(engine);
    }
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let engine = state.engine().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        version: obras_sociales_search::VERSION.to_string(),
        origin: engine.catalog().origin(),
        records: engine.catalog().len(),
    })
}

async fn catalog_handler(State(state): State<AppState>) -> Response {
    let engine = state.engine().await;
    Json(engine.catalog().records()).into_response()
}

async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let engine = state.engine().await;
    let mut results = engine.search_scored(&params.q);
    if let Some(limit) = params.limit {
        results.truncate(limit);
    }

    tracing::debug!("{:?} → {} results", params.q, results.len());

    Json(results).into_response()
}

async fn suggest_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let engine = state.engine().await;
    Json(engine.suggest(&params.q)).into_response()
}

async fn resolve_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let engine = state.engine().await;
    let record = engine
        .resolve(&params.q)
        .ok_or_else(|| LookupError::NoResults(params.q.clone()))?;

    tracing::info!("✅ {} → {}", params.q, record.name);

    Ok(Json(record).into_response())
}

async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let engine = state.engine().await;
    let catalog = engine.catalog();

    Json(StatsResponse {
        stats: catalog.stats(),
        origin: catalog.origin(),
        loaded_at: catalog.loaded_at().to_rfc3339(),
    })
}

// Error handling
struct AppError(LookupError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            LookupError::NoResults(query) => {
                (StatusCode::NOT_FOUND, format!("No se encontraron resultados para: {}", query))
            }
            e @ LookupError::Source { .. } => (StatusCode::BAD_GATEWAY, e.to_string()),
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<LookupError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
