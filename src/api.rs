use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::providers::{FinnhubProvider, IbkrProvider, MarketDataProvider, ProviderError};
use crate::strategies::{Evaluator, FormInputs, Inputs, Preset, StrategyResult, VolatilitySource};

#[derive(Clone)]
pub struct AppState {
    pub evaluator: Evaluator,
    pub volatility_source: VolatilitySource,
    pub ibkr: Arc<dyn MarketDataProvider>,
    pub finnhub: Arc<dyn MarketDataProvider>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            evaluator: Evaluator::new(config.advisor),
            volatility_source: config.volatility_source,
            ibkr: Arc::new(IbkrProvider),
            finnhub: Arc::new(FinnhubProvider),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub ok: bool,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<FormInputs>,
}

#[derive(Debug, Deserialize)]
pub struct SnapshotQuery {
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PresetEvaluation {
    pub preset: Preset,
    pub inputs: Inputs,
    pub result: StrategyResult,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/evaluate", post(evaluate))
        .route("/api/presets", get(list_presets))
        .route("/api/presets/{name}", get(get_preset))
        .route("/api/ibkr", get(ibkr_snapshot))
        .route("/api/finnhub", get(finnhub_snapshot))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

pub async fn run_server(config: Config) -> Result<()> {
    let state = AppState::new(&config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .map_err(|e| {
            error!("❌ Failed to bind advisor server to {}: {}", config.server.bind_addr, e);
            e
        })?;
    info!("🌐 Advisor server running on http://{}", config.server.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn evaluate(
    State(state): State<AppState>,
    Json(form): Json<FormInputs>,
) -> Json<StrategyResult> {
    let inputs = form.resolve(state.volatility_source);
    Json(state.evaluator.evaluate(&inputs))
}

async fn list_presets() -> Json<Vec<Preset>> {
    Json(Preset::all().to_vec())
}

async fn get_preset(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> std::result::Result<Json<PresetEvaluation>, StatusCode> {
    let preset: Preset = name.parse().map_err(|e| {
        warn!("⚠️ {}", e);
        StatusCode::NOT_FOUND
    })?;
    let inputs = preset.inputs();
    let result = state.evaluator.evaluate(&inputs);
    Ok(Json(PresetEvaluation {
        preset,
        inputs,
        result,
    }))
}

async fn ibkr_snapshot(
    State(state): State<AppState>,
    Query(query): Query<SnapshotQuery>,
) -> Response {
    provider_snapshot(state.ibkr.as_ref(), &query.symbol).await
}

async fn finnhub_snapshot(
    State(state): State<AppState>,
    Query(query): Query<SnapshotQuery>,
) -> Response {
    provider_snapshot(state.finnhub.as_ref(), &query.symbol).await
}

async fn provider_snapshot(provider: &dyn MarketDataProvider, symbol: &str) -> Response {
    match provider.fetch_snapshot(symbol).await {
        Ok(snapshot) => Json(ProviderStatus {
            ok: true,
            provider: provider.name().to_string(),
            message: None,
            snapshot: Some(snapshot),
        })
        .into_response(),
        Err(ProviderError::NotImplemented(message)) => (
            StatusCode::NOT_IMPLEMENTED,
            Json(ProviderStatus {
                ok: false,
                provider: provider.name().to_string(),
                message: Some(message),
                snapshot: None,
            }),
        )
            .into_response(),
    }
}
