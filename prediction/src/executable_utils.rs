use clap::Parser;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use http::header;
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use common::config::{BackendConfig, Config};

use crate::{
    model::GenericError,
    predictor::{PredictError, TrendPredictor},
    recommendation::{Recommendation, recommend},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: String,
}

pub fn initialize_executable() -> Result<Config, GenericError> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    println!("Loading config from: {}", args.config);
    let config = Config::load(&args.config)?;
    println!("Loaded config: {:#?}", config);

    Ok(config)
}

pub fn initialize_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(log_level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn TrendPredictor>,
    pub materials: Arc<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct PredictRequestBody {
    pub material: String,
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PredictResponseBody {
    Prediction {
        material: String,
        year: i32,
        month: u32,
        label: String,
        display: String,
        recommendation: Recommendation,
        guidance: &'static str,
    },
    NoPrediction {
        material: String,
        year: i32,
        month: u32,
        warning: String,
    },
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}

pub async fn list_materials(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.materials.as_ref().clone()).into_response()
}

pub async fn predict_trend(
    State(state): State<AppState>,
    Json(request): Json<PredictRequestBody>,
) -> Response {
    tracing::info!(
        material = %request.material,
        year = request.year,
        month = request.month,
        "processing prediction request"
    );

    match state
        .predictor
        .predict(&request.material, request.year, request.month)
        .await
    {
        Ok(Some(label)) => {
            let recommendation = recommend(&label);
            let body = PredictResponseBody::Prediction {
                material: request.material,
                year: request.year,
                month: request.month,
                label: label.to_string(),
                display: label.display_name(),
                recommendation,
                guidance: recommendation.guidance(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Ok(None) => {
            tracing::info!(material = %request.material, "no prediction available");
            let body = PredictResponseBody::NoPrediction {
                warning: format!("No prediction available for {}", request.material),
                material: request.material,
                year: request.year,
                month: request.month,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(PredictError::UnknownMaterial(material)) => {
            tracing::warn!(material = %material, "prediction requested for unknown material");
            (StatusCode::NOT_FOUND, format!("unknown material: {material}")).into_response()
        }
        Err(error @ PredictError::Data(_)) => {
            tracing::error!(error = %error, "rule model data error");
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
        }
        Err(error @ PredictError::Remote(_)) => {
            tracing::error!(error = %error, "remote prediction failed");
            (StatusCode::BAD_GATEWAY, error.to_string()).into_response()
        }
    }
}

pub fn build_router(predictor: Arc<dyn TrendPredictor>, materials: Vec<String>) -> Router {
    let state = AppState {
        predictor,
        materials: Arc::new(materials),
    };

    Router::new()
        .route("/api/materials", get(list_materials))
        .route("/api/predict", post(predict_trend))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin("http://localhost:5173".parse::<header::HeaderValue>().unwrap())
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn run_backend(
    config: BackendConfig,
    predictor: Arc<dyn TrendPredictor>,
    materials: Vec<String>,
) -> Result<(), GenericError> {
    let app = build_router(predictor, materials);

    tracing::info!("Starting backend service at {}", config.server_address);
    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
