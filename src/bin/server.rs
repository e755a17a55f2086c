//! CLT Solver HTTP Server

use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};

use clt_solver::error::CLTError;
use clt_solver::input::plies_from_value;
use clt_solver::prelude::*;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct LaminateResponse {
    success: bool,
    error: Option<String>,
    results: Option<LaminateReport>,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn laminate(Json(request): Json<Value>) -> impl IntoResponse {
    match run_laminate(request) {
        Ok(results) => (
            StatusCode::OK,
            Json(LaminateResponse {
                success: true,
                error: None,
                results: Some(results),
            }),
        ),
        Err(e) => {
            log::warn!("laminate request rejected: {}", e);
            let status = match e.kind() {
                ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
                ErrorKind::Domain => StatusCode::UNPROCESSABLE_ENTITY,
            };
            (
                status,
                Json(LaminateResponse {
                    success: false,
                    error: Some(e.to_string()),
                    results: None,
                }),
            )
        }
    }
}

fn run_laminate(request: Value) -> Result<LaminateReport, CLTError> {
    let plies = plies_from_value(request)?;
    let laminate = LaminateAssembly::new(&plies)?;
    log::info!(
        "assembled laminate: {} plies, h = {:e}",
        laminate.ply_count(),
        laminate.total_thickness()
    );
    Ok(laminate.to_report())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ServerConfig::from_env()?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/laminate", post(laminate))
        .layer(cors);

    let addr = config.address();
    println!("CLT Solver Server listening on http://{}", addr);
    println!("  Health check: GET  /health");
    println!("  Laminate:     POST /api/v1/laminate");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
