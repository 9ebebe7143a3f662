use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::sync::{mpsc, oneshot};
use tower_http::trace::TraceLayer;

use super::insight::InsightRequest;
use super::ServiceError;
use crate::settings::Server;

#[derive(Clone)]
struct AppState {
    insight_channel: mpsc::Sender<InsightRequest>,
}

/// Strict YYYY-MM: four digit year, dash, two digit month in 01-12.
fn is_valid_month(month: &str) -> bool {
    let bytes = month.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }

    if !bytes[..4].iter().all(|b| b.is_ascii_digit())
        || !bytes[5..].iter().all(|b| b.is_ascii_digit())
    {
        return false;
    }

    let month_number = (bytes[5] - b'0') * 10 + (bytes[6] - b'0');
    (1..=12).contains(&month_number)
}

async fn predict_spending(
    State(state): State<AppState>,
    Path((user_id, month)): Path<(String, String)>,
) -> impl IntoResponse {
    if !is_valid_month(&month) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid month format. Use YYYY-MM"})),
        );
    }

    let (insight_tx, insight_rx) = oneshot::channel();

    let send_result = state
        .insight_channel
        .send(InsightRequest::PredictSpending {
            user_id,
            month,
            response: insight_tx,
        })
        .await;

    if let Err(e) = send_result {
        let error = ServiceError::Communication("InsightService".to_string(), e.to_string());
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": error.to_string()})),
        );
    }

    match insight_rx.await {
        Ok(Ok(insight)) => (StatusCode::OK, Json(json!(insight))),
        Ok(Err(ServiceError::NotFound)) => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "No transactions found"})),
        ),
        Ok(Err(service_error)) => {
            log::error!("Prediction error: {}", service_error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": service_error.to_string()})),
            )
        }
        Err(e) => {
            let error = ServiceError::Communication("InsightService".to_string(), e.to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": error.to_string()})),
            )
        }
    }
}

pub async fn start_http_server(
    insight_channel: mpsc::Sender<InsightRequest>,
    server: &Server,
) -> Result<(), anyhow::Error> {
    let app_state = AppState { insight_channel };

    let app = Router::new()
        .route("/predict-spending/{user_id}/{month}", get(predict_spending))
        .route("/health", get(|| async { "OK" }))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind((server.host.as_str(), server.port)).await?;
    println!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
