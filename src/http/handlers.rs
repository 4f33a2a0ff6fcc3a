//! Route handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::http::request::RequestIdExt;
use crate::http::server::AppState;
use crate::overdue::{Acknowledgement, LogResult, OverdueEvent};

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /log_overdue_speaker`
///
/// Decodes the event, appends one line to the overdue log and acknowledges.
/// Nothing is written when the payload is rejected.
pub async fn log_overdue_speaker(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = headers.request_id();

    match append_event(&state, &body, request_id).await {
        Ok(()) => (StatusCode::OK, Json(Acknowledgement::logged())).into_response(),
        Err(e) => {
            let status = e.status();
            if status.is_server_error() {
                tracing::error!(request_id = %request_id, error = %e, "Failed to log overdue speaker");
            } else {
                tracing::warn!(request_id = %request_id, error = %e, "Rejected overdue report");
            }
            e.into_response()
        }
    }
}

async fn append_event(state: &AppState, body: &[u8], request_id: &str) -> LogResult<()> {
    let event = OverdueEvent::from_body(body)?;
    state.log.record(&event).await?;

    tracing::info!(
        request_id = %request_id,
        name = %event.name,
        overdue_time = %event.overdue_time,
        path = %state.log.path().display(),
        "Logged overdue speaker"
    );
    Ok(())
}
