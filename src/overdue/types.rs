//! Overdue event types and error definitions.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

/// Wire shape of a `POST /log_overdue_speaker` body.
///
/// Both fields are optional here so that an absent key can be reported as
/// [`LogError::MissingField`] instead of a generic decode failure. JSON `null`
/// deserializes to `None` and is treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct OverduePayload {
    pub name: Option<String>,
    #[serde(rename = "overdueTime")]
    pub overdue_time: Option<Number>,
}

/// A validated overdue report. Lives for one request only.
#[derive(Debug, Clone, PartialEq)]
pub struct OverdueEvent {
    /// Speaker identifier, written verbatim.
    pub name: String,
    /// Seconds over (positive) or under (negative) the allotted time.
    pub overdue_time: Number,
}

impl OverdueEvent {
    /// Decode and check a raw request body.
    pub fn from_body(body: &[u8]) -> LogResult<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| LogError::MalformedPayload(e.to_string()))?;
        if !value.is_object() {
            return Err(LogError::MalformedPayload("expected a JSON object".into()));
        }
        let payload = OverduePayload::deserialize(value)
            .map_err(|e| LogError::MalformedPayload(e.to_string()))?;
        Self::try_from(payload)
    }
}

impl TryFrom<OverduePayload> for OverdueEvent {
    type Error = LogError;

    fn try_from(payload: OverduePayload) -> Result<Self, Self::Error> {
        let name = payload.name.ok_or(LogError::MissingField("name"))?;
        let overdue_time = payload
            .overdue_time
            .ok_or(LogError::MissingField("overdueTime"))?;
        Ok(Self { name, overdue_time })
    }
}

/// Body returned for every successful append.
#[derive(Debug, Serialize)]
pub struct Acknowledgement {
    pub message: &'static str,
}

impl Acknowledgement {
    pub fn logged() -> Self {
        Self {
            message: "Logged successfully",
        }
    }
}

/// Errors that can occur while logging an overdue speaker.
#[derive(Debug, Error)]
pub enum LogError {
    /// A required key was absent from the payload.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The body was not a JSON object of the expected shape.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Appending to the log file failed.
    #[error("Failed to append to overdue log: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            LogError::MissingField(_) | LogError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            LogError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LogError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Result type for overdue logging operations.
pub type LogResult<T> = Result<T, LogError>;
