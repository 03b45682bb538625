//! Request handlers.

use crate::error::EngineError;
use crate::models::NetworkPlanRequest;
use crate::planner::plan_network;
use axum::body::Bytes;
use axum::extract::ConnectInfo;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// JSON body of every non-2xx response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(error) => {
                log::warn!("Rejected request: {error}");
                (StatusCode::BAD_REQUEST, error)
            }
            ApiError::Internal(error) => {
                log::error!("Internal error: {error}");
                (StatusCode::INTERNAL_SERVER_ERROR, error)
            }
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

fn decode_request(body: &[u8]) -> Result<NetworkPlanRequest, ApiError> {
    let de = &mut serde_json::Deserializer::from_slice(body);
    serde_path_to_error::deserialize(de)
        .map_err(|e| ApiError::BadRequest(format!("Error decoding JSON payload: {e}")))
}

/// `POST /`: compute a network plan from a JSON request.
pub async fn calculate(
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    body: Bytes,
) -> Result<Response, ApiError> {
    log::info!("Client: {client}");
    let request = decode_request(&body)?;
    log::info!("Request: {request:?}");

    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )));
    }

    let response = plan_network(&request)?;
    let json = serde_json::to_string(&response)
        .map_err(|e| ApiError::Internal(format!("Error encoding JSON: {e}")))?;
    log::info!("Response: {json}");

    Ok(([(header::CONTENT_TYPE, "application/json")], json).into_response())
}

/// `GET /health`
pub async fn health_check() -> &'static str {
    "OK"
}
