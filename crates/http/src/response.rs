//! Success envelope shared by every module.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// `{"status": "success", "message"?: ..., "data"?: ...}` with an HTTP status.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip)]
    code: StatusCode,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with a data payload
    pub fn ok(data: T) -> Self {
        Self::with_code(StatusCode::OK, Some(data))
    }

    /// 201 with a data payload
    pub fn created(data: T) -> Self {
        Self::with_code(StatusCode::CREATED, Some(data))
    }

    fn with_code(code: StatusCode, data: Option<T>) -> Self {
        Self {
            code,
            status: "success",
            message: None,
            data,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }
}

impl ApiResponse<()> {
    /// 200 carrying only a message
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self::with_code(StatusCode::OK, None).message(message)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_envelope() {
        let response = ApiResponse::created(json!({"bookId": "abc"})).message("Added");
        assert_eq!(response.code(), StatusCode::CREATED);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "success", "message": "Added", "data": {"bookId": "abc"}})
        );
    }

    #[test]
    fn test_acknowledged_omits_data() {
        let response = ApiResponse::acknowledged("Deleted");
        assert_eq!(response.code(), StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "success", "message": "Deleted"})
        );
    }
}
