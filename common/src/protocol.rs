//! Wire types for the stock backend
//!
//! Request/response shapes of the JSON-over-HTTP endpoints the bulk-entry
//! client consumes:
//! - `POST /bulk-routers/`            — batched router creation
//! - `GET  /routers-suggestions/`     — serial/IMEI prefix search
//! - `GET  /categories-suggestions/`  — category name prefix search
//!
//! The backend duplicates the HTTP status in the JSON body and the client
//! branches on the body field, so every response type carries `status`.
//! Suggestion rows are raw column dumps and may grow extra fields; decoding
//! must tolerate them.

use serde::{Deserialize, Serialize};

/// Body of `POST /bulk-routers/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkCreateRequest {
    pub serial_numbers: Vec<String>,
    pub category: String,
}

/// Generic `{status, message}` envelope returned by state-changing
/// endpoints. `message` is absent on some success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

/// One row of `GET /routers-suggestions/?value=<partial>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterSuggestion {
    pub emei: String,
}

/// Response of `GET /routers-suggestions/`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouterSuggestionsResponse {
    pub status: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub routers: Vec<RouterSuggestion>,
}

/// One row of `GET /categories-suggestions/?value=<partial>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub name: String,
}

/// Response of `GET /categories-suggestions/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySuggestionsResponse {
    pub status: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub categories: Vec<CategorySuggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Request serialization
    // =============================================

    #[test]
    fn test_bulk_create_request_serialize() {
        let request = BulkCreateRequest {
            serial_numbers: vec!["AAAAAAAAAAAAAAAAA".to_string()],
            category: "Cat1".to_string(),
        };

        let json = serde_json::to_string(&request).expect("serialize failed");
        assert_eq!(
            json,
            r#"{"serial_numbers":["AAAAAAAAAAAAAAAAA"],"category":"Cat1"}"#
        );
    }

    // =============================================
    // Response deserialization
    // =============================================

    #[test]
    fn test_api_response_success_without_message() {
        // Success responses drop the message field entirely
        let response: ApiResponse = serde_json::from_str(r#"{"status":200}"#).expect("deserialize failed");
        assert_eq!(response.status, 200);
        assert_eq!(response.message, "");
    }

    #[test]
    fn test_api_response_failure_with_message() {
        let json = r#"{"status":500,"message":"Router already exists in the database"}"#;
        let response: ApiResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.status, 500);
        assert_eq!(response.message, "Router already exists in the database");
    }

    #[test]
    fn test_router_suggestions_deserialize() {
        let json = r#"{
            "status": 200,
            "routers": [{"emei": "35791246802468013"}, {"emei": "35791246802468021"}]
        }"#;

        let response: RouterSuggestionsResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.status, 200);
        assert_eq!(response.routers.len(), 2);
        assert_eq!(response.routers[0].emei, "35791246802468013");
    }

    #[test]
    fn test_router_suggestions_ignore_extra_fields() {
        // Rows are .values() dumps; extra columns must not break decoding
        let json = r#"{
            "status": 200,
            "routers": [{"emei": "35791246802468013", "id": 4, "serial_number": "X"}]
        }"#;

        let response: RouterSuggestionsResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.routers.len(), 1);
    }

    #[test]
    fn test_router_suggestions_missing_list() {
        // Error responses carry no routers list at all
        let response: RouterSuggestionsResponse =
            serde_json::from_str(r#"{"status":500,"message":"boom"}"#).expect("deserialize failed");
        assert_eq!(response.status, 500);
        assert_eq!(response.message, "boom");
        assert!(response.routers.is_empty());
    }

    #[test]
    fn test_category_suggestions_deserialize() {
        let json = r#"{"status":200,"categories":[{"name":"Cat1"},{"name":"Cat2"}]}"#;
        let response: CategorySuggestionsResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.status, 200);
        assert_eq!(response.categories[1].name, "Cat2");
    }
}
