//! Router endpoints
//!
//! `POST /bulk-routers/` — batched creation of scanned routers
//! `GET  /routers-suggestions/` — serial/IMEI prefix search

use stock_scan_common::{
    interpret_response, ApiResponse, BulkCreateRequest, Error, Result,
    RouterSuggestionsResponse, Suggestion,
};

use super::http;

pub const BULK_ROUTERS_PATH: &str = "/bulk-routers/";
pub const ROUTER_SUGGESTIONS_PATH: &str = "/routers-suggestions/";

/// Submit the whole scan batch in one request.
///
/// The endpoint is atomic; the result is the success message to toast or
/// the server's rejection verbatim. Never retried here — a failure leaves
/// the caller's state intact for explicit user re-action.
pub async fn create_bulk(request: &BulkCreateRequest) -> Result<String> {
    let response: ApiResponse = http::post_json(BULK_ROUTERS_PATH, request).await?;
    interpret_response(&response)
}

/// Routers whose IMEI or serial number starts with `value`.
pub async fn router_suggestions(value: &str) -> Result<Vec<Suggestion>> {
    let response: RouterSuggestionsResponse =
        http::get_suggestions(ROUTER_SUGGESTIONS_PATH, value).await?;
    if response.status != 200 {
        return Err(Error::Server {
            status: response.status,
            message: response.message,
        });
    }
    Ok(response.routers.into_iter().map(Into::into).collect())
}
