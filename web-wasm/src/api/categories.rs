//! Category endpoints
//!
//! `GET /categories-suggestions/` — category name prefix search

use stock_scan_common::{CategorySuggestionsResponse, Error, Result, Suggestion};

use super::http;

pub const CATEGORY_SUGGESTIONS_PATH: &str = "/categories-suggestions/";

/// Categories whose name starts with `value`.
pub async fn category_suggestions(value: &str) -> Result<Vec<Suggestion>> {
    let response: CategorySuggestionsResponse =
        http::get_suggestions(CATEGORY_SUGGESTIONS_PATH, value).await?;
    if response.status != 200 {
        return Err(Error::Server {
            status: response.status,
            message: response.message,
        });
    }
    Ok(response.categories.into_iter().map(Into::into).collect())
}
