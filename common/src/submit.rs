//! Submission building and response interpretation
//!
//! The pure half of the submit flow: turn the current scan batch plus the
//! auxiliary form fields into one [`BulkCreateRequest`], and map the
//! backend's `{status, message}` envelope to a success message or an
//! error. The network half lives in the WASM crate; this layer never sees
//! a socket, so it is host-testable.

use crate::batch::ScanBatch;
use crate::error::{Error, Result};
use crate::protocol::{ApiResponse, BulkCreateRequest};

/// Shown when the backend accepts the batch without a message of its own.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Routers created successfully";

/// Build the one batched create request.
///
/// Client validation happens here: an empty batch or blank category is a
/// [`Error::Validation`] and never reaches the network layer.
pub fn build_request(batch: &ScanBatch, category: &str) -> Result<BulkCreateRequest> {
    if batch.is_empty() {
        return Err(Error::Validation("scan at least one serial number".to_string()));
    }
    let category = category.trim();
    if category.is_empty() {
        return Err(Error::Validation("a category is required".to_string()));
    }
    Ok(BulkCreateRequest {
        serial_numbers: batch.serials().iter().map(|s| s.as_str().to_string()).collect(),
        category: category.to_string(),
    })
}

/// Map the backend envelope to the submit outcome.
///
/// The backend mirrors the HTTP status into the body and the client
/// branches on the body field. The endpoint is atomic: one success or one
/// error for the whole batch, no partial results.
pub fn interpret_response(response: &ApiResponse) -> Result<String> {
    if response.status == 200 {
        if response.message.is_empty() {
            Ok(DEFAULT_SUCCESS_MESSAGE.to_string())
        } else {
            Ok(response.message.clone())
        }
    } else {
        Err(Error::Server {
            status: response.status,
            message: response.message.clone(),
        })
    }
}
