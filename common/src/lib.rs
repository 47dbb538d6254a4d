//! Stock Scan Common Library
//!
//! Platform-agnostic core of the bulk-entry client, shared with the
//! Web (WASM) crate: serial validation, the scan batch, wire types,
//! suggestion query sequencing and submission logic.

pub mod batch;
pub mod error;
pub mod protocol;
pub mod serial;
pub mod submit;
pub mod suggest;

pub use batch::{PasteReport, ScanBatch, ScanOutcome};
pub use error::{Error, Result};
pub use protocol::{
    ApiResponse, BulkCreateRequest, CategorySuggestion, CategorySuggestionsResponse,
    RouterSuggestion, RouterSuggestionsResponse,
};
pub use serial::{is_valid_serial, SerialNumber, SERIAL_LEN};
pub use submit::{build_request, interpret_response, DEFAULT_SUCCESS_MESSAGE};
pub use suggest::{QueryAction, QueryGuard, QueryId, Suggestion};
