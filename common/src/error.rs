//! Error types for the bulk-entry client

use thiserror::Error;

/// Client-side error taxonomy.
///
/// `Validation` never reaches the network layer; `Server` carries the
/// backend's message verbatim; `Transport` covers fetch/decode failures.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("server rejected the request ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("network error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The text shown to the user in a toast or inline message.
    ///
    /// Server rejections surface the backend message verbatim; everything
    /// else uses the display form.
    pub fn user_message(&self) -> String {
        match self {
            Error::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result alias for the crate
pub type Result<T> = std::result::Result<T, Error>;
