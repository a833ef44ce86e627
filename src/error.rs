//! Error types for the paragraph extraction library.
//!
//! The three text stages (normalization, line frequency analysis, paragraph
//! building) are total and never fail. Every error in this module comes from
//! the boundary: payload decoding, size limits, PDF text extraction, and I/O.

use serde::Serialize;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning a PDF payload into paragraphs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request carried no PDF payload
    #[error("pdf_base64 is required")]
    MissingPayload,

    /// The PDF payload is not valid base64
    #[error("Invalid base64 encoding: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Decoded payload exceeds the configured limit
    #[error("PDF too large: {size} bytes (limit {limit})")]
    PayloadTooLarge {
        /// Size of the decoded payload in bytes
        size: usize,
        /// Configured maximum in bytes
        limit: usize,
    },

    /// The bytes could not be read as a PDF document
    #[error("Malformed PDF: {0}")]
    MalformedPdf(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Message presented to callers of the parsing boundary.
    ///
    /// Payload validation errors keep their short fixed message. Everything
    /// else is reported as a single "failed to parse" class with the
    /// underlying cause appended.
    pub fn public_message(&self) -> String {
        match self {
            Error::MissingPayload => "pdf_base64 is required".to_string(),
            Error::InvalidBase64(_) => "Invalid base64 encoding".to_string(),
            Error::PayloadTooLarge { .. } => "PDF too large".to_string(),
            other => format!("Failed to parse PDF: {}", other),
        }
    }

    /// Whether the error was caused by the caller's payload rather than the document.
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            Error::MissingPayload | Error::InvalidBase64(_) | Error::PayloadTooLarge { .. }
        )
    }

    /// Build the JSON error payload for this error.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.public_message(),
        }
    }
}

/// Error payload returned to callers: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
