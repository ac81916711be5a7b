// SPDX-License-Identifier: MPL-2.0
//! Document rendering port definition.
//!
//! Defines the [`DocumentRenderer`] trait converting an HTML string into a
//! PDF file on disk, and the request/error types of its contract. The request
//! is handed over when `render` is called; the returned future resolves once
//! the file is written.

use futures_util::future::BoxFuture;
use std::fmt;
use std::path::PathBuf;

/// A request to render an HTML document to a PDF file.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// The HTML body to render.
    pub html: String,
    /// Base name, without extension, of the output file.
    pub file_name: String,
    /// Directory below the renderer's documents root the file lands in.
    pub directory: String,
    /// Page height in points.
    pub height: u32,
    /// Page width in points.
    pub width: u32,
    /// Uniform page padding in points.
    pub padding: u32,
}

/// Errors that can occur while rendering a document.
#[derive(Debug, Clone)]
pub enum RenderError {
    /// The request itself is unusable (empty file name, path separators, ...).
    InvalidRequest(String),

    /// The rendering engine rejected or failed on the document.
    Engine(String),

    /// The output file could not be written.
    Io(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidRequest(msg) => write!(f, "Invalid render request: {}", msg),
            RenderError::Engine(msg) => write!(f, "Render engine error: {}", msg),
            RenderError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Port for converting an HTML document into a PDF file.
///
/// Implementations must be `Send + Sync`. Rendering is CPU-bound; adapters
/// are expected to move the actual layout work off the calling thread.
pub trait DocumentRenderer: Send + Sync {
    /// Submits the request; the future resolves to the path of the written PDF.
    fn render(&self, request: RenderRequest) -> BoxFuture<'static, Result<PathBuf, RenderError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_display() {
        let err = RenderError::InvalidRequest("empty file name".to_string());
        assert!(format!("{}", err).contains("empty file name"));

        let err = RenderError::Engine("layout failed".to_string());
        assert!(format!("{}", err).contains("layout failed"));

        let err = RenderError::Io("permission denied".to_string());
        assert!(format!("{}", err).contains("permission denied"));
    }
}
