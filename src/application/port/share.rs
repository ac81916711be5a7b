// SPDX-License-Identifier: MPL-2.0
//! Share port definition.
//!
//! Defines the [`ShareSink`] trait handing a generated file to the platform,
//! and the request/error types of its contract. The request is handed over
//! when `share` is called; the returned future resolves once the platform
//! handler has been launched.

use futures_util::future::BoxFuture;
use std::fmt;
use std::path::PathBuf;

/// A request to share a file through the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareRequest {
    /// Human-readable title of the shared content.
    pub title: String,
    /// Accompanying message; may be empty.
    pub message: String,
    /// The file being shared.
    pub url: PathBuf,
    /// Subject line for mail-like targets; may be empty.
    pub subject: String,
}

impl ShareRequest {
    /// A share request for a file with a title and no message or subject.
    #[must_use]
    pub fn for_file(title: impl Into<String>, url: PathBuf) -> Self {
        Self {
            title: title.into(),
            message: String::new(),
            url,
            subject: String::new(),
        }
    }
}

/// Errors that can occur while handing a file to the platform.
#[derive(Debug, Clone)]
pub enum ShareError {
    /// No share mechanism exists on this platform.
    Unsupported,

    /// The platform handler could not be launched.
    Launch(String),
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Unsupported => write!(f, "Sharing is not supported on this platform"),
            ShareError::Launch(msg) => write!(f, "Could not launch the platform handler: {}", msg),
        }
    }
}

impl std::error::Error for ShareError {}

/// Port for handing a file to the platform's share mechanism.
pub trait ShareSink: Send + Sync {
    /// Submits the request; the future resolves once the handoff completes.
    fn share(&self, request: ShareRequest) -> BoxFuture<'static, Result<(), ShareError>>;
}
