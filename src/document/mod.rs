// SPDX-License-Identifier: MPL-2.0
//! Synthesis of the survey sheet document.
//!
//! The sheet is a minimal HTML fragment: one heading carrying the title and
//! one image element referencing the picked photo. User input is escaped so
//! it cannot alter the structure of the generated markup.

use crate::application::port::RenderRequest;
use crate::config::{self, PageConfig};
use std::path::Path;

/// Escapes text for safe embedding in HTML element content or attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Composes the survey sheet fragment from a title and an optional photo.
///
/// An absent photo yields an image element with an empty source, keeping the
/// document shape identical whether or not a photo was picked.
#[must_use]
pub fn compose(title: &str, image: Option<&Path>) -> String {
    let source = image
        .map(|path| escape_html(&path.display().to_string()))
        .unwrap_or_default();

    format!(
        "<h1>{}</h1>\n<img src=\"{}\" />",
        escape_html(title),
        source
    )
}

/// Builds the fixed render request for a survey sheet.
#[must_use]
pub fn survey_request(title: &str, image: Option<&Path>, page: &PageConfig) -> RenderRequest {
    RenderRequest {
        html: compose(title, image),
        file_name: config::DOCUMENT_FILE_NAME.to_string(),
        directory: config::DOCUMENT_DIRECTORY.to_string(),
        height: page.height(),
        width: page.width(),
        padding: page.padding(),
    }
}
