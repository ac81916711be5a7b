// SPDX-License-Identifier: MPL-2.0
//! Image picking port definition.
//!
//! This module defines the [`ImageSource`] trait for obtaining a photo from
//! the user, along with the request and outcome types of its contract.
//! Infrastructure adapters implement the trait; the controller only ever sees
//! a [`PickOutcome`] and must branch on all three arms.

use futures_util::future::BoxFuture;
use std::path::PathBuf;

/// Which camera a capture-capable source should start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFacing {
    /// The rear (environment) camera.
    #[default]
    Rear,
    /// The front (selfie) camera.
    Front,
}

/// The kind of media the source should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaKind {
    /// Still photos only.
    #[default]
    Photo,
}

/// A request to the image source.
///
/// `camera`, `quality`, and `wait_until_saved` only apply to capture-capable
/// sources; a plain file dialog carries them without interpreting them.
#[derive(Debug, Clone, PartialEq)]
pub struct PickRequest {
    /// Whether the source may offer basic cropping/editing before returning.
    pub allow_editing: bool,
    /// Camera to start with when the source can capture.
    pub camera: CameraFacing,
    /// Kind of media to offer.
    pub media: MediaKind,
    /// Capture quality in `0.0..=1.0`.
    pub quality: f32,
    /// Caption shown on the picker UI.
    pub title: String,
    /// Require a captured image to be fully written before the pick returns.
    pub wait_until_saved: bool,
    /// Directory the picker should open in, when the source supports it.
    pub initial_directory: Option<PathBuf>,
}

impl PickRequest {
    /// The fixed photo request used by the survey form.
    #[must_use]
    pub fn photo(title: impl Into<String>) -> Self {
        Self {
            allow_editing: true,
            camera: CameraFacing::Rear,
            media: MediaKind::Photo,
            quality: 1.0,
            title: title.into(),
            wait_until_saved: true,
            initial_directory: None,
        }
    }

    /// Sets the directory the picker opens in.
    #[must_use]
    pub fn open_in(mut self, directory: Option<PathBuf>) -> Self {
        self.initial_directory = directory;
        self
    }
}

/// Outcome of a pick request. Exactly one arm is ever produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    /// The user selected an image; the URI may carry a `file://` scheme.
    Picked(String),
    /// The user dismissed the picker.
    Cancelled,
    /// The source failed with the given reason.
    Failed(String),
}

/// Strips a leading `file://` scheme, exactly once, from a picked URI.
#[must_use]
pub fn strip_file_scheme(uri: &str) -> PathBuf {
    PathBuf::from(uri.strip_prefix("file://").unwrap_or(uri))
}

/// Port for obtaining a photo from the user.
///
/// Implementations must be `Send + Sync`; the returned future is driven on
/// the runtime behind the UI event loop.
pub trait ImageSource: Send + Sync {
    /// Presents the picker and resolves to its outcome.
    fn pick(&self, request: PickRequest) -> BoxFuture<'static, PickOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_request_uses_fixed_configuration() {
        let request = PickRequest::photo("Select Image");
        assert!(request.allow_editing);
        assert_eq!(request.camera, CameraFacing::Rear);
        assert_eq!(request.media, MediaKind::Photo);
        assert_eq!(request.quality, 1.0);
        assert_eq!(request.title, "Select Image");
        assert!(request.wait_until_saved);
        assert!(request.initial_directory.is_none());
    }

    #[test]
    fn strip_file_scheme_removes_prefix() {
        assert_eq!(
            strip_file_scheme("file:///a/b.jpg"),
            PathBuf::from("/a/b.jpg")
        );
    }

    #[test]
    fn strip_file_scheme_leaves_plain_paths_alone() {
        assert_eq!(strip_file_scheme("/a/b.jpg"), PathBuf::from("/a/b.jpg"));
    }

    #[test]
    fn strip_file_scheme_strips_only_once() {
        assert_eq!(
            strip_file_scheme("file://file:///a/b.jpg"),
            PathBuf::from("file:///a/b.jpg")
        );
    }

    #[test]
    fn open_in_sets_initial_directory() {
        let request =
            PickRequest::photo("Select Image").open_in(Some(PathBuf::from("/home/user/photos")));
        assert_eq!(
            request.initial_directory,
            Some(PathBuf::from("/home/user/photos"))
        );
    }
}
