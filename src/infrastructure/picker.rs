// SPDX-License-Identifier: MPL-2.0
//! Image source adapter backed by the native file dialog.

use crate::application::port::image_source::{ImageSource, MediaKind, PickOutcome, PickRequest};
use futures_util::future::BoxFuture;

/// File extensions offered by the photo filter.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "tiff", "webp", "bmp", "ico"];

/// An [`ImageSource`] that presents the platform's file open dialog.
///
/// A file dialog cannot capture, so `camera`, `quality`, and
/// `wait_until_saved` from the request are carried but not interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogImageSource;

impl DialogImageSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageSource for DialogImageSource {
    fn pick(&self, request: PickRequest) -> BoxFuture<'static, PickOutcome> {
        Box::pin(async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title(&request.title);

            match request.media {
                MediaKind::Photo => {
                    dialog = dialog.add_filter("Images", IMAGE_EXTENSIONS);
                }
            }

            if let Some(dir) = request.initial_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            match dialog.pick_file().await {
                // Report a scheme-qualified URI; the controller normalizes it.
                Some(handle) => PickOutcome::Picked(format!("file://{}", handle.path().display())),
                None => PickOutcome::Cancelled,
            }
        })
    }
}
