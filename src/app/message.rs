// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::image_source::PickOutcome;
use crate::application::port::renderer::RenderError;
use crate::application::port::share::ShareError;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::form;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// form messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(form::Message),
    /// The image picker resolved.
    ImagePicked(PickOutcome),
    /// The picked photo finished decoding for the preview.
    PreviewLoaded(Result<ImageData, Error>),
    /// The document renderer resolved.
    DocumentRendered(Result<PathBuf, RenderError>),
    /// The share handoff resolved.
    ShareCompleted(Result<(), ShareError>),
    Notification(notifications::Message),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional photo path to preload on startup.
    pub file_path: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `SNAPSHEET_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SNAPSHEET_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
