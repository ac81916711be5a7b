// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] with mutable borrows of the
//! controller state it may touch. Action triggers are honored only while the
//! phase is idle; every external request's outcome arrives back as a message
//! and is branched on both arms.

use super::persisted_state::AppState;
use super::{Message, Phase, Services};
use crate::application::port::image_source::{self, PickOutcome, PickRequest};
use crate::application::port::renderer::RenderError;
use crate::application::port::share::{ShareError, ShareRequest};
use crate::config::{self, PageConfig};
use crate::document;
use crate::error::Error;
use crate::media::{self, ImageData};
use crate::ui::form;
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the controller state shared by the handlers.
pub struct UpdateContext<'a> {
    pub title: &'a mut String,
    pub image_path: &'a mut Option<PathBuf>,
    pub preview: &'a mut Option<ImageData>,
    pub phase: &'a mut Phase,
    pub page: &'a PageConfig,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
    pub services: &'a Services,
}

/// Handles form messages: title edits and the two action triggers.
pub fn handle_form_message(ctx: &mut UpdateContext<'_>, message: form::Message) -> Task<Message> {
    match message {
        form::Message::TitleChanged(text) => {
            *ctx.title = text;
            Task::none()
        }
        form::Message::LoadImagePressed => handle_load_image(ctx),
        form::Message::CreatePdfPressed => handle_create_pdf(ctx),
    }
}

/// Opens the image picker, unless a request is already in flight.
fn handle_load_image(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.phase.is_idle() {
        return Task::none();
    }
    *ctx.phase = Phase::PickingImage;

    let request = PickRequest::photo(config::PICKER_TITLE)
        .open_in(ctx.app_state.last_pick_directory.clone());

    Task::perform(
        ctx.services.image_source.pick(request),
        Message::ImagePicked,
    )
}

/// Renders the survey sheet, unless a request is already in flight.
///
/// An empty title or a missing photo is allowed; the document simply carries
/// an empty heading or image source.
fn handle_create_pdf(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.phase.is_idle() {
        return Task::none();
    }
    *ctx.phase = Phase::Rendering;

    let request = document::survey_request(ctx.title, ctx.image_path.as_deref(), ctx.page);

    Task::perform(
        ctx.services.renderer.render(request),
        Message::DocumentRendered,
    )
}

/// Handles the picker outcome: exactly one of picked, cancelled, or failed.
pub fn handle_image_picked(ctx: &mut UpdateContext<'_>, outcome: PickOutcome) -> Task<Message> {
    *ctx.phase = Phase::Idle;
    match outcome {
        PickOutcome::Cancelled => {
            eprintln!("Image pick cancelled");
            Task::none()
        }
        PickOutcome::Failed(reason) => {
            eprintln!("Image pick failed: {reason}");
            ctx.notifications
                .push(Notification::error("notification-pick-error"));
            Task::none()
        }
        PickOutcome::Picked(uri) => {
            let path = image_source::strip_file_scheme(&uri);
            set_image(ctx, path)
        }
    }
}

/// Stores the photo reference, remembers its directory, and reloads the preview.
fn set_image(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    ctx.app_state.set_last_pick_directory_from_file(&path);
    if let Some(key) = ctx.app_state.save() {
        ctx.notifications.push(Notification::warning(&key));
    }

    *ctx.image_path = Some(path.clone());

    Task::perform(
        async move { media::load_preview(&path) },
        Message::PreviewLoaded,
    )
}

/// Handles the decoded preview for the picked photo.
pub fn handle_preview_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(data) => {
            *ctx.preview = Some(data);
        }
        Err(err) => {
            // Only the preview failed; the stored reference stays valid.
            eprintln!("Preview decode failed: {err}");
            *ctx.preview = None;
            ctx.notifications
                .push(Notification::warning("notification-preview-error"));
        }
    }
    Task::none()
}

/// Handles the renderer outcome; on success the share sink is invoked next.
pub fn handle_document_rendered(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, RenderError>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            let file = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ctx.notifications.push(
                Notification::success("notification-render-success").with_arg("file", file),
            );

            let request = ShareRequest::for_file(config::SHARE_TITLE, path);
            Task::perform(ctx.services.share.share(request), Message::ShareCompleted)
        }
        Err(err) => {
            *ctx.phase = Phase::Idle;
            eprintln!("Document render failed: {err}");
            ctx.notifications
                .push(Notification::error("notification-render-error"));
            Task::none()
        }
    }
}

/// Handles the share outcome and returns the controller to idle.
pub fn handle_share_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), ShareError>,
) -> Task<Message> {
    *ctx.phase = Phase::Idle;
    if let Err(err) = result {
        eprintln!("Share failed: {err}");
        ctx.notifications
            .push(Notification::error("notification-share-error"));
    }
    Task::none()
}

/// A file dropped on the window behaves like a successful pick of that file.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if !ctx.phase.is_idle() {
        ctx.notifications
            .push(Notification::info("notification-drop-ignored"));
        return Task::none();
    }
    set_image(ctx, path)
}
