// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the survey form with the toast overlay.

use super::{Message, Phase};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::form;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::Stack;
use iced::{Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: &'a str,
    pub image_path: Option<&'a Path>,
    pub preview: Option<&'a ImageData>,
    pub phase: Phase,
    pub notifications: &'a Manager,
}

/// Renders the application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form_view = form::view(form::ViewContext {
        i18n: ctx.i18n,
        title: ctx.title,
        image_path: ctx.image_path,
        preview: ctx.preview,
        actions_enabled: ctx.phase.is_idle(),
        status_key: ctx.phase.status_key(),
    })
    .map(Message::Form);

    let toast_overlay =
        Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(form_view)
        .push(toast_overlay)
        .into()
}
