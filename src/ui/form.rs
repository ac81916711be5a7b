// SPDX-License-Identifier: MPL-2.0
//! The survey sheet form: title input, photo preview, and the two actions.

use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use iced::widget::{button, container, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::path::Path;

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    /// The title text changed.
    TitleChanged(String),
    /// The user asked to pick a photo.
    LoadImagePressed,
    /// The user asked to generate and share the PDF.
    CreatePdfPressed,
}

/// Context required to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: &'a str,
    pub image_path: Option<&'a Path>,
    pub preview: Option<&'a ImageData>,
    /// Whether the two action buttons accept presses.
    pub actions_enabled: bool,
    /// Status line key shown while a request is in flight.
    pub status_key: Option<&'static str>,
}

/// Renders the survey form.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let heading = Text::new(i18n.tr("form-heading")).size(typography::TITLE);

    let title_input = text_input(&i18n.tr("form-title-placeholder"), ctx.title)
        .on_input(Message::TitleChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let preview = preview_panel(&ctx);

    let load_button = button(Text::new(i18n.tr("form-load-image")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press_maybe(ctx.actions_enabled.then(|| Message::LoadImagePressed));

    let create_button = button(Text::new(i18n.tr("form-create-pdf")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press_maybe(ctx.actions_enabled.then(|| Message::CreatePdfPressed));

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(load_button)
        .push(create_button);

    let mut column = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .push(heading)
        .push(title_input)
        .push(preview)
        .push(actions);

    if let Some(key) = ctx.status_key {
        let status = Text::new(i18n.tr(key))
            .size(typography::CAPTION)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.strong.color),
            });
        column = column.push(status);
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL)
        .into()
}

/// The photo preview, or a framed placeholder before a photo is picked.
fn preview_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let content: Element<'a, Message> = match ctx.preview {
        Some(data) => {
            let picture = iced::widget::image(data.handle.clone())
                .height(Length::Fixed(sizing::PREVIEW_HEIGHT));

            let dimensions = i18n.tr_with_args(
                "form-image-dimensions",
                &[
                    ("width", data.width.to_string().as_str()),
                    ("height", data.height.to_string().as_str()),
                ],
            );
            let caption_text = match ctx.image_path.and_then(|p| p.file_name()) {
                Some(name) => format!("{} ({})", name.to_string_lossy(), dimensions),
                None => dimensions,
            };

            let caption = Text::new(caption_text).size(typography::CAPTION);

            Column::new()
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Center)
                .push(picture)
                .push(caption)
                .into()
        }
        None => Text::new(i18n.tr("form-no-image"))
            .size(typography::BODY)
            .into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT + spacing::XL))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|theme: &Theme| container::Style {
            border: iced::Border {
                color: theme.extended_palette().background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..container::Style::default()
        })
        .into()
}
