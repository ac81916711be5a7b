// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the survey pipeline.
//!
//! The `App` struct owns the two pieces of form state (title, photo
//! reference), the controller phase, and the three external services, and
//! translates messages into side effects. Policy decisions (window sizing,
//! phase guarding, persistence of the pick directory) are kept close to the
//! main update loop so user-facing behavior is easy to audit.

pub mod paths;
pub mod persisted_state;
mod message;
mod phase;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use phase::Phase;

use crate::application::port::image_source::ImageSource;
use crate::application::port::renderer::DocumentRenderer;
use crate::application::port::share::ShareSink;
use crate::config::{self, PageConfig};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{DialogImageSource, HyperRenderer, SystemShare};
use crate::media::ImageData;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// The three external capabilities the controller sequences.
pub struct Services {
    pub image_source: Arc<dyn ImageSource>,
    pub renderer: Arc<dyn DocumentRenderer>,
    pub share: Arc<dyn ShareSink>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            image_source: Arc::new(DialogImageSource::new()),
            renderer: Arc::new(HyperRenderer::new()),
            share: Arc::new(SystemShare::new()),
        }
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// Root Iced application state bridging the form, localization, and the
/// external services.
pub struct App {
    pub i18n: I18n,
    /// Title of the sheet being composed; may be empty.
    title: String,
    /// Reference to the picked photo; absent until a pick succeeds.
    image_path: Option<PathBuf>,
    /// Decoded preview of the picked photo.
    preview: Option<ImageData>,
    /// Where the controller is in its request pipeline.
    phase: Phase,
    theme_mode: ThemeMode,
    /// Page geometry used for generated documents.
    page: PageConfig,
    /// Persisted application state (last pick directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// The external capabilities behind the two actions.
    services: Services,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.phase)
            .field("has_image", &self.image_path.is_some())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            title: String::new(),
            image_path: None,
            preview: None,
            phase: Phase::Idle,
            theme_mode: ThemeMode::System,
            page: PageConfig::default(),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
            services: Services::default(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state with the production services and
    /// optionally kicks off preview loading for a photo passed on the CLI.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        Self::with_services(flags, Services::default())
    }

    /// Initializes application state with explicit services.
    pub fn with_services(flags: Flags, services: Services) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            services,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.page = config.page.clone();

        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            app.notifications.push(Notification::warning(&key));
        }

        let task = if let Some(path_str) = flags.file_path {
            let path = PathBuf::from(&path_str);
            app.image_path = Some(path.clone());
            Task::perform(
                async move { crate::media::load_preview(&path) },
                Message::PreviewLoaded,
            )
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let sheet_title = self.title.trim();

        if sheet_title.is_empty() {
            app_name
        } else {
            format!("{sheet_title} - {app_name}")
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            title: &mut self.title,
            image_path: &mut self.image_path,
            preview: &mut self.preview,
            phase: &mut self.phase,
            page: &self.page,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
            services: &self.services,
        };

        match message {
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::ImagePicked(outcome) => update::handle_image_picked(&mut ctx, outcome),
            Message::PreviewLoaded(result) => update::handle_preview_loaded(&mut ctx, result),
            Message::DocumentRendered(result) => {
                update::handle_document_rendered(&mut ctx, result)
            }
            Message::ShareCompleted(result) => update::handle_share_completed(&mut ctx, result),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Periodic tick drives notification auto-dismiss
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            title: &self.title,
            image_path: self.image_path.as_deref(),
            preview: self.preview.as_ref(),
            phase: self.phase,
            notifications: &self.notifications,
        })
    }

    /// The sheet title as currently typed.
    #[must_use]
    pub fn title_text(&self) -> &str {
        &self.title
    }

    /// The stored photo reference, if a pick has succeeded.
    #[must_use]
    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    /// The current controller phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a decoded preview is available.
    #[must_use]
    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// The toast notification manager.
    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}
