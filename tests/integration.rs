// SPDX-License-Identifier: MPL-2.0
//! End-to-end controller tests running the whole pipeline against mock
//! capabilities, plus config/i18n wiring checks.

use futures_util::future::BoxFuture;
use snapsheet::app::{paths, App, Flags, Message, Phase, Services};
use snapsheet::application::port::image_source::{ImageSource, PickOutcome, PickRequest};
use snapsheet::application::port::renderer::{DocumentRenderer, RenderError, RenderRequest};
use snapsheet::application::port::share::{ShareError, ShareRequest, ShareSink};
use snapsheet::config::{self, Config};
use snapsheet::i18n::fluent::I18n;
use snapsheet::ui::form;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};
use tempfile::tempdir;

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Points the config and data directories at a temp dir for the duration of
/// the test, so nothing touches the real platform folders.
fn with_temp_dirs<F>(test: F)
where
    F: FnOnce(&std::path::Path),
{
    let _guard = env_lock().lock().expect("failed to lock mutex");
    let temp_dir = tempdir().expect("failed to create temp dir");
    std::env::set_var(paths::ENV_DATA_DIR, temp_dir.path());
    std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

    test(temp_dir.path());

    std::env::remove_var(paths::ENV_DATA_DIR);
    std::env::remove_var(paths::ENV_CONFIG_DIR);
}

struct ScriptedSource {
    outcome: PickOutcome,
}

impl ImageSource for ScriptedSource {
    fn pick(&self, _request: PickRequest) -> BoxFuture<'static, PickOutcome> {
        let outcome = self.outcome.clone();
        Box::pin(async move { outcome })
    }
}

#[derive(Default)]
struct RecordingRenderer {
    requests: Mutex<Vec<RenderRequest>>,
}

impl DocumentRenderer for RecordingRenderer {
    fn render(&self, request: RenderRequest) -> BoxFuture<'static, Result<PathBuf, RenderError>> {
        self.requests.lock().unwrap().push(request);
        Box::pin(async move { Ok(PathBuf::from("/out/Survey.pdf")) })
    }
}

#[derive(Default)]
struct RecordingShare {
    requests: Mutex<Vec<ShareRequest>>,
}

impl ShareSink for RecordingShare {
    fn share(&self, request: ShareRequest) -> BoxFuture<'static, Result<(), ShareError>> {
        self.requests.lock().unwrap().push(request);
        Box::pin(async move { Ok(()) })
    }
}

fn mock_services(
    outcome: PickOutcome,
) -> (Services, Arc<RecordingRenderer>, Arc<RecordingShare>) {
    let renderer = Arc::new(RecordingRenderer::default());
    let share = Arc::new(RecordingShare::default());
    let services = Services {
        image_source: Arc::new(ScriptedSource { outcome }),
        renderer: renderer.clone(),
        share: share.clone(),
    };
    (services, renderer, share)
}

#[test]
fn full_pipeline_from_pick_to_share() {
    with_temp_dirs(|_| {
        let (services, renderer, share) = mock_services(PickOutcome::Cancelled);
        let (mut app, _task) = App::with_services(Flags::default(), services);

        // Compose the sheet
        let _ = app.update(Message::Form(form::Message::TitleChanged("Hello".into())));
        let _ = app.update(Message::ImagePicked(PickOutcome::Picked(
            "file:///a/b.jpg".into(),
        )));
        assert_eq!(app.image_path(), Some(std::path::Path::new("/a/b.jpg")));

        // Generate: renderer receives the document and the fixed layout
        let _ = app.update(Message::Form(form::Message::CreatePdfPressed));
        {
            let requests = renderer.requests.lock().unwrap();
            assert_eq!(requests.len(), 1);
            assert!(requests[0].html.contains("<h1>Hello</h1>"));
            assert_eq!(requests[0].file_name, "Survey");
            assert_eq!(requests[0].directory, "docs");
            assert_eq!(
                (requests[0].height, requests[0].width, requests[0].padding),
                (800, 1056, 24)
            );
        }

        // Renderer resolves: the share sink is invoked with the produced file
        let _ = app.update(Message::DocumentRendered(Ok(PathBuf::from(
            "/out/Survey.pdf",
        ))));
        {
            let requests = share.requests.lock().unwrap();
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0].url, PathBuf::from("/out/Survey.pdf"));
            assert_eq!(requests[0].title, "Survey PDF");
            assert_eq!(requests[0].message, "");
            assert_eq!(requests[0].subject, "");
        }

        // Share resolves: the controller is idle again
        let _ = app.update(Message::ShareCompleted(Ok(())));
        assert_eq!(app.phase(), Phase::Idle);
    });
}

#[test]
fn pick_directory_persists_across_sessions() {
    with_temp_dirs(|_| {
        {
            let (services, _renderer, _share) = mock_services(PickOutcome::Cancelled);
            let (mut app, _task) = App::with_services(Flags::default(), services);
            let _ = app.update(Message::ImagePicked(PickOutcome::Picked(
                "file:///home/user/photos/cat.jpg".into(),
            )));
        }

        // A fresh session starts the picker in the remembered directory; the
        // stored state is what the dialog adapter receives.
        let (state, warning) =
            snapsheet::app::persisted_state::AppState::load();
        assert!(warning.is_none());
        assert_eq!(
            state.last_pick_directory,
            Some(PathBuf::from("/home/user/photos"))
        );
    });
}

#[test]
fn language_change_via_config() {
    with_temp_dirs(|dir| {
        let config_path = dir.join("settings.toml");

        let mut initial = Config::default();
        initial.general.language = Some("en-US".to_string());
        config::save_to_path(&initial, &config_path).expect("write initial config");

        let loaded = config::load_from_path(&config_path).expect("load initial config");
        let i18n_en = I18n::new(None, &loaded);
        assert_eq!(i18n_en.current_locale().to_string(), "en-US");

        let mut french = Config::default();
        french.general.language = Some("fr".to_string());
        config::save_to_path(&french, &config_path).expect("write french config");

        let loaded = config::load_from_path(&config_path).expect("load french config");
        let i18n_fr = I18n::new(None, &loaded);
        assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    });
}

#[test]
fn config_warning_becomes_notification() {
    with_temp_dirs(|dir| {
        std::fs::write(dir.join("settings.toml"), "not [ valid toml").expect("write file");

        let (services, _renderer, _share) = mock_services(PickOutcome::Cancelled);
        let (app, _task) = App::with_services(Flags::default(), services);

        assert!(app.notifications().has_notifications());
    });
}

#[test]
fn cli_file_path_preloads_image_reference() {
    with_temp_dirs(|_| {
        let (services, _renderer, _share) = mock_services(PickOutcome::Cancelled);
        let flags = Flags {
            file_path: Some("/cli/photo.jpg".into()),
            ..Flags::default()
        };
        let (app, _task) = App::with_services(flags, services);

        assert_eq!(app.image_path(), Some(std::path::Path::new("/cli/photo.jpg")));
    });
}
