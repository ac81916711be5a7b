// SPDX-License-Identifier: MPL-2.0
//! Document renderer adapter backed by the `hyper-render` HTML engine.

use crate::app::paths;
use crate::application::port::renderer::{DocumentRenderer, RenderError, RenderRequest};
use futures_util::future::BoxFuture;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// A [`DocumentRenderer`] that lays out HTML with `hyper-render` and writes
/// the resulting PDF below a documents root.
#[derive(Debug, Clone)]
pub struct HyperRenderer {
    documents_root: PathBuf,
}

impl HyperRenderer {
    /// Creates a renderer writing below the platform documents directory.
    #[must_use]
    pub fn new() -> Self {
        let documents_root = paths::get_documents_root().unwrap_or_else(|| PathBuf::from("."));
        Self { documents_root }
    }

    /// Creates a renderer writing below an explicit root (used by tests).
    #[must_use]
    pub fn with_root(documents_root: PathBuf) -> Self {
        Self { documents_root }
    }

    /// Wraps the request fragment into a complete document, applying the
    /// requested padding as a uniform body padding.
    fn materialize(request: &RenderRequest) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n\
             <style>body {{ margin: 0; padding: {}px; }}</style>\n</head>\n\
             <body>\n{}\n</body>\n</html>\n",
            request.padding, request.html
        )
    }

    fn validate(request: &RenderRequest) -> Result<(), RenderError> {
        if request.file_name.is_empty() {
            return Err(RenderError::InvalidRequest("empty file name".to_string()));
        }
        if request.file_name.contains(|c| c == '/' || c == '\\') {
            return Err(RenderError::InvalidRequest(
                "file name must not contain path separators".to_string(),
            ));
        }
        let directory = Path::new(&request.directory);
        if directory.is_absolute()
            || directory
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(RenderError::InvalidRequest(
                "directory must be relative and must not traverse upward".to_string(),
            ));
        }
        Ok(())
    }

    /// Lays out the document and writes the PDF. CPU-bound; called from the
    /// blocking pool by the port implementation.
    fn render_blocking(&self, request: &RenderRequest) -> Result<PathBuf, RenderError> {
        Self::validate(request)?;

        let html = Self::materialize(request);
        let config = hyper_render::Config::new()
            .size(request.width, request.height)
            .format(hyper_render::OutputFormat::Pdf);

        let bytes =
            hyper_render::render(&html, config).map_err(|e| RenderError::Engine(e.to_string()))?;

        let directory = self.documents_root.join(&request.directory);
        fs::create_dir_all(&directory).map_err(|e| RenderError::Io(e.to_string()))?;

        let path = directory.join(format!("{}.pdf", request.file_name));
        fs::write(&path, &bytes).map_err(|e| RenderError::Io(e.to_string()))?;

        Ok(path)
    }
}

impl Default for HyperRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for HyperRenderer {
    fn render(&self, request: RenderRequest) -> BoxFuture<'static, Result<PathBuf, RenderError>> {
        let renderer = self.clone();
        Box::pin(async move {
            tokio::task::spawn_blocking(move || renderer.render_blocking(&request))
                .await
                .unwrap_or_else(|e| Err(RenderError::Engine(e.to_string())))
        })
    }
}
