// SPDX-License-Identifier: MPL-2.0
//! Share sink adapter handing files to the platform handler.

use crate::application::port::share::{ShareError, ShareRequest, ShareSink};
use futures_util::future::BoxFuture;

/// A [`ShareSink`] that opens the file with the platform's default handler,
/// which on the desktop is the closest equivalent of a share sheet.
///
/// The handler has no metadata slot, so `title`, `message`, and `subject`
/// from the request are carried but not interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShare;

impl SystemShare {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ShareSink for SystemShare {
    fn share(&self, request: ShareRequest) -> BoxFuture<'static, Result<(), ShareError>> {
        Box::pin(async move { launch_platform_handler(&request.url) })
    }
}

#[cfg(target_os = "linux")]
fn launch_platform_handler(path: &std::path::Path) -> Result<(), ShareError> {
    use std::process::{Command, Stdio};

    Command::new("xdg-open")
        .arg(path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| ShareError::Launch(e.to_string()))
}

#[cfg(target_os = "macos")]
fn launch_platform_handler(path: &std::path::Path) -> Result<(), ShareError> {
    use std::process::{Command, Stdio};

    Command::new("open")
        .arg(path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| ShareError::Launch(e.to_string()))
}

#[cfg(target_os = "windows")]
fn launch_platform_handler(path: &std::path::Path) -> Result<(), ShareError> {
    use std::process::{Command, Stdio};

    Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| ShareError::Launch(e.to_string()))
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn launch_platform_handler(_path: &std::path::Path) -> Result<(), ShareError> {
    Err(ShareError::Unsupported)
}
