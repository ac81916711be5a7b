// SPDX-License-Identifier: MPL-2.0
//! Port definitions for the three external capabilities.

pub mod image_source;
pub mod renderer;
pub mod share;

pub use image_source::{ImageSource, PickOutcome, PickRequest};
pub use renderer::{DocumentRenderer, RenderError, RenderRequest};
pub use share::{ShareError, ShareRequest, ShareSink};
