// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing the application ports.

pub mod picker;
pub mod renderer;
pub mod share;

pub use picker::DialogImageSource;
pub use renderer::HyperRenderer;
pub use share::SystemShare;
