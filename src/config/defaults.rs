// SPDX-License-Identifier: MPL-2.0
//! Default values shared between the config layer and the document pipeline.

/// Page height of the generated document, in points.
pub const DEFAULT_PAGE_HEIGHT: u32 = 800;

/// Page width of the generated document, in points.
pub const DEFAULT_PAGE_WIDTH: u32 = 1056;

/// Uniform page padding, in points.
pub const DEFAULT_PAGE_PADDING: u32 = 24;

/// Base name (without extension) of the generated PDF.
pub const DOCUMENT_FILE_NAME: &str = "Survey";

/// Directory, below the documents root, the renderer writes into.
pub const DOCUMENT_DIRECTORY: &str = "docs";

/// Title attached to the share request for a generated document.
pub const SHARE_TITLE: &str = "Survey PDF";

/// Caption shown on the image picker dialog.
pub const PICKER_TITLE: &str = "Select Image";
