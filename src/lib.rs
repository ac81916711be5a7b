// SPDX-License-Identifier: MPL-2.0
//! `snapsheet` is a single-screen survey sheet composer built with the Iced
//! GUI framework.
//!
//! The user titles a sheet, picks a photo, and exports both as a PDF that is
//! handed straight to the platform for sharing. The three external
//! capabilities involved (image picker, HTML-to-PDF renderer, share handoff)
//! are modeled as ports with swappable infrastructure adapters.

pub mod app;
pub mod application;
pub mod config;
pub mod document;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
