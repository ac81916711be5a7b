// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications carry an i18n message key plus a severity; the manager
//! bounds how many are visible and auto-dismisses the transient ones.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
