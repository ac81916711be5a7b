// SPDX-License-Identifier: MPL-2.0
//! Application layer: port definitions the controller depends on.
//!
//! The controller never talks to a dialog toolkit, a rendering engine, or the
//! platform shell directly; it sequences calls through the traits defined in
//! [`port`]. Infrastructure adapters provide the concrete implementations.

pub mod port;
