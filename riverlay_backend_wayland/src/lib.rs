// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayland backend for riverlay.
//!
//! This crate connects [`riverlay_core`] to a running river compositor:
//!
//! - `river-layout-v3` client bindings generated from the bundled XML
//! - [`Wayland`], the `wayland-client` implementation of the core transport
//!   traits
//! - [`LayoutClient`], an owned event queue that drives the
//!   [`Coordinator`](riverlay_core::registry::Coordinator) until shutdown

mod client;
#[cfg(test)]
mod compositor;
mod error;
mod protocol;
mod state;
mod transport;

pub use client::LayoutClient;
pub use error::ClientError;
pub use protocol::{river_layout_manager_v3, river_layout_v3};
pub use riverlay_core::registry::ShutdownReason;
pub use state::ClientState;
pub use transport::{Output, Wayland};
