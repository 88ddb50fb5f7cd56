// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use wayland_client::backend::WaylandError;
use wayland_client::{ConnectError, DispatchError};

/// Errors that end a [`LayoutClient`](crate::LayoutClient) run.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The Wayland socket could not be opened.
    #[error("failed to connect to the Wayland compositor: {0}")]
    Connect(#[from] ConnectError),
    /// Dispatching events failed, usually because the compositor went away.
    #[error("failed to dispatch Wayland events: {0}")]
    Dispatch(#[from] DispatchError),
    /// Flushing requests failed.
    #[error("Wayland connection error: {0}")]
    Backend(#[from] WaylandError),
    /// The compositor does not advertise `river_layout_manager_v3`.
    #[error("compositor does not advertise river_layout_manager_v3; is this river?")]
    MissingLayoutManager,
}
