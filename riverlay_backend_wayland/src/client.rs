// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owned event loop.
//!
//! [`LayoutClient`] owns the connection, a single `EventQueue<ClientState>` and
//! the registry. Every object the client creates is bound on that queue, so
//! all events funnel through [`ClientState`]'s `Dispatch` impls.
//!
//! ```text
//! connect ──► get_registry
//!   run:
//!     blocking_dispatch            (receive the initial globals)
//!     roundtrip                    (make sure none are still in flight)
//!     manager bound? ── no ──► MissingLayoutManager
//!     configure_all                (get_layout for outputs seen earlier)
//!     loop blocking_dispatch until the coordinator shuts down
//!   always:
//!     coordinator.shutdown()       (layouts, outputs, manager released)
//!     flush
//! ```

use riverlay_core::registry::{Coordinator, ShutdownReason};
use tracing::{debug, error, info};
use wayland_client::backend::WaylandError;
use wayland_client::protocol::wl_registry::WlRegistry;
use wayland_client::{Connection, DispatchError, EventQueue, QueueHandle};

use crate::error::ClientError;
use crate::state::ClientState;
use crate::transport::{RegistryBinder, Wayland};

/// A connected layout generator.
#[derive(Debug)]
pub struct LayoutClient {
    connection: Connection,
    event_queue: EventQueue<ClientState>,
    state: ClientState,
    registry: WlRegistry,
}

impl LayoutClient {
    /// Connects using `WAYLAND_DISPLAY` / `WAYLAND_SOCKET`.
    pub fn connect(coordinator: Coordinator<Wayland>) -> Result<Self, ClientError> {
        let connection = Connection::connect_to_env()?;
        Ok(Self::new(connection, coordinator))
    }

    /// Wraps an existing connection and requests the registry.
    #[must_use]
    pub fn new(connection: Connection, coordinator: Coordinator<Wayland>) -> Self {
        let event_queue = connection.new_event_queue();
        let registry = connection.display().get_registry(&event_queue.handle(), ());
        Self {
            connection,
            event_queue,
            state: ClientState::new(coordinator),
            registry,
        }
    }

    /// Returns the handle every client object is created with.
    #[must_use]
    pub fn queue_handle(&self) -> QueueHandle<ClientState> {
        self.event_queue.handle()
    }

    /// Returns the coordinator.
    #[must_use]
    pub fn coordinator(&self) -> &Coordinator<Wayland> {
        self.state.coordinator()
    }

    /// Flushes requests, blocks for new events when needed, and dispatches.
    pub fn blocking_dispatch(&mut self) -> Result<usize, DispatchError> {
        self.event_queue.blocking_dispatch(&mut self.state)
    }

    /// Blocks until the compositor has processed every request sent so far.
    pub fn roundtrip(&mut self) -> Result<usize, DispatchError> {
        self.event_queue.roundtrip(&mut self.state)
    }

    /// Flushes pending outgoing requests to the Wayland socket.
    pub fn flush(&self) -> Result<(), WaylandError> {
        self.connection.flush()
    }

    /// Serves layout demands until shutdown or a connection failure.
    ///
    /// All protocol objects are released before this returns, whatever the
    /// outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingLayoutManager`] when the compositor does
    /// not advertise the layout manager, and a dispatch or backend error when
    /// the connection fails.
    pub fn run(&mut self) -> Result<ShutdownReason, ClientError> {
        let result = self.serve();
        self.state.coordinator.shutdown();
        if let Err(err) = self.flush() {
            // The socket may already be gone.
            debug!(%err, "flush after shutdown failed");
        }
        result
    }

    fn serve(&mut self) -> Result<ShutdownReason, ClientError> {
        self.blocking_dispatch()?;
        self.roundtrip()?;
        if !self.state.coordinator.has_manager() {
            error!("compositor does not advertise river_layout_manager_v3");
            return Err(ClientError::MissingLayoutManager);
        }

        let qh = self.event_queue.handle();
        self.state
            .coordinator
            .configure_all(&mut RegistryBinder::new(&self.registry, &qh));
        info!(
            namespace = self.state.coordinator.namespace(),
            outputs = self.state.coordinator.outputs().count(),
            "serving layout demands"
        );

        loop {
            if let Some(reason) = self.state.coordinator.shutdown_reason() {
                return Ok(reason);
            }
            self.blocking_dispatch()?;
        }
    }
}
