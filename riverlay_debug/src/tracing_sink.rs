// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forwarding trace events to `tracing`.

use riverlay_core::trace::{
    CommitEvent, LayoutConfiguredEvent, LayoutDemandEvent, ManagerBoundEvent,
    NamespaceInUseEvent, OutputAddedEvent, OutputRemovedEvent, TraceSink, UserCommandEvent,
};
use tracing::trace;

/// Emits every event as a `TRACE` record with target `riverlay::protocol`.
///
/// Enable with `RUST_LOG=riverlay::protocol=trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TraceSink for TracingSink {
    fn on_manager_bound(&mut self, e: &ManagerBoundEvent) {
        trace!(target: "riverlay::protocol", name = e.name, version = e.version, "manager bound");
    }

    fn on_output_added(&mut self, e: &OutputAddedEvent) {
        trace!(target: "riverlay::protocol", output = e.output.0, version = e.version, "output added");
    }

    fn on_output_removed(&mut self, e: &OutputRemovedEvent) {
        trace!(target: "riverlay::protocol", output = e.output.0, "output removed");
    }

    fn on_layout_configured(&mut self, e: &LayoutConfiguredEvent) {
        trace!(target: "riverlay::protocol", output = e.output.0, "layout requested");
    }

    fn on_layout_demand(&mut self, e: &LayoutDemandEvent) {
        trace!(
            target: "riverlay::protocol",
            output = e.output.0,
            serial = e.serial,
            view_count = e.view_count,
            usable_width = e.usable_width,
            usable_height = e.usable_height,
            tags = e.tags,
            "layout demand"
        );
    }

    fn on_commit(&mut self, e: &CommitEvent) {
        trace!(
            target: "riverlay::protocol",
            output = e.output.0,
            serial = e.serial,
            pushed = e.pushed,
            layout = %e.kind,
            "commit"
        );
    }

    fn on_namespace_in_use(&mut self, e: &NamespaceInUseEvent) {
        trace!(target: "riverlay::protocol", output = e.output.0, "namespace in use");
    }

    fn on_user_command(&mut self, e: &UserCommandEvent<'_>) {
        trace!(
            target: "riverlay::protocol",
            output = e.output.0,
            command = e.command,
            tags = ?e.tags,
            accepted = e.accepted,
            "user command"
        );
    }
}
