// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the layout protocol.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Coordinator`](crate::registry::Coordinator) calls as it services registry
//! and layout events. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::config::LayoutKind;
use crate::event::LayoutDemand;
use crate::output::OutputId;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the layout-manager global is bound.
#[derive(Clone, Copy, Debug)]
pub struct ManagerBoundEvent {
    /// Registry name of the global.
    pub name: u32,
    /// Bound version.
    pub version: u32,
}

/// Emitted when an output global is bound and tracked.
#[derive(Clone, Copy, Debug)]
pub struct OutputAddedEvent {
    /// The new output.
    pub output: OutputId,
    /// Bound version.
    pub version: u32,
}

/// Emitted when a tracked output is withdrawn and released.
#[derive(Clone, Copy, Debug)]
pub struct OutputRemovedEvent {
    /// The removed output.
    pub output: OutputId,
}

/// Emitted when a layout object is requested for an output.
#[derive(Clone, Copy, Debug)]
pub struct LayoutConfiguredEvent {
    /// The output now negotiating.
    pub output: OutputId,
}

/// Emitted when a layout demand arrives.
#[derive(Clone, Copy, Debug)]
pub struct LayoutDemandEvent {
    /// Output the demand is for.
    pub output: OutputId,
    /// Number of views to place.
    pub view_count: u32,
    /// Usable width.
    pub usable_width: u32,
    /// Usable height.
    pub usable_height: u32,
    /// Focused tags.
    pub tags: u32,
    /// Demand serial.
    pub serial: u32,
}

impl LayoutDemandEvent {
    /// Creates a `LayoutDemandEvent` from a demand and the output it targets.
    #[must_use]
    pub fn new(output: OutputId, demand: &LayoutDemand) -> Self {
        Self {
            output,
            view_count: demand.view_count,
            usable_width: demand.usable_width,
            usable_height: demand.usable_height,
            tags: demand.tags,
            serial: demand.serial,
        }
    }
}

/// Emitted after a response has been committed.
#[derive(Clone, Copy, Debug)]
pub struct CommitEvent {
    /// Output the response was for.
    pub output: OutputId,
    /// Demand serial.
    pub serial: u32,
    /// Number of rectangles pushed before the commit.
    pub pushed: u32,
    /// Partitioner that produced them.
    pub kind: LayoutKind,
}

/// Emitted when the compositor reports a namespace conflict.
#[derive(Clone, Copy, Debug)]
pub struct NamespaceInUseEvent {
    /// Output whose layout object was refused.
    pub output: OutputId,
}

/// Emitted for each user command, accepted or not.
#[derive(Clone, Copy, Debug)]
pub struct UserCommandEvent<'a> {
    /// Output whose layout object received the command.
    pub output: OutputId,
    /// The raw command string.
    pub command: &'a str,
    /// Tags announced by the preceding `user_command_tags`, if any.
    pub tags: Option<u32>,
    /// Whether the command parsed and was applied.
    pub accepted: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the coordinator.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the layout manager is bound.
    fn on_manager_bound(&mut self, e: &ManagerBoundEvent) {
        _ = e;
    }

    /// Called when an output starts being tracked.
    fn on_output_added(&mut self, e: &OutputAddedEvent) {
        _ = e;
    }

    /// Called when a tracked output is released.
    fn on_output_removed(&mut self, e: &OutputRemovedEvent) {
        _ = e;
    }

    /// Called when a layout object is requested.
    fn on_layout_configured(&mut self, e: &LayoutConfiguredEvent) {
        _ = e;
    }

    /// Called when a layout demand arrives.
    fn on_layout_demand(&mut self, e: &LayoutDemandEvent) {
        _ = e;
    }

    /// Called after a response is committed.
    fn on_commit(&mut self, e: &CommitEvent) {
        _ = e;
    }

    /// Called when a namespace conflict is reported.
    fn on_namespace_in_use(&mut self, e: &NamespaceInUseEvent) {
        _ = e;
    }

    /// Called for each user command.
    fn on_user_command(&mut self, e: &UserCommandEvent<'_>) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

macro_rules! emit {
    ($self:ident, $method:ident, $e:expr) => {{
        #[cfg(feature = "trace")]
        if let Some(s) = &mut $self.sink {
            s.$method($e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = $e;
        }
    }};
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self::none()
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ManagerBoundEvent`].
    #[inline]
    pub fn manager_bound(&mut self, e: &ManagerBoundEvent) {
        emit!(self, on_manager_bound, e);
    }

    /// Emits an [`OutputAddedEvent`].
    #[inline]
    pub fn output_added(&mut self, e: &OutputAddedEvent) {
        emit!(self, on_output_added, e);
    }

    /// Emits an [`OutputRemovedEvent`].
    #[inline]
    pub fn output_removed(&mut self, e: &OutputRemovedEvent) {
        emit!(self, on_output_removed, e);
    }

    /// Emits a [`LayoutConfiguredEvent`].
    #[inline]
    pub fn layout_configured(&mut self, e: &LayoutConfiguredEvent) {
        emit!(self, on_layout_configured, e);
    }

    /// Emits a [`LayoutDemandEvent`].
    #[inline]
    pub fn layout_demand(&mut self, e: &LayoutDemandEvent) {
        emit!(self, on_layout_demand, e);
    }

    /// Emits a [`CommitEvent`].
    #[inline]
    pub fn commit(&mut self, e: &CommitEvent) {
        emit!(self, on_commit, e);
    }

    /// Emits a [`NamespaceInUseEvent`].
    #[inline]
    pub fn namespace_in_use(&mut self, e: &NamespaceInUseEvent) {
        emit!(self, on_namespace_in_use, e);
    }

    /// Emits a [`UserCommandEvent`].
    #[inline]
    pub fn user_command(&mut self, e: &UserCommandEvent<'_>) {
        emit!(self, on_user_command, e);
    }
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use super::{NamespaceInUseEvent, OutputAddedEvent, TraceSink, Tracer};
    use crate::output::OutputId;

    #[derive(Default)]
    struct Counting {
        added: u32,
        conflicts: u32,
    }

    impl TraceSink for Counting {
        fn on_output_added(&mut self, _: &OutputAddedEvent) {
            self.added += 1;
        }

        fn on_namespace_in_use(&mut self, _: &NamespaceInUseEvent) {
            self.conflicts += 1;
        }
    }

    #[test]
    fn tracer_dispatches_to_sink() {
        let mut sink = Counting::default();
        let mut tracer = Tracer::new(&mut sink);
        tracer.output_added(&OutputAddedEvent {
            output: OutputId(3),
            version: 4,
        });
        tracer.namespace_in_use(&NamespaceInUseEvent {
            output: OutputId(3),
        });
        drop(tracer);

        assert_eq!(sink.added, 1);
        assert_eq!(sink.conflicts, 1);
    }

    #[test]
    fn none_tracer_discards() {
        let mut tracer = Tracer::none();
        tracer.output_added(&OutputAddedEvent {
            output: OutputId(1),
            version: 1,
        });
    }
}
