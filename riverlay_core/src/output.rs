// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-output records and their layout sessions.
//!
//! An [`OutputRecord`] exists for every `wl_output` the registry advertises.
//! It owns the bound output and, once a layout manager is available, the
//! `river_layout_v3` object negotiated for it. The record is also the event
//! handler for that layout object: it answers layout demands and reacts to
//! namespace conflicts and user commands.
//!
//! # Session states
//!
//! ```text
//!   Unconfigured ──configure()──► Negotiating ◄──► (responding to a demand)
//!                                      │
//!                               namespace_in_use
//!                                      ▼
//!                                   Failed
//! ```
//!
//! Dropping the record releases both objects, in any state.

use alloc::format;
use core::fmt;

use crate::backend::{Binder, LayoutObject, Owned, Protocol};
use crate::command::{Command, CommandError};
use crate::config::LayoutConfig;
use crate::event::LayoutDemand;

/// Identifies a display output by its registry name.
///
/// The compositor assigns the value when it advertises the global; removal
/// events carry the same value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OutputId(pub u32);

impl fmt::Debug for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OutputId({})", self.0)
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an output's layout session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No layout object has been requested yet.
    Unconfigured,
    /// A layout object exists and demands are being answered.
    Negotiating,
    /// The namespace was refused. No further demands are serviced.
    Failed,
}

/// Tracked state for one output.
pub struct OutputRecord<P: Protocol> {
    // Declared before `output` so the layout object is released first.
    layout: Option<Owned<P::Layout>>,
    output: Owned<P::Output>,
    id: OutputId,
    state: SessionState,
    config: LayoutConfig,
    command_tags: Option<u32>,
}

impl<P: Protocol> fmt::Debug for OutputRecord<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputRecord")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("config", &self.config)
            .field("has_layout", &self.layout.is_some())
            .finish_non_exhaustive()
    }
}

impl<P: Protocol> OutputRecord<P> {
    /// Takes ownership of a freshly bound output.
    #[must_use]
    pub fn new(id: OutputId, output: P::Output, config: LayoutConfig) -> Self {
        Self {
            layout: None,
            output: Owned::new(output),
            id,
            state: SessionState::Unconfigured,
            config,
            command_tags: None,
        }
    }

    /// Registry name of the output.
    #[must_use]
    pub fn id(&self) -> OutputId {
        self.id
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Layout parameters in effect for this output.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The bound output.
    #[must_use]
    pub fn output(&self) -> &P::Output {
        &self.output
    }

    /// The negotiated layout object, if one has been requested.
    #[must_use]
    pub fn layout(&self) -> Option<&P::Layout> {
        self.layout.as_deref()
    }

    /// Requests a layout object under `namespace`.
    ///
    /// No-op unless a manager is available and the session is still
    /// [`Unconfigured`](SessionState::Unconfigured). Returns whether a layout
    /// object was requested.
    pub fn configure(
        &mut self,
        manager: Option<&P::Manager>,
        binder: &mut impl Binder<P>,
        namespace: &str,
    ) -> bool {
        let Some(manager) = manager else {
            return false;
        };
        if self.state != SessionState::Unconfigured {
            return false;
        }

        let layout = binder.get_layout(manager, &self.output, self.id, namespace);
        self.layout = Some(Owned::new(layout));
        self.state = SessionState::Negotiating;
        true
    }

    /// Answers a layout demand.
    ///
    /// Pushes exactly `demand.view_count` rectangles tagged with the demand's
    /// serial, in partitioner order, then commits. Returns the number of
    /// rectangles pushed, or `None` if the session is not negotiating.
    pub fn on_layout_demand(&mut self, demand: &LayoutDemand) -> Option<u32> {
        if self.state != SessionState::Negotiating {
            return None;
        }
        let layout = self.layout.as_deref()?;

        let rects = self
            .config
            .generate(demand.view_count, demand.usable_width, demand.usable_height);
        debug_assert_eq!(
            rects.len(),
            demand.view_count as usize,
            "partitioner must place every view"
        );

        for rect in &rects {
            layout.push_view_dimensions(*rect, demand.serial);
        }
        let name = format!("{} [{}]", self.config.kind, demand.view_count);
        layout.commit(&name, demand.serial);

        Some(demand.view_count)
    }

    /// Marks the session failed after a namespace conflict.
    ///
    /// The layout object is kept until the record is dropped.
    pub fn on_namespace_in_use(&mut self) {
        self.state = SessionState::Failed;
    }

    /// Remembers the tags announced for the next user command.
    pub fn on_user_command_tags(&mut self, tags: u32) {
        self.command_tags = Some(tags);
    }

    /// Parses and applies a user command to this output's parameters.
    ///
    /// On error the parameters are unchanged.
    pub fn on_user_command(&mut self, command: &str) -> Result<(), CommandError> {
        let command: Command = command.parse()?;
        command.apply(&mut self.config);
        Ok(())
    }

    /// Tags announced by the most recent `user_command_tags`, if any.
    #[must_use]
    pub fn command_tags(&self) -> Option<u32> {
        self.command_tags
    }
}
