// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use riverlay_core::trace::{
    CommitEvent, LayoutConfiguredEvent, LayoutDemandEvent, ManagerBoundEvent,
    NamespaceInUseEvent, OutputAddedEvent, OutputRemovedEvent, TraceSink, UserCommandEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_manager_bound(&mut self, e: &ManagerBoundEvent) {
        let _ = writeln!(
            self.writer,
            "[manager] bound name={} v{}",
            e.name, e.version,
        );
    }

    fn on_output_added(&mut self, e: &OutputAddedEvent) {
        let _ = writeln!(
            self.writer,
            "[output:add] output={} v{}",
            e.output, e.version,
        );
    }

    fn on_output_removed(&mut self, e: &OutputRemovedEvent) {
        let _ = writeln!(self.writer, "[output:remove] output={}", e.output);
    }

    fn on_layout_configured(&mut self, e: &LayoutConfiguredEvent) {
        let _ = writeln!(self.writer, "[layout] output={} negotiating", e.output);
    }

    fn on_layout_demand(&mut self, e: &LayoutDemandEvent) {
        let _ = writeln!(
            self.writer,
            "[demand] output={} serial={} views={} area={}x{} tags={:#x}",
            e.output, e.serial, e.view_count, e.usable_width, e.usable_height, e.tags,
        );
    }

    fn on_commit(&mut self, e: &CommitEvent) {
        let _ = writeln!(
            self.writer,
            "[commit] output={} serial={} pushed={} layout={}",
            e.output, e.serial, e.pushed, e.kind,
        );
    }

    fn on_namespace_in_use(&mut self, e: &NamespaceInUseEvent) {
        let _ = writeln!(self.writer, "[namespace] output={} IN USE", e.output);
    }

    fn on_user_command(&mut self, e: &UserCommandEvent<'_>) {
        let status = if e.accepted { "ok" } else { "REJECTED" };
        let _ = match e.tags {
            Some(tags) => writeln!(
                self.writer,
                "[command] output={} tags={tags:#x} {:?} {status}",
                e.output, e.command,
            ),
            None => writeln!(
                self.writer,
                "[command] output={} {:?} {status}",
                e.output, e.command,
            ),
        };
    }
}
