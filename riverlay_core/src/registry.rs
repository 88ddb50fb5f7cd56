// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry coordination.
//!
//! The [`Coordinator`] is the single owner of all client state: the bound
//! layout manager, every tracked [`OutputRecord`], and the running flag that
//! the event loop polls. Transports feed it registry and layout events from
//! inside their dispatch callbacks; it is never touched concurrently.
//!
//! Order independence: outputs announced before the layout manager are
//! configured as soon as the manager is bound, and outputs announced after it
//! are configured immediately.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;

use tracing::{debug, error, info, warn};

use crate::backend::{Binder, Owned, Protocol};
use crate::config::LayoutConfig;
use crate::event::{Interface, LayoutEvent, RegistryEvent};
use crate::output::{OutputId, OutputRecord};
use crate::trace::{
    CommitEvent, LayoutConfiguredEvent, LayoutDemandEvent, ManagerBoundEvent,
    NamespaceInUseEvent, OutputAddedEvent, OutputRemovedEvent, TraceSink, Tracer,
    UserCommandEvent,
};

/// Why the coordinator stopped running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShutdownReason {
    /// Another client holds the namespace on one of the outputs.
    NamespaceInUse(OutputId),
}

/// Process-wide layout client state.
pub struct Coordinator<P: Protocol> {
    namespace: String,
    defaults: LayoutConfig,
    manager: Option<Owned<P::Manager>>,
    outputs: BTreeMap<OutputId, OutputRecord<P>>,
    shutdown: Option<ShutdownReason>,
    sink: Option<Box<dyn TraceSink>>,
}

impl<P: Protocol> fmt::Debug for Coordinator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinator")
            .field("namespace", &self.namespace)
            .field("defaults", &self.defaults)
            .field("has_manager", &self.manager.is_some())
            .field("outputs", &self.outputs.values())
            .field("shutdown", &self.shutdown)
            .finish_non_exhaustive()
    }
}

fn tracer(sink: &mut Option<Box<dyn TraceSink>>) -> Tracer<'_> {
    match sink {
        Some(sink) => Tracer::new(sink.as_mut()),
        None => Tracer::none(),
    }
}

impl<P: Protocol> Coordinator<P> {
    /// Creates a coordinator that negotiates under `namespace`.
    ///
    /// Each output starts with a copy of `defaults`.
    #[must_use]
    pub fn new(namespace: impl Into<String>, defaults: LayoutConfig) -> Self {
        Self {
            namespace: namespace.into(),
            defaults,
            manager: None,
            outputs: BTreeMap::new(),
            shutdown: None,
            sink: None,
        }
    }

    /// Routes trace events to `sink`.
    #[must_use]
    pub fn with_trace_sink(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// The namespace used for every layout object.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Whether a layout manager has been bound.
    #[must_use]
    pub fn has_manager(&self) -> bool {
        self.manager.is_some()
    }

    /// `false` once a terminal condition has been reported.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shutdown.is_none()
    }

    /// The terminal condition, if any.
    #[must_use]
    pub fn shutdown_reason(&self) -> Option<ShutdownReason> {
        self.shutdown
    }

    /// Looks up a tracked output.
    #[must_use]
    pub fn output(&self, id: OutputId) -> Option<&OutputRecord<P>> {
        self.outputs.get(&id)
    }

    /// Iterates over tracked outputs in id order.
    pub fn outputs(&self) -> impl Iterator<Item = &OutputRecord<P>> {
        self.outputs.values()
    }

    /// Handles one `wl_registry` event.
    pub fn handle_registry_event(&mut self, binder: &mut impl Binder<P>, event: RegistryEvent<'_>) {
        match event {
            RegistryEvent::Global {
                name,
                interface,
                version,
            } => match Interface::from_name(interface) {
                Some(Interface::LayoutManager) => self.add_manager(binder, name, version),
                Some(Interface::Output) => self.add_output(binder, name, version),
                None => {}
            },
            RegistryEvent::GlobalRemove { name } => self.remove_output(OutputId(name)),
        }
    }

    fn add_manager(&mut self, binder: &mut impl Binder<P>, name: u32, version: u32) {
        if self.manager.is_some() {
            debug!(name, "ignoring additional layout manager");
            return;
        }

        let version = Interface::LayoutManager.bind_version(version);
        self.manager = Some(Owned::new(binder.bind_manager(name, version)));
        debug!(name, version, "bound layout manager");
        tracer(&mut self.sink).manager_bound(&ManagerBoundEvent { name, version });

        self.configure_all(binder);
    }

    fn add_output(&mut self, binder: &mut impl Binder<P>, name: u32, version: u32) {
        let id = OutputId(name);
        let version = Interface::Output.bind_version(version);
        let output = binder.bind_output(name, version);
        info!(output = name, "tracking output");
        tracer(&mut self.sink).output_added(&OutputAddedEvent {
            output: id,
            version,
        });

        // A reused name replaces (and releases) the stale record.
        self.outputs
            .insert(id, OutputRecord::new(id, output, self.defaults));
        self.configure_output(binder, id);
    }

    fn remove_output(&mut self, id: OutputId) {
        // Not every removed global is an output we track.
        if self.outputs.remove(&id).is_some() {
            info!(output = id.0, "released output");
            tracer(&mut self.sink).output_removed(&OutputRemovedEvent { output: id });
        }
    }

    fn configure_output(&mut self, binder: &mut impl Binder<P>, id: OutputId) {
        let Some(record) = self.outputs.get_mut(&id) else {
            return;
        };
        if record.configure(self.manager.as_deref(), binder, &self.namespace) {
            debug!(output = id.0, namespace = %self.namespace, "requested layout");
            tracer(&mut self.sink).layout_configured(&LayoutConfiguredEvent { output: id });
        }
    }

    /// Requests a layout object for every tracked output that lacks one.
    ///
    /// Covers outputs announced before the layout manager. No-op without a
    /// manager.
    pub fn configure_all(&mut self, binder: &mut impl Binder<P>) {
        let Some(manager) = self.manager.as_deref() else {
            return;
        };
        for (id, record) in &mut self.outputs {
            if record.configure(Some(manager), binder, &self.namespace) {
                debug!(output = id.0, namespace = %self.namespace, "requested layout");
                tracer(&mut self.sink).layout_configured(&LayoutConfiguredEvent { output: *id });
            }
        }
    }

    /// Handles one event on the layout object belonging to `output`.
    ///
    /// Events for outputs that are no longer tracked are dropped.
    pub fn handle_layout_event(&mut self, output: OutputId, event: LayoutEvent) {
        let Some(record) = self.outputs.get_mut(&output) else {
            debug!(output = output.0, "event for untracked output");
            return;
        };

        match event {
            LayoutEvent::LayoutDemand(demand) => {
                let mut trace = tracer(&mut self.sink);
                trace.layout_demand(&LayoutDemandEvent::new(output, &demand));
                debug!(
                    output = output.0,
                    views = demand.view_count,
                    width = demand.usable_width,
                    height = demand.usable_height,
                    serial = demand.serial,
                    "layout demand"
                );
                if let Some(pushed) = record.on_layout_demand(&demand) {
                    trace.commit(&CommitEvent {
                        output,
                        serial: demand.serial,
                        pushed,
                        kind: record.config().kind,
                    });
                }
            }
            LayoutEvent::NamespaceInUse => {
                error!(
                    output = output.0,
                    namespace = %self.namespace,
                    "namespace already in use"
                );
                record.on_namespace_in_use();
                tracer(&mut self.sink).namespace_in_use(&NamespaceInUseEvent { output });
                if self.shutdown.is_none() {
                    self.shutdown = Some(ShutdownReason::NamespaceInUse(output));
                }
            }
            LayoutEvent::UserCommand(command) => {
                let result = record.on_user_command(&command);
                if let Err(err) = &result {
                    warn!(output = output.0, %command, "rejected user command: {err}");
                }
                tracer(&mut self.sink).user_command(&UserCommandEvent {
                    output,
                    command: &command,
                    tags: record.command_tags(),
                    accepted: result.is_ok(),
                });
            }
            LayoutEvent::UserCommandTags(tags) => record.on_user_command_tags(tags),
        }
    }

    /// Releases every tracked output, then the layout manager.
    ///
    /// The coordinator can be reused afterwards only by feeding it a fresh
    /// registry burst.
    pub fn shutdown(&mut self) {
        let released = self.outputs.len();
        self.outputs.clear();
        self.manager = None;
        debug!(released, "released all protocol objects");
    }
}
