// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch state for the client's event queue.
//!
//! [`ClientState`] owns the [`Coordinator`] and implements `Dispatch` for every
//! object the client creates. Each handler translates the wire event into a
//! core event and hands it over; no protocol logic lives here.
//!
//! | Object | User data | Handling |
//! |---|---|---|
//! | `wl_registry` | `()` | Forwarded as `RegistryEvent`. |
//! | `wl_output` | `()` | Ignored (mode, geometry, scale). |
//! | `river_layout_manager_v3` | `()` | Has no events. |
//! | `river_layout_v3` | `OutputId` | Forwarded as `LayoutEvent` for that output. |

use riverlay_core::event::{LayoutDemand, LayoutEvent, RegistryEvent};
use riverlay_core::output::OutputId;
use riverlay_core::registry::Coordinator;
use wayland_client::protocol::wl_output::WlOutput;
use wayland_client::protocol::wl_registry::{self, WlRegistry};
use wayland_client::{Connection, Dispatch, QueueHandle, delegate_noop};

use crate::protocol::river_layout_manager_v3::RiverLayoutManagerV3;
use crate::protocol::river_layout_v3::{self, RiverLayoutV3};
use crate::transport::{RegistryBinder, Wayland};

/// State driven by the client's event queue.
#[derive(Debug)]
pub struct ClientState {
    pub(crate) coordinator: Coordinator<Wayland>,
}

impl ClientState {
    /// Wraps a coordinator.
    #[must_use]
    pub fn new(coordinator: Coordinator<Wayland>) -> Self {
        Self { coordinator }
    }

    /// The coordinator.
    #[must_use]
    pub fn coordinator(&self) -> &Coordinator<Wayland> {
        &self.coordinator
    }
}

impl Dispatch<WlRegistry, ()> for ClientState {
    fn event(
        state: &mut Self,
        registry: &WlRegistry,
        event: wl_registry::Event,
        _: &(),
        _: &Connection,
        qh: &QueueHandle<Self>,
    ) {
        let mut binder = RegistryBinder::new(registry, qh);
        let event = match &event {
            wl_registry::Event::Global {
                name,
                interface,
                version,
            } => RegistryEvent::Global {
                name: *name,
                interface,
                version: *version,
            },
            wl_registry::Event::GlobalRemove { name } => RegistryEvent::GlobalRemove { name: *name },
            _ => return,
        };
        state.coordinator.handle_registry_event(&mut binder, event);
    }
}

impl Dispatch<RiverLayoutV3, OutputId> for ClientState {
    fn event(
        state: &mut Self,
        _: &RiverLayoutV3,
        event: river_layout_v3::Event,
        output: &OutputId,
        _: &Connection,
        _: &QueueHandle<Self>,
    ) {
        state
            .coordinator
            .handle_layout_event(*output, layout_event(event));
    }
}

delegate_noop!(ClientState: ignore WlOutput);
delegate_noop!(ClientState: RiverLayoutManagerV3);

fn layout_event(event: river_layout_v3::Event) -> LayoutEvent {
    match event {
        river_layout_v3::Event::NamespaceInUse => LayoutEvent::NamespaceInUse,
        river_layout_v3::Event::LayoutDemand {
            view_count,
            usable_width,
            usable_height,
            tags,
            serial,
        } => LayoutEvent::LayoutDemand(LayoutDemand {
            view_count,
            usable_width,
            usable_height,
            tags,
            serial,
        }),
        river_layout_v3::Event::UserCommand { command } => LayoutEvent::UserCommand(command),
        river_layout_v3::Event::UserCommandTags { tags } => LayoutEvent::UserCommandTags(tags),
    }
}
