// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `wayland-client` implementation of the core transport contract.

use riverlay_core::backend::{Binder, LayoutObject, Protocol, ProtocolObject};
use riverlay_core::output::OutputId;
use riverlay_core::rect::Rect;
use wayland_client::protocol::wl_output::WlOutput;
use wayland_client::protocol::wl_registry::WlRegistry;
use wayland_client::{Proxy, QueueHandle};

use crate::protocol::river_layout_manager_v3::RiverLayoutManagerV3;
use crate::protocol::river_layout_v3::RiverLayoutV3;
use crate::state::ClientState;

/// Marker selecting the Wayland object types.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wayland;

impl Protocol for Wayland {
    type Output = Output;
    type Manager = RiverLayoutManagerV3;
    type Layout = RiverLayoutV3;
}

/// A bound `wl_output`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output(pub WlOutput);

impl ProtocolObject for Output {
    fn destroy(&self) {
        // `wl_output.release` only exists from version 3; older bindings are
        // dropped client-side.
        if self.0.version() >= 3 {
            self.0.release();
        }
    }
}

impl ProtocolObject for RiverLayoutManagerV3 {
    fn destroy(&self) {
        Self::destroy(self);
    }
}

impl ProtocolObject for RiverLayoutV3 {
    fn destroy(&self) {
        Self::destroy(self);
    }
}

impl LayoutObject for RiverLayoutV3 {
    fn push_view_dimensions(&self, rect: Rect, serial: u32) {
        Self::push_view_dimensions(self, rect.x, rect.y, rect.width, rect.height, serial);
    }

    fn commit(&self, layout_name: &str, serial: u32) {
        Self::commit(self, layout_name.to_owned(), serial);
    }
}

/// Binds globals and creates layout objects on the client's queue.
///
/// Built around the registry for the duration of one event.
#[derive(Debug)]
pub(crate) struct RegistryBinder<'a> {
    registry: &'a WlRegistry,
    qh: &'a QueueHandle<ClientState>,
}

impl<'a> RegistryBinder<'a> {
    pub(crate) fn new(registry: &'a WlRegistry, qh: &'a QueueHandle<ClientState>) -> Self {
        Self { registry, qh }
    }
}

impl Binder<Wayland> for RegistryBinder<'_> {
    fn bind_output(&mut self, name: u32, version: u32) -> Output {
        Output(self.registry.bind(name, version, self.qh, ()))
    }

    fn bind_manager(&mut self, name: u32, version: u32) -> RiverLayoutManagerV3 {
        self.registry.bind(name, version, self.qh, ())
    }

    fn get_layout(
        &mut self,
        manager: &RiverLayoutManagerV3,
        output: &Output,
        output_id: OutputId,
        namespace: &str,
    ) -> RiverLayoutV3 {
        manager.get_layout(&output.0, namespace.to_owned(), self.qh, output_id)
    }
}
