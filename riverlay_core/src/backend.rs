// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transport contract for layout clients.
//!
//! Riverlay splits transport-specific work into *backend* crates. A backend
//! provides the following pieces:
//!
//! - **Object types**: A [`Protocol`] impl naming the concrete output,
//!   layout-manager and layout object types. Each implements
//!   [`ProtocolObject`] so ownership can be released; the layout object also
//!   implements [`LayoutObject`] to send responses.
//!
//! - **Binder**: A [`Binder`] that creates objects. Binders are short-lived:
//!   the backend builds one around its registry and queue handle for the
//!   duration of a single event and passes it to the
//!   [`Coordinator`](crate::registry::Coordinator).
//!
//! - **Event translation**: The backend turns wire events into
//!   [`RegistryEvent`](crate::event::RegistryEvent) and
//!   [`LayoutEvent`](crate::event::LayoutEvent) values. This is not abstracted
//!   by a trait because dispatch plumbing differs fundamentally across
//!   transports.
//!
//! # Crate boundaries
//!
//! `riverlay_core` owns the data model, partitioning, per-output sessions and
//! this contract module. Backend crates depend on `riverlay_core` and own the
//! connection and the event loop.
//!
//! # Ownership
//!
//! Every bound object is wrapped in [`Owned`] as soon as it is created.
//! Dropping the guard releases the server-side object, so removing a record
//! from the coordinator is all it takes to tear its objects down.

use core::fmt;
use core::ops::Deref;

use crate::output::OutputId;
use crate::rect::Rect;

/// A protocol object whose server-side resource can be released.
pub trait ProtocolObject {
    /// Releases the object. Called exactly once, by [`Owned`]'s `Drop`.
    fn destroy(&self);
}

/// A negotiated layout object for one output.
pub trait LayoutObject: ProtocolObject {
    /// Sends one view's placement for the demand identified by `serial`.
    fn push_view_dimensions(&self, rect: Rect, serial: u32);

    /// Ends the response to `serial`, with a user-facing layout name.
    fn commit(&self, layout_name: &str, serial: u32);
}

/// Associates the concrete object types of a transport.
pub trait Protocol {
    /// A bound `wl_output`.
    type Output: ProtocolObject;
    /// A bound `river_layout_manager_v3`.
    type Manager: ProtocolObject;
    /// A `river_layout_v3` created by the manager.
    type Layout: LayoutObject;
}

/// Creates protocol objects on behalf of the coordinator.
pub trait Binder<P: Protocol> {
    /// Binds the output global `name` at `version`.
    fn bind_output(&mut self, name: u32, version: u32) -> P::Output;

    /// Binds the layout-manager global `name` at `version`.
    fn bind_manager(&mut self, name: u32, version: u32) -> P::Manager;

    /// Requests a layout object for `output` under `namespace`.
    ///
    /// Events on the returned object must be routed back to the coordinator
    /// tagged with `output_id`.
    fn get_layout(
        &mut self,
        manager: &P::Manager,
        output: &P::Output,
        output_id: OutputId,
        namespace: &str,
    ) -> P::Layout;
}

/// Exclusive ownership of a protocol object.
///
/// The object is released when the guard is dropped.
pub struct Owned<T: ProtocolObject> {
    object: T,
}

impl<T: ProtocolObject> Owned<T> {
    /// Takes ownership of `object`.
    #[must_use]
    pub fn new(object: T) -> Self {
        Self { object }
    }
}

impl<T: ProtocolObject> Deref for Owned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.object
    }
}

impl<T: ProtocolObject> Drop for Owned<T> {
    fn drop(&mut self) {
        self.object.destroy();
    }
}

impl<T: ProtocolObject + fmt::Debug> fmt::Debug for Owned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Owned").field(&self.object).finish()
    }
}
