// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Protocol events as tagged variants.
//!
//! Transports translate their wire events into these types and hand them to
//! the [`Coordinator`](crate::registry::Coordinator). Only the events the
//! layout client reacts to are modelled.

use alloc::string::String;

/// Interface name of the layout-manager global.
pub const LAYOUT_MANAGER_INTERFACE: &str = "river_layout_manager_v3";

/// Interface name of output globals.
pub const OUTPUT_INTERFACE: &str = "wl_output";

/// Highest `river_layout_manager_v3` version the client speaks.
///
/// Version 2 adds `user_command_tags`.
pub const LAYOUT_MANAGER_VERSION: u32 = 2;

/// Highest `wl_output` version the client binds.
pub const OUTPUT_VERSION: u32 = 4;

/// A global interface the client cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interface {
    /// `river_layout_manager_v3`
    LayoutManager,
    /// `wl_output`
    Output,
}

impl Interface {
    /// Classifies an advertised interface name.
    ///
    /// Returns `None` for interfaces the client ignores.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            LAYOUT_MANAGER_INTERFACE => Some(Self::LayoutManager),
            OUTPUT_INTERFACE => Some(Self::Output),
            _ => None,
        }
    }

    /// Version to bind given the version the server advertises.
    #[must_use]
    pub fn bind_version(self, advertised: u32) -> u32 {
        let supported = match self {
            Self::LayoutManager => LAYOUT_MANAGER_VERSION,
            Self::Output => OUTPUT_VERSION,
        };
        advertised.min(supported)
    }
}

/// An event from the `wl_registry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryEvent<'a> {
    /// A global was advertised.
    Global {
        /// Server-assigned numeric name.
        name: u32,
        /// Interface name.
        interface: &'a str,
        /// Highest version the server supports.
        version: u32,
    },
    /// A global was withdrawn.
    GlobalRemove {
        /// Server-assigned numeric name.
        name: u32,
    },
}

/// Parameters of one layout demand.
///
/// Every rectangle pushed in response, and the commit that ends the response,
/// must carry `serial`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutDemand {
    /// Number of views to place.
    pub view_count: u32,
    /// Usable width of the output.
    pub usable_width: u32,
    /// Usable height of the output.
    pub usable_height: u32,
    /// Focused tags. Passed through, unused by the partitioners.
    pub tags: u32,
    /// Correlation token for this demand.
    pub serial: u32,
}

/// An event on a layout object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutEvent {
    /// Another client already holds the namespace on this output.
    NamespaceInUse,
    /// The compositor wants the views arranged.
    LayoutDemand(LayoutDemand),
    /// A `riverctl send-layout-cmd` string.
    UserCommand(String),
    /// Tags that were focused when the next user command was sent.
    UserCommandTags(u32),
}
