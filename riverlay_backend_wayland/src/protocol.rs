// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Client bindings for `river-layout-v3`, generated from
//! `protocols/river-layout-v3.xml`.
#![allow(
    missing_docs,
    unreachable_pub,
    unused_qualifications,
    elided_lifetimes_in_paths,
    missing_debug_implementations,
    unused_imports,
    clippy::single_component_path_imports,
    clippy::doc_markdown,
    clippy::use_self,
    clippy::semicolon_if_nothing_returned,
    reason = "code generated by wayland-scanner"
)]

use wayland_client;
use wayland_client::protocol::*;

pub mod __interfaces {
    use wayland_client::protocol::__interfaces::*;
    wayland_scanner::generate_interfaces!("protocols/river-layout-v3.xml");
}
use self::__interfaces::*;

wayland_scanner::generate_client_code!("protocols/river-layout-v3.xml");
