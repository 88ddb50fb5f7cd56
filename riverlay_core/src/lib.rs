// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types, partitioners and registry coordination for river layout
//! generators.
//!
//! `riverlay_core` holds everything a `river-layout-v3` client needs that does
//! not depend on the transport. It is `no_std` compatible (with `alloc`); the
//! Wayland connection lives in `riverlay_backend_wayland`, which implements
//! the [`backend`] contract.
//!
//! # Architecture
//!
//! Control flow is entirely event-driven. The transport turns protocol events
//! into tagged values and hands them to the [`Coordinator`](registry::Coordinator):
//!
//! ```text
//!   wl_registry.global / global_remove
//!       │
//!       ▼
//!   RegistryEvent ──► Coordinator ──► OutputRecord::configure() ──► get_layout
//!                                                                       │
//!                 ┌─────────────────────────────────────────────────────┘
//!                 ▼
//!   LayoutEvent::LayoutDemand ──► OutputRecord ──► LayoutConfig::generate()
//!                                      │
//!                                      ▼
//!                    push_view_dimensions × view_count ──► commit
//! ```
//!
//! **[`rect`]**: Integer rectangle in usable-area coordinates.
//!
//! **[`partition`]**: The spiral and main/stack partitioners. Pure functions
//! with no protocol knowledge.
//!
//! **[`config`]**: Per-output layout parameters and the padding-aware
//! [`generate`](config::LayoutConfig::generate) entry point.
//!
//! **[`command`]**: Parser for `user_command` strings that adjust parameters
//! at runtime.
//!
//! **[`event`]**: Registry and layout events as tagged variants.
//!
//! **[`backend`]**: The traits a transport implements, plus the [`Owned`]
//! release guard.
//!
//! **[`output`]**: Per-output record and its layout session state machine.
//!
//! **[`registry`]**: The process-wide coordinator.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! protocol instrumentation.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//!
//! [`Owned`]: backend::Owned

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod command;
pub mod config;
pub mod event;
pub mod output;
pub mod partition;
pub mod rect;
pub mod registry;
pub mod trace;

#[cfg(test)]
mod testing;
