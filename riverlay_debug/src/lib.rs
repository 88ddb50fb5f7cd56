// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and `tracing` sinks for riverlay diagnostics.
//!
//! This crate provides [`TraceSink`](riverlay_core::trace::TraceSink)
//! implementations for development:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`tracing_sink::TracingSink`]: forwards every event to `tracing` at
//!   `TRACE` level under the `riverlay::protocol` target.

pub mod pretty;
pub mod tracing_sink;
