// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout generator for the river Wayland compositor.
//!
//! Registers a `river_layout_v3` object on every output under one namespace and
//! answers layout demands until the compositor goes away or refuses the
//! namespace. Select it in river with `riverctl default-layout riverlay`.
//!
//! Parameters can be changed at runtime per output:
//!
//! ```text
//! riverctl send-layout-cmd riverlay "main-count +1"
//! riverctl send-layout-cmd riverlay "main-factor -0.05"
//! riverctl send-layout-cmd riverlay "layout spiral"
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG` (default `info`). Per-event
//! protocol records are under the `riverlay::protocol` target at `trace` level.

use anyhow::{Context, bail};
use clap::Parser;
use riverlay_backend_wayland::{LayoutClient, ShutdownReason};
use riverlay_core::config::{LayoutConfig, LayoutKind};
use riverlay_core::registry::Coordinator;
use riverlay_core::trace::TraceSink;
use riverlay_debug::pretty::PrettyPrintSink;
use riverlay_debug::tracing_sink::TracingSink;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Layout generator for river (`river-layout-v3`).
#[derive(Debug, Parser)]
#[command(name = "riverlay", version)]
struct Cli {
    /// Namespace to register under; must be unique among layout clients.
    #[arg(long, default_value = "riverlay")]
    namespace: String,

    /// Initial layout on every output (`tile` or `spiral`).
    #[arg(long, default_value_t = LayoutKind::MainStack)]
    layout: LayoutKind,

    /// Number of views in the main column.
    #[arg(long, default_value_t = 1)]
    main_count: u32,

    /// Share of the width given to the main column, clamped to 0.1..=0.9.
    #[arg(long, default_value_t = 0.6)]
    main_factor: f64,

    /// Gap around each view, in pixels.
    #[arg(long, default_value_t = 0)]
    view_padding: u32,

    /// Gap between the views and the edge of the usable area, in pixels.
    #[arg(long, default_value_t = 0)]
    outer_padding: u32,

    /// Print every protocol event to stderr.
    #[arg(long)]
    trace: bool,
}

impl Cli {
    fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            kind: self.layout,
            main_count: self.main_count,
            main_factor: self.main_factor,
            view_padding: self.view_padding,
            outer_padding: self.outer_padding,
        }
    }

    fn trace_sink(&self) -> Box<dyn TraceSink> {
        if self.trace {
            Box::new(PrettyPrintSink::stderr())
        } else {
            Box::new(TracingSink::new())
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.layout_config();
    info!(
        namespace = %cli.namespace,
        layout = %config.kind,
        main_count = config.main_count,
        main_factor = config.main_factor,
        "starting"
    );

    let coordinator =
        Coordinator::new(cli.namespace.clone(), config).with_trace_sink(cli.trace_sink());
    let mut client = LayoutClient::connect(coordinator).context("cannot start layout client")?;
    match client.run()? {
        ShutdownReason::NamespaceInUse(output) => bail!(
            "namespace {:?} is already in use on output {output}; pick another with --namespace",
            cli.namespace
        ),
    }
}
