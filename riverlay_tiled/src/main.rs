// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Standalone main/stack layout computation.
//!
//! Prints one `x y width height` line per view, main column first:
//!
//! ```text
//! $ riverlay_tiled 4 1 0.6 1000 900
//! 0 0 600 900
//! 600 0 400 300
//! 600 300 400 300
//! 600 600 400 300
//! ```

use std::io::{BufWriter, Write};

use clap::Parser;
use riverlay_core::partition::main_stack;
use riverlay_core::rect::Rect;

/// Compute main/stack view rectangles for an output.
#[derive(Debug, Parser)]
#[command(name = "riverlay_tiled", version)]
struct Cli {
    /// Number of views to place.
    view_count: u32,
    /// Number of views in the main column.
    main_count: u32,
    /// Share of the width given to the main column (0-1).
    main_factor: f64,
    /// Output width in pixels.
    width: u32,
    /// Output height in pixels.
    height: u32,
}

impl Cli {
    fn rects(&self) -> Vec<Rect> {
        main_stack(
            self.view_count,
            self.main_count,
            self.main_factor,
            self.width,
            self.height,
        )
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut out = BufWriter::new(std::io::stdout().lock());
    for rect in cli.rects() {
        writeln!(out, "{rect}")?;
    }
    out.flush()?;
    Ok(())
}
