pub mod cli;
pub mod model;
pub mod parser;
pub mod store;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::store::EditorStore;
use crate::writer::summary::{self, SummaryOptions};

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // 1. ── Parse ──────────────────────────────────────────────────────
    let project = parser::load_from_path(&args.input)?;

    // 2. ── Apply edits ────────────────────────────────────────────────
    let store = EditorStore::new();
    store.load_project(project);

    if let Some((width, height)) = args.resize {
        store.resize_map(width, height);
    }
    if let Some(tile) = args.fill {
        store.fill_map(tile);
    }
    for (pos, tile) in &args.placements {
        if !store.place_tile(pos.x, pos.y, *tile) {
            info!("--place {pos} is off the map, skipped");
        }
    }
    for pos in &args.add_events {
        if store.add_event(pos.x, pos.y).is_none() {
            info!("--add-event {pos}: cell already has an event");
        }
    }

    // 3. ── Write summary ──────────────────────────────────────────────
    let opts = SummaryOptions {
        show_grid: !args.no_grid,
    };
    let mut stdout = std::io::stdout().lock();
    summary::emit(&store.state(), &mut stdout, opts).with_context(|| "Writing summary")?;

    Ok(())
}
