use clap::Parser;
use std::path::PathBuf;

use crate::model::{Position, TileId};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input .json map project
    pub input: PathBuf,

    /// Resize the map before printing, e.g. `20x15`
    #[arg(long, value_parser = parse_size)]
    pub resize: Option<(u32, u32)>,

    /// Fill the whole map with one tile id
    #[arg(long)]
    pub fill: Option<TileId>,

    /// Place a tile, `X,Y,ID` (repeatable)
    #[arg(long = "place", value_parser = parse_placement)]
    pub placements: Vec<(Position, TileId)>,

    /// Add an event at `X,Y` (repeatable)
    #[arg(long = "add-event", value_parser = parse_position)]
    pub add_events: Vec<Position>,

    /// Leave the tile grid out of the summary
    #[arg(long)]
    pub no_grid: bool,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("width: {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("height: {e}"))?;
    if w == 0 || h == 0 {
        return Err("map dimensions must be positive".to_string());
    }
    Ok((w, h))
}

fn parse_position(s: &str) -> Result<Position, String> {
    s.parse()
}

fn parse_placement(s: &str) -> Result<(Position, TileId), String> {
    let (pos, tile) = s
        .rsplit_once(',')
        .ok_or_else(|| format!("expected X,Y,ID, got `{s}`"))?;
    let tile = tile
        .trim()
        .parse::<TileId>()
        .map_err(|e| format!("tile id: {e}"))?;
    Ok((pos.parse()?, tile))
}
