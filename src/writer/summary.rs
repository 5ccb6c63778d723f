//! Plain-text summary of an editor state: map properties, the tile grid and
//! the placed events.

use std::io::{self, Write};

use crate::model::Position;
use crate::store::EditorState;

/// What to include besides the header.
#[derive(Debug, Clone, Copy)]
pub struct SummaryOptions {
    pub show_grid: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self { show_grid: true }
    }
}

pub fn emit(state: &EditorState, out: &mut impl Write, opts: SummaryOptions) -> io::Result<()> {
    header(state, out)?;
    if opts.show_grid {
        grid(state, out)?;
    }
    events(state, out)?;
    Ok(())
}

fn header(state: &EditorState, out: &mut impl Write) -> io::Result<()> {
    let canvas = state.canvas_size();
    writeln!(out, "map:        {}", state.display_name)?;
    writeln!(out, "tileset:    {}", state.tileset_id)?;
    writeln!(out, "size:       {}x{}", state.map_width, state.map_height)?;
    writeln!(out, "scroll:     {}", u8::from(state.scroll_type))?;
    writeln!(out, "battleback: {}", state.specify_battleback)?;
    writeln!(out, "canvas:     {}x{} px", canvas.width, canvas.height)?;
    writeln!(out, "mode:       {}", state.editor_mode())?;
    Ok(())
}

fn grid(state: &EditorState, out: &mut impl Write) -> io::Result<()> {
    // right-align every cell to the widest id on the map
    let cell = state
        .map_data
        .iter()
        .map(|t| t.to_string().len())
        .max()
        .unwrap_or(1);

    writeln!(out)?;
    for y in 0..state.map_height as i32 {
        let row = (0..state.map_width as i32)
            .map(|x| {
                let tile = match state.tile_at(x, y) {
                    Some(t) => t.to_string(),
                    None => "?".to_string(),
                };
                let marker = if state.events.contains_key(&Position::new(x, y)) {
                    "*"
                } else {
                    " "
                };
                format!("{tile:>cell$}{marker}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", row.trim_end())?;
    }
    Ok(())
}

fn events(state: &EditorState, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "events: {}", state.events.len())?;
    for (pos, event) in &state.events {
        let graphic = event
            .pages
            .first()
            .map(|p| p.graphic.tile_id.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "  [{pos}] #{} {} (pages: {}, graphic: {graphic})",
            event.id,
            event.name,
            event.pages.len()
        )?;
    }
    Ok(())
}
