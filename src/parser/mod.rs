use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use serde::Deserialize;

use crate::model::{Event, EventPage, Position, ScrollType, TileId};

/// A project as handed to [`crate::store::EditorStore::load_project`].
///
/// Every field is optional; the store substitutes its own defaults for
/// whatever is missing. Building `ProjectData::default()` is the same as
/// loading `{}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectData {
    pub display_name: Option<String>,
    pub tileset_id: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub scroll_type: Option<ScrollType>,
    pub specify_battleback: Option<bool>,
    pub data: Option<Vec<TileId>>,
    pub events: Option<BTreeMap<Position, Event>>,
}

/// ─────────────────────────────────────────────────────
/// On-disk shape (raw, 1-to-1 with JSON)
/// ─────────────────────────────────────────────────────
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    display_name: Option<String>,
    tileset_id: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    scroll_type: Option<ScrollType>,
    specify_battleback: Option<bool>,
    data: Option<Vec<TileId>>,
    events: Option<BTreeMap<String, RawEvent>>,
}

/// An event record as stored under its `"x,y"` key. Project files written
/// by hand often leave out the coordinates, since the key already has them.
#[derive(Debug, Deserialize)]
struct RawEvent {
    id: Option<u32>,
    name: Option<String>,
    x: Option<i32>,
    y: Option<i32>,
    #[serde(default)]
    pages: Vec<EventPage>,
}

/// Parse a project JSON document.
///
/// Structural problems (not JSON, not an object, wrong value types, a key
/// that is not `x,y`) are errors. Absent fields are not.
pub fn load_from_json(json: &str) -> Result<ProjectData> {
    let raw: RawProject = serde_json::from_str(json).context("Parsing project JSON")?;

    let events = match raw.events {
        Some(events) => Some(convert_events(events)?),
        None => None,
    };

    debug!(
        "parsed project `{}` ({} events)",
        raw.display_name.as_deref().unwrap_or("<unnamed>"),
        events.as_ref().map_or(0, |e| e.len())
    );

    Ok(ProjectData {
        display_name: raw.display_name,
        tileset_id: raw.tileset_id,
        width: raw.width,
        height: raw.height,
        scroll_type: raw.scroll_type,
        specify_battleback: raw.specify_battleback,
        data: raw.data,
        events,
    })
}

/// Read and parse a project file.
pub fn load_from_path(path: &Path) -> Result<ProjectData> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    info!("File loaded, size: {} bytes", json.len());
    load_from_json(&json).with_context(|| format!("Parsing {}", path.display()))
}

// ─────────────────────────────────────────────────────
/// Helper: key every event by its parsed position, filling in what the
/// record leaves out.
fn convert_events(raw: BTreeMap<String, RawEvent>) -> Result<BTreeMap<Position, Event>> {
    let mut keyed = Vec::with_capacity(raw.len());
    for (key, event) in raw {
        let pos = key
            .parse::<Position>()
            .map_err(|e| anyhow!("event key rejected: {e}"))?;
        keyed.push((pos, key, event));
    }
    // ids are handed out in map order so missing ones come out deterministic;
    // the raw key breaks ties between spellings of the same cell
    keyed.sort_by(|(a, ka, _), (b, kb, _)| a.cmp(b).then_with(|| ka.cmp(kb)));

    let mut events = BTreeMap::new();
    for (ordinal, (pos, key, raw)) in keyed.into_iter().enumerate() {
        if events.contains_key(&pos) {
            warn!("event key `{key}` repeats position {pos}, the later record wins");
        }
        let id = raw.id.unwrap_or(ordinal as u32 + 1);
        let event = Event {
            id,
            name: raw.name.unwrap_or_else(|| format!("Event {id}")),
            x: raw.x.unwrap_or(pos.x),
            y: raw.y.unwrap_or(pos.y),
            pages: raw.pages,
        };
        events.insert(pos, event);
    }
    Ok(events)
}
