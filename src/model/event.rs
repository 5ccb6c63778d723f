//! Map events and the `"x,y"` position keys they are stored under.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::TileId;

/// Integer tile coordinate. Doubles as the event map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// String form used as the key in project files.
    pub fn key(&self) -> String {
        format!("{},{}", self.x, self.y)
    }

    /// True when the position is a cell of a `width`×`height` grid.
    pub fn within(&self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }
}

// row-major, so iterating the event map walks the grid top to bottom
impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("position key `{s}` is not of the form x,y"))?;
        let x = x
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("bad x in position key `{s}`: {e}"))?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("bad y in position key `{s}`: {e}"))?;
        Ok(Position { x, y })
    }
}

/// Sprite shown for an event page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Graphic {
    #[serde(rename = "tileId", alias = "tile_id", default)]
    pub tile_id: TileId,
}

/// One page of an event: its appearance plus the command list the runtime
/// interprets. Commands are kept opaque.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EventPage {
    #[serde(default)]
    pub graphic: Graphic,
    #[serde(default)]
    pub list: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub pages: Vec<EventPage>,
}

impl Event {
    /// A freshly placed event: one blank page showing tile 0.
    pub fn new(id: u32, x: i32, y: i32) -> Self {
        Self {
            id,
            name: format!("Event {id}"),
            x,
            y,
            pages: vec![EventPage::default()],
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}
