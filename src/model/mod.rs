// numeric constants that describe a fresh editor session
pub const DEFAULT_MAP_WIDTH: u32 = 14;
pub const DEFAULT_MAP_HEIGHT: u32 = 10;
pub const DEFAULT_TILE_SIZE: u32 = 20;
pub const DEFAULT_DISPLAY_NAME: &str = "Quiet Village";
pub const DEFAULT_TILESET_ID: &str = "jrpg";

// fallbacks used when an imported project leaves a field out
pub const PROJECT_DEFAULT_NAME: &str = "Untitled";
pub const PROJECT_DEFAULT_TILESET: &str = "default";
pub const PROJECT_DEFAULT_WIDTH: u32 = 20;
pub const PROJECT_DEFAULT_HEIGHT: u32 = 15;

/// Tile written into cells a resize uncovers.
pub const RESIZE_FILL_TILE: TileId = 0;

pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 4.0;

pub mod event;

pub use event::{Event, EventPage, Graphic, Position};

use serde::Deserialize;

pub type TileId = u32;

/// ─────────────────────────────────────────────────────
/// UI enums
/// ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Map,
    Events,
    Settings,
}

/// Tool picked in the toolbar. The store attaches no transition rules to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Place,
    Fill,
    Rectangle,
    Erase,
    Event,
}

impl Tool {
    pub const ALL: &'static [Tool] = &[
        Tool::Place,
        Tool::Fill,
        Tool::Rectangle,
        Tool::Erase,
        Tool::Event,
    ];

    /// Lower-case identifier, as the toolbar names it.
    pub fn id(self) -> &'static str {
        match self {
            Tool::Place => "place",
            Tool::Fill => "fill",
            Tool::Rectangle => "rectangle",
            Tool::Erase => "erase",
            Tool::Event => "event",
        }
    }
}

/// How the map wraps when the player walks off an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "i64")]
pub enum ScrollType {
    #[default]
    None,
    LoopVertical,
    LoopHorizontal,
    LoopBoth,
}

// anything but 1..=3 means no scrolling, including negatives
impl From<i64> for ScrollType {
    fn from(value: i64) -> Self {
        match value {
            1 => ScrollType::LoopVertical,
            2 => ScrollType::LoopHorizontal,
            3 => ScrollType::LoopBoth,
            _ => ScrollType::None,
        }
    }
}

impl From<ScrollType> for u8 {
    fn from(value: ScrollType) -> Self {
        match value {
            ScrollType::None => 0,
            ScrollType::LoopVertical => 1,
            ScrollType::LoopHorizontal => 2,
            ScrollType::LoopBoth => 3,
        }
    }
}

/// ─────────────────────────────────────────────────────
/// Overlay state
/// ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSettings {
    pub show_grid: bool,
    pub show_coordinates: bool,
    pub show_events: bool,
}

impl Default for GuideSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_coordinates: false,
            show_events: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tooltip {
    pub visible: bool,
    pub content: String,
    pub x: f32,
    pub y: f32,
}

/// Pixel size of the rendered map canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}
