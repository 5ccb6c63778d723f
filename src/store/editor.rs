//! The editor state store: everything the canvas, toolbars and dialogs read,
//! plus the actions they call to change it.
//!
//! All fields live in one [`EditorState`] behind a single [`Store`], so each
//! action is exactly one replacement. Subscribers never see a grid whose
//! length disagrees with the dimensions next to it.

use std::collections::BTreeMap;
use std::rc::Rc;

use log::{debug, info, warn};

use super::observable::{Store, Subscription};
use crate::model::{
    CanvasSize, DEFAULT_DISPLAY_NAME, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_TILE_SIZE,
    DEFAULT_TILESET_ID, Event, GuideSettings, MAX_ZOOM, MIN_ZOOM, PROJECT_DEFAULT_HEIGHT,
    PROJECT_DEFAULT_NAME, PROJECT_DEFAULT_TILESET, PROJECT_DEFAULT_WIDTH, Panel, Position,
    RESIZE_FILL_TILE, ScrollType, TileId, Tool, Tooltip,
};
use crate::parser::ProjectData;

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    // ── toolbar / panels ──
    pub current_panel: Panel,
    pub current_tool: Tool,
    pub selected_tile: TileId,
    pub zoom_level: f32,
    pub tile_size: u32,
    pub is_drawing: bool,
    pub guides: GuideSettings,

    // ── map properties ──
    pub display_name: String,
    pub tileset_id: String,
    pub map_width: u32,
    pub map_height: u32,
    pub scroll_type: ScrollType,
    pub specify_battleback: bool,

    /// Row-major, `map_width * map_height` long.
    pub map_data: Vec<TileId>,
    pub events: BTreeMap<Position, Event>,

    // ── selection / hover ──
    pub selected_event: Option<Event>,
    pub selected_position: Position,
    pub last_selected_position: Position,
    pub hovered_tile: Option<Position>,
    pub last_hovered_tile: Option<Position>,
    pub area_start: Option<Position>,
    pub area_end: Option<Position>,

    // ── dialogs ──
    pub is_event_editor_open: bool,
    pub tooltip: Tooltip,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            current_panel: Panel::Map,
            current_tool: Tool::Place,
            selected_tile: 0,
            zoom_level: 1.0,
            tile_size: DEFAULT_TILE_SIZE,
            is_drawing: false,
            guides: GuideSettings::default(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            tileset_id: DEFAULT_TILESET_ID.to_string(),
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            scroll_type: ScrollType::None,
            specify_battleback: false,
            map_data: vec![0; (DEFAULT_MAP_WIDTH * DEFAULT_MAP_HEIGHT) as usize],
            events: BTreeMap::new(),
            selected_event: None,
            selected_position: Position::new(0, 0),
            last_selected_position: Position::new(-1, -1),
            hovered_tile: None,
            last_hovered_tile: None,
            area_start: None,
            area_end: None,
            is_event_editor_open: false,
            tooltip: Tooltip::default(),
        }
    }
}

impl EditorState {
    /// Grid index of `(x, y)`, or `None` outside the map.
    pub fn tile_index(&self, x: i32, y: i32) -> Option<usize> {
        Position::new(x, y)
            .within(self.map_width, self.map_height)
            .then(|| y as usize * self.map_width as usize + x as usize)
    }

    pub fn tile_at(&self, x: i32, y: i32) -> Option<TileId> {
        self.tile_index(x, y)
            .and_then(|idx| self.map_data.get(idx).copied())
    }

    /// Toolbar label for the current tool, e.g. `"Place"`.
    pub fn editor_mode(&self) -> String {
        let id = self.current_tool.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn canvas_size(&self) -> CanvasSize {
        let scale = self.tile_size as f32 * self.zoom_level;
        CanvasSize {
            width: self.map_width as f32 * scale,
            height: self.map_height as f32 * scale,
        }
    }

    /// Area selection as `(top_left, bottom_right)`, inclusive, whichever
    /// way it was dragged.
    pub fn area_rect(&self) -> Option<(Position, Position)> {
        let (a, b) = (self.area_start?, self.area_end?);
        Some((
            Position::new(a.x.min(b.x), a.y.min(b.y)),
            Position::new(a.x.max(b.x), a.y.max(b.y)),
        ))
    }
}

/// Application-wide editor state, owned by the UI root and lent to views.
#[derive(Default)]
pub struct EditorStore {
    state: Store<EditorState>,
}

impl EditorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the whole state.
    pub fn state(&self) -> Rc<EditorState> {
        self.state.get()
    }

    pub fn subscribe(
        &self,
        subscriber: impl Fn(&Rc<EditorState>) + 'static,
    ) -> Subscription<EditorState> {
        self.state.subscribe(subscriber)
    }

    pub fn tile_at(&self, x: i32, y: i32) -> Option<TileId> {
        self.state.with(|s| s.tile_at(x, y))
    }

    pub fn event_at(&self, x: i32, y: i32) -> Option<Event> {
        self.state
            .with(|s| s.events.get(&Position::new(x, y)).cloned())
    }

    pub fn editor_mode(&self) -> String {
        self.state.with(EditorState::editor_mode)
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.state.with(EditorState::canvas_size)
    }

    // ─────────────────────────────────────────────────────
    // Map actions
    // ─────────────────────────────────────────────────────

    /// Crop or extend the map to `new_width`×`new_height`. Cells the old map
    /// covered keep their tile; new cells get [`RESIZE_FILL_TILE`]. Events
    /// that end up off the map are dropped.
    pub fn resize_map(&self, new_width: u32, new_height: u32) {
        if new_width == 0 || new_height == 0 {
            warn!("ignoring resize to {new_width}x{new_height}: dimensions must be positive");
            return;
        }

        self.state.update(|s| {
            let (old_width, old_height) = (s.map_width as usize, s.map_height as usize);
            let (width, height) = (new_width as usize, new_height as usize);

            let mut data = vec![RESIZE_FILL_TILE; width * height];
            let copy_w = old_width.min(width);
            for y in 0..old_height.min(height) {
                let src = y * old_width;
                let dst = y * width;
                // tolerate imported grids shorter than their dimensions
                let end = (src + copy_w).min(s.map_data.len());
                if src < end {
                    data[dst..dst + (end - src)].copy_from_slice(&s.map_data[src..end]);
                }
            }

            s.map_width = new_width;
            s.map_height = new_height;
            s.map_data = data;

            let before = s.events.len();
            s.events.retain(|pos, _| pos.within(new_width, new_height));
            info!(
                "resized map {old_width}x{old_height} -> {new_width}x{new_height}, dropped {} events",
                before - s.events.len()
            );
        });
    }

    /// Write one tile. Returns `false` (and leaves the grid alone) when
    /// `(x, y)` is off the map.
    pub fn place_tile(&self, x: i32, y: i32, tile_id: TileId) -> bool {
        self.state.update_if(|s| match s.tile_index(x, y) {
            Some(idx) if idx < s.map_data.len() => {
                s.map_data[idx] = tile_id;
                true
            }
            _ => {
                debug!("place_tile({x}, {y}) is off the map, ignored");
                false
            }
        })
    }

    pub fn fill_map(&self, tile_id: TileId) {
        self.state.update(|s| {
            s.map_data = vec![tile_id; s.map_width as usize * s.map_height as usize];
        });
        debug!("filled map with tile {tile_id}");
    }

    /// Fill the dragged rectangle with `tile_id`, clipped to the map.
    /// Returns the number of cells written.
    pub fn fill_area(&self, tile_id: TileId) -> usize {
        let mut written = 0;
        self.state.update_if(|s| {
            let Some((min, max)) = s.area_rect() else {
                return false;
            };
            // clip to the map before walking cells
            let (x0, x1) = (min.x.max(0), max.x.min(s.map_width as i32 - 1));
            let (y0, y1) = (min.y.max(0), max.y.min(s.map_height as i32 - 1));
            for y in y0..=y1 {
                for x in x0..=x1 {
                    if let Some(idx) = s.tile_index(x, y).filter(|&i| i < s.map_data.len()) {
                        s.map_data[idx] = tile_id;
                        written += 1;
                    }
                }
            }
            written > 0
        });
        written
    }

    // ─────────────────────────────────────────────────────
    // Event actions
    // ─────────────────────────────────────────────────────

    /// Place a new event at `(x, y)` and select it. Does nothing if the
    /// cell already holds one.
    ///
    /// The id is `count + 1`, which can repeat an existing id once events
    /// have been removed.
    pub fn add_event(&self, x: i32, y: i32) -> Option<Event> {
        let pos = Position::new(x, y);
        let mut created = None;
        self.state.update_if(|s| {
            if s.events.contains_key(&pos) {
                return false;
            }
            let event = Event::new(s.events.len() as u32 + 1, x, y);
            s.events.insert(pos, event.clone());
            s.selected_event = Some(event.clone());
            s.last_selected_position = s.selected_position;
            s.selected_position = pos;
            created = Some(event);
            true
        });
        if let Some(event) = &created {
            debug!("added event {} at {pos}", event.id);
        }
        created
    }

    /// Store `event` under its own `(x, y)`.
    ///
    /// Whatever sits at that key is replaced. An event whose coordinates were
    /// edited therefore lands under a new key and the old entry stays.
    pub fn update_event(&self, event: Event) {
        self.state.update(|s| {
            if s.selected_event.as_ref().is_some_and(|sel| sel.id == event.id) {
                s.selected_event = Some(event.clone());
            }
            debug!("updated event {} at {}", event.id, event.position());
            s.events.insert(event.position(), event);
        });
    }

    /// Delete the event at `(x, y)`. The selection is cleared either way,
    /// and the event editor closes with it.
    pub fn remove_event(&self, x: i32, y: i32) -> Option<Event> {
        self.state.update(|s| {
            s.selected_event = None;
            s.is_event_editor_open = false;
            s.events.remove(&Position::new(x, y))
        })
    }

    // ─────────────────────────────────────────────────────
    // Project
    // ─────────────────────────────────────────────────────

    /// Replace the map properties, grid and events with `project`,
    /// defaulting whatever it leaves out. Empty strings and zero dimensions
    /// count as missing.
    pub fn load_project(&self, project: ProjectData) {
        let width = project.width.filter(|&w| w > 0).unwrap_or(PROJECT_DEFAULT_WIDTH);
        let height = project.height.filter(|&h| h > 0).unwrap_or(PROJECT_DEFAULT_HEIGHT);
        let cells = width as usize * height as usize;

        let data = project.data.unwrap_or_else(|| vec![0; cells]);
        if data.len() != cells {
            warn!(
                "project grid has {} cells but is {width}x{height} ({cells} cells)",
                data.len()
            );
        }

        let display_name = project
            .display_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| PROJECT_DEFAULT_NAME.to_string());
        let tileset_id = project
            .tileset_id
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| PROJECT_DEFAULT_TILESET.to_string());
        let events = project.events.unwrap_or_default();

        info!(
            "loading project `{display_name}` ({width}x{height}, {} events)",
            events.len()
        );

        self.state.update(|s| {
            s.display_name = display_name;
            s.tileset_id = tileset_id;
            s.map_width = width;
            s.map_height = height;
            s.scroll_type = project.scroll_type.unwrap_or_default();
            s.specify_battleback = project.specify_battleback.unwrap_or(false);
            s.map_data = data;
            s.events = events;
        });
    }

    // ─────────────────────────────────────────────────────
    // UI fields
    // ─────────────────────────────────────────────────────

    pub fn set_panel(&self, panel: Panel) {
        self.state.update_if(|s| replace(&mut s.current_panel, panel));
    }

    pub fn set_tool(&self, tool: Tool) {
        self.state.update_if(|s| replace(&mut s.current_tool, tool));
    }

    pub fn select_tile(&self, tile_id: TileId) {
        self.state.update_if(|s| replace(&mut s.selected_tile, tile_id));
    }

    /// Clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`]; NaN is ignored.
    pub fn set_zoom(&self, zoom: f32) {
        if zoom.is_nan() {
            return;
        }
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.state.update_if(|s| replace(&mut s.zoom_level, zoom));
    }

    pub fn set_tile_size(&self, tile_size: u32) {
        if tile_size == 0 {
            warn!("ignoring zero tile size");
            return;
        }
        self.state.update_if(|s| replace(&mut s.tile_size, tile_size));
    }

    pub fn set_display_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.state.update_if(|s| replace(&mut s.display_name, name));
    }

    pub fn set_tileset(&self, tileset_id: impl Into<String>) {
        let tileset_id = tileset_id.into();
        self.state.update_if(|s| replace(&mut s.tileset_id, tileset_id));
    }

    pub fn set_scroll_type(&self, scroll_type: ScrollType) {
        self.state.update_if(|s| replace(&mut s.scroll_type, scroll_type));
    }

    pub fn set_specify_battleback(&self, enabled: bool) {
        self.state.update_if(|s| replace(&mut s.specify_battleback, enabled));
    }

    pub fn set_drawing(&self, drawing: bool) {
        self.state.update_if(|s| replace(&mut s.is_drawing, drawing));
    }

    pub fn set_guides(&self, guides: GuideSettings) {
        self.state.update_if(|s| replace(&mut s.guides, guides));
    }

    // ─────────────────────────────────────────────────────
    // Selection & hover
    // ─────────────────────────────────────────────────────

    pub fn select_event(&self, event: Option<Event>) {
        self.state.update_if(|s| replace(&mut s.selected_event, event));
    }

    pub fn select_position(&self, x: i32, y: i32) {
        let pos = Position::new(x, y);
        self.state.update_if(|s| {
            if s.selected_position == pos {
                return false;
            }
            s.last_selected_position = s.selected_position;
            s.selected_position = pos;
            true
        });
    }

    pub fn hover_tile(&self, tile: Option<Position>) {
        self.state.update_if(|s| {
            if s.hovered_tile == tile {
                return false;
            }
            if s.hovered_tile.is_some() {
                s.last_hovered_tile = s.hovered_tile;
            }
            s.hovered_tile = tile;
            true
        });
    }

    /// Start an area drag; the area is a single cell until extended.
    pub fn begin_area(&self, x: i32, y: i32) {
        let pos = Position::new(x, y);
        self.state.update(|s| {
            s.area_start = Some(pos);
            s.area_end = Some(pos);
        });
    }

    /// Move the far corner of the area drag. Ignored if no drag started.
    pub fn extend_area(&self, x: i32, y: i32) {
        let pos = Position::new(x, y);
        self.state.update_if(|s| {
            if s.area_start.is_none() || s.area_end == Some(pos) {
                return false;
            }
            s.area_end = Some(pos);
            true
        });
    }

    pub fn clear_area(&self) {
        self.state.update_if(|s| {
            let had_area = s.area_start.is_some() || s.area_end.is_some();
            s.area_start = None;
            s.area_end = None;
            had_area
        });
    }

    // ─────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────

    /// Open the event editor for the selected event. Returns `false` when
    /// nothing is selected.
    pub fn open_event_editor(&self) -> bool {
        self.state.update_if(|s| {
            if s.selected_event.is_none() {
                return false;
            }
            replace(&mut s.is_event_editor_open, true)
        });
        self.state.with(|s| s.is_event_editor_open)
    }

    pub fn close_event_editor(&self) {
        self.state.update_if(|s| replace(&mut s.is_event_editor_open, false));
    }

    pub fn show_tooltip(&self, content: impl Into<String>, x: f32, y: f32) {
        let tooltip = Tooltip {
            visible: true,
            content: content.into(),
            x,
            y,
        };
        self.state.update_if(|s| replace(&mut s.tooltip, tooltip));
    }

    pub fn hide_tooltip(&self) {
        self.state.update_if(|s| replace(&mut s.tooltip.visible, false));
    }
}

// assign, reporting whether the value actually changed
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn grid_of(store: &EditorStore) -> Vec<TileId> {
        store.state().map_data.clone()
    }

    #[test]
    fn test_defaults() {
        let store = EditorStore::new();
        let s = store.state();
        assert_eq!((s.map_width, s.map_height), (14, 10));
        assert_eq!(s.map_data, vec![0; 140]);
        assert_eq!(s.display_name, "Quiet Village");
        assert_eq!(s.tileset_id, "jrpg");
        assert_eq!(s.last_selected_position, Position::new(-1, -1));
        assert!(s.events.is_empty());
        assert_eq!(store.editor_mode(), "Place");
    }

    #[test]
    fn test_resize_grows_with_fill_default() {
        let store = EditorStore::new();
        store.resize_map(20, 15);
        let s = store.state();

        assert_eq!(s.map_data.len(), 300);
        assert_eq!((s.map_width, s.map_height), (20, 15));
        assert!(s.map_data.iter().all(|&t| t == RESIZE_FILL_TILE));
    }

    #[test]
    fn test_resize_preserves_overlap() {
        let store = EditorStore::new();
        for y in 0..10 {
            for x in 0..14 {
                store.place_tile(x, y, (y * 100 + x) as TileId);
            }
        }

        store.resize_map(6, 12);
        let s = store.state();
        assert_eq!(s.map_data.len(), 72);
        for y in 0..12 {
            for x in 0..6 {
                let expected = if y < 10 { (y * 100 + x) as TileId } else { RESIZE_FILL_TILE };
                assert_eq!(s.tile_at(x, y), Some(expected), "cell {x},{y}");
            }
        }
    }

    #[test]
    fn test_resize_drops_out_of_bounds_events() {
        let store = EditorStore::new();
        store.add_event(1, 1);
        store.add_event(5, 2);
        store.add_event(2, 7);

        store.resize_map(4, 4);
        let s = store.state();
        assert_eq!(s.events.len(), 1);
        assert!(s.events.contains_key(&Position::new(1, 1)));
        assert!(s.events.keys().all(|p| p.x < 4 && p.y < 4));
    }

    #[test]
    fn test_resize_to_zero_is_ignored() {
        let store = EditorStore::new();
        store.resize_map(0, 5);
        store.resize_map(5, 0);
        let s = store.state();
        assert_eq!((s.map_width, s.map_height), (14, 10));
        assert_eq!(s.map_data.len(), 140);
    }

    #[test]
    fn test_resize_is_one_notification_and_never_torn() {
        let store = EditorStore::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let _sub = store.subscribe(move |s| {
            assert_eq!(s.map_data.len(), (s.map_width * s.map_height) as usize);
            counter.set(counter.get() + 1);
        });

        store.resize_map(3, 3);
        store.resize_map(30, 2);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_place_tile_uses_current_width() {
        let store = EditorStore::new();
        store.resize_map(5, 5);
        assert!(store.place_tile(2, 3, 9));

        let grid = grid_of(&store);
        assert_eq!(grid[3 * 5 + 2], 9);
        assert_eq!(grid.iter().filter(|&&t| t != 0).count(), 1);
    }

    #[test]
    fn test_place_tile_out_of_range_is_ignored() {
        let store = EditorStore::new();
        let before = grid_of(&store);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let _sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(!store.place_tile(14, 0, 3));
        assert!(!store.place_tile(0, 10, 3));
        assert!(!store.place_tile(-1, 1, 3));
        assert_eq!(grid_of(&store), before);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_fill_map() {
        let store = EditorStore::new();
        store.resize_map(4, 3);
        store.fill_map(7);
        assert_eq!(grid_of(&store), vec![7; 12]);
    }

    #[test]
    fn test_fill_area_clips_to_map() {
        let store = EditorStore::new();
        store.resize_map(4, 4);
        store.begin_area(3, 3);
        store.extend_area(2, 5);

        assert_eq!(store.state().area_rect(), Some((Position::new(2, 3), Position::new(3, 5))));
        assert_eq!(store.fill_area(8), 2);
        let s = store.state();
        assert_eq!(s.tile_at(2, 3), Some(8));
        assert_eq!(s.tile_at(3, 3), Some(8));
        assert_eq!(s.map_data.iter().filter(|&&t| t == 8).count(), 2);
    }

    #[test]
    fn test_fill_area_far_off_map_writes_only_map_cells() {
        let store = EditorStore::new();
        store.begin_area(-50_000, -50_000);
        store.extend_area(50_000, 50_000);

        assert_eq!(store.fill_area(7), 140);
        assert_eq!(grid_of(&store), vec![7; 140]);
    }

    #[test]
    fn test_fill_area_entirely_off_map() {
        let store = EditorStore::new();
        store.begin_area(100, 100);
        store.extend_area(200, -3);
        assert_eq!(store.fill_area(7), 0);
        assert!(grid_of(&store).iter().all(|&t| t == 0));
    }

    #[test]
    fn test_fill_area_needs_a_selection() {
        let store = EditorStore::new();
        assert_eq!(store.fill_area(8), 0);
        store.begin_area(1, 1);
        store.clear_area();
        assert_eq!(store.fill_area(8), 0);
    }

    #[test]
    fn test_add_event_once_per_cell() {
        let store = EditorStore::new();
        let first = store.add_event(2, 2).expect("created");
        assert!(store.add_event(2, 2).is_none());

        let s = store.state();
        assert_eq!(s.events.len(), 1);
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Event 1");
        assert_eq!(s.selected_event.as_ref(), Some(&first));
        assert_eq!(s.selected_position, Position::new(2, 2));
        assert!(!s.is_event_editor_open);
    }

    #[test]
    fn test_ids_repeat_after_removal() {
        let store = EditorStore::new();
        store.add_event(0, 0);
        store.add_event(1, 0);
        store.remove_event(0, 0);
        let again = store.add_event(0, 0).expect("created");

        // count + 1 again: collides with the event at (1,0)
        assert_eq!(again.id, 2);
        assert_eq!(store.event_at(1, 0).map(|e| e.id), Some(2));
    }

    #[test]
    fn test_remove_event_closes_event_editor() {
        let store = EditorStore::new();
        store.add_event(2, 2);
        assert!(store.open_event_editor());

        store.remove_event(5, 5);
        let s = store.state();
        assert!(s.selected_event.is_none());
        assert!(!s.is_event_editor_open);
    }

    #[test]
    fn test_remove_event_always_clears_selection() {
        let store = EditorStore::new();
        store.add_event(0, 0);
        store.add_event(3, 3);
        assert!(store.state().selected_event.is_some());

        assert!(store.remove_event(9, 9).is_none());
        assert!(store.state().selected_event.is_none());

        assert_eq!(store.remove_event(0, 0).map(|e| e.id), Some(1));
        assert!(store.event_at(0, 0).is_none());
    }

    #[test]
    fn test_update_event_refreshes_selection() {
        let store = EditorStore::new();
        let mut ev = store.add_event(1, 2).expect("created");
        ev.name = "Chest".into();
        store.update_event(ev.clone());

        let s = store.state();
        assert_eq!(s.events[&Position::new(1, 2)].name, "Chest");
        assert_eq!(s.selected_event.as_ref().map(|e| e.name.as_str()), Some("Chest"));
    }

    #[test]
    fn test_update_event_with_new_position_leaves_old_entry() {
        let store = EditorStore::new();
        let mut ev = store.add_event(1, 1).expect("created");
        ev.x = 4;
        store.update_event(ev);

        let s = store.state();
        assert_eq!(s.events.len(), 2);
        assert_eq!(s.events[&Position::new(4, 1)].x, 4);
        assert_eq!(s.events[&Position::new(1, 1)].x, 1);
    }

    #[test]
    fn test_update_event_keeps_unrelated_selection() {
        let store = EditorStore::new();
        let first = store.add_event(0, 0).expect("created");
        let mut second = store.add_event(1, 0).expect("created");
        store.select_event(Some(first.clone()));

        second.name = "Door".into();
        store.update_event(second);
        assert_eq!(store.state().selected_event, Some(first));
    }

    #[test]
    fn test_load_empty_project() {
        let store = EditorStore::new();
        store.add_event(1, 1);
        store.load_project(ProjectData::default());

        let s = store.state();
        assert_eq!(s.display_name, "Untitled");
        assert_eq!(s.tileset_id, "default");
        assert_eq!((s.map_width, s.map_height), (20, 15));
        assert_eq!(s.map_data, vec![0; 300]);
        assert!(s.events.is_empty());
        assert_eq!(s.scroll_type, ScrollType::None);
        assert!(!s.specify_battleback);
    }

    #[test]
    fn test_load_project_treats_empty_values_as_missing() {
        let store = EditorStore::new();
        store.load_project(ProjectData {
            display_name: Some(String::new()),
            width: Some(0),
            height: Some(4),
            ..ProjectData::default()
        });

        let s = store.state();
        assert_eq!(s.display_name, "Untitled");
        assert_eq!((s.map_width, s.map_height), (20, 4));
        assert_eq!(s.map_data.len(), 80);
    }

    #[test]
    fn test_load_project_keeps_data_as_given() {
        let store = EditorStore::new();
        store.load_project(ProjectData {
            width: Some(2),
            height: Some(2),
            data: Some(vec![1, 2, 3]),
            ..ProjectData::default()
        });
        assert_eq!(grid_of(&store), vec![1, 2, 3]);

        // resizing a short grid still yields a full one
        store.resize_map(3, 2);
        assert_eq!(grid_of(&store), vec![1, 2, 0, 3, 0, 0]);
    }

    #[test]
    fn test_derived_values() {
        let store = EditorStore::new();
        store.set_zoom(2.0);
        store.set_tool(Tool::Rectangle);

        assert_eq!(store.editor_mode(), "Rectangle");
        assert_eq!(
            store.canvas_size(),
            CanvasSize {
                width: 14.0 * 20.0 * 2.0,
                height: 10.0 * 20.0 * 2.0
            }
        );
    }

    #[test]
    fn test_zoom_is_clamped() {
        let store = EditorStore::new();
        store.set_zoom(100.0);
        assert_eq!(store.state().zoom_level, MAX_ZOOM);
        store.set_zoom(0.0);
        assert_eq!(store.state().zoom_level, MIN_ZOOM);
        store.set_zoom(f32::NAN);
        assert_eq!(store.state().zoom_level, MIN_ZOOM);
    }

    #[test]
    fn test_selection_history() {
        let store = EditorStore::new();
        store.select_position(3, 4);
        store.select_position(5, 6);
        let s = store.state();
        assert_eq!(s.selected_position, Position::new(5, 6));
        assert_eq!(s.last_selected_position, Position::new(3, 4));

        store.hover_tile(Some(Position::new(1, 1)));
        store.hover_tile(None);
        let s = store.state();
        assert_eq!(s.hovered_tile, None);
        assert_eq!(s.last_hovered_tile, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_event_editor_needs_selection() {
        let store = EditorStore::new();
        assert!(!store.open_event_editor());

        store.add_event(0, 0);
        assert!(store.open_event_editor());
        store.close_event_editor();
        assert!(!store.state().is_event_editor_open);
    }

    #[test]
    fn test_tooltip() {
        let store = EditorStore::new();
        store.show_tooltip("Tile 5", 10.0, 20.0);
        let tip = store.state().tooltip.clone();
        assert!(tip.visible);
        assert_eq!(tip.content, "Tile 5");

        store.hide_tooltip();
        assert!(!store.state().tooltip.visible);
    }

    #[test]
    fn test_unchanged_setter_does_not_notify() {
        let store = EditorStore::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let _sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.set_panel(Panel::Map);
        store.set_panel(Panel::Events);
        store.set_drawing(false);
        assert_eq!(calls.get(), 2);
        assert_eq!(store.state().current_panel, Panel::Events);
    }
}
