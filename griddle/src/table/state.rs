//! Table component state.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::edges::ScrollEdges;
use crate::events::TableEvent;
use crate::menu::{ContextMenu, MenuItem, MenuState};
use crate::page::PageState;
use crate::selection::{Selection, SelectionMode};
use crate::sort::SortStatus;
use crate::throttle::Throttle;

use super::item::{Column, TableRow};

/// Throttle window for scroll-driven edge recomputation.
pub(crate) const SCROLL_THROTTLE: Duration = Duration::from_millis(200);

/// Unique identifier for a Table component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Screen rectangles recorded during the last render, used to map mouse
/// coordinates back onto table regions.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct TableAreas {
    pub table: Rect,
    pub header: Rect,
    pub body: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
    pub menu: Rect,
}

/// Internal state for the Table component.
pub(super) struct TableInner<T: TableRow> {
    /// Records of the currently displayed page.
    pub rows: Vec<T>,
    /// Full column list, hidden columns included.
    pub columns: Vec<Column>,
    pub selection: Selection,
    pub selection_mode: SelectionMode,
    /// Focused row, if any.
    pub cursor: Option<usize>,
    /// Whether sortable headers are active.
    pub sort_enabled: bool,
    pub sort: Option<SortStatus>,
    /// Presence enables the pagination footer.
    pub page: Option<PageState>,
    pub loading: bool,
    pub scroll_x: u16,
    pub scroll_y: u16,
    /// Body viewport size, set by the renderer.
    pub viewport_width: u16,
    pub viewport_height: u16,
    pub edges: ScrollEdges,
    pub throttle: Throttle,
    pub menu: Option<MenuState>,
    pub menu_config: Option<Arc<ContextMenu<T>>>,
    pub events: VecDeque<TableEvent>,
    pub areas: TableAreas,
}

impl<T: TableRow> Default for TableInner<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            columns: Vec::new(),
            selection: Selection::new(),
            selection_mode: SelectionMode::None,
            cursor: None,
            sort_enabled: false,
            sort: None,
            page: None,
            loading: false,
            scroll_x: 0,
            scroll_y: 0,
            viewport_width: 0,
            viewport_height: 0,
            edges: ScrollEdges::all_at_edge(),
            throttle: Throttle::new(SCROLL_THROTTLE),
            menu: None,
            menu_config: None,
            events: VecDeque::new(),
            areas: TableAreas::default(),
        }
    }
}

impl<T: TableRow> TableInner<T> {
    /// Width reserved for the selection indicator column.
    pub fn checkbox_offset(&self) -> u16 {
        if self.selection_mode == SelectionMode::None {
            0
        } else {
            2
        }
    }

    /// Total content size in cells: (width, height).
    pub fn content_size(&self) -> (u16, u16) {
        let width: u16 = self.checkbox_offset()
            + self
                .columns
                .iter()
                .filter(|c| c.visible)
                .map(|c| c.width)
                .sum::<u16>();
        // Saturate: u16 cells cap the scrollable height, not the dataset.
        let height = (self.rows.len() as u32)
            .saturating_mul(T::HEIGHT as u32)
            .min(u16::MAX as u32) as u16;
        (width, height)
    }

    pub fn max_scroll(&self) -> (u16, u16) {
        let (cw, ch) = self.content_size();
        (
            cw.saturating_sub(self.viewport_width),
            ch.saturating_sub(self.viewport_height),
        )
    }

    pub fn clamp_scroll(&mut self) {
        let (mx, my) = self.max_scroll();
        self.scroll_x = self.scroll_x.min(mx);
        self.scroll_y = self.scroll_y.min(my);
    }

    /// Recompute the at-edge flags from the current geometry.
    ///
    /// While a load is in flight all flags are forced on: the displayed
    /// content is stale and about to change.
    pub fn recompute_edges(&mut self) {
        if self.loading {
            self.edges = ScrollEdges::all_at_edge();
            return;
        }
        let (cw, ch) = self.content_size();
        self.edges = ScrollEdges::compute(
            (cw as f64, ch as f64),
            (self.viewport_width as f64, self.viewport_height as f64),
            (self.scroll_x as f64, self.scroll_y as f64),
        );
    }

    pub fn dataset_keys(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.key()).collect()
    }

    pub fn visible_range(&self) -> std::ops::Range<usize> {
        if self.rows.is_empty() || self.viewport_height == 0 {
            return 0..0;
        }
        let height = T::HEIGHT.max(1);
        let start = (self.scroll_y / height) as usize;
        let count = self.viewport_height.div_ceil(height) as usize;
        let end = (start + count + 1).min(self.rows.len());
        start.min(end)..end
    }
}

/// A table widget with columns, row selection, sorting, pagination, and a
/// row context menu.
///
/// All state lives behind an `Arc<RwLock<_>>`, so clones share the same
/// instance and handles can be kept by event-handling code.
pub struct Table<T: TableRow> {
    id: TableId,
    pub(super) inner: Arc<RwLock<TableInner<T>>>,
    pub(super) dirty: Arc<AtomicBool>,
}

impl<T: TableRow> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: TableRow> Table<T> {
    /// Create an empty table with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner {
                columns,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a table with columns and initial rows.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<T>) -> Self {
        let table = Self::new(columns);
        table.set_rows(rows);
        table
    }

    /// Enable a selection mode (builder-style).
    pub fn with_selection_mode(self, mode: SelectionMode) -> Self {
        self.set_selection_mode(mode);
        self
    }

    /// Enable sortable headers with an optional initial status
    /// (builder-style).
    pub fn with_sorting(self, initial: Option<SortStatus>) -> Self {
        if let Ok(mut g) = self.inner.write() {
            g.sort_enabled = true;
            g.sort = initial;
        }
        self
    }

    /// Enable the pagination footer (builder-style).
    pub fn with_pagination(self, page: PageState) -> Self {
        self.set_page_state(Some(page));
        self
    }

    /// Attach a context-menu descriptor (builder-style).
    pub fn with_context_menu(self, menu: ContextMenu<T>) -> Self {
        self.set_context_menu(Some(menu));
        self
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Rows and columns
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn row(&self, index: usize) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(index).cloned())
    }

    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Visible columns with their indices into the full column list.
    pub fn visible_columns(&self) -> Vec<(usize, Column)> {
        self.inner
            .read()
            .map(|g| {
                g.columns
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.visible)
                    .map(|(i, c)| (i, c.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replace the displayed records.
    ///
    /// Counts as a data refresh: the shift-selection anchor follows the new
    /// key sequence (resetting if it changed), any open context menu closes,
    /// and scroll/cursor are clamped to the new bounds.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut g) = self.inner.write() {
            g.rows = rows;
            let keys = g.dataset_keys();
            g.selection.sync_dataset(keys);
            g.menu = None;
            if let Some(cursor) = g.cursor
                && cursor >= g.rows.len()
            {
                g.cursor = g.rows.len().checked_sub(1);
            }
            g.clamp_scroll();
            g.recompute_edges();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_columns(&self, columns: Vec<Column>) {
        if let Ok(mut g) = self.inner.write() {
            g.columns = columns;
            g.clamp_scroll();
            g.recompute_edges();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selection_mode(&self) -> SelectionMode {
        self.inner
            .read()
            .map(|g| g.selection_mode)
            .unwrap_or_default()
    }

    pub fn set_selection_mode(&self, mode: SelectionMode) {
        if let Ok(mut g) = self.inner.write() {
            g.selection_mode = mode;
            if mode == SelectionMode::None {
                g.selection.clear();
            }
            g.recompute_edges();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Replace the selected key list (application-supplied state; no
    /// selection-change event is emitted).
    pub fn set_selected_keys(&self, keys: Vec<String>) {
        if let Ok(mut g) = self.inner.write() {
            g.selection.set_selected(keys);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn selected_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.selection.selected_keys().to_vec())
            .unwrap_or_default()
    }

    pub fn is_selected_at(&self, index: usize) -> bool {
        self.inner
            .read()
            .map(|g| {
                g.rows
                    .get(index)
                    .is_some_and(|r| g.selection.is_selected(&r.key()))
            })
            .unwrap_or(false)
    }

    /// The shift-range anchor index, if one is set.
    pub fn selection_anchor(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.selection.anchor())
    }

    /// Toggle selection of the row at `index`.
    /// Returns (added, removed) keys.
    pub fn toggle_select_at(&self, index: usize) -> (Vec<String>, Vec<String>) {
        if let Ok(mut g) = self.inner.write() {
            let result = match g.selection_mode {
                SelectionMode::None => (vec![], vec![]),
                SelectionMode::Single => {
                    let was_selected = g
                        .rows
                        .get(index)
                        .is_some_and(|r| g.selection.is_selected(&r.key()));
                    let removed = g.selection.clear();
                    if was_selected {
                        (vec![], removed)
                    } else {
                        let (added, _) = g.selection.toggle_at(index);
                        let removed =
                            removed.into_iter().filter(|k| !added.contains(k)).collect();
                        (added, removed)
                    }
                }
                SelectionMode::Multiple => g.selection.toggle_at(index),
            };
            self.commit_selection(&mut g, &result);
            return result;
        }
        (vec![], vec![])
    }

    /// Toggle-all over the displayed records.
    pub fn toggle_select_all(&self) -> (Vec<String>, Vec<String>) {
        if let Ok(mut g) = self.inner.write() {
            if g.selection_mode != SelectionMode::Multiple {
                return (vec![], vec![]);
            }
            let result = g.selection.toggle_all();
            self.commit_selection(&mut g, &result);
            return result;
        }
        (vec![], vec![])
    }

    /// Shift-click range selection ending at `index`.
    pub fn shift_select(&self, index: usize) -> (Vec<String>, Vec<String>) {
        if let Ok(mut g) = self.inner.write() {
            if g.selection_mode != SelectionMode::Multiple {
                return (vec![], vec![]);
            }
            let result = g.selection.shift_click(index);
            self.commit_selection(&mut g, &result);
            return result;
        }
        (vec![], vec![])
    }

    /// Clear the selection. Returns the deselected keys.
    pub fn clear_selection(&self) -> Vec<String> {
        if let Ok(mut g) = self.inner.write() {
            let removed = g.selection.clear();
            let result = (vec![], removed.clone());
            self.commit_selection(&mut g, &result);
            return removed;
        }
        vec![]
    }

    /// Push a selection-change event and close the menu if anything changed.
    fn commit_selection(&self, g: &mut TableInner<T>, delta: &(Vec<String>, Vec<String>)) {
        if delta.0.is_empty() && delta.1.is_empty() {
            return;
        }
        g.menu = None;
        g.events.push_back(TableEvent::SelectionChange {
            keys: g.selection.selected_keys().to_vec(),
        });
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    pub fn cursor(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.cursor)
    }

    pub fn cursor_key(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.cursor.and_then(|c| g.rows.get(c).map(|r| r.key())))
    }

    /// Set the cursor position. Returns the previous cursor.
    pub fn set_cursor(&self, index: usize) -> Option<usize> {
        if let Ok(mut g) = self.inner.write() {
            let previous = g.cursor;
            if index < g.rows.len() && previous != Some(index) {
                g.cursor = Some(index);
                self.dirty.store(true, Ordering::SeqCst);
            }
            return previous;
        }
        None
    }

    pub fn cursor_up(&self) -> Option<(Option<usize>, usize)> {
        if let Ok(mut g) = self.inner.write() {
            let previous = g.cursor;
            if let Some(cursor) = g.cursor {
                if cursor > 0 {
                    g.cursor = Some(cursor - 1);
                    self.dirty.store(true, Ordering::SeqCst);
                    return Some((previous, cursor - 1));
                }
            } else if !g.rows.is_empty() {
                g.cursor = Some(0);
                self.dirty.store(true, Ordering::SeqCst);
                return Some((None, 0));
            }
        }
        None
    }

    pub fn cursor_down(&self) -> Option<(Option<usize>, usize)> {
        if let Ok(mut g) = self.inner.write() {
            let previous = g.cursor;
            let max_index = g.rows.len().saturating_sub(1);
            if let Some(cursor) = g.cursor {
                if cursor < max_index {
                    g.cursor = Some(cursor + 1);
                    self.dirty.store(true, Ordering::SeqCst);
                    return Some((previous, cursor + 1));
                }
            } else if !g.rows.is_empty() {
                g.cursor = Some(0);
                self.dirty.store(true, Ordering::SeqCst);
                return Some((None, 0));
            }
        }
        None
    }

    pub fn cursor_first(&self) -> Option<(Option<usize>, usize)> {
        if let Ok(mut g) = self.inner.write()
            && !g.rows.is_empty()
        {
            let previous = g.cursor;
            g.cursor = Some(0);
            self.dirty.store(true, Ordering::SeqCst);
            return Some((previous, 0));
        }
        None
    }

    pub fn cursor_last(&self) -> Option<(Option<usize>, usize)> {
        if let Ok(mut g) = self.inner.write()
            && !g.rows.is_empty()
        {
            let previous = g.cursor;
            let last = g.rows.len() - 1;
            g.cursor = Some(last);
            self.dirty.store(true, Ordering::SeqCst);
            return Some((previous, last));
        }
        None
    }

    /// Scroll the viewport so the cursor row is visible.
    pub fn scroll_to_cursor(&self) {
        if let Ok(mut g) = self.inner.write()
            && let Some(cursor) = g.cursor
        {
            let row_top = (cursor as u32)
                .saturating_mul(T::HEIGHT as u32)
                .min(u16::MAX as u32) as u16;
            let row_bottom = row_top.saturating_add(T::HEIGHT);
            if g.viewport_height == 0 {
                return;
            }
            if row_top < g.scroll_y {
                g.scroll_y = row_top;
            } else if row_bottom > g.scroll_y + g.viewport_height {
                g.scroll_y = row_bottom.saturating_sub(g.viewport_height);
            } else {
                return;
            }
            g.recompute_edges();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    pub fn sort_status(&self) -> Option<SortStatus> {
        self.inner.read().ok().and_then(|g| g.sort)
    }

    pub fn sort_enabled(&self) -> bool {
        self.inner.read().map(|g| g.sort_enabled).unwrap_or(false)
    }

    /// Set the sort status (application-supplied; no event).
    pub fn set_sort_status(&self, status: Option<SortStatus>) {
        if let Ok(mut g) = self.inner.write() {
            g.sort_enabled = true;
            g.sort = status;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle sorting on a column (header click). Emits a sort-change
    /// event when the column is sortable and sorting is enabled.
    pub fn toggle_sort(&self, column: usize) -> Option<SortStatus> {
        if let Ok(mut g) = self.inner.write() {
            if !g.sort_enabled {
                return None;
            }
            let sortable = g.columns.get(column).is_some_and(|c| c.sortable);
            if !sortable {
                return None;
            }
            let status = SortStatus::toggle(g.sort, column);
            g.sort = Some(status);
            g.events.push_back(TableEvent::SortChange { status });
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!("{}: sort toggled to {:?}", self.id, status);
            return Some(status);
        }
        None
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    pub fn page_state(&self) -> Option<PageState> {
        self.inner.read().ok().and_then(|g| g.page)
    }

    /// Set or remove the pagination state (application-supplied; no event).
    pub fn set_page_state(&self, page: Option<PageState>) {
        if let Ok(mut g) = self.inner.write() {
            g.page = page;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Jump to a page. Emits a page-change event and resets vertical
    /// scroll when the page actually changes.
    pub fn go_to_page(&self, page: usize) -> bool {
        if let Ok(mut g) = self.inner.write()
            && let Some(state) = g.page.as_mut()
            && state.set_page(page)
        {
            let page = state.page;
            g.scroll_y = 0;
            g.recompute_edges();
            g.events.push_back(TableEvent::PageChange { page });
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!("{}: page -> {page}", self.id);
            return true;
        }
        false
    }

    pub fn next_page(&self) -> bool {
        let target = self.page_state().map(|p| p.page + 1);
        target.is_some_and(|t| self.go_to_page(t))
    }

    pub fn prev_page(&self) -> bool {
        let target = self.page_state().map(|p| p.page.saturating_sub(1));
        target.is_some_and(|t| self.go_to_page(t))
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    pub fn loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    /// Set the loading flag. While loading, all at-edge flags are forced on
    /// and any open context menu is dismissed.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut g) = self.inner.write() {
            g.loading = loading;
            if loading {
                g.menu = None;
            }
            g.recompute_edges();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Scrolling and edges
    // -------------------------------------------------------------------------

    pub fn scroll_offset(&self) -> (u16, u16) {
        self.inner
            .read()
            .map(|g| (g.scroll_x, g.scroll_y))
            .unwrap_or((0, 0))
    }

    /// Scroll by a delta in cells. The offset updates immediately; the
    /// at-edge flags recompute through the throttle (leading edge now,
    /// trailing edge via [`tick`](Table::tick)).
    pub fn scroll_by(&self, dx: i16, dy: i16) {
        if let Ok(mut g) = self.inner.write() {
            let (mx, my) = g.max_scroll();
            let new_x = (g.scroll_x as i32 + dx as i32).clamp(0, mx as i32) as u16;
            let new_y = (g.scroll_y as i32 + dy as i32).clamp(0, my as i32) as u16;
            if new_x == g.scroll_x && new_y == g.scroll_y {
                return;
            }
            g.scroll_x = new_x;
            g.scroll_y = new_y;
            if g.throttle.accept(Instant::now()) {
                g.recompute_edges();
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the body viewport size. Dimension changes recompute the edge
    /// flags immediately, outside the scroll throttle.
    pub fn set_viewport(&self, width: u16, height: u16) {
        if let Ok(mut g) = self.inner.write() {
            if g.viewport_width == width && g.viewport_height == height {
                return;
            }
            g.viewport_width = width;
            g.viewport_height = height;
            g.clamp_scroll();
            g.recompute_edges();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.inner
            .read()
            .map(|g| (g.viewport_width, g.viewport_height))
            .unwrap_or((0, 0))
    }

    pub fn edges(&self) -> ScrollEdges {
        self.inner.read().map(|g| g.edges).unwrap_or_default()
    }

    pub fn visible_row_range(&self) -> std::ops::Range<usize> {
        self.inner
            .read()
            .map(|g| g.visible_range())
            .unwrap_or(0..0)
    }

    pub fn content_size(&self) -> (u16, u16) {
        self.inner
            .read()
            .map(|g| g.content_size())
            .unwrap_or((0, 0))
    }

    /// Per-frame maintenance: runs the pending trailing edge recomputation
    /// once the throttle window has elapsed.
    pub fn tick(&self) {
        if let Ok(mut g) = self.inner.write()
            && g.throttle.flush(Instant::now())
        {
            g.recompute_edges();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Context menu
    // -------------------------------------------------------------------------

    pub fn set_context_menu(&self, menu: Option<ContextMenu<T>>) {
        if let Ok(mut g) = self.inner.write() {
            g.menu_config = menu.map(Arc::new);
            g.menu = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn has_context_menu(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.menu_config.is_some())
            .unwrap_or(false)
    }

    pub fn menu_state(&self) -> Option<MenuState> {
        self.inner.read().ok().and_then(|g| g.menu.clone())
    }

    /// Open the context menu for the row at `index` at screen position
    /// (`x`, `y`). Replaces any previously open instance. Returns false if
    /// the table has no menu, the row does not exist, a load is in flight,
    /// or the row suppresses the menu.
    pub fn open_menu(&self, index: usize, x: u16, y: u16) -> bool {
        if let Ok(mut g) = self.inner.write() {
            if g.loading {
                return false;
            }
            let Some(config) = g.menu_config.clone() else {
                return false;
            };
            let Some(record) = g.rows.get(index) else {
                return false;
            };
            if config.is_suppressed(record) {
                return false;
            }
            let row_key = record.key();
            log::debug!("{}: menu open for {row_key} at ({x}, {y})", self.id);
            g.menu = Some(MenuState {
                x,
                y,
                row_key,
                row_index: index,
            });
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Dismiss the open menu, if any. Returns true if one was open.
    pub fn close_menu(&self) -> bool {
        if let Ok(mut g) = self.inner.write()
            && g.menu.is_some()
        {
            g.menu = None;
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// The menu items applicable to the open menu's record, in render
    /// order (visibility predicates already applied).
    pub fn menu_entries(&self) -> Vec<(String, String, bool)> {
        let Some((config, record)) = self.open_menu_target() else {
            return vec![];
        };
        config
            .items()
            .iter()
            .filter(|item| item.is_visible(&record))
            .map(|item| {
                (
                    item.key().to_string(),
                    item.title().to_string(),
                    item.is_disabled(&record),
                )
            })
            .collect()
    }

    /// Handle a click on the visible menu item at `item_index`.
    ///
    /// An enabled item dismisses the menu first, then runs its handler with
    /// the target record; a disabled item leaves the menu open.
    pub fn menu_item_click(&self, item_index: usize) {
        let Some((config, record)) = self.open_menu_target() else {
            return;
        };
        let visible: Vec<&MenuItem<T>> = config
            .items()
            .iter()
            .filter(|item| item.is_visible(&record))
            .collect();
        let Some(item) = visible.get(item_index) else {
            return;
        };
        if item.is_disabled(&record) {
            return;
        }
        // Dismiss before the handler runs.
        self.close_menu();
        item.run(&record);
        if let Ok(mut g) = self.inner.write() {
            g.events.push_back(TableEvent::MenuAction {
                item: item.key().to_string(),
                key: record.key(),
            });
        }
    }

    /// Resolve the open menu's descriptor and target record.
    fn open_menu_target(&self) -> Option<(Arc<ContextMenu<T>>, T)> {
        let g = self.inner.read().ok()?;
        let state = g.menu.as_ref()?;
        let config = g.menu_config.clone()?;
        let record = g.rows.iter().find(|r| r.key() == state.row_key).cloned()?;
        Some((config, record))
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub(super) fn push_event(&self, event: TableEvent) {
        if let Ok(mut g) = self.inner.write() {
            g.events.push_back(event);
        }
    }

    /// Drain the queued state-change events for the application to react to.
    pub fn drain_events(&self) -> Vec<TableEvent> {
        self.inner
            .write()
            .map(|mut g| g.events.drain(..).collect())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}
