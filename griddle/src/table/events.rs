//! Event handling for the Table component.
//!
//! Keyboard events come straight from crossterm; mouse events are mapped
//! onto table regions through the rectangles recorded by the renderer.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::events::{EventResult, TableEvent};
use crate::selection::SelectionMode;

use super::item::TableRow;
use super::state::Table;

/// Horizontal scroll amount per key press or wheel notch (in cells).
const HORIZONTAL_SCROLL_AMOUNT: i16 = 8;

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

impl<T: TableRow> Table<T> {
    /// Handle a key event while the table has focus.
    pub fn handle_key(&self, key: &KeyEvent) -> EventResult {
        if key.kind != KeyEventKind::Press {
            return EventResult::Ignored;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Up => {
                if self.cursor_up().is_some() {
                    self.scroll_to_cursor();
                    self.push_cursor_event();
                    return EventResult::Consumed;
                }
                EventResult::Ignored
            }
            KeyCode::Down => {
                if self.cursor_down().is_some() {
                    self.scroll_to_cursor();
                    self.push_cursor_event();
                    return EventResult::Consumed;
                }
                EventResult::Ignored
            }
            KeyCode::Home => {
                if self.cursor_first().is_some() {
                    self.scroll_to_cursor();
                    self.push_cursor_event();
                    return EventResult::Consumed;
                }
                EventResult::Ignored
            }
            KeyCode::End => {
                if self.cursor_last().is_some() {
                    self.scroll_to_cursor();
                    self.push_cursor_event();
                    return EventResult::Consumed;
                }
                EventResult::Ignored
            }
            KeyCode::PageUp => self.cursor_page_move(-1),
            KeyCode::PageDown => self.cursor_page_move(1),
            KeyCode::Left if !ctrl => {
                self.scroll_by(-HORIZONTAL_SCROLL_AMOUNT, 0);
                EventResult::Consumed
            }
            KeyCode::Right if !ctrl => {
                self.scroll_by(HORIZONTAL_SCROLL_AMOUNT, 0);
                EventResult::Consumed
            }
            KeyCode::Char(' ') if self.selection_mode() == SelectionMode::Multiple => {
                if let Some(cursor) = self.cursor() {
                    self.toggle_select_at(cursor);
                }
                EventResult::Consumed
            }
            KeyCode::Char('a') if ctrl && self.selection_mode() == SelectionMode::Multiple => {
                self.toggle_select_all();
                EventResult::Consumed
            }
            KeyCode::Esc => {
                if self.close_menu() {
                    return EventResult::Consumed;
                }
                if self.selection_mode() != SelectionMode::None
                    && !self.clear_selection().is_empty()
                {
                    return EventResult::Consumed;
                }
                EventResult::Ignored
            }
            KeyCode::Enter => {
                self.activate_cursor();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Handle a mouse event in screen coordinates.
    ///
    /// Uses the regions recorded by the last render pass, so the table must
    /// have been rendered at least once.
    pub fn handle_mouse(&self, mouse: &MouseEvent) -> EventResult {
        let areas = self.areas();
        let (x, y) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // The open menu is topmost: clicks inside hit items, clicks
                // anywhere else dismiss it.
                if self.menu_state().is_some() {
                    // Item rows sit strictly inside the border.
                    let interior = Rect::new(
                        areas.menu.x.saturating_add(1),
                        areas.menu.y.saturating_add(1),
                        areas.menu.width.saturating_sub(2),
                        areas.menu.height.saturating_sub(2),
                    );
                    if contains(interior, x, y) {
                        let item = (y - interior.y) as usize;
                        self.menu_item_click(item);
                    } else if !contains(areas.menu, x, y) {
                        self.close_menu();
                    }
                    return EventResult::Consumed;
                }
                if contains(areas.header, x, y) {
                    return self.on_header_click(x.saturating_sub(areas.header.x));
                }
                if contains(areas.body, x, y) {
                    let ctrl = mouse.modifiers.contains(KeyModifiers::CONTROL);
                    let shift = mouse.modifiers.contains(KeyModifiers::SHIFT);
                    return self.on_body_click(y.saturating_sub(areas.body.y), ctrl, shift);
                }
                if contains(areas.prev_button, x, y) {
                    self.prev_page();
                    return EventResult::Consumed;
                }
                if contains(areas.next_button, x, y) {
                    self.next_page();
                    return EventResult::Consumed;
                }
                EventResult::Ignored
            }
            MouseEventKind::Down(MouseButton::Right) => {
                if contains(areas.body, x, y) {
                    let offset = y.saturating_sub(areas.body.y);
                    if let Some(index) = self.index_from_viewport_y(offset)
                        && self.open_menu(index, x, y)
                    {
                        return EventResult::Consumed;
                    }
                }
                EventResult::Ignored
            }
            MouseEventKind::ScrollUp if contains(areas.table, x, y) => {
                self.scroll_by(0, -(T::HEIGHT as i16));
                EventResult::Consumed
            }
            MouseEventKind::ScrollDown if contains(areas.table, x, y) => {
                self.scroll_by(0, T::HEIGHT as i16);
                EventResult::Consumed
            }
            MouseEventKind::ScrollLeft if contains(areas.table, x, y) => {
                self.scroll_by(-HORIZONTAL_SCROLL_AMOUNT, 0);
                EventResult::Consumed
            }
            MouseEventKind::ScrollRight if contains(areas.table, x, y) => {
                self.scroll_by(HORIZONTAL_SCROLL_AMOUNT, 0);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Handle a click on a data row with modifier keys.
    ///
    /// Plain click activates the row. With selection enabled, Ctrl+click
    /// toggles and Shift+click extends a range from the anchor.
    pub fn on_row_click(&self, index: usize, ctrl: bool, shift: bool) -> EventResult {
        if index >= self.len() {
            return EventResult::Ignored;
        }
        self.handle_cursor_move(index);

        match self.selection_mode() {
            SelectionMode::None => {
                self.activate_at(index);
            }
            SelectionMode::Single => {
                if ctrl {
                    self.toggle_select_at(index);
                } else {
                    self.activate_at(index);
                }
            }
            SelectionMode::Multiple => {
                if shift {
                    self.shift_select(index);
                } else if ctrl {
                    self.toggle_select_at(index);
                } else {
                    self.activate_at(index);
                }
            }
        }

        self.scroll_to_cursor();
        EventResult::Consumed
    }

    /// Handle a click on the header row: the selection gutter toggles all,
    /// a sortable column header toggles its sort.
    pub fn on_header_click(&self, x_in_header: u16) -> EventResult {
        let gutter = self
            .inner
            .read()
            .map(|g| g.checkbox_offset())
            .unwrap_or(0);
        if gutter > 0 && x_in_header < gutter {
            if self.selection_mode() == SelectionMode::Multiple {
                self.toggle_select_all();
                return EventResult::Consumed;
            }
            return EventResult::Ignored;
        }
        let Some(column) = self.column_from_x(x_in_header) else {
            return EventResult::Ignored;
        };
        if self.toggle_sort(column).is_some() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn on_body_click(&self, y_in_body: u16, ctrl: bool, shift: bool) -> EventResult {
        let Some(index) = self.index_from_viewport_y(y_in_body) else {
            return EventResult::Ignored;
        };
        self.on_row_click(index, ctrl, shift)
    }

    /// Row index at a viewport-relative y coordinate.
    pub fn index_from_viewport_y(&self, y: u16) -> Option<usize> {
        if T::HEIGHT == 0 {
            return None;
        }
        let (_, scroll_y) = self.scroll_offset();
        let index = ((scroll_y + y) / T::HEIGHT) as usize;
        (index < self.len()).then_some(index)
    }

    /// Which column a header-relative x coordinate falls into, accounting
    /// for horizontal scroll and the selection indicator gutter.
    pub fn column_from_x(&self, x: u16) -> Option<usize> {
        let g = self.inner.read().ok()?;
        let gutter = g.checkbox_offset();
        let absolute = x.checked_sub(gutter)? + g.scroll_x;
        let mut col_x = 0u16;
        for (i, col) in g.columns.iter().enumerate() {
            if !col.visible {
                continue;
            }
            if absolute >= col_x && absolute < col_x + col.width {
                return Some(i);
            }
            col_x += col.width;
        }
        None
    }

    fn cursor_page_move(&self, direction: isize) -> EventResult {
        let (_, viewport_height) = self.viewport();
        let page = (viewport_height / T::HEIGHT.max(1)).max(1) as usize;
        let current = self.cursor().unwrap_or(0);
        let target = if direction < 0 {
            current.saturating_sub(page)
        } else {
            (current + page).min(self.len().saturating_sub(1))
        };
        if self.handle_cursor_move(target) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Move the cursor, scroll it into view, and push a cursor event.
    /// Returns true if the cursor actually moved.
    fn handle_cursor_move(&self, index: usize) -> bool {
        let previous = self.set_cursor(index);
        if previous != Some(index) {
            self.scroll_to_cursor();
            self.push_cursor_event();
            true
        } else {
            false
        }
    }

    fn push_cursor_event(&self) {
        if let (Some(index), Some(key)) = (self.cursor(), self.cursor_key()) {
            self.push_event(TableEvent::CursorMove { key, index });
        }
    }

    fn activate_cursor(&self) {
        if let Some(index) = self.cursor() {
            self.activate_at(index);
        }
    }

    fn activate_at(&self, index: usize) {
        if let Some(row) = self.row(index) {
            self.push_event(TableEvent::Activate {
                key: row.key(),
                index,
            });
        }
    }

    pub(super) fn areas(&self) -> super::state::TableAreas {
        self.inner.read().map(|g| g.areas).unwrap_or_default()
    }
}
