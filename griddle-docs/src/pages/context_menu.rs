use crossterm::event::{KeyEvent, MouseEvent};
use griddle::Table;
use griddle::events::{EventResult, TableEvent};
use griddle::menu::{ContextMenu, MenuItem};
use griddle::selection::SelectionMode;
use griddle::theme::TableTheme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::data::{Track, sample_tracks, track_columns};

use super::Page;

pub struct ContextMenuPage {
    table: Table<Track>,
    status: String,
}

impl ContextMenuPage {
    pub fn new() -> Self {
        let menu = ContextMenu::new()
            .item(
                MenuItem::new("play", "Play")
                    .icon("▶")
                    .on_click(|t: &Track| log::info!("play requested for {}", t.id)),
            )
            .item(
                MenuItem::new("queue", "Add to queue")
                    .icon("+")
                    .disabled_if(|t: &Track| t.plays == 0),
            )
            .item(
                MenuItem::new("delete", "Delete")
                    .icon("✕")
                    .color(Color::Red),
            );
        let table = Table::with_rows(track_columns(), sample_tracks())
            .with_selection_mode(SelectionMode::Multiple)
            .with_context_menu(menu);
        Self {
            table,
            status: "right-click a row".to_string(),
        }
    }
}

impl Page for ContextMenuPage {
    fn slug(&self) -> &'static str {
        "context-menu"
    }

    fn title(&self) -> &'static str {
        "Context menu"
    }

    fn prose(&self) -> &'static str {
        "Right-click a row for its context menu. Only one menu exists at \
         a time: opening another row's menu replaces it, and Esc, an \
         outside click, a selection change, or a data refresh dismisses \
         it. The queue item is disabled for never-played tracks and \
         ignores clicks without closing the menu."
    }

    fn source(&self) -> &'static str {
        include_str!("context_menu.rs")
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        self.table.handle_key(key)
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        self.table.handle_mouse(mouse)
    }

    fn tick(&mut self) {
        self.table.tick();
        for event in self.table.drain_events() {
            if let TableEvent::MenuAction { item, key } = event {
                self.status = format!("{item} on track {key}");
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &TableTheme) {
        self.table.render(frame, area, theme);
    }

    fn status(&self) -> String {
        self.status.clone()
    }
}
