use crossterm::event::{KeyEvent, MouseEvent};
use griddle::Table;
use griddle::events::{EventResult, TableEvent};
use griddle::theme::TableTheme;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::data::{Track, sample_tracks, track_columns};

use super::Page;

pub struct BasicPage {
    table: Table<Track>,
    status: String,
}

impl BasicPage {
    pub fn new() -> Self {
        Self {
            table: Table::with_rows(track_columns(), sample_tracks()),
            status: String::new(),
        }
    }
}

impl Page for BasicPage {
    fn slug(&self) -> &'static str {
        "basic"
    }

    fn title(&self) -> &'static str {
        "Basic table"
    }

    fn prose(&self) -> &'static str {
        "A plain table: typed rows, fixed-width columns, a sticky header, \
         and keyboard navigation. Move the cursor with Up/Down, Home/End \
         and PageUp/PageDown, press Enter to activate a row, and scroll \
         horizontally with Left/Right or the mouse wheel."
    }

    fn source(&self) -> &'static str {
        include_str!("basic.rs")
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
            if let TableEvent::Activate { key, index } = event {
                self.status = format!("activated row {index} (track {key})");
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
