use crossterm::event::{KeyEvent, MouseEvent};
use griddle::Table;
use griddle::events::{EventResult, TableEvent};
use griddle::selection::SelectionMode;
use griddle::theme::TableTheme;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::data::{Track, sample_tracks, track_columns};

use super::Page;

pub struct SelectionPage {
    table: Table<Track>,
    status: String,
}

impl SelectionPage {
    pub fn new() -> Self {
        let table = Table::with_rows(track_columns(), sample_tracks())
            .with_selection_mode(SelectionMode::Multiple);
        Self {
            table,
            status: "nothing selected".to_string(),
        }
    }
}

impl Page for SelectionPage {
    fn slug(&self) -> &'static str {
        "selection"
    }

    fn title(&self) -> &'static str {
        "Selection"
    }

    fn prose(&self) -> &'static str {
        "Multiple selection keyed by track id. Ctrl+Click (or Space) \
         toggles one row, Shift+Click extends a range from the last \
         toggled row, the header checkbox or Ctrl+A toggles everything, \
         and Esc clears. The range replicates the clicked row's new state \
         across the whole interval, in either direction."
    }

    fn source(&self) -> &'static str {
        include_str!("selection.rs")
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
            if let TableEvent::SelectionChange { keys } = event {
                self.status = match keys.len() {
                    0 => "nothing selected".to_string(),
                    1 => format!("1 track selected ({})", keys[0]),
                    n => format!("{n} tracks selected"),
                };
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
