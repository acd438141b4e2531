use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use griddle::Table;
use griddle::events::EventResult;
use griddle::theme::TableTheme;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::data::{Track, sample_tracks, track_columns};

use super::Page;

pub struct StatesPage {
    table: Table<Track>,
    populated: bool,
}

impl StatesPage {
    pub fn new() -> Self {
        Self {
            table: Table::with_rows(track_columns(), sample_tracks()),
            populated: true,
        }
    }
}

impl Page for StatesPage {
    fn slug(&self) -> &'static str {
        "states"
    }

    fn title(&self) -> &'static str {
        "Loading and empty"
    }

    fn prose(&self) -> &'static str {
        "Press l to toggle the loading overlay and e to swap between a \
         populated and an empty dataset. While loading the body dims, \
         every at-edge flag is forced on so no scroll shadows show, and \
         any open context menu is dismissed. An empty, non-loading table \
         shows a placeholder instead of rows."
    }

    fn source(&self) -> &'static str {
        include_str!("states.rs")
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        if key.kind == KeyEventKind::Press {
            match key.code {
                KeyCode::Char('l') => {
                    self.table.set_loading(!self.table.loading());
                    return EventResult::Consumed;
                }
                KeyCode::Char('e') => {
                    self.populated = !self.populated;
                    let rows = if self.populated {
                        sample_tracks()
                    } else {
                        vec![]
                    };
                    self.table.set_rows(rows);
                    return EventResult::Consumed;
                }
                _ => {}
            }
        }
        self.table.handle_key(key)
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        self.table.handle_mouse(mouse)
    }

    fn tick(&mut self) {
        self.table.tick();
        self.table.drain_events();
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &TableTheme) {
        self.table.render(frame, area, theme);
    }

    fn status(&self) -> String {
        let loading = if self.table.loading() { "on" } else { "off" };
        format!("loading: {loading} · rows: {}", self.table.len())
    }
}
