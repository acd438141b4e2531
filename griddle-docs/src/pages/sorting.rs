use crossterm::event::{KeyEvent, MouseEvent};
use griddle::Table;
use griddle::events::{EventResult, TableEvent};
use griddle::sort::{SortDirection, SortStatus};
use griddle::theme::TableTheme;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::data::{Track, sample_tracks, track_columns};

use super::Page;

pub struct SortingPage {
    table: Table<Track>,
    dataset: Vec<Track>,
    status: String,
}

impl SortingPage {
    pub fn new() -> Self {
        let dataset = sample_tracks();
        let initial = SortStatus::ascending(0);
        let mut rows = dataset.clone();
        sort_tracks(&mut rows, initial);
        let table =
            Table::with_rows(track_columns(), rows).with_sorting(Some(initial));
        Self {
            table,
            dataset,
            status: "sorted by Id ▲".to_string(),
        }
    }
}

impl Page for SortingPage {
    fn slug(&self) -> &'static str {
        "sorting"
    }

    fn title(&self) -> &'static str {
        "Sorting"
    }

    fn prose(&self) -> &'static str {
        "Click a header to sort by that column; clicking it again flips \
         the direction, and a different column restarts ascending. The \
         table only reports the requested order. This page reacts to the \
         sort-change event by reordering the dataset itself, the same way \
         an application would re-issue a query."
    }

    fn source(&self) -> &'static str {
        include_str!("sorting.rs")
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
            if let TableEvent::SortChange { status } = event {
                let mut rows = self.dataset.clone();
                sort_tracks(&mut rows, status);
                self.table.set_rows(rows);
                let name = ["Id", "Title", "Artist", "Duration", "Plays"]
                    .get(status.column)
                    .copied()
                    .unwrap_or("?");
                self.status =
                    format!("sorted by {name} {}", status.direction.indicator());
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

fn sort_tracks(rows: &mut [Track], status: SortStatus) {
    match status.column {
        0 => rows.sort_by_key(|t| t.id),
        1 => rows.sort_by(|a, b| a.title.cmp(&b.title)),
        2 => rows.sort_by(|a, b| a.artist.cmp(&b.artist)),
        3 => rows.sort_by_key(|t| t.duration_secs),
        4 => rows.sort_by_key(|t| t.plays),
        _ => {}
    }
    if status.direction == SortDirection::Descending {
        rows.reverse();
    }
}
