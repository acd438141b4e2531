use crossterm::event::{KeyEvent, MouseEvent};
use griddle::Table;
use griddle::events::{EventResult, TableEvent};
use griddle::page::PageState;
use griddle::theme::TableTheme;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::data::{Track, sample_tracks, track_columns};

use super::Page;

const PER_PAGE: usize = 8;

pub struct PaginationPage {
    table: Table<Track>,
    dataset: Vec<Track>,
    status: String,
}

impl PaginationPage {
    pub fn new() -> Self {
        let dataset = sample_tracks();
        let page = PageState::new(PER_PAGE, dataset.len());
        let rows = dataset[page.record_range()].to_vec();
        let table = Table::with_rows(track_columns(), rows).with_pagination(page);
        Self {
            table,
            dataset,
            status: "page 1".to_string(),
        }
    }
}

impl Page for PaginationPage {
    fn slug(&self) -> &'static str {
        "pagination"
    }

    fn title(&self) -> &'static str {
        "Pagination"
    }

    fn prose(&self) -> &'static str {
        "A paged table holds only the current page's rows; the footer \
         shows the position and the Prev/Next buttons move through the \
         set. This page answers the page-change event by slicing the next \
         window out of its dataset, where a real application would fetch \
         it."
    }

    fn source(&self) -> &'static str {
        include_str!("pagination.rs")
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
            if let TableEvent::PageChange { page } = event
                && let Some(state) = self.table.page_state()
            {
                let rows = self.dataset[state.record_range()].to_vec();
                self.table.set_rows(rows);
                self.status = format!("page {page}");
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
