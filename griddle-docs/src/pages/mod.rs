//! Demo page registry.
//!
//! Each page pairs a short prose introduction with a live table demo and
//! the page's own source code, pulled in with `include_str!`.

mod basic;
mod context_menu;
mod pagination;
mod selection;
mod sorting;
mod states;

use crossterm::event::{KeyEvent, MouseEvent};
use griddle::events::EventResult;
use griddle::theme::TableTheme;
use ratatui::Frame;
use ratatui::layout::Rect;

pub trait Page {
    fn slug(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn prose(&self) -> &'static str;
    /// The page's own source file, shown in the source pane.
    fn source(&self) -> &'static str;
    fn handle_key(&mut self, key: &KeyEvent) -> EventResult;
    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult;
    /// Per-frame maintenance: table upkeep and reacting to drained events.
    fn tick(&mut self);
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &TableTheme);
    fn status(&self) -> String {
        String::new()
    }
}

pub fn all() -> Vec<Box<dyn Page>> {
    vec![
        Box::new(basic::BasicPage::new()),
        Box::new(selection::SelectionPage::new()),
        Box::new(sorting::SortingPage::new()),
        Box::new(pagination::PaginationPage::new()),
        Box::new(context_menu::ContextMenuPage::new()),
        Box::new(states::StatesPage::new()),
    ]
}
