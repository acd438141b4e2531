//! Tests for the single-instance row context menu.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use griddle::Table;
use griddle::theme::TableTheme;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use griddle::events::TableEvent;
use griddle::menu::{ContextMenu, MenuItem};
use griddle::selection::SelectionMode;
use griddle::table::{Column, TableRow};

#[derive(Debug, Clone)]
struct Record {
    id: u64,
    name: String,
    archived: bool,
}

impl TableRow for Record {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, column_index: usize) -> String {
        match column_index {
            0 => self.id.to_string(),
            _ => self.name.clone(),
        }
    }
}

fn records(n: u64) -> Vec<Record> {
    (1..=n)
        .map(|id| Record {
            id,
            name: format!("record {id}"),
            archived: id % 2 == 0,
        })
        .collect()
}

fn columns() -> Vec<Column> {
    vec![Column::new("Id", 6), Column::new("Name", 20)]
}

fn menu() -> ContextMenu<Record> {
    ContextMenu::new()
        .item(MenuItem::new("open", "Open"))
        .item(MenuItem::new("archive", "Archive").disabled_if(|r: &Record| r.archived))
        .item(
            MenuItem::new("restore", "Restore").visible_if(|r: &Record| r.archived),
        )
}

fn table_with_menu() -> Table<Record> {
    Table::with_rows(columns(), records(5)).with_context_menu(menu())
}

#[test]
fn test_open_menu_records_position_and_row() {
    let table = table_with_menu();
    assert!(table.open_menu(1, 12, 7));
    let state = table.menu_state().unwrap();
    assert_eq!((state.x, state.y), (12, 7));
    assert_eq!(state.row_key, "2");
    assert_eq!(state.row_index, 1);
}

#[test]
fn test_open_menu_requires_config_and_row() {
    let bare = Table::with_rows(columns(), records(3));
    assert!(!bare.open_menu(0, 0, 0));

    let table = table_with_menu();
    assert!(!table.open_menu(99, 0, 0));
    assert!(table.menu_state().is_none());
}

#[test]
fn test_second_open_replaces_first() {
    let table = table_with_menu();
    assert!(table.open_menu(0, 3, 3));
    assert!(table.open_menu(2, 9, 9));
    let state = table.menu_state().unwrap();
    assert_eq!(state.row_key, "3");
}

#[test]
fn test_close_menu_reports_whether_one_was_open() {
    let table = table_with_menu();
    assert!(!table.close_menu());
    table.open_menu(0, 0, 0);
    assert!(table.close_menu());
    assert!(table.menu_state().is_none());
}

#[test]
fn test_data_refresh_dismisses_menu() {
    let table = table_with_menu();
    table.open_menu(1, 5, 5);
    table.set_rows(records(4));
    assert!(table.menu_state().is_none());
}

#[test]
fn test_loading_dismisses_and_blocks_menu() {
    let table = table_with_menu();
    table.open_menu(1, 5, 5);
    table.set_loading(true);
    assert!(table.menu_state().is_none());
    assert!(!table.open_menu(1, 5, 5));

    table.set_loading(false);
    assert!(table.open_menu(1, 5, 5));
}

#[test]
fn test_selection_change_dismisses_menu() {
    let table = table_with_menu().with_selection_mode(SelectionMode::Multiple);
    table.drain_events();
    table.open_menu(0, 2, 2);
    table.toggle_select_at(3);
    assert!(table.menu_state().is_none());
}

#[test]
fn test_suppressed_row_refuses_to_open() {
    let menu = menu().suppress_if(|r: &Record| r.id == 3);
    let table = Table::with_rows(columns(), records(5)).with_context_menu(menu);
    assert!(!table.open_menu(2, 0, 0));
    assert!(table.open_menu(3, 0, 0));
}

#[test]
fn test_menu_entries_apply_visibility_and_disabled() {
    let table = table_with_menu();

    // Row 1 is not archived: Restore is hidden, Archive enabled.
    table.open_menu(0, 0, 0);
    let entries = table.menu_entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], ("open".to_string(), "Open".to_string(), false));
    assert_eq!(
        entries[1],
        ("archive".to_string(), "Archive".to_string(), false)
    );

    // Row 2 is archived: all three visible, Archive disabled.
    table.open_menu(1, 0, 0);
    let entries = table.menu_entries();
    assert_eq!(entries.len(), 3);
    assert!(entries[1].2, "archive should be disabled");
    assert_eq!(entries[2].0, "restore");
}

#[test]
fn test_disabled_item_click_keeps_menu_open() {
    let table = table_with_menu();
    table.open_menu(1, 0, 0);
    // Entry 1 is the disabled Archive item.
    table.menu_item_click(1);
    assert!(table.menu_state().is_some());
    assert!(table.drain_events().is_empty());
}

#[test]
fn test_enabled_item_click_closes_runs_and_reports() {
    let ran = Arc::new(AtomicUsize::new(0));
    let ran_in_click = Arc::clone(&ran);
    let menu = ContextMenu::new().item(
        MenuItem::new("open", "Open").on_click(move |r: &Record| {
            assert_eq!(r.id, 2);
            ran_in_click.fetch_add(1, Ordering::SeqCst);
        }),
    );
    let table = Table::with_rows(columns(), records(5)).with_context_menu(menu);

    table.open_menu(1, 0, 0);
    table.menu_item_click(0);

    assert!(table.menu_state().is_none());
    assert_eq!(ran.load(Ordering::SeqCst), 1);
    let events = table.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        TableEvent::MenuAction { item, key } if item == "open" && key == "2"
    ));
}

#[test]
fn test_item_click_without_open_menu_is_noop() {
    let table = table_with_menu();
    table.menu_item_click(0);
    assert!(table.drain_events().is_empty());
}

fn left_click(x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_menu_border_clicks_hit_no_item() {
    let ran = Arc::new(AtomicUsize::new(0));
    let ran_in_click = Arc::clone(&ran);
    let menu = ContextMenu::new().item(
        MenuItem::new("open", "Open").on_click(move |_r: &Record| {
            ran_in_click.fetch_add(1, Ordering::SeqCst);
        }),
    );
    let table = Table::with_rows(columns(), records(5)).with_context_menu(menu);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let theme = TableTheme::default();

    assert!(table.open_menu(1, 10, 5));
    terminal
        .draw(|frame| table.render(frame, frame.area(), &theme))
        .unwrap();

    // One item: the menu occupies rows 5..=7, with the item on row 6.
    // Clicks on the top border and the left border column are swallowed
    // without running anything.
    table.handle_mouse(&left_click(12, 5));
    table.handle_mouse(&left_click(10, 6));
    assert!(table.menu_state().is_some());
    assert_eq!(ran.load(Ordering::SeqCst), 0);

    // A click on the item row inside the border runs it and closes.
    table.handle_mouse(&left_click(12, 6));
    assert!(table.menu_state().is_none());
    assert_eq!(ran.load(Ordering::SeqCst), 1);
}

#[test]
fn test_detaching_menu_closes_it() {
    let table = table_with_menu();
    table.open_menu(0, 0, 0);
    table.set_context_menu(None);
    assert!(table.menu_state().is_none());
    assert!(!table.has_context_menu());
}
