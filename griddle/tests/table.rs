//! Tests for table state: cursor, sorting, pagination, scrolling, and the
//! event queue.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use griddle::Table;
use griddle::events::{EventResult, TableEvent};
use griddle::page::PageState;
use griddle::selection::SelectionMode;
use griddle::sort::{SortDirection, SortStatus};
use griddle::table::{Column, TableRow};

#[derive(Debug, Clone)]
struct Record {
    id: u64,
    name: String,
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
        })
        .collect()
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("Id", 6).sortable(),
        Column::new("Name", 20).sortable(),
        Column::new("Notes", 30),
    ]
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

#[test]
fn test_ids_are_unique() {
    let a = Table::<Record>::new(columns());
    let b = Table::<Record>::new(columns());
    assert_ne!(a.id(), b.id());
    assert_ne!(a.id_string(), b.id_string());
}

#[test]
fn test_clones_share_state() {
    let table = Table::with_rows(columns(), records(3));
    let clone = table.clone();
    clone.set_rows(records(7));
    assert_eq!(table.len(), 7);
    assert_eq!(table.id(), clone.id());
}

#[test]
fn test_cursor_keys_move_and_report() {
    let table = Table::with_rows(columns(), records(5));
    assert!(table.handle_key(&key(KeyCode::Down)).is_handled());
    assert_eq!(table.cursor(), Some(0));
    table.handle_key(&key(KeyCode::Down));
    table.handle_key(&key(KeyCode::Down));
    assert_eq!(table.cursor(), Some(2));
    table.handle_key(&key(KeyCode::Up));
    assert_eq!(table.cursor(), Some(1));

    table.handle_key(&key(KeyCode::End));
    assert_eq!(table.cursor(), Some(4));
    table.handle_key(&key(KeyCode::Home));
    assert_eq!(table.cursor(), Some(0));

    let moves = table
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, TableEvent::CursorMove { .. }))
        .count();
    assert_eq!(moves, 6);
}

#[test]
fn test_cursor_stops_at_bounds() {
    let table = Table::with_rows(columns(), records(2));
    table.handle_key(&key(KeyCode::Up));
    assert_eq!(table.cursor(), Some(0));
    assert_eq!(table.handle_key(&key(KeyCode::Up)), EventResult::Ignored);
    assert_eq!(table.cursor(), Some(0));
}

#[test]
fn test_page_keys_jump_by_viewport() {
    let table = Table::with_rows(columns(), records(50));
    table.set_viewport(60, 10);
    table.handle_key(&key(KeyCode::Down));
    table.handle_key(&key(KeyCode::PageDown));
    assert_eq!(table.cursor(), Some(10));
    table.handle_key(&key(KeyCode::PageUp));
    assert_eq!(table.cursor(), Some(0));
}

#[test]
fn test_enter_activates_cursor_row() {
    let table = Table::with_rows(columns(), records(5));
    table.handle_key(&key(KeyCode::Down));
    table.drain_events();
    table.handle_key(&key(KeyCode::Enter));
    let events = table.drain_events();
    assert!(matches!(
        &events[..],
        [TableEvent::Activate { key, index: 0 }] if key == "1"
    ));
}

#[test]
fn test_space_toggles_selection_at_cursor() {
    let table =
        Table::with_rows(columns(), records(5)).with_selection_mode(SelectionMode::Multiple);
    table.handle_key(&key(KeyCode::Down));
    table.handle_key(&key(KeyCode::Char(' ')));
    assert_eq!(table.selected_keys(), vec!["1".to_string()]);
    table.handle_key(&key(KeyCode::Char(' ')));
    assert!(table.selected_keys().is_empty());
}

#[test]
fn test_ctrl_a_toggles_all() {
    let table =
        Table::with_rows(columns(), records(4)).with_selection_mode(SelectionMode::Multiple);
    table.handle_key(&ctrl(KeyCode::Char('a')));
    assert_eq!(table.selected_keys().len(), 4);
    table.handle_key(&ctrl(KeyCode::Char('a')));
    assert!(table.selected_keys().is_empty());
}

#[test]
fn test_esc_clears_selection() {
    let table =
        Table::with_rows(columns(), records(4)).with_selection_mode(SelectionMode::Multiple);
    table.toggle_select_at(1);
    assert!(table.handle_key(&key(KeyCode::Esc)).is_handled());
    assert!(table.selected_keys().is_empty());
    assert_eq!(table.handle_key(&key(KeyCode::Esc)), EventResult::Ignored);
}

#[test]
fn test_single_mode_keeps_at_most_one_row() {
    let table =
        Table::with_rows(columns(), records(4)).with_selection_mode(SelectionMode::Single);
    table.toggle_select_at(0);
    table.toggle_select_at(2);
    assert_eq!(table.selected_keys(), vec!["3".to_string()]);
    table.toggle_select_at(2);
    assert!(table.selected_keys().is_empty());
}

#[test]
fn test_row_click_modifier_matrix() {
    let table =
        Table::with_rows(columns(), records(6)).with_selection_mode(SelectionMode::Multiple);

    // Plain click activates without selecting.
    table.on_row_click(0, false, false);
    assert!(table.selected_keys().is_empty());

    // Ctrl+click toggles and anchors.
    table.on_row_click(1, true, false);
    assert_eq!(table.selected_keys(), vec!["2".to_string()]);
    assert_eq!(table.selection_anchor(), Some(1));

    // Shift+click extends the range from the anchor.
    table.on_row_click(4, false, true);
    assert_eq!(table.selected_keys().len(), 4);
    assert_eq!(table.cursor(), Some(4));
}

#[test]
fn test_sort_toggle_cycles_direction() {
    let table = Table::with_rows(columns(), records(5)).with_sorting(None);
    let status = table.toggle_sort(0).unwrap();
    assert_eq!(status, SortStatus::ascending(0));
    let status = table.toggle_sort(0).unwrap();
    assert_eq!(status.direction, SortDirection::Descending);
    // A different column restarts ascending.
    let status = table.toggle_sort(1).unwrap();
    assert_eq!(status, SortStatus::ascending(1));

    let changes = table
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, TableEvent::SortChange { .. }))
        .count();
    assert_eq!(changes, 3);
}

#[test]
fn test_sort_ignores_unsortable_column_and_disabled_table() {
    let table = Table::with_rows(columns(), records(5)).with_sorting(None);
    assert!(table.toggle_sort(2).is_none());

    let plain = Table::with_rows(columns(), records(5));
    assert!(plain.toggle_sort(0).is_none());
    assert!(plain.drain_events().is_empty());
}

#[test]
fn test_pagination_moves_and_clamps() {
    let table = Table::with_rows(columns(), records(10))
        .with_pagination(PageState::new(10, 35));
    assert_eq!(table.page_state().map(|p| p.page_count()), Some(4));

    assert!(table.next_page());
    assert!(table.go_to_page(4));
    assert!(!table.next_page());
    assert!(!table.go_to_page(4));

    let pages: Vec<usize> = table
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            TableEvent::PageChange { page } => Some(page),
            _ => None,
        })
        .collect();
    assert_eq!(pages, vec![2, 4]);
}

#[test]
fn test_page_change_resets_vertical_scroll() {
    let table = Table::with_rows(columns(), records(40))
        .with_pagination(PageState::new(40, 80));
    table.set_viewport(60, 10);
    table.scroll_by(0, 15);
    assert_eq!(table.scroll_offset().1, 15);
    table.go_to_page(2);
    assert_eq!(table.scroll_offset().1, 0);
}

#[test]
fn test_visible_range_follows_scroll() {
    let table = Table::with_rows(columns(), records(100));
    table.set_viewport(60, 10);
    assert_eq!(table.visible_row_range(), 0..11);
    table.scroll_by(0, 20);
    assert_eq!(table.visible_row_range(), 20..31);
}

#[test]
fn test_scroll_clamps_to_content() {
    let table = Table::with_rows(columns(), records(20));
    table.set_viewport(30, 10);
    table.scroll_by(1000, 1000);
    let (sx, sy) = table.scroll_offset();
    let (cw, ch) = table.content_size();
    assert_eq!(sx, cw - 30);
    assert_eq!(sy, ch - 10);
    table.scroll_by(-1000, -1000);
    assert_eq!(table.scroll_offset(), (0, 0));
}

#[test]
fn test_edges_follow_scroll_position() {
    let table = Table::with_rows(columns(), records(30));
    table.set_viewport(60, 10);
    let edges = table.edges();
    assert!(edges.at_top);
    assert!(!edges.at_bottom);

    // Leading edge of the throttle reflects the first scroll immediately.
    table.scroll_by(0, 20);
    let edges = table.edges();
    assert!(!edges.at_top);
    assert!(edges.at_bottom);
}

#[test]
fn test_loading_forces_all_edges() {
    let table = Table::with_rows(columns(), records(30));
    table.set_viewport(60, 10);
    table.scroll_by(0, 5);
    assert!(!table.edges().at_top);

    table.set_loading(true);
    let edges = table.edges();
    assert!(edges.at_top && edges.at_bottom && edges.at_left && edges.at_right);

    table.set_loading(false);
    assert!(!table.edges().at_top);
}

#[test]
fn test_index_from_viewport_y_accounts_for_scroll() {
    let table = Table::with_rows(columns(), records(50));
    table.set_viewport(60, 10);
    assert_eq!(table.index_from_viewport_y(3), Some(3));
    table.scroll_by(0, 12);
    assert_eq!(table.index_from_viewport_y(3), Some(15));
    assert_eq!(table.index_from_viewport_y(45), None);
}

#[test]
fn test_column_from_x_skips_gutter_and_scroll() {
    let table =
        Table::with_rows(columns(), records(5)).with_selection_mode(SelectionMode::Multiple);
    table.set_viewport(20, 10);

    // x inside the 2-cell selection gutter maps to no column.
    assert_eq!(table.column_from_x(1), None);
    assert_eq!(table.column_from_x(2), Some(0));
    assert_eq!(table.column_from_x(7), Some(0));
    assert_eq!(table.column_from_x(8), Some(1));

    table.scroll_by(10, 0);
    // Gutter is sticky; the columns underneath have shifted.
    assert_eq!(table.column_from_x(2), Some(1));
}

#[test]
fn test_hidden_columns_do_not_take_space() {
    let cols = vec![
        Column::new("Id", 6),
        Column::new("Secret", 10).hidden(),
        Column::new("Name", 20),
    ];
    let table = Table::with_rows(cols, records(3));
    assert_eq!(table.content_size().0, 26);
    assert_eq!(table.column_from_x(6), Some(2));
    assert_eq!(table.visible_columns().len(), 2);
}

#[test]
fn test_set_rows_clamps_cursor_and_scroll() {
    let table = Table::with_rows(columns(), records(50));
    table.set_viewport(60, 10);
    table.set_cursor(45);
    table.scroll_by(0, 35);

    table.set_rows(records(5));
    assert_eq!(table.cursor(), Some(4));
    assert_eq!(table.scroll_offset(), (0, 0));
}

#[test]
fn test_content_height_saturates_for_huge_datasets() {
    let table = Table::with_rows(columns(), records(70_000));
    assert_eq!(table.content_size().1, u16::MAX);

    table.set_viewport(60, 10);
    table.scroll_by(0, 30_000);
    assert_eq!(table.scroll_offset().1, 30_000);

    table.set_cursor(69_999);
    table.scroll_to_cursor();
    // Scroll stays inside the saturated bounds rather than wrapping.
    assert_eq!(table.scroll_offset().1, u16::MAX - 10);
}

#[test]
fn test_dirty_flag_tracks_mutations() {
    let table = Table::with_rows(columns(), records(3));
    table.clear_dirty();
    assert!(!table.is_dirty());
    table.set_cursor(1);
    assert!(table.is_dirty());
    table.clear_dirty();
    table.set_cursor(1);
    assert!(!table.is_dirty());
}

#[test]
fn test_set_selected_keys_emits_no_event() {
    let table =
        Table::with_rows(columns(), records(4)).with_selection_mode(SelectionMode::Multiple);
    table.drain_events();
    table.set_selected_keys(vec!["2".to_string(), "3".to_string()]);
    assert!(table.drain_events().is_empty());
    assert!(table.is_selected_at(1));
    assert!(!table.is_selected_at(0));
}
