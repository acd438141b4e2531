//! Table rendering.
//!
//! Draws header, body rows, pagination footer, overlays, scroll-shadow
//! markers, and the context menu into a ratatui frame, and records the
//! screen regions used afterwards for mouse hit mapping.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::menu::clamp_into;
use crate::theme::TableTheme;

use super::item::{Alignment, TableRow};
use super::state::{Table, TableAreas};

impl<T: TableRow> Table<T> {
    /// Render the table into `area`.
    ///
    /// Also records the region geometry consumed by
    /// [`handle_mouse`](Table::handle_mouse), and pushes the measured body
    /// viewport back into the widget (which recomputes the edge flags when
    /// the dimensions changed).
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &TableTheme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let frame_area = frame.area();
        let Ok(mut g) = self.inner.write() else {
            return;
        };

        let has_footer = g.page.is_some() && area.height >= 3;
        let footer_height = u16::from(has_footer);
        let header_area = Rect::new(area.x, area.y, area.width, 1);
        let body_area = Rect::new(
            area.x,
            area.y + 1,
            area.width,
            area.height.saturating_sub(1 + footer_height),
        );
        let footer_area = if has_footer {
            Rect::new(area.x, body_area.bottom(), area.width, 1)
        } else {
            Rect::default()
        };

        // Dimension change: recompute edges immediately, outside the throttle.
        if g.viewport_width != body_area.width || g.viewport_height != body_area.height {
            g.viewport_width = body_area.width;
            g.viewport_height = body_area.height;
            g.clamp_scroll();
            g.recompute_edges();
        }

        let gutter = g.checkbox_offset();
        let columns_width = area.width.saturating_sub(gutter);
        let buf = frame.buffer_mut();

        // -- header ----------------------------------------------------------
        let mut header_style = Style::default()
            .fg(theme.header_fg)
            .bg(theme.header_bg)
            .add_modifier(Modifier::BOLD);
        if g.edges.shadow_top() {
            // Content is clipped under the header.
            header_style = header_style.add_modifier(Modifier::UNDERLINED);
        }
        buf.set_style(header_area, header_style);

        if gutter > 0 {
            let all_selected = !g.rows.is_empty()
                && g.rows.iter().all(|r| g.selection.is_selected(&r.key()));
            let mark = if all_selected { "■ " } else { "□ " };
            buf.set_stringn(area.x, area.y, mark, gutter as usize, header_style);
        }

        let mut header_line = String::new();
        for (i, col) in g.columns.iter().enumerate() {
            if !col.visible {
                continue;
            }
            let mut label = col.header.clone();
            if g.sort_enabled
                && col.sortable
                && let Some(status) = g.sort
                && status.column == i
            {
                label = format!("{label} {}", status.direction.indicator());
            }
            header_line.push_str(&fit(&label, col.width.saturating_sub(1), col.align));
            header_line.push(' ');
        }
        let header_text = skip_cols(&header_line, g.scroll_x);
        buf.set_stringn(
            area.x + gutter,
            area.y,
            &header_text,
            columns_width as usize,
            header_style,
        );

        // Accent the active sort column's header region.
        if g.sort_enabled
            && let Some(status) = g.sort
        {
            let mut col_x = 0i32;
            for (i, col) in g.columns.iter().enumerate() {
                if !col.visible {
                    continue;
                }
                if i == status.column {
                    let start = col_x - g.scroll_x as i32;
                    let end = start + col.width as i32;
                    let clip_start = start.max(0) as u16;
                    let clip_end = (end.max(0) as u16).min(columns_width);
                    if clip_end > clip_start {
                        let rect = Rect::new(
                            area.x + gutter + clip_start,
                            area.y,
                            clip_end - clip_start,
                            1,
                        );
                        buf.set_style(rect, header_style.fg(theme.accent));
                    }
                    break;
                }
                col_x += col.width as i32;
            }
        }

        // -- body ------------------------------------------------------------
        if body_area.height > 0 {
            let range = g.visible_range();
            for index in range {
                let row_top = (index as u32)
                    .saturating_mul(T::HEIGHT as u32)
                    .min(u16::MAX as u32) as u16;
                let y = body_area.y + row_top.saturating_sub(g.scroll_y);
                if y >= body_area.bottom() {
                    break;
                }
                let height = T::HEIGHT.min(body_area.bottom() - y);
                let row_area = Rect::new(area.x, y, area.width, height);

                let Some(record) = g.rows.get(index) else {
                    break;
                };
                let selected = g.selection.is_selected(&record.key());
                let focused = g.cursor == Some(index);
                let style = if focused {
                    Style::default().fg(theme.cursor_fg).bg(theme.cursor_bg)
                } else if selected {
                    Style::default().fg(theme.selected_fg).bg(theme.selected_bg)
                } else {
                    Style::default().fg(theme.row_fg)
                };
                buf.set_style(row_area, style);

                if gutter > 0 {
                    let mark = if selected { "■ " } else { "□ " };
                    buf.set_stringn(area.x, y, mark, gutter as usize, style);
                }

                let mut line = String::new();
                for (i, col) in g.columns.iter().enumerate() {
                    if !col.visible {
                        continue;
                    }
                    let text = record.cell(i);
                    line.push_str(&fit(&text, col.width.saturating_sub(1), col.align));
                    line.push(' ');
                }
                let text = skip_cols(&line, g.scroll_x);
                buf.set_stringn(
                    area.x + gutter,
                    y,
                    &text,
                    columns_width as usize,
                    style,
                );
            }

            // Empty state.
            if g.rows.is_empty() && !g.loading {
                center_text(buf, body_area, "No records", Style::default().fg(theme.muted));
            }

            // Loading overlay: dim the body, announce the fetch.
            if g.loading {
                buf.set_style(body_area, Style::default().add_modifier(Modifier::DIM));
                center_text(
                    buf,
                    body_area,
                    "Loading…",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                );
            }

            // Shadow markers for the remaining clipped directions.
            let marker = Style::default().fg(theme.muted);
            let mid_y = body_area.y + body_area.height / 2;
            if g.edges.shadow_bottom() {
                buf.set_stringn(
                    body_area.x + body_area.width / 2,
                    body_area.bottom() - 1,
                    "▾",
                    1,
                    marker,
                );
            }
            if g.edges.shadow_left() {
                buf.set_stringn(body_area.x + gutter, mid_y, "◂", 1, marker);
            }
            if g.edges.shadow_right() {
                buf.set_stringn(body_area.right() - 1, mid_y, "▸", 1, marker);
            }
        }

        // -- footer ----------------------------------------------------------
        let mut prev_button = Rect::default();
        let mut next_button = Rect::default();
        if has_footer
            && let Some(page) = g.page
        {
            buf.set_style(footer_area, Style::default().bg(theme.header_bg));

            let prev_label = "‹ Prev";
            let next_label = "Next ›";
            let prev_style = if page.has_prev() {
                Style::default().fg(theme.header_fg)
            } else {
                Style::default().fg(theme.muted)
            };
            let next_style = if page.has_next() {
                Style::default().fg(theme.header_fg)
            } else {
                Style::default().fg(theme.muted)
            };
            prev_button = Rect::new(footer_area.x, footer_area.y, 6, 1);
            buf.set_stringn(prev_button.x, prev_button.y, prev_label, 6, prev_style);

            let next_x = footer_area.right().saturating_sub(6);
            next_button = Rect::new(next_x, footer_area.y, 6, 1);
            buf.set_stringn(next_button.x, next_button.y, next_label, 6, next_style);

            let label = format!(
                "page {} of {} · {} records",
                page.page,
                page.page_count(),
                page.total
            );
            center_text(buf, footer_area, &label, Style::default().fg(theme.muted));
        }

        // -- context menu ----------------------------------------------------
        let mut menu_rect = Rect::default();
        let menu_target = g.menu.as_ref().and_then(|state| {
            let config = g.menu_config.clone()?;
            let record = g
                .rows
                .iter()
                .find(|r| r.key() == state.row_key)
                .cloned()?;
            Some((state.clone(), config, record))
        });
        if let Some((state, config, record)) = menu_target {
            let entries: Vec<_> = config
                .items()
                .iter()
                .filter(|item| item.is_visible(&record))
                .collect();
            if !entries.is_empty() {
                let inner_width = entries
                    .iter()
                    .map(|item| {
                        let icon = item.icon_str().map(|i| i.width() + 1).unwrap_or(0);
                        icon + item.title().width()
                    })
                    .max()
                    .unwrap_or(0) as u16;
                let width = (inner_width + 4).max(12);
                let height = entries.len() as u16 + 2;
                menu_rect = clamp_into(state.x, state.y, width, height, frame_area);

                Clear.render(menu_rect, buf);
                Block::bordered()
                    .border_style(Style::default().fg(theme.menu_border))
                    .style(Style::default().bg(theme.menu_bg))
                    .render(menu_rect, buf);

                for (i, item) in entries.iter().enumerate() {
                    let y = menu_rect.y + 1 + i as u16;
                    if y >= menu_rect.bottom().saturating_sub(1) {
                        break;
                    }
                    let style = if item.is_disabled(&record) {
                        Style::default().fg(theme.menu_disabled).bg(theme.menu_bg)
                    } else {
                        Style::default()
                            .fg(item.color_value().unwrap_or(theme.menu_fg))
                            .bg(theme.menu_bg)
                    };
                    let text = match item.icon_str() {
                        Some(icon) => format!("{icon} {}", item.title()),
                        None => item.title().to_string(),
                    };
                    buf.set_stringn(
                        menu_rect.x + 2,
                        y,
                        &text,
                        menu_rect.width.saturating_sub(3) as usize,
                        style,
                    );
                }
            }
        }

        g.areas = TableAreas {
            table: area,
            header: header_area,
            body: body_area,
            prev_button,
            next_button,
            menu: menu_rect,
        };
        drop(g);
        self.clear_dirty();
    }
}

/// Truncate or pad `text` to exactly `width` display columns.
fn fit(text: &str, width: u16, align: Alignment) -> String {
    let width = width as usize;
    if width == 0 {
        return String::new();
    }
    let text_width = text.width();
    if text_width > width {
        let mut out = String::with_capacity(width);
        let mut used = 0usize;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width.saturating_sub(1) {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push('…');
        for _ in 0..width.saturating_sub(used + 1) {
            out.push(' ');
        }
        return out;
    }
    let pad = width - text_width;
    match align {
        Alignment::Left => format!("{text}{:pad$}", ""),
        Alignment::Right => format!("{:pad$}{text}", ""),
        Alignment::Center => {
            let left = pad / 2;
            let right = pad - left;
            format!("{:left$}{text}{:right$}", "", "")
        }
    }
}

/// Drop the first `skip` display columns of a composed row string. A wide
/// character straddling the cut is replaced by spaces.
fn skip_cols(s: &str, skip: u16) -> String {
    if skip == 0 {
        return s.to_string();
    }
    let mut remaining = skip as usize;
    let mut out = String::new();
    let mut chars = s.chars();
    for ch in chars.by_ref() {
        let w = ch.width().unwrap_or(0);
        if w > remaining {
            for _ in 0..(w - remaining) {
                out.push(' ');
            }
            remaining = 0;
        } else {
            remaining -= w;
        }
        if remaining == 0 {
            break;
        }
    }
    out.extend(chars);
    out
}

/// Write `text` centered in `rect`.
fn center_text(buf: &mut ratatui::buffer::Buffer, rect: Rect, text: &str, style: Style) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let text_width = text.width().min(rect.width as usize) as u16;
    let x = rect.x + (rect.width - text_width) / 2;
    let y = rect.y + rect.height / 2;
    buf.set_stringn(x, y, text, text_width as usize, style);
}
