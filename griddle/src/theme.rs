//! Color scheme for the table widget.

use ratatui::style::Color;

/// Colors used by the table renderer.
///
/// The defaults are a dark scheme; embedders can construct their own.
#[derive(Debug, Clone)]
pub struct TableTheme {
    pub header_fg: Color,
    pub header_bg: Color,
    pub row_fg: Color,
    /// Row under the cursor.
    pub cursor_bg: Color,
    pub cursor_fg: Color,
    /// Selected rows.
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// Secondary text: footers, overlays, shadow markers.
    pub muted: Color,
    /// Highlights: sort indicators, loading text.
    pub accent: Color,
    pub menu_fg: Color,
    pub menu_bg: Color,
    pub menu_border: Color,
    pub menu_disabled: Color,
}

impl Default for TableTheme {
    fn default() -> Self {
        Self {
            header_fg: Color::Rgb(0xE0, 0xE0, 0xE6),
            header_bg: Color::Rgb(0x23, 0x23, 0x2E),
            row_fg: Color::Rgb(0xC8, 0xC8, 0xD0),
            cursor_bg: Color::Rgb(0xA2, 0x77, 0xFF),
            cursor_fg: Color::Rgb(0x15, 0x15, 0x1E),
            selected_bg: Color::Rgb(0x6E, 0x54, 0x94),
            selected_fg: Color::Rgb(0x15, 0x15, 0x1E),
            muted: Color::Rgb(0x77, 0x77, 0x85),
            accent: Color::Rgb(0xA2, 0x77, 0xFF),
            menu_fg: Color::Rgb(0xE0, 0xE0, 0xE6),
            menu_bg: Color::Rgb(0x1B, 0x1B, 0x24),
            menu_border: Color::Rgb(0x6E, 0x54, 0x94),
            menu_disabled: Color::Rgb(0x55, 0x55, 0x60),
        }
    }
}
