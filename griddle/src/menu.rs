//! Row context menu: item descriptors and open-menu state.
//!
//! At most one menu is open at a time. Opening a new one, refreshing the
//! data, or committing a selection change closes the previous instance.
//! Item visibility, label, and disabled state are predicates over the
//! target record, evaluated at render time.

use std::fmt;

use ratatui::layout::Rect;
use ratatui::style::Color;

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;
type Action<T> = Box<dyn Fn(&T) + Send + Sync>;

/// One entry of a row context menu.
pub struct MenuItem<T> {
    key: String,
    title: String,
    icon: Option<String>,
    color: Option<Color>,
    visible: Option<Predicate<T>>,
    disabled: Option<Predicate<T>>,
    action: Option<Action<T>>,
}

impl<T> MenuItem<T> {
    /// Create an item with a stable key and a title.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            icon: None,
            color: None,
            visible: None,
            disabled: None,
            action: None,
        }
    }

    /// Prefix glyph shown before the title.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Title color override.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Show the item only when the predicate holds for the target record.
    pub fn visible_if(mut self, f: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.visible = Some(Box::new(f));
        self
    }

    /// Grey the item out when the predicate holds for the target record.
    pub fn disabled_if(mut self, f: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.disabled = Some(Box::new(f));
        self
    }

    /// Handler invoked with the target record after the menu closes.
    pub fn on_click(mut self, f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.action = Some(Box::new(f));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon_str(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn color_value(&self) -> Option<Color> {
        self.color
    }

    /// Evaluate the visibility predicate against a record.
    pub fn is_visible(&self, record: &T) -> bool {
        self.visible.as_ref().is_none_or(|f| f(record))
    }

    /// Evaluate the disabled predicate against a record.
    pub fn is_disabled(&self, record: &T) -> bool {
        self.disabled.as_ref().is_some_and(|f| f(record))
    }

    pub(crate) fn run(&self, record: &T) {
        if let Some(action) = &self.action {
            action(record);
        }
    }
}

impl<T> fmt::Debug for MenuItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("key", &self.key)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Context-menu descriptor attached to a table.
pub struct ContextMenu<T> {
    items: Vec<MenuItem<T>>,
    suppress: Option<Predicate<T>>,
}

impl<T> ContextMenu<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            suppress: None,
        }
    }

    /// Append an item.
    pub fn item(mut self, item: MenuItem<T>) -> Self {
        self.items.push(item);
        self
    }

    /// Suppress the menu entirely for rows where the predicate holds.
    pub fn suppress_if(mut self, f: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.suppress = Some(Box::new(f));
        self
    }

    pub fn items(&self) -> &[MenuItem<T>] {
        &self.items
    }

    /// Whether right-click is suppressed for this record.
    pub fn is_suppressed(&self, record: &T) -> bool {
        self.suppress.as_ref().is_some_and(|f| f(record))
    }
}

impl<T> Default for ContextMenu<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ContextMenu<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextMenu")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// The single open menu instance: where it was opened and for which row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    /// Pointer position at open time (screen cells).
    pub x: u16,
    pub y: u16,
    /// Key of the target record.
    pub row_key: String,
    /// Index of the target record at open time.
    pub row_index: usize,
}

/// Clamp a menu of the given size so it stays inside the viewport.
///
/// The menu opens toward the bottom-right of the pointer and is pushed back
/// inside when it would overhang an edge.
pub fn clamp_into(x: u16, y: u16, width: u16, height: u16, viewport: Rect) -> Rect {
    let width = width.min(viewport.width);
    let height = height.min(viewport.height);
    let max_x = viewport.right().saturating_sub(width);
    let max_y = viewport.bottom().saturating_sub(height);
    Rect::new(
        x.clamp(viewport.x, max_x.max(viewport.x)),
        y.clamp(viewport.y, max_y.max(viewport.y)),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::clamp_into;
    use ratatui::layout::Rect;

    #[test]
    fn test_clamp_fits_in_place() {
        let rect = clamp_into(5, 5, 10, 4, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(5, 5, 10, 4));
    }

    #[test]
    fn test_clamp_pushed_back_from_corner() {
        let rect = clamp_into(78, 23, 10, 4, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(70, 20, 10, 4));
    }

    #[test]
    fn test_clamp_oversized_menu_shrinks() {
        let rect = clamp_into(0, 0, 100, 30, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(0, 0, 80, 24));
    }
}
