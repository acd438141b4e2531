//! Selection state for the table widget.
//!
//! Selection is keyed on record keys, not indices, so it stays meaningful
//! when the application re-sorts or re-pages the dataset. Range selection
//! works over an anchor index into the current key sequence and is reset
//! whenever that sequence changes.

/// Selection mode for the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// No selection UI.
    #[default]
    None,
    /// At most one row selected.
    Single,
    /// Multiple rows (Ctrl+click toggle, Shift+click range, toggle-all).
    Multiple,
}

/// Key-based selection with a shift-click anchor.
///
/// The selection is an ordered, de-duplicated list of record keys. A record
/// counts as selected iff its key appears in this list; reference identity
/// plays no part. The anchor is the index of the most recently explicitly
/// toggled row in the current key sequence.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Selected keys in the order they were added.
    keys: Vec<String>,
    /// Index of the last explicitly toggled row.
    anchor: Option<usize>,
    /// The key sequence of the currently displayed dataset.
    dataset: Vec<String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the key sequence of the displayed dataset.
    ///
    /// If the sequence differs from the previous one the anchor resets, so a
    /// stale index never drives a range computation against different rows.
    /// Selected keys are kept: they may reappear on another page.
    pub fn sync_dataset(&mut self, keys: Vec<String>) {
        if self.dataset != keys {
            self.anchor = None;
            self.dataset = keys;
        }
    }

    /// Replace the selected key list wholesale (application-supplied state).
    pub fn set_selected(&mut self, keys: Vec<String>) {
        self.keys.clear();
        for key in keys {
            if !self.keys.contains(&key) {
                self.keys.push(key);
            }
        }
    }

    /// The selected keys, in insertion order.
    pub fn selected_keys(&self) -> &[String] {
        &self.keys
    }

    /// Check whether a key is selected.
    pub fn is_selected(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The anchor index for range selection, if one is set.
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Clear the selection and the anchor.
    /// Returns the keys that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        self.anchor = None;
        std::mem::take(&mut self.keys)
    }

    /// Toggle the row at `index` in the current dataset and move the anchor
    /// there. Returns (added, removed) keys.
    pub fn toggle_at(&mut self, index: usize) -> (Vec<String>, Vec<String>) {
        let Some(key) = self.dataset.get(index).cloned() else {
            return (vec![], vec![]);
        };
        self.anchor = Some(index);
        if let Some(pos) = self.keys.iter().position(|k| *k == key) {
            self.keys.remove(pos);
            (vec![], vec![key])
        } else {
            self.keys.push(key.clone());
            (vec![key], vec![])
        }
    }

    /// Toggle every row of the current dataset at once.
    ///
    /// If every dataset key is already selected, all of them are removed;
    /// otherwise the dataset is unioned into the selection. Keys selected on
    /// other pages are untouched either way. Returns (added, removed) keys.
    pub fn toggle_all(&mut self) -> (Vec<String>, Vec<String>) {
        if self.dataset.is_empty() {
            return (vec![], vec![]);
        }
        let dataset = &self.dataset;
        let all_selected = dataset.iter().all(|k| self.keys.contains(k));
        if all_selected {
            let removed: Vec<String> = self
                .keys
                .iter()
                .filter(|k| dataset.contains(*k))
                .cloned()
                .collect();
            self.keys.retain(|k| !dataset.contains(k));
            (vec![], removed)
        } else {
            let mut added = Vec::new();
            for key in &self.dataset {
                if !self.keys.contains(key) {
                    self.keys.push(key.clone());
                    added.push(key.clone());
                }
            }
            (added, vec![])
        }
    }

    /// Shift-click on the row at `index`.
    ///
    /// With no anchor set this toggles only the clicked row and leaves the
    /// anchor unset. Otherwise the clicked row's new state (its toggled
    /// state) is replicated across the whole inclusive interval between
    /// anchor and `index`, in either click order. The anchor never moves on
    /// shift-click; only an explicit toggle arms it. Returns
    /// (added, removed) keys.
    pub fn shift_click(&mut self, index: usize) -> (Vec<String>, Vec<String>) {
        let Some(anchor) = self.anchor else {
            let Some(key) = self.dataset.get(index).cloned() else {
                return (vec![], vec![]);
            };
            return if let Some(pos) = self.keys.iter().position(|k| *k == key) {
                self.keys.remove(pos);
                (vec![], vec![key])
            } else {
                self.keys.push(key.clone());
                (vec![key], vec![])
            };
        };
        if index >= self.dataset.len() {
            return (vec![], vec![]);
        }
        let clicked = self.dataset[index].clone();
        let select = !self.is_selected(&clicked);
        let (lo, hi) = if anchor <= index {
            (anchor, index)
        } else {
            (index, anchor)
        };
        let hi = hi.min(self.dataset.len() - 1);

        let mut added = Vec::new();
        let mut removed = Vec::new();
        for key in &self.dataset[lo..=hi] {
            let pos = self.keys.iter().position(|k| k == key);
            match (select, pos) {
                (true, None) => {
                    self.keys.push(key.clone());
                    added.push(key.clone());
                }
                (false, Some(pos)) => {
                    self.keys.remove(pos);
                    removed.push(key.clone());
                }
                _ => {}
            }
        }
        (added, removed)
    }
}
