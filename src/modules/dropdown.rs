//! Single-open overlay tracking
//!
//! At most one dropdown is open at a time. Opening another key replaces the
//! current one. The renderer records where the open overlay was drawn so a
//! click that lands outside it can dismiss it.

use ratatui::layout::Rect;

#[derive(Debug, Clone)]
pub struct DropdownLayer<K> {
    open: Option<K>,
    bounds: Option<Rect>,
}

impl<K> Default for DropdownLayer<K> {
    fn default() -> Self {
        Self {
            open: None,
            bounds: None,
        }
    }
}

impl<K: Copy + PartialEq> DropdownLayer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_key(&self) -> Option<K> {
        self.open
    }

    pub fn is_open(&self, key: K) -> bool {
        self.open == Some(key)
    }

    pub fn any_open(&self) -> bool {
        self.open.is_some()
    }

    /// Opens `key` (closing any other) or closes it if it is already open.
    /// Returns whether `key` is open afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.is_open(key) {
            self.dismiss();
            false
        } else {
            self.open = Some(key);
            self.bounds = None;
            true
        }
    }

    pub fn dismiss(&mut self) -> Option<K> {
        self.bounds = None;
        self.open.take()
    }

    /// Records where the open overlay was drawn.
    pub fn set_bounds(&mut self, area: Rect) {
        if self.open.is_some() {
            self.bounds = Some(area);
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.bounds
            .map(|area| rect_contains(area, col, row))
            .unwrap_or(false)
    }

    /// Closes the open overlay when `(col, row)` is outside its bounds.
    /// Returns `true` if something was dismissed.
    pub fn dismiss_outside(&mut self, col: u16, row: u16) -> bool {
        if self.open.is_none() || self.contains(col, row) {
            return false;
        }
        self.dismiss();
        true
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
