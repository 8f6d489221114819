use pagenav_engine::VisualTree;
use ratatui::layout::Rect;

/// Cursor and scroll position for the page list.
///
/// The cursor is the keyboard focus and is independent of the widget's
/// selected page, which only changes on activation.
#[derive(Debug, Default, Clone)]
pub struct NavListState {
    cursor: usize,
    offset: usize,
    len: usize,
    /// Last rendered area of the list; used for mouse hit testing.
    pub last_area: Rect,
    /// Row areas of the visible entries, starting at `offset`.
    pub per_item_areas: Vec<Rect>,
}

impl NavListState {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Aligns with a freshly rendered tree. The cursor stays on `cursor_id`
    /// when that page survived, otherwise it moves to the selected page.
    pub fn sync(&mut self, visual: &VisualTree, cursor_id: Option<&str>) {
        self.len = visual.len();
        let retained = cursor_id.and_then(|id| visual.entries.iter().position(|entry| entry.page_id == id));
        self.cursor = retained
            .or_else(|| visual.selected_index())
            .unwrap_or(0)
            .min(self.len.saturating_sub(1));
        self.offset = self.offset.min(self.cursor);
    }

    /// Moves the cursor by one row, wrapping at either end.
    pub fn cycle(&mut self, forward: bool) {
        if self.len == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1) % self.len
        } else {
            (self.cursor + self.len - 1) % self.len
        };
    }

    /// Moves the cursor by `delta` rows without wrapping.
    pub fn step(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let last = self.len - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn first(&mut self) {
        self.cursor = 0;
    }

    pub fn last(&mut self) {
        self.cursor = self.len.saturating_sub(1);
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.len {
            self.cursor = index;
        }
    }

    /// Scrolls so the cursor is inside a window of `height` rows.
    pub fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
        let max_offset = self.len.saturating_sub(height);
        self.offset = self.offset.min(max_offset);
    }
}
