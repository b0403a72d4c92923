//! Scroll window computation for list screens.
//!
//! A list screen has a fixed number of lines. When the list does not fit,
//! one line above and/or below the items is spent on a "N more" indicator.
//! Whether an indicator is needed depends on the window bounds, and the
//! window bounds depend on how many lines the indicators take, so the
//! window is found by iterating to a fixed point.

/// The visible slice of a list plus the number of hidden items on each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible index (inclusive)
    pub start: usize,
    /// Last visible index (exclusive)
    pub end: usize,
    /// Items hidden above the window (always equal to `start`)
    pub more_above: usize,
    /// Items hidden below the window (always equal to `total - end`)
    pub more_below: usize,
}

impl Viewport {
    /// Number of items inside the window
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Index range of the visible items
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Lines used by items and indicators together
    pub fn lines_used(&self) -> usize {
        self.len() + usize::from(self.more_above > 0) + usize::from(self.more_below > 0)
    }

    fn from_window(start: usize, end: usize, total: usize) -> Self {
        Viewport {
            start,
            end,
            more_above: start,
            more_below: total - end,
        }
    }
}

/// Upper bound on refinement rounds before falling back.
///
/// Indicator need only ever grows as capacity shrinks, so two changes is the
/// most that can happen.
const MAX_ATTEMPTS: usize = 3;

/// Compute the window of a `total`-item list that keeps `cursor` visible
/// within `max_visible` lines.
///
/// The cursor is clamped into the list and `max_visible == 0` is treated as 1.
/// When `max_visible` is 1 or 2 and indicators are needed, one item is still
/// shown even though items plus indicators then exceed `max_visible`.
pub fn calc_viewport(total: usize, cursor: usize, max_visible: usize) -> Viewport {
    let max_visible = max_visible.max(1);
    if total == 0 {
        return Viewport::default();
    }
    let cursor = cursor.min(total - 1);

    if total <= max_visible {
        return Viewport::from_window(0, total, total);
    }

    let (start, end) = settle(total, cursor, max_visible).unwrap_or_else(|| {
        let capacity = item_capacity(max_visible, true, true);
        anchor_bottom(total, cursor, capacity)
    });
    Viewport::from_window(start, end, total)
}

/// Iterate until the indicators implied by the window match the indicators
/// its capacity was derived from. `None` if that never happens.
fn settle(total: usize, cursor: usize, max_visible: usize) -> Option<(usize, usize)> {
    let mut window = anchor_bottom(total, cursor, max_visible);
    for _ in 0..MAX_ATTEMPTS {
        let assumed = indicators(window, total);
        let capacity = item_capacity(max_visible, assumed.0, assumed.1);
        let next = anchor_bottom(total, cursor, capacity);
        if indicators(next, total) == assumed {
            return Some(next);
        }
        window = next;
    }
    None
}

/// Whether a "more above" and a "more below" line are needed
fn indicators((start, end): (usize, usize), total: usize) -> (bool, bool) {
    (start > 0, end < total)
}

/// Lines left for items once indicator lines are reserved, never below 1
fn item_capacity(max_visible: usize, above: bool, below: bool) -> usize {
    max_visible
        .saturating_sub(usize::from(above) + usize::from(below))
        .max(1)
}

/// A `capacity`-wide window with the cursor on its last row, shifted back
/// from the end of the list when it would overrun it.
fn anchor_bottom(total: usize, cursor: usize, capacity: usize) -> (usize, usize) {
    let mut start = (cursor + 1).saturating_sub(capacity);
    let mut end = start + capacity;
    if end > total {
        end = total;
        start = total.saturating_sub(capacity);
    }
    (start, end)
}
