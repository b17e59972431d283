//! The pure carousel state machine.

use crate::breakpoints::{CarouselLayout, layout_for};

/// Lifecycle phase, derived from the item count and the window size rather
/// than stored, so it can never drift out of sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    /// No items: nothing renders, no timer runs.
    Idle,
    /// Items present but they all fit in one window: navigation controls
    /// are disabled and no timer runs.
    Paused,
    /// More items than the window holds: auto-advance runs.
    Active,
}

/// Sliding visible window over an ordered sequence.
///
/// Invariant: `current_index ∈ [0, max_index]` after every transition,
/// where `max_index = max(0, item_count - floor(visible_count))`.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    current_index: usize,
    layout: CarouselLayout,
    item_count: usize,
}

impl CarouselState {
    pub fn new(item_count: usize, viewport_width: f32) -> Self {
        Self {
            current_index: 0,
            layout: layout_for(viewport_width),
            item_count,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn layout(&self) -> CarouselLayout {
        self.layout
    }

    pub fn visible_count(&self) -> f32 {
        self.layout.visible_count
    }

    /// Largest valid index: the window's left edge when its right edge sits
    /// on the last item.
    pub fn max_index(&self) -> usize {
        let window = self.layout.visible_count.max(0.0).floor() as usize;
        self.item_count.saturating_sub(window)
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.item_count == 0 {
            CarouselPhase::Idle
        } else if self.item_count as f32 <= self.layout.visible_count {
            CarouselPhase::Paused
        } else {
            CarouselPhase::Active
        }
    }

    /// Whether manual navigation is enabled.
    pub fn can_navigate(&self) -> bool {
        self.phase() == CarouselPhase::Active
    }

    /// Step forward with wrap-around: past the last valid index the window
    /// returns to the start rather than stalling. No-op unless `Active`.
    pub fn advance(&mut self) {
        if !self.can_navigate() {
            return;
        }
        self.current_index = if self.current_index >= self.max_index() {
            0
        } else {
            self.current_index + 1
        };
    }

    /// Step backward with wrap-around. No-op unless `Active`.
    pub fn retreat(&mut self) {
        if !self.can_navigate() {
            return;
        }
        self.current_index = if self.current_index == 0 {
            self.max_index()
        } else {
            self.current_index - 1
        };
    }

    /// Jump to an index, clamped into `[0, max_index]`.
    pub fn go_to(&mut self, index: usize) {
        self.current_index = index.min(self.max_index());
    }

    /// One auto-advance tick; same arithmetic as a manual step.
    pub fn tick(&mut self) {
        self.advance();
    }

    /// Recompute the window from a new viewport width.
    ///
    /// The index is clamped down if it now exceeds the new maximum, never
    /// reset outright: resizing near a breakpoint must not visually jump
    /// back to the first item.
    pub fn set_viewport(&mut self, viewport_width: f32) {
        self.layout = layout_for(viewport_width);
        self.current_index = self.current_index.min(self.max_index());
    }

    /// Length change within the same sequence; the index is clamped, not
    /// reset.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.current_index = self.current_index.min(self.max_index());
    }

    /// A different sequence entirely: the window starts over at the front.
    pub fn replace_sequence(&mut self, count: usize) {
        self.item_count = count;
        self.current_index = 0;
    }
}
