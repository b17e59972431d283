//! Responsive breakpoint table.
//!
//! Fractional visible counts are deliberate: a window of 1.2 cards shows a
//! sliver of the next card as a scroll affordance on narrow screens.

/// Layout parameters resolved from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    /// How many items the window shows, possibly fractional.
    pub visible_count: f32,
    /// Rendered width of one item, in pixels.
    pub item_width: f32,
    /// Horizontal gap between items, in pixels.
    pub gap: f32,
}

struct Breakpoint {
    min_width: f32,
    layout: CarouselLayout,
}

/// Width thresholds in ascending order; the last row whose threshold the
/// viewport meets wins.
const BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint {
        min_width: 0.0,
        layout: CarouselLayout {
            visible_count: 1.2,
            item_width: 280.0,
            gap: 16.0,
        },
    },
    Breakpoint {
        min_width: 480.0,
        layout: CarouselLayout {
            visible_count: 1.5,
            item_width: 260.0,
            gap: 16.0,
        },
    },
    Breakpoint {
        min_width: 640.0,
        layout: CarouselLayout {
            visible_count: 2.3,
            item_width: 240.0,
            gap: 16.0,
        },
    },
    Breakpoint {
        min_width: 768.0,
        layout: CarouselLayout {
            visible_count: 3.0,
            item_width: 280.0,
            gap: 20.0,
        },
    },
    Breakpoint {
        min_width: 1024.0,
        layout: CarouselLayout {
            visible_count: 4.0,
            item_width: 300.0,
            gap: 20.0,
        },
    },
    Breakpoint {
        min_width: 1280.0,
        layout: CarouselLayout {
            visible_count: 4.5,
            item_width: 320.0,
            gap: 24.0,
        },
    },
];

/// Resolve the layout for a viewport width.
///
/// NaN, infinite, or negative widths are treated as zero and resolve to the
/// narrowest tier, where the item width additionally tracks the viewport
/// (capped at 280px) so one card always fits with its gaps.
pub fn layout_for(viewport_width: f32) -> CarouselLayout {
    let width = if viewport_width.is_finite() && viewport_width > 0.0 {
        viewport_width
    } else {
        0.0
    };
    let mut layout = BREAKPOINTS[0].layout;
    for breakpoint in &BREAKPOINTS[1..] {
        if width >= breakpoint.min_width {
            layout = breakpoint.layout;
        }
    }
    if width < BREAKPOINTS[1].min_width {
        layout.item_width = layout.item_width.min((width - 2.0 * layout.gap).max(0.0));
    }
    layout
}
