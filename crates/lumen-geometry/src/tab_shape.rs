//! Tab silhouette and close-button hit-testing
//!
//! A tab is drawn as a trapezoid whose top edge is narrower than its base. The close
//! button is a small square near the right edge, vertically centred. Its hit region is
//! larger than the drawn glyph so it stays easy to hit with a pointer.
//!
//! These functions are unconditional: whether the close button is currently hidden is
//! tab state, and callers must check it before treating a hit as a click.

use crate::outline::Outline;
use crate::rect::{Point, Rect};

/// Horizontal inset of the top corners relative to the base.
pub const TAB_SIDE_SLANT: f64 = 10.0;

/// Side length of the drawn close button.
pub const CLOSE_BUTTON_SIZE: f64 = 8.0;

/// Distance between the close button's right edge and the tab frame's right edge.
pub const CLOSE_BUTTON_MARGIN: f64 = 10.0;

/// Extra distance around the drawn close button that still counts as a hit.
pub const CLOSE_BUTTON_HIT_TOLERANCE: f64 = 3.0;

pub const TAB_MIN_WIDTH: f64 = 60.0;
pub const TAB_MAX_WIDTH: f64 = 200.0;

/// Gap between neighbouring tabs in the strip.
pub const TAB_SPACING: f64 = 1.0;

/// The visible silhouette of a tab, used for masking and its shadow.
pub fn tab_outline(frame: Rect) -> Outline {
    if frame.is_empty() {
        return Outline::empty();
    }

    let slant = TAB_SIDE_SLANT.min(frame.size.width / 2.0);

    Outline::new(vec![
        Point::new(frame.min_x(), frame.min_y()),
        Point::new(frame.max_x(), frame.min_y()),
        Point::new(frame.max_x() - slant, frame.max_y()),
        Point::new(frame.min_x() + slant, frame.max_y()),
    ])
}

/// The drawn close button, clipped to the frame.
pub fn close_button_region(frame: Rect) -> Rect {
    if frame.is_empty() {
        return Rect::ZERO;
    }

    let button = Rect::new(
        frame.max_x() - CLOSE_BUTTON_MARGIN - CLOSE_BUTTON_SIZE,
        frame.mid_y() - CLOSE_BUTTON_SIZE / 2.0,
        CLOSE_BUTTON_SIZE,
        CLOSE_BUTTON_SIZE,
    );
    button.intersection(&frame)
}

/// The close button grown by [`CLOSE_BUTTON_HIT_TOLERANCE`], never extending past the frame.
pub fn close_button_hit_region(frame: Rect) -> Rect {
    let button = close_button_region(frame);
    if button.is_empty() {
        return Rect::ZERO;
    }

    button.outset(CLOSE_BUTTON_HIT_TOLERANCE).intersection(&frame)
}

/// Whether `point` lies inside the tab silhouette.
pub fn contains_point(frame: Rect, point: Point) -> bool {
    tab_outline(frame).contains(point)
}

/// Whether `point` lies inside the enlarged close-button hit region.
pub fn point_in_close_button(frame: Rect, point: Point) -> bool {
    close_button_hit_region(frame).contains(point)
}

/// Frames for `count` tabs laid out left to right inside `bar`.
///
/// Every tab gets the same width, an equal share of the bar clamped to
/// `[TAB_MIN_WIDTH, TAB_MAX_WIDTH]`. Tabs past the right edge of the bar still get
/// frames; scrolling them into view is up to the presentation layer.
pub fn layout_tab_strip(bar: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let gaps = TAB_SPACING * (count - 1) as f64;
    let share = (bar.size.width - gaps) / count as f64;
    let width = share.clamp(TAB_MIN_WIDTH, TAB_MAX_WIDTH);

    (0..count)
        .map(|i| {
            Rect::new(
                bar.min_x() + i as f64 * (width + TAB_SPACING),
                bar.min_y(),
                width,
                bar.size.height,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Rect {
        Rect::new(0.0, 0.0, 120.0, 24.0)
    }

    #[test]
    fn test_outline_is_narrower_at_the_top() {
        let outline = tab_outline(frame());
        assert_eq!(outline.bounds(), frame());

        // Bottom corner region is inside, top corner region is cut away.
        assert!(outline.contains(Point::new(1.0, 1.0)));
        assert!(!outline.contains(Point::new(1.0, 23.0)));
    }

    #[test]
    fn test_contains_point() {
        assert!(contains_point(frame(), frame().center()));
        assert!(!contains_point(frame(), Point::new(500.0, 500.0)));
        assert!(!contains_point(frame(), Point::new(60.0, -1.0)));
    }

    #[test]
    fn test_close_button_anchored_near_right_edge() {
        let button = close_button_region(frame());
        assert_eq!(button, Rect::new(102.0, 8.0, 8.0, 8.0));
    }

    #[test]
    fn test_hit_region_is_larger_than_glyph() {
        // Inside the tolerance band but outside the drawn glyph.
        let near = Point::new(100.0, 6.0);
        assert!(!close_button_region(frame()).contains(near));
        assert!(point_in_close_button(frame(), near));

        assert!(point_in_close_button(frame(), Point::new(106.0, 12.0)));
    }

    #[test]
    fn test_close_button_misses_outside_frame() {
        assert!(!point_in_close_button(frame(), Point::new(200.0, 12.0)));
        assert!(!point_in_close_button(frame(), Point::new(106.0, -2.0)));
        assert!(!point_in_close_button(frame(), Point::new(10.0, 12.0)));
    }

    #[test]
    fn test_hit_region_clipped_to_short_frame() {
        let short = Rect::new(0.0, 0.0, 120.0, 8.0);
        let hit = close_button_hit_region(short);
        assert_eq!(hit.min_y(), 0.0);
        assert_eq!(hit.max_y(), 8.0);
        assert!(!point_in_close_button(short, Point::new(106.0, -1.0)));
    }

    #[test]
    fn test_degenerate_frame_yields_empty_regions() {
        let flat = Rect::new(10.0, 10.0, 50.0, 0.0);
        assert!(tab_outline(flat).is_empty());
        assert!(close_button_region(flat).is_empty());
        assert!(close_button_hit_region(flat).is_empty());
        assert!(!contains_point(flat, Point::new(20.0, 10.0)));
        assert!(!point_in_close_button(flat, Point::new(40.0, 10.0)));
    }

    #[test]
    fn test_layout_tab_strip() {
        let bar = Rect::new(0.0, 100.0, 1000.0, 24.0);

        let frames = layout_tab_strip(bar, 3);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], Rect::new(0.0, 100.0, TAB_MAX_WIDTH, 24.0));
        assert_eq!(frames[1].min_x(), TAB_MAX_WIDTH + TAB_SPACING);

        // Crowded bars never shrink tabs below the minimum width.
        let crowded = layout_tab_strip(Rect::new(0.0, 0.0, 100.0, 24.0), 5);
        assert!(crowded.iter().all(|f| f.size.width == TAB_MIN_WIDTH));

        assert!(layout_tab_strip(bar, 0).is_empty());
    }
}
