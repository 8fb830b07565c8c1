//! Lumen Geometry
//!
//! Pure geometry used by the tab strip:
//! - Points, sizes and rectangles in a y-up parent coordinate space
//! - The tab silhouette as a closed outline (masking, shadow, hit-testing)
//! - The close-button region with an enlarged hit area
//! - Left-to-right tab strip layout
//!
//! Nothing in this crate holds state, so every function is safe to call from any thread.

mod outline;
mod rect;
mod tab_shape;

pub use outline::Outline;
pub use rect::{Point, Rect, Size};
pub use tab_shape::{
    close_button_hit_region, close_button_region, contains_point, layout_tab_strip,
    point_in_close_button, tab_outline, CLOSE_BUTTON_HIT_TOLERANCE, CLOSE_BUTTON_MARGIN,
    CLOSE_BUTTON_SIZE, TAB_MAX_WIDTH, TAB_MIN_WIDTH, TAB_SIDE_SLANT, TAB_SPACING,
};
