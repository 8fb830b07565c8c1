//! Lumen Split Layout
//!
//! The workbench window is split into a sidebar on the left and the tab area on the
//! right. The sidebar width is bounded two ways at once:
//! - absolute bounds, fixed distances that hold whatever the window width
//! - relative bounds, fractions of the container width that move the divider on resize
//!
//! The inner bounds win (the larger minimum and the smaller maximum). When those
//! cross, the minimum wins.

mod constraints;
mod error;
mod split;

pub use constraints::{resolve, SidebarConstraints};
pub use error::LayoutError;
pub use split::SplitLayout;

pub type Result<T> = std::result::Result<T, LayoutError>;
