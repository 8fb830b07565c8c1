//! Lumen Core
//!
//! Coordination layer for the IDE shell. A [`Workbench`] owns the open windows; each
//! [`Window`] pairs a tab orchestrator with a sidebar split layout and a factory for
//! new content controllers. Drawing, menus and the file browser live in the
//! presentation layer and talk to this crate through intents and tab events.

mod config;
mod error;
mod window;
mod workbench;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::CoreError;
pub use window::{ControllerFactory, Window, WindowId};
pub use workbench::Workbench;

// Re-export core components
pub use lumen_geometry::{Point, Rect, Size};
pub use lumen_layout::{LayoutError, SidebarConstraints, SplitLayout};
pub use lumen_tabs::{
    Color, ContentController, Fill, Gradient, OpenDocumentHandler, PointerAction,
    SubscriptionId, TabAttribute, TabCollection, TabError, TabEvent, TabId, TabItem,
    TabObserver, TabOrchestrator, TabState, TabStyle, TrackingRegion, ViewHandle,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` wins over `default_filter`. Calling this again after a subscriber is
/// installed does nothing.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if fmt().with_env_filter(filter).with_target(true).try_init().is_err() {
        tracing::debug!("Logging already initialized");
    }
}
