//! Lumen Tab Management
//!
//! An ordered, uniquely keyed set of tabs, each bound to a content controller and an
//! optional pointer-tracking region, plus the active-tab state machine on top of it.
//!
//! - [`TabCollection`] is the mechanism: ordering, lookup, attribute storage and
//!   change notifications. It never picks a replacement active tab.
//! - [`TabOrchestrator`] is the policy: which tab becomes active, close permission,
//!   forwarding document actions, pointer intents.
//!
//! All mutation happens on one thread, one operation at a time.

mod collection;
mod color;
mod controller;
mod error;
mod event;
mod orchestrator;
mod state;
mod style;
mod tab;
mod tracking;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use collection::TabCollection;
pub use color::{Color, Gradient};
pub use controller::{ContentController, ViewHandle};
pub use error::TabError;
pub use event::{SubscriptionId, TabAttribute, TabEvent, TabObserver};
pub use orchestrator::{OpenDocumentHandler, PointerAction, TabOrchestrator};
pub use state::TabState;
pub use style::TabStyle;
pub use tab::{Fill, TabId, TabItem};
pub use tracking::TrackingRegion;

pub type Result<T> = std::result::Result<T, TabError>;
