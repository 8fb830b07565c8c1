//! Content controller capabilities
//!
//! A content controller owns whatever is shown while its tab is active: an editor, a
//! console, a documentation browser. The tab system only needs the capabilities below.
//! Every optional capability has a no-op default so a controller implements just what
//! it supports.

use serde::{Deserialize, Serialize};
use url::Url;

/// Opaque handle to a view owned by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewHandle(u64);

impl ViewHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

pub trait ContentController: Send + Sync {
    /// The view to mount when this controller's tab becomes active.
    fn view(&self) -> ViewHandle;

    /// Asked before the tab is removed by a close request. Returning `false`
    /// keeps the tab open; the controller is expected to tell the user why.
    fn should_close(&self) -> bool {
        true
    }

    /// Save action. Defaults to doing nothing.
    fn save(&self) {}

    /// Save As action. Defaults to doing nothing.
    fn save_as(&self) {}

    /// Close action. Defaults to doing nothing.
    fn close(&self) {}

    /// Take input focus. Returns whether focus was accepted.
    fn focus(&self) -> bool {
        false
    }

    /// The document backing this controller, if any.
    fn document(&self) -> Option<Url> {
        None
    }

    /// Whether this controller shows `document`.
    fn represents(&self, document: &Url) -> bool {
        self.document().as_ref() == Some(document)
    }
}
