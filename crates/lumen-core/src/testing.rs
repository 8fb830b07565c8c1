//! Test doubles for windows and the workbench

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use lumen_tabs::ContentController;
use parking_lot::Mutex;
use url::Url;

use crate::window::ControllerFactory;

pub use lumen_tabs::testing::MockController;

/// Opens anything except `.png` files and counts document requests.
pub struct MockFactory {
    next_view: AtomicU64,
    documents_requested: AtomicUsize,
    created: Mutex<Vec<Arc<MockController>>>,
}

impl MockFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_view: AtomicU64::new(1),
            documents_requested: AtomicUsize::new(0),
            created: Mutex::new(Vec::new()),
        })
    }

    pub fn documents_requested(&self) -> usize {
        self.documents_requested.load(Ordering::SeqCst)
    }

    /// Every controller handed out so far, in creation order.
    pub fn created(&self) -> Vec<Arc<MockController>> {
        self.created.lock().clone()
    }

    fn create(&self, document: Option<Url>) -> Arc<MockController> {
        let view = self.next_view.fetch_add(1, Ordering::SeqCst);
        let controller = MockController::showing(view, document);
        self.created.lock().push(Arc::clone(&controller));
        controller
    }
}

impl ControllerFactory for MockFactory {
    fn default_controller(&self) -> Arc<dyn ContentController> {
        self.create(None)
    }

    fn controller_for_document(&self, document: &Url) -> Option<Arc<dyn ContentController>> {
        self.documents_requested.fetch_add(1, Ordering::SeqCst);
        if document.path().ends_with(".png") {
            return None;
        }
        Some(self.create(Some(document.clone())))
    }
}
