//! Test doubles, shared with dependent crates through the `test-support` feature

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use url::Url;

use crate::controller::{ContentController, ViewHandle};
use crate::event::TabEvent;
use crate::TabCollection;
use crate::TabOrchestrator;

/// Records every action it receives and answers close queries as configured.
pub struct MockController {
    view: ViewHandle,
    document: Option<Url>,
    allow_close: AtomicBool,
    calls: Mutex<Vec<&'static str>>,
}

impl MockController {
    pub fn new(view: u64) -> Arc<Self> {
        Self::showing(view, None)
    }

    pub fn with_document(view: u64, document: &str) -> Arc<Self> {
        Self::showing(view, Url::parse(document).ok())
    }

    /// A controller for `document`, or for a new document when `None`.
    pub fn showing(view: u64, document: Option<Url>) -> Arc<Self> {
        Arc::new(Self {
            view: ViewHandle::new(view),
            document,
            allow_close: AtomicBool::new(true),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn refusing(view: u64) -> Arc<Self> {
        let controller = Self::new(view);
        controller.set_allow_close(false);
        controller
    }

    /// Change the answer to later close queries.
    pub fn set_allow_close(&self, allow: bool) {
        self.allow_close.store(allow, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().push(call);
    }
}

impl ContentController for MockController {
    fn view(&self) -> ViewHandle {
        self.view
    }

    fn should_close(&self) -> bool {
        self.record("should_close");
        self.allow_close.load(Ordering::SeqCst)
    }

    fn save(&self) {
        self.record("save");
    }

    fn save_as(&self) {
        self.record("save_as");
    }

    fn close(&self) {
        self.record("close");
    }

    fn focus(&self) -> bool {
        self.record("focus");
        true
    }

    fn document(&self) -> Option<Url> {
        self.document.clone()
    }
}

/// Collects every event emitted by a collection.
pub fn record_events(collection: &mut TabCollection) -> Arc<Mutex<Vec<TabEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    collection.subscribe(Box::new(move |event| sink.lock().push(event.clone())));
    events
}

/// Collects every event emitted through an orchestrator.
pub fn record_orchestrator_events(
    orchestrator: &mut TabOrchestrator,
) -> Arc<Mutex<Vec<TabEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    orchestrator.subscribe(Box::new(move |event| sink.lock().push(event.clone())));
    events
}
