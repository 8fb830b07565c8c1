//! Document window
//!
//! One window shows a sidebar and a tab area side by side. Documents open as tabs;
//! opening a document that already has a tab switches to that tab.

use std::sync::Arc;

use lumen_layout::SplitLayout;
use lumen_tabs::{ContentController, TabId, TabItem, TabOrchestrator};
use url::Url;
use uuid::Uuid;

use crate::config::Config;

/// Source of content controllers for new tabs.
pub trait ControllerFactory: Send + Sync {
    /// Controller for a new, empty document.
    fn default_controller(&self) -> Arc<dyn ContentController>;

    /// Controller for an existing document, or `None` if this kind of document cannot
    /// be opened.
    fn controller_for_document(&self, document: &Url) -> Option<Arc<dyn ContentController>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(Uuid);

impl WindowId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct Window {
    id: WindowId,
    tabs: TabOrchestrator,
    split: SplitLayout,
    factory: Arc<dyn ControllerFactory>,
}

impl Window {
    pub fn new(config: &Config, factory: Arc<dyn ControllerFactory>) -> Self {
        Self {
            id: WindowId::new(),
            tabs: TabOrchestrator::new(config.tab_style.clone()),
            split: SplitLayout::new(config.sidebar, config.initial_sidebar_width),
            factory,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn tabs(&self) -> &TabOrchestrator {
        &self.tabs
    }

    /// Mutable access for the presentation layer: pointer intents, layout,
    /// subscriptions and the open-document handler.
    pub fn tabs_mut(&mut self) -> &mut TabOrchestrator {
        &mut self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.count()
    }

    // === Documents ===

    /// Open an empty document in a new active tab.
    pub fn new_document(&mut self) -> TabId {
        let controller = self.factory.default_controller();
        self.tabs.open_tab(TabItem::new("Untitled"), controller)
    }

    /// Show `document`, reusing its tab when one exists.
    ///
    /// Returns false when the factory cannot open this kind of document.
    pub fn open_document(&mut self, document: &Url) -> bool {
        if self.tabs.set_active_by_document(document) {
            return true;
        }

        let Some(controller) = self.factory.controller_for_document(document) else {
            tracing::info!(document = %document, "No controller for document");
            return false;
        };

        let id = self
            .tabs
            .open_tab(TabItem::new(document_title(document)), controller);

        tracing::info!(
            window_id = %self.id,
            tab_id = %id,
            document = %document,
            "Opened document"
        );
        true
    }

    pub fn contains_document(&self, document: &Url) -> bool {
        self.tabs.contains_document(document)
    }

    pub fn save_document(&self) {
        self.tabs.save_active_tab();
    }

    pub fn save_as_document(&self) {
        self.tabs.save_as_active_tab();
    }

    pub fn close_document(&self) {
        self.tabs.close_active_tab();
    }

    pub fn select_next_tab(&mut self) -> bool {
        self.tabs.select_next_tab()
    }

    pub fn select_previous_tab(&mut self) -> bool {
        self.tabs.select_previous_tab()
    }

    /// Close every tab. False when a tab refused; see [`TabOrchestrator::close_all`].
    pub fn should_close(&mut self) -> bool {
        self.tabs.close_all()
    }

    // === Sidebar ===

    pub fn split(&self) -> &SplitLayout {
        &self.split
    }

    /// Handle a window resize. Returns the new sidebar width.
    pub fn resize(&mut self, container_width: f64) -> f64 {
        self.split.container_resized(container_width)
    }

    pub fn sidebar_width(&self) -> f64 {
        self.split.sidebar_width()
    }

    pub fn drag_divider(&mut self, proposed_width: f64) -> f64 {
        self.split.drag_divider(proposed_width)
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("tabs", &self.tabs)
            .field("split", &self.split)
            .finish()
    }
}

/// Last non-empty path segment, or the whole URL when there is none.
fn document_title(document: &Url) -> String {
    document
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .unwrap_or_else(|| document.to_string())
}
