//! Tab Orchestrator
//!
//! Policy on top of [`TabCollection`]: which tab is active, when a tab may close, and
//! how pointer intents from the tab bar turn into tab operations.
//!
//! After the active tab is removed, the tab that now sits at its former index takes
//! over, or the last tab when the removed one was last. `Empty` is reached only by
//! removing the final tab.

use std::sync::Arc;

use lumen_geometry::{self as geometry, Point, Rect};
use url::Url;

use crate::collection::TabCollection;
use crate::controller::ContentController;
use crate::event::{SubscriptionId, TabEvent, TabObserver};
use crate::state::TabState;
use crate::style::TabStyle;
use crate::tab::{Fill, TabId, TabItem};
use crate::tracking::TrackingRegion;
use crate::Result;

/// Host callback for documents opened from outside the tab bar. Returns whether the
/// document was opened.
pub type OpenDocumentHandler = Box<dyn FnMut(&Url) -> bool + Send>;

/// What a pointer press on the tab bar did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// The press hit no tab
    None,
    /// The tab under the pointer was made active
    Select(TabId),
    /// The tab's close button was pressed; `closed` is false when its controller refused
    Close { tab: TabId, closed: bool },
}

#[derive(Default)]
pub struct TabOrchestrator {
    tabs: TabCollection,
    style: TabStyle,
    /// Last tab bar rectangle passed to `layout`
    bar: Option<Rect>,
    open_document_handler: Option<OpenDocumentHandler>,
}

impl TabOrchestrator {
    pub fn new(style: TabStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    pub fn collection(&self) -> &TabCollection {
        &self.tabs
    }

    pub fn state(&self) -> TabState {
        self.tabs.active().into()
    }

    pub fn active_tab(&self) -> Option<TabId> {
        self.tabs.active()
    }

    pub fn count(&self) -> usize {
        self.tabs.count()
    }

    pub fn tab(&self, id: TabId) -> Option<&TabItem> {
        self.tabs.item(id)
    }

    pub fn style(&self) -> &TabStyle {
        &self.style
    }

    // === Opening and closing ===

    /// Add a tab and make it active.
    pub fn open_tab(&mut self, item: TabItem, controller: Arc<dyn ContentController>) -> TabId {
        let id = self.tabs.add(item, controller);
        self.relayout();

        tracing::info!(tab_id = %id, count = self.tabs.count(), "Opened tab");

        self.set_active_tab(id);
        id
    }

    /// Add a tab without switching to it. The first tab still becomes active.
    pub fn open_tab_in_background(
        &mut self,
        item: TabItem,
        controller: Arc<dyn ContentController>,
    ) -> TabId {
        let id = self.tabs.add(item, controller);
        self.relayout();

        tracing::info!(tab_id = %id, count = self.tabs.count(), "Opened background tab");

        match self.tabs.active() {
            None => {
                self.set_active_tab(id);
            }
            Some(active) if active != id => self.apply_style(id, false),
            Some(_) => {}
        }
        id
    }

    /// Ask the tab's controller for permission, then remove the tab.
    ///
    /// Returns false when the tab is absent or its controller refused.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        let Some(controller) = self.tabs.controller_for(id).cloned() else {
            return false;
        };

        if !controller.should_close() {
            tracing::info!(tab_id = %id, "Tab refused to close");
            return false;
        }

        self.remove_tab(id)
    }

    /// Remove a tab without asking its controller, picking a successor if it was active.
    ///
    /// The hand-over is reported as a single `ActiveChanged` from the removed tab to
    /// its successor.
    pub fn remove_tab(&mut self, id: TabId) -> bool {
        let Some(index) = self.tabs.index_of(id) else {
            return false;
        };
        let successor = if self.tabs.active() == Some(id) {
            self.successor_of(index)
        } else {
            None
        };

        self.tabs.remove_handing_over(id, successor);
        self.relayout();

        tracing::info!(tab_id = %id, remaining = self.tabs.count(), "Closed tab");

        match successor {
            Some(successor) => self.mount_active(None, successor),
            None if self.tabs.is_empty() => tracing::debug!("No tabs left"),
            None => {}
        }
        true
    }

    /// Close every tab in display order, asking each controller first.
    ///
    /// Stops at the first refusal and returns false. Tabs closed before the refusal
    /// stay closed; the refusing tab and everything after it stay open, and the
    /// refusing tab becomes active if the active tab was among those closed.
    pub fn close_all(&mut self) -> bool {
        let ids = self.tabs.ids().to_vec();

        for id in ids {
            let Some(controller) = self.tabs.controller_for(id).cloned() else {
                continue;
            };

            if !controller.should_close() {
                tracing::info!(
                    tab_id = %id,
                    remaining = self.tabs.count(),
                    "Tab refused to close, keeping remaining tabs open"
                );

                self.relayout();
                if self.tabs.active().is_none() {
                    self.set_active_tab(id);
                }
                return false;
            }

            self.tabs.remove(id);
        }

        tracing::info!("Closed all tabs");
        true
    }

    // === Active tab ===

    /// Make `id` the active tab, mount its view and give its controller focus.
    ///
    /// Does nothing when `id` is already active or not one of the tabs.
    pub fn set_active_tab(&mut self, id: TabId) -> bool {
        let previous = self.tabs.active();
        if previous == Some(id) || !self.tabs.contains(id) {
            return false;
        }

        if let Err(err) = self.tabs.set_active(Some(id)) {
            tracing::warn!(tab_id = %id, "Failed to activate tab: {}", err);
            return false;
        }

        self.mount_active(previous, id);
        true
    }

    /// Repaint after `id` became active, mount its view and focus its controller.
    fn mount_active(&mut self, previous: Option<TabId>, id: TabId) {
        if let Some(previous) = previous {
            self.apply_style(previous, false);
        }
        self.apply_style(id, true);

        if let Some(controller) = self.tabs.controller_for(id).cloned() {
            self.tabs.notify(TabEvent::ViewMounted {
                tab: id,
                view: controller.view(),
            });
            controller.focus();
        }

        tracing::debug!(tab_id = %id, "Activated tab");
    }

    /// Activate the tab after the active one, wrapping to the first.
    pub fn select_next_tab(&mut self) -> bool {
        self.select_relative(true)
    }

    /// Activate the tab before the active one, wrapping to the last.
    pub fn select_previous_tab(&mut self) -> bool {
        self.select_relative(false)
    }

    fn select_relative(&mut self, forward: bool) -> bool {
        let count = self.tabs.count();
        if count == 0 {
            return false;
        }

        let target = match self.tabs.active().and_then(|id| self.tabs.index_of(id)) {
            Some(index) if forward => (index + 1) % count,
            Some(index) => (index + count - 1) % count,
            None => 0,
        };

        let Ok(id) = self.tabs.item_at(target).map(TabItem::id) else {
            return false;
        };
        self.set_active_tab(id)
    }

    /// The tab that takes over from the tab at `index`: the one that will slide into
    /// its place, or the one before it when it is last.
    fn successor_of(&self, index: usize) -> Option<TabId> {
        let ids = self.tabs.ids();
        ids.get(index + 1)
            .or_else(|| index.checked_sub(1).and_then(|before| ids.get(before)))
            .copied()
    }

    // === Documents ===

    /// The tab whose controller shows `document`. Titles play no part in the lookup.
    pub fn find_document(&self, document: &Url) -> Option<TabId> {
        self.tabs.ids().iter().copied().find(|id| {
            self.tabs
                .controller_for(*id)
                .is_some_and(|controller| controller.represents(document))
        })
    }

    pub fn contains_document(&self, document: &Url) -> bool {
        self.find_document(document).is_some()
    }

    /// Activate the tab showing `document`. Returns false when no tab shows it.
    pub fn set_active_by_document(&mut self, document: &Url) -> bool {
        match self.find_document(document) {
            Some(id) => {
                self.set_active_tab(id);
                true
            }
            None => false,
        }
    }

    // === Actions on the active tab ===
    //
    // Each returns false, doing nothing, when there is no active tab.

    pub fn save_active_tab(&self) -> bool {
        self.with_active_controller(|controller| controller.save())
    }

    pub fn save_as_active_tab(&self) -> bool {
        self.with_active_controller(|controller| controller.save_as())
    }

    pub fn close_active_tab(&self) -> bool {
        self.with_active_controller(|controller| controller.close())
    }

    fn with_active_controller<F>(&self, f: F) -> bool
    where
        F: FnOnce(&dyn ContentController),
    {
        match self.tabs.active().and_then(|id| self.tabs.controller_for(id)) {
            Some(controller) => {
                f(controller.as_ref());
                true
            }
            None => false,
        }
    }

    // === Ordering and attributes ===

    pub fn move_tab(&mut self, id: TabId, to_index: usize) -> Result<()> {
        self.tabs.move_item(id, to_index)?;
        self.relayout();
        Ok(())
    }

    pub fn set_title(&mut self, id: TabId, title: impl Into<String>) {
        self.tabs.set_title(id, title);
    }

    /// Replace the style and repaint every tab with it.
    pub fn set_tab_style(&mut self, style: TabStyle) {
        self.style = style;

        let active = self.tabs.active();
        for id in self.tabs.ids().to_vec() {
            self.apply_style(id, Some(id) == active);
        }
    }

    fn apply_style(&mut self, id: TabId, active: bool) {
        if active {
            self.tabs.set_fill(id, Fill::Solid(self.style.active_color));
            self.tabs.set_close_button_hidden(id, false);
        } else {
            self.tabs
                .set_fill(id, Fill::Gradient(self.style.inactive_gradient.clone()));
            self.tabs.set_close_button_hidden(id, true);
            self.tabs.set_close_button_highlighted(id, false);
        }
    }

    // === Tab bar geometry and pointer intents ===
    //
    // Points are in the tab bar's coordinate space.

    /// Lay the tabs out inside `bar` and track hover over each tab's frame. The bar is
    /// remembered, and tabs are laid out again whenever they are added, removed or moved.
    pub fn layout(&mut self, bar: Rect) {
        self.bar = Some(bar);
        self.relayout();
    }

    fn relayout(&mut self) {
        let Some(bar) = self.bar else {
            return;
        };

        let ids = self.tabs.ids().to_vec();
        let frames = geometry::layout_tab_strip(bar, ids.len());
        for (id, frame) in ids.into_iter().zip(frames) {
            self.tabs.set_frame(id, frame);
            self.tabs
                .set_tracking_region(TrackingRegion::new(frame), id);
        }
    }

    /// Update close-button visibility and highlight for a pointer move.
    ///
    /// The close button shows on the active tab and on the hovered tab, and is
    /// highlighted while the pointer is over it. Returns the hovered tab.
    pub fn pointer_moved(&mut self, point: Point) -> Option<TabId> {
        let hovered = self.hovered_tab(point);
        let active = self.tabs.active();

        for id in self.tabs.ids().to_vec() {
            let Some(frame) = self.tabs.item(id).map(TabItem::frame) else {
                continue;
            };

            let shown = Some(id) == active || Some(id) == hovered;
            self.tabs.set_close_button_hidden(id, !shown);
            self.tabs.set_close_button_highlighted(
                id,
                shown && geometry::point_in_close_button(frame, point),
            );
        }

        hovered
    }

    /// Handle a pointer press: close a tab through its visible close button, or
    /// activate the tab under the pointer.
    pub fn pointer_down(&mut self, point: Point) -> PointerAction {
        let hit = self.tabs.ids().iter().rev().find_map(|id| {
            let item = self.tabs.item(*id)?;
            if !item.close_button_hidden() && geometry::point_in_close_button(item.frame(), point)
            {
                Some((*id, true))
            } else if geometry::contains_point(item.frame(), point) {
                Some((*id, false))
            } else {
                None
            }
        });

        match hit {
            Some((tab, true)) => {
                let closed = self.close_tab(tab);
                PointerAction::Close { tab, closed }
            }
            Some((tab, false)) => {
                self.set_active_tab(tab);
                PointerAction::Select(tab)
            }
            None => PointerAction::None,
        }
    }

    /// Handle a drag of `id` to `point`: when the point is over another tab, the dragged
    /// tab takes that tab's index. Returns whether the order changed.
    pub fn pointer_dragged(&mut self, id: TabId, point: Point) -> bool {
        if !self.tabs.contains(id) {
            return false;
        }

        let target = self
            .tab_under(point)
            .filter(|other| *other != id)
            .and_then(|other| self.tabs.index_of(other));

        match target {
            Some(to_index) => self.move_tab(id, to_index).is_ok(),
            None => false,
        }
    }

    /// Topmost tab whose outline contains `point`. Later tabs are drawn over earlier ones.
    fn tab_under(&self, point: Point) -> Option<TabId> {
        self.tabs.ids().iter().rev().copied().find(|id| {
            self.tabs
                .item(*id)
                .is_some_and(|item| geometry::contains_point(item.frame(), point))
        })
    }

    fn hovered_tab(&self, point: Point) -> Option<TabId> {
        self.tabs.ids().iter().rev().copied().find(|id| {
            match self.tabs.tracking_region_for(*id) {
                Some(region) => region.contains(point),
                None => self
                    .tabs
                    .item(*id)
                    .is_some_and(|item| geometry::contains_point(item.frame(), point)),
            }
        })
    }

    // === Host integration ===

    /// Install the callback for documents opened from outside the tab bar, replacing
    /// any previous one.
    pub fn set_open_document_handler(&mut self, handler: OpenDocumentHandler) {
        self.open_document_handler = Some(handler);
    }

    pub fn clear_open_document_handler(&mut self) {
        self.open_document_handler = None;
    }

    /// Pass `document` to the installed handler. Returns false when none is installed.
    pub fn request_open_document(&mut self, document: &Url) -> bool {
        match self.open_document_handler.as_mut() {
            Some(handler) => handler(document),
            None => {
                tracing::debug!(document = %document, "No open-document handler installed");
                false
            }
        }
    }

    pub fn subscribe(&mut self, observer: TabObserver) -> SubscriptionId {
        self.tabs.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.tabs.unsubscribe(id)
    }
}

impl std::fmt::Debug for TabOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabOrchestrator")
            .field("tabs", &self.tabs)
            .field("style", &self.style)
            .field("bar", &self.bar)
            .field(
                "open_document_handler",
                &self.open_document_handler.is_some(),
            )
            .finish()
    }
}
