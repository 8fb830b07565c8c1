//! Tab Collection
//!
//! Owns the tab items in display order, the controller bound to each, the optional
//! tracking regions and the active-tab pointer. Items live in an arena keyed by
//! [`TabId`], so neither a tab nor its controller holds a reference to the other.
//!
//! Invariants, checked after every mutation in debug builds:
//! - `order` has no duplicates
//! - every tab in `order` has an item and a controller
//! - the active tab, when set, is in `order`

use std::collections::HashMap;
use std::sync::Arc;

use lumen_geometry::Rect;

use crate::controller::ContentController;
use crate::error::TabError;
use crate::event::{Notifier, SubscriptionId, TabAttribute, TabEvent, TabObserver};
use crate::tab::{Fill, TabId, TabItem};
use crate::tracking::TrackingRegion;
use crate::Result;

#[derive(Default)]
pub struct TabCollection {
    /// Display order
    order: Vec<TabId>,
    items: HashMap<TabId, TabItem>,
    controllers: HashMap<TabId, Arc<dyn ContentController>>,
    tracking_regions: HashMap<TabId, TrackingRegion>,
    active: Option<TabId>,
    notifier: Notifier,
}

impl TabCollection {
    pub fn new() -> Self {
        Self::default()
    }

    // === Adding, removing and moving ===

    /// Append `item` and bind it to `controller`.
    ///
    /// Adding a tab that is already present does nothing and keeps its existing
    /// controller. The active tab is never changed here.
    pub fn add(&mut self, item: TabItem, controller: Arc<dyn ContentController>) -> TabId {
        let id = item.id();
        if self.items.contains_key(&id) {
            return id;
        }

        let index = self.order.len();
        self.order.push(id);
        self.items.insert(id, item);
        self.controllers.insert(id, controller);
        self.check_invariants();

        tracing::debug!(tab_id = %id, index, "Added tab");
        self.notifier.emit(TabEvent::Added { tab: id, index });

        id
    }

    /// Remove a tab with its controller binding and tracking region.
    ///
    /// Removing the active tab leaves no active tab; choosing a successor is up to the
    /// caller. Removing an absent tab does nothing and returns `None`.
    pub fn remove(&mut self, id: TabId) -> Option<TabItem> {
        self.remove_handing_over(id, None)
    }

    /// Remove a tab, making `successor` active if the removed tab was active.
    ///
    /// Emits one `ActiveChanged` from the removed tab straight to the successor. A
    /// successor that is not a remaining tab counts as none.
    pub(crate) fn remove_handing_over(
        &mut self,
        id: TabId,
        successor: Option<TabId>,
    ) -> Option<TabItem> {
        let index = self.index_of(id)?;

        self.order.remove(index);
        self.controllers.remove(&id);
        self.tracking_regions.remove(&id);
        let item = self.items.remove(&id);

        let was_active = self.active == Some(id);
        if was_active {
            let successor = successor.filter(|next| self.items.contains_key(next));
            self.active = successor;
        }
        self.check_invariants();

        tracing::debug!(tab_id = %id, index, "Removed tab");
        self.notifier.emit(TabEvent::Removed { tab: id, index });
        if was_active {
            self.notifier.emit(TabEvent::ActiveChanged {
                previous: Some(id),
                current: self.active,
            });
        }

        item
    }

    /// Move a tab so that it ends up at `to_index`.
    ///
    /// `to_index` counts positions with the moved tab already taken out, so afterwards
    /// `index_of(id) == Some(to_index)`. Fails with `OutOfRange` when `to_index` is not
    /// below `count()` or the tab is absent.
    pub fn move_item(&mut self, id: TabId, to_index: usize) -> Result<()> {
        let count = self.order.len();
        let from = match self.index_of(id) {
            Some(from) if to_index < count => from,
            _ => {
                return Err(TabError::OutOfRange {
                    index: to_index,
                    count,
                })
            }
        };

        if from == to_index {
            return Ok(());
        }

        let moved = self.order.remove(from);
        self.order.insert(to_index, moved);
        self.check_invariants();

        tracing::debug!(tab_id = %id, from, to = to_index, "Moved tab");
        self.notifier.emit(TabEvent::Moved {
            tab: id,
            from,
            to: to_index,
        });

        Ok(())
    }

    // === Querying ===

    pub fn controller_for(&self, id: TabId) -> Option<&Arc<dyn ContentController>> {
        self.controllers.get(&id)
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.order.iter().position(|existing| *existing == id)
    }

    pub fn item_at(&self, index: usize) -> Result<&TabItem> {
        self.order
            .get(index)
            .and_then(|id| self.items.get(id))
            .ok_or(TabError::OutOfRange {
                index,
                count: self.order.len(),
            })
    }

    pub fn item(&self, id: TabId) -> Option<&TabItem> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Tab ids in display order.
    pub fn ids(&self) -> &[TabId] {
        &self.order
    }

    /// Tab items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &TabItem> + '_ {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    // === Active tab ===

    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    /// Set or clear the active tab. Naming a tab that is not in the collection is a
    /// caller bug and fails with `InvalidArgument`.
    pub fn set_active(&mut self, id: Option<TabId>) -> Result<()> {
        if let Some(id) = id {
            if !self.contains(id) {
                return Err(TabError::InvalidArgument(format!(
                    "Tab {} is not in the collection",
                    id
                )));
            }
        }

        if self.active == id {
            return Ok(());
        }

        let previous = self.active;
        self.active = id;
        self.check_invariants();

        self.notifier.emit(TabEvent::ActiveChanged {
            previous,
            current: id,
        });

        Ok(())
    }

    // === Tracking regions ===

    pub fn tracking_region_for(&self, id: TabId) -> Option<&TrackingRegion> {
        self.tracking_regions.get(&id)
    }

    /// Attach a tracking region, replacing any previous one. Like `add`, this quietly
    /// does nothing for a tab that is not in the collection.
    pub fn set_tracking_region(&mut self, region: TrackingRegion, id: TabId) {
        if self.contains(id) {
            self.tracking_regions.insert(id, region);
        }
    }

    // === Attributes ===
    //
    // Each setter does nothing for an absent tab and only notifies on an actual change.

    pub fn set_title(&mut self, id: TabId, title: impl Into<String>) {
        let title = title.into();
        self.update(id, TabAttribute::Title, |item| {
            if item.title() == title {
                return false;
            }
            item.set_title(title);
            true
        });
    }

    pub fn set_fill(&mut self, id: TabId, fill: Fill) {
        self.update(id, TabAttribute::Fill, |item| {
            if *item.fill() == fill {
                return false;
            }
            item.set_fill(fill);
            true
        });
    }

    pub fn set_close_button_hidden(&mut self, id: TabId, hidden: bool) {
        self.update(id, TabAttribute::CloseButtonHidden, |item| {
            if item.close_button_hidden() == hidden {
                return false;
            }
            item.set_close_button_hidden(hidden);
            true
        });
    }

    pub fn set_close_button_highlighted(&mut self, id: TabId, highlighted: bool) {
        self.update(id, TabAttribute::CloseButtonHighlighted, |item| {
            if item.close_button_highlighted() == highlighted {
                return false;
            }
            item.set_close_button_highlighted(highlighted);
            true
        });
    }

    pub fn set_frame(&mut self, id: TabId, frame: Rect) {
        self.update(id, TabAttribute::Frame, |item| {
            if item.frame() == frame {
                return false;
            }
            item.set_frame(frame);
            true
        });
    }

    fn update<F>(&mut self, id: TabId, attribute: TabAttribute, f: F)
    where
        F: FnOnce(&mut TabItem) -> bool,
    {
        let changed = match self.items.get_mut(&id) {
            Some(item) => f(item),
            None => return,
        };

        if changed {
            self.notifier
                .emit(TabEvent::AttributeChanged { tab: id, attribute });
        }
    }

    // === Notifications ===

    pub fn subscribe(&mut self, observer: TabObserver) -> SubscriptionId {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Deliver an event raised by the layer above, such as a view mount request.
    pub fn notify(&mut self, event: TabEvent) {
        self.notifier.emit(event);
    }

    fn check_invariants(&self) {
        debug_assert_eq!(self.order.len(), self.items.len(), "duplicate or orphan tab");
        debug_assert!(
            self.order
                .iter()
                .all(|id| self.items.contains_key(id) && self.controllers.contains_key(id)),
            "tab without item or controller"
        );
        debug_assert_eq!(self.controllers.len(), self.order.len());
        debug_assert!(
            self.active.map_or(true, |id| self.order.contains(&id)),
            "active tab is not a member"
        );
    }
}

impl std::fmt::Debug for TabCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabCollection")
            .field("order", &self.order)
            .field("active", &self.active)
            .field("tracking_regions", &self.tracking_regions.len())
            .field("notifier", &self.notifier)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{record_events, MockController};

    fn collection_with(titles: &[&str]) -> (TabCollection, Vec<TabId>) {
        let mut collection = TabCollection::new();
        let ids = titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                collection.add(TabItem::new(*title), MockController::new(i as u64))
            })
            .collect();
        (collection, ids)
    }

    fn titles(collection: &TabCollection) -> Vec<&str> {
        collection.iter().map(|item| item.title()).collect()
    }

    #[test]
    fn test_add_appends_and_binds_controller() {
        let (collection, ids) = collection_with(&["a", "b", "c"]);

        assert_eq!(collection.count(), 3);
        assert_eq!(titles(&collection), vec!["a", "b", "c"]);
        assert_eq!(collection.index_of(ids[2]), Some(2));
        assert_eq!(
            collection.controller_for(ids[1]).map(|c| c.view().raw()),
            Some(1)
        );
        assert!(collection.active().is_none());
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut collection = TabCollection::new();
        let item = TabItem::new("a");
        let id = collection.add(item.clone(), MockController::new(1));

        let again = collection.add(item, MockController::new(2));

        assert_eq!(again, id);
        assert_eq!(collection.count(), 1);
        assert_eq!(collection.controller_for(id).map(|c| c.view().raw()), Some(1));
    }

    #[test]
    fn test_equal_titles_are_distinct_tabs() {
        let (collection, ids) = collection_with(&["untitled", "untitled"]);
        assert_eq!(collection.count(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_remove_drops_bindings() {
        let (mut collection, ids) = collection_with(&["a", "b"]);
        let region = TrackingRegion::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        collection.set_tracking_region(region, ids[0]);

        let removed = collection.remove(ids[0]);

        assert_eq!(removed.map(|item| item.id()), Some(ids[0]));
        assert_eq!(collection.count(), 1);
        assert!(collection.controller_for(ids[0]).is_none());
        assert!(collection.tracking_region_for(ids[0]).is_none());
        assert_eq!(collection.index_of(ids[1]), Some(0));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (mut collection, ids) = collection_with(&["a"]);
        collection.remove(ids[0]);
        assert!(collection.remove(ids[0]).is_none());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_remove_active_clears_active() {
        let (mut collection, ids) = collection_with(&["a", "b"]);
        collection.set_active(Some(ids[0])).unwrap();

        collection.remove(ids[0]);

        assert!(collection.active().is_none());
    }

    #[test]
    fn test_invariants_hold_over_add_remove_sequence() {
        let mut collection = TabCollection::new();
        let mut live: Vec<TabItem> = Vec::new();

        for step in 0..40u64 {
            if step % 3 == 2 && !live.is_empty() {
                let victim = live.remove((step as usize * 7) % live.len());
                collection.remove(victim.id());
            } else {
                let item = TabItem::new(format!("tab {}", step));
                live.push(item.clone());
                collection.add(item.clone(), MockController::new(step));
                // Re-adding must never duplicate.
                collection.add(item, MockController::new(step));
            }

            let ids = collection.ids();
            let mut unique = ids.to_vec();
            unique.sort_by_key(|id| id.to_string());
            unique.dedup();
            assert_eq!(unique.len(), ids.len());
            assert!(ids.iter().all(|id| collection.controller_for(*id).is_some()));
            assert_eq!(ids.len(), live.len());
        }
    }

    #[test]
    fn test_move_forward_uses_post_removal_index() {
        let (mut collection, ids) = collection_with(&["a", "b", "c", "d"]);

        collection.move_item(ids[0], 2).unwrap();

        assert_eq!(titles(&collection), vec!["b", "c", "a", "d"]);
        assert_eq!(collection.index_of(ids[0]), Some(2));
    }

    #[test]
    fn test_move_backward() {
        let (mut collection, ids) = collection_with(&["a", "b", "c", "d"]);

        collection.move_item(ids[3], 1).unwrap();

        assert_eq!(titles(&collection), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_move_to_last_index() {
        let (mut collection, ids) = collection_with(&["a", "b", "c"]);

        collection.move_item(ids[0], 2).unwrap();

        assert_eq!(titles(&collection), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_then_index_of_returns_target() {
        for from in 0..4 {
            for to in 0..4 {
                let (mut collection, ids) = collection_with(&["a", "b", "c", "d"]);
                collection.move_item(ids[from], to).unwrap();
                assert_eq!(collection.index_of(ids[from]), Some(to));
                assert_eq!(collection.count(), 4);
            }
        }
    }

    #[test]
    fn test_move_to_current_index_is_noop() {
        let (mut collection, ids) = collection_with(&["a", "b", "c"]);
        let events = record_events(&mut collection);

        collection.move_item(ids[1], 1).unwrap();

        assert_eq!(titles(&collection), vec!["a", "b", "c"]);
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_move_out_of_range() {
        let (mut collection, ids) = collection_with(&["a", "b"]);

        assert_eq!(
            collection.move_item(ids[0], 2),
            Err(TabError::OutOfRange { index: 2, count: 2 })
        );

        collection.remove(ids[1]);
        assert!(matches!(
            collection.move_item(ids[1], 0),
            Err(TabError::OutOfRange { .. })
        ));
        assert_eq!(titles(&collection), vec!["a"]);
    }

    #[test]
    fn test_item_at() {
        let (collection, ids) = collection_with(&["a", "b"]);
        assert_eq!(collection.item_at(1).map(|item| item.id()), Ok(ids[1]));
        assert_eq!(
            collection.item_at(2).map(|item| item.id()),
            Err(TabError::OutOfRange { index: 2, count: 2 })
        );
    }

    #[test]
    fn test_tracking_region_overwrite_and_absent() {
        let (mut collection, ids) = collection_with(&["a"]);
        let first = TrackingRegion::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let second = TrackingRegion::new(Rect::new(5.0, 0.0, 10.0, 10.0));

        collection.set_tracking_region(first, ids[0]);
        collection.set_tracking_region(second, ids[0]);
        assert_eq!(collection.tracking_region_for(ids[0]), Some(&second));

        let stranger = TabItem::new("not added").id();
        collection.set_tracking_region(first, stranger);
        assert!(collection.tracking_region_for(stranger).is_none());
    }

    #[test]
    fn test_set_active_rejects_non_member() {
        let (mut collection, _) = collection_with(&["a"]);
        let stranger = TabItem::new("stranger").id();

        assert!(matches!(
            collection.set_active(Some(stranger)),
            Err(TabError::InvalidArgument(_))
        ));
        assert!(collection.active().is_none());
    }

    #[test]
    fn test_events() {
        let mut collection = TabCollection::new();
        let events = record_events(&mut collection);

        let a = collection.add(TabItem::new("a"), MockController::new(0));
        let b = collection.add(TabItem::new("b"), MockController::new(1));
        collection.set_active(Some(b)).unwrap();
        collection.move_item(b, 0).unwrap();
        collection.set_title(a, "renamed");
        collection.set_title(a, "renamed");
        collection.remove(b);

        assert_eq!(
            *events.lock(),
            vec![
                TabEvent::Added { tab: a, index: 0 },
                TabEvent::Added { tab: b, index: 1 },
                TabEvent::ActiveChanged {
                    previous: None,
                    current: Some(b)
                },
                TabEvent::Moved {
                    tab: b,
                    from: 1,
                    to: 0
                },
                TabEvent::AttributeChanged {
                    tab: a,
                    attribute: TabAttribute::Title
                },
                TabEvent::Removed { tab: b, index: 0 },
                TabEvent::ActiveChanged {
                    previous: Some(b),
                    current: None
                },
            ]
        );
    }

    #[test]
    fn test_remove_handing_over_emits_one_active_change() {
        let (mut collection, ids) = collection_with(&["a", "b", "c"]);
        collection.set_active(Some(ids[0])).unwrap();
        let events = record_events(&mut collection);

        collection.remove_handing_over(ids[0], Some(ids[1]));
        collection.remove_handing_over(ids[2], Some(ids[0]));

        assert_eq!(collection.active(), Some(ids[1]));
        assert_eq!(
            *events.lock(),
            vec![
                TabEvent::Removed { tab: ids[0], index: 0 },
                TabEvent::ActiveChanged {
                    previous: Some(ids[0]),
                    current: Some(ids[1])
                },
                TabEvent::Removed { tab: ids[2], index: 1 },
            ]
        );
    }

    #[test]
    fn test_remove_handing_over_ignores_stale_successor() {
        let (mut collection, ids) = collection_with(&["a", "b"]);
        collection.set_active(Some(ids[1])).unwrap();
        collection.remove(ids[0]);

        collection.remove_handing_over(ids[1], Some(ids[0]));

        assert!(collection.active().is_none());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_attribute_setters_ignore_absent_tab() {
        let (mut collection, ids) = collection_with(&["a"]);
        let events = record_events(&mut collection);
        collection.remove(ids[0]);
        events.lock().clear();

        collection.set_title(ids[0], "ghost");
        collection.set_close_button_hidden(ids[0], false);

        assert!(events.lock().is_empty());
    }
}
