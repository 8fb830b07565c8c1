//! Change notifications for the presentation layer

use serde::Serialize;

use crate::controller::ViewHandle;
use crate::tab::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TabAttribute {
    Title,
    Fill,
    CloseButtonHidden,
    CloseButtonHighlighted,
    Frame,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TabEvent {
    Added {
        tab: TabId,
        index: usize,
    },
    Removed {
        tab: TabId,
        index: usize,
    },
    Moved {
        tab: TabId,
        from: usize,
        to: usize,
    },
    /// Removing the active tab through the orchestrator reports the hand-over to its
    /// successor in one event. `close_all` reports `current: None` when it closes the
    /// active tab; if a later tab refuses, a second event makes that tab active.
    ActiveChanged {
        previous: Option<TabId>,
        current: Option<TabId>,
    },
    /// The presentation layer should mount `view` and give it input focus.
    ViewMounted {
        tab: TabId,
        view: ViewHandle,
    },
    AttributeChanged {
        tab: TabId,
        attribute: TabAttribute,
    },
}

pub type TabObserver = Box<dyn FnMut(&TabEvent) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Delivers events to every observer, in subscription order.
#[derive(Default)]
pub(crate) struct Notifier {
    next_id: u64,
    observers: Vec<(SubscriptionId, TabObserver)>,
}

impl Notifier {
    pub fn subscribe(&mut self, observer: TabObserver) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn emit(&mut self, event: TabEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.len())
            .finish()
    }
}
