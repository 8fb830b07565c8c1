//! Active-tab state machine
//!
//! ```text
//! Empty ──open──▶ Active(tab)
//!   ▲               │  set_active / select_next / select_previous
//!   │               ▼
//!   └─remove last── Active(other)
//! ```
//!
//! `Empty` holds exactly when there are no tabs.

use serde::Serialize;

use crate::tab::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "tab", rename_all = "lowercase")]
pub enum TabState {
    Empty,
    Active(TabId),
}

impl TabState {
    pub fn active(&self) -> Option<TabId> {
        match self {
            TabState::Empty => None,
            TabState::Active(id) => Some(*id),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TabState::Empty)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabState::Empty => "empty",
            TabState::Active(_) => "active",
        }
    }
}

impl From<Option<TabId>> for TabState {
    fn from(active: Option<TabId>) -> Self {
        active.map_or(TabState::Empty, TabState::Active)
    }
}

impl std::fmt::Display for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabState::Empty => write!(f, "empty"),
            TabState::Active(id) => write!(f, "active({})", id),
        }
    }
}
