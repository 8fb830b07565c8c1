//! Sidebar split view state

use serde::{Deserialize, Serialize};

use crate::constraints::SidebarConstraints;

/// A container split into a sidebar and a content area.
///
/// The sidebar width is re-resolved on every container resize and divider drag, so it
/// always satisfies the current constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitLayout {
    constraints: SidebarConstraints,
    container_width: f64,
    sidebar_width: f64,
}

impl SplitLayout {
    pub fn new(constraints: SidebarConstraints, sidebar_width: f64) -> Self {
        Self {
            constraints,
            container_width: 0.0,
            sidebar_width,
        }
    }

    pub fn constraints(&self) -> &SidebarConstraints {
        &self.constraints
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn sidebar_width(&self) -> f64 {
        self.sidebar_width
    }

    /// Width left for the content next to the sidebar.
    pub fn content_width(&self) -> f64 {
        (self.container_width - self.sidebar_width).max(0.0)
    }

    /// Handle a container resize. Returns the new sidebar width.
    pub fn container_resized(&mut self, width: f64) -> f64 {
        self.container_width = width;
        self.sidebar_width = self.constraints.resolve(width, self.sidebar_width);

        tracing::debug!(
            container_width = width,
            sidebar_width = self.sidebar_width,
            "Resolved sidebar width"
        );

        self.sidebar_width
    }

    /// Handle the user dragging the divider to `proposed_width`. Returns the accepted width.
    pub fn drag_divider(&mut self, proposed_width: f64) -> f64 {
        self.sidebar_width = self
            .constraints
            .resolve(self.container_width, proposed_width);
        self.sidebar_width
    }

    /// Replace the constraints and re-resolve against the current container.
    pub fn set_constraints(&mut self, constraints: SidebarConstraints) -> f64 {
        self.constraints = constraints;
        self.container_resized(self.container_width)
    }
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self::new(SidebarConstraints::default(), 0.0)
    }
}
