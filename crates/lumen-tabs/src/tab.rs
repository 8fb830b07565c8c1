//! Tab item data structure
//!
//! A tab item is identity plus presentation state. Two items with the same title are
//! still different tabs; identity is the [`TabId`] assigned at creation and kept by
//! clones.

use lumen_geometry::Rect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::{Color, Gradient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(Uuid);

impl TabId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the tab background is painted. A solid color and a gradient exclude each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Fill {
    #[default]
    None,
    Solid(Color),
    Gradient(Gradient),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabItem {
    id: TabId,
    /// Text shown in the tab
    title: String,
    fill: Fill,
    /// Hidden unless the tab is active or hovered
    close_button_hidden: bool,
    /// Drawn with a thicker stroke while the pointer is over it
    close_button_highlighted: bool,
    /// Position and size in the tab bar's coordinate space
    frame: Rect,
}

impl TabItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TabId::new(),
            title: title.into(),
            fill: Fill::None,
            close_button_hidden: true,
            close_button_highlighted: false,
            frame: Rect::ZERO,
        }
    }

    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    pub fn set_fill(&mut self, fill: Fill) {
        self.fill = fill;
    }

    pub fn color(&self) -> Option<Color> {
        match &self.fill {
            Fill::Solid(color) => Some(*color),
            _ => None,
        }
    }

    /// Setting a color drops any gradient. Clearing the color leaves a gradient alone.
    pub fn set_color(&mut self, color: Option<Color>) {
        match color {
            Some(color) => self.fill = Fill::Solid(color),
            None if matches!(self.fill, Fill::Solid(_)) => self.fill = Fill::None,
            None => {}
        }
    }

    pub fn gradient_colors(&self) -> Option<&[Color]> {
        match &self.fill {
            Fill::Gradient(gradient) => Some(gradient.colors()),
            _ => None,
        }
    }

    /// Setting a gradient drops any solid color. Clearing the gradient leaves a color alone.
    pub fn set_gradient(&mut self, gradient: Option<Gradient>) {
        match gradient {
            Some(gradient) => self.fill = Fill::Gradient(gradient),
            None if matches!(self.fill, Fill::Gradient(_)) => self.fill = Fill::None,
            None => {}
        }
    }

    pub fn close_button_hidden(&self) -> bool {
        self.close_button_hidden
    }

    pub fn set_close_button_hidden(&mut self, hidden: bool) {
        self.close_button_hidden = hidden;
    }

    pub fn close_button_highlighted(&self) -> bool {
        self.close_button_highlighted
    }

    pub fn set_close_button_highlighted(&mut self, highlighted: bool) {
        self.close_button_highlighted = highlighted;
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}
