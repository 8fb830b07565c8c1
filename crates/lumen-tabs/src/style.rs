//! Active and inactive tab appearance

use serde::{Deserialize, Serialize};

use crate::color::{Color, Gradient};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStyle {
    /// Solid fill of the active tab
    pub active_color: Color,
    /// Fill of every other tab and the bar behind them
    pub inactive_gradient: Gradient,
}

impl Default for TabStyle {
    fn default() -> Self {
        Self {
            active_color: Color::rgb(0xf2, 0xf2, 0xf2),
            inactive_gradient: Gradient::linear(
                Color::rgb(0xd6, 0xd6, 0xd6),
                Color::rgb(0xbd, 0xbd, 0xbd),
            ),
        }
    }
}
