//! Sidebar width constraint solving

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::Result;

/// Absolute and relative bounds on the sidebar width.
///
/// The default leaves the sidebar unconstrained: relative bounds span the whole
/// container and absolute bounds span every non-negative width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConstraints {
    pub min_absolute: f64,
    pub max_absolute: f64,
    /// Fraction of the container width
    pub min_relative: f64,
    /// Fraction of the container width
    pub max_relative: f64,
}

impl Default for SidebarConstraints {
    fn default() -> Self {
        Self {
            min_absolute: 0.0,
            max_absolute: f64::MAX,
            min_relative: 0.0,
            max_relative: 1.0,
        }
    }
}

impl SidebarConstraints {
    /// The tightened `(lower, upper)` bounds for a container width.
    ///
    /// `upper` is raised to `lower` when the bounds cross, so the range is never empty.
    pub fn effective_bounds(&self, container_width: f64) -> (f64, f64) {
        let lower = self
            .min_absolute
            .max(self.min_relative * container_width);
        let upper = self
            .max_absolute
            .min(self.max_relative * container_width);

        (lower, upper.max(lower))
    }

    pub fn resolve(&self, container_width: f64, current_width: f64) -> f64 {
        let (lower, upper) = self.effective_bounds(container_width);

        if current_width.is_nan() {
            return lower;
        }

        current_width.min(upper).max(lower)
    }

    pub fn validate(&self) -> Result<()> {
        let all = [
            ("min_absolute", self.min_absolute),
            ("max_absolute", self.max_absolute),
            ("min_relative", self.min_relative),
            ("max_relative", self.max_relative),
        ];

        for (name, value) in all {
            if value.is_nan() || value < 0.0 {
                return Err(LayoutError::InvalidConstraint(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in &all[2..] {
            if *value > 1.0 {
                return Err(LayoutError::InvalidConstraint(format!(
                    "{} is a fraction of the container and must be at most 1, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Resolve the sidebar width for a container width and the four bounds.
///
/// Effective lower bound is `max(min_abs, min_rel * container_width)`, effective upper
/// bound is `min(max_abs, max_rel * container_width)`. Crossed bounds pin the sidebar
/// to the lower one. Depends on nothing but its arguments.
pub fn resolve(
    container_width: f64,
    min_abs: f64,
    max_abs: f64,
    min_rel: f64,
    max_rel: f64,
    current_width: f64,
) -> f64 {
    SidebarConstraints {
        min_absolute: min_abs,
        max_absolute: max_abs,
        min_relative: min_rel,
        max_relative: max_rel,
    }
    .resolve(container_width, current_width)
}
