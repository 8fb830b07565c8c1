//! Layout error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid sidebar constraint: {0}")]
    InvalidConstraint(String),
}
