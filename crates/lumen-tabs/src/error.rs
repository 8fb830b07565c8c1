//! Tab error types
//!
//! Both variants are caller bugs, not runtime conditions. Operations documented as
//! "do nothing" on a missing tab stay silent instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index {index} out of range for {count} tabs")]
    OutOfRange { index: usize, count: usize },
}
