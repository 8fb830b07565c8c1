//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] lumen_tabs::TabError),

    #[error("Layout error: {0}")]
    Layout(#[from] lumen_layout::LayoutError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No window is open")]
    NoWindow,

    #[error("Window not found: {0}")]
    WindowNotFound(String),
}
