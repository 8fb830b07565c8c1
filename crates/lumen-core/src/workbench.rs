//! Application-level window management
//!
//! The workbench owns every open window and tracks which one is key. Document open
//! requests go to the window already showing the document, otherwise to the key window.

use std::sync::Arc;

use url::Url;

use crate::config::Config;
use crate::error::CoreError;
use crate::window::{ControllerFactory, Window, WindowId};
use crate::Result;

#[derive(Debug)]
pub struct Workbench {
    config: Config,
    windows: Vec<Window>,
    key_window: Option<WindowId>,
}

impl Workbench {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            windows: Vec::new(),
            key_window: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Open a new window and make it key.
    pub fn open_window(&mut self, factory: Arc<dyn ControllerFactory>) -> WindowId {
        let window = Window::new(&self.config, factory);
        let id = window.id();

        self.windows.push(window);
        self.key_window = Some(id);

        tracing::info!(window_id = %id, windows = self.windows.len(), "Opened window");
        id
    }

    /// Close a window if all of its tabs agree to close.
    ///
    /// Returns `Ok(false)` when a tab refused; the window stays open.
    pub fn close_window(&mut self, id: WindowId) -> Result<bool> {
        let index = self.index_of(id)?;

        if !self.windows[index].should_close() {
            tracing::info!(window_id = %id, "Window refused to close");
            return Ok(false);
        }

        self.windows.remove(index);
        if self.key_window == Some(id) {
            self.key_window = self.windows.last().map(Window::id);
        }

        tracing::info!(window_id = %id, windows = self.windows.len(), "Closed window");
        Ok(true)
    }

    pub fn set_key_window(&mut self, id: WindowId) -> Result<()> {
        self.index_of(id)?;
        self.key_window = Some(id);
        Ok(())
    }

    pub fn key_window_id(&self) -> Option<WindowId> {
        self.key_window
    }

    pub fn key_window(&self) -> Option<&Window> {
        self.key_window.and_then(|id| self.window(id))
    }

    pub fn key_window_mut(&mut self) -> Option<&mut Window> {
        let id = self.key_window?;
        self.window_mut(id)
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id() == id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id() == id)
    }

    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Show `document` in the window that already has it, or open it in the key window.
    ///
    /// Returns `Ok(false)` when the key window cannot open this kind of document.
    pub fn open_document(&mut self, document: &Url) -> Result<bool> {
        if let Some(index) = self
            .windows
            .iter()
            .position(|w| w.contains_document(document))
        {
            let window = &mut self.windows[index];
            self.key_window = Some(window.id());
            return Ok(window.open_document(document));
        }

        let window = self.key_window_mut().ok_or(CoreError::NoWindow)?;
        Ok(window.open_document(document))
    }

    /// Close every window in order, asking each to close all of its tabs.
    ///
    /// Stops at the first window with a refusing tab and returns false. Windows
    /// closed before it stay closed and the refusing window becomes key.
    pub fn should_terminate(&mut self) -> bool {
        while let Some(window) = self.windows.first_mut() {
            if !window.should_close() {
                let id = window.id();
                tracing::info!(window_id = %id, "Window refused to close, not terminating");
                self.key_window = Some(id);
                return false;
            }
            self.windows.remove(0);
        }

        self.key_window = None;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn index_of(&self, id: WindowId) -> Result<usize> {
        self.windows
            .iter()
            .position(|w| w.id() == id)
            .ok_or_else(|| CoreError::WindowNotFound(id.to_string()))
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
