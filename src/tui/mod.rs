//! Interactive terminal converter.
//!
//! Module structure mirrors the event-loop architecture:
//!
//! - [`app`] - application state and the main loop
//! - [`events`] - keyboard-to-action mapping
//! - [`layout`] / [`rendering`] - screen composition
//! - [`terminal`] - raw-mode lifecycle with drop-safe restore
//! - [`timestamps`] - relative time formatting for the history panel

pub mod app;
pub mod events;
pub mod layout;
pub mod rendering;
pub mod terminal;
pub mod timestamps;

use anyhow::Result;

use crate::storage::KeyValueStore;

use app::App;
use terminal::TerminalManager;

/// Launch the interactive converter over the given store
pub fn run(store: Box<dyn KeyValueStore>) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(store);
    let result = app.run(manager.terminal_mut());
    manager.restore()?;
    result
}
