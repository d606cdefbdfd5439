//! Interactive converter state and event handling.
//!
//! The `App` struct owns all application state and runs the main event loop
//! via `run()`:
//!
//! - **Live conversion**: every keystroke re-converts the input buffer
//! - **Debounced history**: a conversion is recorded only after the
//!   (input, from, to) triple has been stable for 800ms and differs from
//!   the last-recorded triple; any superseding input event cancels the
//!   pending record
//! - **History panel**: select, reload, delete and clear past conversions
//! - **Status messages**: transient feedback for clipboard and storage
//! - **Dirty state tracking**: redraw only when state changes, plus a
//!   30-second refresh so relative timestamps stay current

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::engine::{convert, strip_grouping};
use crate::ledger::HistoryLedger;
use crate::models::{ConversionRecord, ConversionResult, Radix, Theme};
use crate::storage::KeyValueStore;

/// Quiet period before a stable conversion is recorded (milliseconds)
pub const HISTORY_DEBOUNCE_MS: u64 = 800;
/// Relative timestamps are refreshed this often (seconds)
pub const TIMESTAMP_REFRESH_SECS: u64 = 30;
/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 2000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 4000;
/// Longest accepted input; covers 64 binary digits with slack for zeros
const MAX_INPUT_LEN: usize = 128;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// A conversion waiting out its debounce quiet period
#[derive(Debug, Clone)]
struct PendingRecord {
    from_text: String,
    to_text: String,
    from: Radix,
    to: Radix,
    due: Instant,
}

pub struct App {
    input: String,
    from: Radix,
    to: Radix,
    result: Option<ConversionResult>,
    error: Option<String>,
    ledger: HistoryLedger,
    store: Box<dyn KeyValueStore>,
    theme: Theme,
    selected_idx: usize,
    pending: Option<PendingRecord>,
    last_recorded: Option<(String, Radix, Radix)>,
    status_message: Option<StatusMessage>,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
    last_timestamp_refresh: Instant,
}

impl App {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_bases(store, Radix::Decimal, Radix::Binary)
    }

    pub fn with_bases(store: Box<dyn KeyValueStore>, from: Radix, to: Radix) -> Self {
        let ledger = HistoryLedger::load(store.as_ref());
        let theme = Theme::load(store.as_ref());

        Self {
            input: String::new(),
            from,
            to,
            result: None,
            error: None,
            ledger,
            store,
            theme,
            selected_idx: 0,
            pending: None,
            last_recorded: None,
            status_message: None,
            should_quit: false,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
            last_timestamp_refresh: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Advance time-driven state: flush a due debounced record, expire the
    /// status message, refresh relative timestamps.
    pub fn tick(&mut self, now: Instant) {
        if self.pending.as_ref().is_some_and(|p| now >= p.due) {
            let pending = self.pending.take().unwrap();
            self.last_recorded =
                Some((pending.from_text.clone(), pending.from, pending.to));
            let record = ConversionRecord::new(
                pending.from_text,
                pending.to_text,
                pending.from,
                pending.to,
            );
            match self.ledger.append(record, self.store.as_mut()) {
                Ok(true) => self.needs_redraw = true,
                Ok(false) => {}
                Err(e) => {
                    self.set_status(
                        format!("✗ Failed to save history: {e}"),
                        MessageType::Error,
                        STATUS_ERROR_DURATION_MS,
                    );
                }
            }
        }

        if self.status_message.as_ref().is_some_and(|msg| now >= msg.expires_at) {
            self.status_message = None;
            self.needs_redraw = true;
        }

        if now.duration_since(self.last_timestamp_refresh)
            >= Duration::from_secs(TIMESTAMP_REFRESH_SECS)
        {
            self.last_timestamp_refresh = now;
            if !self.ledger.is_empty() {
                self.needs_redraw = true;
            }
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.tick(Instant::now());

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    let state = RenderState {
                        input: &self.input,
                        from: self.from,
                        to: self.to,
                        output: self.result.as_ref().map(|r| r.formatted_digits.as_str()),
                        error: self.error.as_deref(),
                        value: self.result.as_ref().map(|r| r.value),
                        entries: self.ledger.entries(),
                        selected_idx: self.selected_idx,
                        theme: self.theme,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            if action != Action::None {
                self.handle_action(action, Instant::now());
            }
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::InsertChar(c) => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                    self.refresh_conversion(now);
                }
            }
            Action::Backspace => {
                if self.input.pop().is_some() {
                    self.refresh_conversion(now);
                }
            }
            Action::ClearInput => {
                if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                    self.last_recorded = None; // allow re-logging after clear
                    self.refresh_conversion(now);
                }
            }
            Action::Swap => self.swap(now),
            Action::CycleFromBase => {
                self.from = self.from.next();
                if self.from == self.to {
                    self.from = self.from.next();
                }
                self.refresh_conversion(now);
            }
            Action::CycleToBase => {
                self.to = self.to.next();
                if self.to == self.from {
                    self.to = self.to.next();
                }
                self.refresh_conversion(now);
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::LoadSelected => self.load_selected(now),
            Action::DeleteSelected => self.delete_selected(),
            Action::ClearHistory => self.clear_history(),
            Action::CopyResult => self.copy_result(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::None => {}
        }
    }

    /// Recompute the conversion for the current (input, from, to) and, when
    /// it is valid and not already recorded, arm the debounce deadline.
    /// Every call supersedes whatever record was pending.
    fn refresh_conversion(&mut self, now: Instant) {
        self.pending = None;
        self.error = None;
        self.needs_redraw = true;

        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            self.result = None;
            return;
        }

        match convert(trimmed, self.from, self.to) {
            Ok(result) => {
                let from_text = trimmed.to_ascii_uppercase();
                let key = (from_text.clone(), self.from, self.to);
                if self.last_recorded.as_ref() != Some(&key) {
                    self.pending = Some(PendingRecord {
                        from_text,
                        to_text: result.raw_digits.clone(),
                        from: self.from,
                        to: self.to,
                        due: now + Duration::from_millis(HISTORY_DEBOUNCE_MS),
                    });
                }
                self.result = Some(result);
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Exchange the two bases and feed the stripped output back as input
    fn swap(&mut self, now: Instant) {
        std::mem::swap(&mut self.from, &mut self.to);

        if let Some(result) = &self.result {
            self.input = strip_grouping(&result.formatted_digits);
        }

        self.last_recorded = None; // allow re-logging after swap
        self.refresh_conversion(now);
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.ledger.len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    /// Put the selected history entry back into the converter
    fn load_selected(&mut self, now: Instant) {
        let Some(entry) = self.ledger.get(self.selected_idx).cloned() else {
            return;
        };

        self.from = entry.from_base;
        self.to = entry.to_base;
        self.input = entry.from;
        self.refresh_conversion(now);
        self.set_status("Loaded into converter", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
    }

    fn delete_selected(&mut self) {
        match self.ledger.remove(self.selected_idx, self.store.as_mut()) {
            Ok(true) => {
                if self.selected_idx >= self.ledger.len() && self.selected_idx > 0 {
                    self.selected_idx -= 1;
                }
                self.needs_redraw = true;
            }
            Ok(false) => {}
            Err(e) => {
                self.set_status(
                    format!("✗ Failed to save history: {e}"),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn clear_history(&mut self) {
        if let Err(e) = self.ledger.clear(self.store.as_mut()) {
            self.set_status(
                format!("✗ Failed to save history: {e}"),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            );
            return;
        }
        self.selected_idx = 0;
        self.set_status("History cleared", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
    }

    /// Copy the canonical (ungrouped) result digits
    fn copy_result(&mut self) {
        let Some(result) = &self.result else {
            self.set_status("✗ Nothing to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_to_clipboard(&result.raw_digits) {
            Ok(()) => {
                self.set_status(
                    "✓ Copied to clipboard",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                self.set_status(
                    format!("✗ Clipboard error: {e}"),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        if let Err(e) = self.theme.save(self.store.as_mut()) {
            self.set_status(
                format!("✗ Failed to save theme: {e}"),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            );
        }
        self.needs_redraw = true;
    }
}
