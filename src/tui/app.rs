//! TUI application state and event handling.
//!
//! The `App` owns the displayed [`Conversation`] and the [`StoreSource`] it came
//! from. A reload runs the whole load pipeline and swaps the result in at once;
//! there are no partial updates.

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_message;
use crate::loader::StoreSource;
use crate::models::Conversation;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Rows moved by PageUp/PageDown
const PAGE_SIZE: isize = 10;

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

pub struct App {
    source: StoreSource,
    conversation: Conversation,
    store_found: bool,
    selected_idx: usize,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    /// Create the app and perform the initial load
    pub fn new(source: StoreSource) -> Self {
        let mut app = Self::with_conversation(source, None);
        app.reload();
        app
    }

    /// Create the app around an already loaded conversation
    pub fn with_conversation(source: StoreSource, conversation: Option<Conversation>) -> Self {
        Self {
            source,
            store_found: conversation.is_some(),
            conversation: conversation.unwrap_or_default(),
            selected_idx: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType) {
        let duration_ms = match message_type {
            MessageType::Success => STATUS_SUCCESS_DURATION_MS,
            MessageType::Error => STATUS_ERROR_DURATION_MS,
        };
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn clear_expired_status(&mut self) {
        if self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at) {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.clear_expired_status();

            // Redraw when dirty, or every 100ms so resizes and relative times stay current
            let now = Instant::now();
            let stale = now.duration_since(self.last_draw_time) >= Duration::from_millis(100);
            if self.needs_redraw || stale {
                terminal.draw(|f| render_ui(f, &self.render_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn render_state(&self) -> RenderState<'_> {
        RenderState {
            messages: &self.conversation.messages,
            selected_idx: self.selected_idx,
            source: self.conversation.source.as_deref().unwrap_or(self.source.path()),
            store_found: self.store_found,
            status_message: self.status_message.as_ref(),
            now: Utc::now(),
        }
    }

    fn handle_action(&mut self, action: Action) {
        let total = self.conversation.len();
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_selection(-1, total),
            Action::MoveDown => self.move_selection(1, total),
            Action::PageUp => self.move_selection(-PAGE_SIZE, total),
            Action::PageDown => self.move_selection(PAGE_SIZE, total),
            Action::First => self.move_selection(isize::MIN / 2, total),
            Action::Last => self.move_selection(isize::MAX / 2, total),
            Action::Reload => self.reload(),
            Action::CopyToClipboard => self.copy_selected(),
            Action::None => {}
        }
    }

    /// Re-run the load pipeline and replace the displayed conversation
    fn reload(&mut self) {
        match self.source.load() {
            Some(conversation) => {
                let count = conversation.len();
                self.conversation = conversation;
                self.store_found = true;
                self.set_status(format!("✓ Loaded {} messages", count), MessageType::Success);
            }
            None => {
                self.conversation = Conversation::default();
                self.store_found = false;
                self.set_status("✗ No conversation store found", MessageType::Error);
            }
        }
        self.selected_idx = 0;
    }

    fn copy_selected(&mut self) {
        let Some(message) = self.conversation.messages.get(self.selected_idx) else {
            self.set_status("✗ No message to copy", MessageType::Error);
            return;
        };

        match copy_message(message) {
            Ok(()) => self.set_status("✓ Copied to clipboard", MessageType::Success),
            Err(e) => self.set_status(format!("✗ Clipboard error: {}", e), MessageType::Error),
        }
    }

    fn move_selection(&mut self, delta: isize, total: usize) {
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize).saturating_add(delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }
}
