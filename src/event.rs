//! Event handling module.
//!
//! This module reads terminal events from crossterm's async event stream and
//! converts them to application actions. Focus reports arrive here too, but
//! only while the focus guard has enabled them.

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Move selection up
    Up,
    /// Move selection down
    Down,
    /// Move to the previous field
    Left,
    /// Move to the next field
    Right,
    /// Switch the focused panel
    NextPanel,
    /// Start the selected preset / submit a dialog
    Enter,
    /// Close a dialog
    Back,
    /// Toggle the selected allow-list app
    ToggleApp,
    /// Open the custom timer dialog
    CustomTimer,
    /// Stop the running session
    Stop,
    /// Toggle SOS mode
    ToggleSos,
    /// Open the study materials dialog
    AddMaterials,
    /// Show help
    Help,
    /// The terminal lost focus
    FocusLost,
    /// The terminal regained focus
    FocusGained,
    /// Character input (for text entry mode)
    Char(char),
    /// Backspace key (for text entry mode)
    Backspace,
}

/// Reads terminal events and converts them to application actions.
pub struct EventHandler {
    stream: EventStream,
}

impl EventHandler {
    /// Creates a new event handler on the terminal's event stream.
    pub fn new() -> Self {
        Self {
            stream: EventStream::new(),
        }
    }

    /// Waits for the next event and converts it to an Action.
    ///
    /// Returns Ok(None) for events with no mapping (key releases, resizes).
    pub async fn next(&mut self) -> io::Result<Option<Action>> {
        self.read(false).await
    }

    /// Waits for the next event in text entry mode.
    pub async fn next_input(&mut self) -> io::Result<Option<Action>> {
        self.read(true).await
    }

    async fn read(&mut self, text_entry: bool) -> io::Result<Option<Action>> {
        match self.stream.next().await {
            Some(event) => Ok(self.event_to_action(event?, text_entry)),
            // The stream only ends when the terminal goes away
            None => Ok(Some(Action::Quit)),
        }
    }

    /// Converts a terminal event to an action.
    pub(crate) fn event_to_action(&self, event: Event, text_entry: bool) -> Option<Action> {
        match event {
            Event::FocusLost => Some(Action::FocusLost),
            Event::FocusGained => Some(Action::FocusGained),
            // Only process key press events (not releases)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if text_entry {
                    self.key_to_input_action(key)
                } else {
                    self.key_to_action(key)
                }
            }
            _ => None,
        }
    }

    /// Converts a key event to an input-mode action.
    pub(crate) fn key_to_input_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Tab | KeyCode::Right => Some(Action::Right),
            KeyCode::BackTab | KeyCode::Left => Some(Action::Left),
            KeyCode::Char(c) => Some(Action::Char(c)),
            _ => None,
        }
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Navigation
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Tab => Some(Action::NextPanel),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc => Some(Action::Back),

            // Actions
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char(' ') => Some(Action::ToggleApp),
            KeyCode::Char('c') => Some(Action::CustomTimer),
            KeyCode::Char('x') => Some(Action::Stop),
            KeyCode::Char('s') => Some(Action::ToggleSos),
            KeyCode::Char('o') => Some(Action::AddMaterials),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),

            // No matching action
            _ => None,
        }
    }
}
