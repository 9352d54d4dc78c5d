//! Application state and logic.
//!
//! This module contains the application state, view management and the
//! mapping from user actions to the focus session, SOS list and materials.

use ratatui::widgets::ListState;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::Settings;
use crate::duration::{format_clock, preset_label, preset_seconds, CustomDurationInput};
use crate::event::Action;
use crate::focus::{Alerts, FocusSource};
use crate::materials::{parse_selection, StudyMaterialsList};
use crate::session::FocusSession;
use crate::sos::SosAccessList;
use crate::timer::TimerPhase;

/// The different views/screens in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Timer, tree, presets and SOS panel
    Timer,
    /// Text input mode (custom duration, study materials)
    Input(InputMode),
}

/// Different input modes for text entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Hours / minutes / seconds of a custom session
    CustomDuration,
    /// Paths of study materials to add
    Materials,
}

/// Panel of the timer view that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Presets,
    Apps,
}

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Labels of the custom duration fields, in order.
pub const CUSTOM_FIELDS: [&str; 3] = ["Hours", "Minutes", "Seconds"];

/// Longest text accepted in a custom duration field.
const CUSTOM_FIELD_WIDTH: usize = 4;

/// Main application state.
pub struct App {
    /// Loaded settings (presets, app names, alert text)
    pub settings: Settings,
    /// Countdown, tick schedule and focus guard
    pub session: FocusSession,
    /// SOS mode and allowed apps
    pub sos: SosAccessList,
    /// Names of added PDFs
    pub materials: StudyMaterialsList,
    /// Focus alert shown over the UI
    pub alerts: Alerts,
    /// Current view/screen
    pub current_view: View,
    /// Status message to display
    pub status: Option<StatusMessage>,

    // --- Timer view state ---
    /// Panel receiving navigation keys
    pub panel: Panel,
    /// Selection state for the presets list
    pub presets_state: ListState,
    /// Selection state for the allowed apps list
    pub apps_state: ListState,

    // --- Input state ---
    /// Text of the hours / minutes / seconds fields
    pub custom_fields: [String; 3],
    /// Index of the focused custom field
    pub custom_field: usize,
    /// Current input buffer for path entry
    pub input_buffer: String,

    // --- Help visibility ---
    pub show_help: bool,
}

impl App {
    /// Creates the application with the given settings and focus source.
    pub fn new(settings: Settings, focus_source: Box<dyn FocusSource>) -> Self {
        let session = FocusSession::new(focus_source, settings.warning_message.clone());
        let alerts = Alerts::new(settings.bell);

        let mut presets_state = ListState::default();
        presets_state.select(Some(0));
        let mut apps_state = ListState::default();
        if !settings.allowed_apps.is_empty() {
            apps_state.select(Some(0));
        }

        Self {
            settings,
            session,
            sos: SosAccessList::new(),
            materials: StudyMaterialsList::new(),
            alerts,
            current_view: View::Timer,
            status: None,
            panel: Panel::Presets,
            presets_state,
            apps_state,
            custom_fields: Default::default(),
            custom_field: 0,
            input_buffer: String::new(),
            show_help: false,
        }
    }

    /// Whether key presses should be read as text.
    pub fn is_text_entry(&self) -> bool {
        matches!(self.current_view, View::Input(_))
            && self.alerts.current.is_none()
            && !self.show_help
    }

    /// Runs the ticks due at `now`.
    pub fn on_tick(&mut self, now: Instant) {
        if self.session.tick_due(now) {
            self.set_status("Session complete! Your tree is fully grown.", false);
        }
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> bool {
        // Focus reports are handled whatever is on screen
        match action {
            Action::FocusLost => {
                self.session.on_focus_lost();
                return false;
            }
            Action::FocusGained => {
                self.on_focus_gained();
                return false;
            }
            _ => {}
        }

        // An open alert swallows the next key
        if self.alerts.current.is_some() {
            if action == Action::Quit {
                return true;
            }
            self.alerts.dismiss();
            return false;
        }

        // Handle help toggle from any view
        if action == Action::Help && !self.is_text_entry() {
            self.show_help = !self.show_help;
            return false;
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return false;
        }

        match self.current_view.clone() {
            View::Input(mode) => self.handle_input_action(action, mode),
            View::Timer => self.handle_timer_action(action),
        }
    }

    fn on_focus_gained(&mut self) {
        if self.session.on_focus_gained(&self.sos, &mut self.alerts) {
            info!(raised = self.alerts.raised, "focus warning raised");
        }
    }

    /// Handles actions in the timer view.
    fn handle_timer_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Up => self.select_previous(),
            Action::Down => self.select_next(),
            Action::NextPanel => self.switch_panel(),
            Action::Enter => match self.panel {
                Panel::Presets => self.start_selected_preset(),
                Panel::Apps => self.toggle_selected_app(),
            },
            Action::ToggleApp => self.toggle_selected_app(),
            Action::CustomTimer => self.open_input(InputMode::CustomDuration),
            Action::AddMaterials => self.open_input(InputMode::Materials),
            Action::Stop => self.stop_session(),
            Action::ToggleSos => self.toggle_sos(),
            _ => {}
        }
        false
    }

    /// Handles actions during text input.
    fn handle_input_action(&mut self, action: Action, mode: InputMode) -> bool {
        match action {
            Action::Quit => return true,
            Action::Back => self.go_back(),
            Action::Enter => self.submit_input(mode),
            Action::Char(c) => self.input_char(mode, c),
            Action::Backspace => self.input_backspace(mode),
            Action::Right if mode == InputMode::CustomDuration => {
                self.custom_field = (self.custom_field + 1) % CUSTOM_FIELDS.len();
            }
            Action::Left if mode == InputMode::CustomDuration => {
                self.custom_field = (self.custom_field + CUSTOM_FIELDS.len() - 1) % CUSTOM_FIELDS.len();
            }
            _ => {}
        }
        false
    }

    // --- Navigation helpers ---

    fn focused_list(&mut self) -> (&mut ListState, usize) {
        match self.panel {
            Panel::Presets => (&mut self.presets_state, self.settings.presets.len()),
            Panel::Apps => (&mut self.apps_state, self.settings.allowed_apps.len()),
        }
    }

    fn select_previous(&mut self) {
        let (state, len) = self.focused_list();
        if len == 0 {
            return;
        }
        let current = state.selected().unwrap_or(0);
        let new = if current == 0 { len - 1 } else { current - 1 };
        state.select(Some(new));
    }

    fn select_next(&mut self) {
        let (state, len) = self.focused_list();
        if len == 0 {
            return;
        }
        let current = state.selected().unwrap_or(0);
        let new = if current >= len - 1 { 0 } else { current + 1 };
        state.select(Some(new));
    }

    fn switch_panel(&mut self) {
        self.panel = match self.panel {
            Panel::Presets if self.sos.is_enabled() => Panel::Apps,
            Panel::Presets => {
                self.set_status("Enable SOS with 's' to choose allowed apps", false);
                Panel::Presets
            }
            Panel::Apps => Panel::Presets,
        };
    }

    /// Goes back to the timer view.
    fn go_back(&mut self) {
        self.current_view = View::Timer;
        self.input_buffer.clear();
    }

    // --- Session control ---

    fn start_selected_preset(&mut self) {
        let Some(minutes) = self.selected_preset() else {
            return;
        };
        debug!(minutes, "preset selected");
        self.start_session(preset_seconds(minutes), &preset_label(minutes));
    }

    fn start_session(&mut self, duration_seconds: u32, label: &str) {
        match self.session.start(duration_seconds, Instant::now()) {
            Ok(TimerPhase::Completed) => {
                self.set_status("Nothing to grow: the session length is zero", false);
            }
            Ok(_) => {
                self.set_status(&format!("Focus session started: {label}"), false);
            }
            Err(e) => self.set_status(&e.to_string(), true),
        }
    }

    fn stop_session(&mut self) {
        if self.session.stop() {
            let remaining = format_clock(self.session.remaining_seconds());
            self.set_status(&format!("Session stopped with {remaining} left"), false);
        } else {
            self.set_status("No session is running", true);
        }
    }

    // --- SOS ---

    fn toggle_sos(&mut self) {
        if self.sos.toggle_mode() {
            info!("SOS mode enabled");
            self.set_status("SOS enabled: focus warnings are off", false);
        } else {
            info!("SOS mode disabled");
            self.panel = Panel::Presets;
            self.set_status("SOS disabled: focus warnings are back on", false);
        }
    }

    fn toggle_selected_app(&mut self) {
        if !self.sos.is_enabled() {
            self.set_status("Enable SOS with 's' to choose allowed apps", true);
            return;
        }
        let Some(name) = self
            .apps_state
            .selected()
            .and_then(|idx| self.settings.allowed_apps.get(idx).cloned())
        else {
            return;
        };
        let allowed = self.sos.toggle_app(&name);
        debug!(
            apps = ?self.sos.allowed_apps().collect::<Vec<_>>(),
            "allow-list changed"
        );
        if allowed {
            self.set_status(&format!("Allowed {name}"), false);
        } else {
            self.set_status(&format!("Removed {name}"), false);
        }
    }

    // --- Input handling ---

    fn open_input(&mut self, mode: InputMode) {
        // Inputs are locked while a session runs, like the start buttons
        if self.session.is_running() {
            self.set_status("Stop the running session first", true);
            return;
        }
        if mode == InputMode::CustomDuration {
            self.custom_fields = Default::default();
            self.custom_field = 0;
        }
        self.input_buffer.clear();
        self.current_view = View::Input(mode);
    }

    fn submit_input(&mut self, mode: InputMode) {
        match mode {
            InputMode::CustomDuration => {
                let [hours, minutes, seconds] = &self.custom_fields;
                match CustomDurationInput::parse(hours, minutes, seconds) {
                    Ok(input) => {
                        self.go_back();
                        let label = format_clock(input.total_seconds());
                        self.start_session(input.total_seconds(), &label);
                    }
                    // Stay in the dialog so the field can be fixed
                    Err(e) => self.set_status(&e.to_string(), true),
                }
            }
            InputMode::Materials => {
                let files = parse_selection(&self.input_buffer);
                self.go_back();
                if files.is_empty() {
                    self.set_status("No files entered", true);
                    return;
                }
                let accepted = self.materials.add_selection(&files);
                let skipped = files.len() - accepted;
                info!(accepted, skipped, "study materials added");
                if skipped == 0 {
                    self.set_status(&format!("Added {accepted} PDF(s)"), false);
                } else {
                    self.set_status(
                        &format!("Added {accepted} PDF(s), skipped {skipped} non-PDF file(s)"),
                        accepted == 0,
                    );
                }
            }
        }
    }

    /// Appends a character to the focused input.
    pub fn input_char(&mut self, mode: InputMode, c: char) {
        match mode {
            InputMode::CustomDuration => {
                let field = &mut self.custom_fields[self.custom_field];
                if field.chars().count() < CUSTOM_FIELD_WIDTH {
                    field.push(c);
                }
            }
            InputMode::Materials => self.input_buffer.push(c),
        }
    }

    /// Removes the last character from the focused input.
    pub fn input_backspace(&mut self, mode: InputMode) {
        match mode {
            InputMode::CustomDuration => {
                self.custom_fields[self.custom_field].pop();
            }
            InputMode::Materials => {
                self.input_buffer.pop();
            }
        }
    }

    // --- Status message helpers ---

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }

    /// Returns the currently selected preset in minutes (if any).
    pub fn selected_preset(&self) -> Option<u32> {
        self.presets_state
            .selected()
            .and_then(|idx| self.settings.presets.get(idx).copied())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::focus::testing::RecordingSource;
    use crate::stage::GrowthStage;

    fn app() -> App {
        let settings = Settings {
            bell: false,
            ..Settings::default()
        };
        let (source, _) = RecordingSource::new();
        App::new(settings, Box::new(source))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(Action::Char(c));
        }
    }

    #[test]
    fn test_enter_starts_selected_preset() {
        let mut app = app();
        app.handle_event(Action::Down); // 30 min
        app.handle_event(Action::Enter);

        assert!(app.session.is_running());
        assert_eq!(app.session.initial_seconds(), 30 * 60);
        assert!(app.session.is_focus_guarded());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app();
        app.handle_event(Action::Up);
        assert_eq!(app.selected_preset(), Some(180));
        app.handle_event(Action::Down);
        assert_eq!(app.selected_preset(), Some(15));
    }

    #[test]
    fn test_second_start_reports_already_running() {
        let mut app = app();
        app.handle_event(Action::Enter);
        app.handle_event(Action::Down);
        app.handle_event(Action::Enter);

        assert_eq!(app.session.initial_seconds(), 15 * 60);
        let status = app.status.as_ref().unwrap();
        assert!(status.is_error);
        assert_eq!(status.text, "A focus session is already running");
    }

    #[test]
    fn test_custom_timer_flow() {
        let mut app = app();
        app.handle_event(Action::CustomTimer);
        assert!(app.is_text_entry());

        app.handle_event(Action::Right); // minutes
        type_text(&mut app, "1");
        app.handle_event(Action::Right); // seconds
        type_text(&mut app, "30");
        app.handle_event(Action::Enter);

        assert_eq!(app.current_view, View::Timer);
        assert_eq!(app.session.initial_seconds(), 90);
        assert!(app.session.is_running());
    }

    #[test]
    fn test_custom_timer_clamps_and_coerces() {
        let mut app = app();
        app.handle_event(Action::CustomTimer);
        type_text(&mut app, "ab");
        app.handle_event(Action::Right);
        type_text(&mut app, "75");
        app.handle_event(Action::Enter);

        assert_eq!(app.session.initial_seconds(), 59 * 60);
    }

    #[test]
    fn test_negative_custom_field_keeps_dialog_open() {
        let mut app = app();
        app.handle_event(Action::CustomTimer);
        type_text(&mut app, "-1");
        app.handle_event(Action::Enter);

        assert_eq!(app.current_view, View::Input(InputMode::CustomDuration));
        assert!(app.status.as_ref().unwrap().is_error);
        assert!(!app.session.is_running());
    }

    #[test]
    fn test_inputs_locked_while_running() {
        let mut app = app();
        app.handle_event(Action::Enter);
        app.handle_event(Action::CustomTimer);
        assert_eq!(app.current_view, View::Timer);
        app.handle_event(Action::AddMaterials);
        assert_eq!(app.current_view, View::Timer);
    }

    #[test]
    fn test_stop_detaches_guard() {
        let mut app = app();
        app.handle_event(Action::Enter);
        app.handle_event(Action::Stop);

        assert!(!app.session.is_running());
        assert!(!app.session.is_focus_guarded());
        assert_eq!(app.session.remaining_seconds(), 15 * 60);
    }

    #[test]
    fn test_focus_warning_then_sos_suppresses() {
        let mut app = app();
        app.handle_event(Action::Enter);

        app.handle_event(Action::FocusLost);
        app.handle_event(Action::FocusGained);
        assert_eq!(app.alerts.raised, 1);
        assert!(app.alerts.current.is_some());

        // Any key closes the alert
        app.handle_event(Action::Down);
        assert!(app.alerts.current.is_none());

        app.handle_event(Action::ToggleSos);
        app.handle_event(Action::FocusLost);
        app.handle_event(Action::FocusGained);
        assert_eq!(app.alerts.raised, 1);
        assert!(app.alerts.current.is_none());
    }

    #[test]
    fn test_focus_gain_at_session_start_is_ignored() {
        let mut app = app();
        app.handle_event(Action::Enter);

        // Some terminals report focus as soon as reporting is enabled
        app.handle_event(Action::FocusGained);
        assert_eq!(app.alerts.raised, 0);
        assert!(app.alerts.current.is_none());
    }

    #[test]
    fn test_focus_ignored_when_idle() {
        let mut app = app();
        app.handle_event(Action::FocusLost);
        app.handle_event(Action::FocusGained);
        assert_eq!(app.alerts.raised, 0);
    }

    #[test]
    fn test_allowed_apps_follow_sos_mode() {
        let mut app = app();
        app.handle_event(Action::ToggleApp);
        assert_eq!(app.sos.allowed_count(), 0);

        app.handle_event(Action::ToggleSos);
        app.handle_event(Action::NextPanel);
        assert_eq!(app.panel, Panel::Apps);
        app.handle_event(Action::Down); // Gmail
        app.handle_event(Action::Enter);
        assert!(app.sos.is_allowed("Gmail"));

        app.handle_event(Action::ToggleSos);
        assert_eq!(app.sos.allowed_count(), 0);
        assert_eq!(app.panel, Panel::Presets);
    }

    #[test]
    fn test_materials_dialog_adds_pdfs() {
        let mut app = app();
        app.handle_event(Action::AddMaterials);
        type_text(&mut app, "notes.pdf diagram.png slides.pdf");
        app.handle_event(Action::Enter);

        assert_eq!(app.current_view, View::Timer);
        assert_eq!(app.materials.names(), ["notes.pdf", "slides.pdf"]);
        assert!(!app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_ticks_complete_session() {
        let mut app = app();
        app.handle_event(Action::CustomTimer);
        app.handle_event(Action::Left); // seconds
        type_text(&mut app, "3");
        app.handle_event(Action::Enter);

        let deadline = app.session.next_deadline().unwrap();
        app.on_tick(deadline + Duration::from_secs(2));

        assert!(!app.session.is_running());
        assert_eq!(app.session.stage(), GrowthStage::Tree);
        assert!(app.session.next_deadline().is_none());
        assert_eq!(
            app.status.as_ref().unwrap().text,
            "Session complete! Your tree is fully grown."
        );
    }

    #[test]
    fn test_help_toggles_outside_text_entry() {
        let mut app = app();
        app.handle_event(Action::Help);
        assert!(app.show_help);
        app.handle_event(Action::Enter);
        assert!(!app.show_help);
        assert!(!app.session.is_running());
    }
}
