//! Focus guard.
//!
//! Warns the user when the terminal regains focus after losing it during a
//! session. The
//! subscription to focus reports is a scoped resource: [`FocusGuard::attach`]
//! acquires it, [`FocusGuard::detach`] or `Drop` releases it.

use std::io::{self, Write};

use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use tracing::{debug, warn};

use crate::sos::SosAccessList;

/// Source of focus-gained notifications.
pub trait FocusSource {
    /// Starts delivering focus notifications.
    fn subscribe(&mut self) -> io::Result<()>;
    /// Stops delivering focus notifications.
    fn unsubscribe(&mut self) -> io::Result<()>;
}

/// Sink for the distraction warning.
pub trait Warner {
    fn warn(&mut self, message: &str) -> io::Result<()>;
}

/// Focus reports from the controlling terminal.
///
/// Crossterm only emits `FocusGained` / `FocusLost` while focus-change
/// reporting is enabled, so subscribing toggles that mode.
#[derive(Debug, Default)]
pub struct TerminalFocus;

impl FocusSource for TerminalFocus {
    fn subscribe(&mut self) -> io::Result<()> {
        execute!(io::stdout(), EnableFocusChange)
    }

    fn unsubscribe(&mut self) -> io::Result<()> {
        execute!(io::stdout(), DisableFocusChange)
    }
}

/// Alert state shown by the UI when a warning fires.
#[derive(Debug, Default)]
pub struct Alerts {
    /// Message of the alert currently on screen
    pub current: Option<String>,
    /// Number of warnings raised since startup
    pub raised: usize,
    /// Ring the terminal bell with each warning
    pub bell: bool,
}

impl Alerts {
    pub fn new(bell: bool) -> Self {
        Self {
            bell,
            ..Self::default()
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Warner for Alerts {
    fn warn(&mut self, message: &str) -> io::Result<()> {
        self.current = Some(message.to_string());
        self.raised += 1;
        if self.bell {
            let mut stdout = io::stdout();
            stdout.write_all(b"\x07")?;
            stdout.flush()?;
        }
        Ok(())
    }
}

/// Subscription to focus reports, held only while a session runs.
pub struct FocusGuard {
    source: Box<dyn FocusSource>,
    attached: bool,
    focus_lost: bool,
    message: String,
}

impl FocusGuard {
    pub fn new(source: Box<dyn FocusSource>, message: impl Into<String>) -> Self {
        Self {
            source,
            attached: false,
            focus_lost: false,
            message: message.into(),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Subscribes to focus reports. Does nothing when already attached.
    pub fn attach(&mut self) -> io::Result<()> {
        if self.attached {
            return Ok(());
        }
        self.source.subscribe()?;
        self.attached = true;
        // Reports from before this run do not count
        self.focus_lost = false;
        debug!("focus guard attached");
        Ok(())
    }

    /// Releases the subscription. Does nothing when detached.
    pub fn detach(&mut self) -> io::Result<()> {
        if !self.attached {
            return Ok(());
        }
        self.attached = false;
        debug!("focus guard detached");
        self.source.unsubscribe()
    }

    /// Records that the terminal lost focus. Ignored when detached.
    pub fn on_focus_lost(&mut self) {
        if self.attached {
            debug!("focus lost during session");
            self.focus_lost = true;
        }
    }

    /// Reacts to the terminal regaining focus.
    ///
    /// Only a gain that follows a loss counts; terminals may send a gain as
    /// soon as reporting is enabled. Returns true when a warning was raised.
    /// Errors from the warner are logged and dropped.
    pub fn on_focus_gained(&mut self, sos: &SosAccessList, warner: &mut dyn Warner) -> bool {
        if !self.attached || !self.focus_lost {
            return false;
        }
        self.focus_lost = false;
        if sos.is_enabled() {
            debug!(allowed = sos.allowed_count(), "focus regained in SOS mode");
            return false;
        }

        if let Err(e) = warner.warn(&self.message) {
            warn!("failed to raise focus warning: {e}");
        }
        true
    }
}

impl Drop for FocusGuard {
    fn drop(&mut self) {
        if let Err(e) = self.detach() {
            warn!("failed to release focus subscription: {e}");
        }
    }
}
