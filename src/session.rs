//! Focus session.
//!
//! Owns the countdown, its schedule and the focus guard. Every change to the
//! running state goes through [`FocusSession::sync`], so the ticker is armed
//! and the guard attached exactly while the engine runs.
//!
//! If enabling focus reports fails, the run keeps counting down unguarded and
//! the attach is retried on every tick until it succeeds.

use chrono::{DateTime, Local, TimeDelta};
use tokio::time::Instant;
use tracing::{info, warn};

use crate::constants::TICK_INTERVAL;
use crate::error::TimerError;
use crate::focus::{FocusGuard, FocusSource, Warner};
use crate::sos::SosAccessList;
use crate::stage::{stage_for, GrowthStage};
use crate::timer::{TickOutcome, Ticker, TimerEngine, TimerPhase};

pub struct FocusSession {
    engine: TimerEngine,
    ticker: Ticker,
    guard: FocusGuard,
}

impl FocusSession {
    pub fn new(source: Box<dyn FocusSource>, warning_message: impl Into<String>) -> Self {
        Self {
            engine: TimerEngine::new(),
            ticker: Ticker::new(TICK_INTERVAL),
            guard: FocusGuard::new(source, warning_message),
        }
    }

    // --- Queries ---

    pub fn phase(&self) -> TimerPhase {
        self.engine.phase()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn initial_seconds(&self) -> u32 {
        self.engine.initial_seconds()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.engine.remaining_seconds()
    }

    pub fn progress(&self) -> f64 {
        self.engine.progress()
    }

    pub fn stage(&self) -> GrowthStage {
        stage_for(self.engine.progress())
    }

    pub fn is_focus_guarded(&self) -> bool {
        self.guard.is_attached()
    }

    /// When the event loop must wake for the next tick.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.next_deadline()
    }

    /// Wall-clock time at which the running session will end.
    pub fn ends_at(&self) -> Option<DateTime<Local>> {
        self.is_running()
            .then(|| Local::now() + TimeDelta::seconds(i64::from(self.remaining_seconds())))
    }

    // --- Commands ---

    /// Starts a session of `duration_seconds`.
    pub fn start(&mut self, duration_seconds: u32, now: Instant) -> Result<TimerPhase, TimerError> {
        let phase = self.engine.start(duration_seconds)?;
        info!(duration_seconds, "focus session started");
        if phase == TimerPhase::Completed {
            info!("zero-length session completed immediately");
        }
        self.sync(now);
        Ok(phase)
    }

    /// Stops the running session. Returns false if nothing was running.
    pub fn stop(&mut self) -> bool {
        let stopped = self.engine.stop();
        if stopped {
            info!(
                remaining_seconds = self.engine.remaining_seconds(),
                "focus session stopped"
            );
        }
        self.sync(Instant::now());
        stopped
    }

    /// Runs every tick due at `now`, in order.
    ///
    /// Returns true if one of them completed the session.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        let due = self.ticker.take_due(now);
        let mut completed = false;
        for _ in 0..due {
            if self.engine.tick() == TickOutcome::Completed {
                info!(
                    duration_seconds = self.engine.initial_seconds(),
                    "focus session completed"
                );
                completed = true;
                break;
            }
        }
        self.sync(now);
        completed
    }

    /// Forwards a focus-lost report to the guard.
    pub fn on_focus_lost(&mut self) {
        self.guard.on_focus_lost();
    }

    /// Forwards a focus-gained report to the guard.
    pub fn on_focus_gained(&mut self, sos: &SosAccessList, warner: &mut dyn Warner) -> bool {
        self.guard.on_focus_gained(sos, warner)
    }

    /// Aligns the ticker and the guard with the engine's running state.
    fn sync(&mut self, now: Instant) {
        if self.engine.is_running() {
            self.ticker.arm(now);
            if let Err(e) = self.guard.attach() {
                warn!("failed to enable focus reporting: {e}");
            }
        } else {
            self.ticker.cancel();
            if let Err(e) = self.guard.detach() {
                warn!("failed to disable focus reporting: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::focus::testing::{CountingWarner, FlakySource, RecordingSource, Subscriptions};

    const SECOND: Duration = Duration::from_secs(1);

    fn session() -> (FocusSession, Rc<RefCell<Subscriptions>>) {
        let (source, counters) = RecordingSource::new();
        (FocusSession::new(Box::new(source), "focus"), counters)
    }

    fn assert_paired(session: &FocusSession) {
        assert_eq!(session.is_focus_guarded(), session.is_running());
        assert_eq!(session.next_deadline().is_some(), session.is_running());
    }

    /// Advances one second at a time, `count` times.
    fn tick_seconds(session: &mut FocusSession, start: Instant, from: u32, count: u32) {
        for n in from + 1..=from + count {
            session.tick_due(start + SECOND * n);
            assert_paired(session);
        }
    }

    #[test]
    fn test_idle_session_is_unguarded() {
        let (session, counters) = session();
        assert_paired(&session);
        assert_eq!(counters.borrow().subscribed, 0);
    }

    #[test]
    fn test_ninety_second_scenario() {
        let (mut session, counters) = session();
        let start = Instant::now();
        session.start(90, start).unwrap();
        assert_paired(&session);

        tick_seconds(&mut session, start, 0, 23);
        assert!((session.progress() - 25.56).abs() < 0.01);
        assert_eq!(session.stage(), GrowthStage::Sprout);

        tick_seconds(&mut session, start, 23, 22);
        assert_eq!(session.progress(), 50.0);
        assert_eq!(session.stage(), GrowthStage::Sapling);

        tick_seconds(&mut session, start, 45, 45);
        assert_eq!(session.progress(), 100.0);
        assert_eq!(session.stage(), GrowthStage::Tree);
        assert!(!session.is_running());
        assert_eq!(counters.borrow().active(), 0);
    }

    #[test]
    fn test_late_wake_up_runs_missed_ticks() {
        let (mut session, _) = session();
        let start = Instant::now();
        session.start(10, start).unwrap();

        assert!(!session.tick_due(start + SECOND * 4));
        assert_eq!(session.remaining_seconds(), 6);

        // Far past the end: completes and stops scheduling
        assert!(session.tick_due(start + SECOND * 60));
        assert_eq!(session.remaining_seconds(), 0);
        assert_paired(&session);
    }

    #[test]
    fn test_zero_duration_never_attaches() {
        let (mut session, counters) = session();
        assert_eq!(session.start(0, Instant::now()), Ok(TimerPhase::Completed));
        assert_eq!(session.progress(), 100.0);
        assert_paired(&session);
        assert_eq!(counters.borrow().subscribed, 0);
    }

    #[test]
    fn test_repeated_cycles_never_duplicate_subscription() {
        let (mut session, counters) = session();
        for _ in 0..5 {
            session.start(30, Instant::now()).unwrap();
            assert_eq!(counters.borrow().active(), 1);
            assert!(session.stop());
            assert_eq!(counters.borrow().active(), 0);
            assert_paired(&session);
        }
        assert_eq!(counters.borrow().subscribed, 5);
        assert_eq!(counters.borrow().unsubscribed, 5);
    }

    #[test]
    fn test_rejected_start_keeps_single_subscription() {
        let (mut session, counters) = session();
        session.start(30, Instant::now()).unwrap();
        assert_eq!(
            session.start(10, Instant::now()),
            Err(TimerError::AlreadyRunning)
        );
        assert_eq!(counters.borrow().subscribed, 1);
        assert_eq!(session.initial_seconds(), 30);
    }

    #[test]
    fn test_stopped_session_ignores_stale_deadline() {
        let (mut session, _) = session();
        let start = Instant::now();
        session.start(30, start).unwrap();
        session.stop();

        assert!(!session.tick_due(start + SECOND * 5));
        assert_eq!(session.remaining_seconds(), 30);
    }

    #[test]
    fn test_failed_attach_is_retried_on_next_tick() {
        let (inner, counters) = RecordingSource::new();
        let source = FlakySource { failures: 1, inner };
        let mut session = FocusSession::new(Box::new(source), "focus");
        let start = Instant::now();

        session.start(30, start).unwrap();
        assert!(session.is_running());
        assert!(!session.is_focus_guarded());
        assert_eq!(counters.borrow().subscribed, 0);

        session.tick_due(start + SECOND);
        assert_paired(&session);
        assert_eq!(counters.borrow().active(), 1);
    }

    #[test]
    fn test_drop_mid_run_releases_subscription() {
        let (mut session, counters) = session();
        session.start(30, Instant::now()).unwrap();
        drop(session);
        assert_eq!(counters.borrow().active(), 0);
    }

    #[test]
    fn test_focus_warning_follows_sos_mode() {
        let (mut session, _) = session();
        let mut sos = SosAccessList::new();
        let mut warner = CountingWarner::default();

        session.start(60, Instant::now()).unwrap();
        assert!(!session.on_focus_gained(&sos, &mut warner));
        session.on_focus_lost();
        assert!(session.on_focus_gained(&sos, &mut warner));
        assert_eq!(warner.calls, 1);

        sos.toggle_mode();
        session.on_focus_lost();
        assert!(!session.on_focus_gained(&sos, &mut warner));
        assert_eq!(warner.calls, 1);
    }

    #[test]
    fn test_no_warning_after_completion() {
        let (mut session, _) = session();
        let start = Instant::now();
        let mut warner = CountingWarner::default();
        session.start(1, start).unwrap();
        session.on_focus_lost();
        session.tick_due(start + SECOND);

        assert!(!session.on_focus_gained(&SosAccessList::new(), &mut warner));
        assert_eq!(warner.calls, 0);
    }

    #[test]
    fn test_ends_at_only_while_running() {
        let (mut session, _) = session();
        assert!(session.ends_at().is_none());
        session.start(120, Instant::now()).unwrap();
        let ends_at = session.ends_at().unwrap();
        assert!(ends_at > Local::now());
    }
}
