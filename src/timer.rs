//! Countdown engine and its one-second schedule.
//!
//! The engine does not own a clock. The event loop sleeps until the
//! [`Ticker`] deadline and then calls [`TimerEngine::tick`] once for every
//! period that elapsed.
//!
//! ```text
//! Idle -> Running -> (Completed | Stopped) -> Running -> ...
//! ```

use std::time::Duration;

use tokio::time::Instant;

use crate::error::TimerError;

/// Phase of the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPhase {
    /// Nothing has been started yet
    #[default]
    Idle,
    /// Counting down
    Running,
    /// Stopped by the user before reaching zero
    Stopped,
    /// Reached zero
    Completed,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine was not running, nothing changed
    Idle,
    /// One second elapsed, time remains
    Running { remaining_seconds: u32 },
    /// This tick brought the countdown to zero
    Completed,
}

/// Countdown state for one focus session.
///
/// `initial_seconds` is captured by [`TimerEngine::start`] and is the only
/// input to [`TimerEngine::progress`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerEngine {
    initial_seconds: u32,
    remaining_seconds: u32,
    phase: TimerPhase,
}

impl TimerEngine {
    /// Creates an idle engine.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_seconds(&self) -> u32 {
        self.initial_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Starts a new run of `duration_seconds`.
    ///
    /// A zero duration completes immediately.
    pub fn start(&mut self, duration_seconds: u32) -> Result<TimerPhase, TimerError> {
        if self.is_running() {
            return Err(TimerError::AlreadyRunning);
        }

        self.initial_seconds = duration_seconds;
        self.remaining_seconds = duration_seconds;
        self.phase = if duration_seconds > 0 {
            TimerPhase::Running
        } else {
            TimerPhase::Completed
        };
        Ok(self.phase)
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.phase = TimerPhase::Completed;
            TickOutcome::Completed
        } else {
            TickOutcome::Running {
                remaining_seconds: self.remaining_seconds,
            }
        }
    }

    /// Stops the run without completing it. Remaining time is kept.
    ///
    /// Returns false if nothing was running.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = TimerPhase::Stopped;
        true
    }

    /// Elapsed share of the run, 0.0 ..= 100.0.
    pub fn progress(&self) -> f64 {
        if self.initial_seconds == 0 {
            // A zero-length run is done the moment it starts.
            return if self.phase == TimerPhase::Completed {
                100.0
            } else {
                0.0
            };
        }

        let elapsed = self.initial_seconds.saturating_sub(self.remaining_seconds);
        (f64::from(elapsed) / f64::from(self.initial_seconds) * 100.0).clamp(0.0, 100.0)
    }
}

/// Recurring schedule that drives [`TimerEngine::tick`].
///
/// Armed while a run is active and cancelled otherwise; a cancelled ticker
/// never reports a due tick.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_deadline: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_deadline: None,
        }
    }

    /// Instant of the next tick, if armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_deadline
    }

    /// Schedules the first tick one period after `now`. No-op when armed.
    pub fn arm(&mut self, now: Instant) {
        if self.next_deadline.is_none() {
            self.next_deadline = Some(now + self.period);
        }
    }

    /// Drops the pending tick. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.next_deadline = None;
    }

    /// Returns how many ticks are due at `now` and moves the deadline past them.
    ///
    /// A late wake-up reports every missed period so no tick is skipped.
    pub fn take_due(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.next_deadline else {
            return 0;
        };

        let mut due = 0;
        while deadline <= now {
            due += 1;
            deadline += self.period;
        }
        self.next_deadline = Some(deadline);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SECOND: Duration = Duration::from_secs(1);

    fn run_ticks(engine: &mut TimerEngine, count: u32) {
        for _ in 0..count {
            engine.tick();
        }
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = TimerEngine::new();
        assert_eq!(engine.phase(), TimerPhase::Idle);
        assert!(!engine.is_running());
        assert_eq!(engine.progress(), 0.0);
    }

    #[test]
    fn test_start_captures_duration() {
        let mut engine = TimerEngine::new();
        assert_eq!(engine.start(90), Ok(TimerPhase::Running));
        assert_eq!(engine.initial_seconds(), 90);
        assert_eq!(engine.remaining_seconds(), 90);
        assert!(engine.is_running());
    }

    #[test]
    fn test_start_while_running_is_rejected() {
        let mut engine = TimerEngine::new();
        engine.start(60).unwrap();
        engine.tick();

        assert_eq!(engine.start(30), Err(TimerError::AlreadyRunning));
        // The current run is untouched
        assert_eq!(engine.initial_seconds(), 60);
        assert_eq!(engine.remaining_seconds(), 59);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut engine = TimerEngine::new();
        assert_eq!(engine.start(0), Ok(TimerPhase::Completed));
        assert!(!engine.is_running());
        assert_eq!(engine.remaining_seconds(), 0);
        assert_eq!(engine.progress(), 100.0);
    }

    #[test]
    fn test_ninety_second_scenario() {
        let mut engine = TimerEngine::new();
        engine.start(90).unwrap();

        run_ticks(&mut engine, 23);
        assert!((engine.progress() - 25.555).abs() < 0.01);

        run_ticks(&mut engine, 22);
        assert_eq!(engine.progress(), 50.0);

        run_ticks(&mut engine, 44);
        assert!(engine.is_running());
        assert_eq!(engine.tick(), TickOutcome::Completed);
        assert_eq!(engine.progress(), 100.0);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_tick_after_completion_is_idle() {
        let mut engine = TimerEngine::new();
        engine.start(1).unwrap();
        assert_eq!(engine.tick(), TickOutcome::Completed);
        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert_eq!(engine.remaining_seconds(), 0);
    }

    #[test]
    fn test_stop_keeps_remaining_time() {
        let mut engine = TimerEngine::new();
        engine.start(10).unwrap();
        run_ticks(&mut engine, 4);

        assert!(engine.stop());
        assert_eq!(engine.phase(), TimerPhase::Stopped);
        assert_eq!(engine.remaining_seconds(), 6);
        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert!(!engine.stop());
    }

    #[test]
    fn test_restart_after_stop_uses_new_duration() {
        let mut engine = TimerEngine::new();
        engine.start(100).unwrap();
        run_ticks(&mut engine, 50);
        engine.stop();

        engine.start(10).unwrap();
        engine.tick();
        assert!((engine.progress() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_cancelled_ticker_reports_nothing() {
        let now = Instant::now();
        let mut ticker = Ticker::new(SECOND);
        ticker.arm(now);
        ticker.cancel();
        ticker.cancel();

        assert!(ticker.next_deadline().is_none());
        assert_eq!(ticker.take_due(now + SECOND * 10), 0);
    }

    #[test]
    fn test_ticker_counts_each_period() {
        let now = Instant::now();
        let mut ticker = Ticker::new(SECOND);
        ticker.arm(now);

        assert_eq!(ticker.take_due(now), 0);
        assert_eq!(ticker.take_due(now + SECOND), 1);
        // Late wake-up: three more periods elapsed
        assert_eq!(ticker.take_due(now + SECOND * 4), 3);
        assert_eq!(ticker.next_deadline(), Some(now + SECOND * 5));
    }

    #[test]
    fn test_arm_is_idempotent() {
        let now = Instant::now();
        let mut ticker = Ticker::new(SECOND);
        ticker.arm(now);
        ticker.arm(now + SECOND * 3);
        assert_eq!(ticker.next_deadline(), Some(now + SECOND));
    }

    proptest! {
        #[test]
        fn prop_duration_ticks_complete_the_run(duration in 0u32..5_000) {
            let mut engine = TimerEngine::new();
            engine.start(duration).unwrap();
            run_ticks(&mut engine, duration);

            prop_assert_eq!(engine.remaining_seconds(), 0);
            prop_assert!(!engine.is_running());
            prop_assert_eq!(engine.progress(), 100.0);
        }

        #[test]
        fn prop_progress_never_decreases(duration in 1u32..2_000, extra in 0u32..10) {
            let mut engine = TimerEngine::new();
            engine.start(duration).unwrap();

            let mut last = engine.progress();
            for _ in 0..duration + extra {
                engine.tick();
                let current = engine.progress();
                prop_assert!(current >= last);
                prop_assert!(engine.remaining_seconds() <= engine.initial_seconds());
                last = current;
            }
        }
    }
}
