use crate::domain::TimerStatus;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Interval at which the interaction loop drains timer completions.
/// Bounds the latency between a countdown expiring and its notification.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("a timer is already running")]
    AlreadyRunning,
}

/// Completion message posted by the sleeper thread
struct TimerFired {
    generation: u64,
    message: String,
}

/// Single-shot countdown timer: Idle -> Running -> Fired -> Idle.
///
/// `start` spawns one background thread that sleeps for the requested
/// duration and posts its message over a channel; the interaction thread
/// drains the channel with `poll` on every tick, so the wait never blocks
/// input handling. The sleeper touches no shared state and self-terminates
/// after sending. A drain that observes expiry leaves the service in
/// Fired; the next drain (or the next `start`) returns it to Idle, so
/// the service is reusable immediately after firing.
///
/// Cancellation bumps a generation counter instead of killing the sleeper:
/// a fire carrying a stale generation is dropped on drain.
pub struct TimerService {
    status: TimerStatus,
    generation: u64,
    started: Option<Instant>,
    duration: Duration,
    tx: Sender<TimerFired>,
    rx: Receiver<TimerFired>,
}

impl TimerService {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            status: TimerStatus::Idle,
            generation: 0,
            started: None,
            duration: Duration::ZERO,
            tx,
            rx,
        }
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    /// Begin a countdown. Rejects a second start while one is running;
    /// the single-timer assumption is what makes the model lock-free.
    pub fn start(&mut self, duration: Duration, message: &str) -> Result<(), TimerError> {
        if self.status == TimerStatus::Running {
            return Err(TimerError::AlreadyRunning);
        }

        self.generation += 1;
        self.status = TimerStatus::Running;
        self.started = Some(Instant::now());
        self.duration = duration;

        let tx = self.tx.clone();
        let generation = self.generation;
        let message = message.to_string();
        thread::spawn(move || {
            thread::sleep(duration);
            // Receiver gone means the app already shut down
            let _ = tx.send(TimerFired {
                generation,
                message,
            });
        });

        Ok(())
    }

    /// Abandon the running countdown. The sleeper thread still runs to
    /// completion but its fire is swallowed as stale.
    pub fn cancel(&mut self) {
        if self.status == TimerStatus::Running {
            self.generation += 1;
            self.status = TimerStatus::Idle;
            self.started = None;
        }
    }

    /// Drain completion messages. Returns the message when the active
    /// countdown has expired, leaving the service in Fired; the following
    /// drain settles it back to Idle.
    pub fn poll(&mut self) -> Option<String> {
        if self.status == TimerStatus::Fired {
            // The previous drain handed the fire to the caller
            self.status = TimerStatus::Idle;
        }

        while let Ok(fired) = self.rx.try_recv() {
            if fired.generation != self.generation {
                continue; // stale fire from a cancelled countdown
            }
            if self.status != TimerStatus::Running {
                continue;
            }

            self.status = TimerStatus::Fired;
            self.started = None;
            return Some(fired.message);
        }
        None
    }

    /// Time left on the running countdown, saturating at zero
    pub fn remaining(&self) -> Option<Duration> {
        let started = self.started?;
        Some(self.duration.saturating_sub(started.elapsed()))
    }
}

impl Default for TimerService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_timer_is_idle() {
        let timer = TimerService::new();
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn test_start_transitions_to_running_immediately() {
        let mut timer = TimerService::new();
        timer.start(Duration::from_secs(60), "done").unwrap();
        assert_eq!(timer.status(), TimerStatus::Running);
        assert!(timer.remaining().is_some());
    }

    #[test]
    fn test_second_start_is_rejected() {
        let mut timer = TimerService::new();
        timer.start(Duration::from_secs(60), "first").unwrap();

        let err = timer.start(Duration::from_secs(60), "second").unwrap_err();
        assert_eq!(err, TimerError::AlreadyRunning);
        assert_eq!(timer.status(), TimerStatus::Running);
    }

    #[test]
    fn test_no_fire_before_expiry() {
        let mut timer = TimerService::new();
        timer.start(Duration::from_millis(200), "done").unwrap();

        assert_eq!(timer.poll(), None);
        assert_eq!(timer.status(), TimerStatus::Running);
    }

    #[test]
    fn test_fires_exactly_once_then_returns_to_idle() {
        let mut timer = TimerService::new();
        timer.start(Duration::from_millis(20), "Coding Session Done!").unwrap();

        thread::sleep(Duration::from_millis(80));
        assert_eq!(timer.poll(), Some("Coding Session Done!".to_string()));
        assert_eq!(timer.status(), TimerStatus::Fired);

        // Already drained; nothing further fires and the service settles
        assert_eq!(timer.poll(), None);
        assert_eq!(timer.status(), TimerStatus::Idle);
    }

    #[test]
    fn test_poll_interval_is_well_under_the_shortest_countdown() {
        assert!(POLL_INTERVAL >= Duration::from_millis(50));
        assert!(POLL_INTERVAL <= Duration::from_secs(1));
    }

    #[test]
    fn test_reusable_after_firing() {
        let mut timer = TimerService::new();
        timer.start(Duration::from_millis(20), "first").unwrap();
        thread::sleep(Duration::from_millis(80));
        assert_eq!(timer.poll(), Some("first".to_string()));

        // Restarting straight from Fired is allowed
        timer.start(Duration::from_millis(20), "second").unwrap();
        thread::sleep(Duration::from_millis(80));
        assert_eq!(timer.poll(), Some("second".to_string()));
    }

    #[test]
    fn test_cancel_swallows_stale_fire() {
        let mut timer = TimerService::new();
        timer.start(Duration::from_millis(20), "stale").unwrap();
        timer.cancel();
        assert_eq!(timer.status(), TimerStatus::Idle);

        thread::sleep(Duration::from_millis(80));
        assert_eq!(timer.poll(), None);

        // A fresh countdown still works after the stale fire arrived
        timer.start(Duration::from_millis(20), "fresh").unwrap();
        thread::sleep(Duration::from_millis(80));
        assert_eq!(timer.poll(), Some("fresh".to_string()));
    }

    #[test]
    fn test_cancel_when_idle_is_a_no_op() {
        let mut timer = TimerService::new();
        timer.cancel();
        assert_eq!(timer.status(), TimerStatus::Idle);
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut timer = TimerService::new();
        timer.start(Duration::from_secs(60), "done").unwrap();

        let remaining = timer.remaining().unwrap();
        assert!(remaining <= Duration::from_secs(60));
        assert!(remaining > Duration::from_secs(55));
    }
}
