//! Exponential backoff schedule and the retry policy built on it.

use std::time::{Duration, Instant};

use rand::Rng as _;

use super::policy::{Attempt, RetryDecision, RetryPolicy};

/// Stateful exponential backoff schedule.
///
/// Each `next_delay` call yields the next wait, growing geometrically up to
/// `max_interval`, with optional jitter; `None` once `max_elapsed` has
/// passed since the first call. The schedule tracks wall-clock state
/// internally, so it must not be reused between top-level calls; construct
/// a fresh one per request.
#[derive(Debug, Clone)]
pub struct Backoff {
    initial_interval: Duration,
    multiplier: f64,
    max_interval: Duration,
    max_elapsed: Option<Duration>,
    randomization_factor: f64,
    current: Duration,
    started_at: Option<Instant>,
}

impl Default for Backoff {
    fn default() -> Self {
        Self::with_jitter(
            Duration::from_millis(500),
            Duration::from_secs(60),
            1.5,
            0.5,
        )
        .max_elapsed(Some(Duration::from_secs(15 * 60)))
    }
}

impl Backoff {
    /// Schedule with the given first wait and per-wait cap, growing by
    /// 1.5x per attempt, no jitter, no elapsed-time ceiling.
    pub fn new(initial_interval: Duration, max_interval: Duration) -> Self {
        Self::with_jitter(initial_interval, max_interval, 1.5, 0.0)
    }

    /// Schedule with explicit growth and jitter. `randomization_factor` is
    /// a fraction of the current interval: 0.5 lands each wait anywhere in
    /// [0.5x, 1.5x] of its nominal value, 0.0 disables jitter.
    pub fn with_jitter(
        initial_interval: Duration,
        max_interval: Duration,
        multiplier: f64,
        randomization_factor: f64,
    ) -> Self {
        Self {
            initial_interval,
            multiplier: multiplier.max(1.0),
            max_interval,
            max_elapsed: None,
            randomization_factor: randomization_factor.clamp(0.0, 1.0),
            current: initial_interval,
            started_at: None,
        }
    }

    /// Sets the total elapsed-time ceiling: once this much wall time has
    /// passed since the first `next_delay`, the schedule gives up.
    /// `None` disables the ceiling.
    pub fn max_elapsed(mut self, ceiling: Option<Duration>) -> Self {
        self.max_elapsed = ceiling;
        self
    }

    /// Next wait duration, or `None` once the elapsed-time ceiling is
    /// reached. The clock starts on the first call.
    pub fn next_delay(&mut self) -> Option<Duration> {
        let started = *self.started_at.get_or_insert_with(Instant::now);
        if let Some(ceiling) = self.max_elapsed {
            if started.elapsed() >= ceiling {
                return None;
            }
        }

        let base = self.current.min(self.max_interval);
        let delay = if self.randomization_factor > 0.0 {
            let r = self.randomization_factor;
            let factor = rand::thread_rng().gen_range((1.0 - r)..=(1.0 + r));
            base.mul_f64(factor).min(self.max_interval)
        } else {
            base
        };

        let grown = self.current.as_secs_f64() * self.multiplier;
        self.current = Duration::from_secs_f64(grown.min(self.max_interval.as_secs_f64()));
        Some(delay)
    }
}

/// Exponential-backoff retry: waits come from a `Backoff` schedule.
///
/// The retry budget and the schedule's own elapsed-time ceiling are
/// independent; retrying stops when either is exhausted, and the final
/// attempt's result is returned as-is.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    remaining: u32,
    schedule: Backoff,
}

impl ExponentialBackoff {
    /// `retries` counts attempts beyond the first. The schedule is moved
    /// in, never shared: one schedule per top-level call.
    pub fn new(retries: u32, schedule: Backoff) -> Self {
        Self {
            remaining: retries,
            schedule,
        }
    }
}

impl RetryPolicy for ExponentialBackoff {
    fn decide(&mut self, attempt: Attempt<'_>) -> RetryDecision {
        if attempt.is_ok() || self.remaining == 0 {
            return RetryDecision::Stop;
        }
        match self.schedule.next_delay() {
            Some(delay) => {
                self.remaining -= 1;
                RetryDecision::RetryAfter(delay)
            }
            None => RetryDecision::Stop,
        }
    }
}
