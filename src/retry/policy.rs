use std::time::Duration;

use super::error::RequestError;
use crate::response::HttpResponse;

/// Outcome of one attempt as seen by a retry policy.
pub type Attempt<'a> = Result<&'a HttpResponse, &'a RequestError>;

/// Decision returned by a retry policy after each attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Stop and return the last attempt's result as-is.
    Stop,
    /// Wait for the given delay, then attempt again.
    RetryAfter(Duration),
}

/// Per-call retry policy.
///
/// Implementations hold their own remaining-retry budget or schedule; a
/// value is consumed by one `send()` and never reused across calls, so
/// `decide` is free to mutate internal state.
pub trait RetryPolicy {
    /// Inspect the attempt that just completed and decide whether to go
    /// again. Returning `RetryAfter` commits the caller to sleeping for
    /// that duration before the next attempt.
    fn decide(&mut self, attempt: Attempt<'_>) -> RetryDecision;
}

/// Default policy: one attempt, no retries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleAttempt;

impl RetryPolicy for SingleAttempt {
    fn decide(&mut self, _attempt: Attempt<'_>) -> RetryDecision {
        RetryDecision::Stop
    }
}

/// Even-interval retry: up to `retries` extra attempts with a fixed pause
/// between them. Once the budget is spent the final attempt's result is
/// returned, whatever it was.
#[derive(Debug, Clone, Copy)]
pub struct FixedInterval {
    remaining: u32,
    interval: Duration,
}

impl FixedInterval {
    /// `retries` counts attempts beyond the first; zero means exactly one
    /// attempt and no waiting.
    pub fn new(retries: u32, interval: Duration) -> Self {
        Self {
            remaining: retries,
            interval,
        }
    }
}

impl RetryPolicy for FixedInterval {
    fn decide(&mut self, attempt: Attempt<'_>) -> RetryDecision {
        if attempt.is_ok() || self.remaining == 0 {
            return RetryDecision::Stop;
        }
        self.remaining -= 1;
        RetryDecision::RetryAfter(self.interval)
    }
}

/// Predicate-driven retry: keeps attempting until the predicate returns
/// true, then returns that attempt's result whether it succeeded or not.
/// The predicate is the sole authority on when to stop.
///
/// There is no built-in attempt cap: a predicate that never returns true
/// loops forever. Termination is entirely the caller's responsibility.
pub struct RetryUntil<F> {
    predicate: F,
    interval: Duration,
}

impl<F> RetryUntil<F>
where
    F: FnMut(Attempt<'_>) -> bool,
{
    /// `predicate` stops the loop by returning true. A zero `interval`
    /// retries immediately with no pause (negative intervals are
    /// unrepresentable in `Duration`).
    pub fn new(predicate: F, interval: Duration) -> Self {
        Self {
            predicate,
            interval,
        }
    }
}

impl<F> RetryPolicy for RetryUntil<F>
where
    F: FnMut(Attempt<'_>) -> bool,
{
    fn decide(&mut self, attempt: Attempt<'_>) -> RetryDecision {
        if (self.predicate)(attempt) {
            RetryDecision::Stop
        } else {
            RetryDecision::RetryAfter(self.interval)
        }
    }
}
