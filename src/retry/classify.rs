//! Classify HTTP status codes into attempt failures.
//!
//! The transport reports any completed round trip as a success, whatever
//! the status. These ready-made response handlers reclassify status ranges
//! as failures so retry policies react to them; transport errors pass
//! through untouched.

use super::error::RequestError;
use super::run::AttemptResult;

fn fail_in_range(lo: u32, hi: u32) -> impl FnMut(AttemptResult) -> AttemptResult {
    move |outcome| match outcome {
        Ok(res) if res.status() >= lo && res.status() <= hi => {
            Err(RequestError::Status(res.status()))
        }
        other => other,
    }
}

/// Treat 4xx statuses as failed attempts.
pub fn fail_on_4xx() -> impl FnMut(AttemptResult) -> AttemptResult {
    fail_in_range(400, 499)
}

/// Treat 5xx statuses as failed attempts.
pub fn fail_on_5xx() -> impl FnMut(AttemptResult) -> AttemptResult {
    fail_in_range(500, 599)
}

/// Treat anything outside 200..=299 as a failed attempt.
pub fn fail_outside_2xx() -> impl FnMut(AttemptResult) -> AttemptResult {
    move |outcome| match outcome {
        Ok(res) if res.status() < 200 || res.status() > 299 => {
            Err(RequestError::Status(res.status()))
        }
        other => other,
    }
}
