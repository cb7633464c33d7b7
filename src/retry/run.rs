//! Attempt loop: run an operation under a retry policy until it says stop.

use super::error::RequestError;
use super::policy::{RetryDecision, RetryPolicy};
use crate::response::HttpResponse;

/// Outcome of one attempt flowing through the pipeline.
pub type AttemptResult = Result<HttpResponse, RequestError>;

/// Runs `operation` under `policy` until the policy decides to stop, then
/// returns the final attempt's result verbatim.
///
/// `response_handler`, when present, is applied to every attempt's outcome
/// (including retried ones) before the policy sees it; its verdict
/// supersedes the transport's own. Intermediate failures are dropped on the
/// floor (logged at debug level only); the caller sees the last attempt.
pub fn run_with_policy<'a, 'b, F>(
    policy: &mut dyn RetryPolicy,
    mut operation: F,
    mut response_handler: Option<&'a mut (dyn FnMut(AttemptResult) -> AttemptResult + 'b)>,
) -> AttemptResult
where
    F: FnMut() -> AttemptResult,
{
    let mut attempt = 1u32;
    loop {
        let mut outcome = operation();
        if let Some(handler) = response_handler.as_mut() {
            outcome = handler(outcome);
        }
        match policy.decide(outcome.as_ref()) {
            RetryDecision::Stop => return outcome,
            RetryDecision::RetryAfter(delay) => {
                match &outcome {
                    Ok(res) => tracing::debug!(
                        attempt,
                        status = res.status(),
                        delay_ms = delay.as_millis() as u64,
                        "retrying request"
                    ),
                    Err(e) => tracing::debug!(
                        attempt,
                        error = %e,
                        delay_ms = delay.as_millis() as u64,
                        "retrying request"
                    ),
                }
                if !delay.is_zero() {
                    std::thread::sleep(delay);
                }
                attempt += 1;
            }
        }
    }
}
