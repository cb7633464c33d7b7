//! Request descriptor: method, URL, headers, cookies, body, and the policy
//! and handler that govern its execution.
//!
//! A descriptor is built once and consumed by [`Request::send`], so every
//! top-level call owns a fresh retry budget and backoff schedule; nothing
//! carries over between calls.

mod method;

pub use method::Method;

use crate::config::ClientConfig;
use crate::retry::{run_with_policy, AttemptResult, RetryPolicy, SingleAttempt};
use crate::transport;

type ResponseHandlerFn = Box<dyn FnMut(AttemptResult) -> AttemptResult>;

/// One HTTP request waiting to be sent.
pub struct Request {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    cookies: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    config: ClientConfig,
    policy: Option<Box<dyn RetryPolicy>>,
    response_handler: Option<ResponseHandlerFn>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            cookies: Vec::new(),
            body: None,
            config: ClientConfig::default(),
            policy: None,
            response_handler: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Headers set so far, in send order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Sets `name` to `value`, replacing any existing values for that name
    /// (case-insensitively).
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Appends a value for `name`, keeping any already set.
    pub fn add_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn user_agent(self, value: &str) -> Self {
        self.header("User-Agent", value)
    }

    /// Adds a cookie pair; all cookies go out in one `Cookie` header.
    pub fn cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Replaces the default client configuration (timeouts, redirects,
    /// debug logging, config-derived retry).
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers the retry policy for this request. The policy is taken by
    /// value: one policy instance per call, never shared, so schedules with
    /// wall-clock state cannot leak between requests.
    pub fn retry(mut self, policy: impl RetryPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Registers a handler invoked after every attempt (including retried
    /// ones); its verdict supersedes the transport's own, so it can turn an
    /// unwanted status into a failure the retry policy reacts to.
    pub fn response_handler(
        mut self,
        handler: impl FnMut(AttemptResult) -> AttemptResult + 'static,
    ) -> Self {
        self.response_handler = Some(Box::new(handler));
        self
    }

    /// Sends the request: validate the URL, resolve the policy (explicit
    /// registration, else the config's `[retry]` section, else a single
    /// attempt), then drive the attempt loop over the transport. Returns the
    /// final attempt's outcome verbatim.
    ///
    /// The operation is re-invoked on retry, so the caller is responsible
    /// for only retrying requests that are safe to repeat.
    pub fn send(mut self) -> AttemptResult {
        url::Url::parse(&self.url)?;

        let mut policy: Box<dyn RetryPolicy> = match self.policy.take() {
            Some(policy) => policy,
            None => match &self.config.retry {
                Some(retry) => retry.build_policy(),
                None => Box::new(SingleAttempt),
            },
        };
        let mut handler = self.response_handler.take();

        run_with_policy(
            policy.as_mut(),
            || {
                transport::perform(
                    self.method,
                    &self.url,
                    &self.headers,
                    &self.cookies,
                    self.body.as_deref(),
                    &self.config,
                )
            },
            handler.as_deref_mut(),
        )
    }
}
