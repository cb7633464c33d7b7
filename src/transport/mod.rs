//! One-shot HTTP transfer via the curl crate (libcurl).
//!
//! Performs a single buffered round trip on a fresh Easy handle; retry
//! policies re-invoke this as many times as they decide to. Whatever the
//! status code, a completed transfer is a transport-level success; turning
//! unwanted statuses into failures is the response handler's job.

use std::str;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::request::Method;
use crate::response::{parse, HttpResponse};
use crate::retry::RequestError;

/// Performs one request and buffers the response.
///
/// A fresh handle is used per call, so no connection or cookie state leaks
/// between attempts. Runs in the current thread and blocks until the
/// transfer finishes or times out.
pub fn perform(
    method: Method,
    url: &str,
    headers: &[(String, String)],
    cookies: &[(String, String)],
    body: Option<&[u8]>,
    config: &ClientConfig,
) -> Result<HttpResponse, RequestError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    // post_fields_copy flips the handle to POST, so any other verb carrying
    // a body must be pinned to its method line explicitly.
    match method {
        Method::Post => easy.post(true)?,
        Method::Get if body.is_none() => {}
        other => easy.custom_request(other.as_str())?,
    }
    if config.follow_redirects {
        easy.follow_location(true)?;
        easy.max_redirections(config.max_redirects)?;
    }
    easy.connect_timeout(Duration::from_secs(config.connect_timeout_secs))?;
    if config.timeout_secs > 0 {
        easy.timeout(Duration::from_secs(config.timeout_secs))?;
    }

    if !headers.is_empty() {
        let mut list = curl::easy::List::new();
        for (name, value) in headers {
            list.append(&format!("{}: {}", name.trim(), value.trim()))?;
        }
        easy.http_headers(list)?;
    }

    if !cookies.is_empty() {
        let jar = cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");
        easy.cookie(&jar)?;
    }

    if let Some(body) = body {
        easy.post_fields_copy(body)?;
    } else if method == Method::Post {
        // Empty POST still needs a body, or libcurl waits for one.
        easy.post_fields_copy(&[])?;
    }

    if config.debug {
        tracing::debug!(
            method = method.as_str(),
            url,
            header_count = headers.len(),
            body_len = body.map(|b| b.len()).unwrap_or(0),
            "sending request"
        );
    }

    let mut header_lines: Vec<String> = Vec::new();
    let mut body_buf: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body_buf.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    let headers = parse::parse_headers(&header_lines);
    Ok(HttpResponse::new(status, headers, body_buf))
}
