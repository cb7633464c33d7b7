//! Buffered HTTP response surface.
//!
//! The retry pipeline never looks inside a response beyond handing it to
//! caller-supplied handlers and predicates; decoding the body is the
//! caller's business.

pub(crate) mod parse;

/// Response from one completed transfer: status code, header pairs, and
/// the buffered body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: u32,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl HttpResponse {
    pub(crate) fn new(status: u32, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code of the final response (after redirects).
    pub fn status(&self) -> u32 {
        self.status
    }

    /// First header value matching `name`, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All header pairs in arrival order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response, yielding the body.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let res = HttpResponse::new(
            200,
            vec![("Content-Type".to_string(), "text/plain".to_string())],
            b"ok".to_vec(),
        );
        assert_eq!(res.header("content-type"), Some("text/plain"));
        assert_eq!(res.header("CONTENT-TYPE"), Some("text/plain"));
        assert_eq!(res.header("etag"), None);
    }

    #[test]
    fn first_match_wins_for_repeated_headers() {
        let res = HttpResponse::new(
            200,
            vec![
                ("Set-Cookie".to_string(), "a=1".to_string()),
                ("Set-Cookie".to_string(), "b=2".to_string()),
            ],
            Vec::new(),
        );
        assert_eq!(res.header("set-cookie"), Some("a=1"));
        assert_eq!(res.headers().len(), 2);
    }
}
