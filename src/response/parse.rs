//! Parse collected response header lines into name/value pairs.

/// Turn the raw header lines collected during a transfer into pairs.
///
/// When redirects are followed, libcurl hands us the header block of every
/// hop in sequence; each block starts with an `HTTP/` status line, so the
/// pairs are reset there and only the final response's headers survive.
pub(crate) fn parse_headers(lines: &[String]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            pairs.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            pairs.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    pairs
}
