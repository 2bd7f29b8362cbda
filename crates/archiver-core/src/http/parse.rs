//! Parse raw HTTP response header lines into (name, value) pairs.

/// Parse collected header lines. A status line (`HTTP/...`) starts a new
/// response, so after redirects only the final response's headers remain.
pub(crate) fn parse_headers(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_headers_name_value_pairs() {
        let lines = [
            "HTTP/1.1 200 OK".to_string(),
            "Content-Location: /web/20240101000000/https://example.com/".to_string(),
            "Content-Length: 0".to_string(),
        ];
        let h = parse_headers(&lines);
        assert_eq!(h.len(), 2);
        assert_eq!(h[0].0, "Content-Location");
        assert_eq!(h[0].1, "/web/20240101000000/https://example.com/");
    }

    #[test]
    fn parse_headers_value_with_colons_kept_whole() {
        let lines = ["Link: <https://web.archive.org/web/>; rel=\"timemap\"".to_string()];
        let h = parse_headers(&lines);
        assert_eq!(h[0].1, "<https://web.archive.org/web/>; rel=\"timemap\"");
    }

    #[test]
    fn parse_headers_keeps_only_final_response_after_redirect() {
        let lines = [
            "HTTP/1.1 302 Found".to_string(),
            "Location: /elsewhere".to_string(),
            "".to_string(),
            "HTTP/1.1 200 OK".to_string(),
            "Content-Location: /web/2/x".to_string(),
        ];
        let h = parse_headers(&lines);
        assert_eq!(h, vec![("Content-Location".to_string(), "/web/2/x".to_string())]);
    }

    #[test]
    fn parse_headers_skips_garbage() {
        let lines = ["no colon here".to_string(), "   ".to_string()];
        assert!(parse_headers(&lines).is_empty());
    }
}
