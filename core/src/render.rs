//! Renders a `LogEntry` as an ordered list of labeled sections.
//!
//! # Design
//! Section order is fixed: divider, date/time, request name, data transfer,
//! status, headers, body, divider. Two policies coexist on purpose:
//!
//! - data transfer and status are *omitted* when their inputs are missing;
//! - headers and body are *always* emitted, with `None` standing in for
//!   absent data.
//!
//! Rendering is pure. Each returned string is handed to the sink as one
//! write; the headers and body sections may span several physical lines.

use chrono::{DateTime, Utc};

use crate::entry::{Details, Headers, LogEntry};

/// Placeholder for an absent headers or body section.
pub const NONE: &str = "None";

/// Locale-independent full date-time, e.g. `2022-07-07 15:51:16 +0000`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Section markers. The divider opens and closes every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub divider: &'static str,
    pub date_time: &'static str,
    pub request_name: &'static str,
    pub sending: &'static str,
    pub receiving: &'static str,
    pub status: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
    pub headers: &'static str,
    pub body: &'static str,
}

impl Markers {
    pub const EMOJI: Markers = Markers {
        divider: "----",
        date_time: "🕔",
        request_name: "⌨️",
        sending: "⬆️",
        receiving: "⬇️",
        status: "📋",
        success: "🟢",
        failure: "🔴",
        headers: "🧠",
        body: "🏋️",
    };

    /// For terminals that cannot display emoji.
    pub const ASCII: Markers = Markers {
        divider: "----",
        date_time: "[time]",
        request_name: "[name]",
        sending: "[out]",
        receiving: "[in]",
        status: "[status]",
        success: "(ok)",
        failure: "(fail)",
        headers: "[headers]",
        body: "[body]",
    };
}

impl Default for Markers {
    fn default() -> Self {
        Markers::EMOJI
    }
}

/// Renders with the default (emoji) markers.
pub fn render(entry: &LogEntry) -> Vec<String> {
    render_with(entry, &Markers::EMOJI)
}

pub fn render_with(entry: &LogEntry, markers: &Markers) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);
    lines.push(markers.divider.to_string());
    lines.push(date_time_section(entry.timestamp(), markers));
    lines.push(format!("{} Request Name: {}", markers.request_name, entry.request_name()));
    lines.extend(data_transfer_section(entry, markers));
    lines.extend(status_section(entry, markers));
    lines.push(headers_section(entry.headers(), markers));
    lines.push(body_section(entry.body(), markers));
    lines.push(markers.divider.to_string());
    lines
}

fn date_time_section(timestamp: DateTime<Utc>, markers: &Markers) -> String {
    format!("{} {}", markers.date_time, timestamp.format(TIMESTAMP_FORMAT))
}

fn data_transfer_section(entry: &LogEntry, markers: &Markers) -> Option<String> {
    match entry.details() {
        Details::Request { method } => {
            let method = method.as_deref()?;
            let url = entry.url()?;
            Some(format!("{} Sending {method} to {url}", markers.sending))
        }
        Details::Response { .. } => {
            let url = entry.url()?;
            Some(format!("{} Received from {url}", markers.receiving))
        }
    }
}

/// Only `200` counts as success; there is no range-based classification.
fn status_section(entry: &LogEntry, markers: &Markers) -> Option<String> {
    match entry.details() {
        Details::Request { .. } => None,
        Details::Response {
            status_code,
            status_text,
            ..
        } => {
            let code = (*status_code)?;
            let text = status_text.as_deref()?;
            let outcome = if code == 200 { markers.success } else { markers.failure };
            Some(format!("{} Status: {code} {outcome} -- {text}", markers.status))
        }
    }
}

fn headers_section(headers: Option<&Headers>, markers: &Markers) -> String {
    match headers {
        Some(headers) => format!("{} Headers:\n{headers:?}", markers.headers),
        None => format!("{} Headers: {NONE}", markers.headers),
    }
}

fn body_section(body: Option<&str>, markers: &Markers) -> String {
    match body {
        Some(body) => format!("{} Body:\n{body}", markers.body),
        None => format!("{} Body: {NONE}", markers.body),
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use crate::builder::{build_request_entry, build_response_entry};
    use crate::status::CanonicalReasons;

    #[derive(Debug)]
    struct Offline;

    impl fmt::Display for Offline {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "The Internet connection appears to be offline.")
        }
    }

    impl std::error::Error for Offline {}

    fn date_header() -> Headers {
        Headers::from([("Date".to_string(), "Thu, 07 Jul 2022 15:51:17 GMT".to_string())])
    }

    fn response(status: Option<u16>, url: Option<&str>, headers: Option<Headers>, body: Option<&[u8]>) -> LogEntry {
        build_response_entry("GetGenres", url, status, headers, None, body, &CanonicalReasons)
    }

    fn count_starting_with(lines: &[String], prefix: &str) -> usize {
        lines.iter().filter(|line| line.starts_with(prefix)).count()
    }

    #[test]
    fn request_with_method_and_url() {
        let entry = build_request_entry("GetGenres", Some("GET"), Some("http://x/y"), None);
        let lines = render(&entry);

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "----");
        assert!(lines[1].starts_with("🕔 "));
        assert_eq!(lines[2], "⌨️ Request Name: GetGenres");
        assert_eq!(lines[3], "⬆️ Sending GET to http://x/y");
        assert_eq!(lines[4], "🧠 Headers: None");
        assert_eq!(lines[5], "🏋️ Body: None");
        assert_eq!(lines[6], "----");
    }

    #[test]
    fn timestamp_line_uses_full_date_time() {
        let entry = build_request_entry("GetGenres", None, None, None);
        let lines = render(&entry);
        let stamp = lines[1].strip_prefix("🕔 ").unwrap();
        let parsed = DateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).unwrap();
        assert_eq!(parsed.timestamp(), entry.timestamp().timestamp());
        assert!(stamp.ends_with("+0000"));
    }

    #[test]
    fn request_missing_method_or_url_has_no_transfer_line() {
        let cases = [
            build_request_entry("A", None, Some("http://x/y"), None),
            build_request_entry("B", Some("GET"), None, None),
            build_request_entry("C", None, None, None),
        ];
        for entry in &cases {
            let lines = render(entry);
            assert_eq!(count_starting_with(&lines, "⬆️"), 0, "{}", entry.request_name());
            assert_eq!(lines.len(), 6);
        }
    }

    #[test]
    fn request_never_renders_status_and_always_renders_body_none() {
        let entry = build_request_entry("GetGenres", Some("POST"), Some("http://x/y"), Some(date_header()));
        let lines = render(&entry);
        assert_eq!(count_starting_with(&lines, "📋"), 0);
        assert_eq!(lines[lines.len() - 2], "🏋️ Body: None");
    }

    #[test]
    fn request_headers_are_dumped() {
        let entry = build_request_entry("GetGenres", Some("GET"), Some("http://x/y"), Some(date_header()));
        let lines = render(&entry);
        assert_eq!(lines[4], "🧠 Headers:\n{\"Date\": \"Thu, 07 Jul 2022 15:51:17 GMT\"}");
    }

    #[test]
    fn successful_response_renders_every_section() {
        let entry = response(Some(200), Some("http://x/y"), Some(date_header()), Some(br#"{"a":1}"#));
        let lines = render(&entry);

        assert_eq!(
            lines[2..],
            [
                "⌨️ Request Name: GetGenres".to_string(),
                "⬇️ Received from http://x/y".to_string(),
                "📋 Status: 200 🟢 -- OK".to_string(),
                "🧠 Headers:\n{\"Date\": \"Thu, 07 Jul 2022 15:51:17 GMT\"}".to_string(),
                "🏋️ Body:\n{\n  \"a\": 1\n}".to_string(),
                "----".to_string(),
            ]
        );
    }

    #[test]
    fn only_exactly_200_is_success() {
        for code in [201, 204, 301, 400, 404, 500, 0, 9999] {
            let lines = render(&response(Some(code), None, None, None));
            let status = lines.iter().find(|line| line.starts_with("📋")).unwrap();
            assert!(status.contains("🔴"), "{code} should be a failure: {status}");
            assert!(!status.contains("🟢"));
        }
    }

    #[test]
    fn unrecognised_status_renders_with_empty_description() {
        let lines = render(&response(Some(9999), None, Some(Headers::new()), None));
        assert!(lines.contains(&"📋 Status: 9999 🔴 -- ".to_string()));
    }

    #[test]
    fn transport_failure_without_status_has_no_status_line() {
        let entry = build_response_entry(
            "GetGenres",
            Some("http://x/y"),
            None,
            None,
            Some(&Offline),
            None,
            &CanonicalReasons,
        );
        let lines = render(&entry);

        assert_eq!(count_starting_with(&lines, "📋"), 0);
        assert_eq!(entry.error_text(), Some("The Internet connection appears to be offline."));
        assert_eq!(lines[3], "⬇️ Received from http://x/y");
    }

    #[test]
    fn response_without_url_has_no_transfer_line() {
        let lines = render(&response(Some(200), None, None, None));
        assert_eq!(count_starting_with(&lines, "⬇️"), 0);
    }

    // Headers and body are never skipped even when absent, unlike the
    // transfer and status sections. Keep this asymmetry.
    #[test]
    fn headers_and_body_always_render_exactly_once() {
        let bodies: [Option<&[u8]>; 3] = [None, Some(b"{}"), Some(b"garbage")];
        for headers in [None, Some(Headers::new()), Some(date_header())] {
            for body in bodies {
                let lines = render(&response(Some(400), Some("http://x/y"), headers.clone(), body));
                assert_eq!(count_starting_with(&lines, "🧠 Headers:"), 1);
                assert_eq!(count_starting_with(&lines, "🏋️ Body:"), 1);
            }
        }
    }

    #[test]
    fn empty_header_mapping_is_not_none() {
        let lines = render(&response(Some(200), None, Some(Headers::new()), None));
        assert!(lines.contains(&"🧠 Headers:\n{}".to_string()));
        assert!(lines.contains(&"🏋️ Body: None".to_string()));
    }

    #[test]
    fn divider_opens_and_closes_every_entry() {
        let entries = [
            build_request_entry("A", None, None, None),
            response(None, None, None, None),
            response(Some(200), Some("http://x/y"), Some(date_header()), Some(b"[]")),
        ];
        for entry in &entries {
            let lines = render(entry);
            assert_eq!(lines.first().map(String::as_str), Some("----"));
            assert_eq!(lines.last().map(String::as_str), Some("----"));
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let entry = response(Some(200), Some("http://x/y"), Some(date_header()), Some(br#"{"b":[1,2]}"#));
        assert_eq!(render(&entry), render(&entry));
    }

    #[test]
    fn ascii_markers_keep_layout() {
        let entry = response(Some(404), Some("http://x/y"), None, None);
        let lines = render_with(&entry, &Markers::ASCII);
        assert_eq!(lines[0], "----");
        assert!(lines[1].starts_with("[time] "));
        assert_eq!(lines[2], "[name] Request Name: GetGenres");
        assert_eq!(lines[3], "[in] Received from http://x/y");
        assert_eq!(lines[4], "[status] Status: 404 (fail) -- Not Found");
        assert_eq!(lines[5], "[headers] Headers: None");
        assert_eq!(lines[6], "[body] Body: None");
        assert_eq!(lines[7], "----");
    }

    #[test]
    fn default_markers_are_emoji() {
        assert_eq!(Markers::default(), Markers::EMOJI);
    }
}
