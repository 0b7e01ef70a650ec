//! Status-code descriptions.
//!
//! Lookups never fail: an unknown code describes as the empty string.

use std::collections::HashMap;

use http::StatusCode;

/// Maps an HTTP status code to a human description.
pub trait StatusLookup {
    /// Empty string when the code is not known.
    fn description(&self, code: u16) -> String;
}

/// Standard reason phrases (`200` → `OK`, `404` → `Not Found`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalReasons;

impl StatusLookup for CanonicalReasons {
    fn description(&self, code: u16) -> String {
        StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or_default()
            .to_string()
    }
}

impl StatusLookup for HashMap<u16, String> {
    fn description(&self, code: u16) -> String {
        self.get(&code).cloned().unwrap_or_default()
    }
}

impl StatusLookup for HashMap<u16, &'static str> {
    fn description(&self, code: u16) -> String {
        self.get(&code).map(|text| text.to_string()).unwrap_or_default()
    }
}

impl<L: StatusLookup + ?Sized> StatusLookup for &L {
    fn description(&self, code: u16) -> String {
        (**self).description(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_reasons_cover_common_codes() {
        assert_eq!(CanonicalReasons.description(200), "OK");
        assert_eq!(CanonicalReasons.description(400), "Bad Request");
        assert_eq!(CanonicalReasons.description(503), "Service Unavailable");
    }

    #[test]
    fn canonical_reasons_unknown_code_is_empty() {
        assert_eq!(CanonicalReasons.description(9999), "");
        assert_eq!(CanonicalReasons.description(599), "");
        assert_eq!(CanonicalReasons.description(0), "");
    }

    #[test]
    fn custom_table_answers_only_its_codes() {
        let table: HashMap<u16, &'static str> = HashMap::from([(200, "OK"), (400, "Bad Request")]);
        assert_eq!(table.description(400), "Bad Request");
        assert_eq!(table.description(404), "");
    }

    #[test]
    fn owned_table_answers_only_its_codes() {
        let table: HashMap<u16, String> = HashMap::from([(418, "Teapot".to_string())]);
        assert_eq!(table.description(418), "Teapot");
        assert_eq!(table.description(200), "");
    }
}
