use std::panic;

use phonenumber::country;

/// Outcome of a phone-number parse attempt. Parsing never fails loudly: a
/// number the parser cannot make sense of comes back with `valid = false`
/// and the caller falls back to digit cleaning.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub valid: bool,
    /// Numeral calling code, e.g. "1" for North America.
    pub country_code: Option<String>,
    /// Canonical digit-only national significant number (ASCII digits).
    /// Only meaningful when `valid`.
    pub national_number: String,
    /// Extension digits, present only when the source text encoded one.
    pub extension: Option<String>,
}

impl ParseResult {
    pub fn invalid() -> Self {
        ParseResult::default()
    }
}

/// Region-aware phone-number parsing, behind a trait so the underlying
/// library can be swapped (or mocked in tests).
pub trait PhoneNumberParser: Send + Sync {
    fn parse(&self, number_text: &str, default_region: &str) -> ParseResult;
}

/// Production parser backed by the `phonenumber` crate. The crate's region
/// metadata is a process-wide read-only singleton, so a single instance is
/// safe to share across threads.
#[derive(Debug, Default)]
pub struct PhonenumberParser;

impl PhoneNumberParser for PhonenumberParser {
    fn parse(&self, number_text: &str, default_region: &str) -> ParseResult {
        let region = match default_region.parse::<country::Id>() {
            Ok(id) => Some(id),
            Err(_) => {
                log::warn!("unknown default region {:?}, parsing without one", default_region);
                None
            }
        };

        let text = number_text.to_string();
        // The phonenumber crate has some questionable unwraps; a panic in it
        // must not escape the analysis chain.
        let parsed = match panic::catch_unwind(move || phonenumber::parse(region, text)) {
            Ok(Ok(number)) => number,
            Ok(Err(err)) => {
                log::debug!("failed to parse {:?}: {}", number_text, err);
                return ParseResult::invalid();
            }
            Err(_) => {
                log::error!("phonenumber crate panicked while parsing {:?}", number_text);
                return ParseResult::invalid();
            }
        };

        if !phonenumber::is_valid(&parsed) {
            return ParseResult::invalid();
        }

        ParseResult {
            valid: true,
            country_code: Some(parsed.code().value().to_string()),
            national_number: parsed.national().value().to_string(),
            extension: parsed.extension().map(|ext| ext.to_string()),
        }
    }
}
