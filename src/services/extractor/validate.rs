//! Signal URL shape check.
//!
//! The fetcher must only ever be pointed at MQL5 signal pages, so every
//! URL is checked here before any request is made.

use crate::error::ExtractError;
use crate::sources::mql5::MQL5_BASE_URL;
use regex::Regex;

/// `<base>/<locale>/signals/<id>`. Digits are ASCII only.
fn signal_url_pattern() -> String {
    format!(
        r"^{}/[a-z]{{2}}/signals/[0-9]+$",
        regex::escape(MQL5_BASE_URL)
    )
}

/// Check that `url` is a signal page URL.
pub fn validate_signal_url(url: &str) -> Result<(), ExtractError> {
    let pattern = Regex::new(&signal_url_pattern()).map_err(|e| {
        ExtractError::ExtractionFailure(format!("invalid signal URL pattern: {}", e))
    })?;

    if pattern.is_match(url) {
        Ok(())
    } else {
        Err(ExtractError::InvalidIdentifierFormat(url.to_string()))
    }
}

/// Boolean form of [`validate_signal_url`].
pub fn is_signal_url(url: &str) -> bool {
    validate_signal_url(url).is_ok()
}
