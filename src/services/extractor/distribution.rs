//! Symbol distribution chart.

use super::document::{attr_within, selector, text_within, SignalDocument};
use super::FieldExtractor;
use crate::error::ExtractError;
use crate::types::DistributionEntry;
use regex::Regex;

const DIST_ROWS: &str = ".signals-chart-dist tbody tr";
const DIST_SYMBOL: &str = ".col-symbol";
const DIST_BUY_SELL: &str = ".col-buy-sell";
const DIST_BAR: &str = ".bar div";

/// ASCII digits only, so non-Latin numerals fall back to the default.
const WIDTH_PATTERN: &str = r"width:\s*([0-9.]+)%";

/// Used when the bar has no style or the style has no width.
pub const DEFAULT_PERCENTAGE: &str = "0";

/// Extracts per-symbol rows with the bar width as percentage.
pub struct DistributionExtractor;

/// Pull the numeric part out of a `width: N%` style declaration.
pub fn parse_width(width: &Regex, style: Option<&str>) -> String {
    style
        .and_then(|s| width.captures(s))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_PERCENTAGE.to_string())
}

/// Compile the bar width pattern.
pub fn width_regex() -> Result<Regex, ExtractError> {
    Regex::new(WIDTH_PATTERN)
        .map_err(|e| ExtractError::ExtractionFailure(format!("invalid width pattern: {}", e)))
}

impl FieldExtractor for DistributionExtractor {
    type Output = Vec<DistributionEntry>;

    fn name(&self) -> &'static str {
        "distribution"
    }

    fn extract(&self, doc: &SignalDocument) -> Result<Vec<DistributionEntry>, ExtractError> {
        let rows = selector(DIST_ROWS)?;
        let symbol = selector(DIST_SYMBOL)?;
        let buy_sell = selector(DIST_BUY_SELL)?;
        let bar = selector(DIST_BAR)?;
        let width = width_regex()?;

        Ok(doc
            .html()
            .select(&rows)
            .map(|row| DistributionEntry {
                symbol: text_within(row, &symbol),
                value: text_within(row, &buy_sell),
                percentage: parse_width(&width, attr_within(row, &bar, "style")),
            })
            .collect())
    }
}
