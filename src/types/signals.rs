use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which the signal title is stored in [`GeneralInfo`].
pub const SIGNAL_NAME_KEY: &str = "signalName";
/// Key under which the author name is stored in [`GeneralInfo`].
pub const AUTHOR_KEY: &str = "author";
/// Key under which the risk indicator text is stored in [`GeneralInfo`].
pub const RELIABILITY_KEY: &str = "reliability";

/// Label → value pairs from the signal profile box, plus the fixed
/// `signalName`, `author` and `reliability` fields.
pub type GeneralInfo = BTreeMap<String, String>;

/// Label → value pairs from the statistics columns.
pub type Statistics = BTreeMap<String, String>;

/// One row of the trade history table.
///
/// Fields are filled by column position. A row with fewer cells than
/// fields leaves the trailing fields as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub trade_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl TradeEntry {
    /// Build an entry from cell texts in column order.
    /// Cells past the fifth are ignored. The iterator is fused, so a source
    /// that restarts after running out cannot refill trailing fields.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut cells = cells.into_iter().fuse();
        Self {
            symbol: cells.next(),
            time: cells.next(),
            trade_type: cells.next(),
            volume: cells.next(),
            price: cells.next(),
        }
    }
}

/// Share of trading activity for a single symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    pub symbol: String,
    /// Raw buy/sell indicator text.
    pub value: String,
    /// Bar width as numeric text, `"0"` when it could not be read.
    pub percentage: String,
}

/// Another signal published by the same author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedSignalRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Everything extracted from a single signal page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalRecord {
    pub general_info: GeneralInfo,
    pub statistics: Statistics,
    pub trade_history: Vec<TradeEntry>,
    pub distribution: Vec<DistributionEntry>,
    pub author_signals: Vec<RelatedSignalRef>,
    pub source_url: String,
    pub extracted_at: DateTime<Utc>,
}

impl SignalRecord {
    /// Title of the signal, empty when the page had none.
    pub fn signal_name(&self) -> &str {
        self.general_info
            .get(SIGNAL_NAME_KEY)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// True when both records carry the same extracted content,
    /// ignoring when each was taken.
    pub fn same_content(&self, other: &SignalRecord) -> bool {
        self.general_info == other.general_info
            && self.statistics == other.statistics
            && self.trade_history == other.trade_history
            && self.distribution == other.distribution
            && self.author_signals == other.author_signals
            && self.source_url == other.source_url
    }
}

/// Request body for endpoints that take a signal URL.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalUrlRequest {
    pub url: String,
}

/// Result of a standalone URL check.
#[derive(Debug, Clone, Serialize)]
pub struct UrlValidation {
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    // =========================================================================
    // TradeEntry Tests
    // =========================================================================

    #[test]
    fn test_trade_entry_full_row() {
        let entry = TradeEntry::from_cells(cells(&[
            "EURUSD",
            "2024-01-01 10:00",
            "Buy",
            "0.1",
            "1.0850",
        ]));

        assert_eq!(entry.symbol.as_deref(), Some("EURUSD"));
        assert_eq!(entry.time.as_deref(), Some("2024-01-01 10:00"));
        assert_eq!(entry.trade_type.as_deref(), Some("Buy"));
        assert_eq!(entry.volume.as_deref(), Some("0.1"));
        assert_eq!(entry.price.as_deref(), Some("1.0850"));
    }

    #[test]
    fn test_trade_entry_short_row() {
        let entry = TradeEntry::from_cells(cells(&["GBPUSD", "2024-01-02", "Sell"]));

        assert_eq!(entry.trade_type.as_deref(), Some("Sell"));
        assert!(entry.volume.is_none());
        assert!(entry.price.is_none());
    }

    /// Yields its cells, then `None` once, then starts over.
    struct Restarting {
        cells: Vec<String>,
        pos: usize,
    }

    impl Iterator for Restarting {
        type Item = String;

        fn next(&mut self) -> Option<String> {
            if self.pos == self.cells.len() {
                self.pos = 0;
                return None;
            }
            self.pos += 1;
            Some(self.cells[self.pos - 1].clone())
        }
    }

    #[test]
    fn test_trade_entry_short_row_from_restarting_iterator() {
        let entry = TradeEntry::from_cells(Restarting {
            cells: cells(&["EURUSD", "2024-01-01", "Buy"]),
            pos: 0,
        });

        assert_eq!(entry.symbol.as_deref(), Some("EURUSD"));
        assert_eq!(entry.trade_type.as_deref(), Some("Buy"));
        assert!(entry.volume.is_none());
        assert!(entry.price.is_none());
    }

    #[test]
    fn test_trade_entry_ignores_extra_cells() {
        let entry = TradeEntry::from_cells(cells(&["A", "B", "C", "D", "E", "F", "G"]));
        assert_eq!(entry.price.as_deref(), Some("E"));
    }

    #[test]
    fn test_trade_entry_serialization_omits_absent() {
        let entry = TradeEntry::from_cells(cells(&["XAUUSD", "2024-03-01"]));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["symbol"], "XAUUSD");
        assert!(json.get("type").is_none());
        assert!(json.get("price").is_none());
    }

    #[test]
    fn test_trade_entry_type_field_name() {
        let entry = TradeEntry::from_cells(cells(&["X", "T", "Buy"]));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"Buy\""));
    }

    // =========================================================================
    // RelatedSignalRef Tests
    // =========================================================================

    #[test]
    fn test_related_signal_without_url() {
        let related = RelatedSignalRef {
            name: "Gamma".to_string(),
            url: None,
        };
        let json = serde_json::to_value(&related).unwrap();

        assert_eq!(json["name"], "Gamma");
        assert!(json.get("url").is_none());
    }
}
