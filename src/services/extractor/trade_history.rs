//! Trade history table.

use super::document::{selector, SignalDocument};
use super::FieldExtractor;
use crate::error::ExtractError;
use crate::types::TradeEntry;

/// Visible, non-summary rows of the history table.
const TRADE_ROWS: &str = "#signalInfoTable tbody tr:not(.signalDataHidden):not(.summary)";
const TRADE_CELLS: &str = "td";

/// Extracts trade rows by column position.
///
/// The table carries no per-cell identifiers, only a stable column order:
/// symbol, time, type, volume, price.
pub struct TradeHistoryExtractor;

impl FieldExtractor for TradeHistoryExtractor {
    type Output = Vec<TradeEntry>;

    fn name(&self) -> &'static str {
        "trade_history"
    }

    fn extract(&self, doc: &SignalDocument) -> Result<Vec<TradeEntry>, ExtractError> {
        let rows = selector(TRADE_ROWS)?;
        let cells = selector(TRADE_CELLS)?;

        Ok(doc
            .html()
            .select(&rows)
            .map(|row| {
                TradeEntry::from_cells(
                    row.select(&cells)
                        .map(|cell| cell.text().collect::<String>().trim().to_string()),
                )
            })
            .collect())
    }
}
