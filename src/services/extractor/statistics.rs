//! Statistics columns.

use super::document::{LabeledItems, SignalDocument};
use super::FieldExtractor;
use crate::error::ExtractError;
use crate::types::Statistics;

const STAT_COLUMNS: LabeledItems = LabeledItems {
    item: ".s-data-columns__item",
    label: ".s-data-columns__label",
    value: ".s-data-columns__value",
};

pub struct StatisticsExtractor;

impl FieldExtractor for StatisticsExtractor {
    type Output = Statistics;

    fn name(&self) -> &'static str {
        "statistics"
    }

    fn extract(&self, doc: &SignalDocument) -> Result<Statistics, ExtractError> {
        STAT_COLUMNS.collect(doc)
    }
}
