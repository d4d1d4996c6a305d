//! Other signals by the same author.

use super::document::{selector, text_within, SignalDocument};
use super::FieldExtractor;
use crate::error::ExtractError;
use crate::types::RelatedSignalRef;

const RELATED_ITEMS: &str = "#authorsSignals .s-other-signal";
const RELATED_NAME: &str = ".s-other-signal__name";

pub struct RelatedSignalsExtractor;

impl FieldExtractor for RelatedSignalsExtractor {
    type Output = Vec<RelatedSignalRef>;

    fn name(&self) -> &'static str {
        "author_signals"
    }

    fn extract(&self, doc: &SignalDocument) -> Result<Vec<RelatedSignalRef>, ExtractError> {
        let items = selector(RELATED_ITEMS)?;
        let name = selector(RELATED_NAME)?;

        Ok(doc
            .html()
            .select(&items)
            .map(|item| RelatedSignalRef {
                name: text_within(item, &name),
                url: item.value().attr("href").map(str::to_string),
            })
            .collect())
    }
}
