//! Signal profile box and header card.

use super::document::{selector, LabeledItems, SignalDocument};
use super::FieldExtractor;
use crate::error::ExtractError;
use crate::types::{GeneralInfo, AUTHOR_KEY, RELIABILITY_KEY, SIGNAL_NAME_KEY};

const PROFILE_ITEMS: LabeledItems = LabeledItems {
    item: ".s-list-info__item",
    label: ".s-list-info__label",
    value: ".s-list-info__value",
};

/// Fixed fields read from the header card, applied after the profile scan.
const CARD_FIELDS: &[(&str, &str)] = &[
    (SIGNAL_NAME_KEY, ".s-line-card__title"),
    (AUTHOR_KEY, ".s-line-card__author"),
    (RELIABILITY_KEY, ".s-indicators__item_risk"),
];

/// Extracts the profile label/value list plus signal name, author and reliability.
pub struct GeneralInfoExtractor;

impl FieldExtractor for GeneralInfoExtractor {
    type Output = GeneralInfo;

    fn name(&self) -> &'static str {
        "general_info"
    }

    fn extract(&self, doc: &SignalDocument) -> Result<GeneralInfo, ExtractError> {
        let mut info = PROFILE_ITEMS.collect(doc)?;

        for (key, css) in CARD_FIELDS {
            let sel = selector(css)?;
            info.insert(key.to_string(), doc.text(&sel));
        }

        Ok(info)
    }
}
