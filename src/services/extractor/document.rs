//! Queryable view over a parsed signal page.

use crate::error::ExtractError;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

/// A parsed HTML document.
///
/// Parsing is tolerant: malformed markup still yields a tree.
pub struct SignalDocument {
    html: Html,
}

impl SignalDocument {
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Text of every element matching `selector` anywhere in the document,
    /// concatenated and trimmed. Empty when nothing matches.
    pub fn text(&self, selector: &Selector) -> String {
        let mut out = String::new();
        for element in self.html.select(selector) {
            out.extend(element.text());
        }
        out.trim().to_string()
    }
}

/// Compile a CSS selector.
///
/// Selectors are fixed strings, so a failure here is a programming fault
/// rather than a missing node.
pub fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| {
        ExtractError::ExtractionFailure(format!("invalid selector '{}': {:?}", css, e))
    })
}

/// Text of every descendant of `scope` matching `selector`, concatenated and trimmed.
pub fn text_within(scope: ElementRef<'_>, selector: &Selector) -> String {
    let mut out = String::new();
    for element in scope.select(selector) {
        out.extend(element.text());
    }
    out.trim().to_string()
}

/// Attribute of the first descendant of `scope` matching `selector`.
pub fn attr_within<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    attr: &str,
) -> Option<&'a str> {
    scope
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
}

/// A repeated item holding one label and one value.
#[derive(Debug, Clone, Copy)]
pub struct LabeledItems {
    pub item: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

impl LabeledItems {
    /// Collect every item into a label → value map.
    ///
    /// Items are visited in document order; a repeated label keeps the
    /// value of its last occurrence.
    pub fn collect(&self, doc: &SignalDocument) -> Result<BTreeMap<String, String>, ExtractError> {
        let item = selector(self.item)?;
        let label = selector(self.label)?;
        let value = selector(self.value)?;

        Ok(doc
            .html()
            .select(&item)
            .map(|element| (text_within(element, &label), text_within(element, &value)))
            .fold(BTreeMap::new(), |mut map, (label, value)| {
                map.insert(label, value);
                map
            }))
    }
}
