pub mod extractor;

pub use extractor::{extract_from_html, FieldExtractor, SignalDocument, SignalExtractor};
