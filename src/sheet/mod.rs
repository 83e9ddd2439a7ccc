//! Sheet ingestion pipeline
//!
//! Raw exported CSV text is tokenized into rows, materialized into
//! header-keyed records, and normalized into catalogue entries.

mod materialize;
mod normalize;
mod parse;

pub use materialize::{HeaderMap, RawRecord, materialize};
pub use normalize::{CanonicalRecord, normalize, resolve_url};
pub use parse::parse_rows;

use crate::config::Config;

/// Run the full pipeline over exported sheet text, keeping only records
/// that carry a title.
pub fn records(text: &str, config: &Config) -> Vec<CanonicalRecord> {
    materialize(parse_rows(text))
        .iter()
        .filter_map(|record| normalize(record, config))
        .collect()
}
