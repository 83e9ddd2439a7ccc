//! Field normalization
//!
//! Maps a raw header-keyed record onto the canonical catalogue entry,
//! resolving bare asset filenames against the configured base paths.

use std::sync::LazyLock;

use serde::Serialize;

use super::materialize::RawRecord;
use crate::config::Config;

static ABSOLUTE_URL: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?i)^https?://").unwrap());

/// Normalized catalogue entry, ready for filtering and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalRecord {
    pub title: String,
    pub summary: String,
    /// Free-form display text. The sheet mixes monetary figures with
    /// advisory strings ("No costing available"), so this is never parsed
    /// as a number.
    pub cost_label: String,
    pub category: String,
    pub document_url: String,
    pub thumbnail_url: String,
}

fn join_path(base: &str, file: &str) -> String {
    if base.is_empty() {
        return file.to_owned();
    }
    let encoded = urlencoding::encode(file);
    if base.ends_with('/') {
        format!("{base}{encoded}")
    } else {
        format!("{base}/{encoded}")
    }
}

/// Resolve a sheet cell into an asset reference: absolute http(s) URLs pass
/// through unchanged, anything else is treated as a filename under `base`
/// and percent-encoded.
pub fn resolve_url(value: &str, base: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    if ABSOLUTE_URL.is_match(value) {
        return value.to_owned();
    }
    join_path(base, value)
}

/// Map a raw record to its canonical form, or `None` when it has no title.
pub fn normalize(record: &RawRecord, config: &Config) -> Option<CanonicalRecord> {
    let title = record.get("Title").trim().to_owned();
    if title.is_empty() {
        return None;
    }
    Some(CanonicalRecord {
        title,
        summary: record.get("Summary").trim().to_owned(),
        cost_label: record.get("CostLKR").trim().to_owned(),
        category: record.get("Category").trim().to_owned(),
        document_url: resolve_url(record.get("PDF"), &config.pdf_base_path),
        thumbnail_url: resolve_url(record.get("Thumbnail"), &config.thumb_base_path),
    })
}
