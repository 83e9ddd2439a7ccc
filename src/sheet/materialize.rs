//! Row materialization
//!
//! The first parsed row becomes the header table; every later row is zipped
//! against it positionally into a [`RawRecord`].

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

/// Column lookup table compiled once per parse from the header row.
///
/// Lookups consult the exact-label map first and fall back to the
/// lowercased map, so a case-insensitive field access is O(1) instead of a
/// scan over all headers. Later duplicate labels overwrite earlier ones in
/// both maps.
#[derive(Debug, Default)]
pub struct HeaderMap {
    labels: Vec<String>,
    by_label: IndexMap<String, usize>,
    by_folded: IndexMap<String, usize>,
}

impl HeaderMap {
    pub fn compile(header_row: Vec<String>) -> Self {
        let labels: Vec<String> = header_row
            .into_iter()
            .map(|label| label.trim().to_owned())
            .collect();
        let mut by_label = IndexMap::new();
        let mut by_folded = IndexMap::new();
        for (column, label) in labels.iter().enumerate() {
            by_label.insert(label.clone(), column);
            by_folded.insert(label.to_lowercase(), column);
        }
        Self {
            labels,
            by_label,
            by_folded,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    fn column(&self, label: &str) -> Option<usize> {
        self.by_label
            .get(label)
            .or_else(|| self.by_folded.get(&label.to_lowercase()))
            .copied()
    }
}

/// One data row bound to its sheet's header table. Values are trimmed and
/// padded to the header width at materialization time.
#[derive(Debug, Clone)]
pub struct RawRecord {
    header: Arc<HeaderMap>,
    values: Vec<String>,
}

impl RawRecord {
    /// Field text for `label` (case-insensitive), or `""` when the column
    /// is absent.
    pub fn get(&self, label: &str) -> &str {
        self.header
            .column(label)
            .and_then(|column| self.values.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Zip parsed rows against the first (header) row.
///
/// Short rows supply empty text for missing trailing fields; extra fields
/// beyond the header width are dropped. Rows in which every field is empty
/// after trimming are discarded.
pub fn materialize(rows: Vec<Vec<String>>) -> Vec<RawRecord> {
    let mut rows = rows.into_iter();
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let header = Arc::new(HeaderMap::compile(header_row));

    rows.enumerate()
        .filter_map(|(n, row)| {
            if row.len() != header.len() {
                debug!(
                    row = n + 2,
                    fields = row.len(),
                    columns = header.len(),
                    "ragged row"
                );
            }
            let mut values: Vec<String> = row
                .into_iter()
                .take(header.len())
                .map(|value| value.trim().to_owned())
                .collect();
            values.resize(header.len(), String::new());
            if values.iter().all(|value| value.is_empty()) {
                return None;
            }
            Some(RawRecord {
                header: Arc::clone(&header),
                values,
            })
        })
        .collect()
}
