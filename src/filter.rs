//! Catalogue filtering

use std::collections::HashSet;

use crate::sheet::CanonicalRecord;

/// Transient filter criteria: free text plus selected category labels.
/// An empty category set matches every category.
#[derive(Debug, Default, Clone)]
pub struct FilterQuery {
    pub text: String,
    pub categories: HashSet<String>,
}

/// Select the records matching `query`, preserving catalogue order.
///
/// A record matches on text when the lowercased, trimmed query is empty or
/// is a substring of the lowercased `title + " " + summary`; it matches on
/// category by exact membership in the selected set. Both must hold.
pub fn filter<'a>(
    records: &'a [CanonicalRecord],
    query: &FilterQuery,
) -> Vec<&'a CanonicalRecord> {
    let needle = query.text.trim().to_lowercase();
    records
        .iter()
        .filter(|record| {
            let matches_text = needle.is_empty() || {
                let hay = format!("{} {}", record.title, record.summary).to_lowercase();
                hay.contains(&needle)
            };
            let matches_category =
                query.categories.is_empty() || query.categories.contains(&record.category);
            matches_text && matches_category
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{FilterQuery, filter};
    use crate::sheet::CanonicalRecord;

    fn record(title: &str, summary: &str, category: &str) -> CanonicalRecord {
        CanonicalRecord {
            title: title.to_owned(),
            summary: summary.to_owned(),
            cost_label: String::new(),
            category: category.to_owned(),
            document_url: String::new(),
            thumbnail_url: String::new(),
        }
    }

    fn catalogue() -> Vec<CanonicalRecord> {
        vec![
            record("Bridge Renewal", "Replace aging bridges.", "Infrastructure"),
            record("Customs Window", "Trade facilitation.", "Trade & Industry"),
            record("Road Upkeep", "Bridge and road maintenance.", "Infrastructure"),
        ]
    }

    #[test]
    fn test_identity_when_unconstrained() {
        let records = catalogue();
        let matched = filter(&records, &FilterQuery::default());
        assert_eq!(matched.len(), records.len());
        assert!(matched.iter().zip(&records).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_text_matches_title_and_summary() {
        let records = catalogue();
        let query = FilterQuery {
            text: "BRIDGE".to_owned(),
            ..Default::default()
        };
        let matched = filter(&records, &query);
        // "Bridge" appears in one title and one summary; order is preserved.
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].title, "Bridge Renewal");
        assert_eq!(matched[1].title, "Road Upkeep");
    }

    #[test]
    fn test_query_is_trimmed() {
        let records = catalogue();
        let query = FilterQuery {
            text: "  customs  ".to_owned(),
            ..Default::default()
        };
        assert_eq!(filter(&records, &query).len(), 1);
    }

    #[test]
    fn test_category_match_is_exact() {
        let records = catalogue();
        let query = FilterQuery {
            categories: ["infrastructure".to_owned()].into(),
            ..Default::default()
        };
        // No case folding on categories.
        assert!(filter(&records, &query).is_empty());
    }

    #[test]
    fn test_text_and_category_must_both_hold() {
        let records = catalogue();
        let query = FilterQuery {
            text: "bridge".to_owned(),
            categories: ["Infrastructure".to_owned()].into(),
        };
        let matched = filter(&records, &query);
        assert_eq!(matched.len(), 2);
        let query = FilterQuery {
            text: "bridge".to_owned(),
            categories: ["Trade & Industry".to_owned()].into(),
        };
        assert!(filter(&records, &query).is_empty());
    }

    #[test]
    fn test_pure_no_mutation() {
        let records = catalogue();
        let before = records.clone();
        let query = FilterQuery {
            text: "road".to_owned(),
            ..Default::default()
        };
        let _ = filter(&records, &query);
        let _ = filter(&records, &query);
        assert_eq!(records, before);
    }
}
