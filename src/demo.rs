//! Bundled fallback records
//!
//! Served when the remote sheet cannot be fetched or yields no usable rows,
//! so the presentation layer never faces an empty state.

use crate::{
    config::Config,
    sheet::{CanonicalRecord, resolve_url},
};

/// The static demo catalogue. Asset names resolve through the same rule as
/// sheet values, so base-path configuration applies here too.
pub fn demo_records(config: &Config) -> Vec<CanonicalRecord> {
    vec![
        CanonicalRecord {
            title: "Targeted Nutrition Support for Estate Schoolchildren".to_owned(),
            summary: "Scale an evidence-based school meal programme to reduce malnutrition in underserved estate areas.".to_owned(),
            cost_label: "1250000000".to_owned(),
            category: "Social Protection".to_owned(),
            document_url: resolve_url("nutrition-estates.pdf", &config.pdf_base_path),
            thumbnail_url: resolve_url("nutrition-estates.jpg", &config.thumb_base_path),
        },
        CanonicalRecord {
            title: "Digital Customs Single Window (Phase I)".to_owned(),
            summary: "Establish a single-window for trade facilitation to cut clearance time by up to 40%.".to_owned(),
            cost_label: "850000000".to_owned(),
            category: "Trade & Industry".to_owned(),
            document_url: resolve_url("customs-phase1.pdf", &config.pdf_base_path),
            thumbnail_url: resolve_url("customs-phase1.jpg", &config.thumb_base_path),
        },
        CanonicalRecord {
            title: "Results-Based Road Maintenance Contracts".to_owned(),
            summary: "Adopt performance-based maintenance to improve road quality and reduce lifecycle costs.".to_owned(),
            cost_label: "4500000000".to_owned(),
            category: "Infrastructure".to_owned(),
            document_url: resolve_url("roads-rb-contracts.pdf", &config.pdf_base_path),
            thumbnail_url: resolve_url("roads-rb-contracts.jpg", &config.thumb_base_path),
        },
    ]
}
