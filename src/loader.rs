//! Catalogue loading
//!
//! Remote-first with demo fallback. No load error is fatal: the worst
//! observable outcome is the bundled demo catalogue.

use tracing::{info, warn};

use crate::{
    ErrorContext, ErrorDetail,
    catalogue::CatalogueStore,
    config::Config,
    demo, fetch,
    sheet::{self, CanonicalRecord},
};

/// Which input produced the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Sheet,
    Demo,
}

impl LoadSource {
    pub fn is_remote(self) -> bool {
        matches!(self, Self::Sheet)
    }
}

impl std::fmt::Display for LoadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sheet => write!(f, "sheet"),
            Self::Demo => write!(f, "demo"),
        }
    }
}

async fn load_from_sheet(config: &Config) -> Result<Vec<CanonicalRecord>, crate::Error> {
    let Some(source) = config.sheet_url() else {
        return Err(ErrorContext::new("config").error(ErrorDetail::NoSheetUrl));
    };
    let text = fetch::fetch_csv(source).await?;
    let records = sheet::records(&text, config);
    if records.is_empty() {
        return Err(ErrorContext::new(source).error(ErrorDetail::EmptyCatalogue));
    }
    Ok(records)
}

/// Load the catalogue: remote sheet first, bundled demo set on any failure.
pub async fn load(config: &Config) -> (Vec<CanonicalRecord>, LoadSource) {
    match load_from_sheet(config).await {
        Ok(records) => {
            info!(records = records.len(), "loaded catalogue from sheet");
            (records, LoadSource::Sheet)
        }
        Err(error) => {
            warn!(%error, "falling back to demo data");
            (demo::demo_records(config), LoadSource::Demo)
        }
    }
}

/// Load and atomically install the result into `store`.
pub async fn load_into(store: &CatalogueStore, config: &Config) -> LoadSource {
    let (records, source) = load(config).await;
    store.replace(records);
    source
}
