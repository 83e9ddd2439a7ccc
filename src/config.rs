//! Runtime configuration
//!
//! Loaded from a YAML file; every field has a default so a missing config
//! means the bundled demo catalogue with the stock asset paths.

use std::path::Path;

use serde::Deserialize;

use crate::{Error, ErrorContext, ErrorDetail};

fn default_pdf_base() -> String {
    "/assets/pdfs/".to_owned()
}

fn default_thumb_base() -> String {
    "/assets/thumbs/".to_owned()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Published CSV address. Absent or empty means demo data only.
    #[serde(default)]
    pub sheet_csv_url: Option<String>,
    /// Base path joined onto bare PDF filenames from the sheet.
    #[serde(default = "default_pdf_base")]
    pub pdf_base_path: String,
    /// Base path joined onto bare thumbnail filenames from the sheet.
    #[serde(default = "default_thumb_base")]
    pub thumb_base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_csv_url: None,
            pdf_base_path: default_pdf_base(),
            thumb_base_path: default_thumb_base(),
        }
    }
}

impl Config {
    /// Read and validate a YAML config file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let ctx = ErrorContext::new(path.as_ref().display().to_string());
        let text = tokio::fs::read_to_string(path.as_ref())
            .await
            .map_err(|error| ctx.error(ErrorDetail::ReadConfig(error)))?;
        let config: Self = serde_yaml::from_str(&text)
            .map_err(|error| ctx.error(ErrorDetail::ParseConfig(error)))?;
        config.validate().map_err(|detail| ctx.error(detail))?;
        Ok(config)
    }

    /// Check that a configured sheet URL is a well-formed http(s) address.
    pub fn validate(&self) -> Result<(), ErrorDetail> {
        let Some(url) = self.sheet_url() else {
            return Ok(());
        };
        let parsed = url::Url::parse(url).map_err(ErrorDetail::InvalidSheetUrl)?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ErrorDetail::UnsupportedScheme(scheme.to_owned())),
        }
    }

    /// The sheet URL, if one is configured and non-empty.
    pub fn sheet_url(&self) -> Option<&str> {
        self.sheet_csv_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
