pub mod catalogue;
pub mod config;
pub mod demo;
pub mod fetch;
pub mod filter;
pub mod loader;
pub mod sheet;

#[cfg(test)]
mod tests;

#[derive(Debug, thiserror::Error)]
#[error("{context}: {detail}")]
pub struct Error {
    pub context: Box<ErrorContext>,
    pub detail: Box<ErrorDetail>,
}

/// Names the input being loaded when an error surfaced: the sheet address
/// or a config file path.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub source: String,
}

impl ErrorContext {
    fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    fn error(&self, detail: ErrorDetail) -> Error {
        Error {
            context: Box::new(self.clone()),
            detail: Box::new(detail),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorDetail {
    #[error("Failed to read config: {0}")]
    ReadConfig(std::io::Error),
    #[error("Failed to parse YAML config: {0}")]
    ParseConfig(serde_yaml::Error),
    #[error("Invalid sheet URL: {0}")]
    InvalidSheetUrl(url::ParseError),
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("No sheet URL configured")]
    NoSheetUrl,
    #[error("Failed to fetch sheet: {0}")]
    Fetch(reqwest::Error),
    #[error("Sheet fetch returned {0}")]
    Status(reqwest::StatusCode),
    #[error("No usable records after parsing")]
    EmptyCatalogue,
}
