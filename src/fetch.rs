//! Remote sheet retrieval

use chrono::Utc;
use url::Url;

use crate::{Error, ErrorContext, ErrorDetail};

/// Fetch the published CSV document as text.
///
/// A fresh `t=<unix-millis>` query pair is appended on every request so
/// intermediary caches never serve a stale export; the `Cache-Control`
/// header covers the rest. Non-success statuses are load failures.
pub async fn fetch_csv(source: &str) -> Result<String, Error> {
    let ctx = ErrorContext::new(source);
    let mut url =
        Url::parse(source).map_err(|error| ctx.error(ErrorDetail::InvalidSheetUrl(error)))?;
    url.query_pairs_mut()
        .append_pair("t", &Utc::now().timestamp_millis().to_string());

    let response = reqwest::Client::new()
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .await
        .map_err(|error| ctx.error(ErrorDetail::Fetch(error)))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ctx.error(ErrorDetail::Status(status)));
    }
    response
        .text()
        .await
        .map_err(|error| ctx.error(ErrorDetail::Fetch(error)))
}
