//! Address normalization for navigation requests.

use tessel_common::SurfaceError;
use url::Url;

/// Schemes a surface may load as given. Anything else is treated as a
/// bare host and gets `https://` in front.
const PASSTHROUGH_SCHEMES: &[&str] = &["http", "https", "about", "file", "data"];

/// Turn user or page supplied text into a loadable absolute URL.
///
/// `example.com/path` becomes `https://example.com/path`; absolute URLs
/// with a known scheme are kept.
pub fn normalize_url(input: &str) -> Result<String, SurfaceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SurfaceError::InvalidUrl(input.to_string()));
    }
    if let Ok(url) = Url::parse(trimmed) {
        if PASSTHROUGH_SCHEMES.contains(&url.scheme()) {
            return Ok(url.into());
        }
    }
    Url::parse(&format!("https://{trimmed}"))
        .map(Into::into)
        .map_err(|e| SurfaceError::InvalidUrl(format!("{trimmed}: {e}")))
}
