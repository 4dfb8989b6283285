use log::debug;

use crate::error::Result;
use crate::public_ip::api::FetchText;

pub(crate) mod api;
pub(crate) mod http;

/// Asks the echo service at `url` for this host's public IPv4 address.
///
/// The body is trusted as-is apart from surrounding whitespace; it is not
/// checked for being a well-formed address. One request, no retries.
pub(crate) fn resolve(fetcher: &dyn FetchText, url: &str) -> Result<String> {
    debug!("Resolving public IP via {} using {}", url, fetcher.describe());
    let body = fetcher.fetch_text(url)?;
    Ok(body.trim().to_string())
}
