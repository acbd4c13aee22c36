//! Catalog download over HTTP.

use std::time::Duration;

use crate::error::StarmapError;

/// User-Agent sent with every catalog request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Download the raw (still compressed) catalog bytes.
///
/// The timeout bounds the whole request, connect through body. Any network
/// failure or non-success HTTP status is fatal; no retries are attempted.
pub fn download(url: &str, timeout: Duration) -> Result<Vec<u8>, StarmapError> {
    log::info!("downloading {url}");

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;

    let response = client.get(url).send()?.error_for_status()?;
    let body = response.bytes()?;

    log::info!("downloaded {} bytes", body.len());
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_identifies_the_crate() {
        assert!(USER_AGENT.starts_with("starmap/"));
    }
}
