//! Thin HTTP repositories over the two remote data providers.
//!
//! Both repositories share one `reqwest::Client` carrying the configured
//! `User-Agent` and map any non-success status to [`RemoteError::Status`].

pub mod esi;
pub mod zkillboard;

use crate::error::RemoteError;

/// Turns a non-success response into a [`RemoteError::Status`] naming the
/// service and URL, so the enrichment logs say which backend misbehaved.
pub(crate) fn check_status(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RemoteError::Status {
            service,
            status,
            url: response.url().to_string(),
        })
    }
}
