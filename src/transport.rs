//! [`Transport`]

use std::time::Duration;

use async_trait::async_trait;

use crate::Error;

/// Performs HTTP GET requests on behalf of a [`Request`](crate::query::Request).
///
/// Implemented for [`reqwest::Client`]; implement it to route requests elsewhere.
#[async_trait]
pub trait Transport: Send + Sync {
	/// Gets `url` and returns the response body.
	///
	/// Any failure to obtain a successful response, including a non-success status,
	/// is an [`Error::TransportError`].
	async fn get(&self, url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, Error>;
}

#[async_trait]
impl Transport for reqwest::Client {
	async fn get(&self, url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, Error> {
		let mut request = reqwest::Client::get(self, url);
		if let Some(timeout) = timeout {
			request = request.timeout(timeout);
		}
		let response = request.send().await?.error_for_status()?;
		log::debug!("{} responded {}", url, response.status());
		Ok(response.bytes().await?.to_vec())
	}
}
