//! [`Error`] type.

/// An error from fetching, decoding, or extracting an exchange rate.
///
/// Each variant names the stage that failed so callers can choose between retrying and giving up.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The request could not complete: connectivity, timeout, or a non-success status.
	#[error("transport error: {0}")]
	TransportError(Box<dyn std::error::Error + Send + Sync>),
	/// The response body is not JSON of the expected shape.
	#[error("failed to decode the response: {0}")]
	DecodeError(#[from] serde_json::Error),
	/// The response decoded fine but held no records.
	#[error("no exchange rate record matched the query")]
	NoRecordFoundError,
}

impl From<reqwest::Error> for Error {
	fn from(error: reqwest::Error) -> Self {
		Self::TransportError(Box::new(error))
	}
}

impl Error {
	/// Whether the failure happened before a response body was obtained.
	pub fn is_transport(&self) -> bool { matches!(self, Self::TransportError(_)) }

	/// Whether the response body could not be decoded.
	pub fn is_decode(&self) -> bool { matches!(self, Self::DecodeError(_)) }

	/// Whether the query matched no record.
	pub fn is_no_record_found(&self) -> bool { matches!(self, Self::NoRecordFoundError) }
}
