//! Response decoding for the [`rates_of_exchange`](crate::url::RATES_OF_EXCHANGE) endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{query::PAGE_SIZE, Error, ExchangeRateRecord};

/// The top-level JSON object of a response: records plus metadata.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
	/// The records of the requested page, in the requested order.
	pub data: Vec<ExchangeRateRecord>,
	/// Paging and schema information, passed through as-is.
	#[serde(default)]
	pub meta: Metadata,
}

/// The `meta` block of a response.
///
/// None of it is interpreted; absent fields are empty.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
	/// Number of records on this page.
	pub count: usize,
	/// Human readable label of each field.
	pub labels: BTreeMap<String, String>,
	/// Data type of each field, e.g. `DATE` or `NUMBER`.
	#[serde(rename = "dataTypes")]
	pub data_types: BTreeMap<String, String>,
	/// Format of each field, e.g. `YYYY-MM-DD`.
	#[serde(rename = "dataFormats")]
	pub data_formats: BTreeMap<String, String>,
	/// Number of records across all pages.
	#[serde(rename = "total-count")]
	pub total_count: usize,
	/// Number of pages.
	#[serde(rename = "total-pages")]
	pub total_pages: usize,
	/// Pagination links. Links that don't apply, such as `prev` on the first page, are [`None`].
	pub links: BTreeMap<String, Option<String>>,
}

impl ResponseEnvelope {
	/// Takes the first record, which is the newest one for a query sorted by descending date.
	pub fn first(self) -> Result<ExchangeRateRecord, Error> {
		self.data.into_iter().next().ok_or(Error::NoRecordFoundError)
	}
}

/// Decodes a response body.
pub fn decode(body: &[u8]) -> Result<ResponseEnvelope, Error> {
	log::trace!("decoding {} response bytes", body.len());
	let envelope: ResponseEnvelope = serde_json::from_slice(body)?;
	log::debug!("decoded {} of {} records", envelope.data.len(), envelope.meta.total_count);
	if envelope.data.len() > PAGE_SIZE as usize {
		log::warn!("got {} records for a page size of {}", envelope.data.len(), PAGE_SIZE);
	}
	Ok(envelope)
}

/// Decodes a response body and takes its first record.
pub fn decode_latest(body: &[u8]) -> Result<ExchangeRateRecord, Error> {
	decode(body)?.first()
}
