//! Query building for the [`rates_of_exchange`](crate::url::RATES_OF_EXCHANGE) endpoint.

use std::{
	fmt::{self, Display, Formatter},
	time::Duration,
};

use crate::{
	envelope,
	transport::Transport,
	url::{BaseUrl, Fields, Filter, Operator, PageSize, Predicate, Sort, UrlPart, RATES_OF_EXCHANGE},
	Error, ExchangeRateRecord,
};

/// The fields each record carries.
pub const FIELDS: [&str; 3] = ["country_currency_desc", "exchange_rate", "record_date"];
/// The earliest record date considered.
pub const MIN_RECORD_DATE: &str = "2020-01-01";
/// Newest records first.
pub const SORT: &str = "-record_date";
/// Only the newest record is requested.
pub const PAGE_SIZE: u32 = 1;

/// What to look up.
#[derive(Debug, Hash, Default, Clone, PartialEq, Eq)]
pub struct QueryOptions {
	/// The currency selector: one or more comma-separated `country_currency_desc` values,
	/// e.g. `Euro Zone-Euro` or `Canada-Dollar,Mexico-Peso`.
	///
	/// It is placed into the filter clause verbatim. Characters the filter syntax gives meaning to,
	/// such as `(`, `)`, `:` and `,`, are not escaped.
	pub currencies: String,
}

impl QueryOptions {
	/// Creates a new [`QueryOptions`].
	pub fn new(currencies: impl Into<String>) -> Self {
		Self { currencies: currencies.into() }
	}

	/// Builds the [`Request`] with the default endpoint and no timeout.
	pub fn build(&self) -> Request {
		Builder::new(self).build()
	}
}

impl From<&str> for QueryOptions {
	fn from(currencies: &str) -> Self { Self::new(currencies) }
}

impl From<String> for QueryOptions {
	fn from(currencies: String) -> Self { Self::new(currencies) }
}

/// [`Request`] builder.
///
/// # Examples
/// ```
/// # use fiscaldata_rates::{QueryOptions, query::Builder};
/// # use std::time::Duration;
/// let options = QueryOptions::new("Euro Zone-Euro");
/// let request = Builder::new(&options).timeout(Some(Duration::from_secs(10))).build();
/// assert!(request.url().contains("country_currency_desc:in:(Euro Zone-Euro)"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Builder<'a> {
	/// What to look up.
	pub options: &'a QueryOptions,
	/// The endpoint, [`RATES_OF_EXCHANGE`] unless overridden.
	pub endpoint: BaseUrl<'a>,
	/// How long the request may take, end to end.
	pub timeout: Option<Duration>,
}

impl<'a> Builder<'a> {
	/// Creates a new [`Builder`] for the given options.
	pub const fn new(options: &'a QueryOptions) -> Self {
		Self { options, endpoint: RATES_OF_EXCHANGE, timeout: None }
	}

	/// Sets the [`endpoint`](Builder::endpoint).
	pub fn endpoint(mut self, endpoint: &'a str) -> Self {
		self.endpoint = BaseUrl(endpoint);
		self
	}

	/// Sets the [`timeout`](Builder::timeout).
	pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
		self.timeout = timeout;
		self
	}

	/// Builds the [`Request`].
	pub fn build(self) -> Request {
		self.into()
	}

	fn write_url(&self, url: &mut String) {
		let predicates = [
			Predicate::new("country_currency_desc", Operator::In, &self.options.currencies),
			Predicate::new("record_date", Operator::Gte, MIN_RECORD_DATE),
		];
		self.endpoint.write_url_part(url, "");
		let sep = if Fields(&FIELDS).write_url_part(url, "?") { "&" } else { "?" };
		Filter(&predicates).write_url_part(url, sep);
		Sort(SORT).write_url_part(url, "&");
		PageSize(PAGE_SIZE).write_url_part(url, "&");
	}
}

impl<'a> From<&'a QueryOptions> for Builder<'a> {
	fn from(options: &'a QueryOptions) -> Self {
		Self::new(options)
	}
}

impl<'a> From<Builder<'a>> for Request {
	fn from(builder: Builder<'a>) -> Self {
		let mut url = String::with_capacity(
			builder.endpoint.as_str().len() + builder.options.currencies.len() + 160,
		);
		builder.write_url(&mut url);
		Self { url, timeout: builder.timeout }
	}
}

/// A fully specified request for the newest matching exchange rate.
#[derive(Debug, Hash, Clone, PartialEq, Eq)]
pub struct Request {
	url: String,
	timeout: Option<Duration>,
}

impl Request {
	/// The request target: endpoint and query string.
	#[inline] pub fn url(&self) -> &str { &self.url }

	/// The request timeout, if any.
	#[inline] pub fn timeout(&self) -> Option<Duration> { self.timeout }

	/// Sends the request and takes the newest record of the response.
	pub async fn send<T: Transport + ?Sized>(&self, transport: &T) -> Result<ExchangeRateRecord, Error> {
		log::debug!("GET {}", self.url);
		let body = transport.get(&self.url, self.timeout).await?;
		envelope::decode_latest(&body).inspect_err(|error| {
			if error.is_no_record_found() {
				log::warn!("no exchange rate record for {}", self.url);
			}
		})
	}
}

impl Display for Request {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		self.url.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const BASE: &str = "https://api.fiscaldata.treasury.gov/services/api/fiscal_service/v1/accounting/od/rates_of_exchange";

	#[test]
	fn test_exact_target() {
		let request = QueryOptions::new("Euro Zone-Euro").build();
		assert_eq!(
			request.url(),
			format!("{BASE}?fields=country_currency_desc,exchange_rate,record_date&filter=country_currency_desc:in:(Euro Zone-Euro),record_date:gte:2020-01-01&sort=-record_date&page[size]=1"),
		);
		assert_eq!(request.timeout(), None);
		assert_eq!(request.to_string(), request.url());
	}

	#[test]
	fn test_selector_substring() {
		for selector in ["Euro Zone-Euro", "Canada-Dollar,Mexico-Peso", "", "Korea-Won", "a(b):c"] {
			let request = QueryOptions::from(selector).build();
			assert!(request.url().contains(&format!("country_currency_desc:in:({selector})")), "{request}");
		}
	}

	#[test]
	fn test_fixed_clauses() {
		for selector in ["Euro Zone-Euro", "", "x&y=z"] {
			let request = QueryOptions::from(selector.to_string()).build();
			assert!(request.url().contains("record_date:gte:2020-01-01"));
			assert!(request.url().contains("sort=-record_date"));
			assert!(request.url().contains("page[size]=1"));
			assert!(request.url().contains("fields=country_currency_desc,exchange_rate,record_date"));
		}
	}

	#[test]
	fn test_builder_configuration() {
		let options = QueryOptions::new("Japan-Yen");
		let request = Builder::from(&options)
			.endpoint("http://localhost:8080/rates")
			.timeout(Some(Duration::from_millis(250)))
			.build();
		assert!(request.url().starts_with("http://localhost:8080/rates?fields="));
		assert_eq!(request.timeout(), Some(Duration::from_millis(250)));
		assert_eq!(Builder::new(&options).build(), options.build());
	}
}
