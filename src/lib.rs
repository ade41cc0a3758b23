//! [Treasury Fiscal Data](https://fiscaldata.treasury.gov/api-documentation/) rates of exchange API library.
//!
//! Looks up the most recent U.S. Treasury reporting rate of exchange for a currency.
//!
//! ```no_run
//! # async fn run() -> Result<(), fiscaldata_rates::Error> {
//! let client = reqwest::Client::new();
//! let record = fiscaldata_rates::fetch_latest_exchange_rate(&client, &"Euro Zone-Euro".into()).await?;
//! println!("{} as of {}", record.exchange_rate, record.created_at);
//! # Ok(()) }
//! ```

#![deny(missing_docs)]

pub mod envelope;
pub mod error;
pub mod query;
pub mod rate;
pub mod record;
pub mod transport;
pub mod url;

pub use envelope::{Metadata, ResponseEnvelope};
pub use error::Error;
pub use query::{QueryOptions, Request};
pub use rate::FromRate;
pub use record::ExchangeRateRecord;
pub use transport::Transport;

/// Fetches the newest exchange rate record on or after 2020-01-01 matching the options.
///
/// Uses the default endpoint and no timeout; see [`fetch_latest_exchange_rate_with`] for more control.
pub async fn fetch_latest_exchange_rate<T: Transport + ?Sized>(
	transport: &T,
	options: &QueryOptions,
) -> Result<ExchangeRateRecord, Error> {
	options.build().send(transport).await
}

/// Sends a configured [`Request`], as built by [`query::Builder`].
pub async fn fetch_latest_exchange_rate_with<T: Transport + ?Sized>(
	transport: &T,
	request: &Request,
) -> Result<ExchangeRateRecord, Error> {
	request.send(transport).await
}
