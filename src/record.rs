//! [`ExchangeRateRecord`]

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::rate::FromRate;

/// One observation of a currency's exchange rate against the U.S. dollar.
///
/// The rate and the date are kept exactly as the API sends them, as text.
/// Use [`ExchangeRateRecord::rate`] to interpret the rate as a number.
#[derive(Debug, Hash, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateRecord {
	/// The country and currency description, e.g. `Euro Zone-Euro`.
	#[serde(rename = "country_currency_desc")]
	pub currency: String,
	/// The exchange rate as a decimal string, e.g. `0.92`.
	pub exchange_rate: String,
	/// The record date as `YYYY-MM-DD`.
	#[serde(rename = "record_date")]
	pub created_at: String,
}

impl ExchangeRateRecord {
	/// Parses the exchange rate.
	///
	/// # Examples
	/// ```
	/// # use fiscaldata_rates::ExchangeRateRecord;
	/// let record = ExchangeRateRecord {
	/// 	currency: "Euro Zone-Euro".into(),
	/// 	exchange_rate: "0.92".into(),
	/// 	created_at: "2024-03-15".into(),
	/// };
	/// assert!((record.rate::<f64>().unwrap() - 0.92).abs() < 1e-12);
	/// ```
	pub fn rate<T: FromRate>(&self) -> Result<T, T::Error> {
		T::parse_rate(&self.exchange_rate)
	}
}

impl Display for ExchangeRateRecord {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{} {} ({})", self.currency, self.exchange_rate, self.created_at)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn euro() -> ExchangeRateRecord {
		ExchangeRateRecord {
			currency: "Euro Zone-Euro".into(),
			exchange_rate: "0.92".into(),
			created_at: "2024-03-15".into(),
		}
	}

	#[test]
	fn test_json_field_names() {
		let json = serde_json::to_value(euro()).unwrap();
		assert_eq!(json, serde_json::json!({
			"country_currency_desc": "Euro Zone-Euro",
			"exchange_rate": "0.92",
			"record_date": "2024-03-15",
		}));
		let back: ExchangeRateRecord = serde_json::from_value(json).unwrap();
		assert_eq!(back, euro());
	}

	#[test]
	fn test_rate_keeps_text() {
		let record = ExchangeRateRecord { exchange_rate: "1350.000".into(), ..euro() };
		assert_eq!(record.exchange_rate, "1350.000");
		assert_eq!(record.rate::<f64>().unwrap(), 1350.0);
	}

	#[test]
	fn test_decoded_rate_converts_to_decimal_exactly() {
		use rust_decimal::Decimal;
		let json = br#"{"country_currency_desc":"Korea-Won","exchange_rate":"1350.035","record_date":"2024-06-30"}"#;
		let record: ExchangeRateRecord = serde_json::from_slice(json).unwrap();
		assert_eq!(record.exchange_rate, "1350.035");
		let rate: Decimal = record.exchange_rate.parse().unwrap();
		assert_eq!(rate, Decimal::new(1350035, 3));
		assert_eq!(rate.to_string(), record.exchange_rate);
		#[cfg(feature = "rust_decimal")]
		assert_eq!(record.rate::<Decimal>().unwrap(), Decimal::new(1350035, 3));
	}

	#[test]
	fn test_numeric_rate_is_rejected() {
		let json = br#"{"country_currency_desc":"Euro Zone-Euro","exchange_rate":0.92,"record_date":"2024-03-15"}"#;
		assert!(serde_json::from_slice::<ExchangeRateRecord>(json).is_err());
	}

	#[test]
	fn test_display() {
		assert_eq!(euro().to_string(), "Euro Zone-Euro 0.92 (2024-03-15)");
	}
}
