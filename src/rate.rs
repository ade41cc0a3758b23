//! [`FromRate`]

use std::num::ParseFloatError;

/// A number an exchange rate string can be read as.
///
/// The API formats `exchange_rate` as plain decimal text (`dataFormats` reports `10.2`),
/// e.g. `0.92` or `1350.035`, never with an exponent or digit grouping.
pub trait FromRate: Sized {
	/// The parse error type.
	type Error;

	/// Reads the rate text.
	fn parse_rate(s: &str) -> Result<Self, Self::Error>;
}

/// Nearest binary value; digits past the precision of the type are lost.
impl FromRate for f64 {
	type Error = ParseFloatError;
	#[inline] fn parse_rate(s: &str) -> Result<Self, Self::Error> { s.parse() }
}

/// Nearest binary value; digits past the precision of the type are lost.
impl FromRate for f32 {
	type Error = ParseFloatError;
	#[inline] fn parse_rate(s: &str) -> Result<Self, Self::Error> { s.parse() }
}

/// Exact: every digit of the text is kept, including trailing zeros in the scale.
#[cfg(feature = "rust_decimal")]
impl FromRate for rust_decimal::Decimal {
	type Error = rust_decimal::Error;
	#[inline] fn parse_rate(s: &str) -> Result<Self, Self::Error> { s.parse() }
}
