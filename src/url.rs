//! URL building

use std::fmt::{self, Display, Formatter};

/// A piece of a request target that knows how to append itself to a URL.
pub trait UrlPart {
	/// Appends the part to `url`, preceded by `prefix`.
	///
	/// Returns whether anything was written; nothing is written, not even the prefix, otherwise.
	#[inline] fn write_url_part(&self, _url: &mut String, _prefix: &str) -> bool { false }
}

impl<Inner: UrlPart> UrlPart for Option<Inner> {
	#[inline] fn write_url_part(&self, url: &mut String, prefix: &str) -> bool {
		if let Some(inner) = self {
			inner.write_url_part(url, prefix)
		} else { false }
	}
}

/// Endpoint URLs.
pub mod base {
	use super::UrlPart;

	/// An endpoint URL, without a query string.
	#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
	pub struct BaseUrl<'a>(pub &'a str);

	impl<'a> BaseUrl<'a> {
		/// The endpoint URL.
		#[inline] pub const fn as_str(&self) -> &'a str { self.0 }
	}

	macro_rules! defbase {
		($base:literal, $($id:ident <- $endpoint:literal),* $(,)?) => {
			$(
				#[doc = concat!("[`BaseUrl`] to the `", $endpoint, "` endpoint.")]
				pub const $id: BaseUrl<'static> = BaseUrl(concat!($base, $endpoint));
			)*
		};
	}

	defbase!("https://api.fiscaldata.treasury.gov/services/api/fiscal_service/",
		RATES_OF_EXCHANGE <- "v1/accounting/od/rates_of_exchange",
	);

	impl UrlPart for BaseUrl<'_> {
		#[inline] fn write_url_part(&self, url: &mut String, prefix: &str) -> bool {
			url.push_str(prefix);
			url.push_str(self.0);
			true
		}
	}
}
pub use base::*;

mod fields {
	use super::UrlPart;

	/// The `fields` parameter: which columns each record carries.
	pub struct Fields<'a>(pub &'a [&'a str]);

	impl UrlPart for Fields<'_> {
		fn write_url_part(&self, url: &mut String, prefix: &str) -> bool {
			let mut iter = self.0.iter();
			if let Some(head) = iter.next() {
				url.push_str(prefix);
				url.push_str("fields=");
				url.push_str(head);
				for field in iter {
					url.push(',');
					url.push_str(field);
				}
				true
			} else { false }
		}
	}
}
pub use fields::Fields;

mod filter {
	use super::*;

	/// A comparison operator of the filter clause.
	#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
	pub enum Operator {
		/// `lt`
		Lt,
		/// `lte`
		Lte,
		/// `gt`
		Gt,
		/// `gte`
		Gte,
		/// `eq`
		Eq,
		/// `in`; the value is a comma-separated list and gets wrapped in parentheses.
		In,
	}

	impl Operator {
		/// The operator as it appears in the filter clause.
		pub const fn as_str(self) -> &'static str {
			match self {
				Self::Lt => "lt",
				Self::Lte => "lte",
				Self::Gt => "gt",
				Self::Gte => "gte",
				Self::Eq => "eq",
				Self::In => "in",
			}
		}
	}

	impl Display for Operator {
		fn fmt(&self, f: &mut Formatter) -> fmt::Result { self.as_str().fmt(f) }
	}

	/// One `field:operator:value` predicate.
	///
	/// The value is written as given, without escaping.
	#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
	pub struct Predicate<'a> {
		/// The field the predicate tests.
		pub field: &'a str,
		/// The comparison.
		pub operator: Operator,
		/// The right-hand side.
		pub value: &'a str,
	}

	impl<'a> Predicate<'a> {
		/// Creates a new [`Predicate`].
		pub const fn new(field: &'a str, operator: Operator, value: &'a str) -> Self {
			Self { field, operator, value }
		}

		fn write(&self, url: &mut String) {
			url.push_str(self.field);
			url.push(':');
			url.push_str(self.operator.as_str());
			url.push(':');
			if self.operator == Operator::In {
				url.push('(');
				url.push_str(self.value);
				url.push(')');
			} else {
				url.push_str(self.value);
			}
		}
	}

	impl Display for Predicate<'_> {
		fn fmt(&self, f: &mut Formatter) -> fmt::Result {
			let mut s = String::new();
			self.write(&mut s);
			s.fmt(f)
		}
	}

	/// The `filter` parameter: predicates that must all hold.
	pub struct Filter<'a>(pub &'a [Predicate<'a>]);

	impl UrlPart for Filter<'_> {
		fn write_url_part(&self, url: &mut String, prefix: &str) -> bool {
			let mut iter = self.0.iter();
			if let Some(head) = iter.next() {
				url.push_str(prefix);
				url.push_str("filter=");
				head.write(url);
				for predicate in iter {
					url.push(',');
					predicate.write(url);
				}
				true
			} else { false }
		}
	}
}
pub use filter::{Filter, Operator, Predicate};

mod sort {
	use super::UrlPart;

	/// The `sort` parameter; a leading `-` sorts descending.
	pub struct Sort<'a>(pub &'a str);

	impl UrlPart for Sort<'_> {
		#[inline] fn write_url_part(&self, url: &mut String, prefix: &str) -> bool {
			url.push_str(prefix);
			url.push_str("sort=");
			url.push_str(self.0);
			true
		}
	}
}
pub use sort::Sort;

mod page_size {
	use super::UrlPart;

	/// The `page[size]` parameter.
	pub struct PageSize(pub u32);

	impl UrlPart for PageSize {
		#[inline] fn write_url_part(&self, url: &mut String, prefix: &str) -> bool {
			url.push_str(prefix);
			url.push_str("page[size]=");
			url.push_str(&self.0.to_string());
			true
		}
	}
}
pub use page_size::PageSize;
