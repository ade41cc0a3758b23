use std::{process::ExitCode, time::Duration};

use clap::Parser;
use fiscaldata_rates::{query::Builder, QueryOptions};

#[derive(Parser, Debug)]
pub struct Cli {
	/// Currency descriptions, comma-separated, e.g. "Euro Zone-Euro".
	currencies: String,
	/// Request timeout in seconds.
	#[clap(long, default_value_t = 30)]
	timeout: u64,
	/// Endpoint override.
	#[clap(long)]
	endpoint: Option<String>,
}

#[cfg(feature = "rust_decimal")] type Rate = rust_decimal::Decimal;
#[cfg(not(feature = "rust_decimal"))] type Rate = f64;

#[tokio::main]
async fn main() -> ExitCode {
	env_logger::init();
	let cli = Cli::parse();
	let client = reqwest::Client::new();

	let options = QueryOptions::new(cli.currencies);
	let mut builder = Builder::new(&options).timeout(Some(Duration::from_secs(cli.timeout)));
	if let Some(endpoint) = cli.endpoint.as_deref() {
		builder = builder.endpoint(endpoint);
	}
	match builder.build().send(&client).await {
		Ok(record) => {
			match record.rate::<Rate>() {
				Ok(rate) => println!("{} {} as of {}", record.currency, rate, record.created_at),
				Err(_) => println!("{record}"),
			}
			ExitCode::SUCCESS
		}
		Err(error) => {
			eprintln!("{error}");
			ExitCode::FAILURE
		}
	}
}
