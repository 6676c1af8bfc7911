//! Divisas Client Crate
//!
//! Client SDK for a remote JSON snapshot of currency exchange rates.
//!
//! # Overview
//!
//! The snapshot is a JSON array of records, each quoting one currency against
//! a shared reference currency (USD):
//!
//! ```json
//! [
//!   { "codigo": "EUR-USD", "valor_actual": "1.08" },
//!   { "codigo": "CLP-USD", "valor_actual": 0.00106 }
//! ]
//! ```
//!
//! The client answers two queries against it:
//! - [`RateClient::list_available_currencies`] - sorted, deduplicated codes
//! - [`RateClient::get_exchange_rate`] - cross-rate between two currencies
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |    RateClient    | --> |    RateSource    | --> |  Vec<RateRecord> |
//! +------------------+     +------------------+     +------------------+
//!                                                            |
//!                                                            v
//!                                                   +------------------+
//!                                                   |    RateTable     |  (per call)
//!                                                   +------------------+
//!                                                            |
//!                                                            v
//!                                                   +------------------+
//!                                                   |  QueryResponse   |
//!                                                   +------------------+
//! ```
//!
//! Nothing is cached: every query re-fetches the snapshot and builds its own
//! [`RateTable`].
//!
//! # Example
//!
//! ```no_run
//! use divisas_client::{ClientConfig, RateClient};
//!
//! # async fn run() {
//! let client = RateClient::new(ClientConfig::default());
//! let response = client.get_exchange_rate("eur", "clp").await;
//! println!("{}", serde_json::to_string(&response).unwrap());
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod source;

pub use client::RateClient;
pub use config::ClientConfig;
pub use errors::{ErrorKind, RateError};
pub use models::{
    available_codes, CurrencyList, ExchangeRate, QueryResponse, RateRecord, RateTable,
    RecordValue,
};
pub use source::{HttpRateSource, RateSource};
