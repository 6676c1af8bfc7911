//! Data models for the divisas client.
//!
//! - [`RateRecord`] / [`RecordValue`]: one entry of the remote snapshot
//! - [`RateTable`]: per-call mapping from currency code to reference value
//! - [`QueryResponse`], [`CurrencyList`], [`ExchangeRate`]: result envelopes

mod record;
mod response;
mod table;

pub use record::{available_codes, RateRecord, RecordValue};
pub use response::{local_timestamp, CurrencyList, ExchangeRate, QueryResponse};
pub use table::RateTable;
