//! Snapshot sources.
//!
//! A [`RateSource`] produces the records of one snapshot per call. The
//! client never keeps records between calls, so a source is free to hit the
//! network every time.

mod http;

use async_trait::async_trait;

use crate::errors::RateError;
use crate::models::RateRecord;

pub use http::HttpRateSource;

/// Trait for snapshot sources.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use divisas_client::{RateError, RateRecord, RateSource, RecordValue};
///
/// struct Fixed;
///
/// #[async_trait]
/// impl RateSource for Fixed {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_records(&self) -> Result<Vec<RateRecord>, RateError> {
///         Ok(vec![RateRecord::new("USD-USD", RecordValue::Number(1.0))])
///     }
/// }
/// ```
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Identifier used in log output.
    fn id(&self) -> &'static str;

    /// Fetch every record of the current snapshot.
    async fn fetch_records(&self) -> Result<Vec<RateRecord>, RateError>;
}
