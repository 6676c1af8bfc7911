//! The rate client and its two queries.

use log::{debug, warn};
use num_traits::ToPrimitive;
use rust_decimal::RoundingStrategy;

use crate::config::ClientConfig;
use crate::errors::{ErrorKind, RateError};
use crate::models::{available_codes, CurrencyList, ExchangeRate, QueryResponse, RateTable};
use crate::source::{HttpRateSource, RateSource};

/// Decimal places kept in a reported rate, ties rounded away from zero
const RATE_DECIMAL_PLACES: u32 = 4;

/// Client for the exchange rate snapshot.
///
/// Holds no state besides its configuration and source: every query fetches
/// the snapshot again and builds its own [`RateTable`].
///
/// The `*` operations never fail; errors are folded into
/// [`QueryResponse::Error`]. The `try_*` operations return the typed
/// [`RateError`] instead.
#[derive(Clone, Debug)]
pub struct RateClient<S = HttpRateSource> {
    config: ClientConfig,
    source: S,
}

impl RateClient<HttpRateSource> {
    /// Create a client fetching over HTTP from `config.source_url`.
    pub fn new(config: ClientConfig) -> Self {
        let source = HttpRateSource::new(&config);
        Self { config, source }
    }
}

impl<S: RateSource> RateClient<S> {
    /// Create a client reading snapshots from a custom source.
    pub fn with_source(config: ClientConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List every currency code in the snapshot, sorted and deduplicated.
    pub async fn list_available_currencies(&self) -> QueryResponse<CurrencyList> {
        match self.try_list_available_currencies().await {
            Ok(list) => QueryResponse::Success(list),
            Err(e) => {
                warn!("Listing currencies from {} failed: {}", self.source.id(), e);
                QueryResponse::error(format!("Failed to list available currencies: {}", e))
            }
        }
    }

    pub async fn try_list_available_currencies(&self) -> Result<CurrencyList, RateError> {
        let records = self.source.fetch_records().await?;
        let codes = available_codes(&records, &self.config.code_suffix());

        debug!("{} distinct currencies available", codes.len());
        Ok(CurrencyList::new(codes))
    }

    /// Value of one unit of `base` expressed in `target`.
    ///
    /// Codes are case-insensitive.
    pub async fn get_exchange_rate(&self, base: &str, target: &str) -> QueryResponse<ExchangeRate> {
        match self.try_get_exchange_rate(base, target).await {
            Ok(rate) => QueryResponse::Success(rate),
            // Lookup errors already name the missing currency.
            Err(e) if e.kind() == ErrorKind::Lookup => QueryResponse::error(e.to_string()),
            Err(e) => {
                warn!(
                    "Exchange rate {}-{} from {} failed: {}",
                    base,
                    target,
                    self.source.id(),
                    e
                );
                QueryResponse::error(format!("Failed to compute exchange rate: {}", e))
            }
        }
    }

    pub async fn try_get_exchange_rate(
        &self,
        base: &str,
        target: &str,
    ) -> Result<ExchangeRate, RateError> {
        let base = normalize_code(base);
        let target = normalize_code(target);

        let records = self.source.fetch_records().await?;
        let table = RateTable::from_records(&records, &self.config.code_suffix())?;
        debug!("Built rate table with {} currencies", table.len());
        let rate = table.cross_rate(&base, &target)?;

        let value = rate
            .round_dp_with_strategy(RATE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .ok_or_else(|| RateError::RateOverflow {
                base: base.clone(),
                target: target.clone(),
            })?;

        debug!("Exchange rate {}-{} = {}", base, target, value);
        Ok(ExchangeRate::new(base, target, value))
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RateRecord, RecordValue};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// In-memory source that counts fetches.
    struct StaticSource {
        records: Vec<RateRecord>,
        fetches: Arc<AtomicUsize>,
    }

    impl StaticSource {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                records: entries
                    .iter()
                    .map(|(c, v)| RateRecord::new(*c, RecordValue::Text(v.to_string())))
                    .collect(),
                fetches: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl RateSource for StaticSource {
        fn id(&self) -> &'static str {
            "STATIC"
        }

        async fn fetch_records(&self) -> Result<Vec<RateRecord>, RateError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RateSource for FailingSource {
        fn id(&self) -> &'static str {
            "FAILING"
        }

        async fn fetch_records(&self) -> Result<Vec<RateRecord>, RateError> {
            Err(RateError::Status { status: 503 })
        }
    }

    fn client(entries: &[(&str, &str)]) -> RateClient<StaticSource> {
        RateClient::with_source(ClientConfig::default(), StaticSource::new(entries))
    }

    #[tokio::test]
    async fn test_list_counts_match_codes() {
        let client = client(&[("USD-USD", "1"), ("EUR-USD", "1.08"), ("CLP-USD", "0.001")]);
        let list = client.try_list_available_currencies().await.unwrap();
        assert_eq!(list.count, 3);
        assert_eq!(list.currencies, vec!["CLP", "EUR", "USD"]);
    }

    #[tokio::test]
    async fn test_every_call_refetches() {
        let source = StaticSource::new(&[("USD-USD", "1"), ("EUR-USD", "0.9")]);
        let fetches = source.fetches.clone();
        let client = RateClient::with_source(ClientConfig::default(), source);

        client.list_available_currencies().await;
        client.get_exchange_rate("usd", "eur").await;
        client.get_exchange_rate("usd", "eur").await;

        assert_eq!(fetches.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_cross_rate_rounded_to_four_places() {
        let client = client(&[("USD-USD", "1.0"), ("EUR-USD", "0.9")]);
        let rate = client.try_get_exchange_rate("usd", "eur").await.unwrap();
        assert_eq!(rate.code, "USD-EUR");
        assert_eq!(rate.value, 1.1111);
        assert_eq!(rate.base, "USD");
        assert_eq!(rate.target, "EUR");
    }

    #[tokio::test]
    async fn test_midpoint_rounds_away_from_zero() {
        let client = client(&[("USD-USD", "1"), ("AAA-USD", "1.00005"), ("BBB-USD", "0.00025")]);

        let rate = client.try_get_exchange_rate("AAA", "USD").await.unwrap();
        assert_eq!(rate.value, 1.0001);

        let rate = client.try_get_exchange_rate("BBB", "USD").await.unwrap();
        assert_eq!(rate.value, 0.0003);

        let rate = client.try_get_exchange_rate("USD", "USD").await.unwrap();
        assert_eq!(rate.value, 1.0);
    }

    #[tokio::test]
    async fn test_overflowing_rate_is_error_response() {
        let client = client(&[("BIG-USD", "1e20"), ("TINY-USD", "1e-10")]);
        let response = client.get_exchange_rate("big", "tiny").await;
        assert_eq!(
            response.message(),
            Some("Failed to compute exchange rate: Exchange rate BIG-TINY is out of range")
        );
    }

    #[tokio::test]
    async fn test_lookup_error_message_is_unprefixed() {
        let client = client(&[("USD-USD", "1")]);
        let response = client.get_exchange_rate("xyz", "usd").await;
        assert_eq!(
            response.message(),
            Some("Base currency 'XYZ' was not found in the data source")
        );
    }

    #[tokio::test]
    async fn test_zero_target_is_error_response() {
        let client = client(&[("USD-USD", "1"), ("ZZZ-USD", "0")]);
        let response = client.get_exchange_rate("USD", "ZZZ").await;
        let message = response.message().unwrap();
        assert!(message.starts_with("Failed to compute exchange rate"));
        assert!(message.contains("ZZZ"));
    }

    #[tokio::test]
    async fn test_source_failure_becomes_error_response() {
        let client = RateClient::with_source(ClientConfig::default(), FailingSource);

        let list = client.list_available_currencies().await;
        assert_eq!(
            list.message(),
            Some("Failed to list available currencies: HTTP error: status 503")
        );

        let rate = client.get_exchange_rate("USD", "EUR").await;
        assert_eq!(
            rate.message(),
            Some("Failed to compute exchange rate: HTTP error: status 503")
        );
    }

    #[tokio::test]
    async fn test_custom_reference_currency() {
        let config = ClientConfig::default().with_reference_currency("eur");
        let source = StaticSource::new(&[("EUR-EUR", "1"), ("USD-EUR", "0.9259")]);
        let client = RateClient::with_source(config, source);

        let list = client.try_list_available_currencies().await.unwrap();
        assert_eq!(list.currencies, vec!["EUR", "USD"]);

        let rate = client.try_get_exchange_rate("eur", "usd").await.unwrap();
        assert_eq!(rate.value, 1.08);
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code(" eur "), "EUR");
        assert_eq!(normalize_code("Clp"), "CLP");
    }
}
