//! Client configuration.

use std::time::Duration;

/// Published snapshot of the Divisas dataset.
pub const DEFAULT_SOURCE_URL: &str = "https://LucielDOD.github.io/API-Divisas/datos.json";

/// Currency every record in the snapshot is quoted against.
pub const DEFAULT_REFERENCE_CURRENCY: &str = "USD";

/// Default HTTP request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`RateClient`](crate::RateClient).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use divisas_client::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_source_url("http://127.0.0.1:8080/datos.json")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.code_suffix(), "-USD");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// URL of the JSON snapshot
    pub source_url: String,

    /// Reference currency the snapshot is quoted in (uppercase)
    pub reference_currency: String,

    /// Timeout applied to each fetch
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            reference_currency: DEFAULT_REFERENCE_CURRENCY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at the given snapshot URL.
    pub fn new(source_url: impl Into<String>) -> Self {
        Self::default().with_source_url(source_url)
    }

    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = source_url.into();
        self
    }

    pub fn with_reference_currency(mut self, currency: impl AsRef<str>) -> Self {
        self.reference_currency = currency.as_ref().trim().to_uppercase();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Suffix carried by every pair code in the snapshot, e.g. `"-USD"`.
    pub fn code_suffix(&self) -> String {
        format!("-{}", self.reference_currency)
    }
}
