use chrono::Local;
use serde::{Deserialize, Serialize};

/// Format of `fecha_consulta`: day-month-year, 24h clock.
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Current local time of the calling process, as reported in query results.
pub fn local_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Envelope returned by the client operations.
///
/// Serializes with a `status` tag:
///
/// ```json
/// { "status": "success", "cantidad": 2, "divisas": ["EUR", "USD"], "fecha_consulta": "..." }
/// { "status": "error", "mensaje": "..." }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum QueryResponse<T> {
    Success(T),
    Error { mensaje: String },
}

impl<T> QueryResponse<T> {
    pub fn error(mensaje: impl Into<String>) -> Self {
        Self::Error {
            mensaje: mensaje.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Error message, if this is an error response.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { mensaje } => Some(mensaje.as_str()),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Error { mensaje } => Err(mensaje),
        }
    }
}

/// Payload of a successful currency listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrencyList {
    /// Number of distinct codes
    #[serde(rename = "cantidad")]
    pub count: usize,

    /// Codes sorted ascending
    #[serde(rename = "divisas")]
    pub currencies: Vec<String>,

    #[serde(rename = "fecha_consulta")]
    pub queried_at: String,
}

impl CurrencyList {
    pub fn new(currencies: Vec<String>) -> Self {
        Self {
            count: currencies.len(),
            currencies,
            queried_at: local_timestamp(),
        }
    }
}

/// Payload of a successful cross-rate query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// `"<BASE>-<TARGET>"`
    #[serde(rename = "codigo")]
    pub code: String,

    /// One unit of base in target, rounded to 4 decimal places
    #[serde(rename = "valor")]
    pub value: f64,

    #[serde(rename = "divisa_base")]
    pub base: String,

    #[serde(rename = "divisa_objetivo")]
    pub target: String,

    #[serde(rename = "fecha_consulta")]
    pub queried_at: String,
}

impl ExchangeRate {
    pub fn new(base: String, target: String, value: f64) -> Self {
        Self {
            code: format!("{}-{}", base, target),
            value,
            base,
            target,
            queried_at: local_timestamp(),
        }
    }
}
