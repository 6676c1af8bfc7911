use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::RateError;

/// Value of a record, published either as a JSON number or as a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Number(f64),
    Text(String),
}

impl RecordValue {
    /// Parse the value as a decimal.
    ///
    /// Text keeps its written precision and may use scientific notation
    /// (`"1.5e-3"`). Returns `None` when the value is not a number.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Decimal::try_from(*n).ok(),
            Self::Text(s) => {
                let s = s.trim();
                Decimal::from_str(s)
                    .or_else(|_| Decimal::from_scientific(s))
                    .ok()
            }
        }
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One entry of the remote snapshot.
///
/// Both fields are required; a record missing either one fails
/// deserialization of the whole snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    /// Pair code, e.g. `"EUR-USD"`
    pub codigo: String,

    /// Price of one unit of the currency in the reference currency
    pub valor_actual: RecordValue,
}

impl RateRecord {
    pub fn new(codigo: impl Into<String>, valor_actual: RecordValue) -> Self {
        Self {
            codigo: codigo.into(),
            valor_actual,
        }
    }

    /// Currency code with the reference suffix removed.
    ///
    /// Codes that do not carry the suffix are returned unchanged.
    pub fn currency_code(&self, suffix: &str) -> &str {
        self.codigo.strip_suffix(suffix).unwrap_or(&self.codigo)
    }

    /// Parsed value of the record.
    pub fn value(&self, suffix: &str) -> Result<Decimal, RateError> {
        self.valor_actual
            .to_decimal()
            .ok_or_else(|| RateError::InvalidValue {
                code: self.currency_code(suffix).to_string(),
                value: self.valor_actual.to_string(),
            })
    }
}

/// Distinct currency codes of a snapshot, sorted ascending.
///
/// Values are not inspected, so a record with an unparseable value is still
/// listed.
pub fn available_codes(records: &[RateRecord], suffix: &str) -> Vec<String> {
    records
        .iter()
        .map(|r| r.currency_code(suffix))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
