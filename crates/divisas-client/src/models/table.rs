use std::collections::HashMap;

use rust_decimal::Decimal;

use super::record::RateRecord;
use crate::errors::RateError;

/// Mapping from currency code to its value in the reference currency.
///
/// Built fresh from a snapshot for a single query. When a code appears more
/// than once, the last record wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateTable {
    values: HashMap<String, Decimal>,
}

impl RateTable {
    /// Build a table from snapshot records.
    ///
    /// Fails with [`RateError::InvalidValue`] on the first record whose value
    /// is not a number.
    pub fn from_records(records: &[RateRecord], suffix: &str) -> Result<Self, RateError> {
        let mut values = HashMap::with_capacity(records.len());
        for record in records {
            values.insert(
                record.currency_code(suffix).to_string(),
                record.value(suffix)?,
            );
        }
        Ok(Self { values })
    }

    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.values.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of one unit of `base` expressed in `target`.
    ///
    /// Both values are quoted in the reference currency, so
    /// `rate = value(base) / value(target)`. The base is looked up first.
    /// A zero target value yields [`RateError::InvalidRate`]; a quotient that
    /// does not fit a `Decimal` yields [`RateError::RateOverflow`].
    pub fn cross_rate(&self, base: &str, target: &str) -> Result<Decimal, RateError> {
        let base_value = self
            .get(base)
            .ok_or_else(|| RateError::BaseCurrencyNotFound(base.to_string()))?;
        let target_value = self
            .get(target)
            .ok_or_else(|| RateError::TargetCurrencyNotFound(target.to_string()))?;

        if target_value.is_zero() {
            return Err(RateError::InvalidRate {
                base: base.to_string(),
                target: target.to_string(),
            });
        }

        base_value
            .checked_div(target_value)
            .ok_or_else(|| RateError::RateOverflow {
                base: base.to_string(),
                target: target.to_string(),
            })
    }
}
