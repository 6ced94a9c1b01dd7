//! Store configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                                   | Default                  |
//! |--------------------------------------------|--------------------------|
//! | `PROHIBITION_FREE_SHIPPING_THRESHOLD_CENTS`| `3500` ($35.00)          |
//! | `PROHIBITION_FLAT_SHIPPING_CENTS`          | `499` ($4.99)            |
//! | `PROHIBITION_TAX_RATE_BPS`                 | `800` (8%)               |
//! | `PROHIBITION_LOG`                          | `info,prohibition=debug` |
//!
//! `RUST_LOG`, when set, still takes precedence over `PROHIBITION_LOG`
//! (see [`crate::telemetry`]).

use std::env;
use std::str::FromStr;

use prohibition_core::checkout::{
    DEFAULT_FLAT_SHIPPING, DEFAULT_FREE_SHIPPING_THRESHOLD, DEFAULT_TAX_RATE,
};
use prohibition_core::{CheckoutPolicy, Money, TaxRate};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const FREE_SHIPPING_THRESHOLD_VAR: &str = "PROHIBITION_FREE_SHIPPING_THRESHOLD_CENTS";
pub const FLAT_SHIPPING_VAR: &str = "PROHIBITION_FLAT_SHIPPING_CENTS";
pub const TAX_RATE_VAR: &str = "PROHIBITION_TAX_RATE_BPS";
pub const LOG_VAR: &str = "PROHIBITION_LOG";

/// Default log filter when neither `RUST_LOG` nor `PROHIBITION_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,prohibition=debug";

/// Cart store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Shipping and tax rules for order summaries
    pub policy: CheckoutPolicy,

    /// Fallback tracing filter directive
    pub log_filter: String,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// Lets tests supply values without mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let threshold: i64 = parse_or(
            &lookup,
            FREE_SHIPPING_THRESHOLD_VAR,
            DEFAULT_FREE_SHIPPING_THRESHOLD.cents(),
        )?;
        let flat: i64 = parse_or(&lookup, FLAT_SHIPPING_VAR, DEFAULT_FLAT_SHIPPING.cents())?;
        let tax_bps: u32 = parse_or(&lookup, TAX_RATE_VAR, DEFAULT_TAX_RATE.bps())?;

        let policy = CheckoutPolicy::new(
            Money::from_cents(threshold),
            Money::from_cents(flat),
            TaxRate::from_bps(tax_bps),
        )?;

        Ok(StoreConfig {
            policy,
            log_filter: lookup(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            policy: CheckoutPolicy::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StoreConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.policy, CheckoutPolicy::default());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (FREE_SHIPPING_THRESHOLD_VAR, "5000"),
            (FLAT_SHIPPING_VAR, " 699 "),
            (TAX_RATE_VAR, "0"),
            (LOG_VAR, "warn"),
        ]))
        .unwrap();

        assert_eq!(config.policy.free_shipping_threshold().cents(), 5000);
        assert_eq!(config.policy.flat_shipping().cents(), 699);
        assert_eq!(config.policy.tax_rate().bps(), 0);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_unparsable_value_is_rejected() {
        let err = StoreConfig::from_lookup(lookup_from(&[(TAX_RATE_VAR, "8%")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == TAX_RATE_VAR));
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let err =
            StoreConfig::from_lookup(lookup_from(&[(FLAT_SHIPPING_VAR, "-499")])).unwrap_err();
        assert!(matches!(err, ConfigError::Policy(_)));
    }
}
