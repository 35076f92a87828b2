use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{DEFAULT_DOLLARS_TPL, DEFAULT_EUROS_TPL, DEFAULT_ROUBLES_TPL};
use crate::errors::{ConfigError, Error, Result};
use crate::fx::{Currency, CurrencyConverter, CurrencyIds};

/// Normalizer configuration, in the shape of the host's `config.json`.
///
/// Keys missing from the file fall back to [`NormalizerConfig::default`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizerConfig {
    /// RUB per 1 USD.
    pub dollar_exchange_rate: Decimal,
    /// RUB per 1 EUR.
    pub euro_exchange_rate: Decimal,
    pub target_currency: Currency,
    /// Item template of the rouble stack.
    pub roubles: String,
    /// Item template of the dollar stack.
    pub dollars: String,
    /// Item template of the euro stack.
    pub euros: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            dollar_exchange_rate: dec!(125),
            euro_exchange_rate: dec!(133),
            target_currency: Currency::Rub,
            roubles: DEFAULT_ROUBLES_TPL.to_string(),
            dollars: DEFAULT_DOLLARS_TPL.to_string(),
            euros: DEFAULT_EUROS_TPL.to_string(),
        }
    }
}

impl NormalizerConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: NormalizerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_json_str(&json)?;
        log::debug!(
            "Loaded normalizer config from {} (target {})",
            path.display(),
            config.target_currency
        );
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (key, rate) in [
            ("dollarExchangeRate", self.dollar_exchange_rate),
            ("euroExchangeRate", self.euro_exchange_rate),
        ] {
            if rate <= Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: format!("exchange rate must be positive, got {}", rate),
                });
            }
        }

        let templates = [
            ("roubles", Currency::Rub, &self.roubles),
            ("dollars", Currency::Usd, &self.dollars),
            ("euros", Currency::Eur, &self.euros),
        ];
        for (key, _, tpl) in &templates {
            if tpl.trim().is_empty() {
                return Err(ConfigError::MissingKey(*key));
            }
        }
        for (i, (_, first, tpl)) in templates.iter().enumerate() {
            if let Some((_, second, _)) = templates[i + 1..]
                .iter()
                .find(|(_, _, other)| other == tpl)
            {
                return Err(ConfigError::DuplicateTemplateId {
                    tpl: tpl.to_string(),
                    first: *first,
                    second: *second,
                });
            }
        }

        Ok(())
    }

    pub fn converter(&self) -> CurrencyConverter {
        CurrencyConverter::new(self.dollar_exchange_rate, self.euro_exchange_rate)
    }

    pub fn currency_ids(&self) -> CurrencyIds {
        CurrencyIds::new(&self.roubles, &self.dollars, &self.euros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parses_host_config_shape() {
        let config = NormalizerConfig::from_json_str(
            r#"{
                "dollarExchangeRate": 100,
                "euroExchangeRate": 110.5,
                "targetCurrency": "USD",
                "roubles": "RUB_ID",
                "dollars": "USD_ID",
                "euros": "EUR_ID"
            }"#,
        )
        .unwrap();

        assert_eq!(config.dollar_exchange_rate, dec!(100));
        assert_eq!(config.euro_exchange_rate, dec!(110.5));
        assert_eq!(config.target_currency, Currency::Usd);
        assert_eq!(config.currency_ids().template_id(Currency::Eur).unwrap(), "EUR_ID");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = NormalizerConfig::from_json_str(r#"{ "dollarExchangeRate": 90 }"#).unwrap();
        assert_eq!(config.dollar_exchange_rate, dec!(90));
        assert_eq!(config.target_currency, Currency::Rub);
        assert_eq!(config.roubles, DEFAULT_ROUBLES_TPL);
    }

    #[test]
    fn test_unknown_target_currency_is_rejected() {
        let result = NormalizerConfig::from_json_str(r#"{ "targetCurrency": "GBP" }"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_rejects_non_positive_rates() {
        let config = NormalizerConfig {
            euro_exchange_rate: Decimal::ZERO,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                key: "euroExchangeRate",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_template() {
        let config = NormalizerConfig {
            dollars: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MissingKey("dollars")));
    }

    #[test]
    fn test_rejects_duplicate_templates() {
        let config = NormalizerConfig {
            euros: DEFAULT_ROUBLES_TPL.to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateTemplateId {
                tpl: DEFAULT_ROUBLES_TPL.to_string(),
                first: Currency::Rub,
                second: Currency::Eur,
            })
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "targetCurrency": "EUR" }}"#).unwrap();

        let config = NormalizerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.target_currency, Currency::Eur);
    }

    #[test]
    fn test_from_missing_file() {
        let result = NormalizerConfig::from_file("/nonexistent/traderfx/config.json");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
