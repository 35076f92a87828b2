use std::sync::Arc;

use super::normalizer_model::{NormalizationReport, TraderConversion};
use super::traders_model::{sole_component, Trader, TraderTable};
use crate::config::NormalizerConfig;
use crate::constants::EXCLUDED_TRADER_NICKNAMES;
use crate::fx::{Currency, CurrencyConverter, CurrencyIds};
use crate::logging::{LogFacadeSink, LogSink};

/// Rewrites trader loyalty thresholds and currency prices so every trader
/// quotes the configured target currency.
#[derive(Clone)]
pub struct CurrencyNormalizer {
    config: NormalizerConfig,
    converter: CurrencyConverter,
    currency_ids: CurrencyIds,
    log: Arc<dyn LogSink>,
}

impl CurrencyNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            converter: config.converter(),
            currency_ids: config.currency_ids(),
            config,
            log: Arc::new(LogFacadeSink),
        }
    }

    /// Sets the sink that receives per-trader log lines.
    pub fn with_log_sink(mut self, log: Arc<dyn LogSink>) -> Self {
        self.log = log;
        self
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn is_excluded(nickname: &str) -> bool {
        EXCLUDED_TRADER_NICKNAMES.contains(&nickname)
    }

    /// Normalizes every trader in the table in place.
    ///
    /// Never fails: unresolvable rates fall back to 1 and a missing target
    /// template leaves offers untouched, both with an error line.
    pub fn normalize(&self, traders: &mut TraderTable) -> NormalizationReport {
        let target = self.config.target_currency;
        let mut report = NormalizationReport::new(target);

        let target_tpl = match self.currency_ids.template_id(target) {
            Ok(tpl) => Some(tpl.to_string()),
            Err(e) => {
                self.log
                    .error(&format!("{}; offers will keep their currency", e));
                None
            }
        };

        for (trader_id, trader) in traders.iter_mut() {
            if Self::is_excluded(&trader.base.nickname) {
                self.log
                    .debug(&format!("Skipping excluded trader {}", trader.base.nickname));
                report.skipped.push(trader_id.clone());
                continue;
            }

            let conversion = self.normalize_trader(trader_id, trader, target, target_tpl.as_deref());
            self.log.info(&format!(
                "{}: {} items converted to take {}.",
                conversion.nickname,
                conversion.items_converted,
                target.display_name()
            ));
            report.traders.push(conversion);
        }

        report
    }

    fn normalize_trader(
        &self,
        trader_id: &str,
        trader: &mut Trader,
        target: Currency,
        target_tpl: Option<&str>,
    ) -> TraderConversion {
        let nickname = trader.base.nickname.clone();
        let original_currency = trader.base.currency.clone();

        // None when the trader already quotes the target currency. An unknown
        // code is rescaled at an exchange rate of 1.
        let loyalty_source = match original_currency.parse::<Currency>() {
            Ok(currency) if currency == target => None,
            Ok(currency) => Some(currency),
            Err(e) => {
                self.log.error(&format!(
                    "{}: {}; using an exchange rate of 1",
                    nickname, e
                ));
                Some(target)
            }
        };

        let mut loyalty_levels_rescaled = 0;
        if let Some(source) = loyalty_source {
            for level in trader.base.loyalty_levels.iter_mut() {
                level.min_sales_sum = self.converter.convert_amount_or_keep(
                    level.min_sales_sum,
                    source,
                    target,
                    self.log.as_ref(),
                );
                loyalty_levels_rescaled += 1;
            }
        }
        trader.base.currency = target.code().to_string();

        let mut items_converted = 0;
        if let Some(target_tpl) = target_tpl {
            for offer in trader.offers_mut() {
                let Some(component) = sole_component(offer) else {
                    continue;
                };
                let Some(currency) = self.currency_ids.currency_for(&component.tpl) else {
                    continue;
                };

                component.count = self.converter.convert_amount_or_keep(
                    component.count,
                    currency,
                    target,
                    self.log.as_ref(),
                );
                component.tpl = target_tpl.to_string();
                items_converted += 1;
            }
        }

        TraderConversion {
            trader_id: trader_id.to_string(),
            nickname,
            original_currency,
            loyalty_levels_rescaled,
            items_converted,
        }
    }
}
