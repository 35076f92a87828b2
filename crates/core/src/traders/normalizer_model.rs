use serde::Serialize;

use crate::fx::Currency;

/// Outcome of normalizing one trader.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TraderConversion {
    pub trader_id: String,
    pub nickname: String,
    /// Currency code the trader quoted in before the pass.
    pub original_currency: String,
    /// Loyalty levels whose threshold was rescaled (zero when the trader
    /// already used the target currency).
    pub loyalty_levels_rescaled: usize,
    /// Single-component offers priced in a recognized currency and rewritten.
    pub items_converted: usize,
}

/// Summary of a normalization pass, in visit order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationReport {
    pub target_currency: Currency,
    pub traders: Vec<TraderConversion>,
    /// Ids of excluded traders that were left untouched.
    pub skipped: Vec<String>,
}

impl NormalizationReport {
    pub fn new(target_currency: Currency) -> Self {
        Self {
            target_currency,
            traders: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn total_items_converted(&self) -> usize {
        self.traders.iter().map(|t| t.items_converted).sum()
    }

    pub fn conversion_for(&self, trader_id: &str) -> Option<&TraderConversion> {
        self.traders.iter().find(|t| t.trader_id == trader_id)
    }
}
