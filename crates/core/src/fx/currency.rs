use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::fx_errors::FxError;

/// The closed set of currencies a trader can quote in.
///
/// RUB is the hub of the rate graph: every configured rate is expressed as
/// "RUB per 1 unit" of the other currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "RUB")]
    Rub,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Rub, Currency::Usd, Currency::Eur];

    /// The hub currency all configured rates are quoted against.
    pub const HUB: Currency = Currency::Rub;

    /// Three-letter code as the game data stores it.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Plural name used in conversion log lines.
    pub fn display_name(self) -> &'static str {
        match self {
            Currency::Rub => "roubles",
            Currency::Usd => "dollars",
            Currency::Eur => "euros",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| FxError::UnsupportedCurrency(s.to_string()))
    }
}

/// Bidirectional mapping between currencies and the item templates that
/// represent them in an offer's cost components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyIds {
    roubles: String,
    dollars: String,
    euros: String,
}

impl CurrencyIds {
    pub fn new(
        roubles: impl Into<String>,
        dollars: impl Into<String>,
        euros: impl Into<String>,
    ) -> Self {
        Self {
            roubles: roubles.into(),
            dollars: dollars.into(),
            euros: euros.into(),
        }
    }

    /// Returns the currency an item template stands for, or `None` when the
    /// template is an ordinary item (barter goods).
    pub fn currency_for(&self, tpl: &str) -> Option<Currency> {
        if tpl.is_empty() {
            return None;
        }
        Currency::ALL
            .into_iter()
            .find(|c| self.raw_template_id(*c) == tpl)
    }

    /// Returns the item template configured for `currency`.
    ///
    /// An empty configured id counts as missing.
    pub fn template_id(&self, currency: Currency) -> Result<&str, FxError> {
        let tpl = self.raw_template_id(currency);
        if tpl.is_empty() {
            Err(FxError::MissingTemplateId(currency))
        } else {
            Ok(tpl)
        }
    }

    fn raw_template_id(&self, currency: Currency) -> &str {
        match currency {
            Currency::Rub => &self.roubles,
            Currency::Usd => &self.dollars,
            Currency::Eur => &self.euros,
        }
    }
}
