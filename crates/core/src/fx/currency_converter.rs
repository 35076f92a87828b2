use rust_decimal::Decimal;

use super::currency::Currency;
use super::fx_errors::FxError;
use crate::logging::LogSink;

/// Rate resolver over the three-currency graph.
///
/// RUB is the hub: the two configured rates are edges USD->RUB and EUR->RUB,
/// their inverses are the edges back out, and a USD<->EUR conversion goes
/// through the hub in a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyConverter {
    /// RUB per 1 USD.
    dollar_rate: Decimal,
    /// RUB per 1 EUR.
    euro_rate: Decimal,
}

impl CurrencyConverter {
    pub fn new(dollar_rate: Decimal, euro_rate: Decimal) -> Self {
        Self {
            dollar_rate,
            euro_rate,
        }
    }

    /// Rate of the edge `currency -> RUB`.
    fn to_hub(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Rub => Decimal::ONE,
            Currency::Usd => self.dollar_rate,
            Currency::Eur => self.euro_rate,
        }
    }

    /// Rate of the edge `RUB -> currency`. Fails when the configured rate
    /// cannot be inverted.
    fn from_hub(&self, currency: Currency) -> Option<Decimal> {
        Decimal::ONE.checked_div(self.to_hub(currency))
    }

    /// Returns how many units of `to` one unit of `from` is worth.
    pub fn get_rate(&self, from: Currency, to: Currency) -> Result<Decimal, FxError> {
        if from == to {
            return Ok(Decimal::ONE);
        }

        let rate = match (from, to) {
            (_, Currency::Rub) => Some(self.to_hub(from)),
            (Currency::Rub, _) => self.from_hub(to),
            _ => self
                .from_hub(to)
                .and_then(|inbound| self.to_hub(from).checked_mul(inbound)),
        };

        rate.ok_or(FxError::Unresolvable { from, to })
    }

    /// Converts `amount` from one currency to another.
    ///
    /// The amount is taken into RUB and then divided by the outbound rate, so
    /// no truncated inverse rate enters the result.
    pub fn convert_amount(
        &self,
        amount: Decimal,
        from: Currency,
        to: Currency,
    ) -> Result<Decimal, FxError> {
        if from == to {
            return Ok(amount);
        }

        let outbound = self.to_hub(to);
        if outbound.is_zero() {
            return Err(FxError::Unresolvable { from, to });
        }

        amount
            .checked_mul(self.to_hub(from))
            .and_then(|in_hub| in_hub.checked_div(outbound))
            .ok_or(FxError::ConversionOverflow { amount, from, to })
    }

    /// Like [`convert_amount`](Self::convert_amount), but a failed conversion
    /// is logged and the amount is kept as it was.
    pub fn convert_amount_or_keep(
        &self,
        amount: Decimal,
        from: Currency,
        to: Currency,
        log: &dyn LogSink,
    ) -> Decimal {
        match self.convert_amount(amount, from, to) {
            Ok(converted) => converted,
            Err(e) => {
                log.error(&format!("{}; using an exchange rate of 1", e));
                amount
            }
        }
    }
}
