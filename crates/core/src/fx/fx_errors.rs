use rust_decimal::Decimal;
use thiserror::Error;

use super::currency::Currency;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("No conversion path found for {from} -> {to}")]
    Unresolvable { from: Currency, to: Currency },

    #[error("Converting {amount} {from} -> {to} overflows")]
    ConversionOverflow {
        amount: Decimal,
        from: Currency,
        to: Currency,
    },

    #[error("No item template configured for {0}")]
    MissingTemplateId(Currency),
}
