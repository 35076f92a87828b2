//! FX (Foreign Exchange) module - currencies, their item templates, and rate resolution.

pub mod currency;
pub mod currency_converter;
mod fx_errors;

pub use currency::{Currency, CurrencyIds};
pub use currency_converter::CurrencyConverter;
pub use fx_errors::FxError;
