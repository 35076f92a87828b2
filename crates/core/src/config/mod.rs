//! Normalizer configuration: exchange rates, target currency and the item
//! templates that stand for each currency.

mod config_model;

pub use config_model::NormalizerConfig;
