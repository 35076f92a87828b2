//! Traders module - trader table models, file loading, and the currency normalizer.

mod normalizer_model;
mod normalizer_service;
mod traders_model;
mod traders_store;

#[cfg(test)]
mod traders_model_tests;

pub use normalizer_model::{NormalizationReport, TraderConversion};
pub use normalizer_service::CurrencyNormalizer;
pub use traders_model::{
    sole_component, BarterComponent, LoyaltyLevel, SaleOffer, Trader, TraderAssort, TraderBase,
    TraderTable,
};
pub use traders_store::{load_trader_table, save_trader_table};
