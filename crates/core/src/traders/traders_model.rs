//! Trader domain models, in the JSON shape the game server loads them.
//!
//! Only the fields the normalizer reads or writes are typed. Everything else
//! is kept in flattened `extra` maps so a table survives a load/save
//! round-trip unchanged.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Trader id -> trader. Ordered so every pass visits traders in the same order.
pub type TraderTable = BTreeMap<String, Trader>;

/// One way to pay for an assort item: exactly one component means a plain
/// currency price, more than one is a barter for goods.
pub type SaleOffer = Vec<BarterComponent>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trader {
    pub base: TraderBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assort: Option<TraderAssort>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TraderBase {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub nickname: String,
    /// Currency code as stored by the host (`RUB`, `USD` or `EUR`).
    pub currency: String,
    #[serde(default)]
    pub loyalty_levels: Vec<LoyaltyLevel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyLevel {
    /// Sales needed to reach this level, in the trader's currency.
    #[serde(serialize_with = "serialize_amount")]
    pub min_sales_sum: Decimal,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TraderAssort {
    /// Assort item id -> the offers it can be bought with.
    #[serde(default)]
    pub barter_scheme: BTreeMap<String, Vec<SaleOffer>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BarterComponent {
    #[serde(rename = "_tpl")]
    pub tpl: String,
    #[serde(serialize_with = "serialize_amount")]
    pub count: Decimal,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Writes whole amounts as JSON integers (`9`, not `9.0`) so untouched
/// records are saved exactly as the host wrote them.
fn serialize_amount<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if amount.fract().is_zero() {
        if let Some(whole) = amount.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    match amount.to_f64() {
        Some(value) => serializer.serialize_f64(value),
        None => serializer.serialize_str(&amount.to_string()),
    }
}

impl Trader {
    /// Creates a trader with no loyalty levels and an empty assort.
    pub fn new(
        id: impl Into<String>,
        nickname: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            base: TraderBase {
                id: id.into(),
                nickname: nickname.into(),
                currency: currency.into(),
                loyalty_levels: Vec::new(),
                extra: Map::new(),
            },
            assort: Some(TraderAssort::default()),
            extra: Map::new(),
        }
    }

    pub fn with_loyalty_level(mut self, min_sales_sum: Decimal) -> Self {
        self.base.loyalty_levels.push(LoyaltyLevel {
            min_sales_sum,
            extra: Map::new(),
        });
        self
    }

    /// Adds an assort item purchasable with the given offer.
    pub fn with_offer(mut self, item_id: impl Into<String>, offer: SaleOffer) -> Self {
        self.assort
            .get_or_insert_with(TraderAssort::default)
            .barter_scheme
            .entry(item_id.into())
            .or_default()
            .push(offer);
        self
    }

    /// Iterates over every offer in the assort.
    pub fn offers(&self) -> impl Iterator<Item = &SaleOffer> {
        self.assort
            .iter()
            .flat_map(|assort| assort.barter_scheme.values())
            .flatten()
    }

    pub fn offers_mut(&mut self) -> impl Iterator<Item = &mut SaleOffer> {
        self.assort
            .iter_mut()
            .flat_map(|assort| assort.barter_scheme.values_mut())
            .flatten()
    }
}

impl BarterComponent {
    pub fn new(tpl: impl Into<String>, count: Decimal) -> Self {
        Self {
            tpl: tpl.into(),
            count,
            extra: Map::new(),
        }
    }
}

/// Returns the single cost component of a pure currency price, or `None` for
/// barters (and for malformed empty offers).
pub fn sole_component(offer: &mut SaleOffer) -> Option<&mut BarterComponent> {
    match offer.as_mut_slice() {
        [component] => Some(component),
        _ => None,
    }
}
