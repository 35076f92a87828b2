//! Tests for trader models and table files.

#[cfg(test)]
mod tests {
    use crate::traders::{
        load_trader_table, save_trader_table, sole_component, BarterComponent, Trader,
        TraderTable,
    };
    use crate::Error;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn host_table() -> serde_json::Value {
        json!({
            "54cb50c76803fa8b248b4571": {
                "base": {
                    "_id": "54cb50c76803fa8b248b4571",
                    "nickname": "Prapor",
                    "currency": "RUB",
                    "avatar": "/files/trader/avatar/prapor.jpg",
                    "loyaltyLevels": [
                        { "minLevel": 1, "minSalesSum": 0, "minStanding": 0 },
                        { "minLevel": 15, "minSalesSum": 850000, "minStanding": 0.2 }
                    ]
                },
                "assort": {
                    "items": [{ "_id": "a1", "_tpl": "5447a9cd4bdc2dbd208b4567" }],
                    "barter_scheme": {
                        "a1": [[{ "_tpl": "5449016a4bdc2d6f028b456f", "count": 31000 }]],
                        "a2": [[
                            { "_tpl": "5c0e531286f7747fa54205c2", "count": 1 },
                            { "_tpl": "5e2af55f86f7746d4159f07c", "count": 2, "side": "any" }
                        ]]
                    },
                    "loyal_level_items": { "a1": 1 }
                },
                "questassort": { "started": {} }
            }
        })
    }

    #[test]
    fn test_deserializes_host_shape() {
        let traders: TraderTable = serde_json::from_value(host_table()).unwrap();
        let prapor = &traders["54cb50c76803fa8b248b4571"];

        assert_eq!(prapor.base.nickname, "Prapor");
        assert_eq!(prapor.base.currency, "RUB");
        assert_eq!(prapor.base.loyalty_levels.len(), 2);
        assert_eq!(prapor.base.loyalty_levels[1].min_sales_sum, dec!(850000));
        assert_eq!(prapor.base.extra["avatar"], "/files/trader/avatar/prapor.jpg");
        assert_eq!(prapor.base.loyalty_levels[1].extra["minLevel"], 15);
        assert!(prapor.extra.contains_key("questassort"));

        let offers: Vec<_> = prapor.offers().collect();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0][0].count, dec!(31000));
        assert_eq!(offers[1].len(), 2);
        assert_eq!(offers[1][1].extra["side"], "any");
    }

    #[test]
    fn test_trader_without_assort_deserializes() {
        let traders: TraderTable = serde_json::from_value(json!({
            "ragfair": { "base": { "_id": "ragfair", "nickname": "Unknown", "currency": "RUB" } }
        }))
        .unwrap();

        let ragfair = &traders["ragfair"];
        assert!(ragfair.assort.is_none());
        assert!(ragfair.base.loyalty_levels.is_empty());
        assert_eq!(ragfair.offers().count(), 0);

        let value = serde_json::to_value(ragfair).unwrap();
        assert!(value.get("assort").is_none());
    }

    #[test]
    fn test_unknown_fields_survive_serialization() {
        let traders: TraderTable = serde_json::from_value(host_table()).unwrap();
        let value = serde_json::to_value(&traders).unwrap();
        let prapor = &value["54cb50c76803fa8b248b4571"];

        assert_eq!(prapor["questassort"], json!({ "started": {} }));
        assert_eq!(prapor["assort"]["loyal_level_items"], json!({ "a1": 1 }));
        assert_eq!(prapor["assort"]["items"][0]["_id"], "a1");
        assert_eq!(prapor["base"]["loyaltyLevels"][1]["minStanding"], 0.2);
        assert_eq!(prapor["assort"]["barter_scheme"]["a2"][0][1]["side"], "any");
    }

    #[test]
    fn test_sole_component() {
        let mut price = vec![BarterComponent::new("RUB_ID", dec!(5))];
        assert_eq!(sole_component(&mut price).unwrap().tpl, "RUB_ID");

        let mut barter = vec![
            BarterComponent::new("A", dec!(1)),
            BarterComponent::new("B", dec!(1)),
        ];
        assert!(sole_component(&mut barter).is_none());
        assert!(sole_component(&mut Vec::new()).is_none());
    }

    #[test]
    fn test_builder_helpers() {
        let trader = Trader::new("p", "Prapor", "USD")
            .with_loyalty_level(dec!(10))
            .with_offer("a1", vec![BarterComponent::new("USD_ID", dec!(3))]);

        assert_eq!(trader.base.id, "p");
        assert_eq!(trader.base.loyalty_levels[0].min_sales_sum, dec!(10));
        assert_eq!(trader.offers().count(), 1);
    }

    #[test]
    fn test_table_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traders.json");
        let traders: TraderTable = serde_json::from_value(host_table()).unwrap();

        save_trader_table(&path, &traders).unwrap();
        let reloaded = load_trader_table(&path).unwrap();

        assert_eq!(reloaded, traders);
    }

    #[test]
    fn test_saved_file_matches_host_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traders.json");
        let traders: TraderTable = serde_json::from_value(host_table()).unwrap();

        save_trader_table(&path, &traders).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let saved: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(saved, host_table());
        assert!(text.contains("\"minSalesSum\": 850000"));
        assert!(text.contains("\"count\": 31000"));
        assert!(!text.contains("31000.0"));
    }

    #[test]
    fn test_amounts_serialize_as_numbers() {
        let component = |count| serde_json::to_value(BarterComponent::new("RUB_ID", count)).unwrap();

        assert_eq!(component(dec!(4))["count"], json!(4));
        assert_eq!(component(dec!(4.000))["count"], json!(4));
        assert_eq!(component(dec!(-3))["count"], json!(-3));
        assert_eq!(component(dec!(0.5))["count"], json!(0.5));
        assert_eq!(component(dec!(12.25))["count"], json!(12.25));

        let trader = Trader::new("t", "Therapist", "RUB").with_loyalty_level(dec!(9));
        let value = serde_json::to_value(&trader).unwrap();
        assert_eq!(value["base"]["loyaltyLevels"][0]["minSalesSum"], json!(9));
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traders.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_trader_table(&path), Err(Error::Json(_))));
        assert!(matches!(
            load_trader_table(dir.path().join("missing.json")),
            Err(Error::Io { .. })
        ));
    }
}
