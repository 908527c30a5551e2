use billing_models::models::{Cadence, NewPlanUnitPrice, ReplacePrice};
use billing_models::{from_json, to_json, OpenEnum, Record};
use proptest::prelude::*;
use serde_json::{json, Map, Number, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(Number::from(n))),
        (-1.0e9f64..1.0e9).prop_map(|f| Number::from_f64(f).map_or(Value::Null, Value::Number)),
        "[a-zA-Z0-9 _-]{0,16}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,8}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

// the "x_" prefix keeps generated keys clear of declared field names
fn arb_unknown_fields() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::vec(("x_[a-z_]{1,12}", arb_json()), 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn unknown_fields_survive_round_trip(
        replaces in "price_[a-z0-9]{1,10}",
        extra in arb_unknown_fields(),
    ) {
        let mut map = Map::new();
        map.insert("replaces_price_id".to_string(), json!(replaces));
        for (key, value) in extra {
            map.insert(key, value);
        }
        let input = Value::Object(map);

        let record: ReplacePrice = from_json(input.clone()).expect("decode failed");
        prop_assert_eq!(to_json(&record), input.clone());

        let unknown = record.unknown_fields().len();
        prop_assert_eq!(unknown, input.as_object().map_or(0, |map| map.len() - 1));
    }

    #[test]
    fn unknown_cadence_values_are_kept_verbatim(
        cadence in "[a-z_]{1,20}",
        quantity in -1.0e6f64..1.0e6,
    ) {
        let input = json!({
            "model_type": "unit",
            "cadence": cadence,
            "item_id": "item",
            "name": "Seats",
            "unit_config": { "unit_amount": "1" },
            "fixed_price_quantity": quantity
        });
        let price: NewPlanUnitPrice = from_json(input.clone()).expect("decode failed");

        let known = price.cadence().and_then(OpenEnum::known);
        prop_assert_eq!(known.is_some(), cadence.parse::<Cadence>().is_ok());
        prop_assert_eq!(price.validate().is_ok(), known.is_some());
        prop_assert_eq!(to_json(&price), input);
    }

    #[test]
    fn clone_then_mutate_leaves_original_intact(
        extra in arb_unknown_fields(),
        new_id in "price_[a-z0-9]{1,10}",
    ) {
        let mut map = Map::new();
        map.insert("replaces_price_id".to_string(), json!("price_original"));
        for (key, value) in extra {
            map.insert(key, value);
        }
        let input = Value::Object(map);
        let original: ReplacePrice = from_json(input.clone()).expect("decode failed");

        let mut copy = original.clone();
        copy.set_replaces_price_id(new_id.clone());

        prop_assert_eq!(to_json(&original), input);
        prop_assert_eq!(to_json(&copy)["replaces_price_id"].clone(), json!(new_id));
    }
}
