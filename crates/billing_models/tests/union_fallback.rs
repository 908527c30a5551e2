use billing_models::models::{
    Cadence, Discount, NewAdjustment, NewMinimum, NewPlanPrice, NewPlanUnitPrice,
    PercentageDiscount, ReplacePrice, UnitConfig,
};
use billing_models::{from_json, to_json, ErrorCode, Record, WireValue};
use serde_json::json;

#[test]
fn known_discriminator_resolves_to_matching_shape() {
    let price = NewPlanPrice::from_json(json!({
        "model_type": "unit",
        "cadence": "annual",
        "item_id": "item_id",
        "name": "Calls",
        "unit_config": { "unit_amount": "5" }
    }))
    .expect("decode failed");

    assert_eq!(price.variant_name(), "Unit");
    assert_eq!(price.discriminator(), Some("unit"));
    assert_eq!(price.item_id(), Some("item_id"));
    assert_eq!(
        price.cadence().and_then(|cadence| cadence.known()),
        Some(Cadence::Annual)
    );
    assert!(price.validate().is_ok());
}

#[test]
fn unknown_discriminator_falls_back_to_raw_value() {
    let raw = json!({
        "model_type": "matrix_with_display_name",
        "cadence": "monthly",
        "item_id": "item_9",
        "matrix_with_display_name_config": { "dimension": "region" }
    });
    let price = NewPlanPrice::from_json(raw.clone()).expect("decode failed");

    assert!(price.is_unknown());
    assert_eq!(price.discriminator(), Some("matrix_with_display_name"));
    assert_eq!(price.item_id(), Some("item_9"));
    assert_eq!(price.cadence(), None);
    assert_eq!(price.to_json(), raw);
}

#[test]
fn unknown_variant_inside_record_round_trips() {
    let input = json!({
        "replaces_price_id": "price_1",
        "price": {
            "model_type": "scalable_matrix",
            "item_id": "item_1",
            "nested": { "deep": [1, 2, { "x": null }] }
        }
    });
    let record: ReplacePrice = from_json(input.clone()).expect("decode failed");
    assert!(record.price().is_some_and(NewPlanPrice::is_unknown));
    assert_eq!(to_json(&record), input);
}

#[test]
fn unknown_variant_fails_validation_with_discriminator_in_message() {
    let discount = Discount::from_json(json!({ "discount_type": "coupon", "code": "SPRING" }))
        .expect("decode failed");
    let errors = discount.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::UnrecognizedVariant);
    assert!(errors[0].message.contains("\"coupon\""));
    assert_eq!(errors[0].path, None);
}

#[test]
fn missing_or_non_string_discriminator_is_unknown() {
    for raw in [
        json!({ "percentage_discount": 0.1 }),
        json!({ "discount_type": 3 }),
        json!("percentage"),
        json!(null),
    ] {
        let discount = Discount::from_json(raw.clone()).expect("decode failed");
        assert!(discount.is_unknown(), "expected fallback for {}", raw);
        assert_eq!(discount.to_json(), raw);
    }

    let errors = Discount::from_json(json!({})).unwrap().validate().unwrap_err();
    assert!(errors[0].message.contains("discount_type is missing"));
}

#[test]
fn shape_errors_inside_a_matched_variant_propagate() {
    let err = NewAdjustment::from_json(json!({
        "adjustment_type": "minimum",
        "item_id": "item_1",
        "minimum_amount": 100
    }))
    .unwrap_err();
    assert_eq!(err.path.as_deref(), Some("minimum_amount"));
}

#[test]
fn variants_convert_from_their_records() {
    let adjustment: NewAdjustment =
        NewMinimum::new("item_1".to_string(), "25.00".to_string()).into();
    assert_eq!(adjustment.discriminator(), Some("minimum"));
    assert_eq!(
        adjustment.to_json(),
        json!({
            "adjustment_type": "minimum",
            "item_id": "item_1",
            "minimum_amount": "25.00"
        })
    );

    let discount: Discount = PercentageDiscount::new(0.2).into();
    assert_eq!(discount.to_json()["discount_type"], json!("percentage"));
    assert!(discount.validate().is_ok());
}

#[test]
fn replacing_an_unknown_variant_with_a_known_one() {
    let mut record: ReplacePrice = from_json(json!({
        "replaces_price_id": "price_1",
        "price": { "model_type": "threshold_total_amount" }
    }))
    .unwrap();
    assert!(record.validate().is_err());

    let unit = NewPlanUnitPrice::new(
        Cadence::Monthly.into(),
        "item_1".to_string(),
        "Seats".to_string(),
        UnitConfig::new("4".to_string()),
    );
    record.set_price(NewPlanPrice::from(unit));
    assert!(record.validate().is_ok());
    assert_eq!(to_json(&record)["price"]["model_type"], json!("unit"));
}

#[test]
fn discounts_expose_price_ids_across_variants() {
    let discounts: Vec<Discount> = WireValue::from_wire(
        &json!([
            { "discount_type": "amount", "amount_discount": "5", "applies_to_price_ids": ["p1"] },
            { "discount_type": "trial" },
            { "discount_type": "stacked", "applies_to_price_ids": ["p9"] }
        ]),
        "discounts",
    )
    .expect("decode failed");

    assert_eq!(discounts[0].applies_to_price_ids(), ["p1".to_string()]);
    assert!(discounts[1].applies_to_price_ids().is_empty());
    assert!(discounts[2].applies_to_price_ids().is_empty());
}
