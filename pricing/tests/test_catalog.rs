//! Catalog loading tests
//!
//! Custom catalogs come in as JSON and are validated before any quote.

use eyemotion_pricing::{
    fingerprint, CatalogError, CatalogValidationError, Currency, PriceCalculator, PriceCatalog,
    Selection,
};

const SMALL_CATALOG: &str = r#"{
  "plans": [
    {
      "id": "solo",
      "name": "Solo",
      "prices": { "usd": "10", "eur": "9", "gbp": "8", "thb": "350" }
    },
    {
      "id": "team",
      "name": "Team",
      "team_scalable": true,
      "prices": { "usd": "30", "eur": "27", "gbp": "24", "thb": "1000" }
    }
  ],
  "regions": [
    { "id": "global", "name": "Global", "multiplier": "1" }
  ],
  "social_programs": [
    { "id": "none", "name": "None", "discount": "0" },
    { "id": "charity", "name": "Charity", "discount": "0.2" }
  ]
}"#;

#[test]
fn test_load_small_catalog() {
    let catalog = PriceCatalog::from_json(SMALL_CATALOG).unwrap();
    assert_eq!(catalog.plans.len(), 2);
    assert!(catalog.add_ons.is_empty());
    assert!(catalog.bundles.is_empty());

    let calculator = PriceCalculator::new(catalog).unwrap();
    let result = calculator
        .compute(&Selection::new("team", "global", "charity", Currency::Usd).with_team_size(3))
        .unwrap();

    // 30 × 0.8 × 3 = 72
    assert_eq!(result.plan_price, 72);
    assert_eq!(result.original_plan_price, 30);
    assert_eq!(result.total_savings, 0);
}

#[test]
fn test_load_rejects_out_of_range_discount() {
    let json = SMALL_CATALOG.replace("\"0.2\"", "\"1.0\"");

    match PriceCatalog::from_json(&json) {
        Err(CatalogError::Invalid(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(matches!(
                &errors[0],
                CatalogValidationError::DiscountOutOfRange { program, .. } if program == "charity"
            ));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_missing_currency() {
    let json = SMALL_CATALOG.replace(", \"thb\": \"350\"", "");

    match PriceCatalog::from_json(&json) {
        Err(CatalogError::Invalid(errors)) => {
            assert_eq!(
                errors,
                vec![CatalogValidationError::MissingPrice {
                    item: "solo".to_string(),
                    currency: Currency::Thb,
                }]
            );
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_unknown_currency_key() {
    let json = SMALL_CATALOG.replace("\"thb\": \"350\"", "\"jpy\": \"1500\"");
    assert!(matches!(
        PriceCatalog::from_json(&json),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn test_validation_error_message() {
    let json = SMALL_CATALOG.replace("\"multiplier\": \"1\"", "\"multiplier\": \"0\"");
    let err = PriceCatalog::from_json(&json).unwrap_err();
    assert_eq!(err.to_string(), "Catalog failed validation with 1 error(s)");
}

#[test]
fn test_fingerprint_ignores_formatting() {
    let pretty = PriceCatalog::from_json(SMALL_CATALOG).unwrap();
    let compact_json = serde_json::to_string(&pretty).unwrap();
    let compact = PriceCatalog::from_json(&compact_json).unwrap();

    assert_eq!(fingerprint(&pretty).unwrap(), fingerprint(&compact).unwrap());
    assert_ne!(
        fingerprint(&pretty).unwrap(),
        fingerprint(&PriceCatalog::default()).unwrap()
    );
}

#[test]
fn test_fingerprint_ignores_trailing_zeros() {
    let catalog = PriceCatalog::default();
    let padded_json = catalog
        .to_json_pretty()
        .unwrap()
        .replace("\"19\"", "\"19.00\"");
    assert!(padded_json.contains("\"19.00\""));

    let padded = PriceCatalog::from_json(&padded_json).unwrap();
    assert_eq!(padded, catalog);
    assert_eq!(fingerprint(&padded).unwrap(), fingerprint(&catalog).unwrap());
}

#[test]
fn test_unknown_currency_in_selection_names_field() {
    let json = r#"{
        "plan": "creator",
        "region": "global",
        "social_program": "none",
        "currency": "jpy"
    }"#;
    let err = serde_json::from_str::<Selection>(json).unwrap_err();
    assert!(
        err.to_string().contains("Invalid currency selection: 'jpy'"),
        "unexpected error: {}",
        err
    );
}
