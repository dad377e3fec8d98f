//! Quote scenarios against the built-in EyeMotion catalog
//!
//! Each test pins one pricing-page situation to exact whole-unit amounts.

use eyemotion_pricing::{
    BillingCycle, Currency, InvalidSelectionError, PriceCalculator, PriceResult, Selection,
    SelectionField,
};

/// Helper to price a selection with the built-in catalog
fn quote(selection: &Selection) -> PriceResult {
    PriceCalculator::default().compute(selection).unwrap()
}

// ============================================================================
// Plans
// ============================================================================

#[test]
fn test_free_tier() {
    let result = quote(&Selection::new("starter", "global", "none", Currency::Usd));

    assert_eq!(result.plan_price, 0);
    assert_eq!(result.addons_price, 0);
    assert_eq!(result.total_price, 0);
    assert_eq!(result.total_savings, 0);
    assert_eq!(result.currency_symbol, "$");
}

#[test]
fn test_emerging_market_student() {
    let result = quote(&Selection::new("creator", "emerging", "student", Currency::Usd));

    // 19 × 0.5 × (1 − 0.7) = 2.85
    assert_eq!(result.plan_price, 3);
    // 19 × 0.5 = 9.5
    assert_eq!(result.original_plan_price, 10);
    // 9.5 − 2.85 = 6.65
    assert_eq!(result.total_savings, 7);
    assert_eq!(result.total_price, 3);
}

#[test]
fn test_team_scaling() {
    let result = quote(
        &Selection::new("studio", "global", "none", Currency::Usd).with_team_size(5),
    );

    assert_eq!(result.plan_price, 495);
    assert_eq!(result.total_price, 495);
}

#[test]
fn test_team_quote_savings_clamped_at_zero() {
    // The baseline is the single-seat price, so a team quote without
    // discounts would otherwise report 99 − 495 = −396
    let result = quote(
        &Selection::new("studio", "global", "none", Currency::Usd).with_team_size(5),
    );

    assert_eq!(result.original_plan_price, 99);
    assert_eq!(result.total_savings, 0);
}

#[test]
fn test_yearly_team_with_program() {
    let result = quote(
        &Selection::new("studio", "southeast_asia", "nonprofit", Currency::Thb)
            .with_billing_cycle(BillingCycle::Yearly)
            .with_team_size(2),
    );

    // 3390 × 0.7 × 0.6 × 0.8 × 2 = 2278.08
    assert_eq!(result.plan_price, 2278);
    // 3390 × 0.7 = 2373
    assert_eq!(result.original_plan_price, 2373);
    // 2373 − 2278.08 = 94.92
    assert_eq!(result.total_savings, 95);
    assert_eq!(result.currency_symbol, "฿");
}

// ============================================================================
// Add-ons
// ============================================================================

#[test]
fn test_yearly_leaves_add_ons_alone() {
    let monthly = Selection::new("professional", "global", "student", Currency::Eur)
        .with_add_on("priority_render")
        .with_add_on("export_4k");
    let yearly = monthly.clone().with_billing_cycle(BillingCycle::Yearly);

    let monthly_result = quote(&monthly);
    let yearly_result = quote(&yearly);

    assert_eq!(monthly_result.addons_price, yearly_result.addons_price);
    assert!(yearly_result.plan_price < monthly_result.plan_price);
}

#[test]
fn test_individual_add_ons_sum() {
    let result = quote(
        &Selection::new("creator", "global", "none", Currency::Gbp)
            .with_add_on("priority_render")
            .with_add_on("export_4k"),
    );

    // 7.99 + 6.39 = 14.38
    assert_eq!(result.addons_price, 14);
    assert_eq!(result.original_addons_price, 14);
    assert_eq!(result.total_price, 15 + 14);
    assert_eq!(result.currency_symbol, "£");
}

#[test]
fn test_student_add_on_discount_is_halved() {
    let result = quote(
        &Selection::new("creator", "global", "student", Currency::Usd).with_add_on("export_4k"),
    );

    // 7.99 × (1 − 0.35) = 5.1935
    assert_eq!(result.addons_price, 5);
    // 19 × 0.3 = 5.7
    assert_eq!(result.plan_price, 6);
    assert_eq!(result.total_price, 11);
}

// ============================================================================
// Determinism and errors
// ============================================================================

#[test]
fn test_compute_is_idempotent() {
    let calculator = PriceCalculator::default();
    let selection = Selection::new("studio", "emerging", "educator", Currency::Eur)
        .with_team_size(4)
        .with_bundle("pro_bundle");

    let first = calculator.compute(&selection).unwrap();
    let second = calculator.compute(&selection).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_currency_prices_every_plan() {
    let calculator = PriceCalculator::default();
    for plan in ["starter", "creator", "professional", "studio"] {
        for currency in Currency::ALL {
            let result = calculator
                .compute(&Selection::new(plan, "global", "none", currency))
                .unwrap();
            assert_eq!(result.currency_symbol, currency.symbol());
        }
    }
}

#[test]
fn test_invalid_selection_surfaces_field() {
    let calculator = PriceCalculator::default();
    let err = calculator
        .compute(&Selection::new("creator", "global", "pensioner", Currency::Usd))
        .unwrap_err();

    assert_eq!(
        err,
        InvalidSelectionError::new(SelectionField::SocialProgram, "pensioner")
    );
}
