//! Price Calculator
//!
//! Composes the plan and add-on discounts for one selection.
//!
//! # Plan price
//!
//! ```text
//! list × region multiplier × (1 − social discount)
//!      × 0.8 (yearly only) × team size (team-scalable plan only)
//! ```
//!
//! # Add-on price
//!
//! ```text
//! (bundle list price | Σ add-on list prices) × (1 − social discount × 0.5)
//! ```
//!
//! Region multiplier and yearly discount never touch add-ons.
//!
//! # Rounding
//!
//! Amounts stay exact `Decimal` until the very end, then each reported field
//! is rounded half away from zero to whole units.

use crate::catalog::tables::{CatalogError, PriceCatalog, PriceTable};
use crate::catalog::validation::validate_catalog;
use crate::models::currency::Currency;
use crate::models::result::{BundleComparison, PriceResult};
use crate::models::selection::{BillingCycle, InvalidSelectionError, Selection, SelectionField};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Plan price multiplier for yearly billing (20% off)
pub const YEARLY_MULTIPLIER: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

/// Share of the social discount applied to add-ons
pub const ADDON_DISCOUNT_SHARE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Largest accepted team size
pub const MAX_TEAM_SIZE: u32 = 1000;

/// Stateless quote engine over a validated catalog
///
/// # Example
/// ```
/// use eyemotion_pricing::{Currency, PriceCalculator, Selection};
///
/// let calculator = PriceCalculator::default();
/// let selection = Selection::new("creator", "emerging", "student", Currency::Usd);
///
/// let quote = calculator.compute(&selection).unwrap();
/// assert_eq!(quote.plan_price, 3); // 19 × 0.5 × 0.3 = 2.85
/// assert_eq!(quote.currency_symbol, "$");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriceCalculator {
    catalog: PriceCatalog,
}

impl PriceCalculator {
    /// Create a calculator over a custom catalog
    ///
    /// The catalog is validated here, once; quotes never re-check ranges.
    pub fn new(catalog: PriceCatalog) -> Result<Self, CatalogError> {
        validate_catalog(&catalog).map_err(CatalogError::Invalid)?;
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    /// Price a selection
    ///
    /// A bundle takes priority over individual add-ons if both are set.
    ///
    /// # Errors
    /// `InvalidSelectionError` naming the first unknown id, or a team size
    /// outside `1..=MAX_TEAM_SIZE`.
    pub fn compute(&self, selection: &Selection) -> Result<PriceResult, InvalidSelectionError> {
        let currency = selection.currency();

        let plan = self
            .catalog
            .plan(selection.plan())
            .ok_or_else(|| InvalidSelectionError::new(SelectionField::Plan, selection.plan()))?;
        let region = self
            .catalog
            .region(selection.region())
            .ok_or_else(|| InvalidSelectionError::new(SelectionField::Region, selection.region()))?;
        let program = self
            .catalog
            .social_program(selection.social_program())
            .ok_or_else(|| {
                InvalidSelectionError::new(SelectionField::SocialProgram, selection.social_program())
            })?;

        let team_size = selection.team_size();
        if team_size == 0 || team_size > MAX_TEAM_SIZE {
            return Err(InvalidSelectionError::new(
                SelectionField::TeamSize,
                team_size.to_string(),
            ));
        }

        let list_plan_price = price_in(&plan.prices, currency)?;

        let mut plan_price = list_plan_price * region.multiplier;
        plan_price *= Decimal::ONE - program.discount;
        if selection.billing_cycle() == BillingCycle::Yearly {
            plan_price *= YEARLY_MULTIPLIER;
        }
        if plan.team_scalable && team_size > 1 {
            plan_price *= Decimal::from(team_size);
        }

        let list_addons_price = self.list_addons_price(selection)?;
        let mut addons_price = list_addons_price;
        if program.discount > Decimal::ZERO {
            addons_price *= Decimal::ONE - program.discount * ADDON_DISCOUNT_SHARE;
        }

        let original_plan_price = list_plan_price * region.multiplier;
        let savings =
            (original_plan_price + list_addons_price) - (plan_price + addons_price);

        let plan_units = whole_units(plan_price);
        let addons_units = whole_units(addons_price);

        let result = PriceResult {
            plan_price: plan_units,
            addons_price: addons_units,
            total_price: plan_units + addons_units,
            original_plan_price: whole_units(original_plan_price),
            original_addons_price: whole_units(list_addons_price),
            total_savings: whole_units(savings).max(0),
            currency_symbol: currency.symbol().to_string(),
        };

        tracing::debug!(
            plan = %plan.id,
            region = %region.id,
            program = %program.id,
            %currency,
            total = result.total_price,
            savings = result.total_savings,
            "computed quote"
        );

        Ok(result)
    }

    /// Price the same selection with a bundle and with its members picked
    /// individually
    ///
    /// Any add-ons or bundle already in `selection` are replaced.
    pub fn compare_bundle(
        &self,
        selection: &Selection,
        bundle_id: &str,
    ) -> Result<BundleComparison, InvalidSelectionError> {
        let bundle = self
            .catalog
            .bundle(bundle_id)
            .ok_or_else(|| InvalidSelectionError::new(SelectionField::Bundle, bundle_id))?;

        let mut with_bundle = selection.clone();
        with_bundle.clear_extras();
        let with_bundle = with_bundle.with_bundle(bundle_id);

        let mut individual = selection.clone();
        individual.clear_extras();
        let individual = bundle
            .add_ons
            .iter()
            .fold(individual, |s, member| s.with_add_on(member.as_str()));

        let bundle_addons_price = self.compute(&with_bundle)?.addons_price;
        let individual_addons_price = self.compute(&individual)?.addons_price;

        Ok(BundleComparison {
            bundle_addons_price,
            individual_addons_price,
            savings: individual_addons_price - bundle_addons_price,
        })
    }

    /// Undiscounted price of the selected bundle or add-ons
    fn list_addons_price(&self, selection: &Selection) -> Result<Decimal, InvalidSelectionError> {
        let currency = selection.currency();

        if let Some(bundle_id) = selection.bundle() {
            let bundle = self
                .catalog
                .bundle(bundle_id)
                .ok_or_else(|| InvalidSelectionError::new(SelectionField::Bundle, bundle_id))?;
            return price_in(&bundle.prices, currency);
        }

        let mut total = Decimal::ZERO;
        for id in selection.add_ons() {
            let add_on = self
                .catalog
                .add_on(id)
                .ok_or_else(|| InvalidSelectionError::new(SelectionField::AddOn, id.as_str()))?;
            total += price_in(&add_on.prices, currency)?;
        }
        Ok(total)
    }
}

// Unreachable with a validated catalog
fn price_in(prices: &PriceTable, currency: Currency) -> Result<Decimal, InvalidSelectionError> {
    prices
        .get(&currency)
        .copied()
        .ok_or_else(|| InvalidSelectionError::new(SelectionField::Currency, currency.id()))
}

/// Round half away from zero to whole display units
fn whole_units(amount: Decimal) -> i64 {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
