// Catalog Validation
//
// Load-time checks so that quoting never has to guard against bad data:
// - Non-empty core tables and unique ids
// - Full currency coverage for every priced entry
// - Price, multiplier and discount ranges
// - Bundle membership and bundle pricing
// - At most one team-scalable plan

use crate::catalog::tables::{PriceCatalog, PriceTable};
use crate::models::currency::Currency;
use rust_decimal::Decimal;
use std::collections::HashSet;
use thiserror::Error;

/// Validation errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogValidationError {
    #[error("Table '{0}' is empty")]
    EmptyTable(&'static str),

    #[error("Duplicate id '{id}' in table '{table}'")]
    DuplicateId { table: &'static str, id: String },

    #[error("'{item}' has no {currency} price")]
    MissingPrice { item: String, currency: Currency },

    #[error("'{item}' {currency} price {price} is outside [0, {max}]")]
    PriceOutOfRange {
        item: String,
        currency: Currency,
        price: Decimal,
        max: Decimal,
    },

    #[error("Region '{region}' multiplier {multiplier} is outside (0, 1]")]
    MultiplierOutOfRange { region: String, multiplier: Decimal },

    #[error("Social program '{program}' discount {discount} is outside [0, 1)")]
    DiscountOutOfRange { program: String, discount: Decimal },

    #[error("Bundle '{0}' has no member add-ons")]
    EmptyBundle(String),

    #[error("Bundle '{bundle}' references unknown add-on '{add_on}'")]
    UnknownBundleMember { bundle: String, add_on: String },

    #[error("Bundle '{bundle}' {currency} price {bundle_price} exceeds its members' total {member_total}")]
    BundleAboveMemberTotal {
        bundle: String,
        currency: Currency,
        bundle_price: Decimal,
        member_total: Decimal,
    },

    #[error("More than one team-scalable plan: {0:?}")]
    MultipleTeamPlans(Vec<String>),
}

/// Validation result
pub type ValidationResult = Result<(), Vec<CatalogValidationError>>;

/// Largest list price accepted for any plan, add-on or bundle
pub const MAX_LIST_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Validate a catalog before it is used for quoting
///
/// Runs all checks and returns every error found.
///
/// # Example
///
/// ```rust
/// use eyemotion_pricing::{validate_catalog, PriceCatalog};
///
/// let mut catalog = PriceCatalog::default();
/// assert!(validate_catalog(&catalog).is_ok());
///
/// catalog.regions[0].multiplier = rust_decimal::Decimal::ZERO;
/// let errors = validate_catalog(&catalog).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate_catalog(catalog: &PriceCatalog) -> ValidationResult {
    let mut errors = Vec::new();

    check_non_empty(catalog, &mut errors);
    check_unique_ids(catalog, &mut errors);

    for plan in &catalog.plans {
        check_price_table(&plan.id, &plan.prices, &mut errors);
    }
    for add_on in &catalog.add_ons {
        check_price_table(&add_on.id, &add_on.prices, &mut errors);
    }
    for bundle in &catalog.bundles {
        check_price_table(&bundle.id, &bundle.prices, &mut errors);
    }

    for region in &catalog.regions {
        if region.multiplier <= Decimal::ZERO || region.multiplier > Decimal::ONE {
            errors.push(CatalogValidationError::MultiplierOutOfRange {
                region: region.id.clone(),
                multiplier: region.multiplier,
            });
        }
    }

    for program in &catalog.social_programs {
        if program.discount < Decimal::ZERO || program.discount >= Decimal::ONE {
            errors.push(CatalogValidationError::DiscountOutOfRange {
                program: program.id.clone(),
                discount: program.discount,
            });
        }
    }

    check_bundles(catalog, &mut errors);

    let team_plans: Vec<String> = catalog
        .plans
        .iter()
        .filter(|p| p.team_scalable)
        .map(|p| p.id.clone())
        .collect();
    if team_plans.len() > 1 {
        errors.push(CatalogValidationError::MultipleTeamPlans(team_plans));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for error in &errors {
            tracing::warn!(%error, "catalog validation failed");
        }
        Err(errors)
    }
}

fn check_non_empty(catalog: &PriceCatalog, errors: &mut Vec<CatalogValidationError>) {
    if catalog.plans.is_empty() {
        errors.push(CatalogValidationError::EmptyTable("plans"));
    }
    if catalog.regions.is_empty() {
        errors.push(CatalogValidationError::EmptyTable("regions"));
    }
    if catalog.social_programs.is_empty() {
        errors.push(CatalogValidationError::EmptyTable("social_programs"));
    }
}

fn check_unique_ids(catalog: &PriceCatalog, errors: &mut Vec<CatalogValidationError>) {
    fn duplicates<'a>(
        table: &'static str,
        ids: impl Iterator<Item = &'a str>,
        errors: &mut Vec<CatalogValidationError>,
    ) {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                errors.push(CatalogValidationError::DuplicateId {
                    table,
                    id: id.to_string(),
                });
            }
        }
    }

    duplicates("plans", catalog.plans.iter().map(|p| p.id.as_str()), errors);
    duplicates("regions", catalog.regions.iter().map(|r| r.id.as_str()), errors);
    duplicates(
        "social_programs",
        catalog.social_programs.iter().map(|p| p.id.as_str()),
        errors,
    );
    duplicates("add_ons", catalog.add_ons.iter().map(|a| a.id.as_str()), errors);
    duplicates("bundles", catalog.bundles.iter().map(|b| b.id.as_str()), errors);
}

fn check_price_table(item: &str, prices: &PriceTable, errors: &mut Vec<CatalogValidationError>) {
    for currency in Currency::ALL {
        match prices.get(&currency) {
            None => errors.push(CatalogValidationError::MissingPrice {
                item: item.to_string(),
                currency,
            }),
            Some(&price) if price < Decimal::ZERO || price > MAX_LIST_PRICE => {
                errors.push(CatalogValidationError::PriceOutOfRange {
                    item: item.to_string(),
                    currency,
                    price,
                    max: MAX_LIST_PRICE,
                })
            }
            Some(_) => {}
        }
    }
}

fn check_bundles(catalog: &PriceCatalog, errors: &mut Vec<CatalogValidationError>) {
    for bundle in &catalog.bundles {
        if bundle.add_ons.is_empty() {
            errors.push(CatalogValidationError::EmptyBundle(bundle.id.clone()));
            continue;
        }

        let mut members = Vec::with_capacity(bundle.add_ons.len());
        for id in &bundle.add_ons {
            match catalog.add_on(id) {
                Some(add_on) => members.push(add_on),
                None => errors.push(CatalogValidationError::UnknownBundleMember {
                    bundle: bundle.id.clone(),
                    add_on: id.clone(),
                }),
            }
        }
        if members.len() != bundle.add_ons.len() {
            continue;
        }

        // Missing prices are already reported by check_price_table
        for currency in Currency::ALL {
            let Some(&bundle_price) = bundle.prices.get(&currency) else {
                continue;
            };
            let member_prices: Option<Vec<Decimal>> = members
                .iter()
                .map(|a| a.prices.get(&currency).copied())
                .collect();
            let Some(member_prices) = member_prices else {
                continue;
            };
            let member_total: Decimal = member_prices.into_iter().sum();

            if bundle_price > member_total {
                errors.push(CatalogValidationError::BundleAboveMemberTotal {
                    bundle: bundle.id.clone(),
                    currency,
                    bundle_price,
                    member_total,
                });
            }
        }
    }
}
