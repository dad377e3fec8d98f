//! Pricing Tables
//!
//! Plans, regions, social programs, add-ons and bundles.
//! All list prices are `Decimal` in whole currency units (19.99, not 1999).

use crate::catalog::validation::{validate_catalog, CatalogValidationError};
use crate::models::currency::Currency;
use crate::models::selection::{InvalidSelectionError, SelectionField};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// List price per currency
pub type PriceTable = BTreeMap<Currency, Decimal>;

/// Errors raised while loading or serializing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog failed validation with {} error(s)", .0.len())]
    Invalid(Vec<CatalogValidationError>),
}

/// Subscription plan tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub prices: PriceTable,
    /// Plan price is multiplied by the team size
    #[serde(default)]
    pub team_scalable: bool,
}

/// Regional pricing adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    /// In (0, 1]; 0.5 halves the plan price
    pub multiplier: Decimal,
}

/// Social-impact discount program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialProgram {
    pub id: String,
    pub name: String,
    /// In [0, 1); applied as `price * (1 - discount)`
    pub discount: Decimal,
}

/// Individually selectable add-on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub prices: PriceTable,
}

/// Group of add-ons sold together at a lower price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: String,
    pub name: String,
    /// Member add-on ids
    pub add_ons: BTreeSet<String>,
    pub prices: PriceTable,
}

/// The complete set of pricing tables
///
/// # Example
/// ```
/// use eyemotion_pricing::{Currency, PriceCatalog};
/// use rust_decimal::Decimal;
///
/// let catalog = PriceCatalog::default();
/// let creator = catalog.plan("creator").unwrap();
/// assert_eq!(creator.prices[&Currency::Usd], Decimal::from(19));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCatalog {
    pub plans: Vec<Plan>,
    pub regions: Vec<Region>,
    pub social_programs: Vec<SocialProgram>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
    #[serde(default)]
    pub bundles: Vec<Bundle>,
}

impl PriceCatalog {
    /// Parse a catalog from JSON and validate it
    ///
    /// Every validation problem is reported, not just the first one.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: PriceCatalog = serde_json::from_str(json)?;
        validate_catalog(&catalog).map_err(CatalogError::Invalid)?;
        Ok(catalog)
    }

    /// Serialize the catalog as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn plan(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn social_program(&self, id: &str) -> Option<&SocialProgram> {
        self.social_programs.iter().find(|p| p.id == id)
    }

    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    pub fn bundle(&self, id: &str) -> Option<&Bundle> {
        self.bundles.iter().find(|b| b.id == id)
    }

    /// Sum of member list prices minus the bundle list price
    ///
    /// # Example
    /// ```
    /// use eyemotion_pricing::{Currency, PriceCatalog};
    /// use rust_decimal::Decimal;
    ///
    /// let catalog = PriceCatalog::default();
    /// let savings = catalog.bundle_list_savings("creator_bundle", Currency::Usd).unwrap();
    /// assert_eq!(savings, Decimal::new(99, 2));
    /// ```
    pub fn bundle_list_savings(
        &self,
        bundle_id: &str,
        currency: Currency,
    ) -> Result<Decimal, InvalidSelectionError> {
        let bundle = self
            .bundle(bundle_id)
            .ok_or_else(|| InvalidSelectionError::new(SelectionField::Bundle, bundle_id))?;
        let bundle_price = bundle
            .prices
            .get(&currency)
            .copied()
            .ok_or_else(|| InvalidSelectionError::new(SelectionField::Currency, currency.id()))?;

        let mut member_sum = Decimal::ZERO;
        for member in &bundle.add_ons {
            let add_on = self
                .add_on(member)
                .ok_or_else(|| InvalidSelectionError::new(SelectionField::AddOn, member.as_str()))?;
            member_sum += add_on
                .prices
                .get(&currency)
                .copied()
                .ok_or_else(|| InvalidSelectionError::new(SelectionField::Currency, currency.id()))?;
        }

        Ok(member_sum - bundle_price)
    }
}

fn prices(usd: Decimal, eur: Decimal, gbp: Decimal, thb: Decimal) -> PriceTable {
    BTreeMap::from([
        (Currency::Usd, usd),
        (Currency::Eur, eur),
        (Currency::Gbp, gbp),
        (Currency::Thb, thb),
    ])
}

fn members(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

impl Default for PriceCatalog {
    /// Built-in EyeMotion pricing tables
    fn default() -> Self {
        let plans = vec![
            Plan {
                id: "starter".into(),
                name: "Starter".into(),
                prices: prices(dec!(0), dec!(0), dec!(0), dec!(0)),
                team_scalable: false,
            },
            Plan {
                id: "creator".into(),
                name: "Creator".into(),
                prices: prices(dec!(19), dec!(17), dec!(15), dec!(650)),
                team_scalable: false,
            },
            Plan {
                id: "professional".into(),
                name: "Professional".into(),
                prices: prices(dec!(49), dec!(45), dec!(39), dec!(1690)),
                team_scalable: false,
            },
            Plan {
                id: "studio".into(),
                name: "Studio".into(),
                prices: prices(dec!(99), dec!(89), dec!(79), dec!(3390)),
                team_scalable: true,
            },
        ];

        let regions = vec![
            Region {
                id: "global".into(),
                name: "Global".into(),
                multiplier: dec!(1.0),
            },
            Region {
                id: "southeast_asia".into(),
                name: "Southeast Asia".into(),
                multiplier: dec!(0.7),
            },
            Region {
                id: "emerging".into(),
                name: "Emerging Markets".into(),
                multiplier: dec!(0.5),
            },
        ];

        let social_programs = vec![
            SocialProgram {
                id: "none".into(),
                name: "No Program".into(),
                discount: dec!(0),
            },
            SocialProgram {
                id: "student".into(),
                name: "Student".into(),
                discount: dec!(0.7),
            },
            SocialProgram {
                id: "educator".into(),
                name: "Educator".into(),
                discount: dec!(0.5),
            },
            SocialProgram {
                id: "nonprofit".into(),
                name: "Nonprofit".into(),
                discount: dec!(0.4),
            },
        ];

        let add_ons = vec![
            AddOn {
                id: "extra_storage".into(),
                name: "Extra Storage".into(),
                prices: prices(dec!(4.99), dec!(4.59), dec!(3.99), dec!(179)),
            },
            AddOn {
                id: "premium_voices".into(),
                name: "Premium AI Voices".into(),
                prices: prices(dec!(3.50), dec!(3.25), dec!(2.79), dec!(125)),
            },
            AddOn {
                id: "stock_library".into(),
                name: "Stock Footage Library".into(),
                prices: prices(dec!(2.49), dec!(2.29), dec!(1.99), dec!(89)),
            },
            AddOn {
                id: "priority_render".into(),
                name: "Priority Rendering".into(),
                prices: prices(dec!(9.99), dec!(9.19), dec!(7.99), dec!(349)),
            },
            AddOn {
                id: "export_4k".into(),
                name: "4K Export".into(),
                prices: prices(dec!(7.99), dec!(7.35), dec!(6.39), dec!(279)),
            },
        ];

        let bundles = vec![
            Bundle {
                id: "creator_bundle".into(),
                name: "Creator Bundle".into(),
                add_ons: members(&["extra_storage", "premium_voices", "stock_library"]),
                prices: prices(dec!(9.99), dec!(9.29), dec!(7.99), dec!(349)),
            },
            Bundle {
                id: "pro_bundle".into(),
                name: "Pro Bundle".into(),
                add_ons: members(&[
                    "extra_storage",
                    "premium_voices",
                    "stock_library",
                    "priority_render",
                    "export_4k",
                ]),
                prices: prices(dec!(24.99), dec!(22.99), dec!(19.99), dec!(899)),
            },
        ];

        Self {
            plans,
            regions,
            social_programs,
            add_ons,
            bundles,
        }
    }
}
