//! Selection model
//!
//! A full snapshot of what the visitor picked on the pricing page:
//! - Plan, region and social program ids (looked up in the catalog)
//! - Currency and billing cycle
//! - Team size (only used by the team-scalable plan)
//! - Either a set of individual add-ons or a single bundle
//!
//! Bundle and individual add-ons are mutually exclusive. The toggle methods
//! keep that exclusivity; the calculator itself prices the bundle whenever
//! one is set.

use crate::models::currency::Currency;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which part of a selection was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionField {
    Plan,
    Region,
    SocialProgram,
    Currency,
    BillingCycle,
    TeamSize,
    AddOn,
    Bundle,
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionField::Plan => "plan",
            SelectionField::Region => "region",
            SelectionField::SocialProgram => "social program",
            SelectionField::Currency => "currency",
            SelectionField::BillingCycle => "billing cycle",
            SelectionField::TeamSize => "team size",
            SelectionField::AddOn => "add-on",
            SelectionField::Bundle => "bundle",
        };
        f.write_str(name)
    }
}

/// A selection referenced something the catalog does not know about
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid {field} selection: '{id}'")]
pub struct InvalidSelectionError {
    /// Offending field
    pub field: SelectionField,
    /// Offending value, as given
    pub id: String,
}

impl InvalidSelectionError {
    pub fn new(field: SelectionField, id: impl Into<String>) -> Self {
        Self {
            field,
            id: id.into(),
        }
    }
}

/// Billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    /// 20% off the plan price (add-ons are unaffected)
    Yearly,
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingCycle::Monthly => f.write_str("monthly"),
            BillingCycle::Yearly => f.write_str("yearly"),
        }
    }
}

impl FromStr for BillingCycle {
    type Err = InvalidSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(BillingCycle::Monthly),
            "yearly" | "annual" => Ok(BillingCycle::Yearly),
            _ => Err(InvalidSelectionError::new(SelectionField::BillingCycle, s)),
        }
    }
}

/// Snapshot of a pricing-page selection
///
/// # Example
/// ```
/// use eyemotion_pricing::{BillingCycle, Currency, Selection};
///
/// let selection = Selection::new("creator", "emerging", "student", Currency::Usd)
///     .with_billing_cycle(BillingCycle::Yearly)
///     .with_add_on("extra_storage");
/// assert_eq!(selection.plan(), "creator");
/// assert!(selection.bundle().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    plan: String,
    region: String,
    social_program: String,
    currency: Currency,
    #[serde(default)]
    billing_cycle: BillingCycle,
    #[serde(default = "default_team_size")]
    team_size: u32,
    #[serde(default)]
    add_ons: BTreeSet<String>,
    #[serde(default)]
    bundle: Option<String>,
}

fn default_team_size() -> u32 {
    1
}

impl Selection {
    /// Create a monthly, single-seat selection with nothing extra picked
    pub fn new(
        plan: impl Into<String>,
        region: impl Into<String>,
        social_program: impl Into<String>,
        currency: Currency,
    ) -> Self {
        Self {
            plan: plan.into(),
            region: region.into(),
            social_program: social_program.into(),
            currency,
            billing_cycle: BillingCycle::Monthly,
            team_size: 1,
            add_ons: BTreeSet::new(),
            bundle: None,
        }
    }

    /// Set the billing cycle (builder pattern)
    pub fn with_billing_cycle(mut self, billing_cycle: BillingCycle) -> Self {
        self.billing_cycle = billing_cycle;
        self
    }

    /// Set the team size (builder pattern)
    pub fn with_team_size(mut self, team_size: u32) -> Self {
        self.team_size = team_size;
        self
    }

    /// Add an individual add-on (builder pattern)
    ///
    /// Does not clear a selected bundle; use [`Selection::toggle_add_on`]
    /// for the exclusive behaviour.
    pub fn with_add_on(mut self, add_on: impl Into<String>) -> Self {
        self.add_ons.insert(add_on.into());
        self
    }

    /// Set the bundle (builder pattern)
    ///
    /// Does not clear individual add-ons; use [`Selection::select_bundle`]
    /// for the exclusive behaviour.
    pub fn with_bundle(mut self, bundle: impl Into<String>) -> Self {
        self.bundle = Some(bundle.into());
        self
    }

    /// Same selection priced in another currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Same selection under another social program
    pub fn with_social_program(mut self, social_program: impl Into<String>) -> Self {
        self.social_program = social_program.into();
        self
    }

    /// Toggle an individual add-on, clearing any selected bundle
    ///
    /// Returns `true` if the add-on is selected afterwards.
    pub fn toggle_add_on(&mut self, add_on: &str) -> bool {
        self.bundle = None;
        if self.add_ons.remove(add_on) {
            false
        } else {
            self.add_ons.insert(add_on.to_string());
            true
        }
    }

    /// Select a bundle, clearing individual add-ons
    ///
    /// Selecting the bundle that is already selected deselects it.
    /// Returns `true` if the bundle is selected afterwards.
    pub fn select_bundle(&mut self, bundle: &str) -> bool {
        self.add_ons.clear();
        if self.bundle.as_deref() == Some(bundle) {
            self.bundle = None;
            false
        } else {
            self.bundle = Some(bundle.to_string());
            true
        }
    }

    /// Drop every add-on and bundle
    pub fn clear_extras(&mut self) {
        self.add_ons.clear();
        self.bundle = None;
    }

    pub fn plan(&self) -> &str {
        &self.plan
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn social_program(&self) -> &str {
        &self.social_program
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn billing_cycle(&self) -> BillingCycle {
        self.billing_cycle
    }

    pub fn team_size(&self) -> u32 {
        self.team_size
    }

    /// Individually selected add-ons, in id order
    pub fn add_ons(&self) -> &BTreeSet<String> {
        &self.add_ons
    }

    pub fn bundle(&self) -> Option<&str> {
        self.bundle.as_deref()
    }
}
