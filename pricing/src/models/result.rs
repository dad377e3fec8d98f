//! Quote output types
//!
//! All amounts are whole display units (no minor units), already rounded.

use serde::{Deserialize, Serialize};

/// Price breakdown for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceResult {
    /// Plan price after region, social, yearly and team adjustments
    pub plan_price: i64,

    /// Add-on (or bundle) price after the halved social discount
    pub addons_price: i64,

    /// `plan_price + addons_price`
    pub total_price: i64,

    /// Region-adjusted plan price before any discount program
    pub original_plan_price: i64,

    /// Add-on (or bundle) list price
    pub original_addons_price: i64,

    /// Baseline minus what is paid, never below zero
    pub total_savings: i64,

    /// Display symbol of the quoted currency
    pub currency_symbol: String,
}

/// Bundle vs. the same add-ons picked one by one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleComparison {
    pub bundle_addons_price: i64,
    pub individual_addons_price: i64,
    /// `individual_addons_price - bundle_addons_price`
    pub savings: i64,
}
