//! EyeMotion Pricing Core - Rust Engine
//!
//! Deterministic price quotes for the EyeMotion plans, regional pricing,
//! social programs and add-ons.
//!
//! # Architecture
//!
//! - **models**: Value types (Currency, BillingCycle, Selection, PriceResult)
//! - **catalog**: Pricing tables, load-time validation, fingerprinting
//! - **calculator**: Quote computation and the memoizing wrapper
//!
//! # Critical Invariants
//!
//! 1. All amounts are `Decimal` until the final rounding step
//! 2. Quotes are pure: same catalog + same selection = same result
//! 3. Catalog data is validated once at load time, never per quote

// Module declarations
pub mod calculator;
pub mod catalog;
pub mod models;

// Re-exports for convenience
pub use calculator::{MemoizedCalculator, PriceCalculator, MAX_TEAM_SIZE};
pub use catalog::{
    fingerprint, validate_catalog, AddOn, Bundle, CatalogError, CatalogValidationError, Plan,
    PriceCatalog, Region, SocialProgram,
};
pub use models::{
    currency::Currency,
    result::{BundleComparison, PriceResult},
    selection::{BillingCycle, InvalidSelectionError, Selection, SelectionField},
};
