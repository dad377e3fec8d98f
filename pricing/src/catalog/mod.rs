//! Pricing Catalog
//!
//! This module provides:
//! - The pricing tables (`PriceCatalog` and its entries)
//! - The built-in EyeMotion tables (`PriceCatalog::default()`)
//! - Load-time validation (`validate_catalog`)
//! - A content fingerprint for comparing catalogs (`fingerprint`)
//!
//! # Load-Time Validation
//!
//! Discount ranges, region multipliers and price coverage are checked once
//! when a catalog is loaded. The calculator trusts a loaded catalog and never
//! re-checks ranges per quote.

pub mod fingerprint;
pub mod tables;
pub mod validation;

// Re-exports
pub use fingerprint::fingerprint;
pub use tables::{AddOn, Bundle, CatalogError, Plan, PriceCatalog, PriceTable, Region, SocialProgram};
pub use validation::{validate_catalog, CatalogValidationError, ValidationResult, MAX_LIST_PRICE};
