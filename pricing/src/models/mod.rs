//! Value types shared by the catalog and the calculator

pub mod currency;
pub mod result;
pub mod selection;

// Re-exports
pub use currency::Currency;
pub use result::{BundleComparison, PriceResult};
pub use selection::{BillingCycle, InvalidSelectionError, Selection, SelectionField};
