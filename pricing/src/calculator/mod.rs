//! Quote computation
//!
//! `PriceCalculator` turns a `Selection` into a `PriceResult` against a
//! validated `PriceCatalog`. `MemoizedCalculator` caches results per
//! selection for callers that recompute on every UI change.

mod engine;
mod memo;

pub use engine::{PriceCalculator, ADDON_DISCOUNT_SHARE, MAX_TEAM_SIZE, YEARLY_MULTIPLIER};
pub use memo::{MemoizedCalculator, MAX_CACHED_QUOTES};
