//! Catalog fingerprint
//!
//! SHA-256 over the canonical JSON form of a catalog. Two catalogs with the
//! same tables produce the same fingerprint regardless of how their source
//! files were formatted, including trailing zeros on amounts ("19" vs "19.00").

use crate::catalog::tables::{CatalogError, PriceCatalog, PriceTable};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Compute the hex SHA-256 fingerprint of a catalog
///
/// # Example
/// ```
/// use eyemotion_pricing::{fingerprint, PriceCatalog};
///
/// let hash = fingerprint(&PriceCatalog::default()).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn fingerprint(catalog: &PriceCatalog) -> Result<String, CatalogError> {
    let value = serde_json::to_value(normalized(catalog))?;

    // Sort object keys so the digest does not depend on field order
    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> = map
                    .into_iter()
                    .map(|(k, v)| (k, canonicalize(v)))
                    .collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

/// Copy of the catalog with every amount stripped of trailing zeros
fn normalized(catalog: &PriceCatalog) -> PriceCatalog {
    fn normalize_prices(prices: &mut PriceTable) {
        for price in prices.values_mut() {
            *price = price.normalize();
        }
    }

    let mut catalog = catalog.clone();
    for plan in &mut catalog.plans {
        normalize_prices(&mut plan.prices);
    }
    for region in &mut catalog.regions {
        region.multiplier = region.multiplier.normalize();
    }
    for program in &mut catalog.social_programs {
        program.discount = program.discount.normalize();
    }
    for add_on in &mut catalog.add_ons {
        normalize_prices(&mut add_on.prices);
    }
    for bundle in &mut catalog.bundles {
        normalize_prices(&mut bundle.prices);
    }
    catalog
}
