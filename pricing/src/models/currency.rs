//! Supported display currencies
//!
//! Rates are not converted at runtime: every plan, add-on and bundle carries
//! its own price per currency in the catalog.

use crate::models::selection::{InvalidSelectionError, SelectionField};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency a quote is priced in
///
/// # Example
/// ```
/// use eyemotion_pricing::Currency;
///
/// let thb: Currency = "THB".parse().unwrap();
/// assert_eq!(thb, Currency::Thb);
/// assert_eq!(thb.symbol(), "฿");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Thb,
}

impl Currency {
    /// Every supported currency, in display order
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Thb];

    /// Display symbol shown next to whole-unit prices
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Thb => "฿",
        }
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Thb => "THB",
        }
    }

    /// Lowercase id used in catalogs and selections
    pub fn id(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Gbp => "gbp",
            Currency::Thb => "thb",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Currency {
    type Err = InvalidSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidSelectionError::new(SelectionField::Currency, s))
    }
}

impl TryFrom<String> for Currency {
    type Error = InvalidSelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
