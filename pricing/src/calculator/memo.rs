//! Memoizing wrapper around `PriceCalculator`
//!
//! Keyed by the selection snapshot, with the team size folded to 1 for plans
//! that do not scale by team. Only successful quotes are cached, and the
//! cache is emptied once it holds `MAX_CACHED_QUOTES` entries.

use crate::calculator::engine::{PriceCalculator, MAX_TEAM_SIZE};
use crate::models::result::PriceResult;
use crate::models::selection::{InvalidSelectionError, Selection};
use std::collections::HashMap;

/// Default cache bound
pub const MAX_CACHED_QUOTES: usize = 4096;

#[derive(Debug, Clone)]
pub struct MemoizedCalculator {
    calculator: PriceCalculator,
    cache: HashMap<Selection, PriceResult>,
    capacity: usize,
}

impl Default for MemoizedCalculator {
    fn default() -> Self {
        Self::new(PriceCalculator::default())
    }
}

impl MemoizedCalculator {
    pub fn new(calculator: PriceCalculator) -> Self {
        Self::with_capacity(calculator, MAX_CACHED_QUOTES)
    }

    /// Cache at most `capacity` quotes (at least one)
    pub fn with_capacity(calculator: PriceCalculator, capacity: usize) -> Self {
        Self {
            calculator,
            cache: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Same result as [`PriceCalculator::compute`], served from cache when
    /// this exact selection was priced before
    pub fn compute(&mut self, selection: &Selection) -> Result<PriceResult, InvalidSelectionError> {
        let key = self.cache_key(selection);
        if let Some(hit) = self.cache.get(&key) {
            tracing::trace!(plan = selection.plan(), "quote cache hit");
            return Ok(hit.clone());
        }

        let result = self.calculator.compute(selection)?;
        if self.cache.len() >= self.capacity {
            tracing::debug!(entries = self.cache.len(), "quote cache full, clearing");
            self.cache.clear();
        }
        self.cache.insert(key, result.clone());
        Ok(result)
    }

    /// Team size only matters for team-scalable plans; out-of-range sizes are
    /// kept as-is so they still fail in `compute`
    fn cache_key(&self, selection: &Selection) -> Selection {
        let team_scalable = self
            .calculator
            .catalog()
            .plan(selection.plan())
            .map_or(true, |plan| plan.team_scalable);
        let team_size = selection.team_size();

        if !team_scalable && (1..=MAX_TEAM_SIZE).contains(&team_size) {
            selection.clone().with_team_size(1)
        } else {
            selection.clone()
        }
    }

    pub fn calculator(&self) -> &PriceCalculator {
        &self.calculator
    }

    /// Number of cached selections
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::currency::Currency;

    #[test]
    fn test_cache_hit_returns_same_result() {
        let mut memo = MemoizedCalculator::default();
        let selection = Selection::new("studio", "global", "none", Currency::Gbp).with_team_size(3);

        let first = memo.compute(&selection).unwrap();
        let second = memo.compute(&selection).unwrap();

        assert_eq!(first, second);
        assert_eq!(memo.cache_len(), 1);
        assert_eq!(first, memo.calculator().compute(&selection).unwrap());
    }

    #[test]
    fn test_distinct_selections_cached_separately() {
        let mut memo = MemoizedCalculator::default();
        let base = Selection::new("creator", "global", "none", Currency::Usd);

        memo.compute(&base).unwrap();
        memo.compute(&base.clone().with_add_on("export_4k")).unwrap();
        assert_eq!(memo.cache_len(), 2);

        memo.clear();
        assert_eq!(memo.cache_len(), 0);
    }

    #[test]
    fn test_team_size_shares_entry_for_single_seat_plans() {
        let mut memo = MemoizedCalculator::default();
        let base = Selection::new("creator", "global", "none", Currency::Usd);

        for team_size in 1..=MAX_TEAM_SIZE {
            memo.compute(&base.clone().with_team_size(team_size)).unwrap();
        }
        assert_eq!(memo.cache_len(), 1);

        // Studio scales by team, so each size is its own quote
        let studio = Selection::new("studio", "global", "none", Currency::Usd);
        let two = memo.compute(&studio.clone().with_team_size(2)).unwrap();
        let three = memo.compute(&studio.with_team_size(3)).unwrap();
        assert_ne!(two, three);
        assert_eq!(memo.cache_len(), 3);
    }

    #[test]
    fn test_invalid_team_size_still_rejected_after_cache_hit() {
        let mut memo = MemoizedCalculator::default();
        let base = Selection::new("creator", "global", "none", Currency::Usd);

        memo.compute(&base).unwrap();
        assert!(memo.compute(&base.clone().with_team_size(0)).is_err());
        assert!(memo
            .compute(&base.with_team_size(MAX_TEAM_SIZE + 1))
            .is_err());
    }

    #[test]
    fn test_cache_is_bounded() {
        let mut memo = MemoizedCalculator::with_capacity(PriceCalculator::default(), 2);
        let studio = Selection::new("studio", "global", "none", Currency::Usd);

        for team_size in 1..=5 {
            let result = memo.compute(&studio.clone().with_team_size(team_size)).unwrap();
            assert_eq!(result.plan_price, 99 * i64::from(team_size));
            assert!(memo.cache_len() <= 2);
        }
    }

    #[test]
    fn test_errors_not_cached() {
        let mut memo = MemoizedCalculator::default();
        let selection = Selection::new("creator", "atlantis", "none", Currency::Usd);

        assert!(memo.compute(&selection).is_err());
        assert_eq!(memo.cache_len(), 0);
    }
}
