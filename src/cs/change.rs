use crate::error::Result;

pub mod compare;
pub mod denominations;
pub mod multiset;

#[cfg(test)]
mod tests;

pub use compare::{
    compare, correctness_sweep, estimate_memory, find_greedy_counterexample, is_canonical,
    measure_performance, Comparison, MemoryEstimate, Mismatch, SweepReport, TimingSample, Verdict,
};
pub use denominations::{DenominationSet, DEFAULT_DENOMINATIONS};
pub use multiset::{format_coins, total_coins, verify, CoinMultiset};

/// A strategy that decomposes an amount into coins of a denomination set.
///
/// `Ok(None)` means no combination of the denominations sums to the amount.
pub trait ChangeSolver {
    fn name(&self) -> &'static str;

    fn solve(&self, amount: i64, denominations: &DenominationSet)
        -> Result<Option<CoinMultiset>>;
}
