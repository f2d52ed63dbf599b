use log::{debug, trace};
use num_traits::ToPrimitive;

use crate::cs::change::{ChangeSolver, CoinMultiset, DenominationSet};
use crate::error::{Error, Result};

/// Largest amount the exact solver builds tables for unless configured otherwise.
pub const DEFAULT_MAX_EXACT_AMOUNT: usize = 100_000;

/// Bottom-up coin change table over the sub-amounts `0..=amount`.
///
/// `min_count[i]` is the fewest coins summing to `i` (`None` if no
/// combination does) and `chosen[i]` is the coin taken last on the way to
/// that optimum. Following `chosen` back from any reachable `i` rebuilds an
/// optimal multiset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTable {
    min_count: Vec<Option<usize>>,
    chosen: Vec<Option<u64>>,
}

impl ChangeTable {
    /// Builds the table for `0..=amount`.
    ///
    /// Amounts above [`DEFAULT_MAX_EXACT_AMOUNT`] fail with
    /// [`Error::AmountTooLarge`] before anything is allocated; use
    /// [`ExactSolver::table`] for a different ceiling.
    pub fn build(amount: usize, denominations: &DenominationSet) -> Result<Self> {
        if amount > DEFAULT_MAX_EXACT_AMOUNT {
            return Err(Error::AmountTooLarge {
                amount: amount.to_i64().unwrap_or(i64::MAX),
                limit: DEFAULT_MAX_EXACT_AMOUNT,
            });
        }
        Ok(Self::fill(amount, denominations))
    }

    /// Fills the table in O(amount * k) time for k denominations.
    ///
    /// Denominations are tried largest first and only a strictly smaller
    /// count replaces an entry, so among equally short decompositions the
    /// largest coin is the one recorded. Callers check `amount` against a
    /// ceiling first.
    pub(crate) fn fill(amount: usize, denominations: &DenominationSet) -> Self {
        // Coins larger than the amount can never be used.
        let coins: Vec<usize> = denominations
            .iter()
            .filter_map(|d| d.to_usize())
            .filter(|&d| d <= amount)
            .collect();

        let mut min_count = vec![None; amount + 1];
        let mut chosen = vec![None; amount + 1];
        min_count[0] = Some(0);

        for curr_amount in 1..=amount {
            for &coin in &coins {
                if coin > curr_amount {
                    continue;
                }
                if let Some(prev) = min_count[curr_amount - coin] {
                    let candidate = prev + 1;
                    if min_count[curr_amount].map_or(true, |best| candidate < best) {
                        min_count[curr_amount] = Some(candidate);
                        chosen[curr_amount] = Some(coin as u64);
                    }
                }
            }
        }

        trace!(
            "built change table for {} over {} usable denominations",
            amount,
            coins.len()
        );

        Self { min_count, chosen }
    }

    /// Largest amount covered by the table.
    pub fn amount(&self) -> usize {
        self.min_count.len() - 1
    }

    /// Fewest coins summing to `amount`, or `None` if unreachable or outside the table.
    pub fn min_count(&self, amount: usize) -> Option<usize> {
        self.min_count.get(amount).copied().flatten()
    }

    /// Coin recorded for `amount` in its optimal decomposition.
    pub fn chosen(&self, amount: usize) -> Option<u64> {
        self.chosen.get(amount).copied().flatten()
    }

    /// Walks the predecessor entries from `amount` down to zero.
    pub fn reconstruct(&self, amount: usize) -> Option<CoinMultiset> {
        self.min_count(amount)?;

        let mut coins = CoinMultiset::new();
        let mut current = amount;
        while current > 0 {
            let coin = self.chosen(current)?;
            coins.add(coin, 1);
            current -= coin.to_usize()?;
        }
        Some(coins)
    }

    /// Heap bytes held by a table covering `0..=amount`.
    pub fn bytes_for(amount: usize) -> usize {
        let per_entry =
            std::mem::size_of::<Option<usize>>() + std::mem::size_of::<Option<u64>>();
        amount.saturating_add(1).saturating_mul(per_entry)
    }
}

/// Minimum-coin change maker backed by a [`ChangeTable`].
///
/// The table needs O(amount) memory, so amounts above `max_amount` are
/// rejected before anything is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactSolver {
    max_amount: usize,
}

impl Default for ExactSolver {
    fn default() -> Self {
        Self {
            max_amount: DEFAULT_MAX_EXACT_AMOUNT,
        }
    }
}

impl ExactSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_amount(mut self, max_amount: usize) -> Self {
        self.max_amount = max_amount;
        self
    }

    pub fn max_amount(&self) -> usize {
        self.max_amount
    }

    /// Builds the full table for a positive `amount`.
    pub fn table(&self, amount: i64, denominations: &DenominationSet) -> Result<ChangeTable> {
        let target = self.check_amount(amount)?;
        Ok(ChangeTable::fill(target, denominations))
    }

    /// Fewest coins needed for `amount`, without reconstructing them.
    pub fn min_coins(&self, amount: i64, denominations: &DenominationSet) -> Result<Option<usize>> {
        if amount <= 0 {
            return Ok(Some(0));
        }
        let table = self.table(amount, denominations)?;
        Ok(table.min_count(table.amount()))
    }

    fn check_amount(&self, amount: i64) -> Result<usize> {
        let target = amount.max(0).to_usize().ok_or(Error::AmountTooLarge {
            amount,
            limit: self.max_amount,
        })?;
        if target > self.max_amount {
            return Err(Error::AmountTooLarge {
                amount,
                limit: self.max_amount,
            });
        }
        Ok(target)
    }
}

impl ChangeSolver for ExactSolver {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn solve(&self, amount: i64, denominations: &DenominationSet) -> Result<Option<CoinMultiset>> {
        if amount <= 0 {
            debug!("nothing to change for amount {}", amount);
            return Ok(Some(CoinMultiset::new()));
        }

        let table = self.table(amount, denominations)?;
        let coins = table.reconstruct(table.amount());
        if coins.is_none() {
            debug!("{} cannot be formed from {}", amount, denominations);
        }
        Ok(coins)
    }
}

/// Computes the change for `amount` with the fewest possible coins.
///
/// This is the unbounded coin change problem: each denomination can be used
/// any number of times. Returns `Ok(None)` if no combination of
/// `denominations` sums to `amount`, and the empty multiset for zero or
/// negative amounts. Amounts above [`DEFAULT_MAX_EXACT_AMOUNT`] fail with
/// [`Error::AmountTooLarge`]; use [`ExactSolver::with_max_amount`] to raise it.
///
/// # Examples
///
/// ```
/// use coinchange::{exact_change, DenominationSet};
///
/// // Minimum 3 coins: 6 + 6 + 6 = 18
/// let coins = DenominationSet::new([1, 6, 10]).unwrap();
/// let change = exact_change(18, &coins).unwrap().unwrap();
/// assert_eq!(change.count_of(6), 3);
///
/// // Impossible to form 3 from [5, 2], so returns None
/// let coins2 = DenominationSet::new([5, 2]).unwrap();
/// assert_eq!(exact_change(3, &coins2).unwrap(), None);
/// ```
pub fn exact_change(amount: i64, denominations: &DenominationSet) -> Result<Option<CoinMultiset>> {
    ExactSolver::default().solve(amount, denominations)
}

/// Computes the minimum number of coins needed to form `amount`.
///
/// Returns `Ok(None)` if it's impossible to form the amount.
///
/// # Examples
///
/// ```
/// use coinchange::{min_coins_for_change, DenominationSet};
///
/// let coins = DenominationSet::new([1, 6, 10]).unwrap();
/// assert_eq!(min_coins_for_change(&coins, 18).unwrap(), Some(3));
///
/// let coins2 = DenominationSet::new([2, 4]).unwrap();
/// assert_eq!(min_coins_for_change(&coins2, 7).unwrap(), None);
/// ```
pub fn min_coins_for_change(denominations: &DenominationSet, amount: i64) -> Result<Option<usize>> {
    ExactSolver::default().min_coins(amount, denominations)
}
