use log::debug;
use num_integer::Integer;

use crate::cs::change::{ChangeSolver, CoinMultiset, DenominationSet};
use crate::error::{Error, Result};

/// Takes as many coins of each denomination as fit, largest first, and
/// returns the coins together with whatever value is left unpaid.
fn select_largest_first(amount: i64, denominations: &DenominationSet) -> (CoinMultiset, u64) {
    let mut coins = CoinMultiset::new();
    if amount <= 0 {
        return (coins, 0);
    }

    let mut remaining = amount.unsigned_abs();
    for denomination in denominations.iter() {
        let (count, rest) = remaining.div_rem(&denomination);
        coins.add(denomination, count);
        remaining = rest;
        if remaining == 0 {
            break;
        }
    }

    (coins, remaining)
}

/// Makes change for `amount` by always taking the largest coin that fits.
///
/// Runs in O(k) for k denominations. The result has the fewest coins only
/// when the denomination set is canonical, which the default
/// `[50, 25, 10, 5, 2, 1]` is. Zero and negative amounts yield no coins.
///
/// Returns [`Error::IncompleteChange`] when the denominations cannot pay the
/// whole amount this way, e.g. 6 from `[5, 2]`.
///
/// # Examples
///
/// ```
/// use coinchange::{greedy_change, DenominationSet};
///
/// let coins = greedy_change(113, &DenominationSet::default()).unwrap();
/// assert_eq!(coins.to_string(), "{50: 2, 10: 1, 2: 1, 1: 1}");
/// assert_eq!(coins.total_coins(), 5);
///
/// let no_ones = DenominationSet::new([5, 2]).unwrap();
/// assert!(greedy_change(6, &no_ones).is_err());
/// ```
pub fn greedy_change(amount: i64, denominations: &DenominationSet) -> Result<CoinMultiset> {
    let (coins, remainder) = select_largest_first(amount, denominations);
    if remainder != 0 {
        debug!(
            "greedy change for {} stopped with {} unpaid using {}",
            amount, remainder, denominations
        );
        return Err(Error::IncompleteChange {
            amount,
            remainder,
            partial: coins,
        });
    }
    Ok(coins)
}

/// Same selection as [`greedy_change`], but an unpaid remainder is dropped
/// silently and the partial coins are returned.
///
/// The result may not add up to `amount`; check it with
/// [`verify`](crate::verify).
pub fn greedy_change_lossy(amount: i64, denominations: &DenominationSet) -> CoinMultiset {
    select_largest_first(amount, denominations).0
}

/// [`ChangeSolver`] wrapper around [`greedy_change`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedySolver {
    lossy: bool,
}

impl GreedySolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop unpaid remainders instead of failing.
    pub fn lossy(mut self) -> Self {
        self.lossy = true;
        self
    }
}

impl ChangeSolver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, amount: i64, denominations: &DenominationSet) -> Result<Option<CoinMultiset>> {
        if self.lossy {
            Ok(Some(greedy_change_lossy(amount, denominations)))
        } else {
            greedy_change(amount, denominations).map(Some)
        }
    }
}
