use std::collections::BTreeMap;
use std::fmt;

/// Counts of coins per denomination.
///
/// Denominations with a zero count are never stored, so two multisets
/// describing the same coins always compare equal. Iteration runs from the
/// largest denomination to the smallest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CoinMultiset {
    counts: BTreeMap<u64, u64>,
}

impl CoinMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` coins of `denomination`. A zero count is a no-op.
    pub fn add(&mut self, denomination: u64, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(denomination).or_insert(0) += count;
    }

    pub fn count_of(&self, denomination: u64) -> u64 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// Total number of coins.
    pub fn total_coins(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Sum of `denomination * count`, widened so it cannot overflow.
    pub fn value(&self) -> u128 {
        self.counts
            .iter()
            .map(|(&d, &c)| u128::from(d) * u128::from(c))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct denominations used.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `(denomination, count)` pairs, largest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().rev().map(|(&d, &c)| (d, c))
    }
}

impl FromIterator<(u64, u64)> for CoinMultiset {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        let mut multiset = CoinMultiset::new();
        for (denomination, count) in iter {
            multiset.add(denomination, count);
        }
        multiset
    }
}

impl fmt::Display for CoinMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (denomination, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", denomination, count)?;
        }
        write!(f, "}}")
    }
}

/// Sum of all coin counts in `multiset`.
pub fn total_coins(multiset: &CoinMultiset) -> u64 {
    multiset.total_coins()
}

/// Checks that the coins in `multiset` add up to exactly `amount`.
///
/// # Examples
///
/// ```
/// use coinchange::{verify, CoinMultiset};
///
/// let coins: CoinMultiset = [(50, 2), (10, 1), (2, 1), (1, 1)].into_iter().collect();
/// assert!(verify(&coins, 113));
/// assert!(!verify(&coins, 112));
/// assert!(verify(&CoinMultiset::new(), 0));
/// ```
pub fn verify(multiset: &CoinMultiset, amount: i64) -> bool {
    match u128::try_from(amount) {
        Ok(amount) => multiset.value() == amount,
        Err(_) => false,
    }
}

/// Renders `multiset` as `{50: 2, 10: 1}`, largest denomination first.
pub fn format_coins(multiset: &CoinMultiset) -> String {
    multiset.to_string()
}
