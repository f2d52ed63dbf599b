use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};

/// Coin values of the cash register, largest first.
pub const DEFAULT_DENOMINATIONS: [u64; 6] = [50, 25, 10, 5, 2, 1];

/// A validated set of coin face values, held in descending order.
///
/// Every value is positive and distinct. Input order does not matter; the
/// set is sorted largest-first on construction so both solvers visit the
/// denominations in the same order.
///
/// # Examples
///
/// ```
/// use coinchange::DenominationSet;
///
/// let set = DenominationSet::new([1, 5, 2]).unwrap();
/// assert_eq!(set.as_slice(), &[5, 2, 1]);
///
/// assert!(DenominationSet::new([5, 0]).is_err());
/// assert!(DenominationSet::new([5, 5]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenominationSet {
    values: Vec<u64>,
}

impl DenominationSet {
    pub fn new<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut values: Vec<u64> = values.into_iter().collect();
        if values.is_empty() {
            return Err(Error::InvalidDenominationSet(
                "at least one denomination is required".to_string(),
            ));
        }
        if values.contains(&0) {
            return Err(Error::InvalidDenominationSet(
                "denominations must be positive".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(values.len());
        for &value in &values {
            if !seen.insert(value) {
                return Err(Error::InvalidDenominationSet(format!(
                    "duplicate denomination {}",
                    value
                )));
            }
        }

        values.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self { values })
    }

    /// Denominations, largest first.
    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn largest(&self) -> u64 {
        self.values[0]
    }

    pub fn smallest(&self) -> u64 {
        self.values[self.values.len() - 1]
    }

    pub fn contains(&self, value: u64) -> bool {
        self.values.contains(&value)
    }

    /// Whether every non-negative amount can be paid, i.e. the set has a 1.
    pub fn covers_all_amounts(&self) -> bool {
        self.smallest() == 1
    }
}

impl Default for DenominationSet {
    fn default() -> Self {
        Self {
            values: DEFAULT_DENOMINATIONS.to_vec(),
        }
    }
}

impl fmt::Display for DenominationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}

impl<'a> IntoIterator for &'a DenominationSet {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let set = DenominationSet::default();
        assert_eq!(set.as_slice(), &[50, 25, 10, 5, 2, 1]);
        assert_eq!(set.largest(), 50);
        assert_eq!(set.smallest(), 1);
        assert!(set.covers_all_amounts());
        assert_eq!(set.to_string(), "[50, 25, 10, 5, 2, 1]");
    }

    #[test]
    fn test_unsorted_input_is_normalized() {
        let set = DenominationSet::new([2, 25, 1, 10]).unwrap();
        assert_eq!(set.as_slice(), &[25, 10, 2, 1]);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_rejects_malformed_sets() {
        assert!(matches!(
            DenominationSet::new(Vec::new()),
            Err(Error::InvalidDenominationSet(_))
        ));
        assert!(matches!(
            DenominationSet::new([10, 0, 1]),
            Err(Error::InvalidDenominationSet(_))
        ));

        let err = DenominationSet::new([10, 5, 10]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDenominationSet("duplicate denomination 10".to_string())
        );
    }

    #[test]
    fn test_set_without_one() {
        let set = DenominationSet::new([5, 2]).unwrap();
        assert!(!set.covers_all_amounts());
        assert!(set.contains(5));
        assert!(!set.contains(1));
    }
}
