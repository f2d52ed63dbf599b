use thiserror::Error;

use crate::cs::change::CoinMultiset;

/// Errors produced by the change-making solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The denomination set is empty, contains a zero value, or repeats a value.
    #[error("invalid denomination set: {0}")]
    InvalidDenominationSet(String),

    /// The amount is above the exact solver's table ceiling.
    #[error("amount {amount} exceeds the exact solver limit of {limit}")]
    AmountTooLarge { amount: i64, limit: usize },

    /// Greedy selection ran out of denominations with value still unpaid.
    #[error("greedy selection left {remainder} of {amount} unpaid")]
    IncompleteChange {
        amount: i64,
        remainder: u64,
        partial: CoinMultiset,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
