pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{
    exact_change, min_coins_for_change, ChangeTable, ExactSolver, DEFAULT_MAX_EXACT_AMOUNT,
};
