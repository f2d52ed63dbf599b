pub mod cs;
pub mod error;

pub use cs::change::{
    format_coins, total_coins, verify, ChangeSolver, CoinMultiset, DenominationSet,
    DEFAULT_DENOMINATIONS,
};
pub use cs::{dynamic, greedy};
pub use dynamic::{
    exact_change, min_coins_for_change, ChangeTable, ExactSolver, DEFAULT_MAX_EXACT_AMOUNT,
};
pub use error::{Error, Result};
pub use greedy::{greedy_change, greedy_change_lossy, GreedySolver};
