use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;
use num_traits::ToPrimitive;

use super::{verify, ChangeSolver, CoinMultiset, DenominationSet};
use crate::cs::dynamic::{ChangeTable, ExactSolver};
use crate::cs::greedy::{greedy_change, greedy_change_lossy, GreedySolver};
use crate::error::{Error, Result};

/// Outcome of running both solvers on one amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Both used the same number of coins.
    Tie,
    /// The exact solver used this many fewer coins.
    ExactSaves(u64),
    /// The greedy solver used this many fewer coins. Never happens for a
    /// correct exact solver, but is reported rather than hidden.
    GreedySaves(u64),
    /// Greedy left part of the amount unpaid.
    GreedyIncomplete,
    /// No combination of denominations forms the amount.
    ExactUnsolvable,
}

/// Side-by-side result of the greedy and exact solvers for one amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub amount: i64,
    pub greedy: CoinMultiset,
    pub exact: Option<CoinMultiset>,
    pub greedy_time: Duration,
    pub exact_time: Duration,
}

impl Comparison {
    pub fn greedy_total(&self) -> u64 {
        self.greedy.total_coins()
    }

    pub fn exact_total(&self) -> Option<u64> {
        self.exact.as_ref().map(CoinMultiset::total_coins)
    }

    pub fn greedy_valid(&self) -> bool {
        verify(&self.greedy, self.amount)
    }

    pub fn exact_valid(&self) -> bool {
        self.exact
            .as_ref()
            .is_some_and(|coins| verify(coins, self.amount))
    }

    /// How many times slower the exact solver was.
    pub fn speedup(&self) -> f64 {
        ratio(self.exact_time, self.greedy_time)
    }

    /// Zero and negative amounts are a tie: both solvers pay nothing.
    pub fn verdict(&self) -> Verdict {
        let Some(exact_total) = self.exact_total() else {
            return Verdict::ExactUnsolvable;
        };
        if self.amount <= 0 {
            return Verdict::Tie;
        }
        if !self.greedy_valid() {
            return Verdict::GreedyIncomplete;
        }

        let greedy_total = self.greedy_total();
        match greedy_total.cmp(&exact_total) {
            std::cmp::Ordering::Equal => Verdict::Tie,
            std::cmp::Ordering::Greater => Verdict::ExactSaves(greedy_total - exact_total),
            std::cmp::Ordering::Less => Verdict::GreedySaves(exact_total - greedy_total),
        }
    }
}

fn ratio(slow: Duration, fast: Duration) -> f64 {
    if fast.is_zero() {
        f64::INFINITY
    } else {
        slow.as_secs_f64() / fast.as_secs_f64()
    }
}

/// Runs both solvers on `amount` and times each.
///
/// Greedy runs in lossy mode so an incomplete result is still visible; see
/// [`Comparison::verdict`].
///
/// # Examples
///
/// ```
/// use coinchange::cs::change::{compare, Verdict};
/// use coinchange::DenominationSet;
///
/// let report = compare(113, &DenominationSet::default()).unwrap();
/// assert_eq!(report.verdict(), Verdict::Tie);
/// assert_eq!(report.greedy_total(), 5);
/// ```
pub fn compare(amount: i64, denominations: &DenominationSet) -> Result<Comparison> {
    let start = Instant::now();
    let greedy = greedy_change_lossy(amount, denominations);
    let greedy_time = start.elapsed();

    let start = Instant::now();
    let exact = ExactSolver::default().solve(amount, denominations)?;
    let exact_time = start.elapsed();

    Ok(Comparison {
        amount,
        greedy,
        exact,
        greedy_time,
        exact_time,
    })
}

/// Mean solve time of each solver for one amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    pub amount: i64,
    pub greedy: Duration,
    pub exact: Duration,
}

impl TimingSample {
    /// How many times slower the exact solver was.
    pub fn speedup(&self) -> f64 {
        ratio(self.exact, self.greedy)
    }
}

fn mean_time(
    solver: &dyn ChangeSolver,
    amount: i64,
    denominations: &DenominationSet,
    iterations: u32,
) -> Result<Duration> {
    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let start = Instant::now();
        black_box(solver.solve(black_box(amount), denominations)?);
        total += start.elapsed();
    }
    Ok(total / iterations)
}

/// Averages each solver's running time over `iterations` runs per amount.
///
/// An `iterations` of zero is treated as one.
pub fn measure_performance(
    amounts: &[i64],
    iterations: u32,
    denominations: &DenominationSet,
) -> Result<Vec<TimingSample>> {
    let iterations = iterations.max(1);
    let greedy = GreedySolver::new().lossy();
    let exact = ExactSolver::default();

    amounts
        .iter()
        .map(|&amount| {
            Ok(TimingSample {
                amount,
                greedy: mean_time(&greedy, amount, denominations, iterations)?,
                exact: mean_time(&exact, amount, denominations, iterations)?,
            })
        })
        .collect()
}

/// An amount where greedy and exact disagree on the coin count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub amount: i64,
    pub greedy_total: u64,
    pub exact_total: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub total: usize,
    pub mismatches: Vec<Mismatch>,
}

impl SweepReport {
    pub fn matches(&self) -> usize {
        self.total.saturating_sub(self.mismatches.len())
    }

    /// Share of amounts where both solvers agree, as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.matches() as f64 / self.total as f64 * 100.0
    }

    pub fn all_match(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Checks that greedy and exact use the same number of coins for every amount.
pub fn correctness_sweep(amounts: &[i64], denominations: &DenominationSet) -> Result<SweepReport> {
    let exact = ExactSolver::default();
    let mut report = SweepReport {
        total: amounts.len(),
        mismatches: Vec::new(),
    };

    for &amount in amounts {
        let greedy_total = greedy_change_lossy(amount, denominations).total_coins();
        let exact_total = exact
            .solve(amount, denominations)?
            .map(|coins| coins.total_coins());

        if exact_total != Some(greedy_total) {
            debug!(
                "solvers disagree on {}: greedy {}, exact {:?}",
                amount, greedy_total, exact_total
            );
            report.mismatches.push(Mismatch {
                amount,
                greedy_total,
                exact_total,
            });
        }
    }

    Ok(report)
}

/// Rough memory footprint of each solver for one amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryEstimate {
    pub amount: i64,
    /// The greedy result multiset.
    pub greedy_bytes: usize,
    /// The exact solver's two tables.
    pub exact_bytes: usize,
}

impl MemoryEstimate {
    pub fn ratio(&self) -> f64 {
        if self.greedy_bytes == 0 {
            return 0.0;
        }
        self.exact_bytes as f64 / self.greedy_bytes as f64
    }
}

pub fn estimate_memory(amount: i64, denominations: &DenominationSet) -> MemoryEstimate {
    let greedy = greedy_change_lossy(amount, denominations);
    let greedy_bytes =
        std::mem::size_of::<CoinMultiset>() + greedy.len() * std::mem::size_of::<(u64, u64)>();
    let exact_bytes = amount
        .to_usize()
        .filter(|&a| a > 0)
        .map_or(0, ChangeTable::bytes_for);

    MemoryEstimate {
        amount,
        greedy_bytes,
        exact_bytes,
    }
}

/// Finds the smallest amount where greedy does worse than the exact solver.
///
/// Greedy does worse when it uses more coins or leaves part of a payable
/// amount unpaid. Only amounts below the sum of the two largest
/// denominations are searched; for sets containing 1 a counterexample, if
/// any exists, always lies in that window (Kozen and Zaks).
///
/// # Examples
///
/// ```
/// use coinchange::cs::change::find_greedy_counterexample;
/// use coinchange::DenominationSet;
///
/// assert_eq!(find_greedy_counterexample(&DenominationSet::default()).unwrap(), None);
///
/// let set = DenominationSet::new([4, 3, 1]).unwrap();
/// assert_eq!(find_greedy_counterexample(&set).unwrap(), Some(6));
/// ```
pub fn find_greedy_counterexample(denominations: &DenominationSet) -> Result<Option<u64>> {
    let values = denominations.as_slice();
    if values.len() < 2 {
        return Ok(None);
    }

    let limit = ExactSolver::default().max_amount();
    let bound = values[0].saturating_add(values[1]) - 1;
    let table_size = bound
        .to_usize()
        .filter(|&b| b <= limit)
        .ok_or(Error::AmountTooLarge {
            amount: bound.to_i64().unwrap_or(i64::MAX),
            limit,
        })?;

    let table = ChangeTable::build(table_size, denominations)?;
    for amount in 1..=table_size {
        let Some(best) = table.min_count(amount) else {
            continue;
        };
        let greedy_is_optimal = match greedy_change(amount as i64, denominations) {
            Ok(coins) => coins.total_coins() as usize <= best,
            Err(_) => false,
        };
        if !greedy_is_optimal {
            return Ok(Some(amount as u64));
        }
    }
    Ok(None)
}

/// Whether greedy change is optimal for every amount under `denominations`.
pub fn is_canonical(denominations: &DenominationSet) -> Result<bool> {
    Ok(find_greedy_counterexample(denominations)?.is_none())
}
