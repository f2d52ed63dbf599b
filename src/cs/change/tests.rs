use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cs::change::{total_coins, verify, ChangeSolver, CoinMultiset, DenominationSet};
use crate::cs::dynamic::{exact_change, ChangeTable, ExactSolver};
use crate::cs::greedy::{greedy_change, greedy_change_lossy, GreedySolver};

const SWEEP_LIMIT: usize = 10_000;

#[test]
fn test_both_solvers_sum_to_amount() {
    let set = DenominationSet::default();
    for amount in 0..=2_000 {
        let greedy = greedy_change(amount, &set).unwrap();
        assert!(verify(&greedy, amount), "greedy wrong for {}", amount);

        let exact = exact_change(amount, &set).unwrap().unwrap();
        assert!(verify(&exact, amount), "exact wrong for {}", amount);
    }
}

#[test]
fn test_exact_never_worse_than_greedy() {
    // One table answers every sub-amount, so build it once for the sweep.
    let set = DenominationSet::default();
    let table = ChangeTable::build(SWEEP_LIMIT, &set).unwrap();

    for amount in 0..=SWEEP_LIMIT {
        let exact = table.reconstruct(amount).unwrap();
        let greedy = greedy_change(amount as i64, &set).unwrap();
        assert!(total_coins(&exact) <= total_coins(&greedy));
        // The default set is canonical, so the totals coincide.
        assert_eq!(total_coins(&exact), total_coins(&greedy), "amount {}", amount);
        assert_eq!(Some(total_coins(&exact) as usize), table.min_count(amount));
    }
}

#[test]
fn test_shared_table_matches_per_call_solve() {
    let set = DenominationSet::default();
    let table = ChangeTable::build(SWEEP_LIMIT, &set).unwrap();
    for amount in [1, 37, 99, 113, 127, 200, 4_321, SWEEP_LIMIT] {
        assert_eq!(
            exact_change(amount as i64, &set).unwrap(),
            table.reconstruct(amount)
        );
    }
}

#[test]
fn test_non_canonical_set_exact_is_strictly_better_somewhere() {
    let set = DenominationSet::new([4, 3, 1]).unwrap();
    let table = ChangeTable::build(1_000, &set).unwrap();
    let mut strictly_better = 0;

    for amount in 0..=1_000 {
        let exact = table.reconstruct(amount).unwrap();
        let greedy = greedy_change(amount as i64, &set).unwrap();
        assert!(verify(&exact, amount as i64));
        assert!(total_coins(&exact) <= total_coins(&greedy));
        if total_coins(&exact) < total_coins(&greedy) {
            strictly_better += 1;
        }
    }
    assert!(strictly_better > 0);
}

#[test]
fn test_greedy_gap_on_non_covering_set() {
    let set = DenominationSet::new([5, 2]).unwrap();

    // Solvable by both.
    assert_eq!(
        greedy_change(7, &set).unwrap(),
        exact_change(7, &set).unwrap().unwrap()
    );

    // Greedy drops a remainder of 1; exact pays with three 2s.
    let greedy = greedy_change_lossy(6, &set);
    assert!(!verify(&greedy, 6));
    assert!(greedy_change(6, &set).is_err());
    let exact = exact_change(6, &set).unwrap().unwrap();
    assert!(verify(&exact, 6));

    // Nothing forms 3.
    assert_eq!(exact_change(3, &set).unwrap(), None);
    assert!(!verify(&greedy_change_lossy(3, &set), 3));
}

#[test]
fn test_zero_amount_boundary() {
    let set = DenominationSet::default();
    let greedy = GreedySolver::new();
    let exact = ExactSolver::new();
    let solvers: [&dyn ChangeSolver; 2] = [&greedy, &exact];
    for solver in solvers {
        let coins = solver.solve(0, &set).unwrap().unwrap();
        assert_eq!(coins, CoinMultiset::new(), "{}", solver.name());
        assert!(verify(&coins, 0));
    }
}

#[test]
fn test_solvers_are_idempotent() {
    let set = DenominationSet::new([9, 6, 1]).unwrap();
    let greedy = GreedySolver::new();
    let exact = ExactSolver::new();
    let solvers: [&dyn ChangeSolver; 2] = [&greedy, &exact];
    for solver in solvers {
        for amount in [0, 5, 12, 18, 97, 1_234] {
            assert_eq!(
                solver.solve(amount, &set).unwrap(),
                solver.solve(amount, &set).unwrap()
            );
        }
    }
}

#[test]
fn test_random_amounts_agree_on_canonical_set() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let set = DenominationSet::default();
    for _ in 0..200 {
        let amount: i64 = rng.gen_range(1..=5_000);
        let greedy = greedy_change(amount, &set).unwrap();
        let exact = exact_change(amount, &set).unwrap().unwrap();
        assert_eq!(total_coins(&greedy), total_coins(&exact), "amount {}", amount);
    }
}

#[test]
fn test_random_sets_exact_is_optimal_and_valid() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..50 {
        let len = rng.gen_range(1..=5);
        let mut values: Vec<u64> = (0..len).map(|_| rng.gen_range(2..=40)).collect();
        values.sort_unstable();
        values.dedup();
        values.push(1);
        let set = DenominationSet::new(values).unwrap();

        let table = ChangeTable::build(300, &set).unwrap();
        for amount in 0..=300 {
            let exact = table.reconstruct(amount).unwrap();
            let greedy = greedy_change(amount as i64, &set).unwrap();
            assert!(verify(&exact, amount as i64));
            assert!(total_coins(&exact) <= total_coins(&greedy));
        }
    }
}

#[test]
fn test_solvers_run_on_independent_threads() {
    let set = DenominationSet::default();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let set = set.clone();
            std::thread::spawn(move || exact_change(1_000 + i, &set).unwrap().unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let coins = handle.join().unwrap();
        assert!(verify(&coins, 1_000 + i as i64));
    }
}
