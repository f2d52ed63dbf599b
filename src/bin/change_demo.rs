use coinchange::cs::change::{
    compare, correctness_sweep, estimate_memory, find_greedy_counterexample, measure_performance,
    Comparison, Verdict,
};
use coinchange::{greedy_change, total_coins, DenominationSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::process;
use std::time::Instant;

const DEMO_AMOUNTS: [i64; 8] = [113, 50, 37, 99, 1, 2, 127, 200];
const PERFORMANCE_AMOUNTS: [i64; 6] = [100, 500, 1_000, 2_000, 5_000, 10_000];
const EDGE_AMOUNTS: [i64; 14] = [0, 1, 2, 3, 4, 6, 7, 8, 9, 11, 47, 48, 49, 51];
const MEMORY_AMOUNTS: [i64; 4] = [100, 1_000, 5_000, 10_000];
const STRESS_AMOUNTS: [i64; 4] = [50_000, 100_000, 200_000, 500_000];

fn check_mark(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "FAILED"
    }
}

fn exact_lines(report: &Comparison) -> Vec<String> {
    match &report.exact {
        Some(coins) => vec![
            format!("Exact:   {}", coins),
            format!(
                "         {} coins, check {}",
                coins.total_coins(),
                check_mark(report.exact_valid())
            ),
        ],
        None => vec!["Exact:   no combination forms this amount".to_string()],
    }
}

fn total_or_dash(total: Option<u64>) -> String {
    total.map_or_else(|| "-".to_string(), |t| t.to_string())
}

fn demonstrate(set: &DenominationSet) -> coinchange::Result<()> {
    println!("Making change with denominations {}", set);
    println!("{}", "=".repeat(60));

    for amount in DEMO_AMOUNTS {
        let report = compare(amount, set)?;
        println!("\nAmount: {}", amount);
        println!("{}", "-".repeat(40));
        println!("Greedy:  {}", report.greedy);
        println!(
            "         {} coins, check {}",
            report.greedy_total(),
            check_mark(report.greedy_valid())
        );
        for line in exact_lines(&report) {
            println!("{}", line);
        }
        match report.verdict() {
            Verdict::Tie => println!("Result:  same number of coins"),
            Verdict::ExactSaves(n) => println!("Result:  exact saves {} coins", n),
            Verdict::GreedySaves(n) => println!("Result:  greedy saves {} coins", n),
            Verdict::GreedyIncomplete => println!("Result:  greedy left part unpaid"),
            Verdict::ExactUnsolvable => println!("Result:  unsolvable"),
        }
    }
    Ok(())
}

fn performance(set: &DenominationSet) -> coinchange::Result<()> {
    println!("\nPerformance (mean of 5 runs)");
    println!("{}", "=".repeat(50));
    println!(
        "{:<8} {:<15} {:<12} {:<12}",
        "Amount", "Greedy (ms)", "Exact (ms)", "Ratio"
    );
    println!("{}", "-".repeat(55));

    for sample in measure_performance(&PERFORMANCE_AMOUNTS, 5, set)? {
        println!(
            "{:<8} {:<15.3} {:<12.3} {:.1}x",
            sample.amount,
            sample.greedy.as_secs_f64() * 1000.0,
            sample.exact.as_secs_f64() * 1000.0,
            sample.speedup()
        );
    }
    Ok(())
}

fn edge_cases(set: &DenominationSet) -> coinchange::Result<()> {
    println!("\nEdge cases");
    println!("{}", "=".repeat(50));

    for amount in EDGE_AMOUNTS {
        let report = compare(amount, set)?;
        let status = if report.verdict() == Verdict::Tie {
            "ok"
        } else {
            "!!"
        };
        println!(
            "{} amount {:2}: greedy={:2}, exact={:2} | greedy: {}",
            status,
            amount,
            report.greedy_total(),
            total_or_dash(report.exact_total()),
            report.greedy
        );
    }
    Ok(())
}

fn random_sweep(set: &DenominationSet, seed: u64) -> coinchange::Result<()> {
    println!("\nCorrectness sweep (seed {})", seed);
    println!("{}", "=".repeat(35));

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut amounts: Vec<i64> = (0..20).map(|_| rng.gen_range(1..=1_000)).collect();
    amounts.extend([1, 2, 3, 50, 99, 100, 113, 999]);

    let report = correctness_sweep(&amounts, set)?;
    for mismatch in &report.mismatches {
        println!(
            "mismatch at {}: greedy={}, exact={:?}",
            mismatch.amount, mismatch.greedy_total, mismatch.exact_total
        );
    }
    println!("Tests:      {}", report.total);
    println!("Matches:    {}", report.matches());
    println!("Mismatches: {}", report.mismatches.len());
    println!("Success:    {:.1}%", report.success_rate());
    Ok(())
}

fn memory(set: &DenominationSet) {
    println!("\nMemory estimate");
    println!("{}", "=".repeat(40));
    println!(
        "{:<8} {:<18} {:<15} {}",
        "Amount", "Greedy (bytes)", "Exact (bytes)", "Ratio"
    );
    println!("{}", "-".repeat(60));

    for amount in MEMORY_AMOUNTS {
        let estimate = estimate_memory(amount, set);
        println!(
            "{:<8} {:<18} {:<15} {:.1}x",
            amount,
            estimate.greedy_bytes,
            estimate.exact_bytes,
            estimate.ratio()
        );
    }
}

fn stress(set: &DenominationSet) -> coinchange::Result<()> {
    println!("\nGreedy on large amounts");
    println!("{}", "=".repeat(30));
    println!("{:<10} {:<15} {}", "Amount", "Greedy (ms)", "Coins");
    println!("{}", "-".repeat(40));

    for amount in STRESS_AMOUNTS {
        let start = Instant::now();
        let coins = greedy_change(amount, set)?;
        let elapsed = start.elapsed();
        println!(
            "{:<10} {:<15.3} {}",
            amount,
            elapsed.as_secs_f64() * 1000.0,
            total_coins(&coins)
        );
    }
    println!("The exact solver is not run here; its table grows with the amount.");
    Ok(())
}

fn non_canonical() -> coinchange::Result<()> {
    println!("\nNon-canonical sets");
    println!("{}", "=".repeat(30));

    for values in [vec![4, 3, 1], vec![5, 2]] {
        let set = DenominationSet::new(values)?;
        match find_greedy_counterexample(&set)? {
            Some(amount) => {
                let report = compare(amount as i64, &set)?;
                println!(
                    "{}: greedy fails first at {} ({} vs {:?})",
                    set,
                    amount,
                    report.greedy,
                    report.exact.map(|coins| coins.to_string())
                );
            }
            None => println!("{}: greedy is always optimal", set),
        }
    }
    Ok(())
}

fn run() -> coinchange::Result<()> {
    let set = DenominationSet::default();
    demonstrate(&set)?;
    performance(&set)?;
    edge_cases(&set)?;
    random_sweep(&set, 42)?;
    memory(&set);
    stress(&set)?;
    non_canonical()?;
    println!("\nDone.");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
