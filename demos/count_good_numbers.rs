// ============================================================================
// Good Number Counting Example
// ============================================================================

use good_numbers::prelude::*;

fn main() {
    // Run with `--features logging` to surface the engine's debug events.
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Good Numbers Example ===\n");

    // A good number has an even number of digits, no leading zero, and its
    // first half of digits sums to the same value as its second half.
    let counter = GoodNumberCounter::default();

    println!("Counting good numbers by length (closed form):");
    for total in (2..=10).step_by(2) {
        let length = DigitLength::new(total).unwrap();
        let report = counter.count_report(length).unwrap();
        println!("  {}", report);
    }

    // The engine never looks at individual numbers; it pairs half-sum
    // frequencies instead. Peek at the table behind the 6-digit count.
    println!("\n=== Half-Sum Distribution (6 digits) ===");
    let six = DigitLength::new(6).unwrap();
    let distribution = counter.sum_distribution(six).unwrap();

    println!(
        "3-digit sequences by digit sum ({} sequences total):",
        distribution.total()
    );
    for (sum, count) in distribution.iter().take(6) {
        println!("  sum {:>2}: {:>3} sequences", sum, count);
    }
    println!("  ...");

    let (modal_sum, modal_count) = distribution
        .iter()
        .max_by_key(|&(_, count)| count)
        .unwrap();
    println!("  most common sum: {} ({} sequences)", modal_sum, modal_count);

    // Lifting the leading-zero rule turns the count into the classic
    // lucky-ticket figure.
    println!("\n=== Leading Zeros ===");
    println!(
        "6-digit good numbers:      {}",
        counter.count(six).unwrap()
    );
    println!(
        "6-digit balanced strings:  {}",
        counter.count_balanced_strings(six).unwrap()
    );

    // Cross-check the closed form against brute-force enumeration.
    println!("\n=== Oracle Cross-Check ===");
    let oracle = GoodNumberCounterBuilder::enumeration_oracle().build().unwrap();
    let closed = counter.count(six).unwrap();
    let brute = oracle.count(six).unwrap();
    println!(
        "closed form {} vs enumeration {} -> {}",
        closed,
        brute,
        if closed == brute { "agree" } else { "DISAGREE" }
    );

    // The widest query u64 arithmetic can answer exactly.
    println!("\n=== Largest Supported Length ===");
    let report = counter.count_report(DigitLength::MAX).unwrap();
    println!("  {}", report);
}
