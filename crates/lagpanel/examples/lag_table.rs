//! Example: Lagging a Numeric Panel Table
//!
//! This example builds a synthetic panel of groups observed over a shared time
//! grid and runs the lag engine on it:
//! - a one-period lag overwriting the target
//! - a two-period lead appended as a new column
//! - the group-offset strategy on groups of unequal length

use lagpanel::{
    engine::{ComputePlacement, ShiftOptions, ShiftStrategy, lag_table},
    primitives::Table,
};
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

const GROUPS: usize = 4;
const PERIODS: usize = 6;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Lag Engine ===\n");

    // row_id, time_index, group_id, feature, target
    let mut rng = StdRng::seed_from_u64(7);
    let noise = Normal::new(0.0, 1.0)?;
    let mut rows = Vec::with_capacity(GROUPS * PERIODS);
    for g in 0..GROUPS {
        for t in 0..PERIODS {
            let feature: f64 = noise.sample(&mut rng);
            let target = 100.0 * g as f64 + t as f64 + 0.1 * feature;
            rows.push(vec![(g * PERIODS + t) as f64, t as f64, g as f64, feature, target]);
        }
    }
    let table = Table::from_rows(&rows)?;
    println!("Input: {} rows x {} columns\n", table.height(), table.width());

    // =========================================================================
    // LAG BY ONE PERIOD
    // =========================================================================

    let out = lag_table(table.clone(), &ShiftOptions::with_steps(1))?;
    println!("Lag 1: {} rows kept, {} censored", out.table.height(), out.censored);
    print_head(&out.table, 4);

    // =========================================================================
    // LEAD BY TWO PERIODS INTO A NEW COLUMN
    // =========================================================================

    let opts = ShiftOptions {
        append: true,
        keep_all: true,
        compute_placement: ComputePlacement::Parallel,
        ..ShiftOptions::with_steps(-2)
    };
    let out = lag_table(table, &opts)?;
    println!(
        "\nLead 2 (appended, keep all): {} rows, shifted values in column {}",
        out.table.height(),
        out.shifted_col
    );
    print_head(&out.table, PERIODS);

    // =========================================================================
    // UNEQUAL GROUP LENGTHS
    // =========================================================================

    let ragged = Table::from_rows(&[
        vec![0.0, 0.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0, 2.0],
        vec![2.0, 0.0, 1.0, 10.0],
        vec![3.0, 1.0, 1.0, 20.0],
        vec![4.0, 2.0, 1.0, 30.0],
    ])?;

    match lag_table(ragged.clone(), &ShiftOptions::with_steps(1)) {
        Ok(_) => println!("\nRotation unexpectedly accepted unequal groups"),
        Err(e) => println!("\nRotation on unequal groups: {e}"),
    }

    let opts = ShiftOptions { strategy: ShiftStrategy::GroupOffset, ..ShiftOptions::with_steps(1) };
    let out = lag_table(ragged, &opts)?;
    println!("Group offset on unequal groups: {} rows kept", out.table.height());
    print_head(&out.table, out.table.height());

    Ok(())
}

fn print_head(table: &Table, n: usize) {
    for i in 0..n.min(table.height()) {
        if let Some(row) = table.row(i) {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>8.2}")).collect();
            println!("  {}", cells.join(" "));
        }
    }
}
