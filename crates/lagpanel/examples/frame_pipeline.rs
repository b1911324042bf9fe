//! Example: Lagging a Polars DataFrame
//!
//! This example shows both ways of lagging a data frame:
//! - `lag_frame`: a lazy polars window expression
//! - `lag_dataframe`: the same frame routed through the lag engine
//!
//! Rows are generated out of order to show that both paths sort the panel by
//! group and time first.

use lagpanel::{
    engine::{ShiftStrategy, Steps},
    frame::{FrameLagConfig, lag_dataframe, lag_frame},
};
use polars::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

const SYMBOLS: &[&str] = &["AAA", "BBB", "CCC"];
const PERIODS: i64 = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Frame Pipeline ===\n");

    let mut rng = StdRng::seed_from_u64(3);
    let mut rows: Vec<(i64, &str, f64)> = Vec::new();
    for &symbol in SYMBOLS {
        let mut price = 100.0;
        for t in 0..PERIODS {
            price *= 1.0 + rng.gen_range(-0.02..0.02);
            rows.push((t, symbol, price));
        }
    }
    rows.shuffle(&mut rng);

    let df = DataFrame::new(vec![
        Column::new("time_index".into(), rows.iter().map(|r| r.0).collect::<Vec<_>>()),
        Column::new("group_id".into(), rows.iter().map(|r| r.1).collect::<Vec<_>>()),
        Column::new("target".into(), rows.iter().map(|r| r.2).collect::<Vec<_>>()),
    ])?;
    println!("Input (shuffled):\n{df}\n");

    // =========================================================================
    // LAZY WINDOW EXPRESSION
    // =========================================================================

    let cfg = FrameLagConfig { output: Some("target_lag1".to_string()), ..FrameLagConfig::default() };
    let lazy = lag_frame(df.clone().lazy(), &cfg).collect()?;
    println!("lag_frame, lag 1:\n{lazy}\n");

    // =========================================================================
    // THROUGH THE ENGINE
    // =========================================================================

    let cfg = FrameLagConfig {
        output: Some("target_lead1".to_string()),
        steps: Steps::new(-1),
        keep_all: true,
        strategy: ShiftStrategy::Rotate,
        ..FrameLagConfig::default()
    };
    let eager = lag_dataframe(&df, &cfg)?;
    println!("lag_dataframe, lead 1 (keep all):\n{eager}");

    Ok(())
}
