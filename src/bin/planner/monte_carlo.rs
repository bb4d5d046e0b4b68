// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Planner CLI - Monte Carlo over simulation seeds
// Seeds base..base+N against one generated plan, mean ± 95% CI per metric

use std::path::Path;
use std::time::Instant;

use tokenomics_engine::*;

use crate::report::*;
use crate::time_series;

/// One seeded market simulation against the planner's current plan.
pub fn run_single(
    planner: &TokenomicsPlanner,
    seed: u64,
    time_series_dir: Option<&Path>,
) -> color_eyre::Result<SimulationRun> {
    let start = Instant::now();
    let series = planner.run_simulation(seed)?;

    if let Some(dir) = time_series_dir {
        let path = dir.join(format!("sim-seed{}.jsonl", seed));
        time_series::write_jsonl(&path, &series)?;
        tracing::debug!(seed, path = %path.display(), "time series written");
    }

    let prices = series.iter().map(|m| m.price);
    let last = series.last();
    Ok(SimulationRun {
        seed,
        months: series.len(),
        final_price: last.map_or(0.0, |m| m.price),
        final_market_cap: last.map_or(0.0, |m| m.market_cap),
        final_circulating_supply: last.map_or(0.0, |m| m.circulating_supply),
        min_price: prices.clone().fold(f64::INFINITY, f64::min),
        max_price: prices.fold(f64::NEG_INFINITY, f64::max),
        max_volatility: series.iter().map(|m| m.volatility).fold(0.0, f64::max),
        total_trading_volume: series.iter().map(|m| m.trading_volume).sum(),
        elapsed_ms: start.elapsed().as_millis(),
    })
}

/// Run `n_runs` simulations with consecutive seeds and aggregate them.
/// Seeds wrap past `u64::MAX`.
pub fn run_monte_carlo(
    planner: &TokenomicsPlanner,
    n_runs: usize,
    base_seed: u64,
    time_series_dir: Option<&Path>,
) -> color_eyre::Result<MonteCarloReport> {
    let runs = (0..n_runs as u64)
        .map(|i| run_single(planner, base_seed.wrapping_add(i), time_series_dir))
        .collect::<color_eyre::Result<Vec<_>>>()?;

    let collect = |f: fn(&SimulationRun) -> f64| -> Vec<f64> { runs.iter().map(f).collect() };

    Ok(MonteCarloReport {
        n_runs,
        base_seed,
        final_price: Stats::from_samples(&collect(|r| r.final_price)),
        final_market_cap: Stats::from_samples(&collect(|r| r.final_market_cap)),
        min_price: Stats::from_samples(&collect(|r| r.min_price)),
        max_price: Stats::from_samples(&collect(|r| r.max_price)),
        total_trading_volume: Stats::from_samples(&collect(|r| r.total_trading_volume)),
        elapsed_ms: Stats::from_samples(&collect(|r| r.elapsed_ms as f64)),
        individual_runs: runs,
    })
}
