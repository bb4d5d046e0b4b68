// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Planner CLI - Report Types

use serde::Serialize;
use tokenomics_engine::export::PlanReport;

// ─── Statistics (per-metric Monte Carlo aggregation) ────────────────────────

/// Summary of one metric across seeds. `ci95` is the half-width of the 95%
/// confidence interval of the mean.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Stats {
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub ci95: f64,
    pub min: f64,
    pub max: f64,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        // Sample (n - 1) variance; a single run has no spread.
        let std_dev = if samples.len() > 1 {
            (samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
        } else {
            0.0
        };
        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
        Self {
            n: samples.len(),
            mean,
            std_dev,
            ci95: 1.96 * std_dev / n.sqrt(),
            min,
            max,
        }
    }
}

// ─── Single-Run Result ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SimulationRun {
    pub seed: u64,
    pub months: usize,
    pub final_price: f64,
    pub final_market_cap: f64,
    pub final_circulating_supply: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub max_volatility: f64,
    pub total_trading_volume: f64,
    pub elapsed_ms: u128,
}

// ─── Monte Carlo Report ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct MonteCarloReport {
    pub n_runs: usize,
    pub base_seed: u64,
    pub final_price: Stats,
    pub final_market_cap: Stats,
    pub min_price: Stats,
    pub max_price: Stats,
    pub total_trading_volume: Stats,
    pub elapsed_ms: Stats,
    pub individual_runs: Vec<SimulationRun>,
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub scenario: String,
    pub seed: u64,
    pub plan: PlanReport,
    pub monte_carlo: MonteCarloReport,
}
