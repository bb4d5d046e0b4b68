// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Price Shock Stress Test

use crate::config::EngineParams;
use crate::types::{SeriesPoint, StressTestResult};

/// Apply the downside shock to the launch price and revalue every month of
/// circulating supply at the shocked price.
pub fn run_stress_test(
    circulating: &[SeriesPoint],
    token_price: f64,
    params: &EngineParams,
) -> StressTestResult {
    let stressed_price = token_price * (1.0 - params.stress_shock);
    StressTestResult {
        stressed_price,
        stressed_market_cap: circulating
            .iter()
            .map(|p| SeriesPoint::new(p.month, p.value * stressed_price))
            .collect(),
    }
}
