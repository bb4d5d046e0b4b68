// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Market Metrics

use crate::config::EngineParams;
use crate::types::{
    last_value, AnnualizedInflationSeries, KpiSnapshot, MarketCapSeries, SeriesPoint,
};

/// Market cap at a static launch price.
pub fn market_cap(circulating: &[SeriesPoint], token_price: f64) -> MarketCapSeries {
    circulating
        .iter()
        .map(|p| SeriesPoint::new(p.month, p.value * token_price))
        .collect()
}

/// Monthly supply growth compounded to a yearly rate, in percent.
pub fn annualize(monthly_inflation: f64) -> f64 {
    ((1.0 + monthly_inflation).powi(12) - 1.0) * 100.0
}

/// Annualized inflation for one month, or `None` when the previous month had
/// no circulating supply.
pub fn annualized_inflation_between(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some(annualize((current - previous) / previous))
}

/// Months whose predecessor has zero supply (including month 1, whose
/// predecessor is month 0) are left out of the series.
pub fn annualized_inflation(circulating: &[SeriesPoint]) -> AnnualizedInflationSeries {
    let supply_at = |month: u32| {
        circulating.iter().find(|p| p.month == month).map(|p| p.value).unwrap_or(0.0)
    };
    circulating
        .iter()
        .filter_map(|p| {
            let previous = if p.month == 0 { 0.0 } else { supply_at(p.month - 1) };
            annualized_inflation_between(previous, p.value)
                .map(|rate| SeriesPoint::new(p.month, rate))
        })
        .collect()
}

pub fn treasury_reserves(total_tokens: u64, token_price: f64, params: &EngineParams) -> f64 {
    total_tokens as f64 * token_price * params.treasury_ratio
}

pub fn kpi_snapshot(
    total_tokens: u64,
    token_price: f64,
    circulating: &[SeriesPoint],
    market_cap: &[SeriesPoint],
    inflation: &[SeriesPoint],
    treasury_reserves: f64,
) -> KpiSnapshot {
    KpiSnapshot {
        total_supply: total_tokens,
        circulating_supply: last_value(circulating),
        market_cap: last_value(market_cap),
        current_price: token_price,
        annualized_inflation: last_value(inflation),
        treasury_reserves,
    }
}
