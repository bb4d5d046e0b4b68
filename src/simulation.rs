// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Stochastic Market Simulation

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimulationParams;
use crate::error::PreconditionError;
use crate::metrics::annualized_inflation_between;
use crate::types::{Plan, SimulationMonth, SimulationSeries};

// ─── MarketState ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketState {
    pub month: u32,
    pub price: f64,
    pub circulating_supply: f64,
    pub sentiment: f64,
    pub volatility: f64,
}

// ─── MarketSimulation ────────────────────────────────────────────────────────

/// Month-stepped price/supply process driven by the plan's vesting schedules.
///
/// The plan is only read for its release forcing; nothing flows back into it.
/// All randomness comes from `rng`, so a seeded generator reproduces the
/// series bit for bit.
pub struct MarketSimulation<'p, R: Rng> {
    plan: &'p Plan,
    rng: R,
    params: SimulationParams,
    initial_price: f64,
    state: MarketState,
    series: SimulationSeries,
}

impl<'p> MarketSimulation<'p, ChaCha8Rng> {
    pub fn seeded(plan: &'p Plan, token_price: f64, seed: u64, params: SimulationParams) -> Self {
        Self::new(plan, token_price, ChaCha8Rng::seed_from_u64(seed), params)
    }
}

impl<'p, R: Rng> MarketSimulation<'p, R> {
    pub fn new(plan: &'p Plan, token_price: f64, rng: R, params: SimulationParams) -> Self {
        let state = MarketState {
            month: 0,
            price: token_price,
            circulating_supply: 0.0,
            sentiment: params.initial_sentiment,
            volatility: params.initial_volatility,
        };
        Self {
            plan,
            rng,
            initial_price: token_price,
            series: Vec::with_capacity(params.months as usize),
            params,
            state,
        }
    }

    pub fn state(&self) -> &MarketState {
        &self.state
    }

    pub fn series(&self) -> &[SimulationMonth] {
        &self.series
    }

    pub fn is_finished(&self) -> bool {
        self.state.month >= self.params.months
    }

    /// Advance one month. Returns `None` once the horizon has been reached.
    pub fn step(&mut self) -> Option<SimulationMonth> {
        if self.is_finished() {
            return None;
        }
        let p = &self.params;
        let month = self.state.month + 1;

        // 1-2. Release forcing
        let newly_released = self.plan.newly_released(month);
        let previous_supply = self.state.circulating_supply;
        let supply = previous_supply + newly_released;

        // 3. Sentiment drift
        let drift = (self.rng.gen::<f64>() - 0.5) * (2.0 * p.sentiment_step);
        let mut sentiment = (self.state.sentiment + drift).clamp(p.min_sentiment, p.max_sentiment);
        let mut volatility = self.state.volatility;

        // 4. External shock; applied after the clamp, so it may briefly
        // push sentiment outside the band until next month.
        if self.rng.gen::<f64>() < p.event_probability {
            let impact = (self.rng.gen::<f64>() - 0.5) * (2.0 * p.event_max_impact);
            sentiment *= 1.0 + impact;
            volatility *= 1.0 + impact.abs();
            tracing::debug!(month, impact, "external market event");
        }

        // 5. Order flow
        let buy_pressure = (self.rng.gen::<f64>() * volatility + 1.0) * sentiment;
        let sell_pressure = (self.rng.gen::<f64>() * volatility + 1.0) / sentiment;

        // 6. Dilution; no supply means nothing to dilute.
        let supply_dampening = if supply > 0.0 {
            (1.0 - newly_released / supply).max(p.supply_dampening_floor)
        } else {
            1.0
        };

        // 7. Price
        let price_ratio = (buy_pressure / sell_pressure) * supply_dampening;
        let price = (self.state.price * price_ratio).max(self.initial_price * p.price_floor_ratio);

        // 8-10. Derived metrics
        let trading_volume = supply * (price_ratio - 1.0).abs() * sentiment;
        let market_cap = supply * price;
        let annualized_inflation = annualized_inflation_between(previous_supply, supply);

        // 11. Volatility feedback
        let volatility = (volatility * (1.0 + (price_ratio - 1.0).abs()))
            .clamp(p.min_volatility, p.max_volatility);

        self.state = MarketState {
            month,
            price,
            circulating_supply: supply,
            sentiment,
            volatility,
        };

        let record = SimulationMonth {
            month,
            price,
            circulating_supply: supply,
            market_cap,
            newly_released_tokens: newly_released,
            trading_volume,
            market_sentiment: sentiment,
            volatility,
            annualized_inflation,
        };
        self.series.push(record.clone());
        Some(record)
    }

    /// Run the remaining months and return the full series.
    pub fn run(mut self) -> SimulationSeries {
        while self.step().is_some() {}
        tracing::info!(
            months = self.series.len(),
            final_price = self.state.price,
            "market simulation complete"
        );
        self.series
    }
}

/// Seeded run over the full horizon. Fails without a plan.
pub fn run_simulation(
    plan: Option<&Plan>,
    token_price: f64,
    seed: u64,
    params: &SimulationParams,
) -> Result<SimulationSeries, PreconditionError> {
    let plan = plan.ok_or(PreconditionError::NoPlan)?;
    Ok(MarketSimulation::seeded(plan, token_price, seed, params.clone()).run())
}
