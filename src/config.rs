// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Model Parameters

//! Model constants for the supply, valuation and simulation stages.
//!
//! Defaults reproduce the reference model exactly. Scenario files may override
//! individual fields; anything omitted keeps its default.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// EngineParams
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// Baseline monthly demand as a fraction of total supply (1%).
    pub demand_ratio: f64,
    /// Upper bound of the uniform demand noise multiplier (+0..10%).
    pub demand_noise: f64,
    /// Treasury holds this fraction of fully diluted value (10%).
    pub treasury_ratio: f64,
    /// Downside price shock applied by the stress test (30%).
    pub stress_shock: f64,
    /// Months at which holder ROI is reported.
    pub roi_checkpoints: Vec<u32>,
    pub simulation: SimulationParams,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            demand_ratio: 0.01,
            demand_noise: 0.1,
            treasury_ratio: 0.1,
            stress_shock: 0.3,
            roi_checkpoints: vec![6, 12, 24, 36],
            simulation: SimulationParams::default(),
        }
    }
}

impl EngineParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("demand_ratio", self.demand_ratio)?;
        non_negative("demand_noise", self.demand_noise)?;
        non_negative("treasury_ratio", self.treasury_ratio)?;
        probability("stress_shock", self.stress_shock)?;
        self.simulation.validate()
    }
}

// ---------------------------------------------------------------------------
// SimulationParams
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub months: u32,
    pub initial_sentiment: f64,
    pub initial_volatility: f64,
    /// Half-width of the monthly sentiment drift, U(-step, +step).
    pub sentiment_step: f64,
    pub min_sentiment: f64,
    pub max_sentiment: f64,
    /// Monthly chance of an external shock.
    pub event_probability: f64,
    /// Half-width of the shock impact, U(-impact, +impact).
    pub event_max_impact: f64,
    /// Lowest multiplier supply dilution may apply to price in one month.
    pub supply_dampening_floor: f64,
    /// Price never drops below this fraction of the launch price.
    pub price_floor_ratio: f64,
    pub min_volatility: f64,
    pub max_volatility: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            months: 36,
            initial_sentiment: 1.0,
            initial_volatility: 0.1,
            sentiment_step: 0.05,
            min_sentiment: 0.5,
            max_sentiment: 1.5,
            event_probability: 0.05,
            event_max_impact: 0.2,
            supply_dampening_floor: 0.95,
            price_floor_ratio: 0.1,
            min_volatility: 0.05,
            max_volatility: 0.5,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("initial_volatility", self.initial_volatility)?;
        non_negative("sentiment_step", self.sentiment_step)?;
        non_negative("price_floor_ratio", self.price_floor_ratio)?;
        non_negative("supply_dampening_floor", self.supply_dampening_floor)?;
        probability("event_probability", self.event_probability)?;
        // An impact of 1.0 or more could zero out sentiment.
        if !(0.0..1.0).contains(&self.event_max_impact) {
            return Err(ConfigError::InvalidProbability {
                name: "event_max_impact",
                value: self.event_max_impact,
            });
        }
        if !(self.min_sentiment > 0.0) {
            return Err(ConfigError::OutOfRange {
                name: "min_sentiment",
                value: self.min_sentiment,
            });
        }
        ordered("sentiment", self.min_sentiment, self.max_sentiment)?;
        ordered("volatility", self.min_volatility, self.max_volatility)?;
        if !(self.min_sentiment..=self.max_sentiment).contains(&self.initial_sentiment) {
            return Err(ConfigError::OutOfRange {
                name: "initial_sentiment",
                value: self.initial_sentiment,
            });
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, value })
    }
}

fn probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}

fn ordered(name: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    non_negative(name, min)?;
    non_negative(name, max)?;
    if min > max {
        return Err(ConfigError::InvertedBounds { name, min, max });
    }
    Ok(())
}
