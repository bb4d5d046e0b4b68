// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Type Definitions

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Vesting Type ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VestingType {
    Linear,
    Exponential,
    Logarithmic,
    Cliff,
    /// Any curve name this engine does not know. Produces an empty schedule.
    #[serde(other)]
    Unsupported,
}

impl Default for VestingType {
    fn default() -> Self { VestingType::Linear }
}

impl VestingType {
    pub const ALL: [VestingType; 4] = [
        Self::Linear,
        Self::Exponential,
        Self::Logarithmic,
        Self::Cliff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Exponential => "exponential",
            Self::Logarithmic => "logarithmic",
            Self::Cliff => "cliff",
            Self::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl fmt::Display for VestingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ─── Vesting Emphasis Preset ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VestingEmphasis {
    Balanced,
    Team,
    Investors,
    Community,
}

impl Default for VestingEmphasis {
    fn default() -> Self { VestingEmphasis::Balanced }
}

impl VestingEmphasis {
    /// Unknown labels fall back to `Balanced`, which resets every category.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "team" => Self::Team,
            "investors" => Self::Investors,
            "community" => Self::Community,
            _ => Self::Balanced,
        }
    }
}

// ─── Category ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    /// Share of total supply, 0..=100.
    pub percentage: f64,
    #[serde(default)]
    pub vesting_type: VestingType,
    pub vesting_period: u32,
}

/// Category fields as submitted by an edit form, before an id is assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub vesting_type: Option<VestingType>,
    #[serde(default = "default_vesting_period")]
    pub vesting_period: u32,
}

pub fn default_vesting_period() -> u32 {
    24
}

// ─── Plan ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VestingScheduleEntry {
    pub month: u32,
    pub cumulative_tokens: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Allocation {
    pub category: String,
    pub tokens: u64,
    pub percentage: f64,
    pub vesting_type: VestingType,
    pub vesting_period: u32,
    pub vesting_schedule: Vec<VestingScheduleEntry>,
}

impl Allocation {
    /// Cumulative release at `month`: zero before the first month, held at
    /// the last entry once the schedule has ended.
    pub fn cumulative_at(&self, month: u32) -> f64 {
        if month == 0 {
            return 0.0;
        }
        match self.vesting_schedule.iter().find(|e| e.month == month) {
            Some(entry) => entry.cumulative_tokens,
            None => self.vesting_schedule.last()
                .filter(|last| month > last.month)
                .map(|last| last.cumulative_tokens)
                .unwrap_or(0.0),
        }
    }

    /// Tokens released during `month` alone.
    pub fn released_in(&self, month: u32) -> f64 {
        if month == 0 {
            return 0.0;
        }
        self.cumulative_at(month) - self.cumulative_at(month - 1)
    }

    /// Schedule entry at `checkpoint`, or the final entry when the schedule
    /// is shorter than the checkpoint.
    pub fn entry_or_last(&self, checkpoint: u32) -> Option<&VestingScheduleEntry> {
        self.vesting_schedule.iter()
            .find(|e| e.month == checkpoint)
            .or_else(|| self.vesting_schedule.last())
    }
}

/// Category name → allocation, in category order. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub total_tokens: u64,
    pub allocations: Vec<Allocation>,
}

impl Plan {
    pub fn get(&self, category: &str) -> Option<&Allocation> {
        self.allocations.iter().find(|a| a.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Allocation> {
        self.allocations.iter()
    }

    /// Longest vesting period across categories; zero for an empty plan.
    pub fn max_vesting_period(&self) -> u32 {
        self.allocations.iter().map(|a| a.vesting_period).max().unwrap_or(0)
    }

    pub fn newly_released(&self, month: u32) -> f64 {
        self.allocations.iter().map(|a| a.released_in(month)).sum()
    }

    pub fn circulating_at(&self, month: u32) -> f64 {
        self.allocations.iter().map(|a| a.cumulative_at(month)).sum()
    }
}

// ─── Time Series ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub month: u32,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(month: u32, value: f64) -> Self {
        Self { month, value }
    }
}

pub type NetBuyingPressureSeries = Vec<SeriesPoint>;
pub type AccumulatedBuyingPressureSeries = Vec<SeriesPoint>;
pub type CirculatingSupplySeries = Vec<SeriesPoint>;
pub type MarketCapSeries = Vec<SeriesPoint>;
pub type AnnualizedInflationSeries = Vec<SeriesPoint>;

/// Value of the last point in a series, or zero when it is empty.
pub fn last_value(series: &[SeriesPoint]) -> f64 {
    series.last().map(|p| p.value).unwrap_or(0.0)
}

// ─── Derived Records ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KpiSnapshot {
    pub total_supply: u64,
    pub circulating_supply: f64,
    pub market_cap: f64,
    pub current_price: f64,
    pub annualized_inflation: f64,
    pub treasury_reserves: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StressTestResult {
    pub stressed_price: f64,
    pub stressed_market_cap: MarketCapSeries,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoiCheckpoint {
    pub month: u32,
    pub released_tokens: f64,
    pub token_value: f64,
    /// Percent.
    pub roi: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoiProjection {
    pub investment_amount: f64,
    pub token_price: f64,
    pub tokens_received: f64,
    pub checkpoints: Vec<RoiCheckpoint>,
}

// ─── Simulation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationMonth {
    pub month: u32,
    pub price: f64,
    pub circulating_supply: f64,
    pub market_cap: f64,
    pub newly_released_tokens: f64,
    pub trading_volume: f64,
    pub market_sentiment: f64,
    pub volatility: f64,
    /// Absent when the previous month had no circulating supply.
    pub annualized_inflation: Option<f64>,
}

pub type SimulationSeries = Vec<SimulationMonth>;
