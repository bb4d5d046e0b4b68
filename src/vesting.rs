// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Vesting Curves

use serde::Serialize;

use crate::types::{VestingScheduleEntry, VestingType};

/// Exponential curve steepness. At the end of the period 1 - e^-3 ≈ 95% of
/// the allocation has been released; the remainder is never scheduled.
const EXPONENTIAL_RATE: f64 = 3.0;

/// Monthly cumulative-release schedule for months `1..=vesting_period`.
///
/// Values are continuous (not floored). An empty schedule is returned for an
/// unsupported curve or a zero-length period.
pub fn generate(
    vesting_type: VestingType,
    tokens: u64,
    vesting_period: u32,
) -> Vec<VestingScheduleEntry> {
    if vesting_period == 0 || !vesting_type.is_supported() {
        tracing::warn!(
            vesting_type = %vesting_type,
            vesting_period,
            "no vesting schedule for this curve"
        );
        return Vec::new();
    }

    let total = tokens as f64;
    let period = vesting_period as f64;
    (1..=vesting_period)
        .map(|month| VestingScheduleEntry {
            month,
            cumulative_tokens: cumulative(vesting_type, total, month as f64, period),
        })
        .collect()
}

fn cumulative(vesting_type: VestingType, total: f64, m: f64, period: f64) -> f64 {
    match vesting_type {
        VestingType::Linear => total * m / period,
        VestingType::Exponential => total * (1.0 - (-EXPONENTIAL_RATE * m / period).exp()),
        VestingType::Logarithmic => total * ((m + 1.0).ln() / (period + 1.0).ln()),
        VestingType::Cliff => if m < period { 0.0 } else { total },
        VestingType::Unsupported => 0.0,
    }
}

// ─── Curve Catalogue ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct VestingTypeInfo {
    pub vesting_type: VestingType,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn describe(vesting_type: VestingType) -> VestingTypeInfo {
    let (name, description) = match vesting_type {
        VestingType::Linear => ("Linear", "Tokens are released at a constant rate over time."),
        VestingType::Exponential => ("Exponential", "Token release rate increases over time."),
        VestingType::Logarithmic => ("Logarithmic", "Token release rate decreases over time."),
        VestingType::Cliff => (
            "Cliff",
            "No tokens are released until a specific date, then all are released at once.",
        ),
        VestingType::Unsupported => ("Unsupported", "This curve is not modelled."),
    };
    VestingTypeInfo { vesting_type, name, description }
}

pub fn catalogue() -> Vec<VestingTypeInfo> {
    VestingType::ALL.iter().copied().map(describe).collect()
}
