// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Holder ROI Projection

use crate::config::EngineParams;
use crate::types::{Plan, RoiCheckpoint, RoiProjection};

/// Holder return at each checkpoint month.
///
/// Callers re-run this after any change to the plan, the investment amount or
/// the price. Returns `None` when the investment or price is zero or not a
/// finite positive number.
pub fn recompute_roi(
    plan: &Plan,
    investment_amount: f64,
    token_price: f64,
    params: &EngineParams,
) -> Option<RoiProjection> {
    if !(investment_amount.is_finite() && investment_amount > 0.0)
        || !(token_price.is_finite() && token_price > 0.0)
    {
        return None;
    }

    let checkpoints = params
        .roi_checkpoints
        .iter()
        .map(|&month| {
            let released_tokens: f64 = plan
                .iter()
                .filter_map(|a| a.entry_or_last(month))
                .map(|e| e.cumulative_tokens)
                .sum();
            let token_value = released_tokens * token_price;
            RoiCheckpoint {
                month,
                released_tokens,
                token_value,
                roi: (token_value - investment_amount) / investment_amount * 100.0,
            }
        })
        .collect();

    Some(RoiProjection {
        investment_amount,
        token_price,
        tokens_received: investment_amount / token_price,
        checkpoints,
    })
}
