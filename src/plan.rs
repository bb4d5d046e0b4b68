// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Allocation Validation & Plan Builder

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::adapter::{to_decimal, token_share};
use crate::error::ValidationError;
use crate::types::{Allocation, Category, Plan};
use crate::vesting;

/// Sum category percentages in fixed point. Rejects non-finite or
/// out-of-range shares.
pub fn total_percentage(categories: &[Category]) -> Result<Decimal, ValidationError> {
    categories.iter().try_fold(Decimal::ZERO, |acc, c| {
        percentage_of(c).map(|p| acc + p)
    })
}

fn percentage_of(category: &Category) -> Result<Decimal, ValidationError> {
    to_decimal(category.percentage)
        .filter(|p| *p >= Decimal::ZERO && *p <= dec!(100))
        .ok_or_else(|| ValidationError::InvalidPercentage {
            name: category.name.clone(),
            value: category.percentage,
        })
}

/// Validate the category set and derive every allocation and its schedule.
///
/// Token counts are floored once per category; schedules stay continuous.
/// Nothing is produced unless every check passes.
pub fn build(categories: &[Category], total_tokens: u64) -> Result<Plan, ValidationError> {
    let total = total_percentage(categories)?;
    if total != dec!(100) {
        tracing::warn!(%total, "plan rejected: percentages do not sum to 100");
        return Err(ValidationError::PercentageMismatch { total });
    }

    let mut allocations: Vec<Allocation> = Vec::with_capacity(categories.len());
    for category in categories {
        if allocations.iter().any(|a| a.category == category.name) {
            return Err(ValidationError::DuplicateCategoryName(category.name.clone()));
        }
        if category.vesting_period == 0 {
            return Err(ValidationError::InvalidVestingPeriod(category.name.clone()));
        }
        let tokens = token_share(total_tokens, percentage_of(category)?);
        allocations.push(Allocation {
            category: category.name.clone(),
            tokens,
            percentage: category.percentage,
            vesting_type: category.vesting_type,
            vesting_period: category.vesting_period,
            vesting_schedule: vesting::generate(
                category.vesting_type,
                tokens,
                category.vesting_period,
            ),
        });
    }

    tracing::info!(
        total_tokens,
        categories = allocations.len(),
        "tokenomics plan generated"
    );
    Ok(Plan { total_tokens, allocations })
}
