// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Error Types

use rust_decimal::Decimal;

use crate::types::CategoryId;

/// Rejected category edits and plan generation requests.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("total percentage must equal 100% (got {total}%)")]
    PercentageMismatch { total: Decimal },

    #[error("a category named \"{0}\" already exists")]
    DuplicateCategoryName(String),

    #[error("category field `{0}` is required")]
    MissingRequiredField(&'static str),

    #[error("category \"{name}\" has an invalid percentage ({value}); expected 0-100")]
    InvalidPercentage { name: String, value: f64 },

    #[error("category \"{0}\" must vest over at least one month")]
    InvalidVestingPeriod(String),

    #[error("no category with id {0}")]
    UnknownCategory(CategoryId),

    #[error("category id {0} is used more than once")]
    DuplicateCategoryId(CategoryId),
}

/// Actions invoked before their inputs exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionError {
    #[error("generate a tokenomics plan first")]
    NoPlan,
}

/// Model parameters that cannot drive a meaningful run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("parameter `{name}` must be finite and non-negative (got {value})")]
    OutOfRange { name: &'static str, value: f64 },

    #[error("bounds `{name}` are inverted: min {min} > max {max}")]
    InvertedBounds { name: &'static str, min: f64, max: f64 },

    #[error("probability `{name}` must lie in 0..=1 (got {value})")]
    InvalidProbability { name: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlannerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
