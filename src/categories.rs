// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Category Repository

//! Identity-keyed category collection.
//!
//! Every edit returns a new repository; the receiver is never modified, so a
//! rejected edit leaves the previous collection intact. Name uniqueness and
//! required fields are enforced here, the percentage total is enforced later
//! when a plan is built.

use serde::{Deserialize, Serialize};

use crate::adapter::from_decimal;
use crate::error::ValidationError;
use crate::plan;
use crate::types::{Category, CategoryDraft, CategoryId, VestingEmphasis, VestingType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRepository {
    categories: Vec<Category>,
    next_id: u64,
}

impl Default for CategoryRepository {
    fn default() -> Self {
        Self::with_default_categories()
    }
}

impl CategoryRepository {
    pub fn empty() -> Self {
        Self { categories: Vec::new(), next_id: 1 }
    }

    /// Team 20%, Marketing 15%, Development 25%, Investors 10%, Community 30%,
    /// all linear over 24 months.
    pub fn with_default_categories() -> Self {
        let defaults = [
            ("Team", "#FF6384", 20.0),
            ("Marketing", "#36A2EB", 15.0),
            ("Development", "#FFCE56", 25.0),
            ("Investors", "#4BC0C0", 10.0),
            ("Community", "#9966FF", 30.0),
        ];
        let categories = defaults
            .iter()
            .enumerate()
            .map(|(i, (name, color, percentage))| Category {
                id: CategoryId(i as u64 + 1),
                name: name.to_string(),
                color: color.to_string(),
                percentage: *percentage,
                vesting_type: VestingType::Linear,
                vesting_period: 24,
            })
            .collect::<Vec<_>>();
        let next_id = categories.len() as u64 + 1;
        Self { categories, next_id }
    }

    /// Rebuild a repository from an existing list, validating every entry.
    /// Ids must be unique.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, ValidationError> {
        let mut repo = Self::empty();
        for category in categories {
            if repo.get(category.id).is_some() {
                return Err(ValidationError::DuplicateCategoryId(category.id));
            }
            let draft = CategoryDraft {
                name: category.name,
                color: category.color,
                percentage: category.percentage,
                vesting_type: Some(category.vesting_type),
                vesting_period: category.vesting_period,
            };
            let validated = repo.validate(&draft, None)?;
            repo.categories.push(Category { id: category.id, ..validated });
            repo.next_id = repo.next_id.max(category.id.0 + 1);
        }
        Ok(repo)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Summed in fixed point, so 33.3 + 33.3 + 33.4 reports exactly 100.
    pub fn total_percentage(&self) -> Result<f64, ValidationError> {
        plan::total_percentage(&self.categories).map(from_decimal)
    }

    pub fn add(&self, draft: CategoryDraft) -> Result<(Self, CategoryId), ValidationError> {
        let id = CategoryId(self.next_id);
        let category = Category { id, ..self.validate(&draft, None)? };
        let mut next = self.clone();
        next.categories.push(category);
        next.next_id += 1;
        tracing::debug!(%id, name = %draft.name, "category added");
        Ok((next, id))
    }

    pub fn update(&self, id: CategoryId, draft: CategoryDraft) -> Result<Self, ValidationError> {
        let index = self.index_of(id)?;
        let category = Category { id, ..self.validate(&draft, Some(id))? };
        let mut next = self.clone();
        next.categories[index] = category;
        tracing::debug!(%id, name = %draft.name, "category updated");
        Ok(next)
    }

    pub fn remove(&self, id: CategoryId) -> Result<Self, ValidationError> {
        let index = self.index_of(id)?;
        let mut next = self.clone();
        next.categories.remove(index);
        tracing::debug!(%id, "category removed");
        Ok(next)
    }

    /// Rewrite every category's curve and period from the preset table.
    pub fn apply_emphasis(&self, emphasis: VestingEmphasis) -> Self {
        let mut next = self.clone();
        for category in &mut next.categories {
            let (vesting_type, vesting_period) = emphasis_terms(emphasis, &category.name);
            category.vesting_type = vesting_type;
            category.vesting_period = vesting_period;
        }
        next
    }

    fn index_of(&self, id: CategoryId) -> Result<usize, ValidationError> {
        self.categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(ValidationError::UnknownCategory(id))
    }

    /// Returns the validated category with a placeholder id.
    fn validate(
        &self,
        draft: &CategoryDraft,
        editing: Option<CategoryId>,
    ) -> Result<Category, ValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingRequiredField("name"));
        }
        if draft.color.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField("color"));
        }
        // A zero share counts as an unfilled field.
        if draft.percentage == 0.0 {
            return Err(ValidationError::MissingRequiredField("percentage"));
        }
        let vesting_type = match draft.vesting_type {
            Some(t) if t.is_supported() => t,
            _ => return Err(ValidationError::MissingRequiredField("vesting_type")),
        };
        if !draft.percentage.is_finite() || !(0.0..=100.0).contains(&draft.percentage) {
            return Err(ValidationError::InvalidPercentage {
                name: name.to_string(),
                value: draft.percentage,
            });
        }
        if draft.vesting_period == 0 {
            return Err(ValidationError::InvalidVestingPeriod(name.to_string()));
        }
        if self.categories.iter().any(|c| c.name == name && Some(c.id) != editing) {
            return Err(ValidationError::DuplicateCategoryName(name.to_string()));
        }
        Ok(Category {
            id: CategoryId(0),
            name: name.to_string(),
            color: draft.color.trim().to_string(),
            percentage: draft.percentage,
            vesting_type,
            vesting_period: draft.vesting_period,
        })
    }
}

/// Preset lookup table: (curve, months) for a category under an emphasis.
pub fn emphasis_terms(emphasis: VestingEmphasis, category: &str) -> (VestingType, u32) {
    use VestingType::*;
    match (emphasis, category) {
        (VestingEmphasis::Team, "Team") => (Logarithmic, 48),
        (VestingEmphasis::Team, "Investors") => (Cliff, 12),
        (VestingEmphasis::Team, _) => (Linear, 24),

        (VestingEmphasis::Investors, "Investors") => (Linear, 12),
        (VestingEmphasis::Investors, "Team") => (Cliff, 24),
        (VestingEmphasis::Investors, _) => (Exponential, 36),

        (VestingEmphasis::Community, "Community") => (Linear, 12),
        (VestingEmphasis::Community, "Team" | "Investors") => (Cliff, 18),
        (VestingEmphasis::Community, _) => (Logarithmic, 36),

        (VestingEmphasis::Balanced, _) => (Linear, 24),
    }
}
