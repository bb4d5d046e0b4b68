// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Planner CLI - Scenario Files

use std::path::Path;

use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};
use tokenomics_engine::*;

/// Planner inputs read from a JSON file. Omitted fields keep their defaults;
/// omitted `categories` means the five default categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    pub total_tokens: u64,
    pub token_price: f64,
    pub investment_amount: f64,
    pub emphasis: Option<VestingEmphasis>,
    pub categories: Option<Vec<CategoryDraft>>,
    pub params: EngineParams,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: "default".into(),
            total_tokens: 1_000_000_000,
            token_price: 0.05,
            investment_amount: 10_000.0,
            emphasis: None,
            categories: None,
            params: EngineParams::default(),
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading scenario {}", path.display()))?;
        let scenario = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("parsing scenario {}", path.display()))?;
        Ok(scenario)
    }

    /// A planner loaded with this scenario's inputs, not yet generated.
    pub fn planner(&self, seed: u64) -> Result<TokenomicsPlanner, PlannerError> {
        let mut planner = TokenomicsPlanner::with_params(seed, self.params.clone())?;
        planner.set_total_tokens(self.total_tokens);
        planner.set_token_price(self.token_price);
        planner.set_investment_amount(self.investment_amount);

        if let Some(drafts) = &self.categories {
            let mut repo = CategoryRepository::empty();
            for draft in drafts {
                let (next, _) = repo.add(draft.clone())?;
                repo = next;
            }
            planner.replace_categories(repo);
        }
        if let Some(emphasis) = self.emphasis {
            planner.apply_emphasis(emphasis);
        }
        Ok(planner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let scenario: Scenario = serde_json::from_str(
            r#"{ "token_price": 0.2, "params": { "stress_shock": 0.5 } }"#,
        )
        .unwrap();
        assert_eq!(scenario.total_tokens, 1_000_000_000);
        assert_eq!(scenario.token_price, 0.2);
        assert_eq!(scenario.params.stress_shock, 0.5);
        assert_eq!(scenario.params.demand_ratio, 0.01);
    }

    #[test]
    fn custom_categories_replace_defaults() {
        let scenario: Scenario = serde_json::from_str(
            r##"{
                "categories": [
                    { "name": "Team", "color": "#FF6384", "percentage": 40, "vesting_type": "cliff", "vesting_period": 12 },
                    { "name": "Public", "color": "#36A2EB", "percentage": 60, "vesting_type": "linear" }
                ]
            }"##,
        )
        .unwrap();
        let mut planner = scenario.planner(1).unwrap();
        assert_eq!(planner.categories().len(), 2);
        let generated = planner.generate().unwrap();
        assert_eq!(generated.plan.get("Public").map(|a| a.vesting_period), Some(24));
    }

    #[test]
    fn invalid_category_rejected() {
        let scenario = Scenario {
            categories: Some(vec![CategoryDraft {
                name: "Team".into(),
                color: "#FF6384".into(),
                percentage: 120.0,
                vesting_type: Some(VestingType::Linear),
                vesting_period: 12,
            }]),
            ..Scenario::default()
        };
        assert!(matches!(scenario.planner(0), Err(PlannerError::Validation(_))));
    }
}
