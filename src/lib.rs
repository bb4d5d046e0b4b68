// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine

pub mod types;
pub mod error;
pub mod config;
pub mod adapter;
pub mod vesting;
pub mod categories;
pub mod plan;
pub mod supply;
pub mod metrics;
pub mod roi;
pub mod stress;
pub mod simulation;
pub mod planner;
pub mod export;

pub use types::*;
pub use error::{ConfigError, PlannerError, PreconditionError, ValidationError};
pub use config::{EngineParams, SimulationParams};
pub use categories::CategoryRepository;
pub use planner::{GeneratedPlan, TokenomicsPlanner};
pub use simulation::MarketSimulation;

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
static INIT_LOGGING: std::sync::Once = std::sync::Once::new();

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

fn error_to_js(err: PlannerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS numbers for token counts and ids: truncated, negatives become zero.
fn whole(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 { value.trunc() as u64 } else { 0 }
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen]
impl TokenomicsPlanner {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        #[cfg(target_arch = "wasm32")]
        INIT_LOGGING.call_once(|| {
            console_error_panic_hook::set_once();
            tracing_wasm::set_as_global_default();
        });

        TokenomicsPlanner::with_seed(seed as u64)
    }

    #[wasm_bindgen(js_name = setTotalTokens)]
    pub fn js_set_total_tokens(&mut self, total: f64) {
        self.set_total_tokens(whole(total));
    }

    #[wasm_bindgen(js_name = setTokenPrice)]
    pub fn js_set_token_price(&mut self, price: f64) {
        self.set_token_price(price);
    }

    #[wasm_bindgen(js_name = setInvestmentAmount)]
    pub fn js_set_investment_amount(&mut self, amount: f64) {
        self.set_investment_amount(amount);
    }

    #[wasm_bindgen(js_name = setVestingEmphasis)]
    pub fn js_set_vesting_emphasis(&mut self, emphasis: &str) {
        self.apply_emphasis(VestingEmphasis::parse(emphasis));
    }

    #[wasm_bindgen(js_name = getCategories)]
    pub fn js_get_categories(&self) -> Result<JsValue, JsValue> {
        to_js(self.categories().categories())
    }

    /// Sum of category shares; a plan can be generated only at exactly 100.
    #[wasm_bindgen(js_name = totalPercentage)]
    pub fn js_total_percentage(&self) -> Result<f64, JsValue> {
        self.categories().total_percentage().map_err(|e| error_to_js(e.into()))
    }

    /// Returns the new category's id.
    #[wasm_bindgen(js_name = addCategory)]
    pub fn js_add_category(&mut self, draft: JsValue) -> Result<f64, JsValue> {
        let draft: CategoryDraft = from_js(draft)?;
        let id = self.add_category(draft).map_err(error_to_js)?;
        Ok(id.0 as f64)
    }

    #[wasm_bindgen(js_name = updateCategory)]
    pub fn js_update_category(&mut self, id: f64, draft: JsValue) -> Result<(), JsValue> {
        let draft: CategoryDraft = from_js(draft)?;
        self.update_category(CategoryId(whole(id)), draft).map_err(error_to_js)
    }

    #[wasm_bindgen(js_name = deleteCategory)]
    pub fn js_delete_category(&mut self, id: f64) -> Result<(), JsValue> {
        self.remove_category(CategoryId(whole(id))).map_err(error_to_js)
    }

    #[wasm_bindgen(js_name = generatePlan)]
    pub fn js_generate_plan(&mut self) -> Result<JsValue, JsValue> {
        let generated = self.generate().map_err(error_to_js)?;
        to_js(generated)
    }

    #[wasm_bindgen(js_name = projectRoi)]
    pub fn js_project_roi(&self) -> Result<JsValue, JsValue> {
        let roi = self.roi().map_err(error_to_js)?;
        to_js(&roi)
    }

    #[wasm_bindgen(js_name = runStressTest)]
    pub fn js_run_stress_test(&self) -> Result<JsValue, JsValue> {
        let result = self.stress_test().map_err(error_to_js)?;
        to_js(&result)
    }

    #[wasm_bindgen(js_name = runSimulation)]
    pub fn js_run_simulation(&self, seed: u32) -> Result<JsValue, JsValue> {
        let series = self.run_simulation(seed as u64).map_err(error_to_js)?;
        to_js(&series)
    }

    #[wasm_bindgen(js_name = vestingChart)]
    pub fn js_vesting_chart(&self) -> Result<JsValue, JsValue> {
        let plan = self.plan().ok_or_else(|| error_to_js(PreconditionError::NoPlan.into()))?;
        to_js(&export::vesting_chart(plan))
    }

    #[wasm_bindgen(js_name = exportReport)]
    pub fn js_export_report(&self) -> Result<JsValue, JsValue> {
        let report = self.report().map_err(error_to_js)?;
        to_js(&report)
    }
}

/// Display names and descriptions of the supported vesting curves.
#[wasm_bindgen(js_name = vestingTypes)]
pub fn js_vesting_types() -> Result<JsValue, JsValue> {
    to_js(&vesting::catalogue())
}
