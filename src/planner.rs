// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Planner Pipeline

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;

use crate::categories::CategoryRepository;
use crate::config::EngineParams;
use crate::error::{PlannerError, PreconditionError};
use crate::export::PlanReport;
use crate::metrics;
use crate::plan;
use crate::roi;
use crate::simulation;
use crate::stress;
use crate::supply::{self, SupplySeries};
use crate::types::*;

// ─── Generated Outputs ───────────────────────────────────────────────────────

/// Everything one "generate" action produces. Replaced as a whole on every
/// regeneration; never patched.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GeneratedPlan {
    pub plan: Plan,
    pub token_price: f64,
    pub supply: SupplySeries,
    pub market_cap: MarketCapSeries,
    pub annualized_inflation: AnnualizedInflationSeries,
    pub treasury_reserves: f64,
    pub kpi: KpiSnapshot,
    pub stress_test: StressTestResult,
}

/// Derive every plan-level series from a validated plan.
pub fn analyze<R: rand::Rng + ?Sized>(
    plan: Plan,
    token_price: f64,
    rng: &mut R,
    params: &EngineParams,
) -> GeneratedPlan {
    let supply = supply::aggregate(&plan, rng, params);
    let market_cap = metrics::market_cap(&supply.circulating_supply, token_price);
    let annualized_inflation = metrics::annualized_inflation(&supply.circulating_supply);
    let treasury_reserves = metrics::treasury_reserves(plan.total_tokens, token_price, params);
    let kpi = metrics::kpi_snapshot(
        plan.total_tokens,
        token_price,
        &supply.circulating_supply,
        &market_cap,
        &annualized_inflation,
        treasury_reserves,
    );
    let stress_test = stress::run_stress_test(&supply.circulating_supply, token_price, params);
    GeneratedPlan {
        plan,
        token_price,
        supply,
        market_cap,
        annualized_inflation,
        treasury_reserves,
        kpi,
        stress_test,
    }
}

// ─── TokenomicsPlanner ───────────────────────────────────────────────────────

/// Inputs plus the most recent generated plan.
///
/// Each action recomputes its dependent outputs in full. Editing the category
/// set discards the generated plan.
#[wasm_bindgen]
pub struct TokenomicsPlanner {
    pub(crate) total_tokens: u64,
    pub(crate) token_price: f64,
    pub(crate) investment_amount: f64,
    pub(crate) emphasis: VestingEmphasis,
    pub(crate) categories: CategoryRepository,
    pub(crate) params: EngineParams,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) generated: Option<GeneratedPlan>,
}

// ─── Internal Logic (Testable, pure Rust) ────────────────────────────────────

impl TokenomicsPlanner {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            total_tokens: 0,
            token_price: 0.0,
            investment_amount: 0.0,
            emphasis: VestingEmphasis::Balanced,
            categories: CategoryRepository::default(),
            params: EngineParams::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            generated: None,
        }
    }

    pub fn with_params(seed: u64, params: EngineParams) -> Result<Self, PlannerError> {
        params.validate()?;
        Ok(Self { params, ..Self::with_seed(seed) })
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn token_price(&self) -> f64 {
        self.token_price
    }

    pub fn investment_amount(&self) -> f64 {
        self.investment_amount
    }

    pub fn emphasis(&self) -> VestingEmphasis {
        self.emphasis
    }

    pub fn set_total_tokens(&mut self, total_tokens: u64) {
        self.total_tokens = total_tokens;
    }

    /// Negative or non-finite input is stored as zero.
    pub fn set_token_price(&mut self, price: f64) {
        self.token_price = sanitize(price);
    }

    pub fn set_investment_amount(&mut self, amount: f64) {
        self.investment_amount = sanitize(amount);
    }

    pub fn categories(&self) -> &CategoryRepository {
        &self.categories
    }

    pub fn generated(&self) -> Option<&GeneratedPlan> {
        self.generated.as_ref()
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.generated.as_ref().map(|g| &g.plan)
    }

    fn require_generated(&self) -> Result<&GeneratedPlan, PreconditionError> {
        self.generated.as_ref().ok_or(PreconditionError::NoPlan)
    }

    // ─── Category edits ──────────────────────────────────────────────────────

    pub fn replace_categories(&mut self, categories: CategoryRepository) {
        self.categories = categories;
        self.generated = None;
    }

    pub fn add_category(&mut self, draft: CategoryDraft) -> Result<CategoryId, PlannerError> {
        let (next, id) = self.categories.add(draft).map_err(reject)?;
        self.replace_categories(next);
        Ok(id)
    }

    pub fn update_category(&mut self, id: CategoryId, draft: CategoryDraft) -> Result<(), PlannerError> {
        let next = self.categories.update(id, draft).map_err(reject)?;
        self.replace_categories(next);
        Ok(())
    }

    pub fn remove_category(&mut self, id: CategoryId) -> Result<(), PlannerError> {
        let next = self.categories.remove(id).map_err(reject)?;
        self.replace_categories(next);
        Ok(())
    }

    pub fn apply_emphasis(&mut self, emphasis: VestingEmphasis) {
        self.emphasis = emphasis;
        let next = self.categories.apply_emphasis(emphasis);
        self.replace_categories(next);
    }

    // ─── Pipeline actions ────────────────────────────────────────────────────

    /// Validate the categories and rebuild the plan and every derived series.
    /// A rejected generation keeps the previous outputs.
    pub fn generate(&mut self) -> Result<&GeneratedPlan, PlannerError> {
        let plan = plan::build(self.categories.categories(), self.total_tokens).map_err(reject)?;
        let generated = analyze(plan, self.token_price, &mut self.rng, &self.params);
        Ok(self.generated.insert(generated))
    }

    /// ROI for the current investment and price. `Ok(None)` when either is zero.
    pub fn roi(&self) -> Result<Option<RoiProjection>, PlannerError> {
        let generated = self.require_generated()?;
        Ok(roi::recompute_roi(
            &generated.plan,
            self.investment_amount,
            self.token_price,
            &self.params,
        ))
    }

    /// Stress test at the current price against the generated supply series.
    pub fn stress_test(&self) -> Result<StressTestResult, PlannerError> {
        let generated = self.require_generated()?;
        Ok(stress::run_stress_test(
            &generated.supply.circulating_supply,
            self.token_price,
            &self.params,
        ))
    }

    pub fn run_simulation(&self, seed: u64) -> Result<SimulationSeries, PlannerError> {
        Ok(simulation::run_simulation(
            self.plan(),
            self.token_price,
            seed,
            &self.params.simulation,
        )?)
    }

    pub fn report(&self) -> Result<PlanReport, PlannerError> {
        let generated = self.require_generated()?;
        Ok(PlanReport::new(generated, self.roi()?))
    }
}

impl Default for TokenomicsPlanner {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

fn reject(err: crate::error::ValidationError) -> PlannerError {
    tracing::warn!(error = %err, "action rejected");
    PlannerError::from(err)
}
