// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Export Records

//! Flat, serializable views of generated outputs for renderers and file
//! exporters. Nothing here feeds back into the engine.

use serde::Serialize;

use crate::planner::GeneratedPlan;
use crate::types::*;

// ─── Plan Summary ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanSummaryRow {
    pub category: String,
    pub tokens: u64,
    pub percentage: f64,
    pub vesting_type: VestingType,
    pub vesting_period: u32,
}

pub fn plan_summary(plan: &Plan) -> Vec<PlanSummaryRow> {
    plan.iter()
        .map(|a| PlanSummaryRow {
            category: a.category.clone(),
            tokens: a.tokens,
            percentage: a.percentage,
            vesting_type: a.vesting_type,
            vesting_period: a.vesting_period,
        })
        .collect()
}

// ─── Vesting Chart ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryRelease {
    pub category: String,
    pub cumulative_tokens: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VestingChartPoint {
    pub month: u32,
    pub releases: Vec<CategoryRelease>,
}

/// One point per month from 0 to the longest period, with every category's
/// cumulative release (zero at month 0, held once its schedule ends).
pub fn vesting_chart(plan: &Plan) -> Vec<VestingChartPoint> {
    (0..=plan.max_vesting_period())
        .map(|month| VestingChartPoint {
            month,
            releases: plan
                .iter()
                .map(|a| CategoryRelease {
                    category: a.category.clone(),
                    cumulative_tokens: a.cumulative_at(month),
                })
                .collect(),
        })
        .collect()
}

// ─── Full Report ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub summary: Vec<PlanSummaryRow>,
    pub plan: Plan,
    pub net_buying_pressure: NetBuyingPressureSeries,
    pub accumulated_buying_pressure: AccumulatedBuyingPressureSeries,
    pub circulating_supply: CirculatingSupplySeries,
    pub market_cap: MarketCapSeries,
    pub annualized_inflation: AnnualizedInflationSeries,
    pub kpi: KpiSnapshot,
    pub stress_test: StressTestResult,
    pub roi: Option<RoiProjection>,
}

impl PlanReport {
    pub fn new(generated: &GeneratedPlan, roi: Option<RoiProjection>) -> Self {
        Self {
            summary: plan_summary(&generated.plan),
            plan: generated.plan.clone(),
            net_buying_pressure: generated.supply.net_buying_pressure.clone(),
            accumulated_buying_pressure: generated.supply.accumulated_buying_pressure.clone(),
            circulating_supply: generated.supply.circulating_supply.clone(),
            market_cap: generated.market_cap.clone(),
            annualized_inflation: generated.annualized_inflation.clone(),
            kpi: generated.kpi.clone(),
            stress_test: generated.stress_test.clone(),
            roi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan;

    fn sample_plan() -> Plan {
        let categories = vec![
            Category {
                id: CategoryId(1),
                name: "Team".into(),
                color: "#FF6384".into(),
                percentage: 50.0,
                vesting_type: VestingType::Cliff,
                vesting_period: 2,
            },
            Category {
                id: CategoryId(2),
                name: "Community".into(),
                color: "#9966FF".into(),
                percentage: 50.0,
                vesting_type: VestingType::Linear,
                vesting_period: 4,
            },
        ];
        plan::build(&categories, 1_000).unwrap()
    }

    #[test]
    fn chart_starts_at_zero_and_holds() {
        let chart = vesting_chart(&sample_plan());
        assert_eq!(chart.len(), 5);
        assert!(chart[0].releases.iter().all(|r| r.cumulative_tokens == 0.0));
        let team_at = |m: usize| chart[m].releases[0].cumulative_tokens;
        assert_eq!(team_at(1), 0.0);
        assert_eq!(team_at(2), 500.0);
        assert_eq!(team_at(4), 500.0);
        assert_eq!(chart[4].releases[1].cumulative_tokens, 500.0);
    }

    #[test]
    fn summary_rows_serialize_flat() {
        let rows = plan_summary(&sample_plan());
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["category"], "Team");
        assert_eq!(json[0]["vesting_type"], "cliff");
        assert_eq!(json[1]["tokens"], 500);
    }
}
