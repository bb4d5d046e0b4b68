// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner Engine - Supply Aggregation

//! Merges per-category schedules into monthly supply and buying-pressure
//! series over `1..=max(vesting_period)`.
//!
//! The demand term here is a flat heuristic (a fixed fraction of total supply
//! plus noise). It is deliberately independent of the simulator's model.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::EngineParams;
use crate::types::{
    AccumulatedBuyingPressureSeries, CirculatingSupplySeries, NetBuyingPressureSeries, Plan,
    SeriesPoint,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplySeries {
    pub newly_released: Vec<SeriesPoint>,
    pub circulating_supply: CirculatingSupplySeries,
    pub market_demand: Vec<SeriesPoint>,
    pub net_buying_pressure: NetBuyingPressureSeries,
    pub accumulated_buying_pressure: AccumulatedBuyingPressureSeries,
}

/// Draw one month of heuristic demand: total * ratio * (1 + U(0, noise)).
pub fn market_demand<R: Rng + ?Sized>(rng: &mut R, total_tokens: u64, params: &EngineParams) -> f64 {
    total_tokens as f64 * params.demand_ratio * (1.0 + rng.gen::<f64>() * params.demand_noise)
}

/// Running sum in month order. Always recomputed from the full series.
pub fn accumulate(net_pressure: &[SeriesPoint]) -> AccumulatedBuyingPressureSeries {
    let mut accumulated = 0.0;
    net_pressure
        .iter()
        .map(|p| {
            accumulated += p.value;
            SeriesPoint::new(p.month, accumulated)
        })
        .collect()
}

/// Build every supply-side series for a plan. Draws exactly one random
/// number per month, in month order.
pub fn aggregate<R: Rng + ?Sized>(plan: &Plan, rng: &mut R, params: &EngineParams) -> SupplySeries {
    let months = plan.max_vesting_period();
    let mut series = SupplySeries::default();

    for month in 1..=months {
        let released = plan.newly_released(month);
        let demand = market_demand(rng, plan.total_tokens, params);

        series.newly_released.push(SeriesPoint::new(month, released));
        series.circulating_supply.push(SeriesPoint::new(month, plan.circulating_at(month)));
        series.market_demand.push(SeriesPoint::new(month, demand));
        series.net_buying_pressure.push(SeriesPoint::new(month, demand - released));
    }
    series.accumulated_buying_pressure = accumulate(&series.net_buying_pressure);

    tracing::debug!(months, "supply series aggregated");
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan;
    use crate::types::{Category, CategoryId, VestingType};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn two_category_plan() -> Plan {
        let categories = vec![
            Category {
                id: CategoryId(1),
                name: "Team".into(),
                color: "#FF6384".into(),
                percentage: 40.0,
                vesting_type: VestingType::Cliff,
                vesting_period: 6,
            },
            Category {
                id: CategoryId(2),
                name: "Community".into(),
                color: "#9966FF".into(),
                percentage: 60.0,
                vesting_type: VestingType::Linear,
                vesting_period: 12,
            },
        ];
        plan::build(&categories, 1_200_000).unwrap()
    }

    #[test]
    fn series_span_longest_period() {
        let plan = two_category_plan();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let series = aggregate(&plan, &mut rng, &EngineParams::default());
        assert_eq!(series.circulating_supply.len(), 12);
        assert_eq!(series.circulating_supply[0].month, 1);
        assert_eq!(series.circulating_supply[11].month, 12);
    }

    #[test]
    fn finished_categories_stay_in_circulation() {
        let plan = two_category_plan();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let series = aggregate(&plan, &mut rng, &EngineParams::default());
        // Month 6: cliff (480k) + half of linear (360k).
        assert_eq!(series.circulating_supply[5].value, 480_000.0 + 360_000.0);
        assert_eq!(series.newly_released[5].value, 480_000.0 + 60_000.0);
        // Month 12: the cliff category no longer releases but still circulates.
        assert_eq!(series.circulating_supply[11].value, 1_200_000.0);
        assert_eq!(series.newly_released[11].value, 60_000.0);
    }

    #[test]
    fn newly_released_sums_to_final_supply() {
        let plan = two_category_plan();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let series = aggregate(&plan, &mut rng, &EngineParams::default());
        let released: f64 = series.newly_released.iter().map(|p| p.value).sum();
        assert!((released - 1_200_000.0).abs() < 1e-6);
    }

    #[test]
    fn demand_stays_within_noise_band() {
        let plan = two_category_plan();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let series = aggregate(&plan, &mut rng, &EngineParams::default());
        for p in &series.market_demand {
            assert!(p.value >= 12_000.0 && p.value < 13_200.0, "month {}: {}", p.month, p.value);
        }
        for (net, (demand, released)) in series
            .net_buying_pressure
            .iter()
            .zip(series.market_demand.iter().zip(&series.newly_released))
        {
            assert_eq!(net.value, demand.value - released.value);
        }
    }

    #[test]
    fn accumulated_is_sequential_prefix_sum() {
        let net = vec![
            SeriesPoint::new(1, 10.0),
            SeriesPoint::new(2, -4.0),
            SeriesPoint::new(3, 7.5),
        ];
        let acc = accumulate(&net);
        let values: Vec<f64> = acc.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![10.0, 6.0, 13.5]);

        let reordered = vec![net[2], net[0], net[1]];
        let acc_reordered = accumulate(&reordered);
        assert_ne!(acc_reordered[0].value, acc[0].value);
    }

    #[test]
    fn same_seed_same_demand() {
        let plan = two_category_plan();
        let params = EngineParams::default();
        let a = aggregate(&plan, &mut ChaCha8Rng::seed_from_u64(42), &params);
        let b = aggregate(&plan, &mut ChaCha8Rng::seed_from_u64(42), &params);
        let c = aggregate(&plan, &mut ChaCha8Rng::seed_from_u64(43), &params);
        assert_eq!(a, b);
        assert_ne!(a.market_demand, c.market_demand);
    }
}
