#[cfg(test)]
mod tests {
    use tokenomics_engine::*;

    fn draft(name: &str, pct: f64, vesting_type: VestingType, period: u32) -> CategoryDraft {
        CategoryDraft {
            name: name.into(),
            color: "#36A2EB".into(),
            percentage: pct,
            vesting_type: Some(vesting_type),
            vesting_period: period,
        }
    }

    fn planner_with(total: u64, price: f64, drafts: &[CategoryDraft]) -> TokenomicsPlanner {
        let mut planner = TokenomicsPlanner::with_seed(42);
        planner.set_total_tokens(total);
        planner.set_token_price(price);
        let mut repo = CategoryRepository::empty();
        for d in drafts {
            repo = repo.add(d.clone()).unwrap().0;
        }
        planner.replace_categories(repo);
        planner
    }

    // ========== Allocation & Vesting ==========

    #[test]
    fn test_team_twenty_percent_linear() {
        let mut planner = TokenomicsPlanner::with_seed(1);
        planner.set_total_tokens(1_000_000);
        planner.set_token_price(0.05);
        let generated = planner.generate().unwrap();

        let team = generated.plan.get("Team").unwrap();
        assert_eq!(team.tokens, 200_000);
        assert_eq!(team.cumulative_at(12), 100_000.0);
        assert_eq!(team.cumulative_at(24), 200_000.0);
        assert_eq!(team.vesting_schedule.len(), 24);
    }

    #[test]
    fn test_exponential_never_fully_vests() {
        let mut planner = planner_with(100_000, 1.0, &[draft("Community", 100.0, VestingType::Exponential, 12)]);
        let generated = planner.generate().unwrap();
        let m12 = generated.plan.get("Community").unwrap().cumulative_at(12);
        assert!((m12 - 95_021.29).abs() < 0.01, "month 12 = {}", m12);
        assert!(m12 < 100_000.0);
    }

    #[test]
    fn test_cliff_releases_everything_at_period_end() {
        let mut planner = planner_with(
            1_000,
            1.0,
            &[
                draft("Team", 50.0, VestingType::Cliff, 6),
                draft("Community", 50.0, VestingType::Linear, 6),
            ],
        );
        let generated = planner.generate().unwrap();
        let team = generated.plan.get("Team").unwrap();
        for m in 1..6 {
            assert_eq!(team.cumulative_at(m), 0.0);
        }
        assert_eq!(team.cumulative_at(6), 500.0);
        assert_eq!(generated.supply.newly_released[5].value, 500.0 + (500.0 - 500.0 * 5.0 / 6.0));
    }

    #[test]
    fn test_schedules_are_non_decreasing() {
        for vesting_type in VestingType::ALL {
            let mut planner = planner_with(1_000_000, 0.1, &[draft("Community", 100.0, vesting_type, 36)]);
            let generated = planner.generate().unwrap();
            let schedule = &generated.plan.get("Community").unwrap().vesting_schedule;
            for pair in schedule.windows(2) {
                assert!(pair[1].cumulative_tokens >= pair[0].cumulative_tokens, "{} not monotone", vesting_type);
            }
        }
    }

    // ========== Percentage Gate ==========

    #[test]
    fn test_fractional_percentages_sum_exactly() {
        let mut planner = planner_with(
            999,
            1.0,
            &[
                draft("Team", 33.3, VestingType::Linear, 12),
                draft("Investors", 33.3, VestingType::Linear, 12),
                draft("Community", 33.4, VestingType::Linear, 12),
            ],
        );
        assert!(planner.generate().is_ok());
    }

    #[test]
    fn test_mismatch_blocks_generation() {
        let mut planner = planner_with(1_000, 1.0, &[draft("Team", 99.0, VestingType::Linear, 12)]);
        let err = planner.generate().unwrap_err();
        assert!(matches!(err, PlannerError::Validation(ValidationError::PercentageMismatch { .. })));
        assert!(planner.plan().is_none());
    }

    // ========== Market Metrics & Stress ==========

    #[test]
    fn test_stress_test_is_exact() {
        let mut planner = TokenomicsPlanner::with_seed(5);
        planner.set_total_tokens(1_000_000);
        planner.set_token_price(0.05);
        planner.generate().unwrap();
        let stress = planner.stress_test().unwrap();
        let supply = &planner.generated().unwrap().supply.circulating_supply;

        assert_eq!(stress.stressed_price, 0.05 * 0.7);
        assert_eq!(stress.stressed_market_cap.len(), supply.len());
        for (cap, circ) in stress.stressed_market_cap.iter().zip(supply) {
            assert_eq!(cap.value, circ.value * (0.05 * 0.7));
        }
    }

    #[test]
    fn test_inflation_skips_empty_months() {
        let mut planner = planner_with(
            1_000,
            1.0,
            &[
                draft("Team", 50.0, VestingType::Cliff, 4),
                draft("Community", 50.0, VestingType::Cliff, 8),
            ],
        );
        let generated = planner.generate().unwrap();
        // Supply is zero for months 1-3, so the first rate is for month 5.
        let months: Vec<u32> = generated.annualized_inflation.iter().map(|p| p.month).collect();
        assert_eq!(months.first(), Some(&5));
        let m8 = generated.annualized_inflation.iter().find(|p| p.month == 8).unwrap();
        assert!((m8.value - (2.0_f64.powi(12) - 1.0) * 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_market_cap_tracks_supply() {
        let mut planner = TokenomicsPlanner::with_seed(9);
        planner.set_total_tokens(2_000_000);
        planner.set_token_price(0.25);
        let generated = planner.generate().unwrap();
        for (cap, circ) in generated.market_cap.iter().zip(&generated.supply.circulating_supply) {
            assert_eq!(cap.month, circ.month);
            assert_eq!(cap.value, circ.value * 0.25);
        }
        assert!((generated.treasury_reserves - 50_000.0).abs() < 1e-9);
    }

    // ========== ROI ==========

    #[test]
    fn test_roi_twenty_percent() {
        let mut planner = planner_with(480_000, 0.05, &[draft("Investors", 100.0, VestingType::Linear, 24)]);
        planner.set_investment_amount(10_000.0);
        planner.generate().unwrap();
        let roi = planner.roi().unwrap().unwrap();

        assert!((roi.tokens_received - 200_000.0).abs() < 1e-6);
        let m12 = roi.checkpoints.iter().find(|c| c.month == 12).unwrap();
        assert!((m12.token_value - 12_000.0).abs() < 1e-6);
        assert!((m12.roi - 20.0).abs() < 1e-9);
    }

    // ========== Market Simulation ==========

    #[test]
    fn test_simulation_reproducible_from_seed() {
        let mut planner = TokenomicsPlanner::with_seed(0);
        planner.set_total_tokens(1_000_000);
        planner.set_token_price(0.05);
        planner.generate().unwrap();

        let a = planner.run_simulation(1234).unwrap();
        let b = planner.run_simulation(1234).unwrap();
        assert_eq!(a.len(), 36);
        assert_eq!(a, b);
    }

    #[test]
    fn test_simulation_without_plan_fails() {
        let planner = TokenomicsPlanner::with_seed(0);
        assert_eq!(
            planner.run_simulation(1).unwrap_err(),
            PlannerError::Precondition(PreconditionError::NoPlan)
        );
    }

    #[test]
    fn test_simulation_price_floor_holds() {
        let mut planner = planner_with(10_000_000, 2.0, &[draft("Community", 100.0, VestingType::Logarithmic, 6)]);
        planner.generate().unwrap();
        for seed in 0..100 {
            let series = planner.run_simulation(seed).unwrap();
            for month in &series {
                assert!(month.price >= 2.0 * 0.1);
                assert!(month.volatility >= 0.05 && month.volatility <= 0.5);
            }
        }
    }

    #[test]
    fn test_regeneration_advances_demand_noise() {
        let mut planner = TokenomicsPlanner::with_seed(7);
        planner.set_total_tokens(1_000_000);
        planner.set_token_price(0.05);
        let first = planner.generate().unwrap().supply.market_demand.clone();
        let second = planner.generate().unwrap().supply.market_demand.clone();
        assert_ne!(first, second);

        let mut replay = TokenomicsPlanner::with_seed(7);
        replay.set_total_tokens(1_000_000);
        replay.set_token_price(0.05);
        assert_eq!(replay.generate().unwrap().supply.market_demand, first);
    }

    // ========== Export ==========

    #[test]
    fn test_report_serializes() {
        let mut planner = TokenomicsPlanner::with_seed(3);
        planner.set_total_tokens(1_000_000);
        planner.set_token_price(0.05);
        planner.set_investment_amount(5_000.0);
        planner.generate().unwrap();

        let report = planner.report().unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"].as_array().map(|a| a.len()), Some(5));
        assert_eq!(json["roi"]["checkpoints"].as_array().map(|a| a.len()), Some(4));
        assert_eq!(json["kpi"]["total_supply"], 1_000_000);
    }
}
