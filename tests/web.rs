#![cfg(target_arch = "wasm32")]

use tokenomics_engine::TokenomicsPlanner;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn generate_through_js_interface() {
    let mut planner = TokenomicsPlanner::new(1);
    planner.js_set_total_tokens(1_000_000.0);
    planner.js_set_token_price(0.05);
    let plan = planner.js_generate_plan().unwrap();
    assert!(plan.is_object());
    assert!(planner.js_run_simulation(7).unwrap().is_object());
}

#[wasm_bindgen_test]
fn downstream_calls_fail_without_plan() {
    let planner = TokenomicsPlanner::new(1);
    assert!(planner.js_run_stress_test().is_err());
    assert!(planner.js_vesting_chart().is_err());
}

#[wasm_bindgen_test]
fn malformed_category_is_rejected() {
    let mut planner = TokenomicsPlanner::new(1);
    assert!(planner.js_add_category(JsValue::from_str("not a category")).is_err());
}
