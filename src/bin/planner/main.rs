// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tokenomics Planner CLI
// Generates a plan from a scenario, then runs N seeded market simulations
//
// Usage:
//   cargo run --release --bin planner                           # Default categories, 30 runs
//   cargo run --release --bin planner -- --config scenario.json # Load a scenario file
//   cargo run --release --bin planner -- --emphasis team        # Apply a vesting preset
//   cargo run --release --bin planner -- --runs 5 --seed 42     # Quick mode, custom base seed
//   cargo run --release --bin planner -- --time-series          # Per-month JSONL output

#[cfg(not(target_arch = "wasm32"))]
mod monte_carlo;
#[cfg(not(target_arch = "wasm32"))]
mod report;
#[cfg(not(target_arch = "wasm32"))]
mod scenario;
#[cfg(not(target_arch = "wasm32"))]
mod time_series;

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "planner")]
#[command(about = "Token allocation, vesting and market simulation planner")]
struct Args {
    /// JSON scenario file; omitted fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    total_tokens: Option<u64>,

    #[arg(long)]
    price: Option<f64>,

    #[arg(long)]
    investment: Option<f64>,

    /// Vesting preset: balanced, team, investors, community
    #[arg(long)]
    emphasis: Option<String>,

    /// Seeds the plan's demand noise and is the first simulation seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Simulation runs
    #[arg(long, default_value_t = 30)]
    runs: usize,

    #[arg(short, long, default_value = "planner-results")]
    out: PathBuf,

    /// Write one JSONL file per simulation run
    #[arg(long)]
    time_series: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let default_filter = format!("planner={level},tokenomics_engine={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

// ─── Main ───────────────────────────────────────────────────────────────────

#[cfg(not(target_arch = "wasm32"))]
fn main() -> color_eyre::Result<()> {
    use std::time::{Instant, SystemTime, UNIX_EPOCH};
    use tokenomics_engine::VestingEmphasis;

    color_eyre::install()?;
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut scenario = match &args.config {
        Some(path) => scenario::Scenario::load(path)?,
        None => scenario::Scenario::default(),
    };
    if let Some(total) = args.total_tokens {
        scenario.total_tokens = total;
    }
    if let Some(price) = args.price {
        scenario.token_price = price;
    }
    if let Some(investment) = args.investment {
        scenario.investment_amount = investment;
    }
    if let Some(emphasis) = &args.emphasis {
        scenario.emphasis = Some(VestingEmphasis::parse(emphasis));
    }

    let mut planner = scenario.planner(args.seed)?;
    let allocated = planner.categories().total_percentage()?;
    let generated = planner.generate()?;
    let kpi = generated.kpi.clone();

    println!("\n  Tokenomics Planner v{}", env!("CARGO_PKG_VERSION"));
    println!("  Scenario: {} | PRNG: ChaCha8Rng | Runs: {} | Base seed: {}",
        scenario.name, args.runs, args.seed);
    println!("\n  {:<16} {:>18} {:>8} {:>12} {:>8}",
        "Category", "Tokens", "Pct", "Curve", "Months");
    println!("  {}", "-".repeat(66));
    for row in tokenomics_engine::export::plan_summary(&generated.plan) {
        println!("  {:<16} {:>18} {:>7.2}% {:>12} {:>8}",
            row.category, row.tokens, row.percentage, row.vesting_type, row.vesting_period);
    }
    println!("  {}", "-".repeat(66));
    println!("  {:<16} {:>18} {:>7.2}%", "Total", generated.plan.total_tokens, allocated);
    println!("  Circulating: {:.0}  Market cap: {:.2}  Treasury: {:.2}  Inflation: {:.2}%\n",
        kpi.circulating_supply, kpi.market_cap, kpi.treasury_reserves, kpi.annualized_inflation);

    let ts_dir = args.time_series.then(|| args.out.join("time-series"));
    let started = Instant::now();
    let monte_carlo = monte_carlo::run_monte_carlo(&planner, args.runs, args.seed, ts_dir.as_deref())?;

    println!("  {:<18} {:>14} {:>12} {:>14} {:>14}",
        "Metric", "Mean", "±95%", "Min", "Max");
    println!("  {}", "-".repeat(76));
    for (label, stats) in [
        ("Final price", &monte_carlo.final_price),
        ("Final market cap", &monte_carlo.final_market_cap),
        ("Min price", &monte_carlo.min_price),
        ("Max price", &monte_carlo.max_price),
    ] {
        println!("  {:<18} {:>14.6} {:>12.6} {:>14.6} {:>14.6}",
            label, stats.mean, stats.ci95, stats.min, stats.max);
    }
    println!("  {}", "-".repeat(76));
    println!("  Suite time: {:.2}s\n", started.elapsed().as_secs_f64());

    // ─── Write JSON Report ──────────────────────────────────────────────

    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis().to_string();
    let report = report::RunReport {
        timestamp: timestamp.clone(),
        version: env!("CARGO_PKG_VERSION"),
        prng: "ChaCha8Rng",
        scenario: scenario.name.clone(),
        seed: args.seed,
        plan: planner.report()?,
        monte_carlo,
    };

    std::fs::create_dir_all(&args.out)?;
    let path = args.out.join(format!("plan-{}.json", timestamp));
    std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
    tracing::info!(path = %path.display(), "report written");
    println!("  Results saved to: {}\n", path.display());

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser entry point is the wasm_bindgen interface in lib.rs.
}
