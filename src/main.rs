// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dronesim::models::delivery::generate_deliveries;
use dronesim::models::drone::generate_drones;
use dronesim::models::route::RandomRouteSampler;
use dronesim::simulation::clock::SimulationClock;
use dronesim::simulation::csv::{setup_csv_output, write_fleet_csv, write_log_csv};
use dronesim::simulation::framework::run_simulation;
use dronesim::simulation::load_parameters::{load_parameters, load_scenario};
use dronesim::simulation::multi_run::run_multiple;
use dronesim::simulation::progress::TracingProgress;
use dronesim::simulation::summary::SimulationSummary;
use dronesim::{Fleet, SimulationContext};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 設定とシナリオの読み込み（第1引数で設定ディレクトリを変更できる）
    let config_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "config".to_string()));
    let params = load_parameters(config_dir.join("parameters.yaml"))?;
    let scenario = load_scenario(config_dir.join("scenario.yaml"))?;
    let hubs = scenario.hub_set()?;
    let selected_hubs = scenario.selected_hubs(&hubs)?;

    let mut rng = match params.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let clock = SimulationClock::new(
        params.start_time.unwrap_or_else(Utc::now),
        params.dispatch_interval_secs,
    );
    let context = SimulationContext {
        hubs,
        model: params.failure_model()?,
        sampler: RandomRouteSampler::new(params.route.clone())?,
        clock,
    };
    info!(
        drones = params.drone_count,
        deliveries = params.delivery_count,
        base_failure_rate = params.base_failure_rate,
        blocked_route_failure_probability = params.blocked_route_failure_probability,
        battery_failure_threshold = params.battery_failure_threshold,
        runs = params.runs,
        seed = ?params.seed,
        "starting simulation"
    );

    // エンティティの生成
    let mut fleet = Fleet::new(generate_drones(params.drone_count, &context.hubs, &mut rng));
    let deliveries = generate_deliveries(params.delivery_count, &context.hubs, &mut rng);

    if params.runs > 1 {
        let stats = run_multiple(&context, &deliveries, fleet.len(), params.runs, &mut rng)?;
        println!("Success Rate Distribution Over {} Runs", stats.runs());
        for bin in stats.histogram(10) {
            println!("  {:6.2}% - {:6.2}%: {}", bin.lower, bin.upper, bin.count);
        }
        println!("Average Success Rate: {:.2}%", stats.mean_success_rate);
        return Ok(());
    }

    // シミュレーションの実行
    let log = run_simulation(&context, &deliveries, &mut fleet, &mut rng, &mut TracingProgress::new(10));

    let filtered = log.filter_by_hubs(&selected_hubs);
    if filtered.is_empty() {
        warn!(hubs = ?selected_hubs, "hub filter leaves no deliveries");
    }
    print!("{}", SimulationSummary::from_log(&filtered));

    // CSV出力
    let log_path = "output/delivery_log.csv";
    let mut writer = setup_csv_output(log_path)?;
    write_log_csv(&mut writer, &filtered)?;

    let fleet_path = "output/fleet_snapshot.csv";
    let mut writer = setup_csv_output(fleet_path)?;
    write_fleet_csv(&mut writer, &fleet.utilization_ranking())?;

    info!(log = log_path, fleet = fleet_path, "results saved");
    Ok(())
}
