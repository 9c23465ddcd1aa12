use anyhow::Result;
use rand::Rng;

use standings_sim::config::{SimConfig, flag_value};
use standings_sim::persist;
use standings_sim::qualification::{self, with_pool};
use standings_sim::seed_data;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let log_level = if args.iter().any(|a| a == "--verbose") {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let mut config = SimConfig::from_env();
    config.apply_args(&args);
    if let Some(runs) = flag_value(&args, "--runs").and_then(|raw| raw.parse::<usize>().ok()) {
        config.odds_runs = runs.clamp(1, 200_000);
    }

    let seed = seed_data::load_or_bundled(config.seed_file.as_deref())?;
    let store = persist::open_store(config.db_path.as_deref())?;
    let saved = persist::load_session_fixtures(store.as_ref())?;
    let state = seed.resume_or_start(config.baseline, config.ingest, saved)?;
    let slots = config.clamp_slots(state.teams().len());
    let rng_seed = config
        .rng_seed
        .unwrap_or_else(|| rand::thread_rng().r#gen::<u64>());

    let odds = with_pool(config.odds_threads, || {
        qualification::qualification_odds(
            state.registry(),
            state.standings(),
            config.odds_runs,
            slots,
            rng_seed,
        )
    })?;

    println!(
        "Qualification odds: {} runs, top {} qualify, {} fixtures left (seed {})",
        config.odds_runs,
        slots,
        state.remaining_count(),
        rng_seed
    );
    println!(
        "{:<5} {:>9} {:>9} {:>8} {:>5} {:>6}",
        "Team", "Qualify%", "Top2%", "AvgPos", "Best", "Worst"
    );
    for row in &odds {
        println!(
            "{:<5} {:>9.1} {:>9.1} {:>8.2} {:>5} {:>6}",
            row.short,
            row.qualify_pct,
            row.top_two_pct,
            row.average_position,
            row.best_position,
            row.worst_position
        );
    }
    Ok(())
}
