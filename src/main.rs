use anyhow::{Context, Result, anyhow, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;

use standings_sim::config::SimConfig;
use standings_sim::entry::ResultEntry;
use standings_sim::finalize;
use standings_sim::persist::{self, KeyValueStore, ResultsView};
use standings_sim::ranking::{self, RankedTeam};
use standings_sim::seed_data;
use standings_sim::state::{Command, Fixture, SimState, TeamId, TeamTable, apply_command};

// Flags that take a value, so their argument is not mistaken for a positional one.
const VALUE_FLAGS: &[&str] = &["--db", "--seed-file", "--rng-seed"];

const USAGE: &str = "usage: standings_sim [--db PATH] [--seed-file PATH] [--rng-seed N] [--verbose] <command>

commands:
  table                                      live standings
  fixtures                                   fixture list with results
  record <fixture> runs <winner> <margin>    side batting first won by <margin> runs
  record <fixture> wickets <winner> <balls>  chasing side won with <balls> left
  record <fixture> nr                        no result
  simulate                                   simulate the remaining fixtures
  simulate-all                               reset, then simulate every fixture
  reset                                      back to the seed
  finalize                                   freeze the final table
  results                                    final table, or the live one if not finalized";

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

    let positional = positional_args(&args);
    let Some((command, rest)) = positional.split_first() else {
        println!("{USAGE}");
        return Ok(());
    };

    let seed = seed_data::load_or_bundled(config.seed_file.as_deref())?;
    let mut store = persist::open_store(config.db_path.as_deref())?;
    let saved = persist::load_session_fixtures(store.as_ref())?;
    let mut state = seed.resume_or_start(config.baseline, config.ingest, saved)?;
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let slots = config.clamp_slots(state.teams().len());

    match command.as_str() {
        "table" => print_table(&state.ranked(), state.fixtures(), slots),
        "fixtures" => print_fixtures(state.fixtures(), state.teams()),
        "record" => {
            let cmd = parse_record(rest, &state)?;
            run(&mut state, store.as_mut(), cmd, &mut rng)?;
            print_table(&state.ranked(), state.fixtures(), slots);
        }
        "simulate" => {
            if state.remaining_count() == 0 {
                println!("No fixtures left to simulate.");
            }
            run(&mut state, store.as_mut(), Command::SimulateRemaining, &mut rng)?;
            print_fixtures(state.fixtures(), state.teams());
            print_table(&state.ranked(), state.fixtures(), slots);
        }
        "simulate-all" => {
            persist::clear_final_snapshot(store.as_mut())?;
            run(&mut state, store.as_mut(), Command::ResetAndSimulateAll, &mut rng)?;
            print_fixtures(state.fixtures(), state.teams());
            print_table(&state.ranked(), state.fixtures(), slots);
        }
        "reset" => {
            persist::clear_final_snapshot(store.as_mut())?;
            run(&mut state, store.as_mut(), Command::Reset, &mut rng)?;
            print_table(&state.ranked(), state.fixtures(), slots);
        }
        "finalize" => {
            if !state.is_complete() {
                bail!(
                    "{} fixtures still unresolved; record or simulate them first",
                    state.remaining_count()
                );
            }
            let snapshot = state.finalize();
            persist::write_final_snapshot(store.as_mut(), &snapshot)?;
            println!(
                "Final standings ({})",
                snapshot.finalized_at().format("%Y-%m-%d %H:%M UTC")
            );
            print_table(snapshot.ranked(), state.fixtures(), slots);
            let names = snapshot
                .qualifiers(slots)
                .iter()
                .map(|row| row.team.short.as_str())
                .collect::<Vec<_>>();
            println!("Qualified: {}", names.join(", "));
        }
        "results" => match persist::load_results(store.as_ref())? {
            ResultsView::Final(ranked) => {
                println!("Final standings");
                print_table(&ranked, &[], slots);
            }
            ResultsView::Provisional(ranked) => {
                println!("Provisional standings (not finalized)");
                print_table(&ranked, &[], slots);
            }
            ResultsView::NoData => println!("No results yet. Simulate or record some matches first."),
        },
        other => bail!("unknown command {other:?}\n\n{USAGE}"),
    }
    Ok(())
}

fn run(
    state: &mut SimState,
    store: &mut dyn KeyValueStore,
    command: Command,
    rng: &mut StdRng,
) -> Result<()> {
    apply_command(state, command, rng)?;
    persist::save_session(store, state.standings())?;
    if state.completion_ready() {
        println!("All fixtures resolved. Run `standings_sim finalize` to lock in the table.");
    }
    Ok(())
}

fn positional_args(args: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        out.push(arg.clone());
    }
    out
}

fn parse_record(rest: &[String], state: &SimState) -> Result<Command> {
    let fixture_id = rest
        .first()
        .context("record needs a fixture id")?
        .parse::<u32>()
        .context("fixture id must be a number")?;
    let fixture = state
        .standings()
        .fixture(fixture_id)
        .ok_or_else(|| anyhow!("fixture {fixture_id} not found"))?;
    let kind = rest.get(1).map(|s| s.to_ascii_lowercase()).unwrap_or_default();

    let entry = match kind.as_str() {
        "nr" | "noresult" | "no-result" => ResultEntry::NoResult,
        "runs" | "wickets" => {
            let winner = rest.get(2).context("missing winner")?;
            let winner_id = resolve_team(winner, state.teams())?;
            let amount = rest
                .get(3)
                .context("missing margin")?
                .parse::<i64>()
                .context("margin must be a whole number")?;
            // A runs win means the winner batted first; a wickets win means it chased.
            let winner_is_team1 = winner_id == fixture.team1_id;
            if kind == "runs" {
                ResultEntry::runs(winner_id, winner_is_team1, amount)
            } else {
                ResultEntry::wickets(winner_id, !winner_is_team1, amount)
            }
        }
        other => bail!("unknown result kind {other:?}; expected runs, wickets or nr"),
    };
    Ok(Command::EnterResult { fixture_id, entry })
}

fn resolve_team(raw: &str, teams: &TeamTable) -> Result<TeamId> {
    if let Ok(id) = raw.parse::<TeamId>() {
        return Ok(id);
    }
    teams
        .iter()
        .find(|team| team.short.eq_ignore_ascii_case(raw))
        .map(|team| team.id)
        .ok_or_else(|| anyhow!("no team called {raw:?}"))
}

fn print_table(ranked: &[RankedTeam], fixtures: &[Fixture], slots: usize) {
    println!(
        "{:>3}  {:<5} {:<30} {:>3} {:>3} {:>3} {:>3} {:>4} {:>7} {:>5}",
        "#", "Team", "Name", "M", "W", "L", "NR", "Pts", "NRR", "Left"
    );
    for row in ranked {
        let marker = if row.position <= slots { "*" } else { " " };
        let team = &row.team;
        println!(
            "{:>2}{marker}  {:<5} {:<30} {:>3} {:>3} {:>3} {:>3} {:>4} {:>+7.3} {:>5}",
            row.position,
            team.short,
            team.name,
            team.matches,
            team.won,
            team.lost,
            team.no_result,
            team.points,
            row.net_run_rate,
            ranking::remaining_matches(team.id, fixtures)
        );
    }
}

fn print_fixtures(fixtures: &[Fixture], teams: &TeamTable) {
    for fixture in fixtures {
        let (Some(team1), Some(team2)) = (teams.get(fixture.team1_id), teams.get(fixture.team2_id))
        else {
            continue;
        };
        let outcome = match fixture.result() {
            Some(result) => {
                let mut line = result.describe(team1, team2);
                if let Some((first, second)) = result.innings() {
                    line.push_str(&format!(
                        "  [{}/{} v {}/{}]",
                        first.runs, first.overs, second.runs, second.overs
                    ));
                }
                line
            }
            None => "to play".to_string(),
        };
        println!(
            "#{:<3} {} {:<4} v {:<4} {:<40} {}",
            fixture.match_number,
            fixture.date.format("%d %b"),
            team1.short,
            team2.short,
            fixture.venue,
            outcome
        );
    }
    if finalize::is_complete(fixtures) {
        println!("All {} fixtures resolved.", fixtures.len());
    }
}
