use std::env;
use std::path::PathBuf;

use log::warn;

use crate::persist;
use crate::state::{Baseline, IngestMode};

pub const DEFAULT_QUALIFIER_SLOTS: usize = 4;
pub const DEFAULT_ODDS_RUNS: usize = 2_000;
const MAX_ODDS_RUNS: usize = 200_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub db_path: Option<PathBuf>,
    pub seed_file: Option<PathBuf>,
    pub rng_seed: Option<u64>,
    pub qualifier_slots: usize,
    pub baseline: Baseline,
    pub ingest: IngestMode,
    pub odds_runs: usize,
    pub odds_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            db_path: persist::default_store_path(),
            seed_file: None,
            rng_seed: None,
            qualifier_slots: DEFAULT_QUALIFIER_SLOTS,
            baseline: Baseline::Seed,
            ingest: IngestMode::Incremental,
            odds_runs: DEFAULT_ODDS_RUNS,
            odds_threads: None,
        }
    }
}

impl SimConfig {
    /// Reads `STANDINGS_*` variables. Call after `dotenvy` has loaded any `.env` files.
    pub fn from_env() -> Self {
        let defaults = SimConfig::default();
        Self {
            db_path: opt_path_env("STANDINGS_DB").or(defaults.db_path),
            seed_file: opt_path_env("STANDINGS_SEED_FILE"),
            rng_seed: env::var("STANDINGS_RNG_SEED")
                .ok()
                .and_then(|val| val.trim().parse::<u64>().ok()),
            qualifier_slots: env::var("STANDINGS_QUALIFIERS")
                .ok()
                .and_then(|val| val.trim().parse::<usize>().ok())
                .unwrap_or(DEFAULT_QUALIFIER_SLOTS)
                .max(1),
            baseline: env::var("STANDINGS_BASELINE")
                .ok()
                .map(|val| parse_baseline(&val))
                .unwrap_or(defaults.baseline),
            ingest: env::var("STANDINGS_INGEST")
                .ok()
                .map(|val| parse_ingest(&val))
                .unwrap_or(defaults.ingest),
            odds_runs: env::var("STANDINGS_ODDS_RUNS")
                .ok()
                .and_then(|val| val.trim().parse::<usize>().ok())
                .unwrap_or(DEFAULT_ODDS_RUNS)
                .clamp(1, MAX_ODDS_RUNS),
            odds_threads: env::var("STANDINGS_ODDS_THREADS")
                .ok()
                .and_then(|val| val.trim().parse::<usize>().ok())
                .map(|n| n.clamp(1, 64)),
        }
    }

    /// Applies `--db=`, `--seed-file=` and `--rng-seed=` style overrides; the space
    /// separated form (`--db path`) works too.
    pub fn apply_args(&mut self, args: &[String]) {
        if let Some(path) = flag_value(args, "--db") {
            self.db_path = Some(PathBuf::from(path));
        }
        if let Some(path) = flag_value(args, "--seed-file") {
            self.seed_file = Some(PathBuf::from(path));
        }
        if let Some(raw) = flag_value(args, "--rng-seed") {
            match raw.parse::<u64>() {
                Ok(seed) => self.rng_seed = Some(seed),
                Err(_) => warn!("ignoring --rng-seed {raw:?}: not an unsigned integer"),
            }
        }
    }

    pub fn clamp_slots(&self, team_count: usize) -> usize {
        self.qualifier_slots.clamp(1, team_count.max(1))
    }
}

pub fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(raw) = arg.strip_prefix(&prefix) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}

fn opt_path_env(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
}

fn parse_baseline(raw: &str) -> Baseline {
    match raw.trim().to_ascii_lowercase().as_str() {
        "zero" | "zeroed" => Baseline::Zeroed,
        "seed" => Baseline::Seed,
        other => {
            warn!("unknown STANDINGS_BASELINE {other:?}; using seed");
            Baseline::Seed
        }
    }
}

fn parse_ingest(raw: &str) -> IngestMode {
    match raw.trim().to_ascii_lowercase().as_str() {
        "full" | "recompute" => IngestMode::FullRecompute,
        "incremental" => IngestMode::Incremental,
        other => {
            warn!("unknown STANDINGS_INGEST {other:?}; using incremental");
            IngestMode::Incremental
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flag_value_accepts_both_forms() {
        let a = args(&["table", "--db=/tmp/x.sqlite"]);
        assert_eq!(flag_value(&a, "--db").as_deref(), Some("/tmp/x.sqlite"));
        let b = args(&["--rng-seed", "42", "simulate"]);
        assert_eq!(flag_value(&b, "--rng-seed").as_deref(), Some("42"));
        assert_eq!(flag_value(&b, "--db"), None);
    }

    #[test]
    fn apply_args_overrides_paths_and_seed() {
        let mut cfg = SimConfig::default();
        cfg.apply_args(&args(&["--db", "a.sqlite", "--rng-seed=7", "--seed-file=s.json"]));
        assert_eq!(cfg.db_path, Some(PathBuf::from("a.sqlite")));
        assert_eq!(cfg.seed_file, Some(PathBuf::from("s.json")));
        assert_eq!(cfg.rng_seed, Some(7));
    }

    #[test]
    fn baseline_and_ingest_parse_leniently() {
        assert_eq!(parse_baseline(" Zero "), Baseline::Zeroed);
        assert_eq!(parse_baseline("bogus"), Baseline::Seed);
        assert_eq!(parse_ingest("FULL"), IngestMode::FullRecompute);
    }
}
