use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::error::StandingsError;
use crate::outcome_gen;
use crate::ranking;
use crate::standings;
use crate::state::{Standings, TeamId, TeamRegistry};

#[derive(Debug, Clone, PartialEq)]
pub struct TeamOdds {
    pub team_id: TeamId,
    pub short: String,
    pub qualify_pct: f64,
    pub top_two_pct: f64,
    pub average_position: f64,
    pub best_position: usize,
    pub worst_position: usize,
}

#[derive(Debug, Clone, Copy)]
struct Tally {
    qualified: usize,
    top_two: usize,
    position_sum: usize,
    best: usize,
    worst: usize,
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            qualified: 0,
            top_two: 0,
            position_sum: 0,
            best: usize::MAX,
            worst: 0,
        }
    }
}

/// Plays out the unplayed fixtures `runs` times and counts how often each team finishes
/// inside the top `slots`. Run `i` always uses the same derived seed, so the answer does
/// not depend on how rayon splits the work.
pub fn qualification_odds(
    registry: &TeamRegistry,
    current: &Standings,
    runs: usize,
    slots: usize,
    seed: u64,
) -> Result<Vec<TeamOdds>, StandingsError> {
    let runs = runs.max(1);
    let finishes = (0..runs)
        .into_par_iter()
        .map(|run| -> Result<Vec<TeamId>, StandingsError> {
            let mut rng = StdRng::seed_from_u64(run_seed(seed, run));
            let fixtures = outcome_gen::simulate_remaining(&current.fixtures, &mut rng);
            let teams = standings::recompute_all(registry, &fixtures)?;
            Ok(ranking::rank_teams(&teams)
                .into_iter()
                .map(|row| row.team.id)
                .collect())
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut tallies: HashMap<TeamId, Tally> = HashMap::new();
    for order in &finishes {
        for (idx, team_id) in order.iter().enumerate() {
            let position = idx + 1;
            let tally = tallies.entry(*team_id).or_default();
            if position <= slots {
                tally.qualified += 1;
            }
            if position <= 2 {
                tally.top_two += 1;
            }
            tally.position_sum += position;
            tally.best = tally.best.min(position);
            tally.worst = tally.worst.max(position);
        }
    }

    let total = runs as f64;
    let mut out = current
        .teams
        .iter()
        .filter_map(|team| {
            let tally = tallies.get(&team.id)?;
            Some(TeamOdds {
                team_id: team.id,
                short: team.short.clone(),
                qualify_pct: tally.qualified as f64 / total * 100.0,
                top_two_pct: tally.top_two as f64 / total * 100.0,
                average_position: tally.position_sum as f64 / total,
                best_position: tally.best,
                worst_position: tally.worst,
            })
        })
        .collect::<Vec<_>>();
    out.sort_by(|a, b| {
        b.qualify_pct
            .total_cmp(&a.qualify_pct)
            .then_with(|| a.average_position.total_cmp(&b.average_position))
    });
    Ok(out)
}

fn run_seed(seed: u64, run: usize) -> u64 {
    // splitmix64 finalizer over the run index.
    let mut z = seed ^ (run as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Runs `action` on a dedicated pool of `threads` workers, or on the global pool.
pub fn with_pool<T>(threads: Option<usize>, action: impl FnOnce() -> T + Send) -> T
where
    T: Send,
{
    let Some(threads) = threads else {
        return action();
    };
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(action),
        Err(_) => action(),
    }
}
