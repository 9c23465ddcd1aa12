use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use standings_sim::entry::ResultEntry;
use standings_sim::ranking::rank_teams;
use standings_sim::seed_data::{self, Seed};
use standings_sim::standings::recompute_all;
use standings_sim::state::{Baseline, Command, IngestMode, SimState, apply_command};

fn seed() -> &'static Seed {
    seed_data::bundled().unwrap()
}

fn entry_strategy() -> impl Strategy<Value = (usize, u8, bool, i64)> {
    // (fixture index, kind, team1 wins, amount)
    (0_usize..15, 0_u8..3, any::<bool>(), 1_i64..119)
}

fn enter(state: &mut SimState, pick: (usize, u8, bool, i64)) {
    let (idx, kind, team1_wins, amount) = pick;
    let fixture = &state.fixtures()[idx];
    let fixture_id = fixture.id;
    let winner = if team1_wins { fixture.team1_id } else { fixture.team2_id };
    let entry = match kind {
        0 => ResultEntry::NoResult,
        1 => ResultEntry::runs(winner, team1_wins, amount),
        _ => ResultEntry::wickets(winner, !team1_wins, amount),
    };
    let mut rng = StdRng::seed_from_u64(0);
    apply_command(state, Command::EnterResult { fixture_id, entry }, &mut rng).unwrap();
}

proptest! {
    #[test]
    fn zeroed_totals_balance(rng_seed in any::<u64>()) {
        let mut state = seed().start(Baseline::Zeroed, IngestMode::Incremental).unwrap();
        let mut rng = StdRng::seed_from_u64(rng_seed);
        apply_command(&mut state, Command::SimulateRemaining, &mut rng).unwrap();

        let teams = state.teams();
        let completed = state.fixtures().len() as u32;
        prop_assert_eq!(teams.iter().map(|t| t.points).sum::<u32>(), 2 * completed);
        prop_assert_eq!(teams.iter().map(|t| t.matches).sum::<u32>(), 2 * completed);
        prop_assert_eq!(
            teams.iter().map(|t| t.won).sum::<u32>(),
            teams.iter().map(|t| t.lost).sum::<u32>()
        );
        prop_assert_eq!(
            teams.iter().map(|t| t.runs_scored).sum::<u32>(),
            teams.iter().map(|t| t.runs_conceded).sum::<u32>()
        );
        prop_assert_eq!(
            teams.iter().map(|t| t.balls_faced).sum::<u32>(),
            teams.iter().map(|t| t.balls_bowled).sum::<u32>()
        );
        for team in teams {
            prop_assert!(team.check_consistency().is_ok());
        }
    }

    #[test]
    fn incremental_ingest_matches_full_recompute(
        picks in prop::collection::vec(entry_strategy(), 0..40),
    ) {
        let mut incremental = seed().start(Baseline::Seed, IngestMode::Incremental).unwrap();
        let mut full = seed().start(Baseline::Seed, IngestMode::FullRecompute).unwrap();
        for pick in picks {
            enter(&mut incremental, pick);
            enter(&mut full, pick);
        }
        prop_assert_eq!(incremental.standings(), full.standings());
        let rebuilt = recompute_all(incremental.registry(), incremental.fixtures()).unwrap();
        prop_assert_eq!(&rebuilt, incremental.teams());
        let again = recompute_all(incremental.registry(), incremental.fixtures()).unwrap();
        prop_assert_eq!(rebuilt, again);
    }

    #[test]
    fn ranking_is_total_and_nrr_is_rounded(rng_seed in any::<u64>()) {
        let mut state = seed().start(Baseline::Seed, IngestMode::Incremental).unwrap();
        let mut rng = StdRng::seed_from_u64(rng_seed);
        apply_command(&mut state, Command::SimulateRemaining, &mut rng).unwrap();

        let ranked = rank_teams(state.teams());
        prop_assert_eq!(ranked.len(), state.teams().len());
        for (idx, row) in ranked.iter().enumerate() {
            prop_assert_eq!(row.position, idx + 1);
            prop_assert!(row.net_run_rate.is_finite());
            let scaled = row.net_run_rate * 1000.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6);
        }
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.team.points > b.team.points
                    || (a.team.points == b.team.points && a.net_run_rate >= b.net_run_rate)
            );
        }
    }
}
