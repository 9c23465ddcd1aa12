use rand::SeedableRng;
use rand::rngs::StdRng;

use standings_sim::entry::ResultEntry;
use standings_sim::error::{ErrorKind, StandingsError};
use standings_sim::seed_data::{self, Seed};
use standings_sim::state::{Baseline, Command, IngestMode, MatchResult, SimState, apply_command};

fn seed() -> &'static Seed {
    seed_data::bundled().unwrap()
}

fn fresh(ingest: IngestMode) -> SimState {
    seed().start(Baseline::Seed, ingest).unwrap()
}

#[test]
fn fresh_session_matches_seed() {
    let state = fresh(IngestMode::Incremental);
    assert_eq!(state.remaining_count(), 15);
    assert!(!state.is_complete());
    assert!(!state.completion_ready());
    assert_eq!(state.teams(), &seed().teams);
    let ranked = state.ranked();
    assert_eq!(ranked[0].team.short, "RCB");
    assert_eq!(ranked[9].team.short, "CSK");
}

#[test]
fn entered_result_updates_live_table() {
    let mut state = fresh(IngestMode::Incremental);
    let mut rng = StdRng::seed_from_u64(0);
    // MI v GT, MI bat first and win by 20.
    apply_command(
        &mut state,
        Command::EnterResult {
            fixture_id: 56,
            entry: ResultEntry::runs(6, true, 20),
        },
        &mut rng,
    )
    .unwrap();

    let mi = state.teams().get(6).unwrap();
    assert_eq!((mi.matches, mi.won, mi.points), (12, 8, 16));
    let gt = state.teams().get(3).unwrap();
    assert_eq!((gt.matches, gt.lost, gt.points), (11, 4, 14));
    assert_eq!(state.remaining_count(), 14);
    let fixture = state.standings().fixture(56).unwrap();
    let described = fixture
        .result()
        .unwrap()
        .describe(state.teams().get(6).unwrap(), state.teams().get(3).unwrap());
    assert_eq!(described, "MI won by 20 runs");
}

#[test]
fn failed_command_leaves_state_untouched() {
    let mut state = fresh(IngestMode::Incremental);
    let before = state.standings().clone();
    let mut rng = StdRng::seed_from_u64(0);

    let err = apply_command(
        &mut state,
        Command::EnterResult {
            fixture_id: 56,
            entry: ResultEntry::wickets(9, true, 10),
        },
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, StandingsError::WinnerNotInFixture { winner_id: 9, .. }));

    let err = apply_command(
        &mut state,
        Command::RecordResult {
            fixture_id: 400,
            result: MatchResult::NoResult,
        },
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(err, StandingsError::UnknownFixture { fixture_id: 400 });
    assert_eq!(state.standings(), &before);
}

#[test]
fn incremental_and_full_recompute_agree() {
    let mut a = fresh(IngestMode::Incremental);
    let mut b = fresh(IngestMode::FullRecompute);
    let entries = [
        (56, ResultEntry::runs(6, true, 12)),
        (57, ResultEntry::wickets(1, true, 9)),
        (58, ResultEntry::NoResult),
        // Edit 56 after the fact.
        (56, ResultEntry::wickets(6, false, 3)),
    ];
    let mut rng = StdRng::seed_from_u64(0);
    for (fixture_id, entry) in entries {
        for state in [&mut a, &mut b] {
            apply_command(
                state,
                Command::EnterResult {
                    fixture_id,
                    entry: entry.clone(),
                },
                &mut rng,
            )
            .unwrap();
        }
    }
    assert_eq!(a.standings(), b.standings());
    let mi = a.teams().get(6).unwrap();
    assert_eq!((mi.matches, mi.won, mi.lost), (12, 8, 4));
}

#[test]
fn simulate_completes_everything_and_raises_prompt() {
    let mut state = fresh(IngestMode::Incremental);
    let mut rng = StdRng::seed_from_u64(17);
    apply_command(&mut state, Command::SimulateRemaining, &mut rng).unwrap();

    assert!(state.is_complete());
    assert!(state.completion_ready());
    let played = state.teams().iter().map(|t| t.matches).sum::<u32>();
    let seeded = seed().teams.iter().map(|t| t.matches).sum::<u32>();
    assert_eq!(played, seeded + 2 * 15);

    apply_command(&mut state, Command::DismissCompletionPrompt, &mut rng).unwrap();
    assert!(!state.completion_ready());
    // Simulating again changes nothing and does not re-raise a dismissed prompt.
    let before = state.standings().clone();
    apply_command(&mut state, Command::SimulateRemaining, &mut rng).unwrap();
    assert_eq!(state.standings(), &before);
    assert!(!state.completion_ready());

    // A reset makes the table incomplete, so the next completion prompts again.
    apply_command(&mut state, Command::Reset, &mut rng).unwrap();
    assert_eq!(state.remaining_count(), 15);
    assert_eq!(state.teams(), &seed().teams);
    apply_command(&mut state, Command::SimulateRemaining, &mut rng).unwrap();
    assert!(state.completion_ready());
}

#[test]
fn reset_and_simulate_all_discards_manual_results() {
    let mut state = fresh(IngestMode::Incremental);
    let mut rng = StdRng::seed_from_u64(3);
    apply_command(
        &mut state,
        Command::EnterResult {
            fixture_id: 70,
            entry: ResultEntry::NoResult,
        },
        &mut rng,
    )
    .unwrap();

    let mut expected_rng = StdRng::seed_from_u64(8);
    let mut other = fresh(IngestMode::Incremental);
    apply_command(&mut other, Command::SimulateRemaining, &mut expected_rng).unwrap();

    let mut rng = StdRng::seed_from_u64(8);
    apply_command(&mut state, Command::ResetAndSimulateAll, &mut rng).unwrap();
    assert_eq!(state.standings(), other.standings());
}

#[test]
fn finalized_snapshot_is_detached_from_live_state() {
    let mut state = fresh(IngestMode::Incremental);
    let mut rng = StdRng::seed_from_u64(21);
    apply_command(&mut state, Command::SimulateRemaining, &mut rng).unwrap();
    let snapshot = state.finalize();
    let frozen = snapshot.ranked().to_vec();

    apply_command(&mut state, Command::Reset, &mut rng).unwrap();
    assert_eq!(snapshot.ranked(), frozen.as_slice());
    assert_eq!(snapshot.qualifiers(4).len(), 4);
    assert_eq!(snapshot.ranked().len(), 10);
}

#[test]
fn restore_rebuilds_stats_from_saved_fixtures() {
    let mut state = fresh(IngestMode::Incremental);
    let mut rng = StdRng::seed_from_u64(5);
    apply_command(
        &mut state,
        Command::EnterResult {
            fixture_id: 64,
            entry: ResultEntry::runs(9, true, 30),
        },
        &mut rng,
    )
    .unwrap();

    let saved = state.fixtures().to_vec();
    let restored = seed()
        .resume(Baseline::Seed, IngestMode::Incremental, saved)
        .unwrap();
    assert_eq!(restored.standings(), state.standings());
}

#[test]
fn restore_rejects_a_different_schedule() {
    let mut saved = seed().fixtures.clone();
    saved.pop();
    let err = seed()
        .resume(Baseline::Seed, IngestMode::Incremental, saved.clone())
        .unwrap_err();
    assert_eq!(err, StandingsError::UnknownFixture { fixture_id: 70 });

    // resume_or_start falls back to a fresh session instead.
    let state = seed()
        .resume_or_start(Baseline::Seed, IngestMode::Incremental, Some(saved))
        .unwrap();
    assert_eq!(state.remaining_count(), 15);
}

#[test]
fn restore_rejects_a_changed_pairing() {
    let mut saved = seed().fixtures.clone();
    // MI v GT becomes MI v RCB.
    saved[0].team2_id = 9;
    let err = seed()
        .resume(Baseline::Seed, IngestMode::Incremental, saved)
        .unwrap_err();
    assert_eq!(err, StandingsError::ScheduleMismatch { fixture_id: 56 });
    assert_eq!(err.kind(), ErrorKind::Validation);
}
