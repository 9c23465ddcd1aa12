use log::debug;
use rand::Rng;

use crate::state::{Fixture, INNINGS_OVERS, MatchResult, Overs, BALLS_PER_OVER};

const NO_RESULT_PROBABILITY: f64 = 0.05;
const CHASE_SUCCESS_PROBABILITY: f64 = 0.60;
const CHASE_OVERSHOOT_RUNS: u32 = 10;
const FAILED_CHASE_MAX_DEFICIT: u32 = 50;
const FAILED_CHASE_FLOOR: u32 = 30;
const FALLBACK_SCORE: (u32, u32) = (150, 180);

#[derive(Debug, Clone, Copy)]
struct ScoreBand {
    min: u32,
    max: u32,
    probability: f64,
}

const FIRST_INNINGS_BANDS: [ScoreBand; 6] = [
    ScoreBand { min: 120, max: 140, probability: 0.05 },
    ScoreBand { min: 141, max: 160, probability: 0.15 },
    ScoreBand { min: 161, max: 175, probability: 0.40 },
    ScoreBand { min: 176, max: 190, probability: 0.25 },
    ScoreBand { min: 191, max: 210, probability: 0.10 },
    ScoreBand { min: 211, max: 230, probability: 0.05 },
];

/// Fills every unplayed fixture with a fabricated result. Completed fixtures pass through.
pub fn simulate_remaining<R: Rng + ?Sized>(fixtures: &[Fixture], rng: &mut R) -> Vec<Fixture> {
    fixtures
        .iter()
        .map(|fixture| {
            if fixture.completed() {
                return fixture.clone();
            }
            let mut next = fixture.clone();
            let result = generate_result(fixture, rng);
            debug!("fixture {} simulated: {:?}", fixture.id, result);
            next.complete(result);
            next
        })
        .collect()
}

pub fn generate_result<R: Rng + ?Sized>(fixture: &Fixture, rng: &mut R) -> MatchResult {
    if rng.gen_bool(NO_RESULT_PROBABILITY) {
        return MatchResult::NoResult;
    }

    let first = first_innings_score(rng);
    let chase = chase_score(first, rng);
    let (second, outcome) = settle(first, chase, rng);

    let winner_id = if rng.gen_bool(0.5) {
        fixture.team1_id
    } else {
        fixture.team2_id
    };

    match outcome {
        Decided::Runs { margin } => MatchResult::RunsWin {
            winner_id,
            margin_runs: margin,
            first_innings_score: first,
            first_innings_overs: Overs::FULL_INNINGS,
            second_innings_score: second,
            second_innings_overs: Overs::FULL_INNINGS,
        },
        Decided::Wickets {
            overs,
            balls_remaining,
            wickets_in_hand,
        } => MatchResult::WicketsWin {
            winner_id,
            balls_remaining,
            wickets_margin: Some(wickets_in_hand),
            first_innings_score: first,
            first_innings_overs: Overs::FULL_INNINGS,
            second_innings_score: second,
            second_innings_overs: overs,
        },
    }
}

/// Decides how the match was won and returns the second innings total it was won with.
fn settle<R: Rng + ?Sized>(first: u32, second: u32, rng: &mut R) -> (u32, Decided) {
    if first == second {
        // Level scores are settled as a one-run win for the side batting first.
        return (first - 1, Decided::Runs { margin: 1 });
    }
    if first > second {
        return (
            second,
            Decided::Runs {
                margin: first - second,
            },
        );
    }
    let full_overs = rng.gen_range(15..=19);
    let balls = rng.gen_range(0..BALLS_PER_OVER);
    let wickets_lost = rng.gen_range(1..=8);
    (
        second,
        Decided::Wickets {
            overs: Overs::from_balls(full_overs * BALLS_PER_OVER + balls),
            balls_remaining: (INNINGS_OVERS - full_overs) * BALLS_PER_OVER - balls,
            wickets_in_hand: 10 - wickets_lost,
        },
    )
}

#[derive(Debug, PartialEq, Eq)]
enum Decided {
    Runs {
        margin: u32,
    },
    Wickets {
        overs: Overs,
        balls_remaining: u32,
        wickets_in_hand: u32,
    },
}

fn first_innings_score<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    let draw: f64 = rng.gen_range(0.0..1.0);
    let mut cumulative = 0.0;
    for band in FIRST_INNINGS_BANDS {
        cumulative += band.probability;
        if draw <= cumulative {
            return rng.gen_range(band.min..=band.max);
        }
    }
    // Only reachable when the band probabilities sum to a hair under 1.0.
    rng.gen_range(FALLBACK_SCORE.0..=FALLBACK_SCORE.1)
}

fn chase_score<R: Rng + ?Sized>(target: u32, rng: &mut R) -> u32 {
    if rng.gen_bool(CHASE_SUCCESS_PROBABILITY) {
        rng.gen_range(target..=target + CHASE_OVERSHOOT_RUNS)
    } else {
        let floor = target
            .saturating_sub(FAILED_CHASE_MAX_DEFICIT)
            .max(FAILED_CHASE_FLOOR);
        rng.gen_range(floor..=target - 1)
    }
}
