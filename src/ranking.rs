use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::state::{Fixture, Team, TeamId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTeam {
    #[serde(flatten)]
    pub team: Team,
    #[serde(rename = "nrr")]
    pub net_run_rate: f64,
    pub position: usize,
}

/// Runs per over scored minus runs per over conceded, rounded to three decimals.
///
/// A side with no balls faced (or bowled) contributes a rate of zero for that term, and
/// anything that still comes out non-finite is reported as zero.
pub fn net_run_rate(team: &Team) -> f64 {
    let scored = run_rate(team.runs_scored, team.balls_faced);
    let conceded = run_rate(team.runs_conceded, team.balls_bowled);
    round_nrr(scored - conceded)
}

fn run_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    f64::from(runs) / f64::from(balls) * 6.0
}

fn round_nrr(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 || !rounded.is_finite() {
        // Also folds -0.0 into 0.0.
        0.0
    } else {
        rounded
    }
}

/// Points first, then net run rate; anything still level keeps its input order.
pub fn rank_teams<'a>(teams: impl IntoIterator<Item = &'a Team>) -> Vec<RankedTeam> {
    let mut rows: Vec<RankedTeam> = teams
        .into_iter()
        .map(|team| RankedTeam {
            net_run_rate: net_run_rate(team),
            team: team.clone(),
            position: 0,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.team.points.cmp(&a.team.points).then_with(|| {
            b.net_run_rate
                .partial_cmp(&a.net_run_rate)
                .unwrap_or(Ordering::Equal)
        })
    });
    for (idx, row) in rows.iter_mut().enumerate() {
        row.position = idx + 1;
    }
    rows
}

pub fn qualifiers(ranked: &[RankedTeam], slots: usize) -> &[RankedTeam] {
    &ranked[..slots.min(ranked.len())]
}

pub fn remaining_matches(team_id: TeamId, fixtures: &[Fixture]) -> usize {
    fixtures
        .iter()
        .filter(|f| !f.completed() && f.involves(team_id))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_nrr_handles_edges() {
        assert_eq!(round_nrr(f64::NAN), 0.0);
        assert_eq!(round_nrr(f64::INFINITY), 0.0);
        assert!(round_nrr(-0.0001).is_sign_positive());
        assert_eq!(round_nrr(0.4816), 0.482);
        assert_eq!(round_nrr(-1.1924), -1.192);
    }

    #[test]
    fn run_rate_is_zero_without_balls() {
        assert_eq!(run_rate(150, 0), 0.0);
        assert_eq!(run_rate(120, 120), 6.0);
    }
}
