use serde::{Deserialize, Serialize};

use crate::error::StandingsError;
use crate::state::{Fixture, INNINGS_BALLS, MAX_BALLS_REMAINING, MatchResult, Overs, TeamId};

/// Runs credited to the losing side when a result is entered by hand; the winner's
/// innings is derived from it. This only exists to give NRR something to work with.
pub const BASELINE_INNINGS_SCORE: u32 = 160;

/// A result as a user enters it: who won, who batted first, and the margin. Innings
/// totals are inferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ResultEntry {
    NoResult,
    Decided {
        winner_id: TeamId,
        team1_batted_first: bool,
        #[serde(default)]
        margin_runs: i64,
        #[serde(default)]
        balls_remaining: i64,
    },
}

impl ResultEntry {
    pub fn runs(winner_id: TeamId, team1_batted_first: bool, margin_runs: i64) -> Self {
        ResultEntry::Decided {
            winner_id,
            team1_batted_first,
            margin_runs,
            balls_remaining: 0,
        }
    }

    pub fn wickets(winner_id: TeamId, team1_batted_first: bool, balls_remaining: i64) -> Self {
        ResultEntry::Decided {
            winner_id,
            team1_batted_first,
            margin_runs: 0,
            balls_remaining,
        }
    }

    pub fn into_result(self, fixture: &Fixture) -> Result<MatchResult, StandingsError> {
        let ResultEntry::Decided {
            winner_id,
            team1_batted_first,
            margin_runs,
            balls_remaining,
        } = self
        else {
            return Ok(MatchResult::NoResult);
        };

        if !fixture.involves(winner_id) {
            return Err(StandingsError::WinnerNotInFixture {
                fixture_id: fixture.id,
                winner_id,
            });
        }
        let winner_batted_first = (winner_id == fixture.team1_id) == team1_batted_first;

        if winner_batted_first {
            let margin = u32::try_from(margin_runs)
                .ok()
                .filter(|m| *m > 0)
                .ok_or(StandingsError::NonPositiveMargin {
                    fixture_id: fixture.id,
                })?;
            return Ok(MatchResult::RunsWin {
                winner_id,
                margin_runs: margin,
                first_innings_score: BASELINE_INNINGS_SCORE + margin,
                first_innings_overs: Overs::FULL_INNINGS,
                second_innings_score: BASELINE_INNINGS_SCORE,
                second_innings_overs: Overs::FULL_INNINGS,
            });
        }

        let balls_left = u32::try_from(balls_remaining)
            .ok()
            .filter(|b| *b <= MAX_BALLS_REMAINING)
            .ok_or(StandingsError::BallsRemainingOutOfRange {
                fixture_id: fixture.id,
                balls_remaining,
            })?;
        Ok(MatchResult::WicketsWin {
            winner_id,
            balls_remaining: balls_left,
            wickets_margin: None,
            first_innings_score: BASELINE_INNINGS_SCORE,
            first_innings_overs: Overs::FULL_INNINGS,
            second_innings_score: BASELINE_INNINGS_SCORE + 1,
            second_innings_overs: Overs::from_balls(INNINGS_BALLS - balls_left),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn fixture() -> Fixture {
        let date = Utc.with_ymd_and_hms(2025, 5, 6, 14, 0, 0).unwrap();
        Fixture::scheduled(56, 56, "Wankhede Stadium, Mumbai", date, 6, 3)
    }

    #[test]
    fn runs_entry_infers_baseline_innings() {
        let result = ResultEntry::runs(6, true, 20).into_result(&fixture()).unwrap();
        let (first, second) = result.innings().unwrap();
        assert_eq!(first.runs, 180);
        assert_eq!(second.runs, 160);
        assert_eq!(first.overs, Overs::FULL_INNINGS);
    }

    #[test]
    fn team2_batting_first_and_winning_is_a_runs_win() {
        let result = ResultEntry::runs(3, false, 5).into_result(&fixture()).unwrap();
        assert!(matches!(result, MatchResult::RunsWin { winner_id: 3, margin_runs: 5, .. }));
        assert_eq!(result.batted_first(&fixture()), Some(3));
    }

    #[test]
    fn wickets_entry_converts_balls_left_to_overs() {
        let result = ResultEntry::wickets(3, true, 12).into_result(&fixture()).unwrap();
        let (_, chase) = result.innings().unwrap();
        assert_eq!(chase.overs.to_string(), "18.0");
        assert_eq!(chase.runs, 161);

        let last_ball = ResultEntry::wickets(3, true, 0).into_result(&fixture()).unwrap();
        assert_eq!(last_ball.innings().unwrap().1.overs, Overs::FULL_INNINGS);
    }

    #[test]
    fn bad_margins_are_rejected() {
        let err = ResultEntry::runs(6, true, 0).into_result(&fixture()).unwrap_err();
        assert!(matches!(err, StandingsError::NonPositiveMargin { fixture_id: 56 }));
        let err = ResultEntry::runs(6, true, -4).into_result(&fixture()).unwrap_err();
        assert!(matches!(err, StandingsError::NonPositiveMargin { .. }));
        let err = ResultEntry::wickets(3, true, 120).into_result(&fixture()).unwrap_err();
        assert!(matches!(err, StandingsError::BallsRemainingOutOfRange { balls_remaining: 120, .. }));
        let err = ResultEntry::wickets(9, true, 10).into_result(&fixture()).unwrap_err();
        assert!(matches!(err, StandingsError::WinnerNotInFixture { winner_id: 9, .. }));
    }
}
