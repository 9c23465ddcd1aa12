use thiserror::Error;

use crate::state::{FixtureId, TeamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Lookup,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StandingsError {
    #[error("winner {winner_id} is not playing in fixture {fixture_id}")]
    WinnerNotInFixture { fixture_id: FixtureId, winner_id: TeamId },

    #[error("run margin must be a positive number (fixture {fixture_id})")]
    NonPositiveMargin { fixture_id: FixtureId },

    #[error("balls remaining must be between 0 and 119, got {balls_remaining} (fixture {fixture_id})")]
    BallsRemainingOutOfRange {
        fixture_id: FixtureId,
        balls_remaining: i64,
    },

    #[error("invalid overs value: {raw}")]
    InvalidOvers { raw: String },

    #[error("fixture {fixture_id} pits team {team_id} against itself")]
    SameTeamFixture { fixture_id: FixtureId, team_id: TeamId },

    #[error("team {team_id} has inconsistent counters: {reason}")]
    InconsistentTeam { team_id: TeamId, reason: String },

    #[error("duplicate team id {team_id}")]
    DuplicateTeam { team_id: TeamId },

    #[error("duplicate fixture id {fixture_id}")]
    DuplicateFixture { fixture_id: FixtureId },

    #[error("saved fixture {fixture_id} does not match the seeded schedule")]
    ScheduleMismatch { fixture_id: FixtureId },

    #[error("fixture {fixture_id} not found")]
    UnknownFixture { fixture_id: FixtureId },

    #[error("team {team_id} referenced by fixture {fixture_id} not found")]
    UnknownTeam { fixture_id: FixtureId, team_id: TeamId },
}

impl StandingsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StandingsError::UnknownFixture { .. } | StandingsError::UnknownTeam { .. } => {
                ErrorKind::Lookup
            }
            _ => ErrorKind::Validation,
        }
    }
}
