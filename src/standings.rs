use log::debug;

use crate::error::StandingsError;
use crate::state::{Fixture, FixtureId, MatchResult, Standings, Team, TeamId, TeamRegistry, TeamTable};

/// One team's share of a single match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct MatchLine {
    won: u32,
    lost: u32,
    no_result: u32,
    points: u32,
    runs_scored: u32,
    balls_faced: u32,
    runs_conceded: u32,
    balls_bowled: u32,
}

impl Team {
    fn absorb(&mut self, line: &MatchLine) {
        self.matches += 1;
        self.won += line.won;
        self.lost += line.lost;
        self.no_result += line.no_result;
        self.points += line.points;
        self.runs_scored += line.runs_scored;
        self.balls_faced += line.balls_faced;
        self.runs_conceded += line.runs_conceded;
        self.balls_bowled += line.balls_bowled;
    }
}

/// Records `result` against `fixture_id` and returns the next standings.
///
/// A fixture seen for the first time gets a single-match delta on top of the current
/// team table. Editing an already completed fixture rebuilds every team from the full
/// fixture list so the old result is never counted twice.
pub fn apply_result(
    registry: &TeamRegistry,
    standings: &Standings,
    fixture_id: FixtureId,
    result: MatchResult,
) -> Result<Standings, StandingsError> {
    let position = standings
        .fixtures
        .iter()
        .position(|f| f.id == fixture_id)
        .ok_or(StandingsError::UnknownFixture { fixture_id })?;
    let current = &standings.fixtures[position];
    result.validate_for(current)?;
    let was_completed = current.completed();

    let mut fixtures = standings.fixtures.clone();
    fixtures[position].complete(result);

    let teams = if was_completed {
        debug!("fixture {fixture_id} edited; recomputing all team stats");
        recompute_all(registry, &fixtures)?
    } else {
        let mut teams = standings.teams.clone();
        apply_match_stats(&mut teams, &fixtures[position])?;
        teams
    };

    Ok(Standings { fixtures, teams })
}

/// Rebuilds every team from the registry baseline plus all completed fixtures, in list order.
pub fn recompute_all(
    registry: &TeamRegistry,
    fixtures: &[Fixture],
) -> Result<TeamTable, StandingsError> {
    let mut teams = registry.baseline_teams();
    for fixture in fixtures.iter().filter(|f| f.completed()) {
        apply_match_stats(&mut teams, fixture)?;
    }
    Ok(teams)
}

/// Adds one completed fixture to `teams`. Both teams are looked up before either is touched.
pub fn apply_match_stats(teams: &mut TeamTable, fixture: &Fixture) -> Result<(), StandingsError> {
    let Some(result) = fixture.result() else {
        return Ok(());
    };
    for team_id in [fixture.team1_id, fixture.team2_id] {
        if !teams.contains(team_id) {
            return Err(StandingsError::UnknownTeam {
                fixture_id: fixture.id,
                team_id,
            });
        }
    }

    let [(id_a, line_a), (id_b, line_b)] = match_lines(fixture, result)?;
    for (team_id, line) in [(id_a, line_a), (id_b, line_b)] {
        if let Some(team) = teams.get_mut(team_id) {
            team.absorb(&line);
        }
    }
    Ok(())
}

fn match_lines(
    fixture: &Fixture,
    result: &MatchResult,
) -> Result<[(TeamId, MatchLine); 2], StandingsError> {
    result.validate_for(fixture)?;

    let (Some(winner_id), Some((first, second)), Some(batting_first)) = (
        result.winner_id(),
        result.innings(),
        result.batted_first(fixture),
    ) else {
        let shared = MatchLine {
            no_result: 1,
            points: 1,
            ..MatchLine::default()
        };
        return Ok([(fixture.team1_id, shared), (fixture.team2_id, shared)]);
    };

    let chasing = fixture
        .opponent_of(batting_first)
        .ok_or(StandingsError::WinnerNotInFixture {
            fixture_id: fixture.id,
            winner_id,
        })?;
    let first_balls = first.overs.to_balls();
    let second_balls = second.overs.to_balls();

    let mut batting_first_line = MatchLine {
        runs_scored: first.runs,
        balls_faced: first_balls,
        runs_conceded: second.runs,
        balls_bowled: second_balls,
        ..MatchLine::default()
    };
    let mut chasing_line = MatchLine {
        runs_scored: second.runs,
        balls_faced: second_balls,
        runs_conceded: first.runs,
        balls_bowled: first_balls,
        ..MatchLine::default()
    };

    let (winner_line, loser_line) = if winner_id == batting_first {
        (&mut batting_first_line, &mut chasing_line)
    } else {
        (&mut chasing_line, &mut batting_first_line)
    };
    winner_line.won = 1;
    winner_line.points = 2;
    loser_line.lost = 1;

    Ok([(batting_first, batting_first_line), (chasing, chasing_line)])
}
