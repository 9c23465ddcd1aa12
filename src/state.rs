use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::entry::ResultEntry;
use crate::error::StandingsError;
use crate::finalize::{self, CompletionPrompt, FinalSnapshot};
use crate::outcome_gen;
use crate::ranking::{self, RankedTeam};
use crate::standings;

pub type TeamId = u32;
pub type FixtureId = u32;

pub const BALLS_PER_OVER: u32 = 6;
pub const INNINGS_OVERS: u32 = 20;
pub const INNINGS_BALLS: u32 = INNINGS_OVERS * BALLS_PER_OVER;
pub const MAX_BALLS_REMAINING: u32 = INNINGS_BALLS - 1;

/// Cricket overs in `N.B` notation: `N` complete overs plus `B` balls, `B` in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Overs {
    full: u32,
    balls: u32,
}

impl Overs {
    pub const FULL_INNINGS: Overs = Overs {
        full: INNINGS_OVERS,
        balls: 0,
    };

    pub fn new(full: u32, balls: u32) -> Result<Self, StandingsError> {
        if balls >= BALLS_PER_OVER {
            return Err(StandingsError::InvalidOvers {
                raw: format!("{full}.{balls}"),
            });
        }
        Ok(Self { full, balls })
    }

    pub fn from_balls(total: u32) -> Self {
        Self {
            full: total / BALLS_PER_OVER,
            balls: total % BALLS_PER_OVER,
        }
    }

    pub fn to_balls(self) -> u32 {
        self.full * BALLS_PER_OVER + self.balls
    }
}

impl FromStr for Overs {
    type Err = StandingsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || StandingsError::InvalidOvers {
            raw: raw.to_string(),
        };
        let trimmed = raw.trim();
        let (full, balls) = match trimmed.split_once('.') {
            Some((full, balls)) => (full, balls),
            None => (trimmed, "0"),
        };
        let full = full.parse::<u32>().map_err(|_| invalid())?;
        // "19.50" would otherwise sneak through as 19.5.
        if balls.len() != 1 {
            return Err(invalid());
        }
        let balls = balls.parse::<u32>().map_err(|_| invalid())?;
        Overs::new(full, balls).map_err(|_| invalid())
    }
}

impl fmt::Display for Overs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.full, self.balls)
    }
}

impl TryFrom<String> for Overs {
    type Error = StandingsError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<Overs> for String {
    fn from(overs: Overs) -> Self {
        overs.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short: String,
    pub color: String,
    pub matches: u32,
    pub won: u32,
    pub lost: u32,
    pub no_result: u32,
    pub points: u32,
    pub runs_scored: u32,
    pub balls_faced: u32,
    pub runs_conceded: u32,
    pub balls_bowled: u32,
}

impl Team {
    pub fn new(id: TeamId, name: &str, short: &str, color: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            short: short.to_string(),
            color: color.to_string(),
            matches: 0,
            won: 0,
            lost: 0,
            no_result: 0,
            points: 0,
            runs_scored: 0,
            balls_faced: 0,
            runs_conceded: 0,
            balls_bowled: 0,
        }
    }

    pub fn with_zeroed_stats(&self) -> Self {
        Team::new(self.id, &self.name, &self.short, &self.color)
    }

    pub fn check_consistency(&self) -> Result<(), StandingsError> {
        if self.matches != self.won + self.lost + self.no_result {
            return Err(StandingsError::InconsistentTeam {
                team_id: self.id,
                reason: format!(
                    "matches {} != won {} + lost {} + no result {}",
                    self.matches, self.won, self.lost, self.no_result
                ),
            });
        }
        if self.points != 2 * self.won + self.no_result {
            return Err(StandingsError::InconsistentTeam {
                team_id: self.id,
                reason: format!(
                    "points {} != 2 * won {} + no result {}",
                    self.points, self.won, self.no_result
                ),
            });
        }
        Ok(())
    }
}

/// Teams in registration order, indexed by id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Team>", into = "Vec<Team>")]
pub struct TeamTable {
    teams: Vec<Team>,
    index: HashMap<TeamId, usize>,
}

impl TeamTable {
    pub fn from_teams(teams: Vec<Team>) -> Result<Self, StandingsError> {
        let mut index = HashMap::with_capacity(teams.len());
        for (idx, team) in teams.iter().enumerate() {
            if index.insert(team.id, idx).is_some() {
                return Err(StandingsError::DuplicateTeam { team_id: team.id });
            }
        }
        Ok(Self { teams, index })
    }

    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.index.get(&id).map(|idx| &self.teams[*idx])
    }

    pub fn get_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        let idx = *self.index.get(&id)?;
        self.teams.get_mut(idx)
    }

    pub fn contains(&self, id: TeamId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Team> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn into_vec(self) -> Vec<Team> {
        self.teams
    }

    fn map_teams(&self, f: impl Fn(&Team) -> Team) -> Self {
        Self {
            teams: self.teams.iter().map(f).collect(),
            index: self.index.clone(),
        }
    }
}

impl TryFrom<Vec<Team>> for TeamTable {
    type Error = StandingsError;

    fn try_from(teams: Vec<Team>) -> Result<Self, Self::Error> {
        TeamTable::from_teams(teams)
    }
}

impl From<TeamTable> for Vec<Team> {
    fn from(table: TeamTable) -> Self {
        table.into_vec()
    }
}

impl<'a> IntoIterator for &'a TeamTable {
    type Item = &'a Team;
    type IntoIter = std::slice::Iter<'a, Team>;

    fn into_iter(self) -> Self::IntoIter {
        self.teams.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InningsLine {
    pub runs: u32,
    pub overs: Overs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum MatchResult {
    #[serde(rename = "noResult")]
    NoResult,
    /// The winner batted first.
    #[serde(rename = "runs")]
    RunsWin {
        winner_id: TeamId,
        margin_runs: u32,
        first_innings_score: u32,
        first_innings_overs: Overs,
        second_innings_score: u32,
        second_innings_overs: Overs,
    },
    /// The winner chased.
    #[serde(rename = "wickets")]
    WicketsWin {
        winner_id: TeamId,
        balls_remaining: u32,
        // Wickets in hand; display only.
        #[serde(default)]
        wickets_margin: Option<u32>,
        first_innings_score: u32,
        first_innings_overs: Overs,
        second_innings_score: u32,
        second_innings_overs: Overs,
    },
}

impl MatchResult {
    pub fn winner_id(&self) -> Option<TeamId> {
        match self {
            MatchResult::NoResult => None,
            MatchResult::RunsWin { winner_id, .. } | MatchResult::WicketsWin { winner_id, .. } => {
                Some(*winner_id)
            }
        }
    }

    /// Both innings in batting order, or `None` for a no result.
    pub fn innings(&self) -> Option<(InningsLine, InningsLine)> {
        match self {
            MatchResult::NoResult => None,
            MatchResult::RunsWin {
                first_innings_score,
                first_innings_overs,
                second_innings_score,
                second_innings_overs,
                ..
            }
            | MatchResult::WicketsWin {
                first_innings_score,
                first_innings_overs,
                second_innings_score,
                second_innings_overs,
                ..
            } => Some((
                InningsLine {
                    runs: *first_innings_score,
                    overs: *first_innings_overs,
                },
                InningsLine {
                    runs: *second_innings_score,
                    overs: *second_innings_overs,
                },
            )),
        }
    }

    /// The side that batted first, or `None` for a no result.
    pub fn batted_first(&self, fixture: &Fixture) -> Option<TeamId> {
        match self {
            MatchResult::NoResult => None,
            MatchResult::RunsWin { winner_id, .. } => Some(*winner_id),
            MatchResult::WicketsWin { winner_id, .. } => fixture.opponent_of(*winner_id),
        }
    }

    pub fn validate_for(&self, fixture: &Fixture) -> Result<(), StandingsError> {
        if let Some(winner_id) = self.winner_id()
            && !fixture.involves(winner_id)
        {
            return Err(StandingsError::WinnerNotInFixture {
                fixture_id: fixture.id,
                winner_id,
            });
        }
        match self {
            MatchResult::RunsWin { margin_runs: 0, .. } => Err(StandingsError::NonPositiveMargin {
                fixture_id: fixture.id,
            }),
            MatchResult::WicketsWin {
                balls_remaining, ..
            } if *balls_remaining > MAX_BALLS_REMAINING => {
                Err(StandingsError::BallsRemainingOutOfRange {
                    fixture_id: fixture.id,
                    balls_remaining: i64::from(*balls_remaining),
                })
            }
            _ => Ok(()),
        }
    }

    pub fn describe(&self, team1: &Team, team2: &Team) -> String {
        let short_of = |id: TeamId| {
            if id == team1.id {
                team1.short.as_str()
            } else if id == team2.id {
                team2.short.as_str()
            } else {
                "?"
            }
        };
        match self {
            MatchResult::NoResult => "No result".to_string(),
            MatchResult::RunsWin {
                winner_id,
                margin_runs,
                ..
            } => format!("{} won by {} runs", short_of(*winner_id), margin_runs),
            MatchResult::WicketsWin {
                winner_id,
                balls_remaining,
                wickets_margin: Some(wickets),
                ..
            } => format!(
                "{} won by {} wickets ({} balls left)",
                short_of(*winner_id),
                wickets,
                balls_remaining
            ),
            MatchResult::WicketsWin {
                winner_id,
                balls_remaining,
                wickets_margin: None,
                ..
            } => format!(
                "{} won with {} balls remaining",
                short_of(*winner_id),
                balls_remaining
            ),
        }
    }
}

/// A scheduled match. `completed` is derived from `result`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FixtureRecord", into = "FixtureRecord")]
pub struct Fixture {
    pub id: FixtureId,
    pub match_number: u32,
    pub venue: String,
    pub date: DateTime<Utc>,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    result: Option<MatchResult>,
}

impl Fixture {
    pub fn scheduled(
        id: FixtureId,
        match_number: u32,
        venue: &str,
        date: DateTime<Utc>,
        team1_id: TeamId,
        team2_id: TeamId,
    ) -> Self {
        Self {
            id,
            match_number,
            venue: venue.to_string(),
            date,
            team1_id,
            team2_id,
            result: None,
        }
    }

    pub fn completed(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    pub fn complete(&mut self, result: MatchResult) {
        self.result = Some(result);
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }

    pub fn opponent_of(&self, team_id: TeamId) -> Option<TeamId> {
        if team_id == self.team1_id {
            Some(self.team2_id)
        } else if team_id == self.team2_id {
            Some(self.team1_id)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureRecord {
    id: FixtureId,
    match_number: u32,
    venue: String,
    date: DateTime<Utc>,
    team1_id: TeamId,
    team2_id: TeamId,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    result: Option<MatchResult>,
}

impl TryFrom<FixtureRecord> for Fixture {
    type Error = String;

    fn try_from(raw: FixtureRecord) -> Result<Self, Self::Error> {
        if raw.completed != raw.result.is_some() {
            return Err(format!(
                "fixture {}: completed={} disagrees with result presence",
                raw.id, raw.completed
            ));
        }
        Ok(Fixture {
            id: raw.id,
            match_number: raw.match_number,
            venue: raw.venue,
            date: raw.date,
            team1_id: raw.team1_id,
            team2_id: raw.team2_id,
            result: raw.result,
        })
    }
}

impl From<Fixture> for FixtureRecord {
    fn from(fixture: Fixture) -> Self {
        FixtureRecord {
            id: fixture.id,
            match_number: fixture.match_number,
            venue: fixture.venue,
            date: fixture.date,
            team1_id: fixture.team1_id,
            team2_id: fixture.team2_id,
            completed: fixture.result.is_some(),
            result: fixture.result,
        }
    }
}

/// Where `recompute_all` starts counting from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Baseline {
    /// Keep the seed's pre-tournament statistics.
    #[default]
    Seed,
    /// Identity fields only; every counter starts at zero.
    Zeroed,
}

#[derive(Debug, Clone)]
pub struct TeamRegistry {
    seed: TeamTable,
    baseline: Baseline,
}

impl TeamRegistry {
    pub fn new(seed: TeamTable, baseline: Baseline) -> Self {
        Self { seed, baseline }
    }

    pub fn baseline_teams(&self) -> TeamTable {
        match self.baseline {
            Baseline::Seed => self.seed.clone(),
            Baseline::Zeroed => self.seed.map_teams(Team::with_zeroed_stats),
        }
    }

    pub fn check_fixtures(&self, fixtures: &[Fixture]) -> Result<(), StandingsError> {
        let mut seen = HashSet::with_capacity(fixtures.len());
        for fixture in fixtures {
            if !seen.insert(fixture.id) {
                return Err(StandingsError::DuplicateFixture {
                    fixture_id: fixture.id,
                });
            }
            if fixture.team1_id == fixture.team2_id {
                return Err(StandingsError::SameTeamFixture {
                    fixture_id: fixture.id,
                    team_id: fixture.team1_id,
                });
            }
            for team_id in [fixture.team1_id, fixture.team2_id] {
                if !self.seed.contains(team_id) {
                    return Err(StandingsError::UnknownTeam {
                        fixture_id: fixture.id,
                        team_id,
                    });
                }
            }
            if let Some(result) = fixture.result() {
                result.validate_for(fixture)?;
            }
        }
        Ok(())
    }
}

/// One immutable view of the tournament: the fixture list and the team table derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    pub fixtures: Vec<Fixture>,
    pub teams: TeamTable,
}

impl Standings {
    pub fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == id)
    }

    pub fn remaining_count(&self) -> usize {
        self.fixtures.iter().filter(|f| !f.completed()).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngestMode {
    /// Apply a single-match delta for new results; recompute only on edits.
    #[default]
    Incremental,
    /// Recompute every team from the fixture list after each result.
    FullRecompute,
}

#[derive(Debug, Clone)]
pub enum Command {
    RecordResult {
        fixture_id: FixtureId,
        result: MatchResult,
    },
    EnterResult {
        fixture_id: FixtureId,
        entry: ResultEntry,
    },
    SimulateRemaining,
    ResetAndSimulateAll,
    Reset,
    DismissCompletionPrompt,
}

/// Owns the live standings and swaps in the next snapshot once an operation succeeds.
#[derive(Debug, Clone)]
pub struct SimState {
    registry: TeamRegistry,
    seed_fixtures: Vec<Fixture>,
    standings: Standings,
    prompt: CompletionPrompt,
    ingest: IngestMode,
}

impl SimState {
    pub fn new(
        registry: TeamRegistry,
        seed_fixtures: Vec<Fixture>,
        ingest: IngestMode,
    ) -> Result<Self, StandingsError> {
        registry.check_fixtures(&seed_fixtures)?;
        let teams = standings::recompute_all(&registry, &seed_fixtures)?;
        let standings = Standings {
            fixtures: seed_fixtures.clone(),
            teams,
        };
        let mut prompt = CompletionPrompt::default();
        prompt.observe(&standings.fixtures);
        Ok(Self {
            registry,
            seed_fixtures,
            standings,
            prompt,
            ingest,
        })
    }

    /// Resumes a session from a persisted fixture list. The list must describe the same
    /// schedule as the seed; team statistics are always rebuilt from it.
    pub fn restore(
        registry: TeamRegistry,
        seed_fixtures: Vec<Fixture>,
        fixtures: Vec<Fixture>,
        ingest: IngestMode,
    ) -> Result<Self, StandingsError> {
        let mut state = SimState::new(registry, seed_fixtures, ingest)?;
        state.registry.check_fixtures(&fixtures)?;
        for fixture in &fixtures {
            let Some(seeded) = state.seed_fixtures.iter().find(|f| f.id == fixture.id) else {
                return Err(StandingsError::UnknownFixture {
                    fixture_id: fixture.id,
                });
            };
            if seeded.team1_id != fixture.team1_id || seeded.team2_id != fixture.team2_id {
                return Err(StandingsError::ScheduleMismatch {
                    fixture_id: fixture.id,
                });
            }
        }
        if let Some(missing) = state
            .seed_fixtures
            .iter()
            .find(|seeded| !fixtures.iter().any(|f| f.id == seeded.id))
        {
            return Err(StandingsError::UnknownFixture {
                fixture_id: missing.id,
            });
        }
        let teams = standings::recompute_all(&state.registry, &fixtures)?;
        state.standings = Standings { fixtures, teams };
        state.prompt.observe(&state.standings.fixtures);
        Ok(state)
    }

    pub fn registry(&self) -> &TeamRegistry {
        &self.registry
    }

    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.standings.fixtures
    }

    pub fn teams(&self) -> &TeamTable {
        &self.standings.teams
    }

    pub fn ranked(&self) -> Vec<RankedTeam> {
        ranking::rank_teams(&self.standings.teams)
    }

    pub fn remaining_count(&self) -> usize {
        self.standings.remaining_count()
    }

    pub fn is_complete(&self) -> bool {
        finalize::is_complete(&self.standings.fixtures)
    }

    /// True when every fixture is resolved and the user has not dismissed the prompt.
    pub fn completion_ready(&self) -> bool {
        self.prompt.is_ready()
    }

    pub fn finalize(&self) -> FinalSnapshot {
        finalize::finalize(&self.standings.teams)
    }

    fn initial_standings(&self) -> Result<Standings, StandingsError> {
        let fixtures = self.seed_fixtures.clone();
        let teams = standings::recompute_all(&self.registry, &fixtures)?;
        Ok(Standings { fixtures, teams })
    }

    fn record(&self, fixture_id: FixtureId, result: MatchResult) -> Result<Standings, StandingsError> {
        let mut next = standings::apply_result(&self.registry, &self.standings, fixture_id, result)?;
        if self.ingest == IngestMode::FullRecompute {
            next.teams = standings::recompute_all(&self.registry, &next.fixtures)?;
        }
        Ok(next)
    }

    fn simulate<R: Rng + ?Sized>(
        &self,
        fixtures: &[Fixture],
        rng: &mut R,
    ) -> Result<Standings, StandingsError> {
        let fixtures = outcome_gen::simulate_remaining(fixtures, rng);
        let teams = standings::recompute_all(&self.registry, &fixtures)?;
        Ok(Standings { fixtures, teams })
    }
}

pub fn apply_command<R: Rng + ?Sized>(
    state: &mut SimState,
    command: Command,
    rng: &mut R,
) -> Result<(), StandingsError> {
    let next = match command {
        Command::RecordResult { fixture_id, result } => {
            debug!("recording result for fixture {fixture_id}: {result:?}");
            state.record(fixture_id, result)?
        }
        Command::EnterResult { fixture_id, entry } => {
            let fixture = state
                .standings
                .fixture(fixture_id)
                .ok_or(StandingsError::UnknownFixture { fixture_id })?;
            let result = entry.into_result(fixture)?;
            state.record(fixture_id, result)?
        }
        Command::SimulateRemaining => {
            let remaining = state.remaining_count();
            let next = state.simulate(&state.standings.fixtures, rng)?;
            info!("simulated {remaining} remaining fixtures");
            next
        }
        Command::ResetAndSimulateAll => {
            let next = state.simulate(&state.seed_fixtures, rng)?;
            info!("reset and simulated all {} fixtures", next.fixtures.len());
            next
        }
        Command::Reset => {
            info!("resetting standings to the seed");
            state.initial_standings()?
        }
        Command::DismissCompletionPrompt => {
            state.prompt.dismiss();
            return Ok(());
        }
    };

    state.standings = next;
    state.prompt.observe(&state.standings.fixtures);
    if state.prompt.is_ready() {
        info!("all fixtures resolved; standings ready to finalize");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overs_parse_and_display() {
        let overs: Overs = "19.5".parse().unwrap();
        assert_eq!(overs.to_balls(), 119);
        assert_eq!(overs.to_string(), "19.5");
        assert_eq!("20".parse::<Overs>().unwrap(), Overs::FULL_INNINGS);
        assert_eq!(Overs::from_balls(1231).to_string(), "205.1");
    }

    #[test]
    fn overs_rejects_six_balls_and_garbage() {
        assert!("19.6".parse::<Overs>().is_err());
        assert!("19.50".parse::<Overs>().is_err());
        assert!("abc".parse::<Overs>().is_err());
        assert!(Overs::new(3, 6).is_err());
    }

    #[test]
    fn fixture_record_rejects_completed_without_result() {
        let raw = r#"{"id":1,"matchNumber":1,"venue":"V","date":"2025-05-06T14:00:00Z",
            "team1Id":1,"team2Id":2,"completed":true,"result":null}"#;
        assert!(serde_json::from_str::<Fixture>(raw).is_err());
    }

    #[test]
    fn result_serializes_with_type_tag() {
        let result = MatchResult::RunsWin {
            winner_id: 9,
            margin_runs: 12,
            first_innings_score: 180,
            first_innings_overs: Overs::FULL_INNINGS,
            second_innings_score: 168,
            second_innings_overs: Overs::FULL_INNINGS,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "runs");
        assert_eq!(json["marginRuns"], 12);
        assert_eq!(json["firstInningsOvers"], "20.0");
        let back: MatchResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn describe_names_the_winner_and_margin() {
        let rcb = Team::new(9, "Royal Challengers Bengaluru", "RCB", "#EC1C24");
        let gt = Team::new(3, "Gujarat Titans", "GT", "#1B2133");
        let chase = |wickets_margin| MatchResult::WicketsWin {
            winner_id: 3,
            balls_remaining: 9,
            wickets_margin,
            first_innings_score: 170,
            first_innings_overs: Overs::FULL_INNINGS,
            second_innings_score: 171,
            second_innings_overs: Overs::new(18, 3).unwrap(),
        };
        assert_eq!(chase(Some(6)).describe(&rcb, &gt), "GT won by 6 wickets (9 balls left)");
        assert_eq!(chase(None).describe(&rcb, &gt), "GT won with 9 balls remaining");
        assert_eq!(MatchResult::NoResult.describe(&rcb, &gt), "No result");
    }
}
