use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::warn;
use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::error::StandingsError;
use crate::state::{
    Baseline, Fixture, IngestMode, Overs, SimState, Team, TeamId, TeamRegistry, TeamTable,
};

const BUNDLED_SEED_JSON: &str = include_str!("../data/ipl_2025.json");

static BUNDLED: OnceCell<Seed> = OnceCell::new();

/// The immutable starting point: registered teams with their pre-simulation totals, and
/// the fixtures still to be decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub teams: TeamTable,
    pub fixtures: Vec<Fixture>,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    teams: Vec<SeedTeam>,
    fixtures: Vec<Fixture>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedTeam {
    id: TeamId,
    name: String,
    short: String,
    color: String,
    #[serde(default)]
    matches: u32,
    #[serde(default)]
    won: u32,
    #[serde(default)]
    lost: u32,
    #[serde(default)]
    no_result: u32,
    #[serde(default)]
    points: u32,
    // "runs/overs", e.g. "1938/205.1".
    #[serde(default)]
    scored: Option<String>,
    #[serde(default)]
    conceded: Option<String>,
}

impl SeedTeam {
    fn into_team(self) -> Result<Team> {
        let (runs_scored, balls_faced) = parse_runs_overs(self.scored.as_deref())
            .with_context(|| format!("team {} scored totals", self.id))?;
        let (runs_conceded, balls_bowled) = parse_runs_overs(self.conceded.as_deref())
            .with_context(|| format!("team {} conceded totals", self.id))?;
        Ok(Team {
            id: self.id,
            name: self.name,
            short: self.short,
            color: self.color,
            matches: self.matches,
            won: self.won,
            lost: self.lost,
            no_result: self.no_result,
            points: self.points,
            runs_scored,
            balls_faced,
            runs_conceded,
            balls_bowled,
        })
    }
}

/// Parses a `"runs/overs"` cell into `(runs, balls)`. A missing cell counts as nothing played.
pub fn parse_runs_overs(raw: Option<&str>) -> Result<(u32, u32)> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok((0, 0));
    };
    let (runs, overs) = raw
        .split_once('/')
        .ok_or_else(|| anyhow!("expected runs/overs, got {raw:?}"))?;
    let runs = runs
        .trim()
        .parse::<u32>()
        .with_context(|| format!("runs in {raw:?}"))?;
    let overs: Overs = overs.parse()?;
    Ok((runs, overs.to_balls()))
}

impl Seed {
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: SeedFile = serde_json::from_str(raw).context("parse seed json")?;
        let teams = file
            .teams
            .into_iter()
            .map(SeedTeam::into_team)
            .collect::<Result<Vec<_>>>()?;
        let seed = Seed {
            teams: TeamTable::from_teams(teams)?,
            fixtures: file.fixtures,
        };
        seed.validate()?;
        Ok(seed)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            fs::read_to_string(path).with_context(|| format!("read seed {}", path.display()))?;
        Seed::from_json(&raw).with_context(|| format!("load seed {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), StandingsError> {
        for team in &self.teams {
            team.check_consistency()?;
        }
        self.registry(Baseline::Seed).check_fixtures(&self.fixtures)
    }

    pub fn registry(&self, baseline: Baseline) -> TeamRegistry {
        TeamRegistry::new(self.teams.clone(), baseline)
    }

    /// A fresh coordinator over deep copies of the seed.
    pub fn start(&self, baseline: Baseline, ingest: IngestMode) -> Result<SimState, StandingsError> {
        SimState::new(self.registry(baseline), self.fixtures.clone(), ingest)
    }

    pub fn resume(
        &self,
        baseline: Baseline,
        ingest: IngestMode,
        fixtures: Vec<Fixture>,
    ) -> Result<SimState, StandingsError> {
        SimState::restore(self.registry(baseline), self.fixtures.clone(), fixtures, ingest)
    }

    /// Resumes from `saved` when it still matches this seed, otherwise starts over.
    pub fn resume_or_start(
        &self,
        baseline: Baseline,
        ingest: IngestMode,
        saved: Option<Vec<Fixture>>,
    ) -> Result<SimState, StandingsError> {
        if let Some(fixtures) = saved {
            match self.resume(baseline, ingest, fixtures) {
                Ok(state) => return Ok(state),
                Err(err) => warn!("saved session does not fit the seed ({err}); starting fresh"),
            }
        }
        self.start(baseline, ingest)
    }
}

/// The seed at `path`, or the bundled one.
pub fn load_or_bundled(path: Option<&Path>) -> Result<Seed> {
    match path {
        Some(path) => Seed::load(path),
        None => bundled().cloned(),
    }
}

/// The IPL 2025 table as of match 55, with the last fifteen league fixtures unplayed.
pub fn bundled() -> Result<&'static Seed> {
    BUNDLED.get_or_try_init(|| Seed::from_json(BUNDLED_SEED_JSON).context("bundled seed"))
}
