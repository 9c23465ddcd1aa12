use chrono::{DateTime, Utc};
use log::info;

use crate::ranking::{self, RankedTeam};
use crate::state::{Fixture, TeamTable};

pub fn is_complete(fixtures: &[Fixture]) -> bool {
    !fixtures.is_empty() && fixtures.iter().all(Fixture::completed)
}

/// Tracks whether the "all fixtures resolved" prompt should be shown.
///
/// A dismissal sticks until the fixture list becomes incomplete again (a reset), so the
/// user is not asked twice about the same finished table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionPrompt {
    ready: bool,
    dismissed: bool,
}

impl CompletionPrompt {
    pub fn observe(&mut self, fixtures: &[Fixture]) {
        let complete = is_complete(fixtures);
        if !complete {
            self.dismissed = false;
        }
        self.ready = complete && !self.dismissed;
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
        self.ready = false;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

/// A ranked table frozen at finalization. It owns its rows, so later changes to the live
/// teams cannot reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalSnapshot {
    ranked: Vec<RankedTeam>,
    finalized_at: DateTime<Utc>,
}

impl FinalSnapshot {
    pub fn ranked(&self) -> &[RankedTeam] {
        &self.ranked
    }

    pub fn finalized_at(&self) -> DateTime<Utc> {
        self.finalized_at
    }

    pub fn qualifiers(&self, slots: usize) -> &[RankedTeam] {
        ranking::qualifiers(&self.ranked, slots)
    }
}

pub fn finalize(teams: &TeamTable) -> FinalSnapshot {
    let ranked = ranking::rank_teams(teams);
    if let Some(leader) = ranked.first() {
        info!(
            "finalized standings: {} teams, {} on top with {} points",
            ranked.len(),
            leader.team.short,
            leader.team.points
        );
    }
    FinalSnapshot {
        ranked,
        finalized_at: Utc::now(),
    }
}
