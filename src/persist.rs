use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, warn};
use rusqlite::{Connection, OptionalExtension, params};

use crate::finalize::FinalSnapshot;
use crate::ranking::{self, RankedTeam};
use crate::state::{Fixture, Standings, Team};

pub const RANKED_TEAMS_KEY: &str = "rankedTeams";
pub const TEAMS_KEY: &str = "teams";
pub const FIXTURES_KEY: &str = "fixtures";

const STORE_DIR: &str = "standings_sim";
const STORE_FILE: &str = "standings.sqlite";

/// A flat string-to-string slot store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create store dir {}", parent.display()))?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("open sqlite store {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory sqlite store")?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .context("create sqlite schema")?;
    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .with_context(|| format!("read slot {key}"))
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
                "#,
                params![key, value, Utc::now().to_rfc3339()],
            )
            .with_context(|| format!("write slot {key}"))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .with_context(|| format!("remove slot {key}"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}

/// Opens the sqlite store at `path`, or an in-memory one when no path is configured.
pub fn open_store(path: Option<&Path>) -> Result<Box<dyn KeyValueStore>> {
    match path {
        Some(path) => Ok(Box::new(SqliteStore::open(path)?)),
        None => {
            warn!("no store path resolved; session will not outlive this process");
            Ok(Box::new(MemoryStore::new()))
        }
    }
}

/// What the results surface can show.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// The finalized table from `rankedTeams`.
    Final(Vec<RankedTeam>),
    /// No final table yet; live teams from `teams`, ranked on read.
    Provisional(Vec<RankedTeam>),
    NoData,
}

pub fn write_final_snapshot(store: &mut dyn KeyValueStore, snapshot: &FinalSnapshot) -> Result<()> {
    let json = serde_json::to_string(snapshot.ranked()).context("serialize ranked teams")?;
    store.put(RANKED_TEAMS_KEY, &json)?;
    info!(
        "wrote {} ranked teams to {RANKED_TEAMS_KEY} (finalized {})",
        snapshot.ranked().len(),
        snapshot.finalized_at().to_rfc3339()
    );
    Ok(())
}

pub fn clear_final_snapshot(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove(RANKED_TEAMS_KEY)
}

pub fn save_session(store: &mut dyn KeyValueStore, standings: &Standings) -> Result<()> {
    let fixtures = serde_json::to_string(&standings.fixtures).context("serialize fixtures")?;
    let teams = serde_json::to_string(&standings.teams).context("serialize teams")?;
    store.put(FIXTURES_KEY, &fixtures)?;
    store.put(TEAMS_KEY, &teams)?;
    Ok(())
}

/// The persisted fixture list, or `None` if there is none or it no longer parses.
pub fn load_session_fixtures(store: &dyn KeyValueStore) -> Result<Option<Vec<Fixture>>> {
    let Some(raw) = store.get(FIXTURES_KEY)? else {
        return Ok(None);
    };
    match serde_json::from_str::<Vec<Fixture>>(&raw) {
        Ok(fixtures) => Ok(Some(fixtures)),
        Err(err) => {
            warn!("ignoring unreadable {FIXTURES_KEY} slot: {err}");
            Ok(None)
        }
    }
}

/// Reads `rankedTeams`, falling back to `teams`, and finally to `NoData`. A slot that
/// fails to parse is skipped like a missing one.
pub fn load_results(store: &dyn KeyValueStore) -> Result<ResultsView> {
    if let Some(raw) = store.get(RANKED_TEAMS_KEY)? {
        match serde_json::from_str::<Vec<RankedTeam>>(&raw) {
            Ok(ranked) => return Ok(ResultsView::Final(ranked)),
            Err(err) => warn!("ignoring unreadable {RANKED_TEAMS_KEY} slot: {err}"),
        }
    }
    if let Some(raw) = store.get(TEAMS_KEY)? {
        match serde_json::from_str::<Vec<Team>>(&raw) {
            Ok(teams) => return Ok(ResultsView::Provisional(ranking::rank_teams(&teams))),
            Err(err) => warn!("ignoring unreadable {TEAMS_KEY} slot: {err}"),
        }
    }
    Ok(ResultsView::NoData)
}

pub fn default_store_path() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join(STORE_FILE))
}

fn app_data_dir() -> Option<PathBuf> {
    // Prefer XDG cache.
    if let Ok(base) = std::env::var("XDG_CACHE_HOME")
        && !base.trim().is_empty()
    {
        return Some(PathBuf::from(base).join(STORE_DIR));
    }
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(PathBuf::from(home).join(".cache").join(STORE_DIR))
}
