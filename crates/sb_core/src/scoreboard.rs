//! Scoreboard facade and the live summary ordering.
//!
//! The scoreboard orchestrates the team and match stores; it owns neither.
//! Stores are passed in as shared handles, so several scoreboards can be
//! constructed over the same pair and observe each other's changes.

use std::fmt;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::models::{Match, MatchState, Team};
use crate::store::EntityStore;

/// Store handle shared between scoreboard facades.
pub type SharedStore<T> = Arc<RwLock<EntityStore<T>>>;

/// Facade over the team and match stores.
#[derive(Clone)]
pub struct Scoreboard {
    teams: SharedStore<Arc<Team>>,
    matches: SharedStore<Match>,
}

impl Scoreboard {
    pub fn new(teams: SharedStore<Arc<Team>>, matches: SharedStore<Match>) -> Self {
        Self { teams, matches }
    }

    /// Scoreboard over a fresh, empty pair of stores.
    pub fn with_new_stores() -> Self {
        Self::new(
            Arc::new(RwLock::new(EntityStore::new())),
            Arc::new(RwLock::new(EntityStore::new())),
        )
    }

    /// Register a new team under the next free team id.
    pub fn add_team(&self, name: impl Into<String>) -> Result<Arc<Team>> {
        let mut teams = self.teams.write().expect("team store lock poisoned");
        let team = Arc::new(Team::new(teams.next_index(), name));
        let stored = teams.add(team)?;
        log::debug!("team {} registered: {}", stored.id, stored.name);
        Ok(stored.clone())
    }

    /// Create a match between two registered teams.
    ///
    /// The match id is allocated from the match store; the distinct-teams
    /// check is the match's own and propagates from construction.
    pub fn add_match(&self, home_team: Arc<Team>, away_team: Arc<Team>) -> Result<Match> {
        let mut matches = self.matches.write().expect("match store lock poisoned");
        let m = Match::new(matches.next_index(), home_team, away_team)?;
        let stored = matches.add(m)?;
        log::debug!(
            "match {} added: {} vs {}",
            stored.id(),
            stored.home_team().name,
            stored.away_team().name
        );
        Ok(stored.clone())
    }

    /// Create two fresh teams from the given names, then a match between
    /// them.
    ///
    /// No duplicate-name check: every call registers new team entities.
    pub fn add_match_by_names(
        &self,
        home_name: impl Into<String>,
        away_name: impl Into<String>,
    ) -> Result<Match> {
        let home = self.add_team(home_name)?;
        let away = self.add_team(away_name)?;
        self.add_match(home, away)
    }

    /// Start the match with the given id.
    pub fn start_match(&self, match_id: u32) -> Result<()> {
        let mut matches = self.matches.write().expect("match store lock poisoned");
        let m = matches.get_by_id_mut(match_id).ok_or(StoreError::NotFound(match_id))?;
        m.start()?;
        log::info!("match {} started", match_id);
        Ok(())
    }

    /// Overwrite both scores of a running match with absolute values.
    pub fn update_score(&self, match_id: u32, home_score: u32, away_score: u32) -> Result<()> {
        let mut matches = self.matches.write().expect("match store lock poisoned");
        let m = matches.get_by_id_mut(match_id).ok_or(StoreError::NotFound(match_id))?;
        m.set_score(home_score, away_score)?;
        log::debug!("match {} score set to {}-{}", match_id, home_score, away_score);
        Ok(())
    }

    /// Finish a running match.
    ///
    /// The match stays in the store with its final score; it only drops
    /// out of the live summary.
    pub fn finish_match(&self, match_id: u32) -> Result<()> {
        let mut matches = self.matches.write().expect("match store lock poisoned");
        let m = matches.get_by_id_mut(match_id).ok_or(StoreError::NotFound(match_id))?;
        m.finish()?;
        log::info!("match {} finished at {}-{}", match_id, m.home_score(), m.away_score());
        Ok(())
    }

    /// Snapshot of a single match, if it exists.
    pub fn match_by_id(&self, match_id: u32) -> Option<Match> {
        self.matches.read().expect("match store lock poisoned").get_by_id(match_id).cloned()
    }

    /// Look up a registered team by id.
    pub fn team_by_id(&self, team_id: u32) -> Option<Arc<Team>> {
        self.teams.read().expect("team store lock poisoned").get_by_id(team_id).cloned()
    }

    /// Matches currently in progress, ordered for display.
    ///
    /// Sorted by total score, highest first; ties are broken by match id,
    /// highest (most recently added) first. Ids are unique, so the order is
    /// total and deterministic. The returned matches are clones: a snapshot
    /// that later mutations do not retroactively change.
    pub fn summary(&self) -> Vec<Match> {
        let matches = self.matches.read().expect("match store lock poisoned");

        let mut live: Vec<Match> = matches
            .all()
            .iter()
            .filter(|m| m.state() == MatchState::InProgress)
            .cloned()
            .collect();

        live.sort_by(|a, b| {
            b.total_score().cmp(&a.total_score()).then_with(|| b.id().cmp(&a.id()))
        });

        live
    }

    /// The live summary as numbered display rows.
    pub fn summary_lines(&self) -> Vec<SummaryLine> {
        self.summary()
            .iter()
            .enumerate()
            .map(|(i, m)| SummaryLine::from_match(i + 1, m))
            .collect()
    }
}

/// One row of the rendered summary, e.g. `1. Spain 10 - Brazil 2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// Ordinal position in the summary, starting at 1.
    pub position: usize,
    pub home_team: String,
    pub home_score: u32,
    pub away_team: String,
    pub away_score: u32,
}

impl SummaryLine {
    fn from_match(position: usize, m: &Match) -> Self {
        Self {
            position,
            home_team: m.home_team().name.clone(),
            home_score: m.home_score(),
            away_team: m.away_team().name.clone(),
            away_score: m.away_score(),
        }
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {} - {} {}",
            self.position, self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
