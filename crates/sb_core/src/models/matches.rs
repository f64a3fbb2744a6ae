//! Match entity and its lifecycle state machine.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::models::team::Team;
use crate::store::Entity;

/// Lifecycle state of a match.
///
/// Transitions are one-directional: NotStarted → InProgress → Finished.
/// No transition can be repeated or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    NotStarted,
    InProgress,
    Finished,
}

/// A match between two distinct teams.
///
/// The match owns its score and lifecycle state but only references its
/// teams; the teams live in the team store and may outlive the match.
/// Scores are mutable only while the match is in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    id: u32,
    home_team: Arc<Team>,
    away_team: Arc<Team>,
    home_score: u32,
    away_score: u32,
    state: MatchState,
}

impl Match {
    /// Create a match in the `NotStarted` state with a 0-0 score.
    ///
    /// Fails when both teams carry the same id, regardless of their names.
    /// This is the only check performed at construction.
    pub fn new(id: u32, home_team: Arc<Team>, away_team: Arc<Team>) -> Result<Self, MatchError> {
        if home_team.id == away_team.id {
            return Err(MatchError::SameTeam);
        }

        Ok(Self {
            id,
            home_team,
            away_team,
            home_score: 0,
            away_score: 0,
            state: MatchState::NotStarted,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn home_team(&self) -> &Arc<Team> {
        &self.home_team
    }

    pub fn away_team(&self) -> &Arc<Team> {
        &self.away_team
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Sum of both scores, the primary summary sort key.
    pub fn total_score(&self) -> u32 {
        self.home_score + self.away_score
    }

    /// Start the match.
    pub fn start(&mut self) -> Result<(), MatchError> {
        match self.state {
            MatchState::NotStarted => {
                self.state = MatchState::InProgress;
                Ok(())
            }
            MatchState::InProgress => Err(MatchError::AlreadyStarted),
            MatchState::Finished => Err(MatchError::AlreadyFinished),
        }
    }

    /// Replace both scores with the given absolute values.
    ///
    /// Valid only while the match is in progress. A rejected call leaves
    /// both scores untouched.
    pub fn set_score(&mut self, home_score: u32, away_score: u32) -> Result<(), MatchError> {
        match self.state {
            MatchState::InProgress => {
                self.home_score = home_score;
                self.away_score = away_score;
                Ok(())
            }
            MatchState::NotStarted => Err(MatchError::NotStarted),
            MatchState::Finished => Err(MatchError::AlreadyFinished),
        }
    }

    /// End the match, freezing the score at its last value.
    pub fn finish(&mut self) -> Result<(), MatchError> {
        match self.state {
            MatchState::InProgress => {
                self.state = MatchState::Finished;
                Ok(())
            }
            MatchState::NotStarted => Err(MatchError::NotStarted),
            MatchState::Finished => Err(MatchError::AlreadyFinished),
        }
    }
}

impl Entity for Match {
    fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: u32, name: &str) -> Arc<Team> {
        Arc::new(Team::new(id, name))
    }

    #[test]
    fn test_same_team_id_rejected_regardless_of_name() {
        let err = Match::new(0, team(3, "Spain"), team(3, "Brazil")).unwrap_err();
        assert_eq!(err, MatchError::SameTeam);
    }

    #[test]
    fn test_new_match_is_not_started_at_nil_nil() {
        let m = Match::new(0, team(0, "Spain"), team(1, "Brazil")).unwrap();
        assert_eq!(m.state(), MatchState::NotStarted);
        assert_eq!((m.home_score(), m.away_score()), (0, 0));
    }

    #[test]
    fn test_start_twice_fails() {
        let mut m = Match::new(0, team(0, "Spain"), team(1, "Brazil")).unwrap();
        m.start().unwrap();
        assert_eq!(m.start(), Err(MatchError::AlreadyStarted));
    }

    #[test]
    fn test_finish_before_start_fails() {
        let mut m = Match::new(0, team(0, "Spain"), team(1, "Brazil")).unwrap();
        assert_eq!(m.finish(), Err(MatchError::NotStarted));
    }

    #[test]
    fn test_set_score_requires_in_progress() {
        let mut m = Match::new(0, team(0, "Spain"), team(1, "Brazil")).unwrap();
        assert_eq!(m.set_score(1, 0), Err(MatchError::NotStarted));

        m.start().unwrap();
        m.set_score(1, 0).unwrap();

        m.finish().unwrap();
        assert_eq!(m.set_score(2, 0), Err(MatchError::AlreadyFinished));
        // The rejected call must not have touched either score.
        assert_eq!((m.home_score(), m.away_score()), (1, 0));
    }

    #[test]
    fn test_set_score_is_absolute_not_incremental() {
        let mut m = Match::new(0, team(0, "Spain"), team(1, "Brazil")).unwrap();
        m.start().unwrap();
        m.set_score(10, 2).unwrap();
        m.set_score(3, 3).unwrap();
        assert_eq!((m.home_score(), m.away_score()), (3, 3));
    }

    #[test]
    fn test_finish_freezes_score() {
        let mut m = Match::new(0, team(0, "Spain"), team(1, "Brazil")).unwrap();
        m.start().unwrap();
        m.set_score(2, 1).unwrap();
        m.finish().unwrap();

        assert_eq!(m.state(), MatchState::Finished);
        assert_eq!(m.finish(), Err(MatchError::AlreadyFinished));
        assert_eq!(m.total_score(), 3);
    }

    #[test]
    fn test_state_serializes_snake_case() {
        let json = serde_json::to_string(&MatchState::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
