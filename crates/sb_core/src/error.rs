use thiserror::Error;

/// Failures raised by a single match's construction and lifecycle rules.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    #[error("home team and away team cannot be the same")]
    SameTeam,

    #[error("match has not started yet")]
    NotStarted,

    #[error("match has already started")]
    AlreadyStarted,

    #[error("match has already finished")]
    AlreadyFinished,
}

/// Failures raised by an entity store.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("entity with id {0} already exists")]
    DuplicateId(u32),

    #[error("entity with id {0} does not exist")]
    NotFound(u32),
}

/// Any failure a scoreboard operation can surface.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;
