use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerrainError {
    #[error("room name duplicated: '{0}'")]
    DuplicateRoom(String),
    #[error("room coords must be unique; room name: '{0}'")]
    DuplicateCoords(String),
    #[error("unknown room '{0}'")]
    UnknownRoom(String),
    #[error("rooms can't link themselves: '{0}'")]
    SelfLoop(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("please set ##start room")]
    MissingStart,
    #[error("please set ##end room")]
    MissingEnd,
    #[error("start and end must be different rooms")]
    SameStartEnd,
    #[error("invalid number of Ants: {0}")]
    InvalidAntCount(usize),
    #[error("path not found")]
    NoRoute,
}

impl SolveError {
    /// Whether the failure comes from the colony description rather than its topology.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, SolveError::NoRoute)
    }
}
