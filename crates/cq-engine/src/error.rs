//! Error types for the combat engine.

/// Errors that can occur while resolving or sampling battles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The defending force has no armies left.
    #[error("unable to defend")]
    UnableToDefend,

    /// The attacking force has at most one army and cannot leave the territory.
    #[error("unable to attack")]
    UnableToAttack,

    /// The attacker must roll at least one die.
    #[error("invalid power value")]
    InvalidPower,

    /// The smart defender threshold is not a die face.
    #[error("invalid smart threshold: {0}")]
    InvalidSmartThreshold(i32),

    /// A sample run was requested with zero trials.
    #[error("sample size must be at least 1")]
    EmptySample,

    /// The caller cancelled a sample run before it finished.
    #[error("sampling cancelled")]
    Cancelled,
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
