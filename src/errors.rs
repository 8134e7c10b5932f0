use std::fmt;

/// Main error type for the Pokemon Stadium battle system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StadiumError {
    /// Error related to roster storage and lookup
    Roster(RosterError),
    /// Error related to a combatant's stats or construction
    Combatant(CombatantError),
    /// Error related to battle preconditions
    Battle(BattleError),
    /// Error related to trainer-level operations
    Trainer(TrainerError),
}

/// Errors related to roster operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The argument violates a roster precondition (e.g. empty name)
    InvalidArgument(String),
    /// The named combatant is not present in the roster
    NotFound(String),
}

/// Errors related to combatant state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatantError {
    /// A combatant was given an empty name
    EmptyName,
    /// An action method observed a non-positive stat
    InvalidStat {
        combatant: String,
        stat: &'static str,
        value: i32,
    },
}

/// Errors related to battle resolution preconditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// A combatant entered the arena with no health left
    CombatantNotReady(String),
}

/// Errors related to trainer-level operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainerError {
    /// Requested team size is outside the allowed range
    InvalidTeamSize(usize),
}

impl fmt::Display for StadiumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StadiumError::Roster(err) => write!(f, "Roster error: {}", err),
            StadiumError::Combatant(err) => write!(f, "Combatant error: {}", err),
            StadiumError::Battle(err) => write!(f, "Battle error: {}", err),
            StadiumError::Trainer(err) => write!(f, "Trainer error: {}", err),
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::InvalidArgument(details) => write!(f, "Invalid argument: {}", details),
            RosterError::NotFound(name) => write!(f, "Combatant not found: {}", name),
        }
    }
}

impl fmt::Display for CombatantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatantError::EmptyName => write!(f, "Combatant name cannot be empty"),
            CombatantError::InvalidStat {
                combatant,
                stat,
                value,
            } => write!(f, "Invalid {} ({}) on {}", stat, value, combatant),
        }
    }
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::CombatantNotReady(name) => {
                write!(f, "{} has no health left and cannot battle", name)
            }
        }
    }
}

impl fmt::Display for TrainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainerError::InvalidTeamSize(size) => {
                write!(f, "Invalid team size: {}", size)
            }
        }
    }
}

impl std::error::Error for StadiumError {}
impl std::error::Error for RosterError {}
impl std::error::Error for CombatantError {}
impl std::error::Error for BattleError {}
impl std::error::Error for TrainerError {}

impl From<RosterError> for StadiumError {
    fn from(err: RosterError) -> Self {
        StadiumError::Roster(err)
    }
}

impl From<CombatantError> for StadiumError {
    fn from(err: CombatantError) -> Self {
        StadiumError::Combatant(err)
    }
}

impl From<BattleError> for StadiumError {
    fn from(err: BattleError) -> Self {
        StadiumError::Battle(err)
    }
}

impl From<TrainerError> for StadiumError {
    fn from(err: TrainerError) -> Self {
        StadiumError::Trainer(err)
    }
}

/// Type alias for Results using StadiumError
pub type StadiumResult<T> = Result<T, StadiumError>;

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;

/// Type alias for Results using CombatantError
pub type CombatantResult<T> = Result<T, CombatantError>;

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;
