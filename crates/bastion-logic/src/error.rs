//! Validation failures raised inside rule functions.
//!
//! Nothing in this taxonomy is fatal: the dispatch boundary absorbs every
//! variant into a "state unchanged" transition.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("unknown basic facility: {0}")]
    UnknownBasicFacility(String),

    #[error("unknown special facility: {0}")]
    UnknownSpecialFacility(String),

    #[error("special facility already owned: {0}")]
    DuplicateSpecialFacility(String),

    #[error("character level must be 1..=20, got {0}")]
    LevelOutOfRange(u8),

    #[error("level {required} required, character is level {actual}")]
    LevelTooLow { required: u8, actual: u8 },

    #[error("special facility limit of {limit} reached for level {level}")]
    SpecialLimitReached { limit: u32, level: u8 },

    #[error("insufficient gold: need {needed} gp, have {have} gp")]
    InsufficientGold { needed: u32, have: u32 },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("hireling count must be at least 1")]
    InvalidHirelingCount,
}

pub type Result<T> = std::result::Result<T, RulesError>;
