use std::fmt;

use crate::die::Face;

/// Machine-readable error codes for scripted callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ZeroSides,
    TooManySides,
    FamilyTooLarge,
    InvalidDie,
    SideMismatch,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ZeroSides => "E1001",
            Self::TooManySides => "E1002",
            Self::FamilyTooLarge => "E1003",
            Self::InvalidDie => "E2001",
            Self::SideMismatch => "E2002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ZeroSides => "Dice need at least one side",
            Self::TooManySides => "Too many sides per die",
            Self::FamilyTooLarge => "Dice family too large to enumerate",
            Self::InvalidDie => "Invalid die notation",
            Self::SideMismatch => "Dice have different numbers of sides",
        }
    }

    /// Optional remediation hint surfaced next to the error.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ZeroSides => Some("Pass --sides 1 or more."),
            Self::TooManySides => Some("Lower --sides."),
            Self::FamilyTooLarge => Some("Narrow the --min/--max range or lower --sides."),
            Self::InvalidDie => Some("Write dice as digits (4400) or comma separated (10,4,0)."),
            Self::SideMismatch => Some("Compare dice with the same number of faces."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Rejected dice configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `sides` was zero; a die must have at least one face.
    #[error("invalid configuration: sides must be at least 1")]
    ZeroSides,

    /// `sides` is above [`crate::config::MAX_SIDES`].
    #[error("invalid configuration: {sides} sides exceeds the limit of {max}")]
    TooManySides { sides: usize, max: usize },

    /// The number of dice in the family does not fit in a `u64`.
    #[error("invalid configuration: faces {min_value}..={max_value} with {sides} sides is too many dice")]
    FamilyTooLarge {
        min_value: Face,
        max_value: Face,
        sides: usize,
    },
}

impl ConfigError {
    /// The stable [`ErrorCode`] for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::ZeroSides => ErrorCode::ZeroSides,
            Self::TooManySides { .. } => ErrorCode::TooManySides,
            Self::FamilyTooLarge { .. } => ErrorCode::FamilyTooLarge,
        }
    }

    /// Remediation hint for the operator.
    #[must_use]
    pub fn suggestion(&self) -> String {
        self.error_code().hint().unwrap_or_default().to_string()
    }
}

/// Failure to parse die notation such as `4400`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DieParseError {
    #[error("empty die notation")]
    Empty,

    #[error("invalid face value: {0:?}")]
    InvalidFace(String),
}

impl DieParseError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        ErrorCode::InvalidDie
    }
}

/// Failure to set up a head-to-head comparison.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    #[error("{0}")]
    Parse(#[from] DieParseError),

    #[error("cannot compare a {first}-sided die with a {second}-sided die")]
    SideMismatch { first: usize, second: usize },
}

impl CompareError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Parse(err) => err.error_code(),
            Self::SideMismatch { .. } => ErrorCode::SideMismatch,
        }
    }

    /// Remediation hint for the operator.
    #[must_use]
    pub fn suggestion(&self) -> String {
        self.error_code().hint().unwrap_or_default().to_string()
    }
}
