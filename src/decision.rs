//! The acceptance decision and answer parsing
//!
//! An answer is normalized (surrounding whitespace trimmed, lowercased) before
//! matching, so `" YES "` and `"y"` both accept.
//!
//! # Examples
//!
//! ```
//! use secuchat_terms::decision::Decision;
//!
//! let d: Decision = " Yes ".parse().unwrap();
//! assert!(d.is_accepted());
//! assert_eq!(d.exit_code(), 0);
//!
//! assert!("maybe".parse::<Decision>().is_err());
//! ```

use std::fmt;
use std::process::ExitCode;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing an answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAnswerError {
    /// Answer was neither yes nor no
    #[error("invalid answer: {0:?} (expected y, yes, n or no)")]
    Invalid(String),
}

/// Outcome of the usage-agreement prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The user agreed to the terms
    Accepted,
    /// The user refused the terms (or input ended first)
    Declined,
}

impl Decision {
    /// Whether the terms were accepted
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Process exit status for this decision
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Accepted => 0,
            Self::Declined => 1,
        }
    }

    /// Confirmation message shown once the decision is made
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Accepted => "Terms accepted.",
            Self::Declined => "Terms not accepted.",
        }
    }
}

impl FromStr for Decision {
    type Err = ParseAnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(Self::Accepted),
            "n" | "no" => Ok(Self::Declined),
            _ => Err(ParseAnswerError::Invalid(s.trim_end_matches(['\r', '\n']).to_string())),
        }
    }
}

impl From<bool> for Decision {
    fn from(accepted: bool) -> Self {
        if accepted { Self::Accepted } else { Self::Declined }
    }
}

impl From<Decision> for ExitCode {
    fn from(decision: Decision) -> Self {
        Self::from(decision.exit_code())
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Declined => write!(f, "declined"),
        }
    }
}
