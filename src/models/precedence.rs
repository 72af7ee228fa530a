//! Precedence vocabulary.
//!
//! A precedence relates an ordered pair of operations `(a, b)` by comparing
//! one time point of `a` (its start or end) with one time point of `b`.
//! "At" relations require equality, "before" relations require
//! `point(a) <= point(b)`.
//!
//! Several types may apply to the same pair at once; they are read as a
//! conjunction. Contradictory combinations are not detected here.
//!
//! # Reference
//! Laborie et al. (2018), "IBM ILOG CP Optimizer for Scheduling", Sec. 4.2

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A temporal relation between two operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrecedenceType {
    /// `start(a) == start(b)`
    StartAtStart,
    /// `start(a) == end(b)`
    StartAtEnd,
    /// `start(a) <= start(b)`
    StartBeforeStart,
    /// `start(a) <= end(b)`
    StartBeforeEnd,
    /// `end(a) == start(b)`
    EndAtStart,
    /// `end(a) == end(b)`
    EndAtEnd,
    /// `end(a) <= start(b)`
    EndBeforeStart,
    /// `end(a) <= end(b)`
    EndBeforeEnd,
}

/// Time point of an operation referenced by a precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Start,
    End,
}

/// Comparison imposed between the two anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Both anchors coincide.
    At,
    /// The first anchor is not later than the second.
    Before,
}

impl PrecedenceType {
    pub const ALL: [PrecedenceType; 8] = [
        Self::StartAtStart,
        Self::StartAtEnd,
        Self::StartBeforeStart,
        Self::StartBeforeEnd,
        Self::EndAtStart,
        Self::EndAtEnd,
        Self::EndBeforeStart,
        Self::EndBeforeEnd,
    ];

    /// Anchor on the first operation of the pair.
    pub fn first_anchor(self) -> Anchor {
        match self {
            Self::StartAtStart | Self::StartAtEnd | Self::StartBeforeStart | Self::StartBeforeEnd => {
                Anchor::Start
            }
            Self::EndAtStart | Self::EndAtEnd | Self::EndBeforeStart | Self::EndBeforeEnd => {
                Anchor::End
            }
        }
    }

    /// Anchor on the second operation of the pair.
    pub fn second_anchor(self) -> Anchor {
        match self {
            Self::StartAtStart | Self::StartBeforeStart | Self::EndAtStart | Self::EndBeforeStart => {
                Anchor::Start
            }
            Self::StartAtEnd | Self::StartBeforeEnd | Self::EndAtEnd | Self::EndBeforeEnd => {
                Anchor::End
            }
        }
    }

    pub fn relation(self) -> Relation {
        match self {
            Self::StartAtStart | Self::StartAtEnd | Self::EndAtStart | Self::EndAtEnd => {
                Relation::At
            }
            _ => Relation::Before,
        }
    }

    /// Canonical name, e.g. `"END_BEFORE_START"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartAtStart => "START_AT_START",
            Self::StartAtEnd => "START_AT_END",
            Self::StartBeforeStart => "START_BEFORE_START",
            Self::StartBeforeEnd => "START_BEFORE_END",
            Self::EndAtStart => "END_AT_START",
            Self::EndAtEnd => "END_AT_END",
            Self::EndBeforeStart => "END_BEFORE_START",
            Self::EndBeforeEnd => "END_BEFORE_END",
        }
    }
}

impl fmt::Display for PrecedenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown precedence name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown precedence type: {0:?}")]
pub struct ParsePrecedenceTypeError(String);

impl FromStr for PrecedenceType {
    type Err = ParsePrecedenceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParsePrecedenceTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_before_start_anchors() {
        let p = PrecedenceType::EndBeforeStart;
        assert_eq!(p.first_anchor(), Anchor::End);
        assert_eq!(p.second_anchor(), Anchor::Start);
        assert_eq!(p.relation(), Relation::Before);
    }

    #[test]
    fn test_anchor_combinations_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for p in PrecedenceType::ALL {
            assert!(seen.insert((p.first_anchor(), p.relation(), p.second_anchor())));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_parse_and_display() {
        for p in PrecedenceType::ALL {
            assert_eq!(p.to_string().parse::<PrecedenceType>(), Ok(p));
        }
        assert_eq!(
            "start_at_end".parse::<PrecedenceType>(),
            Ok(PrecedenceType::StartAtEnd)
        );
        assert!("BEFORE".parse::<PrecedenceType>().is_err());
    }

    #[test]
    fn test_serde_name_matches_display() {
        let json = serde_json::to_string(&PrecedenceType::EndBeforeStart).unwrap();
        assert_eq!(json, "\"END_BEFORE_START\"");
    }
}
