//! Symbolic positions and their resolution to concrete indices

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ListError, Result};

/// Where an entry should land relative to its collection.
///
/// `Other` never resolves to an index. It only names the non-current side of
/// a move/copy between two lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    Top,
    Current,
    #[default]
    Bottom,
    Other,
}

impl Position {
    /// All positions, in the order they are offered to the user.
    pub const ALL: [Position; 4] = [
        Position::Top,
        Position::Current,
        Position::Bottom,
        Position::Other,
    ];

    /// Lowercase name used in persisted documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Current => "current",
            Position::Bottom => "bottom",
            Position::Other => "other",
        }
    }

    /// Resolve to a zero-based insertion index.
    ///
    /// `len` is the length of the collection *after* the relocated entry has
    /// been removed, so `Bottom` always appends. `old_index` is `None` for
    /// entries that did not exist before (pure inserts); `Current` then
    /// appends as well.
    ///
    /// # Errors
    ///
    /// `Other` cannot be resolved and yields [`ListError::InvalidPosition`].
    pub fn resolve(self, old_index: Option<usize>, len: usize) -> Result<usize> {
        match self {
            Position::Top => Ok(0),
            Position::Current => Ok(old_index.unwrap_or(len)),
            Position::Bottom => Ok(len),
            Position::Other => Err(ListError::InvalidPosition(self.as_str().to_string())),
        }
    }
}

impl Position {
    /// Whether the position places an entry within a single collection.
    /// Only `Other` does not.
    pub fn is_placement(self) -> bool {
        !matches!(self, Position::Other)
    }

    /// `self`, or an error for `Other`.
    ///
    /// Stored defaults (a list's new-item position, the settings) must be
    /// resolvable later, so they go through this check.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidPosition`] for `Other`.
    pub fn placement(self) -> Result<Self> {
        if self.is_placement() {
            Ok(self)
        } else {
            Err(ListError::InvalidPosition(self.as_str().to_string()))
        }
    }
}

/// Deserialize a stored default position, rejecting `"other"`.
///
/// Use with `#[serde(deserialize_with = "...")]` on fields that are later
/// resolved against a single collection.
pub fn deserialize_placement<'de, D>(deserializer: D) -> std::result::Result<Position, D::Error>
where
    D: Deserializer<'de>,
{
    Position::deserialize(deserializer)?
        .placement()
        .map_err(serde::de::Error::custom)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(Position::Top),
            "current" => Ok(Position::Current),
            "bottom" => Ok(Position::Bottom),
            "other" => Ok(Position::Other),
            _ => Err(ListError::InvalidPosition(s.to_string())),
        }
    }
}

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
