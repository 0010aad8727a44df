//! Shared primitive aliases and derived-label enums.

use serde::{Deserialize, Serialize};

/// Positional index of a show in the collection.
pub type ShowIndex = usize;
/// Monotonic mutation counter of the collection.
pub type Revision = u64;

/// Time-of-day bucket derived from a `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    /// Hour in `[6, 18)`.
    Day,
    /// Any other parsed hour.
    Night,
    /// Empty, separator-less, or non-numeric input.
    Unknown,
}

impl DayPeriod {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
            Self::Unknown => "unknown",
        }
    }

    /// Badge shown next to the time on a list card; hidden when unknown.
    pub fn badge(self) -> Option<&'static str> {
        match self {
            Self::Day => Some("☀️ Day"),
            Self::Night => Some("🌙 Night"),
            Self::Unknown => None,
        }
    }
}

/// Whether a show is still upcoming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Event date is today or later.
    Active,
    /// Event date is before today, empty, or unparseable.
    Finished,
}

impl EventStatus {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Human-readable status pill text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Finished => "Finished",
        }
    }
}
