//! Runtime event stream payloads.

use crate::types::{Revision, ShowIndex};

/// Events emitted from the single-writer runtime loop after each successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowEvent {
    /// A show was appended.
    Added {
        /// Index of the new show.
        index: ShowIndex,
        /// Store revision after the mutation.
        revision: Revision,
    },
    /// A show was replaced in place.
    Replaced {
        /// Index of the replaced show.
        index: ShowIndex,
        /// Store revision after the mutation.
        revision: Revision,
    },
    /// A show was removed; later indices shifted down by one.
    Removed {
        /// Index the removed show occupied.
        index: ShowIndex,
        /// Store revision after the mutation.
        revision: Revision,
    },
}

impl ShowEvent {
    /// Store revision carried by the event.
    pub fn revision(&self) -> Revision {
        match self {
            Self::Added { revision, .. }
            | Self::Replaced { revision, .. }
            | Self::Removed { revision, .. } => *revision,
        }
    }
}
