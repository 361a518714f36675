//! Markers attached to methods and parameters at discovery time.
//!
//! Markers are explicit enum-like tags recorded in the descriptor tables,
//! so classification and signature validation are plain matches over tags
//! and declared types. Tags outside the framework set are representable as
//! [`Marker::Custom`] and are opaque to this crate beyond presence checks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The entity families whose allowed method-marker sets differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityFlavor {
    /// State derived from a journal of events; snapshots bound replay.
    Journaled,
    /// State converged through replicated data types.
    Replicated,
}

static JOURNALED_MARKERS: [Marker; 4] = [
    Marker::CommandHandler(EntityFlavor::Journaled),
    Marker::EventHandler,
    Marker::Snapshot,
    Marker::SnapshotHandler,
];

static REPLICATED_MARKERS: [Marker; 1] = [Marker::CommandHandler(EntityFlavor::Replicated)];

impl EntityFlavor {
    /// Returns the method-level markers a handler of this flavor may carry.
    #[must_use]
    pub fn allowed_markers(self) -> &'static [Marker] {
        match self {
            Self::Journaled => &JOURNALED_MARKERS,
            Self::Replicated => &REPLICATED_MARKERS,
        }
    }
}

impl fmt::Display for EntityFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Journaled => f.write_str("journaled"),
            Self::Replicated => f.write_str("replicated"),
        }
    }
}

/// An enum-like tag attached to a method or parameter descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// The parameter carries the entity identifier for the current call.
    EntityId,
    /// The method handles commands for the given entity flavor.
    CommandHandler(EntityFlavor),
    /// The method applies a journaled event to entity state.
    EventHandler,
    /// The method produces a snapshot of entity state.
    Snapshot,
    /// The method restores entity state from a snapshot.
    SnapshotHandler,
    /// A tag opaque to this crate; checked for presence only.
    Custom(String),
}

impl Marker {
    /// Returns `true` for markers defined by the framework itself.
    ///
    /// [`Marker::Custom`] tags never participate in classification or
    /// signature validation.
    #[must_use]
    pub fn is_framework(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns the marker name without any flavor qualifier.
    ///
    /// Used by signature validation to suggest the in-flavor alternative
    /// when the same marker name exists for another flavor.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        match self {
            Self::EntityId => "EntityId",
            Self::CommandHandler(_) => "CommandHandler",
            Self::EventHandler => "EventHandler",
            Self::Snapshot => "Snapshot",
            Self::SnapshotHandler => "SnapshotHandler",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandHandler(flavor) => write!(f, "{flavor}::CommandHandler"),
            other => f.write_str(other.simple_name()),
        }
    }
}
