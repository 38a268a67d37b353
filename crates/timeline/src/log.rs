//! Top-level encounter log document.

use serde::Deserialize;

use crate::event::{DamageEvent, Span};
use crate::party::Combatant;

/// A timestamp of interest within the encounter, typically the moment
/// a placeable damage buff becomes available. Each mark opens an
/// analysis segment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mark {
    /// Absolute log timestamp in milliseconds.
    pub timestamp: i64,
    /// Optional display label for the report.
    #[serde(default)]
    pub label: Option<String>,
}

/// A full encounter log as read from disk.
#[derive(Debug, Clone, Deserialize)]
pub struct EncounterLog {
    /// Encounter time span.
    pub span: Span,
    /// Party composition.
    pub party: Vec<Combatant>,
    /// All damage events in the encounter.
    pub events: Vec<DamageEvent>,
    /// Segment openers. Empty means one segment over the whole span.
    #[serde(default)]
    pub marks: Vec<Mark>,
}
