//! Raw encounter-log records: damage events and time spans.

use serde::Deserialize;

use crate::error::TimelineError;

/// A single damage record from an encounter log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DamageEvent {
    /// Absolute log timestamp in milliseconds.
    pub timestamp: i64,
    /// Id of the combatant (or pet) that dealt the damage.
    pub source_id: u64,
    /// Damage amount.
    pub amount: f64,
}

/// Half-open time span `[start, end)` in log milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Span {
    /// Span start in milliseconds (inclusive).
    pub start: i64,
    /// Span end in milliseconds (exclusive).
    pub end: i64,
}

impl Span {
    /// Creates a span, rejecting `end <= start`.
    pub fn new(start: i64, end: i64) -> Result<Self, TimelineError> {
        if end <= start {
            return Err(TimelineError::EmptySpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the span length in milliseconds.
    pub fn len_ms(&self) -> i64 {
        self.end - self.start
    }

    /// Returns whether the timestamp falls inside the span.
    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start && timestamp < self.end
    }

    /// Returns a copy truncated so that it ends no later than `end`.
    pub fn clamped_to(&self, end: i64) -> Self {
        Self {
            start: self.start,
            end: self.end.min(end),
        }
    }
}
