//! Event attribution and per-second binning.

use tracing::debug;

use crate::error::TimelineError;
use crate::event::{DamageEvent, Span};
use crate::party::Combatant;

/// Splits events by party member.
///
/// Returns one bucket per combatant, aligned with `party`. An event is
/// credited to the member whose id (or pet id) matches its source;
/// events owned by nobody (limit breaks, environment actors) are
/// dropped.
pub fn attribute_events(events: &[DamageEvent], party: &[Combatant]) -> Vec<Vec<DamageEvent>> {
    let mut buckets: Vec<Vec<DamageEvent>> = vec![Vec::new(); party.len()];
    let mut unattributed = 0usize;

    for event in events {
        match party.iter().position(|c| c.owns(event.source_id)) {
            Some(idx) => buckets[idx].push(event.clone()),
            None => unattributed += 1,
        }
    }

    if unattributed > 0 {
        debug!(unattributed, total = events.len(), "dropped events from non-party sources");
    }

    buckets
}

/// Sums event amounts into 1-second buckets over `span`.
///
/// Bucket `i` covers `[start + 1000·i, start + 1000·(i+1))`; the last
/// bucket may cover a partial second. Events outside the span are
/// skipped. The result has `ceil(span length / 1000)` entries, so a
/// quiet second shows up as an explicit 0.0 sample.
///
/// # Errors
///
/// Returns [`TimelineError::EmptySpan`] when `span.end <= span.start`.
pub fn per_second_totals(
    events: &[DamageEvent],
    span: Span,
) -> Result<Vec<f64>, TimelineError> {
    if span.end <= span.start {
        return Err(TimelineError::EmptySpan {
            start: span.start,
            end: span.end,
        });
    }

    let n_buckets = (span.len_ms() as u64).div_ceil(1000) as usize;
    let mut totals = vec![0.0; n_buckets];

    for event in events {
        if !span.contains(event.timestamp) {
            continue;
        }
        let idx = ((event.timestamp - span.start) / 1000) as usize;
        totals[idx] += event.amount;
    }

    Ok(totals)
}
