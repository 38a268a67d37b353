//! JSON output structures for rank reports.

use serde::Serialize;

use apex_timeline::Job;

/// Top-level rank report.
#[derive(Debug, Serialize)]
pub struct RankReport {
    /// Window length used for every scan, in samples.
    pub window_len: usize,
    /// Segment length opened by each mark, in milliseconds.
    pub segment_ms: i64,
    /// Per-segment rankings, in mark order.
    pub segments: Vec<SegmentReport>,
}

/// Ranking for a single analysis segment.
#[derive(Debug, Serialize)]
pub struct SegmentReport {
    /// Mark label, if the segment came from a labelled mark.
    pub label: Option<String>,
    /// Segment start offset from the encounter start, milliseconds.
    pub start_ms: i64,
    /// Segment end offset from the encounter start, milliseconds.
    pub end_ms: i64,
    /// Ranked rows, best burst first.
    pub entries: Vec<RankEntry>,
}

/// One ranked party member.
#[derive(Debug, Clone, Serialize)]
pub struct RankEntry {
    /// 1-based rank within the segment.
    pub rank: usize,
    /// Character name.
    pub name: String,
    /// Job short code.
    pub job: Job,
    /// Sum of the best window's samples.
    pub total_damage: f64,
    /// Best window start offset from the encounter start, milliseconds.
    pub window_start_ms: i64,
    /// Same offset formatted as `MM:SS.mmm`.
    pub window_start: String,
}
