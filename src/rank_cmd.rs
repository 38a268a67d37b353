//! Rank command: best burst window per party member, per segment.

use std::cmp::Ordering;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use apex_timeline::{
    DamageEvent, EncounterLog, Span, attribute_events, format_offset, per_second_totals,
};
use apex_window::{WindowConfig, max_window_sum};

use crate::cli::RankArgs;
use crate::config::ApexConfig;
use crate::convert;
use crate::report::{RankEntry, RankReport, SegmentReport};

/// Run the full ranking pipeline.
pub fn run(args: RankArgs) -> Result<()> {
    let _cmd = info_span!("rank").entered();

    // 1. Load config, apply CLI overrides
    let config = ApexConfig::load(args.config.as_deref())?;
    let window = convert::build_window_config(&config.window, args.window)?;
    let top = args.top.or(config.report.top);

    // 2. Read the encounter log
    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read encounter log: {}", args.input.display()))?;
    let log: EncounterLog =
        serde_json::from_str(&raw).context("failed to parse encounter log JSON")?;

    if log.party.is_empty() {
        bail!("encounter log has no party members");
    }
    if log.events.is_empty() {
        bail!("encounter log has no damage events");
    }
    info!(
        n_party = log.party.len(),
        n_events = log.events.len(),
        window_len = window.len(),
        "encounter log loaded"
    );

    // 3. Attribution is segment-independent: do it once
    let buckets = attribute_events(&log.events, &log.party);

    // 4. One segment per mark, or the whole encounter
    let segments = segment_spans(&log, config.report.segment_ms);
    if segments.is_empty() {
        bail!("no usable analysis segments (all marks fall outside the encounter)");
    }

    let mut report = RankReport {
        window_len: window.len(),
        segment_ms: config.report.segment_ms,
        segments: Vec::with_capacity(segments.len()),
    };

    for (label, span) in segments {
        let segment = rank_segment(&log, &buckets, span, &window, top, label)?;
        print_segment(&segment);
        report.segments.push(segment);
    }

    // 5. Optional JSON report
    if let Some(path) = args.output {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

/// Resolves the analysis segments: each mark opens a `segment_ms`-long
/// span clamped to the encounter end; without marks the whole encounter
/// is one segment. Marks outside the encounter are skipped.
fn segment_spans(log: &EncounterLog, segment_ms: i64) -> Vec<(Option<String>, Span)> {
    if log.marks.is_empty() {
        return vec![(None, log.span)];
    }

    let mut spans = Vec::with_capacity(log.marks.len());
    for mark in &log.marks {
        let end = (mark.timestamp + segment_ms).min(log.span.end);
        match Span::new(mark.timestamp, end) {
            Ok(span) => spans.push((mark.label.clone(), span)),
            Err(_) => {
                warn!(
                    timestamp = mark.timestamp,
                    label = mark.label.as_deref().unwrap_or(""),
                    "mark falls outside the encounter, skipping"
                );
            }
        }
    }
    spans
}

/// Ranks every party member's best window within one segment.
///
/// Members whose segment holds fewer samples than the window produce no
/// row: there is no full-length window to score them on.
fn rank_segment(
    log: &EncounterLog,
    buckets: &[Vec<DamageEvent>],
    span: Span,
    window: &WindowConfig,
    top: Option<usize>,
    label: Option<String>,
) -> Result<SegmentReport> {
    let mut entries = Vec::with_capacity(log.party.len());

    for (combatant, events) in log.party.iter().zip(buckets) {
        let samples = per_second_totals(events, span)?;
        let Some(best) = max_window_sum(&samples, window)? else {
            continue;
        };

        let window_start_ms = span.start + 1000 * best.start() as i64 - log.span.start;
        entries.push(RankEntry {
            rank: 0, // assigned after sorting
            name: combatant.name.clone(),
            job: combatant.job,
            total_damage: best.sum(),
            window_start_ms,
            window_start: format_offset(window_start_ms),
        });
    }

    entries.sort_by(|a, b| {
        b.total_damage
            .partial_cmp(&a.total_damage)
            .unwrap_or(Ordering::Equal)
    });
    if let Some(top) = top {
        entries.truncate(top);
    }
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    Ok(SegmentReport {
        label,
        start_ms: span.start - log.span.start,
        end_ms: span.end - log.span.start,
        entries,
    })
}

/// Prints one segment's ranking to stdout.
fn print_segment(segment: &SegmentReport) {
    match &segment.label {
        Some(label) => println!(
            "Segment \"{}\" @ {}",
            label,
            format_offset(segment.start_ms)
        ),
        None => println!("Segment @ {}", format_offset(segment.start_ms)),
    }
    println!("---");

    if segment.entries.is_empty() {
        println!("(no party member had a full window in this segment)");
    }
    for entry in &segment.entries {
        println!(
            "{}. {} ({}), total damage: {}, window @ {}",
            entry.rank, entry.name, entry.job, entry.total_damage, entry.window_start
        );
    }
    println!();
}
