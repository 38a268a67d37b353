//! Scan command: best window over a plain numeric series.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use apex_window::max_window_sum;

use crate::cli::ScanArgs;
use crate::config::ApexConfig;
use crate::convert;

/// Run the plain-series scan.
pub fn run(args: ScanArgs) -> Result<()> {
    let _cmd = info_span!("scan").entered();

    let config = ApexConfig::load(args.config.as_deref())?;
    let window = convert::build_window_config(&config.window, args.window)?;

    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read series file: {}", args.input.display()))?;
    let samples = parse_series(&raw)?;
    info!(
        n_samples = samples.len(),
        window_len = window.len(),
        "series loaded"
    );

    match max_window_sum(&samples, &window)? {
        Some(best) => println!(
            "best window: sum {}, samples {}..={}",
            best.sum(),
            best.start(),
            best.end()
        ),
        None => println!(
            "no full window: {} samples, window length {}",
            samples.len(),
            window.len()
        ),
    }

    Ok(())
}

/// Parses a series file: one sample per line, blank lines and `#`
/// comments ignored.
fn parse_series(raw: &str) -> Result<Vec<f64>> {
    let mut samples = Vec::new();
    for (i, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let value: f64 = line
            .parse()
            .with_context(|| format!("invalid sample on line {}: {line:?}", i + 1))?;
        samples.push(value);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_series_basic() {
        let samples = parse_series("1.5\n-2\n0\n").unwrap();
        assert_eq!(samples, vec![1.5, -2.0, 0.0]);
    }

    #[test]
    fn test_parse_series_comments_and_blanks() {
        let raw = "# per-second damage\n\n100\n  200  \n\n# tail\n300\n";
        let samples = parse_series(raw).unwrap();
        assert_eq!(samples, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_parse_series_bad_line_reports_number() {
        let err = parse_series("1\ntwo\n3\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
