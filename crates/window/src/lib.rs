//! Maximum-sum window scan over a numeric sample sequence.
//!
//! This crate answers one question: given an ordered sequence of
//! per-second samples and a fixed window length, which contiguous run
//! of exactly that many samples has the largest sum? The scan is the
//! core of the burst-interval report: it places a fixed-duration
//! buff over the most intense stretch of a throughput timeline.
//!
//! # Quick start
//!
//! ```
//! use apex_window::{WindowConfig, max_window_sum};
//!
//! let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let config = WindowConfig::new(3);
//!
//! let best = max_window_sum(&samples, &config).unwrap().unwrap();
//! assert_eq!((best.sum(), best.start(), best.end()), (12.0, 2, 4));
//!
//! // Sequences shorter than the window have no full-length window.
//! let none = max_window_sum(&[1.0], &config).unwrap();
//! assert!(none.is_none());
//! ```
//!
//! # Architecture
//!
//! ```text
//! max_window_sum()
//!   ├─ WindowConfig::validate()   (config.rs)
//!   ├─ initial sum of samples[0..len]
//!   └─ slide: current += in - out  (scan.rs)
//! ```
//!
//! The scan is a pure function: no I/O, no shared state, safe to call
//! from any number of threads at once. One call answers one window
//! length; it is not a range-query structure.

pub mod config;
pub mod error;
pub mod result;
pub mod scan;

pub use config::{DEFAULT_WINDOW_LEN, WindowConfig};
pub use error::WindowError;
pub use result::BestWindow;
pub use scan::max_window_sum;
