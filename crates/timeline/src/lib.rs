//! # apex-timeline
//!
//! Turns a raw encounter log into the per-second, per-combatant sample
//! sequences the window scan consumes.
//!
//! ## Quick start
//!
//! ```
//! use apex_timeline::{
//!     Combatant, DamageEvent, Job, Span, attribute_events, per_second_totals,
//! };
//!
//! let party = vec![Combatant {
//!     id: 1,
//!     name: "Aki".to_string(),
//!     job: Job::Sam,
//!     pets: vec![],
//! }];
//! let events = vec![
//!     DamageEvent { timestamp: 250, source_id: 1, amount: 1200.0 },
//!     DamageEvent { timestamp: 1800, source_id: 1, amount: 800.0 },
//! ];
//!
//! let span = Span::new(0, 3000).unwrap();
//! let buckets = attribute_events(&events, &party);
//! let samples = per_second_totals(&buckets[0], span).unwrap();
//! assert_eq!(samples, vec![1200.0, 800.0, 0.0]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `event` | Damage records and half-open time spans |
//! | `log` | Top-level encounter log document |
//! | `party` | Combatants, pets, ownership of event sources |
//! | `job` | Job short-code taxonomy |
//! | `bucket` | Event attribution and per-second binning |
//! | `format` | `MM:SS.mmm` offset formatting |
//! | `error` | Error types |

pub mod bucket;
pub mod error;
pub mod event;
pub mod format;
pub mod job;
pub mod log;
pub mod party;

pub use bucket::{attribute_events, per_second_totals};
pub use error::TimelineError;
pub use event::{DamageEvent, Span};
pub use format::format_offset;
pub use job::{ALL_JOBS, Job};
pub use log::{EncounterLog, Mark};
pub use party::{Combatant, Pet};
