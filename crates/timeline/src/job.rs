//! Job taxonomy: the short codes carried by combatants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// Job short code of a party member.
///
/// Covers the battle jobs plus the hand and land classes that can show
/// up in an encounter log; `Eureka` is the catch-all code for the
/// scaled-content variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Job {
    // Tanks
    Pld,
    War,
    Drk,
    Gnb,
    // Healers
    Whm,
    Sch,
    Ast,
    // Physical ranged
    Brd,
    Mch,
    Dnc,
    // Melee
    Mnk,
    Drg,
    Nin,
    Sam,
    // Casters
    Blm,
    Smn,
    Rdm,
    Blu,
    // Hand
    Crp,
    Bsm,
    Arm,
    Gsm,
    Wvr,
    Ltw,
    Alc,
    Cul,
    // Land
    Btn,
    Min,
    Fsh,
    // Scaled content
    Eureka,
}

/// All job codes, in taxonomy order.
pub const ALL_JOBS: [Job; 30] = [
    Job::Pld,
    Job::War,
    Job::Drk,
    Job::Gnb,
    Job::Whm,
    Job::Sch,
    Job::Ast,
    Job::Brd,
    Job::Mch,
    Job::Dnc,
    Job::Mnk,
    Job::Drg,
    Job::Nin,
    Job::Sam,
    Job::Blm,
    Job::Smn,
    Job::Rdm,
    Job::Blu,
    Job::Crp,
    Job::Bsm,
    Job::Arm,
    Job::Gsm,
    Job::Wvr,
    Job::Ltw,
    Job::Alc,
    Job::Cul,
    Job::Btn,
    Job::Min,
    Job::Fsh,
    Job::Eureka,
];

impl Job {
    /// Returns the canonical upper-case short code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Job::Pld => "PLD",
            Job::War => "WAR",
            Job::Drk => "DRK",
            Job::Gnb => "GNB",
            Job::Whm => "WHM",
            Job::Sch => "SCH",
            Job::Ast => "AST",
            Job::Brd => "BRD",
            Job::Mch => "MCH",
            Job::Dnc => "DNC",
            Job::Mnk => "MNK",
            Job::Drg => "DRG",
            Job::Nin => "NIN",
            Job::Sam => "SAM",
            Job::Blm => "BLM",
            Job::Smn => "SMN",
            Job::Rdm => "RDM",
            Job::Blu => "BLU",
            Job::Crp => "CRP",
            Job::Bsm => "BSM",
            Job::Arm => "ARM",
            Job::Gsm => "GSM",
            Job::Wvr => "WVR",
            Job::Ltw => "LTW",
            Job::Alc => "ALC",
            Job::Cul => "CUL",
            Job::Btn => "BTN",
            Job::Min => "MIN",
            Job::Fsh => "FSH",
            Job::Eureka => "EUREKA",
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Job {
    type Err = TimelineError;

    /// Parses a short code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        ALL_JOBS
            .iter()
            .find(|job| job.as_str() == upper)
            .copied()
            .ok_or(TimelineError::UnknownJob {
                code: s.to_string(),
            })
    }
}
