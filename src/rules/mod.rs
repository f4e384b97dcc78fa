//! The rule table.
//!
//! Rules are plain evaluator functions grouped by what they consume:
//! [`lines`] for per-file line scans, [`config`] for per-project
//! configuration checks. Rule identifiers are stable wire values that
//! downstream filters group on.

pub mod config;
pub mod lines;

pub use config::{check_warning_level, check_warnings_as_errors};
pub use lines::{scan_header_lines, scan_source_lines};

/// Stable identifiers for the user-defined rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// Declared file absent from disk. Off by default; enabled with
    /// `check --report-missing`.
    Ud1,
    /// Line hygiene: `using namespace` in headers, unqualified
    /// `make_unique` in sources. Both scans share one wire id.
    Ud2,
    /// No configuration treats warnings as errors.
    Ud3,
    /// No configuration sets warning level 4.
    Ud4,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::Ud1 => "UD#1",
            RuleId::Ud2 => "UD#2",
            RuleId::Ud3 => "UD#3",
            RuleId::Ud4 => "UD#4",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "UD#1" => Some(RuleId::Ud1),
            "UD#2" => Some(RuleId::Ud2),
            "UD#3" => Some(RuleId::Ud3),
            "UD#4" => Some(RuleId::Ud4),
            _ => None,
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
