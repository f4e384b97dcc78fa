//! vcxcheck - static checks for MSBuild C++ projects.
//!
//! A two-stage pipeline. Stage one (`check`) walks a directory tree for
//! project descriptors, applies a fixed rule set to each project's
//! declared files and build configurations, and emits findings as
//! pipe-delimited issue records on stdout. Stage two (`reprioritize`)
//! consumes a stream of such records, counts occurrences per rule, and
//! bumps rare rules to top priority.
//!
//! # Architecture
//!
//! - `record`: the issue record wire type and line protocol
//! - `project`: project descriptor reader (quick-xml over `.vcxproj`)
//! - `rules`: the rule table - line-scan and configuration evaluators
//! - `checker`: per-project orchestration of the rules
//! - `reprioritize`: frequency-based stream filter (collect → decide → replay)
//! - `cli`: clap surface and the two run functions

pub mod checker;
pub mod cli;
pub mod project;
pub mod record;
pub mod reprioritize;
pub mod rules;

pub use checker::Checker;
pub use project::{BuildConfig, DescriptorError, ProjectDescriptor};
pub use record::{IssueRecord, ProtocolError};
pub use reprioritize::{reprioritize, ReprioritizeError, FREQUENCY_THRESHOLD, TOP_PRIORITY};
pub use rules::RuleId;
