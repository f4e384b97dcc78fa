//! Per-project check orchestration.
//!
//! Runs the line-scan rules over every declared file that exists on disk,
//! then the two configuration rules, and hands the collected records back
//! to the caller for serialization. Diagnostics (progress, skipped files)
//! go to stderr; they are not part of the record protocol.

use std::path::Path;

use colored::Colorize;

use crate::project::{DescriptorError, ProjectDescriptor};
use crate::record::IssueRecord;
use crate::rules::{
    check_warning_level, check_warnings_as_errors, scan_header_lines, scan_source_lines, RuleId,
};

/// Directory names whose contents are produced by a build step and may
/// legitimately be absent before one.
const GENERATED_DIRS: &[&str] = &["gen", "gen64"];

enum FileKind {
    Header,
    Source,
}

/// Checks one project at a time.
pub struct Checker {
    report_missing: bool,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker {
    pub fn new() -> Self {
        Self {
            report_missing: false,
        }
    }

    /// Emit UD#1 records for declared files absent from disk.
    ///
    /// Off by default to keep record counts stable for consumers that
    /// predate the flag.
    pub fn report_missing(mut self, report: bool) -> Self {
        self.report_missing = report;
        self
    }

    /// Run all rules against the project descriptor at `project`.
    ///
    /// A descriptor that cannot be read or parsed fails this project only;
    /// the caller decides how to report it and moves on.
    pub fn run(&self, project: &Path) -> Result<Vec<IssueRecord>, DescriptorError> {
        let descriptor = ProjectDescriptor::parse_file(project)?;
        let project_name = project.to_string_lossy();
        let mut records = Vec::new();

        for header in &descriptor.headers {
            self.scan_file(header, FileKind::Header, &mut records);
        }
        for source in &descriptor.sources {
            self.scan_file(source, FileKind::Source, &mut records);
        }

        records.extend(check_warnings_as_errors(
            &project_name,
            &descriptor.configurations,
        ));
        records.extend(check_warning_level(
            &project_name,
            &descriptor.configurations,
        ));

        Ok(records)
    }

    fn scan_file(&self, path: &Path, kind: FileKind, records: &mut Vec<IssueRecord>) {
        let name = path.to_string_lossy();

        if !path.exists() {
            if is_generated(path) {
                return;
            }
            if self.report_missing {
                records.push(IssueRecord::user_defined(
                    &name,
                    0,
                    RuleId::Ud1.as_str(),
                    "Missing file(s) in project cause unneeded rebuilds",
                ));
            }
            return;
        }

        // Progress line before scanning, so a hang is attributable.
        eprintln!("{}", name);

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("{} skipping {}: {}", "warning:".yellow().bold(), name, e);
                return;
            }
        };

        let found = match kind {
            FileKind::Header => scan_header_lines(&name, content.lines()),
            FileKind::Source => scan_source_lines(&name, content.lines()),
        };
        records.extend(found);
    }
}

/// True if the file sits directly under a build-output directory.
fn is_generated(path: &Path) -> bool {
    path.parent()
        .and_then(Path::file_name)
        .and_then(|n| n.to_str())
        .map(|n| {
            let lower = n.to_lowercase();
            GENERATED_DIRS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}
