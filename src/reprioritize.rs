//! Frequency-based stream reprioritization.
//!
//! Rare rules are interesting rules: any rule with at most
//! [`FREQUENCY_THRESHOLD`] occurrences across the whole input gets its
//! records bumped to [`TOP_PRIORITY`] so reviewers see them first.
//!
//! The filter is explicitly collect → decide → replay. Counts are only
//! known once the input is exhausted, so the whole stream is buffered
//! before anything is emitted; memory is proportional to the record count.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use thiserror::Error;

use crate::record::{IssueRecord, ProtocolError};

/// Rules occurring at or below this count get reprioritized.
pub const FREQUENCY_THRESHOLD: usize = 5;

/// Priority written onto low-frequency records.
pub const TOP_PRIORITY: &str = "10";

/// Errors that abort a reprioritization run.
///
/// The record protocol is strict: the first malformed line fails the whole
/// invocation, there is no per-line recovery.
#[derive(Error, Debug)]
pub enum ReprioritizeError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("stream error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read records from `input`, rewrite low-frequency priorities, and emit
/// every record to `output` in input order.
pub fn reprioritize<R: BufRead, W: Write>(
    input: R,
    mut output: W,
) -> Result<(), ReprioritizeError> {
    // Collect the full input; partial counts would misclassify rules.
    let mut records = Vec::new();
    for line in input.lines() {
        let line = line?;
        records.push(line.parse::<IssueRecord>()?);
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in &records {
        *counts.entry(record.rule.clone()).or_insert(0) += 1;
    }

    // Replay in input order; only the priority field may change.
    for mut record in records {
        if counts[&record.rule] <= FREQUENCY_THRESHOLD {
            record.priority = TOP_PRIORITY.to_string();
        }
        writeln!(output, "{record}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_line(rule: &str, priority: &str, n: usize) -> String {
        format!("file{n}.cpp|{n}|USERDEFINED|{rule}|{priority}|USERDEFINED|desc {n}")
    }

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        reprioritize(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_threshold_boundary() {
        // Six records for rule A (above threshold), one for rule B (below).
        let mut input = String::new();
        for n in 0..6 {
            input.push_str(&record_line("A", "3", n));
            input.push('\n');
        }
        input.push_str(&record_line("B", "3", 6));
        input.push('\n');

        let output = run(&input);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);

        // A keeps its priority, B is bumped; everything else untouched.
        for (n, line) in lines.iter().take(6).enumerate() {
            assert_eq!(*line, record_line("A", "3", n));
        }
        assert_eq!(lines[6], record_line("B", "10", 6));
    }

    #[test]
    fn test_order_preserved() {
        let input = format!(
            "{}\n{}\n{}\n",
            record_line("B", "1", 0),
            record_line("A", "1", 1),
            record_line("B", "1", 2),
        );
        let output = run(&input);
        let lines: Vec<&str> = output.lines().collect();

        // Interleaving survives; only priorities change.
        assert_eq!(lines[0], record_line("B", "10", 0));
        assert_eq!(lines[1], record_line("A", "10", 1));
        assert_eq!(lines[2], record_line("B", "10", 2));
    }

    #[test]
    fn test_exactly_threshold_is_bumped() {
        let mut input = String::new();
        for n in 0..FREQUENCY_THRESHOLD {
            input.push_str(&record_line("A", "2", n));
            input.push('\n');
        }
        let output = run(&input);
        for line in output.lines() {
            let record: IssueRecord = line.parse().unwrap();
            assert_eq!(record.priority, TOP_PRIORITY);
        }
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let input = format!("{}\n{}\n", record_line("A", "1", 0), record_line("B", "4", 1));
        let first = run(&input);
        let second = run(&first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let input = format!("{}\nnot a record\n", record_line("A", "1", 0));
        let mut output = Vec::new();
        let err = reprioritize(input.as_bytes(), &mut output).unwrap_err();
        assert!(matches!(err, ReprioritizeError::Protocol(_)));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run(""), "");
    }
}
