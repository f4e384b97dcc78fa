//! The issue record line protocol.
//!
//! One record per line, 7 fields joined by `|`, no escaping. Field values
//! are assumed to be delimiter-free; a line that does not split into
//! exactly 7 fields is a protocol violation, not something to repair.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Field separator in the serialized form.
pub const DELIMITER: char = '|';

/// Number of fields in a serialized record.
pub const FIELD_COUNT: usize = 7;

/// Category and group value shared by all user-defined rules.
pub const USERDEFINED: &str = "USERDEFINED";

/// Priority assigned to freshly reported issues.
pub const DEFAULT_PRIORITY: &str = "1";

/// Errors that can occur while parsing serialized records.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("expected {FIELD_COUNT} fields, got {found} in line {line:?}")]
    FieldCount { found: usize, line: String },
}

/// A single detected issue in wire field order.
///
/// Every field is kept as a string: the record is a transport, and
/// downstream filters rewrite fields without reinterpreting them. `rule`
/// is the only field consumers aggregate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    pub filename: String,
    pub line: String,
    pub category: String,
    pub rule: String,
    pub priority: String,
    pub group: String,
    pub description: String,
}

impl IssueRecord {
    /// Build a record for a user-defined rule with the fixed category,
    /// group, and default priority filled in.
    pub fn user_defined(filename: &str, line: u32, rule: &str, description: &str) -> Self {
        Self {
            filename: filename.to_string(),
            line: line.to_string(),
            category: USERDEFINED.to_string(),
            rule: rule.to_string(),
            priority: DEFAULT_PRIORITY.to_string(),
            group: USERDEFINED.to_string(),
            description: description.to_string(),
        }
    }
}

impl fmt::Display for IssueRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = DELIMITER;
        write!(
            f,
            "{}{s}{}{s}{}{s}{}{s}{}{s}{}{s}{}",
            self.filename,
            self.line,
            self.category,
            self.rule,
            self.priority,
            self.group,
            self.description
        )
    }
}

impl FromStr for IssueRecord {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(ProtocolError::FieldCount {
                found: fields.len(),
                line: s.to_string(),
            });
        }
        Ok(Self {
            filename: fields[0].to_string(),
            line: fields[1].to_string(),
            category: fields[2].to_string(),
            rule: fields[3].to_string(),
            priority: fields[4].to_string(),
            group: fields[5].to_string(),
            description: fields[6].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defined_defaults() {
        let rec = IssueRecord::user_defined("src/a.h", 3, "UD#2", "Using namespace found");
        assert_eq!(rec.category, USERDEFINED);
        assert_eq!(rec.group, USERDEFINED);
        assert_eq!(rec.priority, DEFAULT_PRIORITY);
        assert_eq!(rec.line, "3");
    }

    #[test]
    fn test_serialize() {
        let rec = IssueRecord::user_defined("a.vcxproj", 0, "UD#3", "TreatWarningAsError is not set to true");
        assert_eq!(
            rec.to_string(),
            "a.vcxproj|0|USERDEFINED|UD#3|1|USERDEFINED|TreatWarningAsError is not set to true"
        );
    }

    #[test]
    fn test_round_trip() {
        let line = "src/x.cpp|17|USERDEFINED|UD#2|1|USERDEFINED|For C++11 and later use std::make_unique";
        let rec: IssueRecord = line.parse().unwrap();
        assert_eq!(rec.to_string(), line);

        // serialize(parse(serialize(r))) == serialize(r)
        let again: IssueRecord = rec.to_string().parse().unwrap();
        assert_eq!(again, rec);
    }

    #[test]
    fn test_wrong_field_count_rejected() {
        let err = "a|b|c".parse::<IssueRecord>().unwrap_err();
        match err {
            ProtocolError::FieldCount { found, .. } => assert_eq!(found, 3),
        }
    }

    #[test]
    fn test_delimiter_in_description_rejected() {
        // No escaping mechanism: an extra delimiter means a malformed record.
        let line = "f|0|USERDEFINED|UD#2|1|USERDEFINED|bad | description";
        assert!(line.parse::<IssueRecord>().is_err());
    }

    #[test]
    fn test_empty_fields_preserved() {
        let line = "|0|USERDEFINED|UD#2|1|USERDEFINED|";
        let rec: IssueRecord = line.parse().unwrap();
        assert_eq!(rec.filename, "");
        assert_eq!(rec.description, "");
        assert_eq!(rec.to_string(), line);
    }
}
