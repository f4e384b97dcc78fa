//! Line-scan rules for header and source files.
//!
//! These are substring tests, not tokenizers. A `using namespace` inside a
//! comment or string literal still triggers; downstream consumers depend
//! on the existing counts, so the imprecision is part of the contract.

use crate::record::IssueRecord;

use super::RuleId;

const HEADER_NEEDLE: &str = "using namespace";
const SOURCE_NEEDLE: &str = "make_unique";
const SOURCE_QUALIFIED: &str = "std::make_unique";

/// UD#2 for headers: flag every line containing `using namespace`.
pub fn scan_header_lines<'a, I>(filename: &str, lines: I) -> Vec<IssueRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| line.contains(HEADER_NEEDLE))
        .map(|(idx, _)| {
            IssueRecord::user_defined(
                filename,
                (idx + 1) as u32,
                RuleId::Ud2.as_str(),
                "Using namespace found in header file",
            )
        })
        .collect()
}

/// UD#2 for sources: flag every `make_unique` that is not written as
/// `std::make_unique`.
pub fn scan_source_lines<'a, I>(filename: &str, lines: I) -> Vec<IssueRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| line.contains(SOURCE_NEEDLE) && !line.contains(SOURCE_QUALIFIED))
        .map(|(idx, _)| {
            IssueRecord::user_defined(
                filename,
                (idx + 1) as u32,
                RuleId::Ud2.as_str(),
                "For C++11 and later use std::make_unique",
            )
        })
        .collect()
}
