//! Project-level configuration rules.
//!
//! Both rules quantify existentially over the configuration blocks: a
//! single satisfying block clears the whole project, and a project with
//! no blocks at all fails. At most one record is emitted per rule per
//! project, tied to the project path at line 0.

use crate::project::BuildConfig;
use crate::record::IssueRecord;

use super::RuleId;

/// UD#3: some configuration must set TreatWarningAsError to true.
pub fn check_warnings_as_errors(project: &str, configs: &[BuildConfig]) -> Option<IssueRecord> {
    if configs.iter().any(BuildConfig::warnings_are_errors) {
        return None;
    }
    Some(IssueRecord::user_defined(
        project,
        0,
        RuleId::Ud3.as_str(),
        "TreatWarningAsError is not set to true",
    ))
}

/// UD#4: some configuration must set a warning level ending in 4.
pub fn check_warning_level(project: &str, configs: &[BuildConfig]) -> Option<IssueRecord> {
    if configs.iter().any(BuildConfig::has_warning_level_4) {
        return None;
    }
    Some(IssueRecord::user_defined(
        project,
        0,
        RuleId::Ud4.as_str(),
        "Warning level is not set to 4",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(warnings_as_errors: Option<&str>, level: Option<&str>) -> BuildConfig {
        BuildConfig {
            treat_warning_as_error: warnings_as_errors.map(str::to_string),
            warning_level: level.map(str::to_string),
        }
    }

    #[test]
    fn test_one_satisfying_block_clears_project() {
        // One block lacks the flag, one sets it: no record.
        let configs = vec![config(None, None), config(Some("true"), None)];
        assert!(check_warnings_as_errors("app.vcxproj", &configs).is_none());
    }

    #[test]
    fn test_all_blocks_failing_yields_one_record() {
        let configs = vec![config(None, None), config(Some("false"), None)];
        let record = check_warnings_as_errors("app.vcxproj", &configs).unwrap();

        assert_eq!(record.rule, "UD#3");
        assert_eq!(record.line, "0");
        assert_eq!(record.filename, "app.vcxproj");
        assert_eq!(record.description, "TreatWarningAsError is not set to true");
    }

    #[test]
    fn test_treat_warning_as_error_case_insensitive() {
        let configs = vec![config(Some("True"), None)];
        assert!(check_warnings_as_errors("app.vcxproj", &configs).is_none());
    }

    #[test]
    fn test_warning_level_suffix_match() {
        // "Level4" passes, "W3" fails.
        let configs = vec![config(None, Some("Level4"))];
        assert!(check_warning_level("app.vcxproj", &configs).is_none());

        let configs = vec![config(None, Some("W3"))];
        let record = check_warning_level("app.vcxproj", &configs).unwrap();
        assert_eq!(record.rule, "UD#4");
        assert_eq!(record.description, "Warning level is not set to 4");
    }

    #[test]
    fn test_no_blocks_fails_both_rules() {
        assert!(check_warnings_as_errors("app.vcxproj", &[]).is_some());
        assert!(check_warning_level("app.vcxproj", &[]).is_some());
    }
}
