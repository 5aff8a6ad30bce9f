//! Stack status to attachment colour mapping
//!
//! Statuses follow the CloudFormation stack status list:
//! <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/using-cfn-describing-stacks.html>

pub const GOOD: &str = "good";
pub const WARNING: &str = "warning";
pub const DANGER: &str = "danger";

/// Colour for statuses not in [`STATUS_COLORS`]
pub const DEFAULT_COLOR: &str = "#000000";

pub const STATUS_COLORS: &[(&str, &str)] = &[
    ("CREATE_COMPLETE", GOOD),
    ("CREATE_IN_PROGRESS", GOOD),
    ("CREATE_FAILED", DANGER),
    ("DELETE_COMPLETE", GOOD),
    ("DELETE_FAILED", DANGER),
    ("DELETE_IN_PROGRESS", GOOD),
    ("ROLLBACK_COMPLETE", WARNING),
    ("ROLLBACK_FAILED", DANGER),
    ("ROLLBACK_IN_PROGRESS", WARNING),
    ("UPDATE_COMPLETE", GOOD),
    ("UPDATE_COMPLETE_CLEANUP_IN_PROGRESS", GOOD),
    ("UPDATE_IN_PROGRESS", GOOD),
    ("UPDATE_ROLLBACK_COMPLETE", WARNING),
    ("UPDATE_ROLLBACK_COMPLETE_CLEANUP_IN_PROGRESS", WARNING),
    ("UPDATE_ROLLBACK_FAILED", DANGER),
    ("UPDATE_ROLLBACK_IN_PROGRESS", WARNING),
];

pub fn status_color(status: &str) -> &'static str {
    STATUS_COLORS
        .iter()
        .find(|(known, _)| *known == status)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_mapping() {
        let expected = [
            ("CREATE_COMPLETE", "good"),
            ("CREATE_IN_PROGRESS", "good"),
            ("CREATE_FAILED", "danger"),
            ("DELETE_COMPLETE", "good"),
            ("DELETE_FAILED", "danger"),
            ("DELETE_IN_PROGRESS", "good"),
            ("ROLLBACK_COMPLETE", "warning"),
            ("ROLLBACK_FAILED", "danger"),
            ("ROLLBACK_IN_PROGRESS", "warning"),
            ("UPDATE_COMPLETE", "good"),
            ("UPDATE_COMPLETE_CLEANUP_IN_PROGRESS", "good"),
            ("UPDATE_IN_PROGRESS", "good"),
            ("UPDATE_ROLLBACK_COMPLETE", "warning"),
            ("UPDATE_ROLLBACK_COMPLETE_CLEANUP_IN_PROGRESS", "warning"),
            ("UPDATE_ROLLBACK_FAILED", "danger"),
            ("UPDATE_ROLLBACK_IN_PROGRESS", "warning"),
        ];

        assert_eq!(STATUS_COLORS.len(), expected.len());
        for (status, color) in expected {
            assert_eq!(status_color(status), color, "status {}", status);
        }
    }

    #[test]
    fn test_unknown_status_uses_default() {
        for status in ["IMPORT_COMPLETE", "create_complete", "", "REVIEW_IN_PROGRESS "] {
            assert_eq!(status_color(status), DEFAULT_COLOR);
        }
    }
}
