use std::fmt;

use serde::{Deserialize, Serialize};

/// How far a review has progressed through a title.
///
/// The wire carries the human-readable label ("On Hold"); filter query
/// parameters use the constant-style key ("ON_HOLD") instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressStatus {
    Planned,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "On Progress")]
    OnProgress,
    Completed,
    Dropped,
}

impl ProgressStatus {
    /// Human-readable wire label
    pub fn label(&self) -> &'static str {
        match self {
            ProgressStatus::Planned => "Planned",
            ProgressStatus::OnHold => "On Hold",
            ProgressStatus::OnProgress => "On Progress",
            ProgressStatus::Completed => "Completed",
            ProgressStatus::Dropped => "Dropped",
        }
    }

    /// Constant-style key used in filter query parameters
    pub fn key(&self) -> &'static str {
        match self {
            ProgressStatus::Planned => "PLANNED",
            ProgressStatus::OnHold => "ON_HOLD",
            ProgressStatus::OnProgress => "ON_PROGRESS",
            ProgressStatus::Completed => "COMPLETED",
            ProgressStatus::Dropped => "DROPPED",
        }
    }

    /// All statuses, in lifecycle order
    pub fn all() -> Vec<ProgressStatus> {
        vec![
            ProgressStatus::Planned,
            ProgressStatus::OnHold,
            ProgressStatus::OnProgress,
            ProgressStatus::Completed,
            ProgressStatus::Dropped,
        ]
    }

    /// Parse from the wire label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Planned" => Some(ProgressStatus::Planned),
            "On Hold" => Some(ProgressStatus::OnHold),
            "On Progress" => Some(ProgressStatus::OnProgress),
            "Completed" => Some(ProgressStatus::Completed),
            "Dropped" => Some(ProgressStatus::Dropped),
            _ => None,
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for status in ProgressStatus::all() {
            assert_eq!(ProgressStatus::from_label(status.label()), Some(status));
        }
    }

    #[test]
    fn serializes_to_wire_label() {
        let value = serde_json::to_value(ProgressStatus::OnProgress).unwrap();
        assert_eq!(value, serde_json::json!("On Progress"));
        let parsed: ProgressStatus = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, ProgressStatus::OnProgress);
    }

    #[test]
    fn keys_are_constant_style() {
        assert_eq!(ProgressStatus::OnHold.key(), "ON_HOLD");
        assert_eq!(ProgressStatus::Planned.key(), "PLANNED");
    }
}
