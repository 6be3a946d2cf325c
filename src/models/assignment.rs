use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Hardware,
    Software,
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetType::Hardware => write!(f, "hardware"),
            AssetType::Software => write!(f, "software"),
        }
    }
}

// Convert from string (for row mapping)
impl From<String> for AssetType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "software" => AssetType::Software,
            _ => AssetType::Hardware,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Pending,
    Active,
    Returned,
    Overdue,
    Lost,
    Damaged,
}

impl AssignmentStatus {
    /// Whether an assignment in this status still occupies the asset.
    /// Overdue items have not been handed back, so they count.
    pub fn is_occupying(&self) -> bool {
        matches!(self, AssignmentStatus::Active | AssignmentStatus::Overdue)
    }

    /// Display label used by the admin console (legacy Korean business terms).
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "대기중",
            AssignmentStatus::Active => "사용중",
            AssignmentStatus::Returned => "반납완료",
            AssignmentStatus::Overdue => "연체",
            AssignmentStatus::Lost => "분실",
            AssignmentStatus::Damaged => "파손",
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentStatus::Pending => write!(f, "pending"),
            AssignmentStatus::Active => write!(f, "active"),
            AssignmentStatus::Returned => write!(f, "returned"),
            AssignmentStatus::Overdue => write!(f, "overdue"),
            AssignmentStatus::Lost => write!(f, "lost"),
            AssignmentStatus::Damaged => write!(f, "damaged"),
        }
    }
}

// Convert from string (for row mapping). Legacy exports still carry the
// Korean display labels as status values, so both spellings are accepted.
impl From<String> for AssignmentStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" | "사용중" => AssignmentStatus::Active,
            "returned" | "반납완료" => AssignmentStatus::Returned,
            "overdue" | "연체" => AssignmentStatus::Overdue,
            "lost" | "분실" => AssignmentStatus::Lost,
            "damaged" | "파손" => AssignmentStatus::Damaged,
            _ => AssignmentStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub employee_id: String,
    pub asset_id: String,
    pub asset_type: AssetType,
    pub assigned_date: String,
    pub return_date: Option<String>,
    pub status: AssignmentStatus,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Assignment {
    pub fn new(
        employee_id: String,
        asset_id: String,
        asset_type: AssetType,
        status: AssignmentStatus,
        notes: Option<String>,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            employee_id,
            asset_id,
            asset_type,
            assigned_date: now.clone(),
            return_date: None,
            status,
            notes,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

// API Request models
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub employee_id: String,
    pub asset_id: String,
    pub asset_type: AssetType,
    pub status: Option<AssignmentStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentStatusRequest {
    pub status: AssignmentStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReturnAssignmentRequest {
    pub return_date: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateAssignmentRequest {
    pub employee_id: String,
    pub asset_id: String,
    pub asset_type: AssetType,
    pub max_employee_assignments: Option<usize>,
    pub exclude_assignment_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentListResponse {
    pub assignments: Vec<Assignment>,
    pub pagination: crate::models::PaginationMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(AssignmentStatus::Active.label(), "사용중");
        assert_eq!(AssignmentStatus::Returned.label(), "반납완료");
        assert_eq!(AssignmentStatus::Pending.label(), "대기중");
    }

    #[test]
    fn test_status_from_wire_key() {
        assert_eq!(
            AssignmentStatus::from("active".to_string()),
            AssignmentStatus::Active
        );
        assert_eq!(
            AssignmentStatus::from("damaged".to_string()),
            AssignmentStatus::Damaged
        );
    }

    #[test]
    fn test_status_from_legacy_label() {
        assert_eq!(
            AssignmentStatus::from("사용중".to_string()),
            AssignmentStatus::Active
        );
        assert_eq!(
            AssignmentStatus::from("반납완료".to_string()),
            AssignmentStatus::Returned
        );
        assert_eq!(
            AssignmentStatus::from("연체".to_string()),
            AssignmentStatus::Overdue
        );
    }

    #[test]
    fn test_unknown_status_defaults_to_pending() {
        assert_eq!(
            AssignmentStatus::from("garbage".to_string()),
            AssignmentStatus::Pending
        );
    }

    #[test]
    fn test_occupying_statuses() {
        assert!(AssignmentStatus::Active.is_occupying());
        assert!(AssignmentStatus::Overdue.is_occupying());
        assert!(!AssignmentStatus::Pending.is_occupying());
        assert!(!AssignmentStatus::Returned.is_occupying());
        assert!(!AssignmentStatus::Lost.is_occupying());
        assert!(!AssignmentStatus::Damaged.is_occupying());
    }
}
