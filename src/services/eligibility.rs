use serde::Serialize;

use crate::models::{Assignment, AssetType, SoftwareLicenseInfo};

/// Default per-employee cap on concurrently held assignments. Callers can
/// override it per validation via [`EligibilityOptions`].
pub const DEFAULT_MAX_EMPLOYEE_ASSIGNMENTS: usize = 5;

/// License utilization percentage at which a non-blocking warning is raised.
const LICENSE_WARNING_THRESHOLD_PCT: f64 = 80.0;

#[derive(Debug, Clone)]
pub struct EligibilityOptions {
    pub max_employee_assignments: usize,
    pub software_data: Option<SoftwareLicenseInfo>,
    /// Set when editing an existing assignment so it does not conflict
    /// with itself.
    pub exclude_assignment_id: Option<String>,
}

impl Default for EligibilityOptions {
    fn default() -> Self {
        Self {
            max_employee_assignments: DEFAULT_MAX_EMPLOYEE_ASSIGNMENTS,
            software_data: None,
            exclude_assignment_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    AssetAvailability,
    EmployeeLimit,
    SoftwareLicense,
    Conflict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured payload attached to an issue, keyed by the check that raised it.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum IssueDetails {
    OccupiedBy {
        assignments: Vec<Assignment>,
    },
    AtLimit {
        current: usize,
        limit: usize,
        assignments: Vec<Assignment>,
    },
    LicenseUsage {
        in_use: i64,
        capacity: i64,
        utilization_pct: f64,
    },
    DuplicateAssignment {
        assignments: Vec<Assignment>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub message: String,
    pub details: IssueDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_eligible: bool,
    pub issues: Vec<Issue>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Decide whether a proposed assignment may be created.
///
/// Runs four checks in a fixed order over the full assignment set, collecting
/// every applicable issue rather than stopping at the first, so the caller
/// sees all blocking reasons at once. The result is eligible exactly when no
/// collected issue carries `Error` severity; warnings never block.
///
/// This is an advisory pre-check as well as the write-path gate: it performs
/// no I/O, mutates nothing, and never fails. Unknown identifiers simply find
/// no matches, which reads as eligible; it is not an existence check.
pub fn validate_eligibility(
    employee_id: &str,
    asset_id: &str,
    asset_type: AssetType,
    all_assignments: &[Assignment],
    options: &EligibilityOptions,
) -> ValidationResult {
    let considered: Vec<&Assignment> = all_assignments
        .iter()
        .filter(|a| match &options.exclude_assignment_id {
            Some(excluded) => a.id != *excluded,
            None => true,
        })
        .collect();

    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    check_asset_availability(asset_id, asset_type, &considered, &mut issues);
    check_employee_limit(
        employee_id,
        options.max_employee_assignments,
        &considered,
        &mut issues,
        &mut warnings,
    );
    if asset_type == AssetType::Software {
        check_license_capacity(
            asset_id,
            options.software_data.as_ref(),
            &considered,
            &mut issues,
            &mut warnings,
        );
    }
    check_direct_conflict(employee_id, asset_id, &considered, &mut issues);

    let recommendations = build_recommendations(&issues);
    let is_eligible = !issues.iter().any(|i| i.severity == IssueSeverity::Error);

    ValidationResult {
        is_eligible,
        issues,
        warnings,
        recommendations,
    }
}

/// Hardware is single-occupancy: any occupying assignment on the asset blocks.
/// Software occupancy is seat-based and handled by the license capacity check.
fn check_asset_availability(
    asset_id: &str,
    asset_type: AssetType,
    considered: &[&Assignment],
    issues: &mut Vec<Issue>,
) {
    if asset_type != AssetType::Hardware {
        return;
    }

    let occupying: Vec<Assignment> = considered
        .iter()
        .filter(|a| a.asset_id == asset_id && a.status.is_occupying())
        .map(|a| (*a).clone())
        .collect();

    if !occupying.is_empty() {
        issues.push(Issue {
            kind: IssueKind::AssetAvailability,
            severity: IssueSeverity::Error,
            message: format!("Hardware asset {} is currently assigned", asset_id),
            details: IssueDetails::OccupiedBy {
                assignments: occupying,
            },
        });
    }
}

fn check_employee_limit(
    employee_id: &str,
    limit: usize,
    considered: &[&Assignment],
    issues: &mut Vec<Issue>,
    warnings: &mut Vec<String>,
) {
    let held: Vec<Assignment> = considered
        .iter()
        .filter(|a| a.employee_id == employee_id && a.status.is_occupying())
        .map(|a| (*a).clone())
        .collect();
    let current = held.len();

    if current >= limit {
        issues.push(Issue {
            kind: IssueKind::EmployeeLimit,
            severity: IssueSeverity::Error,
            message: format!(
                "Employee {} already holds {} of {} permitted assignments",
                employee_id, current, limit
            ),
            details: IssueDetails::AtLimit {
                current,
                limit,
                assignments: held,
            },
        });
    } else if current + 1 == limit {
        // Last permitted slot: advisory only, does not block.
        warnings.push(format!(
            "Employee {} holds {} of {} permitted assignments; this would fill the last slot",
            employee_id, current, limit
        ));
    }
}

/// Seat accounting for software assets. When no license data is supplied the
/// capacity falls back to a single seat, so any occupying assignment blocks.
/// That is the conservative behavior callers get without supplying counts.
fn check_license_capacity(
    asset_id: &str,
    software_data: Option<&SoftwareLicenseInfo>,
    considered: &[&Assignment],
    issues: &mut Vec<Issue>,
    warnings: &mut Vec<String>,
) {
    let capacity = software_data
        .map(|d| d.max_licenses.or(d.total_licenses).unwrap_or(1))
        .unwrap_or(1)
        .max(1);

    let in_use = considered
        .iter()
        .filter(|a| {
            a.asset_id == asset_id
                && a.asset_type == AssetType::Software
                && a.status.is_occupying()
        })
        .count() as i64;

    let utilization_pct = (in_use as f64 / capacity as f64) * 100.0;

    if in_use >= capacity {
        issues.push(Issue {
            kind: IssueKind::SoftwareLicense,
            severity: IssueSeverity::Error,
            message: format!(
                "All {} license seats for software {} are in use",
                capacity, asset_id
            ),
            details: IssueDetails::LicenseUsage {
                in_use,
                capacity,
                utilization_pct,
            },
        });
    } else if utilization_pct >= LICENSE_WARNING_THRESHOLD_PCT {
        warnings.push(format!(
            "Software {} license utilization is at {:.0}% ({}/{} seats in use)",
            asset_id, utilization_pct, in_use, capacity
        ));
    }
}

/// Catches the same employee already holding the same asset, which the
/// availability check does not distinguish from occupancy by anyone else.
fn check_direct_conflict(
    employee_id: &str,
    asset_id: &str,
    considered: &[&Assignment],
    issues: &mut Vec<Issue>,
) {
    let duplicates: Vec<Assignment> = considered
        .iter()
        .filter(|a| {
            a.employee_id == employee_id && a.asset_id == asset_id && a.status.is_occupying()
        })
        .map(|a| (*a).clone())
        .collect();

    if !duplicates.is_empty() {
        issues.push(Issue {
            kind: IssueKind::Conflict,
            severity: IssueSeverity::Error,
            message: format!(
                "Employee {} already holds an active assignment for asset {}",
                employee_id, asset_id
            ),
            details: IssueDetails::DuplicateAssignment {
                assignments: duplicates,
            },
        });
    }
}

fn build_recommendations(issues: &[Issue]) -> Vec<String> {
    if issues.is_empty() {
        return vec!["No blocking conditions found; the assignment can be created.".to_string()];
    }

    let mut recommendations = Vec::new();
    for kind in [
        IssueKind::AssetAvailability,
        IssueKind::EmployeeLimit,
        IssueKind::SoftwareLicense,
        IssueKind::Conflict,
    ] {
        if issues.iter().any(|i| i.kind == kind) {
            recommendations.push(
                match kind {
                    IssueKind::AssetAvailability => {
                        "Wait for the current assignment to be returned, or choose another asset."
                    }
                    IssueKind::EmployeeLimit => {
                        "Return an existing assignment first, or request a higher assignment limit."
                    }
                    IssueKind::SoftwareLicense => {
                        "Reclaim an unused license seat, or purchase additional licenses."
                    }
                    IssueKind::Conflict => {
                        "The employee already holds this asset; edit the existing assignment instead."
                    }
                }
                .to_string(),
            );
        }
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssignmentStatus;

    fn assignment(
        id: &str,
        employee_id: &str,
        asset_id: &str,
        asset_type: AssetType,
        status: AssignmentStatus,
    ) -> Assignment {
        Assignment {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            asset_id: asset_id.to_string(),
            asset_type,
            assigned_date: "2026-01-15T09:00:00+00:00".to_string(),
            return_date: None,
            status,
            notes: None,
            created_at: "2026-01-15T09:00:00+00:00".to_string(),
            updated_at: "2026-01-15T09:00:00+00:00".to_string(),
        }
    }

    fn issue_kinds(result: &ValidationResult) -> Vec<IssueKind> {
        result.issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_no_assignments_is_eligible() {
        let result = validate_eligibility(
            "E1",
            "HW1",
            AssetType::Hardware,
            &[],
            &EligibilityOptions::default(),
        );
        assert!(result.is_eligible);
        assert!(result.issues.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.recommendations.len(), 1);
    }

    #[test]
    fn test_occupied_hardware_blocks_other_employee() {
        let assignments = vec![assignment(
            "A1",
            "E1",
            "HW1",
            AssetType::Hardware,
            AssignmentStatus::Active,
        )];
        let result = validate_eligibility(
            "E2",
            "HW1",
            AssetType::Hardware,
            &assignments,
            &EligibilityOptions::default(),
        );
        assert!(!result.is_eligible);
        assert_eq!(issue_kinds(&result), vec![IssueKind::AssetAvailability]);
        assert_eq!(result.issues[0].severity, IssueSeverity::Error);
        match &result.issues[0].details {
            IssueDetails::OccupiedBy { assignments } => {
                assert_eq!(assignments.len(), 1);
                assert_eq!(assignments[0].id, "A1");
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_overdue_hardware_still_occupies() {
        let assignments = vec![assignment(
            "A1",
            "E1",
            "HW1",
            AssetType::Hardware,
            AssignmentStatus::Overdue,
        )];
        let result = validate_eligibility(
            "E2",
            "HW1",
            AssetType::Hardware,
            &assignments,
            &EligibilityOptions::default(),
        );
        assert!(!result.is_eligible);
    }

    #[test]
    fn test_returned_hardware_is_available() {
        let assignments = vec![assignment(
            "A1",
            "E1",
            "HW1",
            AssetType::Hardware,
            AssignmentStatus::Returned,
        )];
        let result = validate_eligibility(
            "E2",
            "HW1",
            AssetType::Hardware,
            &assignments,
            &EligibilityOptions::default(),
        );
        assert!(result.is_eligible);
    }

    #[test]
    fn test_legacy_status_literal_counts_as_active() {
        // Records imported with Korean status values still occupy the asset.
        let mut a = assignment("A1", "E1", "HW1", AssetType::Hardware, AssignmentStatus::Active);
        a.status = AssignmentStatus::from("사용중".to_string());
        let result = validate_eligibility(
            "E2",
            "HW1",
            AssetType::Hardware,
            &[a],
            &EligibilityOptions::default(),
        );
        assert!(!result.is_eligible);
        assert_eq!(issue_kinds(&result), vec![IssueKind::AssetAvailability]);
    }

    #[test]
    fn test_employee_at_limit_blocks() {
        let assignments: Vec<Assignment> = (0..5)
            .map(|i| {
                assignment(
                    &format!("A{}", i),
                    "E1",
                    &format!("HW{}", i),
                    AssetType::Hardware,
                    AssignmentStatus::Active,
                )
            })
            .collect();
        let result = validate_eligibility(
            "E1",
            "HW9",
            AssetType::Hardware,
            &assignments,
            &EligibilityOptions::default(),
        );
        assert!(!result.is_eligible);
        assert_eq!(issue_kinds(&result), vec![IssueKind::EmployeeLimit]);
        match &result.issues[0].details {
            IssueDetails::AtLimit { current, limit, .. } => {
                assert_eq!(*current, 5);
                assert_eq!(*limit, 5);
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_employee_one_below_limit_warns_without_blocking() {
        let assignments: Vec<Assignment> = (0..4)
            .map(|i| {
                assignment(
                    &format!("A{}", i),
                    "E1",
                    &format!("HW{}", i),
                    AssetType::Hardware,
                    AssignmentStatus::Active,
                )
            })
            .collect();
        let result = validate_eligibility(
            "E1",
            "HW9",
            AssetType::Hardware,
            &assignments,
            &EligibilityOptions::default(),
        );
        assert!(result.is_eligible);
        assert!(result.issues.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("last slot"));
    }

    #[test]
    fn test_custom_employee_limit() {
        let assignments = vec![
            assignment("A1", "E1", "HW1", AssetType::Hardware, AssignmentStatus::Active),
            assignment("A2", "E1", "HW2", AssetType::Hardware, AssignmentStatus::Active),
        ];
        let options = EligibilityOptions {
            max_employee_assignments: 2,
            ..Default::default()
        };
        let result =
            validate_eligibility("E1", "HW9", AssetType::Hardware, &assignments, &options);
        assert!(!result.is_eligible);
        assert_eq!(issue_kinds(&result), vec![IssueKind::EmployeeLimit]);
    }

    #[test]
    fn test_software_at_capacity_blocks() {
        let assignments: Vec<Assignment> = (0..3)
            .map(|i| {
                assignment(
                    &format!("A{}", i),
                    &format!("E{}", i),
                    "SW1",
                    AssetType::Software,
                    AssignmentStatus::Active,
                )
            })
            .collect();
        let options = EligibilityOptions {
            software_data: Some(SoftwareLicenseInfo {
                total_licenses: Some(3),
                max_licenses: None,
                concurrent_users: None,
            }),
            ..Default::default()
        };
        let result =
            validate_eligibility("E9", "SW1", AssetType::Software, &assignments, &options);
        assert!(!result.is_eligible);
        assert_eq!(issue_kinds(&result), vec![IssueKind::SoftwareLicense]);
        match &result.issues[0].details {
            IssueDetails::LicenseUsage {
                in_use, capacity, ..
            } => {
                assert_eq!(*in_use, 3);
                assert_eq!(*capacity, 3);
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_software_with_free_seats_is_eligible() {
        let assignments = vec![assignment(
            "A1",
            "E1",
            "SW1",
            AssetType::Software,
            AssignmentStatus::Active,
        )];
        let options = EligibilityOptions {
            software_data: Some(SoftwareLicenseInfo {
                total_licenses: Some(10),
                max_licenses: None,
                concurrent_users: None,
            }),
            ..Default::default()
        };
        let result =
            validate_eligibility("E2", "SW1", AssetType::Software, &assignments, &options);
        assert!(result.is_eligible);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_software_high_utilization_warns() {
        // 4 of 5 seats in use: 80%, warns but remains eligible.
        let assignments: Vec<Assignment> = (0..4)
            .map(|i| {
                assignment(
                    &format!("A{}", i),
                    &format!("E{}", i),
                    "SW1",
                    AssetType::Software,
                    AssignmentStatus::Active,
                )
            })
            .collect();
        let options = EligibilityOptions {
            software_data: Some(SoftwareLicenseInfo {
                total_licenses: Some(5),
                max_licenses: None,
                concurrent_users: None,
            }),
            ..Default::default()
        };
        let result =
            validate_eligibility("E9", "SW1", AssetType::Software, &assignments, &options);
        assert!(result.is_eligible);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("80%"));
    }

    #[test]
    fn test_max_licenses_overrides_total() {
        let assignments = vec![assignment(
            "A1",
            "E1",
            "SW1",
            AssetType::Software,
            AssignmentStatus::Active,
        )];
        let options = EligibilityOptions {
            software_data: Some(SoftwareLicenseInfo {
                total_licenses: Some(10),
                max_licenses: Some(1),
                concurrent_users: None,
            }),
            ..Default::default()
        };
        let result =
            validate_eligibility("E2", "SW1", AssetType::Software, &assignments, &options);
        assert!(!result.is_eligible);
        assert_eq!(issue_kinds(&result), vec![IssueKind::SoftwareLicense]);
    }

    #[test]
    fn test_software_without_license_data_is_conservative() {
        // No license figures supplied: a single occupying assignment blocks.
        let assignments = vec![assignment(
            "A1",
            "E1",
            "SW1",
            AssetType::Software,
            AssignmentStatus::Active,
        )];
        let result = validate_eligibility(
            "E2",
            "SW1",
            AssetType::Software,
            &assignments,
            &EligibilityOptions::default(),
        );
        assert!(!result.is_eligible);
        assert_eq!(issue_kinds(&result), vec![IssueKind::SoftwareLicense]);
    }

    #[test]
    fn test_direct_conflict_same_employee_same_asset() {
        let assignments = vec![assignment(
            "A1",
            "E1",
            "HW1",
            AssetType::Hardware,
            AssignmentStatus::Active,
        )];
        let result = validate_eligibility(
            "E1",
            "HW1",
            AssetType::Hardware,
            &assignments,
            &EligibilityOptions::default(),
        );
        assert!(!result.is_eligible);
        let kinds = issue_kinds(&result);
        assert!(kinds.contains(&IssueKind::AssetAvailability));
        assert!(kinds.contains(&IssueKind::Conflict));
    }

    #[test]
    fn test_exclude_assignment_id_allows_self_edit() {
        let assignments = vec![assignment(
            "A1",
            "E1",
            "HW1",
            AssetType::Hardware,
            AssignmentStatus::Active,
        )];
        let options = EligibilityOptions {
            exclude_assignment_id: Some("A1".to_string()),
            ..Default::default()
        };
        let result =
            validate_eligibility("E1", "HW1", AssetType::Hardware, &assignments, &options);
        assert!(result.is_eligible);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_all_blocking_reasons_collected() {
        // Occupied hardware AND employee at limit: both issues reported.
        let mut assignments: Vec<Assignment> = (0..5)
            .map(|i| {
                assignment(
                    &format!("A{}", i),
                    "E2",
                    &format!("HW{}", i),
                    AssetType::Hardware,
                    AssignmentStatus::Active,
                )
            })
            .collect();
        assignments.push(assignment(
            "A9",
            "E1",
            "HW9",
            AssetType::Hardware,
            AssignmentStatus::Active,
        ));
        let result = validate_eligibility(
            "E2",
            "HW9",
            AssetType::Hardware,
            &assignments,
            &EligibilityOptions::default(),
        );
        assert!(!result.is_eligible);
        let kinds = issue_kinds(&result);
        assert_eq!(
            kinds,
            vec![IssueKind::AssetAvailability, IssueKind::EmployeeLimit]
        );
        assert_eq!(result.recommendations.len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let assignments = vec![assignment(
            "A1",
            "E1",
            "HW1",
            AssetType::Hardware,
            AssignmentStatus::Active,
        )];
        let options = EligibilityOptions::default();
        let first =
            validate_eligibility("E2", "HW1", AssetType::Hardware, &assignments, &options);
        let second =
            validate_eligibility("E2", "HW1", AssetType::Hardware, &assignments, &options);
        assert_eq!(first.is_eligible, second.is_eligible);
        assert_eq!(issue_kinds(&first), issue_kinds(&second));
        assert_eq!(first.warnings, second.warnings);
        assert_eq!(first.recommendations, second.recommendations);
    }

    #[test]
    fn test_order_insensitive() {
        let a1 = assignment("A1", "E1", "HW1", AssetType::Hardware, AssignmentStatus::Active);
        let a2 = assignment("A2", "E2", "HW2", AssetType::Hardware, AssignmentStatus::Active);
        let a3 = assignment("A3", "E2", "HW3", AssetType::Hardware, AssignmentStatus::Returned);
        let forward = vec![a1.clone(), a2.clone(), a3.clone()];
        let reversed = vec![a3, a2, a1];
        let options = EligibilityOptions::default();

        let r1 = validate_eligibility("E2", "HW1", AssetType::Hardware, &forward, &options);
        let r2 = validate_eligibility("E2", "HW1", AssetType::Hardware, &reversed, &options);
        assert_eq!(r1.is_eligible, r2.is_eligible);
        assert_eq!(issue_kinds(&r1), issue_kinds(&r2));
    }

    #[test]
    fn test_unknown_ids_degrade_to_eligible() {
        let assignments = vec![assignment(
            "A1",
            "E1",
            "HW1",
            AssetType::Hardware,
            AssignmentStatus::Active,
        )];
        let result = validate_eligibility(
            "nobody",
            "nothing",
            AssetType::Hardware,
            &assignments,
            &EligibilityOptions::default(),
        );
        assert!(result.is_eligible);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let assignments = vec![assignment(
            "A1",
            "E1",
            "HW1",
            AssetType::Hardware,
            AssignmentStatus::Active,
        )];
        let before = serde_json::to_string(&assignments).unwrap();
        let _ = validate_eligibility(
            "E2",
            "HW1",
            AssetType::Hardware,
            &assignments,
            &EligibilityOptions::default(),
        );
        let after = serde_json::to_string(&assignments).unwrap();
        assert_eq!(before, after);
    }
}
