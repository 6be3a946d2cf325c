use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    events::{EventBus, SystemEvent},
    models::{
        Assignment, AssetType, AssignmentStatus, CreateAssignmentRequest,
        ReturnAssignmentRequest, SoftwareLicenseInfo, UpdateAssignmentStatusRequest,
        ValidateAssignmentRequest,
    },
    services::eligibility::{validate_eligibility, EligibilityOptions, ValidationResult},
    services::transitions::validate_transition,
};

#[derive(Clone)]
pub struct AssignmentService {
    db: Database,
    event_bus: EventBus,
    max_employee_assignments: usize,
}

impl AssignmentService {
    pub fn new(db: Database, event_bus: EventBus, max_employee_assignments: usize) -> Self {
        Self {
            db,
            event_bus,
            max_employee_assignments,
        }
    }

    /// Run the eligibility validator for a candidate assignment without
    /// persisting anything. This backs the console's pre-check panel.
    pub async fn validate_candidate(
        &self,
        request: &ValidateAssignmentRequest,
    ) -> ApiResult<ValidationResult> {
        let options = self
            .build_options(
                &request.asset_id,
                request.asset_type,
                request.max_employee_assignments,
                request.exclude_assignment_id.clone(),
            )
            .await?;

        let all_assignments = self.db.get_assignments_all().await?;

        Ok(validate_eligibility(
            &request.employee_id,
            &request.asset_id,
            request.asset_type,
            &all_assignments,
            &options,
        ))
    }

    pub async fn create_assignment(
        &self,
        request: CreateAssignmentRequest,
    ) -> ApiResult<Assignment> {
        // 1. Verify employee exists
        self.db
            .get_employee_by_id(&request.employee_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Employee {} not found", request.employee_id))
            })?;

        // 2. Verify asset exists
        self.verify_asset_exists(&request.asset_id, request.asset_type)
            .await?;

        // 3. Run the eligibility validator against the full assignment set.
        // The client-side pre-check is advisory; this is the authority.
        let options = self
            .build_options(&request.asset_id, request.asset_type, None, None)
            .await?;
        let all_assignments = self.db.get_assignments_all().await?;
        let result = validate_eligibility(
            &request.employee_id,
            &request.asset_id,
            request.asset_type,
            &all_assignments,
            &options,
        );

        if !result.is_eligible {
            let reasons: Vec<&str> = result.issues.iter().map(|i| i.message.as_str()).collect();
            return Err(ApiError::Conflict(format!(
                "Assignment is not eligible: {}",
                reasons.join("; ")
            )));
        }

        // 4. Persist
        let status = request.status.unwrap_or(AssignmentStatus::Active);
        let assignment = Assignment::new(
            request.employee_id,
            request.asset_id,
            request.asset_type,
            status,
            request.notes,
        );
        self.db.create_assignment(&assignment).await?;

        // 5. Publish event
        self.event_bus.publish(SystemEvent::AssetAssigned {
            assignment_id: assignment.id.clone(),
            employee_id: assignment.employee_id.clone(),
            asset_id: assignment.asset_id.clone(),
            asset_type: assignment.asset_type,
            timestamp: chrono::Utc::now().to_rfc3339(),
        });

        tracing::info!(
            "Assignment {} created: employee={}, asset={}",
            assignment.id,
            assignment.employee_id,
            assignment.asset_id
        );

        Ok(assignment)
    }

    pub async fn return_assignment(
        &self,
        assignment_id: &str,
        request: ReturnAssignmentRequest,
    ) -> ApiResult<Assignment> {
        // 1. Get assignment
        let mut assignment = self
            .db
            .get_assignment_by_id(assignment_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Assignment {} not found", assignment_id))
            })?;

        // 2. Guard the transition
        let old_status = assignment.status;
        validate_transition(old_status, AssignmentStatus::Returned)
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        // 3. Persist
        assignment.status = AssignmentStatus::Returned;
        assignment.return_date = Some(
            request
                .return_date
                .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
        );
        if request.notes.is_some() {
            assignment.notes = request.notes;
        }
        assignment.updated_at = chrono::Utc::now().to_rfc3339();
        self.db.update_assignment(&assignment).await?;

        // 4. Publish event
        self.event_bus.publish(SystemEvent::AssetReturned {
            assignment_id: assignment.id.clone(),
            employee_id: assignment.employee_id.clone(),
            asset_id: assignment.asset_id.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        });

        tracing::info!(
            "Assignment {} returned (was {})",
            assignment.id,
            old_status
        );

        Ok(assignment)
    }

    pub async fn update_status(
        &self,
        assignment_id: &str,
        request: UpdateAssignmentStatusRequest,
    ) -> ApiResult<Assignment> {
        // 1. Get assignment
        let mut assignment = self
            .db
            .get_assignment_by_id(assignment_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Assignment {} not found", assignment_id))
            })?;

        // 2. Guard the transition
        let old_status = assignment.status;
        validate_transition(old_status, request.status)
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        // 3. Persist
        assignment.status = request.status;
        if request.status == AssignmentStatus::Returned && assignment.return_date.is_none() {
            assignment.return_date = Some(chrono::Utc::now().to_rfc3339());
        }
        if request.notes.is_some() {
            assignment.notes = request.notes;
        }
        assignment.updated_at = chrono::Utc::now().to_rfc3339();
        self.db.update_assignment(&assignment).await?;

        // 4. Publish event
        if old_status != request.status {
            self.event_bus.publish(SystemEvent::AssignmentStatusChanged {
                assignment_id: assignment.id.clone(),
                old_status,
                new_status: request.status,
                timestamp: chrono::Utc::now().to_rfc3339(),
            });
        }

        tracing::info!(
            "Assignment {} status changed from {} to {}",
            assignment.id,
            old_status,
            request.status
        );

        Ok(assignment)
    }

    pub async fn delete_assignment(&self, assignment_id: &str) -> ApiResult<()> {
        let assignment = self
            .db
            .get_assignment_by_id(assignment_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Assignment {} not found", assignment_id))
            })?;

        self.db.delete_assignment(assignment_id).await?;

        self.event_bus.publish(SystemEvent::AssignmentDeleted {
            assignment_id: assignment.id.clone(),
            employee_id: assignment.employee_id.clone(),
            asset_id: assignment.asset_id.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        });

        tracing::info!("Assignment {} deleted", assignment_id);

        Ok(())
    }

    pub async fn get_assignment(&self, assignment_id: &str) -> ApiResult<Assignment> {
        self.db
            .get_assignment_by_id(assignment_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Assignment {} not found", assignment_id)))
    }

    pub async fn list_assignments(
        &self,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<Assignment>, i64)> {
        self.db.list_assignments(limit, offset).await
    }

    pub async fn get_employee_assignments(
        &self,
        employee_id: &str,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<Assignment>, i64)> {
        self.db
            .get_employee_assignments(employee_id, limit, offset)
            .await
    }

    pub async fn get_asset_assignments(
        &self,
        asset_id: &str,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<Assignment>, i64)> {
        self.db.get_asset_assignments(asset_id, limit, offset).await
    }

    // Private helpers

    async fn verify_asset_exists(&self, asset_id: &str, asset_type: AssetType) -> ApiResult<()> {
        match asset_type {
            AssetType::Hardware => {
                self.db
                    .get_hardware_asset_by_id(asset_id)
                    .await?
                    .ok_or_else(|| {
                        ApiError::NotFound(format!("Hardware asset {} not found", asset_id))
                    })?;
            }
            AssetType::Software => {
                self.db
                    .get_software_asset_by_id(asset_id)
                    .await?
                    .ok_or_else(|| {
                        ApiError::NotFound(format!("Software asset {} not found", asset_id))
                    })?;
            }
        }
        Ok(())
    }

    /// Assemble validator options: the configured employee limit (overridable
    /// per request) and, for software, the asset's license figures.
    async fn build_options(
        &self,
        asset_id: &str,
        asset_type: AssetType,
        max_override: Option<usize>,
        exclude_assignment_id: Option<String>,
    ) -> ApiResult<EligibilityOptions> {
        let software_data: Option<SoftwareLicenseInfo> = match asset_type {
            AssetType::Software => self
                .db
                .get_software_asset_by_id(asset_id)
                .await?
                .map(|asset| SoftwareLicenseInfo::from(&asset)),
            AssetType::Hardware => None,
        };

        Ok(EligibilityOptions {
            max_employee_assignments: max_override.unwrap_or(self.max_employee_assignments),
            software_data,
            exclude_assignment_id,
        })
    }
}
