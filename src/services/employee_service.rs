use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest},
};

#[derive(Clone)]
pub struct EmployeeService {
    db: Database,
}

impl EmployeeService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create_employee(&self, request: CreateEmployeeRequest) -> ApiResult<Employee> {
        // 1. Validate fields
        if request.name.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "Employee name cannot be empty".to_string(),
            ));
        }
        if request.email.trim().is_empty() || !request.email.contains('@') {
            return Err(ApiError::BadRequest("Invalid email address".to_string()));
        }

        // 2. Check for duplicate email
        if self
            .db
            .get_employee_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(ApiError::Conflict(format!(
                "Employee with email '{}' already exists",
                request.email
            )));
        }

        // 3. Create and save
        let employee = Employee::new(
            request.name,
            request.email,
            request.department,
            request.position,
            request.phone,
            request.hire_date,
        );
        self.db.create_employee(&employee).await?;

        tracing::info!("Employee created: id={}, email={}", employee.id, employee.email);
        Ok(employee)
    }

    pub async fn get_employee(&self, id: &str) -> ApiResult<Employee> {
        self.db
            .get_employee_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", id)))
    }

    pub async fn update_employee(
        &self,
        id: &str,
        request: UpdateEmployeeRequest,
    ) -> ApiResult<Employee> {
        // 1. Get existing record
        let mut employee = self
            .db
            .get_employee_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", id)))?;

        // 2. Apply changes
        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(ApiError::BadRequest(
                    "Employee name cannot be empty".to_string(),
                ));
            }
            employee.name = name;
        }
        if let Some(email) = request.email {
            if email != employee.email {
                if self.db.get_employee_by_email(&email).await?.is_some() {
                    return Err(ApiError::Conflict(format!(
                        "Employee with email '{}' already exists",
                        email
                    )));
                }
                employee.email = email;
            }
        }
        if let Some(department) = request.department {
            employee.department = department;
        }
        if let Some(position) = request.position {
            employee.position = position;
        }
        if request.phone.is_some() {
            employee.phone = request.phone;
        }
        if request.hire_date.is_some() {
            employee.hire_date = request.hire_date;
        }
        employee.updated_at = chrono::Utc::now().to_rfc3339();

        // 3. Save
        self.db.update_employee(&employee).await?;

        Ok(employee)
    }

    pub async fn delete_employee(&self, id: &str) -> ApiResult<()> {
        // 1. Verify existence
        self.db
            .get_employee_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", id)))?;

        // 2. An employee still holding assets cannot be removed
        if self.db.employee_has_occupying_assignments(id).await? {
            return Err(ApiError::Conflict(
                "Employee still holds active assignments".to_string(),
            ));
        }

        self.db.delete_employee(id).await?;
        tracing::info!("Employee {} deleted", id);
        Ok(())
    }

    pub async fn list_employees(&self, limit: i64, offset: i64) -> ApiResult<(Vec<Employee>, i64)> {
        self.db.list_employees(limit, offset).await
    }
}
