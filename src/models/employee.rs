use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub phone: Option<String>,
    pub hire_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Employee {
    pub fn new(
        name: String,
        email: String,
        department: String,
        position: String,
        phone: Option<String>,
        hire_date: Option<String>,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            email,
            department,
            position,
            phone,
            hire_date,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

// API Request models
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub phone: Option<String>,
    pub hire_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub hire_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
    pub pagination: crate::models::PaginationMetadata,
}
