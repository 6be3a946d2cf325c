use std::env;

use crate::services::eligibility::DEFAULT_MAX_EMPLOYEE_ASSIGNMENTS;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Cap on concurrently held assignments per employee, passed to the
    /// eligibility validator on every check.
    pub max_employee_assignments: usize,
    pub service_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://assetdesk.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let max_employee_assignments = env::var("MAX_EMPLOYEE_ASSIGNMENTS")
            .unwrap_or_else(|_| DEFAULT_MAX_EMPLOYEE_ASSIGNMENTS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAssignmentLimit)?;

        let service_name = env::var("SERVICE_NAME").unwrap_or_else(|_| "assetdesk".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            max_employee_assignments,
            service_name,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid MAX_EMPLOYEE_ASSIGNMENTS value")]
    InvalidAssignmentLimit,
}
