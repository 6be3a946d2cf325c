use crate::api::middleware::error::ApiResult;
use crate::database::Database;
use crate::models::Employee;
use sqlx::Row;

fn row_to_employee(row: &sqlx::any::AnyRow) -> ApiResult<Employee> {
    Ok(Employee {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        department: row.try_get("department")?,
        position: row.try_get("position")?,
        phone: row.try_get("phone").ok(),
        hire_date: row.try_get("hire_date").ok(),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

impl Database {
    pub async fn create_employee(&self, employee: &Employee) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO employees (id, name, email, department, position, phone, hire_date, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&employee.id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.department)
        .bind(&employee.position)
        .bind(&employee.phone)
        .bind(&employee.hire_date)
        .bind(&employee.created_at)
        .bind(&employee.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_employee_by_id(&self, id: &str) -> ApiResult<Option<Employee>> {
        let row = sqlx::query(
            "SELECT id, name, email, department, position, phone, hire_date, created_at, updated_at
             FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row_to_employee(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn get_employee_by_email(&self, email: &str) -> ApiResult<Option<Employee>> {
        let row = sqlx::query(
            "SELECT id, name, email, department, position, phone, hire_date, created_at, updated_at
             FROM employees WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row_to_employee(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn update_employee(&self, employee: &Employee) -> ApiResult<()> {
        sqlx::query(
            "UPDATE employees
             SET name = ?, email = ?, department = ?, position = ?, phone = ?, hire_date = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.department)
        .bind(&employee.position)
        .bind(&employee.phone)
        .bind(&employee.hire_date)
        .bind(&employee.updated_at)
        .bind(&employee.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_employee(&self, id: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn list_employees(&self, limit: i64, offset: i64) -> ApiResult<(Vec<Employee>, i64)> {
        let rows = sqlx::query(
            "SELECT id, name, email, department, position, phone, hire_date, created_at, updated_at
             FROM employees ORDER BY name ASC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let mut employees = Vec::new();
        for row in rows {
            employees.push(row_to_employee(&row)?);
        }

        let count_row = sqlx::query("SELECT COUNT(*) as count FROM employees")
            .fetch_one(&self.pool)
            .await?;
        let total: i64 = count_row.try_get("count")?;

        Ok((employees, total))
    }

    pub async fn count_employees(&self) -> ApiResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM employees")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }
}
