use crate::api::middleware::error::ApiResult;
use crate::database::Database;
use crate::models::{Assignment, AssetType, AssignmentStatus};
use sqlx::Row;

fn row_to_assignment(row: &sqlx::any::AnyRow) -> ApiResult<Assignment> {
    Ok(Assignment {
        id: row.try_get("id")?,
        employee_id: row.try_get("employee_id")?,
        asset_id: row.try_get("asset_id")?,
        asset_type: AssetType::from(row.try_get::<String, _>("asset_type")?),
        assigned_date: row.try_get("assigned_date")?,
        return_date: row.try_get("return_date").ok(),
        status: AssignmentStatus::from(row.try_get::<String, _>("status")?),
        notes: row.try_get("notes").ok(),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

const ASSIGNMENT_COLUMNS: &str =
    "id, employee_id, asset_id, asset_type, assigned_date, return_date, status, notes, created_at, updated_at";

impl Database {
    pub async fn create_assignment(&self, assignment: &Assignment) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO assignments (id, employee_id, asset_id, asset_type, assigned_date, return_date, status, notes, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&assignment.id)
        .bind(&assignment.employee_id)
        .bind(&assignment.asset_id)
        .bind(assignment.asset_type.to_string())
        .bind(&assignment.assigned_date)
        .bind(&assignment.return_date)
        .bind(assignment.status.to_string())
        .bind(&assignment.notes)
        .bind(&assignment.created_at)
        .bind(&assignment.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_assignment_by_id(&self, id: &str) -> ApiResult<Option<Assignment>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM assignments WHERE id = ?",
            ASSIGNMENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row_to_assignment(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn update_assignment(&self, assignment: &Assignment) -> ApiResult<()> {
        sqlx::query(
            "UPDATE assignments
             SET status = ?, return_date = ?, notes = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(assignment.status.to_string())
        .bind(&assignment.return_date)
        .bind(&assignment.notes)
        .bind(&assignment.updated_at)
        .bind(&assignment.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_assignment(&self, id: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM assignments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Full assignment set, the input the eligibility validator scans.
    pub async fn get_assignments_all(&self) -> ApiResult<Vec<Assignment>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM assignments ORDER BY assigned_date ASC",
            ASSIGNMENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        let mut assignments = Vec::new();
        for row in rows {
            assignments.push(row_to_assignment(&row)?);
        }

        Ok(assignments)
    }

    pub async fn list_assignments(
        &self,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<Assignment>, i64)> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM assignments ORDER BY assigned_date DESC LIMIT ? OFFSET ?",
            ASSIGNMENT_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let mut assignments = Vec::new();
        for row in rows {
            assignments.push(row_to_assignment(&row)?);
        }

        let count_row = sqlx::query("SELECT COUNT(*) as count FROM assignments")
            .fetch_one(&self.pool)
            .await?;
        let total: i64 = count_row.try_get("count")?;

        Ok((assignments, total))
    }

    pub async fn get_employee_assignments(
        &self,
        employee_id: &str,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<Assignment>, i64)> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM assignments WHERE employee_id = ? ORDER BY assigned_date DESC LIMIT ? OFFSET ?",
            ASSIGNMENT_COLUMNS
        ))
        .bind(employee_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let mut assignments = Vec::new();
        for row in rows {
            assignments.push(row_to_assignment(&row)?);
        }

        let count_row = sqlx::query("SELECT COUNT(*) as count FROM assignments WHERE employee_id = ?")
            .bind(employee_id)
            .fetch_one(&self.pool)
            .await?;
        let total: i64 = count_row.try_get("count")?;

        Ok((assignments, total))
    }

    pub async fn get_asset_assignments(
        &self,
        asset_id: &str,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<Assignment>, i64)> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM assignments WHERE asset_id = ? ORDER BY assigned_date DESC LIMIT ? OFFSET ?",
            ASSIGNMENT_COLUMNS
        ))
        .bind(asset_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let mut assignments = Vec::new();
        for row in rows {
            assignments.push(row_to_assignment(&row)?);
        }

        let count_row = sqlx::query("SELECT COUNT(*) as count FROM assignments WHERE asset_id = ?")
            .bind(asset_id)
            .fetch_one(&self.pool)
            .await?;
        let total: i64 = count_row.try_get("count")?;

        Ok((assignments, total))
    }

    /// Whether the employee still holds anything (active or overdue).
    pub async fn employee_has_occupying_assignments(&self, employee_id: &str) -> ApiResult<bool> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM assignments
             WHERE employee_id = ? AND status IN ('active', 'overdue')",
        )
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await?;
        let count: i64 = row.try_get("count")?;
        Ok(count > 0)
    }

    /// Whether the asset is still held by anyone (active or overdue).
    pub async fn asset_has_occupying_assignments(&self, asset_id: &str) -> ApiResult<bool> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM assignments
             WHERE asset_id = ? AND status IN ('active', 'overdue')",
        )
        .bind(asset_id)
        .fetch_one(&self.pool)
        .await?;
        let count: i64 = row.try_get("count")?;
        Ok(count > 0)
    }

    pub async fn count_active_assignments(&self) -> ApiResult<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM assignments WHERE status IN ('active', 'overdue')",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(row.try_get("count")?)
    }
}
