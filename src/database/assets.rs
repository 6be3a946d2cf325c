use crate::api::middleware::error::ApiResult;
use crate::database::Database;
use crate::models::{HardwareAsset, SoftwareAsset};
use sqlx::Row;

fn row_to_hardware_asset(row: &sqlx::any::AnyRow) -> ApiResult<HardwareAsset> {
    Ok(HardwareAsset {
        id: row.try_get("id")?,
        asset_tag: row.try_get("asset_tag")?,
        manufacturer: row.try_get("manufacturer")?,
        model_name: row.try_get("model_name")?,
        serial_number: row.try_get("serial_number")?,
        purchase_date: row.try_get("purchase_date").ok(),
        notes: row.try_get("notes").ok(),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn row_to_software_asset(row: &sqlx::any::AnyRow) -> ApiResult<SoftwareAsset> {
    Ok(SoftwareAsset {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        version: row.try_get("version")?,
        total_licenses: row.try_get("total_licenses")?,
        max_licenses: row.try_get("max_licenses").ok(),
        concurrent_users: row.try_get("concurrent_users").ok(),
        notes: row.try_get("notes").ok(),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

impl Database {
    // ========== Hardware assets ==========

    pub async fn create_hardware_asset(&self, asset: &HardwareAsset) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO hardware_assets (id, asset_tag, manufacturer, model_name, serial_number, purchase_date, notes, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&asset.id)
        .bind(&asset.asset_tag)
        .bind(&asset.manufacturer)
        .bind(&asset.model_name)
        .bind(&asset.serial_number)
        .bind(&asset.purchase_date)
        .bind(&asset.notes)
        .bind(&asset.created_at)
        .bind(&asset.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_hardware_asset_by_id(&self, id: &str) -> ApiResult<Option<HardwareAsset>> {
        let row = sqlx::query(
            "SELECT id, asset_tag, manufacturer, model_name, serial_number, purchase_date, notes, created_at, updated_at
             FROM hardware_assets WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row_to_hardware_asset(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn get_hardware_asset_by_serial(
        &self,
        serial_number: &str,
    ) -> ApiResult<Option<HardwareAsset>> {
        let row = sqlx::query(
            "SELECT id, asset_tag, manufacturer, model_name, serial_number, purchase_date, notes, created_at, updated_at
             FROM hardware_assets WHERE serial_number = ?",
        )
        .bind(serial_number)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row_to_hardware_asset(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn update_hardware_asset(&self, asset: &HardwareAsset) -> ApiResult<()> {
        sqlx::query(
            "UPDATE hardware_assets
             SET asset_tag = ?, manufacturer = ?, model_name = ?, serial_number = ?, purchase_date = ?, notes = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&asset.asset_tag)
        .bind(&asset.manufacturer)
        .bind(&asset.model_name)
        .bind(&asset.serial_number)
        .bind(&asset.purchase_date)
        .bind(&asset.notes)
        .bind(&asset.updated_at)
        .bind(&asset.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_hardware_asset(&self, id: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM hardware_assets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn list_hardware_assets(
        &self,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<HardwareAsset>, i64)> {
        let rows = sqlx::query(
            "SELECT id, asset_tag, manufacturer, model_name, serial_number, purchase_date, notes, created_at, updated_at
             FROM hardware_assets ORDER BY asset_tag ASC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let mut assets = Vec::new();
        for row in rows {
            assets.push(row_to_hardware_asset(&row)?);
        }

        let count_row = sqlx::query("SELECT COUNT(*) as count FROM hardware_assets")
            .fetch_one(&self.pool)
            .await?;
        let total: i64 = count_row.try_get("count")?;

        Ok((assets, total))
    }

    pub async fn count_hardware_assets(&self) -> ApiResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM hardware_assets")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }

    // ========== Software assets ==========

    pub async fn create_software_asset(&self, asset: &SoftwareAsset) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO software_assets (id, name, version, total_licenses, max_licenses, concurrent_users, notes, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&asset.id)
        .bind(&asset.name)
        .bind(&asset.version)
        .bind(asset.total_licenses)
        .bind(asset.max_licenses)
        .bind(asset.concurrent_users)
        .bind(&asset.notes)
        .bind(&asset.created_at)
        .bind(&asset.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_software_asset_by_id(&self, id: &str) -> ApiResult<Option<SoftwareAsset>> {
        let row = sqlx::query(
            "SELECT id, name, version, total_licenses, max_licenses, concurrent_users, notes, created_at, updated_at
             FROM software_assets WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row_to_software_asset(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn update_software_asset(&self, asset: &SoftwareAsset) -> ApiResult<()> {
        sqlx::query(
            "UPDATE software_assets
             SET name = ?, version = ?, total_licenses = ?, max_licenses = ?, concurrent_users = ?, notes = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&asset.name)
        .bind(&asset.version)
        .bind(asset.total_licenses)
        .bind(asset.max_licenses)
        .bind(asset.concurrent_users)
        .bind(&asset.notes)
        .bind(&asset.updated_at)
        .bind(&asset.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_software_asset(&self, id: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM software_assets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn list_software_assets(
        &self,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<SoftwareAsset>, i64)> {
        let rows = sqlx::query(
            "SELECT id, name, version, total_licenses, max_licenses, concurrent_users, notes, created_at, updated_at
             FROM software_assets ORDER BY name ASC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let mut assets = Vec::new();
        for row in rows {
            assets.push(row_to_software_asset(&row)?);
        }

        let count_row = sqlx::query("SELECT COUNT(*) as count FROM software_assets")
            .fetch_one(&self.pool)
            .await?;
        let total: i64 = count_row.try_get("count")?;

        Ok((assets, total))
    }

    pub async fn count_software_assets(&self) -> ApiResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM software_assets")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }
}
