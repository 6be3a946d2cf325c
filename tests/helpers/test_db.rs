use assetdesk::database::Database;

pub async fn setup_test_db() -> Database {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // Use file-based SQLite for tests (unique UUID per test for parallel execution)
    use uuid::Uuid;
    let temp_file = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", temp_file);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    setup_schema(&db).await;

    db
}

async fn setup_schema(db: &Database) {
    let pool = db.pool();

    sqlx::query(
        "CREATE TABLE employees (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            department TEXT NOT NULL,
            position TEXT NOT NULL,
            phone TEXT,
            hire_date TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create employees table");

    sqlx::query(
        "CREATE TABLE hardware_assets (
            id TEXT PRIMARY KEY,
            asset_tag TEXT NOT NULL UNIQUE,
            manufacturer TEXT NOT NULL,
            model_name TEXT NOT NULL,
            serial_number TEXT NOT NULL UNIQUE,
            purchase_date TEXT,
            notes TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create hardware_assets table");

    sqlx::query(
        "CREATE TABLE software_assets (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            version TEXT NOT NULL,
            total_licenses INTEGER NOT NULL DEFAULT 1,
            max_licenses INTEGER,
            concurrent_users INTEGER,
            notes TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create software_assets table");

    sqlx::query(
        "CREATE TABLE assignments (
            id TEXT PRIMARY KEY,
            employee_id TEXT NOT NULL,
            asset_id TEXT NOT NULL,
            asset_type TEXT NOT NULL CHECK(asset_type IN ('hardware', 'software')),
            assigned_date TEXT NOT NULL,
            return_date TEXT,
            status TEXT NOT NULL CHECK(status IN ('pending', 'active', 'returned', 'overdue', 'lost', 'damaged')),
            notes TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create assignments table");

    sqlx::query("CREATE INDEX idx_assignments_employee ON assignments(employee_id)")
        .execute(pool)
        .await
        .ok();

    sqlx::query("CREATE INDEX idx_assignments_asset ON assignments(asset_id)")
        .execute(pool)
        .await
        .ok();

    sqlx::query("CREATE INDEX idx_assignments_status ON assignments(status)")
        .execute(pool)
        .await
        .ok();
}
