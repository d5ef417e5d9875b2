//! Schema creation, additive column migration and one-time seeding.
//!
//! Every step is idempotent and safe to re-run against an existing
//! database. The check-then-insert in [`seed_if_empty`] is not atomic
//! across processes; callers run [`run_bootstrap`] once at startup before
//! serving requests.

use sqlx::SqlitePool;

const CREATE_INCIDENTS: &str = "
    CREATE TABLE IF NOT EXISTS incidents (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL,
        severity TEXT NOT NULL,
        location TEXT NOT NULL,
        description TEXT,
        media_path TEXT,
        timestamp DATETIME NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
        status TEXT NOT NULL DEFAULT 'PENDING'
    )";

const CREATE_INVENTORY: &str = "
    CREATE TABLE IF NOT EXISTS inventory (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        item TEXT NOT NULL,
        quantity INTEGER NOT NULL CHECK (quantity >= 0),
        category TEXT NOT NULL,
        last_updated DATETIME NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
    )";

const CREATE_VOLUNTEERS: &str = "
    CREATE TABLE IF NOT EXISTS volunteers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        skill TEXT NOT NULL,
        availability TEXT NOT NULL,
        contact TEXT NOT NULL
    )";

const CREATE_SHELTERS: &str = "
    CREATE TABLE IF NOT EXISTS shelters (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        location TEXT NOT NULL,
        capacity INTEGER NOT NULL,
        occupied INTEGER NOT NULL
    )";

/// Columns added to `incidents` after its first release, with their types.
const INCIDENT_ADDED_COLUMNS: &[(&str, &str)] = &[("media_path", "TEXT")];

/// Seed rows for `inventory`: (item, quantity, category).
pub const SEED_INVENTORY: &[(&str, i64, &str)] = &[
    ("Bottled Water", 1200, "Food/Water"),
    ("Rice Bags", 500, "Food/Water"),
    ("First Aid Kits", 150, "Medical"),
    ("Blankets", 300, "Supplies"),
    ("Canned Food", 2000, "Food/Water"),
];

/// Seed rows for `volunteers`: (name, skill, availability, contact).
pub const SEED_VOLUNTEERS: &[(&str, &str, &str, &str)] = &[
    ("John Doe", "Medical", "Available", "555-0199"),
    ("Jane Smith", "Logistics", "Busy", "555-0188"),
    ("Alex Johnson", "Search & Rescue", "Available", "555-0177"),
];

/// Seed rows for `shelters`: (name, location, capacity, occupied).
pub const SEED_SHELTERS: &[(&str, &str, i64, i64)] = &[
    ("Relief Camp Alpha", "Downtown High School", 500, 320),
    ("Shelter Beta", "Unity Church", 200, 180),
    ("Rescue Hub Gamma", "Civic Center", 1000, 450),
];

/// Number of rows inserted per table by [`seed_if_empty`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub inventory: u64,
    pub volunteers: u64,
    pub shelters: u64,
}

impl SeedSummary {
    pub fn total(&self) -> u64 {
        self.inventory + self.volunteers + self.shelters
    }
}

/// Ensure the schema, migrate old incident tables, then seed empty tables.
pub async fn run_bootstrap(pool: &SqlitePool) -> Result<SeedSummary, sqlx::Error> {
    ensure_schema(pool).await?;
    migrate_incident_columns(pool).await?;
    let summary = seed_if_empty(pool).await?;

    tracing::info!(
        inventory = summary.inventory,
        volunteers = summary.volunteers,
        shelters = summary.shelters,
        "Bootstrap complete"
    );
    Ok(summary)
}

/// Create all four tables if they do not exist.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for ddl in [
        CREATE_INCIDENTS,
        CREATE_INVENTORY,
        CREATE_VOLUNTEERS,
        CREATE_SHELTERS,
    ] {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!("Schema ensured");
    Ok(())
}

/// Add any column an older `incidents` table is missing.
///
/// A "duplicate column" failure means another process added it between
/// our check and the `ALTER`; it is logged and ignored.
pub async fn migrate_incident_columns(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let existing: Vec<String> =
        sqlx::query_scalar("SELECT name FROM pragma_table_info('incidents')")
            .fetch_all(pool)
            .await?;

    for &(column, sql_type) in INCIDENT_ADDED_COLUMNS {
        if existing.iter().any(|c| c == column) {
            continue;
        }

        let alter = format!("ALTER TABLE incidents ADD COLUMN {column} {sql_type}");
        match sqlx::query(&alter).execute(pool).await {
            Ok(_) => tracing::info!(column, "Added column to incidents"),
            Err(err) if is_duplicate_column(&err) => {
                tracing::warn!(column, error = %err, "Column already present, skipping");
            }
            Err(err) => return Err(err),
        }
    }

    if description_required(pool).await? {
        tracing::warn!(
            "incidents.description is NOT NULL; absent descriptions will be stored as ''"
        );
    }
    Ok(())
}

/// Whether the existing `incidents.description` column is declared
/// `NOT NULL`, as in tables created before descriptions became optional.
pub async fn description_required(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let notnull: Option<i64> = sqlx::query_scalar(
        "SELECT \"notnull\" FROM pragma_table_info('incidents') WHERE name = 'description'",
    )
    .fetch_optional(pool)
    .await?;
    Ok(notnull == Some(1))
}

fn is_duplicate_column(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().contains("duplicate column"),
        _ => false,
    }
}

/// Insert the fixed seed rows into each of `inventory`, `volunteers` and
/// `shelters` that is currently empty.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<SeedSummary, sqlx::Error> {
    let mut summary = SeedSummary::default();

    if table_is_empty(pool, "inventory").await? {
        let mut tx = pool.begin().await?;
        for &(item, quantity, category) in SEED_INVENTORY {
            sqlx::query("INSERT INTO inventory (item, quantity, category) VALUES (?, ?, ?)")
                .bind(item)
                .bind(quantity)
                .bind(category)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        summary.inventory = SEED_INVENTORY.len() as u64;
    }

    if table_is_empty(pool, "volunteers").await? {
        let mut tx = pool.begin().await?;
        for &(name, skill, availability, contact) in SEED_VOLUNTEERS {
            sqlx::query(
                "INSERT INTO volunteers (name, skill, availability, contact) VALUES (?, ?, ?, ?)",
            )
            .bind(name)
            .bind(skill)
            .bind(availability)
            .bind(contact)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        summary.volunteers = SEED_VOLUNTEERS.len() as u64;
    }

    if table_is_empty(pool, "shelters").await? {
        let mut tx = pool.begin().await?;
        for &(name, location, capacity, occupied) in SEED_SHELTERS {
            sqlx::query(
                "INSERT INTO shelters (name, location, capacity, occupied) VALUES (?, ?, ?, ?)",
            )
            .bind(name)
            .bind(location)
            .bind(capacity)
            .bind(occupied)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        summary.shelters = SEED_SHELTERS.len() as u64;
    }

    Ok(summary)
}

async fn table_is_empty(pool: &SqlitePool, table: &'static str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    Ok(count == 0)
}
