use relief_db::DbPool;
use tempfile::TempDir;

/// Open a pool on a fresh SQLite file inside a temporary directory.
///
/// The directory is returned so it outlives the pool.
pub async fn temp_pool() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}", dir.path().join("relief.db").display());
    let pool = relief_db::create_pool(&url).await.expect("open sqlite pool");
    (dir, pool)
}

/// Same as [`temp_pool`] with the full bootstrap already applied.
pub async fn bootstrapped_pool() -> (TempDir, DbPool) {
    let (dir, pool) = temp_pool().await;
    relief_db::run_bootstrap(&pool).await.expect("bootstrap");
    (dir, pool)
}
