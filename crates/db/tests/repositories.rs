mod common;

use relief_core::incident::{STATUS_PENDING, STATUS_RESOLVED};
use relief_core::stats::VOLUNTEER_AVAILABLE;
use relief_db::models::incident::CreateIncident;
use relief_db::models::stats::DashboardStats;
use relief_db::repositories::incident_repo::RECENT_LIMIT;
use relief_db::repositories::{IncidentRepo, InventoryRepo, ShelterRepo, StatsRepo, VolunteerRepo};
use relief_db::DbPool;

fn new_incident(incident_type: &str, severity: &str) -> CreateIncident {
    CreateIncident {
        incident_type: incident_type.into(),
        severity: severity.into(),
        location: "Riverside".into(),
        description: None,
        media_path: None,
    }
}

async fn resolve(pool: &DbPool, id: i64) {
    sqlx::query("UPDATE incidents SET status = ? WHERE id = ?")
        .bind(STATUS_RESOLVED)
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_incident_defaults() {
    let (_dir, pool) = common::bootstrapped_pool().await;
    let before = chrono::Utc::now() - chrono::Duration::seconds(1);

    let mut input = new_incident("Flood", "critical");
    input.description = Some("Road washed out".into());
    input.media_path = Some("road.jpg".into());

    let created = IncidentRepo::create(&pool, &input).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.incident_type, "Flood");
    assert_eq!(created.status, STATUS_PENDING);
    assert_eq!(created.description.as_deref(), Some("Road washed out"));
    assert_eq!(created.media_path.as_deref(), Some("road.jpg"));
    assert!(created.timestamp >= before);

    let found = IncidentRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("incident should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.timestamp, created.timestamp);
}

#[tokio::test]
async fn test_ids_are_monotonic() {
    let (_dir, pool) = common::bootstrapped_pool().await;

    let first = IncidentRepo::create(&pool, &new_incident("Fire", "high")).await.unwrap();
    let second = IncidentRepo::create(&pool, &new_incident("Fire", "high")).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_find_missing_incident_returns_none() {
    let (_dir, pool) = common::bootstrapped_pool().await;
    assert!(IncidentRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_recent_is_newest_first_and_capped() {
    let (_dir, pool) = common::bootstrapped_pool().await;

    for i in 0..(RECENT_LIMIT + 5) {
        IncidentRepo::create(&pool, &new_incident(&format!("Report {i}"), "low"))
            .await
            .unwrap();
    }

    let recent = IncidentRepo::list_recent(&pool, RECENT_LIMIT).await.unwrap();
    assert_eq!(recent.len() as i64, RECENT_LIMIT);
    assert_eq!(IncidentRepo::count(&pool).await.unwrap(), RECENT_LIMIT + 5);

    for pair in recent.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
        assert!(pair[0].id > pair[1].id);
    }
    assert_eq!(recent[0].incident_type, format!("Report {}", RECENT_LIMIT + 4));
}

#[tokio::test]
async fn test_list_recent_orders_by_timestamp_not_id() {
    let (_dir, pool) = common::bootstrapped_pool().await;

    let old = IncidentRepo::create(&pool, &new_incident("Old", "low")).await.unwrap();
    let new = IncidentRepo::create(&pool, &new_incident("New", "low")).await.unwrap();

    // Backdate the newer row so timestamp order disagrees with id order.
    sqlx::query("UPDATE incidents SET timestamp = '2000-01-01 00:00:00.000' WHERE id = ?")
        .bind(new.id)
        .execute(&pool)
        .await
        .unwrap();

    let recent = IncidentRepo::list_recent(&pool, RECENT_LIMIT).await.unwrap();
    assert_eq!(recent[0].id, old.id);
    assert_eq!(recent[1].id, new.id);
}

#[tokio::test]
async fn test_list_recent_clamps_limit() {
    let (_dir, pool) = common::bootstrapped_pool().await;
    for _ in 0..3 {
        IncidentRepo::create(&pool, &new_incident("Quake", "high")).await.unwrap();
    }

    assert_eq!(IncidentRepo::list_recent(&pool, 0).await.unwrap().len(), 1);
    assert_eq!(IncidentRepo::list_recent(&pool, 10_000).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_count_by_status() {
    let (_dir, pool) = common::bootstrapped_pool().await;

    let a = IncidentRepo::create(&pool, &new_incident("Fire", "low")).await.unwrap();
    IncidentRepo::create(&pool, &new_incident("Fire", "low")).await.unwrap();
    resolve(&pool, a.id).await;

    assert_eq!(IncidentRepo::count_by_status(&pool, STATUS_PENDING).await.unwrap(), 1);
    assert_eq!(IncidentRepo::count_by_status(&pool, STATUS_RESOLVED).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Read-only tables
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_seeded_listings() {
    let (_dir, pool) = common::bootstrapped_pool().await;

    let inventory = InventoryRepo::list(&pool).await.unwrap();
    assert_eq!(inventory.len(), 5);
    assert_eq!(inventory[0].item, "Bottled Water");
    assert_eq!(inventory[0].quantity, 1200);
    assert_eq!(InventoryRepo::total_quantity(&pool).await.unwrap(), 4150);

    let volunteers = VolunteerRepo::list(&pool).await.unwrap();
    assert_eq!(volunteers.len(), 3);
    assert_eq!(
        VolunteerRepo::count_by_availability(&pool, VOLUNTEER_AVAILABLE)
            .await
            .unwrap(),
        2
    );

    let shelters = ShelterRepo::list(&pool).await.unwrap();
    assert_eq!(shelters.len(), 3);
    assert_eq!(shelters[2].name, "Rescue Hub Gamma");
    assert_eq!(shelters[2].capacity, 1000);
    assert_eq!(ShelterRepo::count(&pool).await.unwrap(), 3);
}

#[tokio::test]
async fn test_incident_serializes_type_key() {
    let (_dir, pool) = common::bootstrapped_pool().await;
    let created = IncidentRepo::create(&pool, &new_incident("Landslide", "high"))
        .await
        .unwrap();

    let json = serde_json::to_value(&created).unwrap();
    assert_eq!(json["type"], "Landslide");
    assert!(json["media_path"].is_null());
    assert!(json.get("incident_type").is_none());
}

// ---------------------------------------------------------------------------
// Dashboard statistics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_dashboard_on_fresh_database() {
    let (_dir, pool) = common::bootstrapped_pool().await;

    let stats = StatsRepo::dashboard(&pool).await.unwrap();
    assert_eq!(
        stats,
        DashboardStats {
            volunteers: 1202,
            camps: 3,
            resources: "4.1k+".into(),
            critical_alerts: 0,
            active_incidents: 0,
            resolved_24h: 0,
        }
    );
}

#[tokio::test]
async fn test_dashboard_counts_incidents() {
    let (_dir, pool) = common::bootstrapped_pool().await;

    IncidentRepo::create(&pool, &new_incident("Flood", "critical")).await.unwrap();
    IncidentRepo::create(&pool, &new_incident("Flood", "high")).await.unwrap();
    let resolved = IncidentRepo::create(&pool, &new_incident("Fire", "critical"))
        .await
        .unwrap();
    resolve(&pool, resolved.id).await;

    let stats = StatsRepo::dashboard(&pool).await.unwrap();
    assert_eq!(stats.active_incidents, 2);
    assert_eq!(stats.critical_alerts, 1, "resolved critical incidents do not count");
    assert_eq!(stats.resolved_24h, 1);
}

#[tokio::test]
async fn test_dashboard_small_inventory_is_plain() {
    let (_dir, pool) = common::bootstrapped_pool().await;

    sqlx::query("UPDATE inventory SET quantity = 0").execute(&pool).await.unwrap();
    sqlx::query("UPDATE inventory SET quantity = 999 WHERE id = 1")
        .execute(&pool)
        .await
        .unwrap();

    let stats = StatsRepo::dashboard(&pool).await.unwrap();
    assert_eq!(stats.resources, "999");
}

#[tokio::test]
async fn test_dashboard_on_empty_tables() {
    let (_dir, pool) = common::temp_pool().await;
    relief_db::bootstrap::ensure_schema(&pool).await.unwrap();

    let stats = StatsRepo::dashboard(&pool).await.unwrap();
    assert_eq!(stats.resources, "0");
    assert_eq!(stats.volunteers, 1200);
    assert_eq!(stats.camps, 0);
}
