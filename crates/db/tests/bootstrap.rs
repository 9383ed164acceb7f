use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema and seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    storewatch_db::health_check(&pool).await.unwrap();

    // Lookup table exists and has the three seeded statuses.
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM report_statuses")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 3);

    // Entity tables exist and start empty.
    for table in ["locations", "business_hours", "status_observations", "reports", "report_rows"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}
