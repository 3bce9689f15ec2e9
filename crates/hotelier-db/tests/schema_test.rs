//! Integration tests for schema initialization using in-memory SurrealDB.

use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

#[tokio::test]
async fn schema_migration_applies_successfully() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    hotelier_db::run_migrations(&db).await.unwrap();

    let mut result = db.query("INFO FOR DB").await.unwrap();
    let info: Option<surrealdb_types::Value> = result.take(0).unwrap();
    let info = info.expect("INFO FOR DB should return a value");
    let info_str = format!("{:?}", info);

    for table in [
        "hotel",
        "hotel_user_scope",
        "room",
        "guest",
        "booking",
        "booking_recommendation",
        "_migration",
    ] {
        assert!(info_str.contains(table), "missing {table} table");
    }
}

#[tokio::test]
async fn migration_is_idempotent() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    hotelier_db::run_migrations(&db).await.unwrap();
    hotelier_db::run_migrations(&db).await.unwrap();

    let mut result = db.query("SELECT * FROM _migration").await.unwrap();
    let records: Vec<surrealdb_types::Value> = result.take(0).unwrap();
    assert_eq!(records.len(), 1, "expected exactly one migration record");
}

#[tokio::test]
async fn unique_index_prevents_duplicate_hotel_codes() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    hotelier_db::run_migrations(&db).await.unwrap();

    db.query(
        "CREATE hotel SET \
         code = 'LIS-01', name = 'Alfama House', \
         city = 'Lisbon', country = 'PT', \
         address_line = 'Rua 1'",
    )
    .await
    .unwrap()
    .check()
    .unwrap();

    let result = db
        .query(
            "CREATE hotel SET \
             code = 'LIS-01', name = 'Other', \
             city = 'Lisbon', country = 'PT', \
             address_line = 'Rua 2'",
        )
        .await
        .unwrap()
        .check();

    assert!(result.is_err(), "duplicate hotel code should be rejected");
}

#[tokio::test]
async fn booking_status_assertion_rejects_unknown_values() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    hotelier_db::run_migrations(&db).await.unwrap();

    let result = db
        .query(
            "CREATE booking SET \
             hotel_id = 'h', guest_id = 'g', room_id = 'r', \
             check_in_date = '2026-03-01', check_out_date = '2026-03-03', \
             status = 'ARCHIVED', total_amount = '10.00', \
             prepayment_amount = '0.00', payment_status = 'UNPAID'",
        )
        .await
        .unwrap()
        .check();

    assert!(result.is_err(), "unknown booking status should be rejected");
}
