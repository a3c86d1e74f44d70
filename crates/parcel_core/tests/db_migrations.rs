use parcel_core::db::migrations::{apply_migrations, latest_version};
use parcel_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_sqlite_object_exists(&conn, "table", "parcel");
    assert_sqlite_object_exists(&conn, "index", "idx_parcel_client");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracker.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_sqlite_object_exists(&conn_second, "table", "parcel");
}

#[test]
fn apply_migrations_on_current_schema_is_a_noop() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO parcel (client, status, address, created_at)
         VALUES (1, 'registered', 'kept', '2024-01-01T00:00:00Z');",
        [],
    )
    .unwrap();

    assert_eq!(apply_migrations(&mut conn).unwrap(), 0);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM parcel;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_directory_path_returns_sqlite_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = open_db(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        DbError::Open { mode: "file", .. } | DbError::Statement(_)
    ));
    assert!(err.sqlite_error().is_some());
}

#[test]
fn failing_migration_rolls_back_and_names_the_step() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE VIEW parcel AS SELECT 1 AS client;")
        .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    match &err {
        DbError::Migration { version, name, .. } => {
            assert_eq!(*version, 1);
            assert_eq!(*name, "parcel_table");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("migration 1"));
    assert_eq!(schema_version(&conn), 0);
}

#[test]
fn fresh_connection_applies_every_migration() {
    let mut conn = Connection::open_in_memory().unwrap();

    let applied = apply_migrations(&mut conn).unwrap();
    assert_eq!(applied, latest_version() as usize);
    assert_eq!(schema_version(&conn), latest_version());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_sqlite_object_exists(conn: &Connection, kind: &str, name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = ?1 AND name = ?2
            );",
            [kind, name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "{kind} {name} does not exist");
}
