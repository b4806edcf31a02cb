use numerus_core::db::migrations::latest_version;
use numerus_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "numerals");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numerus.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "numerals");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
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
fn value_column_accepts_zero_through_max_value_only() {
    let conn = open_db_in_memory().unwrap();
    let insert = |uuid: &str, numeral: &str, value: i64| {
        conn.execute(
            "INSERT INTO numerals (uuid, numeral, value) VALUES (?1, ?2, ?3);",
            rusqlite::params![uuid, numeral, value],
        )
    };

    insert("zero", "NULLA", 0).unwrap();
    insert("max", "MMMCMXCIX", 3999).unwrap();
    assert!(insert("below", "I", -1).is_err());
    assert!(insert("above", "MMMM", 4000).is_err());

    let stored: i64 = conn
        .query_row("SELECT COUNT(*) FROM numerals;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(stored, 2);
}

#[test]
fn numerals_are_indexed_by_value() {
    let conn = open_db_in_memory().unwrap();
    let indexed_table: String = conn
        .query_row(
            "SELECT tbl_name FROM sqlite_master WHERE type = 'index' AND name = ?1;",
            ["idx_numerals_value"],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(indexed_table, "numerals");

    let columns: Vec<String> = conn
        .prepare("PRAGMA index_info('idx_numerals_value');")
        .unwrap()
        .query_map([], |row| row.get("name"))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(columns, vec!["value".to_string()]);
}

#[test]
fn timestamps_default_to_insert_time() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO numerals (uuid, numeral, value) VALUES ('x', 'X', 10);",
        [],
    )
    .unwrap();

    let (created_at, updated_at): (i64, i64) = conn
        .query_row(
            "SELECT created_at, updated_at FROM numerals WHERE uuid = 'x';",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert!(created_at > 0);
    assert_eq!(created_at, updated_at);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
