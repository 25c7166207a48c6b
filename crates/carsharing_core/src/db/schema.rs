//! Company table definition.
//!
//! # Invariants
//! - `ID` is assigned by SQLite, starts at 1 and is never reused (`AUTOINCREMENT`).
//! - `NAME` is required and unique; duplicates are rejected by the store.

use super::DbResult;
use rusqlite::Connection;

const COMPANY_SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the `COMPANY` table when absent. Safe to call on every startup.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(COMPANY_SCHEMA_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_schema;
    use rusqlite::Connection;

    #[test]
    fn ensure_schema_twice_keeps_existing_rows() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn.execute("INSERT INTO COMPANY (NAME) VALUES ('Hertz');", [])
            .unwrap();

        ensure_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM COMPANY;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
