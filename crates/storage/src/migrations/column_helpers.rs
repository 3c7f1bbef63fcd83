use rusqlite::{Connection, OptionalExtension, params};

pub fn table_exists(conn: &Connection, table: &str) -> Result<bool, rusqlite::Error> {
    object_exists(conn, "table", table)
}

pub fn index_exists(conn: &Connection, index: &str) -> Result<bool, rusqlite::Error> {
    object_exists(conn, "index", index)
}

pub fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool, rusqlite::Error> {
    let sql = format!("PRAGMA table_info({table})");
    let mut stmt = conn.prepare(&sql)?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn object_exists(conn: &Connection, kind: &str, name: &str) -> Result<bool, rusqlite::Error> {
    conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = ?1 AND name = ?2",
        params![kind, name],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
}
