//! SQLite persistence layer.
//!
//! RULE: Only the store modules talk to the database.
//! Repository callers use store methods — they never execute SQL
//! directly.

use crate::error::ArcadeResult;
use rusqlite::Connection;

mod arcade;
mod leaderboard;
mod machine;
mod region;

pub struct ArcadeStore {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for file
}

impl ArcadeStore {
    pub fn open(path: &str) -> ArcadeResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (shared-memory and :memory: ignore it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> ArcadeResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn, path: None })
    }

    /// Path of the backing file, None for :memory:.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Apply the schema, then the one historical column patch: machines
    /// created before token pricing lack a `token_cost` column, which is
    /// added in place with a default of 0.
    pub fn migrate(&self) -> ArcadeResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_schema.sql"))?;

        let mut stmt = self.conn.prepare("PRAGMA table_info(machines)")?;
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<Vec<_>, _>>()?;
        if !columns.iter().any(|c| c == "token_cost") {
            self.conn.execute_batch(
                "ALTER TABLE machines ADD COLUMN token_cost REAL NOT NULL DEFAULT 0;",
            )?;
        }
        Ok(())
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}
