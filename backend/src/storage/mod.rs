//! SQLite access for the hiring tables.
//!
//! `Store` is a cheap, cloneable handle holding the database path. Every
//! operation opens its own connection and drops it on return, so there is no
//! shared connection state between requests. The schema is created once at
//! startup via `init_schema`; uploads go through `replace_rows`, which swaps
//! a table's entire contents inside a single transaction.

pub mod schema;

use rusqlite::{params_from_iter, Connection};
use schema::TableSchema;
use std::path::PathBuf;

/// Handle to the SQLite database backing the service.
#[derive(Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    /// Opens a fresh connection. Callers hold it for one request at most.
    pub fn connect(&self) -> Result<Connection, rusqlite::Error> {
        Connection::open(&self.path)
    }

    /// Creates the three tables if absent. Safe to call on every startup;
    /// existing data is never touched.
    pub fn init_schema(&self) -> Result<(), rusqlite::Error> {
        let conn = self.connect()?;
        for table in &schema::TABLES {
            conn.execute(table.ddl, [])?;
        }
        Ok(())
    }

    /// Replaces the table's entire contents with `rows`, in order, inside
    /// one transaction. On any failure the transaction rolls back and the
    /// previous contents stay intact.
    pub fn replace_rows(
        &self,
        table: &TableSchema,
        rows: &[Vec<String>],
    ) -> Result<(), rusqlite::Error> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        tx.execute(&format!("DELETE FROM {}", table.name), [])?;

        let placeholders = (1..=table.columns.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let insert = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table.name,
            table.columns.join(", "),
            placeholders
        );
        {
            let mut stmt = tx.prepare(&insert)?;
            for row in rows {
                stmt.execute(params_from_iter(row.iter()))?;
            }
        }

        tx.commit()
    }
}
