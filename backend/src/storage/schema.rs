//! Schema descriptors for the three ingestable tables.
//!
//! Each descriptor carries the table name, the exact ordered column list an
//! uploaded CSV must match, and the idempotent DDL used at startup. Uploads
//! are checked structurally against `columns` before any row is written.

/// The ordered schema of one ingestable table.
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub(crate) ddl: &'static str,
}

/// The full set of tables the service accepts uploads into.
pub const TABLES: [TableSchema; 3] = [
    TableSchema {
        name: "departments",
        columns: &["id", "department"],
        ddl: "CREATE TABLE IF NOT EXISTS departments (
                  id INTEGER PRIMARY KEY,
                  department TEXT NOT NULL)",
    },
    TableSchema {
        name: "jobs",
        columns: &["id", "job"],
        ddl: "CREATE TABLE IF NOT EXISTS jobs (
                  id INTEGER PRIMARY KEY,
                  job TEXT NOT NULL)",
    },
    TableSchema {
        name: "employees",
        columns: &["id", "name", "datetime", "department_id", "job_id"],
        // Foreign keys are declared but not enforced: PRAGMA foreign_keys
        // stays off, so a later replace of departments/jobs may leave
        // dangling references. Reporting joins drop such rows.
        ddl: "CREATE TABLE IF NOT EXISTS employees (
                  id INTEGER PRIMARY KEY,
                  name TEXT NOT NULL,
                  datetime TEXT NOT NULL,
                  department_id INTEGER,
                  job_id INTEGER,
                  FOREIGN KEY(department_id) REFERENCES departments(id),
                  FOREIGN KEY(job_id) REFERENCES jobs(id))",
    },
];

/// Resolves a table name against the allowed set.
pub fn lookup(name: &str) -> Option<&'static TableSchema> {
    TABLES.iter().find(|table| table.name == name)
}
