//! CSV ingestion into the hiring tables.
//!
//! This module provides the upload endpoint for the three tables the service
//! knows about (departments, jobs, employees). An upload carries a CSV file
//! as a multipart `file` field; the file is validated against the target
//! table's schema descriptor and, on success, replaces the table's entire
//! contents in one transaction.
//!
//! The provided route is:
//! - `POST /upload/{table}`: `table` must be one of the known table names.
//!   The CSV header must exactly equal the table's expected column list, in
//!   order, and the file must contain at least one data row. Validation
//!   failures return 400 with a `detail` message; database failures return
//!   500. Success returns `{"message": ...}` naming the table.

use actix_web::web::{post, scope};
use actix_web::Scope;

mod upload;

const API_PATH: &str = "/upload";

/// Configures and returns the Actix scope for the upload route.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{table}", post().to(upload::process))
}
