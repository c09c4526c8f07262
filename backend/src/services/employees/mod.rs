//! Employee-level reporting.
//!
//! The provided route is:
//! - `GET /employees/hired-per-quarter`: 2021 hires per (department, job)
//!   pair, bucketed into calendar quarters.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod hired_per_quarter;

const API_PATH: &str = "/employees";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/hired-per-quarter", get().to(hired_per_quarter::process))
}
