//! Department-level reporting.
//!
//! The provided route is:
//! - `GET /departments/above-average`: departments whose 2021 hire count
//!   strictly exceeds the mean across departments with at least one hire.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod above_average;

const API_PATH: &str = "/departments";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/above-average", get().to(above_average::process))
}
