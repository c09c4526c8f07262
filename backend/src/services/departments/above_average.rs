use crate::storage::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::api::ErrorDetail;
use common::model::report::{DepartmentHires, ReportRows};
use log::error;

/// The mean is taken over departments with at least one 2021 hire, so a
/// department with zero hires neither appears nor drags the average down.
/// Equal counts are ordered by department id ascending.
const QUERY: &str = "\
    WITH hired_counts AS (
        SELECT department_id, COUNT(*) AS hired
        FROM employees
        WHERE strftime('%Y', datetime) = '2021'
        GROUP BY department_id),
    avg_hired AS (
        SELECT AVG(hired) AS avg_hiring FROM hired_counts)
    SELECT d.id, d.department, hc.hired
    FROM hired_counts hc
    JOIN departments d ON hc.department_id = d.id
    WHERE hc.hired > (SELECT avg_hiring FROM avg_hired)
    ORDER BY hc.hired DESC, d.id ASC";

pub(crate) async fn process(store: web::Data<Store>) -> impl Responder {
    match above_average(&store) {
        Ok(rows) => HttpResponse::Ok().json(ReportRows::from_rows(rows)),
        Err(e) => {
            error!("above-average query failed: {e}");
            HttpResponse::InternalServerError().json(ErrorDetail {
                detail: format!("database error: {e}"),
            })
        }
    }
}

fn above_average(store: &Store) -> Result<Vec<DepartmentHires>, rusqlite::Error> {
    let conn = store.connect()?;
    let mut stmt = conn.prepare(QUERY)?;
    let rows = stmt.query_map([], |row| {
        Ok(DepartmentHires {
            id: row.get(0)?,
            department: row.get(1)?,
            hired: row.get(2)?,
        })
    })?;
    rows.collect()
}
