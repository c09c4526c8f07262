use crate::storage::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::api::ErrorDetail;
use common::model::report::{QuarterlyHires, ReportRows};
use log::error;

/// Pairs come from the inner joins, so departments or jobs without a 2021
/// hire never produce a row.
const QUERY: &str = "\
    SELECT d.department, j.job,
           SUM(CASE WHEN strftime('%m', e.datetime) IN ('01', '02', '03') THEN 1 ELSE 0 END) AS Q1,
           SUM(CASE WHEN strftime('%m', e.datetime) IN ('04', '05', '06') THEN 1 ELSE 0 END) AS Q2,
           SUM(CASE WHEN strftime('%m', e.datetime) IN ('07', '08', '09') THEN 1 ELSE 0 END) AS Q3,
           SUM(CASE WHEN strftime('%m', e.datetime) IN ('10', '11', '12') THEN 1 ELSE 0 END) AS Q4
    FROM employees e
    JOIN departments d ON e.department_id = d.id
    JOIN jobs j ON e.job_id = j.id
    WHERE strftime('%Y', e.datetime) = '2021'
    GROUP BY d.department, j.job
    ORDER BY d.department, j.job";

pub(crate) async fn process(store: web::Data<Store>) -> impl Responder {
    match hired_per_quarter(&store) {
        Ok(rows) => HttpResponse::Ok().json(ReportRows::from_rows(rows)),
        Err(e) => {
            error!("hired-per-quarter query failed: {e}");
            HttpResponse::InternalServerError().json(ErrorDetail {
                detail: format!("database error: {e}"),
            })
        }
    }
}

fn hired_per_quarter(store: &Store) -> Result<Vec<QuarterlyHires>, rusqlite::Error> {
    let conn = store.connect()?;
    let mut stmt = conn.prepare(QUERY)?;
    let rows = stmt.query_map([], |row| {
        Ok(QuarterlyHires {
            department: row.get(0)?,
            job: row.get(1)?,
            q1: row.get(2)?,
            q2: row.get(3)?,
            q3: row.get(4)?,
            q4: row.get(5)?,
        })
    })?;
    rows.collect()
}

#[cfg(test)]
mod tests {
    use crate::services;
    use crate::storage::{schema, Store};
    use actix_http::Request;
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::{test, web, App, Error};
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("test.sqlite"));
        store.init_schema().unwrap();
        (dir, store)
    }

    fn seed(store: &Store, table: &str, rows: &[&[&str]]) {
        let table = schema::lookup(table).unwrap();
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect();
        store.replace_rows(table, &rows).unwrap();
    }

    async fn test_app(
        store: &Store,
    ) -> impl Service<Request, Response = ServiceResponse, Error = Error> {
        test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .service(services::employees::configure_routes()),
        )
        .await
    }

    async fn get_report<S>(app: &S) -> Value
    where
        S: Service<Request, Response = ServiceResponse, Error = Error>,
    {
        let req = test::TestRequest::get()
            .uri("/employees/hired-per-quarter")
            .to_request();
        let resp = test::call_service(app, req).await;
        assert_eq!(resp.status(), 200);
        test::read_body_json(resp).await
    }

    #[actix_web::test]
    async fn buckets_2021_hires_into_quarters() {
        let (_dir, store) = temp_store();
        seed(&store, "departments", &[&["1", "Sales"]]);
        seed(&store, "jobs", &[&["1", "Engineer"]]);
        seed(
            &store,
            "employees",
            &[
                &["1", "Alice", "2021-06-15T12:00:00Z", "1", "1"],
                &["2", "Bob", "2021-09-20T14:00:00Z", "1", "1"],
                &["3", "Charlie", "2021-03-10T10:30:00Z", "1", "1"],
            ],
        );

        let app = test_app(&store).await;
        let body = get_report(&app).await;
        assert_eq!(
            body,
            json!([{
                "department": "Sales",
                "job": "Engineer",
                "Q1": 1,
                "Q2": 1,
                "Q3": 1,
                "Q4": 0
            }])
        );
    }

    #[actix_web::test]
    async fn orders_by_department_then_job() {
        let (_dir, store) = temp_store();
        seed(
            &store,
            "departments",
            &[&["1", "Sales"], &["2", "Accounting"]],
        );
        seed(&store, "jobs", &[&["1", "Engineer"], &["2", "Analyst"]]);
        seed(
            &store,
            "employees",
            &[
                &["1", "Alice", "2021-02-01T09:00:00Z", "1", "2"],
                &["2", "Bob", "2021-02-01T09:00:00Z", "2", "1"],
                &["3", "Charlie", "2021-02-01T09:00:00Z", "2", "2"],
            ],
        );

        let app = test_app(&store).await;
        let body = get_report(&app).await;
        let pairs: Vec<(String, String)> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|row| {
                (
                    row["department"].as_str().unwrap().to_string(),
                    row["job"].as_str().unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Accounting".to_string(), "Analyst".to_string()),
                ("Accounting".to_string(), "Engineer".to_string()),
                ("Sales".to_string(), "Analyst".to_string()),
            ]
        );
    }

    #[actix_web::test]
    async fn excludes_hires_outside_2021() {
        let (_dir, store) = temp_store();
        seed(&store, "departments", &[&["1", "Sales"]]);
        seed(&store, "jobs", &[&["1", "Engineer"]]);
        seed(
            &store,
            "employees",
            &[
                &["1", "Alice", "2020-06-15T12:00:00Z", "1", "1"],
                &["2", "Bob", "2022-01-05T08:00:00Z", "1", "1"],
            ],
        );

        let app = test_app(&store).await;
        let body = get_report(&app).await;
        assert_eq!(body, json!({"message": "no data"}));
    }

    #[actix_web::test]
    async fn empty_store_returns_no_data_message() {
        let (_dir, store) = temp_store();
        let app = test_app(&store).await;
        let body = get_report(&app).await;
        assert_eq!(body, json!({"message": "no data"}));
    }
}
