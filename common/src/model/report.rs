use serde::{Deserialize, Serialize};

/// One row of the hired-per-quarter report: a (department, job) pair with
/// its 2021 hires bucketed into calendar quarters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterlyHires {
    pub department: String,
    pub job: String,
    #[serde(rename = "Q1")]
    pub q1: i64,
    #[serde(rename = "Q2")]
    pub q2: i64,
    #[serde(rename = "Q3")]
    pub q3: i64,
    #[serde(rename = "Q4")]
    pub q4: i64,
}

/// One row of the above-average report: a department whose 2021 hire count
/// strictly exceeds the mean across hiring departments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentHires {
    pub id: i64,
    pub department: String,
    pub hired: i64,
}

/// Response envelope for the report endpoints.
///
/// Serializes as a bare JSON array when rows exist and as
/// `{"message": "no data"}` when the query matched nothing, so callers can
/// tell an empty store apart from a populated one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportRows<T> {
    Rows(Vec<T>),
    NoData { message: String },
}

impl<T> ReportRows<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            ReportRows::NoData {
                message: "no data".to_string(),
            }
        } else {
            ReportRows::Rows(rows)
        }
    }
}
