use crate::storage::schema::{self, TableSchema};
use crate::storage::Store;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::model::api::{ErrorDetail, UploadAck};
use futures_util::StreamExt;
use log::warn;

/// Failure classes of an upload, checked in this order (first hit wins).
enum UploadError {
    InvalidTable(String),
    Malformed(String),
    EmptyFile,
    SchemaMismatch(&'static str),
    Store(rusqlite::Error),
}

impl UploadError {
    fn detail(&self) -> String {
        match self {
            UploadError::InvalidTable(name) => format!("invalid table: {name}"),
            UploadError::Malformed(reason) => format!("malformed CSV file: {reason}"),
            UploadError::EmptyFile => "the CSV file has no data rows".to_string(),
            UploadError::SchemaMismatch(table) => {
                format!("file columns do not match table {table}")
            }
            UploadError::Store(e) => format!("database error: {e}"),
        }
    }

    fn into_response(self) -> HttpResponse {
        let detail = self.detail();
        match self {
            UploadError::Store(_) => {
                HttpResponse::InternalServerError().json(ErrorDetail { detail })
            }
            _ => HttpResponse::BadRequest().json(ErrorDetail { detail }),
        }
    }
}

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
pub(crate) async fn process(
    store: web::Data<Store>,
    table: web::Path<String>,
    payload: Multipart,
) -> impl Responder {
    match upload_table(&store, &table, payload).await {
        Ok(message) => HttpResponse::Ok().json(UploadAck { message }),
        Err(err) => {
            warn!("upload to {} rejected: {}", table, err.detail());
            err.into_response()
        }
    }
}

/// Validates the uploaded CSV against the target table's schema descriptor
/// and replaces the table's contents with the file's rows, in file order.
async fn upload_table(
    store: &Store,
    table: &str,
    payload: Multipart,
) -> Result<String, UploadError> {
    let table: &TableSchema =
        schema::lookup(table).ok_or_else(|| UploadError::InvalidTable(table.to_string()))?;

    let bytes = read_file_field(payload).await?;
    let text = String::from_utf8(bytes)
        .map_err(|_| UploadError::Malformed("file is not valid UTF-8".to_string()))?;

    let (headers, rows) = parse_csv(&text)?;
    if rows.is_empty() {
        return Err(UploadError::EmptyFile);
    }
    if headers != table.columns {
        return Err(UploadError::SchemaMismatch(table.name));
    }

    store.replace_rows(table, &rows).map_err(UploadError::Store)?;
    Ok(format!("data loaded into table {}", table.name))
}

/// Collects the bytes of the multipart field named `file`. Other fields are
/// drained and ignored.
async fn read_file_field(mut payload: Multipart) -> Result<Vec<u8>, UploadError> {
    let mut file: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| UploadError::Malformed(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| UploadError::Malformed(e.to_string()))?;
            bytes.extend_from_slice(&chunk);
        }

        if name.as_deref() == Some("file") && file.is_none() {
            file = Some(bytes);
        }
    }

    file.ok_or_else(|| UploadError::Malformed("missing file field".to_string()))
}

/// Parses CSV text into its header row and data rows. Column names are
/// compared verbatim later, so no normalization happens here.
fn parse_csv(text: &str) -> Result<(Vec<String>, Vec<Vec<String>>), UploadError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| UploadError::Malformed(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| UploadError::Malformed(e.to_string()))?;
        rows.push(record.iter().map(|v| v.to_string()).collect());
    }

    Ok((headers, rows))
}
