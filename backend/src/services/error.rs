use actix_web::HttpResponse;
use serde_json::json;

/// Failure of a service operation, mapped onto the wire as a status code and
/// a `{"detail": ...}` body.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The addressed resource (or attachment) does not exist. 404.
    NotFound(String),
    /// The request conflicts with current state, e.g. a battery that is
    /// already assigned or a name already in use. 400.
    Conflict(String),
    /// The payload itself is unacceptable, e.g. an empty name. 400.
    Invalid(String),
    /// The database could not be reached or the query failed. 503.
    Database(String),
}

impl ServiceError {
    pub fn to_response(&self) -> HttpResponse {
        match self {
            ServiceError::NotFound(detail) => {
                HttpResponse::NotFound().json(json!({ "detail": detail }))
            }
            ServiceError::Conflict(detail) | ServiceError::Invalid(detail) => {
                HttpResponse::BadRequest().json(json!({ "detail": detail }))
            }
            ServiceError::Database(detail) => {
                log::error!("database failure: {}", detail);
                HttpResponse::ServiceUnavailable().json(json!({ "detail": detail }))
            }
        }
    }
}

impl From<rusqlite::Error> for ServiceError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(failure, _)
                if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                ServiceError::Conflict("Name is already in use".to_string())
            }
            _ => ServiceError::Database(err.to_string()),
        }
    }
}
