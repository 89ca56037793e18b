//! API services, one module per resource kind plus the shared attach path.
//!
//! Each endpoint lives in its own file with a `process` handler delegating to
//! a plain database function; the resource `mod.rs` wires the handlers into an
//! Actix `Scope` under `/api/devices` or `/api/batteries`.

pub mod attach;
pub mod batteries;
pub mod devices;
pub mod error;

use error::ServiceError;

/// Trims a submitted name and rejects empty ones.
pub(crate) fn require_name(name: &str) -> Result<&str, ServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServiceError::Invalid("Name must not be empty".to_string()));
    }
    Ok(name)
}
