//! Client-side state synchronization: the error taxonomy shared by every
//! request site, the fetch state machine backing the detail views, and the
//! coordinator that keeps a device's battery collection consistent with the
//! backend across attach/detach mutations.

pub mod coordinator;

use std::fmt;

/// Outcome taxonomy for a failed backend request.
///
/// Every failure is converted into view state at the request site; none
/// propagate to a global handler, and nothing is retried automatically.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response (transport failure).
    /// Retrying may help.
    Network(String),
    /// The backend answered with an unexpected status. Carries the status code
    /// and the response detail text.
    Server(u16, String),
    /// The resource no longer exists on the backend. Cached references to it
    /// must be invalidated; the safe fallback is the list view.
    NotFound,
    /// The backend rejected the payload (empty or duplicate name, attach
    /// conflict). Recoverable: keep the form open and show the detail.
    Validation(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "sin respuesta del servidor: {}", msg),
            ApiError::Server(status, detail) => write!(f, "HTTP {}: {}", status, detail),
            ApiError::NotFound => write!(f, "recurso no encontrado"),
            ApiError::Validation(detail) => write!(f, "{}", detail),
        }
    }
}

/// Fetch state of a detail view over one resource.
///
/// `NotFound` and `Error` are deliberately distinct terminal states: an error
/// means a retry might help, while not-found means the resource is gone and
/// the viewer should fall back to the list.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteResource<T> {
    /// The initial `get(id)` has been issued and has not resolved yet.
    Loading,
    /// The resource was fetched; the view owns this copy until its next fetch.
    Loaded(T),
    /// The backend reported the id as absent.
    NotFound,
    /// The fetch failed (network or server fault). Carries the detail text.
    Error(String),
}

impl<T> RemoteResource<T> {
    /// Transition out of `Loading` from a `get(id)` result, where `Ok(None)`
    /// is the backend's distinct missing-resource outcome.
    pub fn from_fetch(result: Result<Option<T>, ApiError>) -> Self {
        match result {
            Ok(Some(value)) => RemoteResource::Loaded(value),
            Ok(None) => RemoteResource::NotFound,
            Err(err) => RemoteResource::Error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_resolving_to_a_resource_loads_it() {
        let state = RemoteResource::from_fetch(Ok(Some(7)));
        assert_eq!(state, RemoteResource::Loaded(7));
    }

    #[test]
    fn missing_resource_is_not_an_error() {
        let state = RemoteResource::<i32>::from_fetch(Ok(None));
        assert_eq!(state, RemoteResource::NotFound);
    }

    #[test]
    fn failed_fetch_keeps_the_detail_text() {
        let err = ApiError::Server(503, "mantenimiento".into());
        let state = RemoteResource::<i32>::from_fetch(Err(err));
        assert_eq!(state, RemoteResource::Error("HTTP 503: mantenimiento".into()));
    }
}
