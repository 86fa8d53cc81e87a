use std::sync::Arc;

use crate::hr_client::{Endpoints, HrApi};
use crate::views::Views;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    /// HR API client. Default: `HttpHrClient`; tests swap in a stub.
    pub hr: Arc<dyn HrApi>,
    pub endpoints: Arc<Endpoints>,
    pub views: Arc<Views>,
}
