//! Axum route handlers for the self-service pages.
//!
//! Upstream failures never surface as error statuses: every lookup and fetch
//! outcome is a rendered page.

use axum::{extract::State, response::Html, Form};

use crate::errors::AppError;
use crate::identity::resolve_identity;
use crate::models::employee::{PhoneLookupQuery, RecordQuery};
use crate::records::{fetch_record, RecordCategory};
use crate::state::AppState;

/// GET /
pub async fn handle_show_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.views.lookup_form(None)
}

/// POST /
pub async fn handle_lookup(
    State(state): State<AppState>,
    Form(query): Form<PhoneLookupQuery>,
) -> Result<Html<String>, AppError> {
    match resolve_identity(state.hr.as_ref(), &state.endpoints, &query.mobile).await {
        Ok(identity) => state.views.menu_page(&identity),
        Err(e) => state.views.lookup_form(Some(&e.to_string())),
    }
}

/// GET /personal/:person_id, /job/:person_id, /comp/:person_id
pub async fn handle_record(
    state: AppState,
    category: RecordCategory,
    person_id: String,
) -> Result<Html<String>, AppError> {
    let query = RecordQuery {
        person_id_external: person_id,
        category,
    };
    let result = fetch_record(state.hr.as_ref(), &state.endpoints, &query).await;
    state.views.record_page(&result)
}
