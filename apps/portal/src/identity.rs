//! Identity Resolver: maps a mobile number to an external person id.

use tracing::{debug, info, warn};

use crate::errors::LookupError;
use crate::hr_client::{Endpoints, HrApi, ODataFilter};
use crate::models::employee::PersonIdentity;
use crate::models::odata::{ODataCollection, PhoneRecord};

/// HR API phone-type code for mobile numbers.
pub const MOBILE_PHONE_TYPE: &str = "10605";

/// Looks up `mobile` in the phone records. The first match wins.
pub async fn resolve_identity(
    hr: &dyn HrApi,
    endpoints: &Endpoints,
    mobile: &str,
) -> Result<PersonIdentity, LookupError> {
    let filter = ODataFilter::eq("phoneNumber", mobile).and_eq("phoneType", MOBILE_PHONE_TYPE);

    let response = hr.get(&endpoints.phone, &filter).await.map_err(|e| {
        warn!(error = %e, "Phone lookup request failed");
        LookupError::Upstream
    })?;

    if !response.is_ok() {
        warn!(status = response.status, "Phone lookup returned non-200");
        return Err(LookupError::Upstream);
    }

    let collection: ODataCollection<PhoneRecord> = response.json().map_err(|e| {
        warn!(error = %e, "Phone lookup payload could not be decoded");
        LookupError::Upstream
    })?;

    let results = collection.into_results();
    debug!(matches = results.len(), "Phone lookup completed");

    let first = results.into_iter().next().ok_or(LookupError::NotFound)?;
    let person_id_external = first.person_id_external.ok_or_else(|| {
        warn!("First phone record has no personIdExternal");
        LookupError::Upstream
    })?;

    info!(person_id = %person_id_external, "Identity resolved");
    Ok(PersonIdentity { person_id_external })
}
