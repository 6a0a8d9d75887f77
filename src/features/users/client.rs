//! Client wrapper for the user directory endpoints. Endpoint selection is
//! delegated to the shared listing machinery; this module only knows the
//! paths and the record shape.

use crate::app_lib::{AppError, get_json};
use crate::features::listing::{
    endpoint::ListEndpoints, envelope::RecordEnvelope, state::ListQuery,
};
use crate::features::users::types::UserRecord;

const ENDPOINTS: ListEndpoints = ListEndpoints {
    list: "/admin/getusers",
    search: "/admin/searchuser",
};

/// Fetches one page of users, via the search endpoint when a term is
/// committed.
pub async fn fetch_users(
    token: Option<String>,
    query: ListQuery,
) -> Result<Vec<UserRecord>, AppError> {
    let call = ENDPOINTS.call(&query);
    let envelope: RecordEnvelope<UserRecord> =
        get_json(&call.path, token.as_deref(), &call.params).await?;

    let mut records = envelope.into_records();
    // Records without an id cannot be keyed or removed.
    records.retain(|record| !record.id.is_empty());
    Ok(records)
}
