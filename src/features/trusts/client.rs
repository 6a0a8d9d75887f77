//! Client wrapper for the trust directory endpoints.

use crate::app_lib::{AppError, get_json};
use crate::features::listing::{
    endpoint::ListEndpoints, envelope::RecordEnvelope, state::ListQuery,
};
use crate::features::trusts::types::TrustRecord;

const ENDPOINTS: ListEndpoints = ListEndpoints {
    list: "/admin/gettrusts",
    search: "/admin/searchtrust",
};

/// Fetches one page of trusts, via the search endpoint when a term is
/// committed.
pub async fn fetch_trusts(
    token: Option<String>,
    query: ListQuery,
) -> Result<Vec<TrustRecord>, AppError> {
    let call = ENDPOINTS.call(&query);
    let envelope: RecordEnvelope<TrustRecord> =
        get_json(&call.path, token.as_deref(), &call.params).await?;

    let mut records = envelope.into_records();
    // Records without an id cannot be keyed or removed.
    records.retain(|record| !record.id.is_empty());
    Ok(records)
}
