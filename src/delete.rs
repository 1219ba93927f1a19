use aws_sdk_route53::types::{Change, ChangeAction, ChangeBatch, ResourceRecordSet};
use log::debug;

use crate::error::{SweepError, SweepResult};
use crate::store::RecordStore;

/// Delete every candidate record set through one change batch.
///
/// The batch carries one delete action per candidate, in candidate
/// order, and is submitted exactly once; the service applies or
/// rejects it as a unit. An empty candidate set submits nothing.
pub async fn delete_records<S>(
    store: &S,
    zone_id: &str,
    sets: Vec<ResourceRecordSet>,
) -> SweepResult<()>
where
    S: RecordStore + Sync,
{
    if sets.is_empty() {
        return Ok(());
    }

    let count = sets.len();
    let mut changes = Vec::with_capacity(count);
    for set in sets {
        let change = Change::builder()
            .action(ChangeAction::Delete)
            .resource_record_set(set)
            .build()
            .map_err(|err| SweepError::Conflict(err.to_string()))?;
        changes.push(change);
    }

    let batch = ChangeBatch::builder()
        .set_changes(Some(changes))
        .build()
        .map_err(|err| SweepError::Conflict(err.to_string()))?;

    debug!("submitting change batch with {count} delete action(s)");
    store.submit_change_batch(zone_id, batch).await
}
