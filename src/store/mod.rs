pub mod route53;

use async_trait::async_trait;
use aws_sdk_route53::types::{ChangeBatch, ResourceRecordSet, RrType};

use crate::error::SweepResult;

/// One entry from a zones-by-name listing. Zone names are fully
/// qualified, trailing dot included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneEntry {
    pub id: String,
    pub name: String,
}

/// Continuation token for record-set listings.
#[derive(Debug, Clone)]
pub struct PageToken {
    pub name: String,
    pub kind: RrType,
    pub identifier: Option<String>,
}

/// One page of record sets. `next` is `None` on the last page.
#[derive(Debug, Clone)]
pub struct RecordPage {
    pub sets: Vec<ResourceRecordSet>,
    pub next: Option<PageToken>,
}

/// A hosted-zone store: list zones by name, page through record
/// sets, apply a change batch.
#[async_trait]
pub trait RecordStore {
    /// List zones whose name sorts at or after `name`, in name order.
    async fn zones_starting_at(&self, name: &str) -> SweepResult<Vec<ZoneEntry>>;

    /// Fetch one page of record sets, starting at `start` (the first
    /// page when `None`).
    async fn record_page(
        &self,
        zone_id: &str,
        start: Option<PageToken>,
    ) -> SweepResult<RecordPage>;

    /// Submit a change batch. The service applies or rejects it as a
    /// single unit.
    async fn submit_change_batch(&self, zone_id: &str, batch: ChangeBatch) -> SweepResult<()>;
}
