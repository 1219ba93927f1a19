use aws_sdk_route53::types::ResourceRecordSet;
use log::debug;

use crate::error::SweepResult;
use crate::matcher::RecordMatcher;
use crate::store::RecordStore;

/// Collect every record set in a zone that the matcher selects.
///
/// Pages are fetched sequentially until the store reports the last
/// one; matches keep the listing's order. A page failure aborts the
/// whole scan, so a partial candidate set is never returned.
pub async fn scan_records<S>(
    store: &S,
    zone_id: &str,
    matcher: &RecordMatcher,
) -> SweepResult<Vec<ResourceRecordSet>>
where
    S: RecordStore + Sync,
{
    let mut matches = Vec::new();
    let mut token = None;
    let mut pages = 0usize;

    loop {
        let page = store.record_page(zone_id, token).await?;
        pages += 1;
        matches.extend(page.sets.into_iter().filter(|set| matcher.is_match(set)));

        match page.next {
            Some(next) => token = Some(next),
            None => break,
        }
    }

    debug!(
        "scanned {pages} page(s), {} matching record set(s)",
        matches.len()
    );
    Ok(matches)
}
