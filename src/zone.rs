use log::debug;

use crate::error::{SweepError, SweepResult};
use crate::store::RecordStore;

/// Ensure a zone name is fully qualified (trailing dot), the form
/// the hosting API uses for zone names.
#[must_use]
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Resolve a zone name to its identifier.
///
/// The zone listing is sorted starting at `name`, so it can contain
/// entries that merely share a prefix with, or sort after, the
/// target. Only an exact name match resolves.
pub async fn resolve_zone<S>(store: &S, name: &str) -> SweepResult<String>
where
    S: RecordStore + Sync,
{
    if name.is_empty() {
        return Err(SweepError::ZoneNotFound(name.to_string()));
    }

    let name = fqdn(name);
    let zones = store.zones_starting_at(&name).await?;

    let id = zones
        .into_iter()
        .find(|zone| zone.name == name)
        .map(|zone| zone.id)
        .ok_or_else(|| SweepError::ZoneNotFound(name))?;

    debug!("zone resolved to {id}");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fqdn_appends_missing_dot() {
        assert_eq!(fqdn("example.com"), "example.com.");
    }

    #[test]
    fn fqdn_keeps_existing_dot() {
        assert_eq!(fqdn("example.com."), "example.com.");
    }
}
