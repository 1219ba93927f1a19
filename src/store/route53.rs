use async_trait::async_trait;
use aws_sdk_route53::Client;
use aws_sdk_route53::error::{DisplayErrorContext, SdkError};
use aws_sdk_route53::types::ChangeBatch;

use crate::error::{SweepError, SweepResult};
use crate::store::{PageToken, RecordPage, RecordStore, ZoneEntry};

/// Route53-backed record store.
///
/// Wraps an explicitly constructed SDK client so callers decide how
/// credentials and region are sourced.
pub struct Route53Store {
    client: Client,
}

impl Route53Store {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a store from the default AWS config chain (environment,
    /// shared config files, instance metadata).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl RecordStore for Route53Store {
    async fn zones_starting_at(&self, name: &str) -> SweepResult<Vec<ZoneEntry>> {
        let out = self
            .client
            .list_hosted_zones_by_name()
            .dns_name(name)
            .send()
            .await
            .map_err(transport)?;

        Ok(out
            .hosted_zones
            .into_iter()
            .map(|zone| ZoneEntry {
                id: zone.id,
                name: zone.name,
            })
            .collect())
    }

    async fn record_page(
        &self,
        zone_id: &str,
        start: Option<PageToken>,
    ) -> SweepResult<RecordPage> {
        let mut request = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(zone_id);

        if let Some(token) = start {
            request = request
                .start_record_name(token.name)
                .start_record_type(token.kind)
                .set_start_record_identifier(token.identifier);
        }

        let out = request.send().await.map_err(transport)?;

        let next = if out.is_truncated {
            match (out.next_record_name, out.next_record_type) {
                (Some(name), Some(kind)) => Some(PageToken {
                    name,
                    kind,
                    identifier: out.next_record_identifier,
                }),
                _ => {
                    return Err(SweepError::Transport(
                        "truncated record listing without continuation fields".into(),
                    ));
                }
            }
        } else {
            None
        };

        Ok(RecordPage {
            sets: out.resource_record_sets,
            next,
        })
    }

    async fn submit_change_batch(&self, zone_id: &str, batch: ChangeBatch) -> SweepResult<()> {
        self.client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|err| {
                let rejected = matches!(
                    err.as_service_error(),
                    Some(e) if e.is_invalid_change_batch() || e.is_prior_request_not_complete()
                );
                if rejected {
                    SweepError::Conflict(DisplayErrorContext(err).to_string())
                } else {
                    transport(err)
                }
            })?;

        Ok(())
    }
}

fn transport<E>(err: SdkError<E>) -> SweepError
where
    E: std::error::Error + Send + Sync + 'static,
{
    SweepError::Transport(DisplayErrorContext(err).to_string())
}
