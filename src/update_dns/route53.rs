use aws_config::BehaviorVersion;
use aws_sdk_route53::error::DisplayErrorContext;
use aws_sdk_route53::operation::list_resource_record_sets::builders::ListResourceRecordSetsFluentBuilder;
use aws_sdk_route53::types::{
    Change, ChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType,
};
use aws_sdk_route53::Client;
use log::debug;
use tokio::runtime::Runtime;

use crate::error::{Error, Result};
use crate::update_dns::api::{ChangeRequest, RecordSet, RecordStore, RecordType};

/// Route 53 over the AWS SDK, driven to completion one call at a time.
pub struct Route53 {
    client: Client,
    runtime: Runtime,
}

impl Route53 {
    /// Credentials and region come from the default AWS provider chain.
    pub fn from_env() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::provider)?;
        let sdk_config = runtime.block_on(aws_config::load_defaults(BehaviorVersion::latest()));
        Ok(Route53 {
            client: Client::new(&sdk_config),
            runtime,
        })
    }

    fn sdk_error(err: impl std::error::Error) -> Error {
        Error::provider(DisplayErrorContext(err).to_string())
    }
}

impl RecordStore for Route53 {
    fn describe(&self) -> String {
        match self.client.config().region() {
            Some(region) => format!("Route53[region={}]", region),
            None => "Route53".to_string(),
        }
    }

    fn list_record_sets(
        &self,
        zone: &str,
        start_name: &str,
        start_type: &RecordType,
    ) -> Result<Vec<RecordSet>> {
        let output = self
            .runtime
            .block_on(list_request(&self.client, zone, start_name, start_type).send())
            .map_err(Route53::sdk_error)?;

        Ok(output
            .resource_record_sets()
            .iter()
            .map(to_record_set)
            .collect())
    }

    fn upsert(&self, zone: &str, change: &ChangeRequest) -> Result<String> {
        let batch = to_change_batch(change)?;
        let output = self
            .runtime
            .block_on(
                self.client
                    .change_resource_record_sets()
                    .hosted_zone_id(zone)
                    .change_batch(batch)
                    .send(),
            )
            .map_err(Route53::sdk_error)?;
        let info = output
            .change_info()
            .ok_or_else(|| Error::provider("change response carried no change info"))?;
        debug!("Change {} is {}", info.id(), info.status().as_str());
        Ok(info.id().to_string())
    }
}

/// Only the first record set at or after the start key is ever inspected.
fn list_request(
    client: &Client,
    zone: &str,
    start_name: &str,
    start_type: &RecordType,
) -> ListResourceRecordSetsFluentBuilder {
    client
        .list_resource_record_sets()
        .hosted_zone_id(zone)
        .start_record_name(start_name)
        .start_record_type(to_rr_type(start_type))
        .max_items(1)
}

fn to_rr_type(record_type: &RecordType) -> RrType {
    match record_type {
        RecordType::A => RrType::A,
        RecordType::Other(other) => RrType::from(other.as_str()),
    }
}

fn from_rr_type(rr_type: &RrType) -> RecordType {
    match rr_type {
        RrType::A => RecordType::A,
        other => RecordType::Other(other.as_str().to_string()),
    }
}

fn to_record_set(set: &ResourceRecordSet) -> RecordSet {
    RecordSet {
        name: set.name().to_string(),
        record_type: from_rr_type(set.r#type()),
        values: set
            .resource_records()
            .iter()
            .map(|record| record.value().to_string())
            .collect(),
        ttl: set.ttl().and_then(|ttl| u32::try_from(ttl).ok()),
    }
}

fn to_change_batch(change: &ChangeRequest) -> Result<ChangeBatch> {
    let records = change
        .values
        .iter()
        .map(|value| ResourceRecord::builder().value(value).build())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Error::provider)?;

    let record_set = ResourceRecordSet::builder()
        .name(&change.name)
        .r#type(to_rr_type(&change.record_type))
        .ttl(i64::from(change.ttl))
        .set_resource_records(Some(records))
        .build()
        .map_err(Error::provider)?;

    let upsert = Change::builder()
        .action(ChangeAction::Upsert)
        .resource_record_set(record_set)
        .build()
        .map_err(Error::provider)?;

    ChangeBatch::builder()
        .changes(upsert)
        .set_comment(change.comment.clone())
        .build()
        .map_err(Error::provider)
}
