use std::fmt;

use chrono::{SecondsFormat, Utc};
use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::update_dns::api::{ChangeRequest, RecordStore, RecordType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Lookup,
    Update,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lookup => f.write_str("Failed to get registered IP"),
            Stage::Update => f.write_str("Record update failed"),
        }
    }
}

#[derive(Debug)]
pub(crate) enum ReconcileOutcome {
    Unchanged,
    Updated { change_id: String },
    Failed { stage: Stage, error: Error },
}

/// Current first value of the `A` record named `record_name`, if there is one.
///
/// The provider answers with whatever sorts at or after the requested name,
/// so anything but an exact name and type match counts as no record.
pub(crate) fn lookup(
    store: &dyn RecordStore,
    zone: &str,
    record_name: &str,
) -> Result<Option<String>> {
    let sets = store.list_record_sets(zone, record_name, &RecordType::A)?;
    let first = match sets.into_iter().next() {
        Some(first) => first,
        None => return Ok(None),
    };
    if first.name != record_name || first.record_type != RecordType::A {
        debug!(
            "Next record is {} {}, not {}; treating as absent",
            first.name, first.record_type, record_name
        );
        return Ok(None);
    }
    debug!(
        "Registered {} {} ttl={:?} values={:?}",
        first.name, first.record_type, first.ttl, first.values
    );
    Ok(first.values.into_iter().next())
}

/// Points the configured record at `current_address`, writing only if the
/// published value differs.
pub(crate) fn reconcile(
    store: &dyn RecordStore,
    config: &Config,
    current_address: &str,
) -> ReconcileOutcome {
    let registered = match lookup(store, &config.hosted_zone, &config.record_name) {
        Ok(registered) => registered,
        Err(error) => {
            return ReconcileOutcome::Failed {
                stage: Stage::Lookup,
                error,
            }
        }
    };

    if registered.as_deref() == Some(current_address) {
        return ReconcileOutcome::Unchanged;
    }

    let change = ChangeRequest::upsert_a(config, current_address, timestamp_comment());
    match store.upsert(&config.hosted_zone, &change) {
        Ok(change_id) => ReconcileOutcome::Updated { change_id },
        Err(error) => ReconcileOutcome::Failed {
            stage: Stage::Update,
            error,
        },
    }
}

impl ChangeRequest {
    /// Replaces every value of the record with `address` alone.
    pub(crate) fn upsert_a(config: &Config, address: &str, comment: String) -> Self {
        ChangeRequest {
            name: config.record_name.clone(),
            record_type: RecordType::A,
            values: vec![address.to_string()],
            ttl: config.ttl,
            comment: Some(comment),
        }
    }
}

fn timestamp_comment() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true)
}
