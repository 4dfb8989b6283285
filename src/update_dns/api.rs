use std::fmt;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum RecordType {
    A,
    Other(String),
}

impl RecordType {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::Other(other) => other,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, typed set of values as the provider reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordSet {
    pub name: String,
    pub record_type: RecordType,
    pub values: Vec<String>,
    pub ttl: Option<u32>,
}

/// Desired end state of one record, submitted as an upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChangeRequest {
    pub name: String,
    pub record_type: RecordType,
    pub values: Vec<String>,
    pub ttl: u32,
    pub comment: Option<String>,
}

pub(crate) trait RecordStore {
    fn describe(&self) -> String;

    /// Record sets of `zone` in provider order, starting at `start_name` and
    /// `start_type`. The first entry need not be the one asked for.
    fn list_record_sets(
        &self,
        zone: &str,
        start_name: &str,
        start_type: &RecordType,
    ) -> Result<Vec<RecordSet>>;

    /// Creates or fully replaces the record described by `change`, returning
    /// the provider's id for the submitted change.
    fn upsert(&self, zone: &str, change: &ChangeRequest) -> Result<String>;
}
