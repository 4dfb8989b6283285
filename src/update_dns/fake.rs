//! In-memory record store for exercising the reconciler.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::update_dns::api::{ChangeRequest, RecordSet, RecordStore, RecordType};

/// Lists records ordered by name then type, starting at the requested key,
/// the way a paginating provider does.
#[derive(Default)]
pub(crate) struct FakeStore {
    records: RefCell<BTreeMap<(String, RecordType), RecordSet>>,
    list_calls: RefCell<Vec<(String, String, RecordType)>>,
    upserts: RefCell<Vec<ChangeRequest>>,
    fail_list: Cell<bool>,
    fail_upsert: Cell<bool>,
}

impl FakeStore {
    pub(crate) fn with_records(records: Vec<RecordSet>) -> Self {
        let store = FakeStore::default();
        for set in records {
            store
                .records
                .borrow_mut()
                .insert((set.name.clone(), set.record_type.clone()), set);
        }
        store
    }

    pub(crate) fn failing_list(self) -> Self {
        self.fail_list.set(true);
        self
    }

    pub(crate) fn failing_upsert(self) -> Self {
        self.fail_upsert.set(true);
        self
    }

    pub(crate) fn list_calls(&self) -> Vec<(String, String, RecordType)> {
        self.list_calls.borrow().clone()
    }

    pub(crate) fn upserts(&self) -> Vec<ChangeRequest> {
        self.upserts.borrow().clone()
    }

    /// The stored `A` record called `name`.
    pub(crate) fn record(&self, name: &str) -> Option<RecordSet> {
        self.records
            .borrow()
            .get(&(name.to_string(), RecordType::A))
            .cloned()
    }
}

impl RecordStore for FakeStore {
    fn describe(&self) -> String {
        "Fake".to_string()
    }

    fn list_record_sets(
        &self,
        zone: &str,
        start_name: &str,
        start_type: &RecordType,
    ) -> Result<Vec<RecordSet>> {
        self.list_calls.borrow_mut().push((
            zone.to_string(),
            start_name.to_string(),
            start_type.clone(),
        ));
        if self.fail_list.get() {
            return Err(Error::provider("AccessDenied: not authorized"));
        }
        let start = (start_name.to_string(), start_type.clone());
        Ok(self
            .records
            .borrow()
            .range(start..)
            .map(|(_, set)| set.clone())
            .collect())
    }

    fn upsert(&self, _zone: &str, change: &ChangeRequest) -> Result<String> {
        self.upserts.borrow_mut().push(change.clone());
        if self.fail_upsert.get() {
            return Err(Error::provider("Throttling: rate exceeded"));
        }
        let set = RecordSet {
            name: change.name.clone(),
            record_type: change.record_type.clone(),
            values: change.values.clone(),
            ttl: Some(change.ttl),
        };
        self.records
            .borrow_mut()
            .insert((set.name.clone(), set.record_type.clone()), set);
        Ok(format!("/change/C{}", self.upserts.borrow().len()))
    }
}
