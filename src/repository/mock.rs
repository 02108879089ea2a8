//! Test doubles for the repository traits: a `mockall` mock for the
//! moderation endpoints and an in-memory repository for any record type.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::domain::careers::{ApplicationStatus, JobApplication};
use crate::domain::catalog::Vehicle;
use crate::domain::entity::Resource;
use crate::domain::listing::{ListingQueryState, ListingResponse};
use crate::domain::types::{ApprovalStatus, EntityId};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ListingReader, ModerationWriter, RecordReader, RecordWriter};

mock! {
    pub Moderation {}

    #[async_trait]
    impl ModerationWriter for Moderation {
        async fn set_vehicle_approval(
            &self,
            id: &EntityId,
            status: ApprovalStatus,
        ) -> RepositoryResult<Vehicle>;

        async fn set_application_status(
            &self,
            id: &EntityId,
            status: ApplicationStatus,
        ) -> RepositoryResult<JobApplication>;
    }
}

/// Keeps records in memory and paginates them the way the backend does:
/// insertion order, case-insensitive title search, pages past the end
/// come back empty.
pub struct MemoryRepository<T> {
    records: Mutex<Vec<T>>,
    list_calls: AtomicUsize,
    next_id: AtomicUsize,
    failing: AtomicBool,
}

impl<T: Resource> MemoryRepository<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            next_id: AtomicUsize::new(records.len() + 1),
            records: Mutex::new(records),
            list_calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Number of listing requests served so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Vec<T> {
        self.lock().clone()
    }

    /// Makes every subsequent call fail with a connection error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> RepositoryResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::ConnectionError(
                "backend unreachable".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds a record from its fields by round-tripping through JSON, which
    /// is how the flattened records look on the wire anyway.
    fn materialize(id: &EntityId, fields: &T::Fields) -> RepositoryResult<T> {
        let mut value = serde_json::to_value(fields)?;
        match value.as_object_mut() {
            Some(object) => {
                object.insert("id".to_string(), Value::String(id.to_string()));
            }
            None => {
                return Err(RepositoryError::Unexpected(
                    "fields must serialize to an object".to_string(),
                ));
            }
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl<T: Resource> ListingReader<T> for MemoryRepository<T> {
    async fn list_records(
        &self,
        query: &ListingQueryState,
    ) -> RepositoryResult<ListingResponse<T>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let needle = query.search_term().to_lowercase();
        let matching: Vec<T> = self
            .lock()
            .iter()
            .filter(|record| needle.is_empty() || record.title().to_lowercase().contains(&needle))
            .cloned()
            .collect();

        let limit = query.limit().get();
        let start = (query.page() as usize - 1) * limit as usize;
        let list = matching
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        let listing = ListingResponse {
            list,
            page: query.page(),
            limit,
            total: matching.len() as u64,
            total_number_of_pages: 0,
        };
        Ok(listing.normalized(query))
    }
}

#[async_trait]
impl<T: Resource> RecordReader<T> for MemoryRepository<T> {
    async fn get_record(&self, id: &EntityId) -> RepositoryResult<Option<T>> {
        self.check_available()?;
        Ok(self.lock().iter().find(|record| record.id() == id).cloned())
    }
}

#[async_trait]
impl<T: Resource> RecordWriter<T> for MemoryRepository<T> {
    async fn create_record(&self, fields: &T::Fields) -> RepositoryResult<T> {
        self.check_available()?;
        let id = EntityId::new(self.next_id.fetch_add(1, Ordering::SeqCst).to_string())?;
        let record = Self::materialize(&id, fields)?;
        self.lock().push(record.clone());
        Ok(record)
    }

    async fn update_record(&self, id: &EntityId, fields: &T::Fields) -> RepositoryResult<T> {
        self.check_available()?;
        let record = Self::materialize(id, fields)?;
        let mut records = self.lock();
        let slot = records
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = record.clone();
        Ok(record)
    }

    async fn delete_record(&self, id: &EntityId) -> RepositoryResult<()> {
        self.check_available()?;
        let mut records = self.lock();
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
