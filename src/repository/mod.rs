use async_trait::async_trait;

use crate::domain::careers::{ApplicationStatus, Job, JobApplication};
use crate::domain::catalog::{Brand, Category, Series, Vehicle};
use crate::domain::entity::Resource;
use crate::domain::partners::{Company, State};
use crate::domain::srm::{SrmAgent, SrmCustomer};
use crate::domain::listing::{ListingQueryState, ListingResponse};
use crate::domain::types::{ApprovalStatus, EntityId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::HttpRepository;

/// Fetches one page of records of type `T`.
///
/// This is the only seam the listing query needs, so tests can swap the
/// backend for an in-memory fake.
#[async_trait]
pub trait ListingReader<T: Resource>: Send + Sync {
    async fn list_records(
        &self,
        query: &ListingQueryState,
    ) -> RepositoryResult<ListingResponse<T>>;
}

#[async_trait]
pub trait RecordReader<T: Resource>: Send + Sync {
    /// Returns `None` when the backend does not know the identifier.
    async fn get_record(&self, id: &EntityId) -> RepositoryResult<Option<T>>;
}

#[async_trait]
pub trait RecordWriter<T: Resource>: Send + Sync {
    async fn create_record(&self, fields: &T::Fields) -> RepositoryResult<T>;
    async fn update_record(&self, id: &EntityId, fields: &T::Fields) -> RepositoryResult<T>;
    async fn delete_record(&self, id: &EntityId) -> RepositoryResult<()>;
}

/// Status transitions that have dedicated endpoints instead of a full update.
#[async_trait]
pub trait ModerationWriter: Send + Sync {
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

/// Listings that other records point at and that forms offer as dropdowns.
pub trait ReferenceSource:
    ListingReader<Job>
    + ListingReader<Vehicle>
    + ListingReader<Category>
    + ListingReader<Brand>
    + ListingReader<Series>
    + ListingReader<Company>
    + ListingReader<State>
    + ListingReader<SrmCustomer>
    + ListingReader<SrmAgent>
{
}

impl<R> ReferenceSource for R where
    R: ListingReader<Job>
        + ListingReader<Vehicle>
        + ListingReader<Category>
        + ListingReader<Brand>
        + ListingReader<Series>
        + ListingReader<Company>
        + ListingReader<State>
        + ListingReader<SrmCustomer>
        + ListingReader<SrmAgent>
        + ?Sized
{
}
