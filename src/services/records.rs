//! Single-record workflows: loading the edit form and submitting it.

use crate::components::tags::TagOption;
use crate::domain::careers::Job;
use crate::domain::catalog::{Brand, Category, Series, Vehicle};
use crate::domain::entity::{EntityKind, Resource};
use crate::domain::listing::{ListingQueryState, PageLimit, SortOrder};
use crate::domain::partners::{Company, State};
use crate::domain::srm::{SrmAgent, SrmCustomer};
use crate::domain::types::EntityId;
use crate::dto::records::EditPageData;
use crate::forms::parse_form;
use crate::query::{QueryCache, QueryKey};
use crate::repository::{ListingReader, RecordReader, RecordWriter, ReferenceSource};
use crate::services::{ServiceError, ServiceResult};
use crate::views::ListingView;
use crate::views::form::{ReferenceOptions, referenced_kinds, render_form};

/// Fetches one record through the cache.
pub async fn load_record<T, R>(repo: &R, cache: &QueryCache, id: &EntityId) -> ServiceResult<T>
where
    T: Resource,
    R: RecordReader<T> + ?Sized,
{
    let key = QueryKey::detail(T::KIND, id);
    let record = cache
        .fetch(&key, || repo.get_record(id))
        .await
        .map_err(|err| {
            log::error!("Failed to load {key}: {err}");
            ServiceError::from(err)
        })?;
    record.ok_or(ServiceError::NotFound)
}

/// Upper bound on the listing pages walked for one dropdown.
const MAX_REFERENCE_PAGES: u32 = 50;

/// Every record of `T` as `(id, title)`, walking the listing page by page.
/// A page that fails to load ends the walk with what was gathered so far.
async fn reference_list<T, R>(repo: &R, cache: &QueryCache) -> Vec<TagOption>
where
    T: Resource,
    R: ListingReader<T> + ?Sized,
{
    let mut options = Vec::new();
    for page in 1..=MAX_REFERENCE_PAGES {
        let state = ListingQueryState::new(page, PageLimit::max(), SortOrder::Asc);
        let key = QueryKey::listing(T::KIND, &state);
        let listing = match cache.fetch(&key, || repo.list_records(&state)).await {
            Ok(listing) => listing,
            Err(err) => {
                log::error!("Failed to load {} options: {err}", T::KIND);
                break;
            }
        };
        options.extend(
            listing
                .list
                .iter()
                .map(|record| TagOption::new(record.id().to_string(), record.title())),
        );
        if listing.list.is_empty() || page >= listing.total_number_of_pages {
            break;
        }
    }
    options
}

/// Dropdown options for every kind in `kinds`. A list that fails to load
/// leaves its dropdown empty rather than failing the form.
pub async fn load_reference_options<R>(
    repo: &R,
    cache: &QueryCache,
    kinds: &[EntityKind],
) -> ReferenceOptions
where
    R: ReferenceSource + ?Sized,
{
    let mut options = ReferenceOptions::new();
    for &kind in kinds {
        let list = match kind {
            EntityKind::Job => reference_list::<Job, R>(repo, cache).await,
            EntityKind::Vehicle => reference_list::<Vehicle, R>(repo, cache).await,
            EntityKind::Category => reference_list::<Category, R>(repo, cache).await,
            EntityKind::Brand => reference_list::<Brand, R>(repo, cache).await,
            EntityKind::Series => reference_list::<Series, R>(repo, cache).await,
            EntityKind::Company => reference_list::<Company, R>(repo, cache).await,
            EntityKind::State => reference_list::<State, R>(repo, cache).await,
            EntityKind::SrmCustomer => reference_list::<SrmCustomer, R>(repo, cache).await,
            EntityKind::SrmAgent => reference_list::<SrmAgent, R>(repo, cache).await,
            other => {
                log::warn!("No reference list is served for {other}");
                continue;
            }
        };
        options.insert(kind, list);
    }
    options
}

/// Form page data for `fields`, the values of record `id` or the defaults
/// of a new record.
pub fn edit_page_data<T: ListingView>(
    id: Option<&EntityId>,
    fields: &T::Fields,
    references: &ReferenceOptions,
) -> ServiceResult<EditPageData> {
    let values = serde_json::to_value(fields).map_err(|err| {
        log::error!("Failed to serialize {} fields: {err}", T::KIND);
        ServiceError::Internal(err.to_string())
    })?;
    let form = render_form(&T::form_fields(), &values, references);
    Ok(EditPageData::new(T::KIND, id, form))
}

/// Loads the create (`id` is `None`) or edit form of `T`.
pub async fn load_edit_page<T, R>(
    repo: &R,
    cache: &QueryCache,
    id: Option<&EntityId>,
) -> ServiceResult<EditPageData>
where
    T: ListingView,
    R: RecordReader<T> + ReferenceSource + ?Sized,
{
    let fields = match id {
        Some(id) => load_record::<T, R>(repo, cache, id).await?.fields().clone(),
        None => T::Fields::default(),
    };
    let references = load_reference_options(repo, cache, &referenced_kinds(&T::form_fields())).await;
    edit_page_data::<T>(id, &fields, &references)
}

fn parse_fields<T: ListingView>(body: &[u8]) -> ServiceResult<T::Fields> {
    parse_form::<T::Fields>(body).map_err(|err| {
        log::error!("Failed to validate {} form: {err}", T::KIND);
        ServiceError::from(err)
    })
}

/// Validates the submitted form and creates the record.
pub async fn create_record<T, R>(repo: &R, cache: &QueryCache, body: &[u8]) -> ServiceResult<T>
where
    T: ListingView,
    R: RecordWriter<T> + ?Sized,
{
    let fields = parse_fields::<T>(body)?;
    let record = repo.create_record(&fields).await.map_err(|err| {
        log::error!("Failed to create {}: {err}", T::KIND);
        ServiceError::from(err)
    })?;
    cache.invalidate_entity(T::KIND);
    Ok(record)
}

/// Validates the submitted form and replaces the record's fields.
pub async fn update_record<T, R>(
    repo: &R,
    cache: &QueryCache,
    id: &EntityId,
    body: &[u8],
) -> ServiceResult<T>
where
    T: ListingView,
    R: RecordWriter<T> + ?Sized,
{
    let fields = parse_fields::<T>(body)?;
    let record = repo.update_record(id, &fields).await.map_err(|err| {
        log::error!("Failed to update {} {id}: {err}", T::KIND);
        ServiceError::from(err)
    })?;
    cache.invalidate_entity(T::KIND);
    Ok(record)
}

pub async fn delete_record<T, R>(repo: &R, cache: &QueryCache, id: &EntityId) -> ServiceResult<()>
where
    T: ListingView,
    R: RecordWriter<T> + ?Sized,
{
    repo.delete_record(id).await.map_err(|err| {
        log::error!("Failed to delete {} {id}: {err}", T::KIND);
        ServiceError::from(err)
    })?;
    cache.invalidate_entity(T::KIND);
    Ok(())
}
