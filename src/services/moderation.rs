//! Approval and hiring decisions taken straight from a listing row.

use crate::domain::careers::{ApplicationStatus, JobApplication};
use crate::domain::catalog::Vehicle;
use crate::domain::entity::EntityKind;
use crate::domain::types::{ApprovalStatus, EntityId};
use crate::query::QueryCache;
use crate::repository::ModerationWriter;
use crate::services::{ServiceError, ServiceResult};

/// Sets a vehicle's approval status from its wire value.
pub async fn set_vehicle_approval<R>(
    repo: &R,
    cache: &QueryCache,
    id: &EntityId,
    status: &str,
) -> ServiceResult<Vehicle>
where
    R: ModerationWriter + ?Sized,
{
    let status: ApprovalStatus = status.parse()?;
    let vehicle = repo.set_vehicle_approval(id, status).await.map_err(|err| {
        log::error!("Failed to set approval of vehicle {id}: {err}");
        ServiceError::from(err)
    })?;
    cache.invalidate_entity(EntityKind::Vehicle);
    Ok(vehicle)
}

pub async fn set_application_status<R>(
    repo: &R,
    cache: &QueryCache,
    id: &EntityId,
    status: &str,
) -> ServiceResult<JobApplication>
where
    R: ModerationWriter + ?Sized,
{
    let status: ApplicationStatus = status.parse()?;
    let application = repo
        .set_application_status(id, status)
        .await
        .map_err(|err| {
            log::error!("Failed to set status of application {id}: {err}");
            ServiceError::from(err)
        })?;
    cache.invalidate_entity(EntityKind::JobApplication);
    Ok(application)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::careers::JobApplicationFields;
    use crate::domain::catalog::VehicleFields;
    use crate::domain::listing::ListingQueryState;
    use crate::query::QueryKey;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockModeration;

    fn id(value: &str) -> EntityId {
        EntityId::new(value).unwrap()
    }

    #[actix_web::test]
    async fn approval_updates_the_vehicle_and_drops_cached_pages() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let key = QueryKey::listing(EntityKind::Vehicle, &ListingQueryState::default());
        cache.insert(key.clone(), 1_u8);

        let mut repo = MockModeration::new();
        repo.expect_set_vehicle_approval()
            .withf(|id, status| id.as_str() == "v1" && *status == ApprovalStatus::Approved)
            .times(1)
            .returning(|id, status| {
                Ok(Vehicle {
                    id: id.clone(),
                    fields: VehicleFields {
                        approval_status: status,
                        ..Default::default()
                    },
                })
            });

        let vehicle = set_vehicle_approval(&repo, &cache, &id("v1"), "approved")
            .await
            .unwrap();

        assert_eq!(vehicle.fields.approval_status, ApprovalStatus::Approved);
        assert_eq!(cache.get::<u8>(&key), None);
    }

    #[actix_web::test]
    async fn unknown_status_is_rejected_before_the_backend() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let mut repo = MockModeration::new();
        repo.expect_set_vehicle_approval().never();

        let result = set_vehicle_approval(&repo, &cache, &id("v1"), "maybe").await;
        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }

    #[actix_web::test]
    async fn application_status_passes_backend_errors_through() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let mut repo = MockModeration::new();
        repo.expect_set_application_status()
            .withf(|_, status| *status == ApplicationStatus::Hired)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let result = set_application_status(&repo, &cache, &id("a1"), "hired").await;
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[actix_web::test]
    async fn application_status_returns_the_updated_record() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let mut repo = MockModeration::new();
        repo.expect_set_application_status()
            .returning(|id, status| {
                Ok(JobApplication {
                    id: id.clone(),
                    fields: JobApplicationFields {
                        status,
                        ..Default::default()
                    },
                    applied_at: None,
                })
            });

        let application = set_application_status(&repo, &cache, &id("a1"), "shortlisted")
            .await
            .unwrap();
        assert_eq!(application.fields.status, ApplicationStatus::Shortlisted);
    }
}
