//! Row actions that change a status without opening the edit form.

use actix_web::{HttpResponse, Responder, post, web};
use actix_web_flash_messages::FlashMessage;
use serde::Deserialize;

use crate::domain::entity::EntityKind;
use crate::domain::types::EntityId;
use crate::query::QueryCache;
use crate::repository::HttpRepository;
use crate::routes::redirect;
use crate::services::moderation as moderation_service;
use crate::services::ServiceError;

#[derive(Deserialize)]
pub struct StatusForm {
    pub status: String,
}

fn flash_failure(err: &ServiceError, what: &str) {
    match err {
        ServiceError::TypeConstraint(message) => FlashMessage::error(message.clone()).send(),
        ServiceError::NotFound => FlashMessage::error(format!("The {what} no longer exists.")).send(),
        _ => FlashMessage::error(format!("Failed to update the {what}.")).send(),
    }
}

#[post("/vehicles/{id}/approval")]
pub async fn vehicle_approval(
    id: web::Path<String>,
    repo: web::Data<HttpRepository>,
    cache: web::Data<QueryCache>,
    web::Form(form): web::Form<StatusForm>,
) -> impl Responder {
    let Ok(id) = EntityId::new(id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    match moderation_service::set_vehicle_approval(repo.get_ref(), cache.get_ref(), &id, &form.status)
        .await
    {
        Ok(vehicle) => {
            FlashMessage::success(format!(
                "Vehicle marked {}.",
                vehicle.fields.approval_status.label().to_lowercase()
            ))
            .send();
        }
        Err(err) => flash_failure(&err, "vehicle"),
    }
    redirect(&EntityKind::Vehicle.list_path())
}

#[post("/job-applications/{id}/status")]
pub async fn application_status(
    id: web::Path<String>,
    repo: web::Data<HttpRepository>,
    cache: web::Data<QueryCache>,
    web::Form(form): web::Form<StatusForm>,
) -> impl Responder {
    let Ok(id) = EntityId::new(id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    match moderation_service::set_application_status(
        repo.get_ref(),
        cache.get_ref(),
        &id,
        &form.status,
    )
    .await
    {
        Ok(application) => {
            FlashMessage::success(format!(
                "Application marked {}.",
                application.fields.status.label().to_lowercase()
            ))
            .send();
        }
        Err(err) => flash_failure(&err, "application"),
    }
    redirect(&EntityKind::JobApplication.list_path())
}
