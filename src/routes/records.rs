//! Create, edit and delete pages shared by every record type.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::entity::EntityKind;
use crate::domain::types::EntityId;
use crate::dto::records::EditPageData;
use crate::models::config::ServerConfig;
use crate::query::QueryCache;
use crate::repository::HttpRepository;
use crate::routes::{base_context, not_found, redirect, render_template_status, with_resource};
use crate::services::records as records_service;
use crate::services::{ServiceError, ServiceResult};

fn render_edit_page(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    req: &HttpRequest,
    server_config: &ServerConfig,
    page: &EditPageData,
) -> HttpResponse {
    let mut context = base_context(flash_messages, req.path(), server_config);
    context.insert("page", page);
    let status = if page.not_found {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    render_template_status(tera, "records/edit.html", &context, status)
}

/// Flashes the outcome of a mutation and picks where to go next.
fn finish_mutation(
    result: ServiceResult<()>,
    success: String,
    on_success: String,
    on_failure: String,
    failure: String,
) -> HttpResponse {
    match result {
        Ok(()) => {
            FlashMessage::success(success).send();
            redirect(&on_success)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&on_failure)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("The record no longer exists.").send();
            redirect(&on_success)
        }
        Err(err) => {
            log::error!("{failure}: {err}");
            FlashMessage::error(failure).send();
            redirect(&on_failure)
        }
    }
}

#[get("/{entity}/new")]
pub async fn show_new_record(
    req: HttpRequest,
    entity: web::Path<String>,
    repo: web::Data<HttpRepository>,
    cache: web::Data<QueryCache>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Ok(kind) = EntityKind::from_route(&entity) else {
        return not_found(&tera, &flash_messages, req.path(), &server_config);
    };

    let result = with_resource!(kind, Record => {
        records_service::load_edit_page::<Record, HttpRepository>(
            repo.get_ref(),
            cache.get_ref(),
            None,
        )
        .await
    });

    match result {
        Ok(page) => render_edit_page(&tera, &flash_messages, &req, &server_config, &page),
        Err(err) => {
            log::error!("Failed to load the new {kind} form: {err}");
            FlashMessage::error("Failed to load the form.").send();
            redirect(&kind.list_path())
        }
    }
}

#[post("/{entity}/new")]
pub async fn create_record(
    entity: web::Path<String>,
    repo: web::Data<HttpRepository>,
    cache: web::Data<QueryCache>,
    body: web::Bytes,
) -> impl Responder {
    let Ok(kind) = EntityKind::from_route(&entity) else {
        return HttpResponse::NotFound().finish();
    };

    let result = with_resource!(kind, Record => {
        records_service::create_record::<Record, HttpRepository>(
            repo.get_ref(),
            cache.get_ref(),
            &body,
        )
        .await
        .map(|_| ())
    });

    finish_mutation(
        result,
        format!("{} created.", kind.singular()),
        kind.list_path(),
        kind.new_path(),
        format!("Failed to create {}", kind.singular().to_lowercase()),
    )
}

#[get("/{entity}/edit/{id:.*}")]
pub async fn show_edit_record(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    repo: web::Data<HttpRepository>,
    cache: web::Data<QueryCache>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (entity, id) = path.into_inner();
    let (Ok(kind), Ok(id)) = (EntityKind::from_route(&entity), EntityId::new(id)) else {
        return not_found(&tera, &flash_messages, req.path(), &server_config);
    };

    let result = with_resource!(kind, Record => {
        records_service::load_edit_page::<Record, HttpRepository>(
            repo.get_ref(),
            cache.get_ref(),
            Some(&id),
        )
        .await
    });

    let page = match result {
        Ok(page) => page,
        Err(ServiceError::NotFound) => EditPageData::missing(kind, &id),
        Err(err) => {
            log::error!("Failed to load {kind} {id}: {err}");
            FlashMessage::error(format!("Failed to load the {}.", kind.singular().to_lowercase()))
                .send();
            return redirect(&kind.list_path());
        }
    };
    render_edit_page(&tera, &flash_messages, &req, &server_config, &page)
}

#[post("/{entity}/edit/{id:.*}")]
pub async fn update_record(
    path: web::Path<(String, String)>,
    repo: web::Data<HttpRepository>,
    cache: web::Data<QueryCache>,
    body: web::Bytes,
) -> impl Responder {
    let (entity, id) = path.into_inner();
    let (Ok(kind), Ok(id)) = (EntityKind::from_route(&entity), EntityId::new(id)) else {
        return HttpResponse::NotFound().finish();
    };

    let result = with_resource!(kind, Record => {
        records_service::update_record::<Record, HttpRepository>(
            repo.get_ref(),
            cache.get_ref(),
            &id,
            &body,
        )
        .await
        .map(|_| ())
    });

    finish_mutation(
        result,
        format!("{} saved.", kind.singular()),
        kind.list_path(),
        kind.edit_path(&id),
        format!("Failed to save {}", kind.singular().to_lowercase()),
    )
}

#[post("/{entity}/delete/{id:.*}")]
pub async fn delete_record(
    path: web::Path<(String, String)>,
    repo: web::Data<HttpRepository>,
    cache: web::Data<QueryCache>,
) -> impl Responder {
    let (entity, id) = path.into_inner();
    let (Ok(kind), Ok(id)) = (EntityKind::from_route(&entity), EntityId::new(id)) else {
        return HttpResponse::NotFound().finish();
    };

    let result = with_resource!(kind, Record => {
        records_service::delete_record::<Record, HttpRepository>(
            repo.get_ref(),
            cache.get_ref(),
            &id,
        )
        .await
    });

    finish_mutation(
        result,
        format!("{} deleted.", kind.singular()),
        kind.list_path(),
        kind.list_path(),
        format!("Failed to delete {}", kind.singular().to_lowercase()),
    )
}
