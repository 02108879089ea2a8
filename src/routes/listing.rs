use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::entity::EntityKind;
use crate::models::config::ServerConfig;
use crate::query::QueryCache;
use crate::repository::HttpRepository;
use crate::routes::{base_context, not_found, render_template, with_resource};
use crate::services::listing as listing_service;

#[get("/{entity}")]
/// Paginated, searchable listing of one record type.
pub async fn show_listing(
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

    let page = with_resource!(kind, Record => {
        let params = listing_service::listing_params::<Record>(req.query_string());
        listing_service::load_listing_page::<Record>(
            repo.clone().into_inner(),
            cache.clone().into_inner(),
            &params,
        )
        .await
    });

    let mut context = base_context(&flash_messages, req.path(), &server_config);
    context.insert("page", &page);
    render_template(&tera, "listing/index.html", &context)
}
