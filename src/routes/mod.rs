//! HTTP handlers and the helpers they share.

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::models::config::ServerConfig;
use crate::routes::headings::heading_for_path;
use crate::views::sections::render_sidebar;

pub mod headings;
pub mod listing;
pub mod main;
pub mod moderation;
pub mod records;

/// Bootstrap class of a flash message level.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

#[derive(Serialize)]
struct Alert<'a> {
    message: &'a str,
    level: &'static str,
}

/// Context every page starts from: flash messages, sidebar and heading.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    current_path: &str,
    server_config: &ServerConfig,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|message| Alert {
            message: message.content(),
            level: alert_level_to_str(&message.level()),
        })
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_path", current_path);
    context.insert("sidebar", &render_sidebar(current_path));
    context.insert("heading", &heading_for_path(current_path));
    context.insert("assets_url", &server_config.assets_url);
    context.insert("domain", &server_config.domain);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_status(tera, template, context, StatusCode::OK)
}

pub fn render_template_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 404 page for paths naming no known record type.
pub fn not_found(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    current_path: &str,
    server_config: &ServerConfig,
) -> HttpResponse {
    let context = base_context(flash_messages, current_path, server_config);
    render_template_status(tera, "main/not_found.html", &context, StatusCode::NOT_FOUND)
}

/// Runs `$body` with `$record` bound to the record type of `$kind`.
macro_rules! with_resource {
    ($kind:expr, $record:ident => $body:expr) => {
        match $kind {
            $crate::domain::entity::EntityKind::Blog => {
                type $record = $crate::domain::content::Blog;
                $body
            }
            $crate::domain::entity::EntityKind::Promotion => {
                type $record = $crate::domain::content::Promotion;
                $body
            }
            $crate::domain::entity::EntityKind::Link => {
                type $record = $crate::domain::content::Link;
                $body
            }
            $crate::domain::entity::EntityKind::MetaData => {
                type $record = $crate::domain::content::MetaData;
                $body
            }
            $crate::domain::entity::EntityKind::Job => {
                type $record = $crate::domain::careers::Job;
                $body
            }
            $crate::domain::entity::EntityKind::JobApplication => {
                type $record = $crate::domain::careers::JobApplication;
                $body
            }
            $crate::domain::entity::EntityKind::Company => {
                type $record = $crate::domain::partners::Company;
                $body
            }
            $crate::domain::entity::EntityKind::State => {
                type $record = $crate::domain::partners::State;
                $body
            }
            $crate::domain::entity::EntityKind::Vehicle => {
                type $record = $crate::domain::catalog::Vehicle;
                $body
            }
            $crate::domain::entity::EntityKind::Category => {
                type $record = $crate::domain::catalog::Category;
                $body
            }
            $crate::domain::entity::EntityKind::Brand => {
                type $record = $crate::domain::catalog::Brand;
                $body
            }
            $crate::domain::entity::EntityKind::Series => {
                type $record = $crate::domain::catalog::Series;
                $body
            }
            $crate::domain::entity::EntityKind::SrmCustomer => {
                type $record = $crate::domain::srm::SrmCustomer;
                $body
            }
            $crate::domain::entity::EntityKind::SrmAgent => {
                type $record = $crate::domain::srm::SrmAgent;
                $body
            }
            $crate::domain::entity::EntityKind::SrmTrip => {
                type $record = $crate::domain::srm::SrmTrip;
                $body
            }
        }
    };
}

pub(crate) use with_resource;

/// Registers every console route. Record routes match before the
/// moderation ones, so `/{entity}/delete/{id}` and `/{entity}/edit/{id}`
/// win for any id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::show_dashboard)
        .service(records::show_new_record)
        .service(records::create_record)
        .service(records::show_edit_record)
        .service(records::update_record)
        .service(records::delete_record)
        .service(moderation::vehicle_approval)
        .service(moderation::application_status)
        .service(listing::show_listing);
}
