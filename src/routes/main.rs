use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::routes::{base_context, render_template};

#[get("/")]
/// Landing page linking every record listing by section.
pub async fn show_dashboard(
    req: HttpRequest,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, req.path(), &server_config);
    render_template(&tera, "main/index.html", &context)
}
