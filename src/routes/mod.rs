use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tera::{Context, Tera};

use crate::dto::slack::CommandResponse;

pub mod main;

/// Shown to the caller when `/whois` is invoked without text.
pub const USAGE_MESSAGE: &str = "usage: /whois [@user_name]";

/// Shown to the caller when the profile lookup fails.
pub const LOOKUP_FAILED_MESSAGE: &str = "Error fetching the results. Please try after sometime.";

/// Renders a template into an HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// JSON reply visible only to the user who invoked the command.
pub fn ephemeral(status: StatusCode, text: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(CommandResponse::ephemeral(text))
}
