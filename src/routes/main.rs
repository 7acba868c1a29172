use actix_multipart::form::MultipartForm;
use actix_web::http::StatusCode;
use actix_web::http::header::{ALLOW, CONTENT_LENGTH, CONTENT_TYPE, HeaderValue};
use actix_web::{Either, HttpRequest, HttpResponse, Responder, web};
use tera::{Context, Tera};

use crate::forms::command::{SlashCommandForm, SlashCommandUpload};
use crate::models::config::ServerConfig;
use crate::repository::NotionRepository;
use crate::routes::{LOOKUP_FAILED_MESSAGE, USAGE_MESSAGE, ephemeral, render_template};
use crate::services::ServiceError;
use crate::services::command as command_service;

type CommandBody = Either<web::Form<SlashCommandForm>, MultipartForm<SlashCommandUpload>>;

/// Landing page for people opening the webhook url in a browser.
pub async fn show_index(
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let mut context = Context::new();
    context.insert("instructions_url", &server_config.instructions_url);

    render_template(&tera, "main/index.html", &context)
}

/// Slash command webhook called by Slack.
pub async fn slash_command(
    req: HttpRequest,
    body: Result<CommandBody, actix_web::Error>,
    repo: web::Data<NotionRepository>,
) -> impl Responder {
    let body = match body {
        Ok(body) => body,
        // An empty POST is read as a form without fields.
        Err(_) if is_empty_untyped(&req) => Either::Left(web::Form(SlashCommandForm::default())),
        Err(err) => {
            log::warn!("Rejected malformed slash command body: {err}");
            return ephemeral(
                StatusCode::BAD_REQUEST,
                format!("Malformed request body: {err}"),
            );
        }
    };

    let result = match body {
        Either::Left(web::Form(form)) => command_service::whois(repo.get_ref(), form).await,
        Either::Right(MultipartForm(form)) => command_service::whois(repo.get_ref(), form).await,
    };

    match result {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Form(_)) => ephemeral(StatusCode::BAD_REQUEST, USAGE_MESSAGE),
        Err(ServiceError::Upstream(_)) => {
            ephemeral(StatusCode::INTERNAL_SERVER_ERROR, LOOKUP_FAILED_MESSAGE)
        }
    }
}

/// True when the request has neither a content type nor a body.
fn is_empty_untyped(req: &HttpRequest) -> bool {
    let headers = req.headers();
    let no_body = headers
        .get(CONTENT_LENGTH)
        .is_none_or(|len| len.as_bytes() == b"0");
    headers.get(CONTENT_TYPE).is_none() && no_body
}

/// Fallback for every method other than GET and POST.
pub async fn method_not_allowed(req: HttpRequest) -> impl Responder {
    let mut response = ephemeral(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("method {} is not allowed for the URL", req.method()),
    );
    response
        .headers_mut()
        .insert(ALLOW, HeaderValue::from_static("GET, POST"));
    response
}
