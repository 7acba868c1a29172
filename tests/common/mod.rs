//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::dev::{ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use config::Config;
use serde_json::Value;

use notion_whois::models::config::ServerConfig;
use notion_whois::repository::NotionRepository;
use notion_whois::{configure, load_templates};

/// Request captured by [`FakeNotion`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub notion_version: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    status: u16,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Local stand-in for the Notion API that replays one canned response.
pub struct FakeNotion {
    pub api_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: ServerHandle,
}

impl FakeNotion {
    /// Starts the fake on an ephemeral port; `body` is sent verbatim as JSON.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            status,
            body: body.into(),
            requests: requests.clone(),
        };

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .route("/v1/databases/{database_id}/query", web::post().to(query))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake notion server");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            api_url: format!("http://{addr}/v1"),
            requests,
            handle,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

async fn query(req: HttpRequest, body: web::Bytes, state: web::Data<FakeState>) -> HttpResponse {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    state
        .requests
        .lock()
        .expect("requests lock")
        .push(RecordedRequest {
            path: req.path().to_string(),
            authorization: header("authorization"),
            notion_version: header("notion-version"),
            body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        });

    HttpResponse::build(StatusCode::from_u16(state.status).expect("valid status"))
        .content_type("application/json")
        .body(state.body.clone())
}

/// Upstream that accepts connections but never answers.
///
/// Connections queue in the listener backlog; keep the listener alive for
/// as long as requests should hang.
pub fn silent_upstream() -> (TcpListener, String) {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind silent upstream");
    let addr = listener.local_addr().expect("silent upstream address");
    (listener, format!("http://{addr}/v1"))
}

/// Settings pointing the repository at `api_url`, plus extra overrides.
pub fn server_config(api_url: &str, overrides: &[(&str, &str)]) -> ServerConfig {
    let builder = Config::builder()
        .set_override("notion_api_key", "secret_abc")
        .and_then(|b| b.set_override("notion_workspace_name", "myteam"))
        .and_then(|b| b.set_override("database_id", "db123"))
        .and_then(|b| b.set_override("notion_api_url", api_url))
        .and_then(|b| b.set_override("request_timeout_secs", 5_i64))
        .expect("valid overrides");

    let settings = overrides
        .iter()
        .fold(builder, |builder, (key, value)| {
            builder.set_override(*key, *value).expect("valid override")
        })
        .build()
        .expect("settings build");

    ServerConfig::from_settings(settings).expect("server config")
}

/// Application wired like the production server.
pub fn app(
    server_config: ServerConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let notion = server_config.notion().expect("valid notion settings");
    let repo = NotionRepository::new(&notion).expect("notion repository");
    let tera = load_templates().expect("templates");

    App::new()
        .configure(configure)
        .app_data(web::Data::new(tera))
        .app_data(web::Data::new(repo))
        .app_data(web::Data::new(server_config))
}
