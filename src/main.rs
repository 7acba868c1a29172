use dotenvy::dotenv;

use notion_whois::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    // Required Notion settings must be valid before binding.
    let notion_settings = match server_config.notion() {
        Ok(notion_settings) => notion_settings,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    notion_whois::run(server_config, notion_settings).await
}
