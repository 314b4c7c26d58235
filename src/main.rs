pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::{AppConfig, NotifierConfig, SmtpTransport};
use crate::modules::contact::adapter::outgoing::{EmailContactNotifier, LoggingContactNotifier};
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::contact::application::services::SubmitContactService;
use crate::modules::content::adapter::outgoing::FsContentStore;
use crate::modules::content::application::ports::incoming::use_cases::LoadSiteContentUseCase;
use crate::modules::content::application::services::LoadSiteContentService;
use crate::modules::email::adapter::outgoing::SmtpEmailSender;
use crate::modules::structured_data::json_ld::SiteIdentity;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub load_site_content_use_case: Arc<dyn LoadSiteContentUseCase + Send + Sync>,
    pub submit_contact_use_case: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub site: SiteIdentity,
    pub author_name: Option<String>,
}

#[cfg(not(tarpaulin_include))]
fn build_submit_contact(
    notifier: &NotifierConfig,
) -> anyhow::Result<Arc<dyn SubmitContactUseCase + Send + Sync>> {
    Ok(match notifier {
        NotifierConfig::Log => {
            info!("Contact submissions go to the log");
            Arc::new(SubmitContactService::new(LoggingContactNotifier))
        }
        NotifierConfig::Smtp {
            inbox,
            from,
            transport,
        } => {
            let sender = match transport {
                SmtpTransport::Relay {
                    server,
                    username,
                    password,
                } => SmtpEmailSender::new(server, username, password, from)?,
                // Local Mailpit
                SmtpTransport::Local { host, port } => SmtpEmailSender::new_local(host, *port, from),
            };
            info!(inbox = %inbox, "Contact submissions go out by email");
            Arc::new(SubmitContactService::new(EmailContactNotifier::new(
                Arc::new(sender),
                inbox.clone(),
            )))
        }
    })
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    let store = FsContentStore::new(config.content_dir.clone());
    info!(content_dir = %config.content_dir.display(), "Serving content from disk");

    let state = AppState {
        load_site_content_use_case: Arc::new(LoadSiteContentService::new(store)),
        submit_contact_use_case: build_submit_contact(&config.notifier)?,
        site: config.site.clone(),
        author_name: config.author_name.clone(),
    };

    info!(url = %server_url, env = %env, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Content
    cfg.service(crate::modules::content::adapter::incoming::web::get_profile_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::get_timeline_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::get_projects_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::get_skills_handler);
    // Structured data
    cfg.service(
        crate::modules::content::adapter::incoming::web::get_person_structured_data_handler,
    );
    cfg.service(
        crate::modules::content::adapter::incoming::web::get_website_structured_data_handler,
    );
    cfg.service(crate::modules::content::adapter::incoming::web::get_blog_structured_data_handler);
    // Contact
    crate::modules::contact::adapter::incoming::web::configure(cfg);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
