//! Trivia service entry-point: loads settings and the seed fixture, then serves
//! the REST API.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::TriviaService;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::{InMemoryTriviaRepository, load_seed};

use server::{ServerConfig, TriviaSettings, create_server};

fn init_tracing(json_logs: bool) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = if json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = TriviaSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    init_tracing(settings.json_logs());

    let page_size = settings
        .page_size()
        .map_err(|err| std::io::Error::other(format!("invalid TRIVIA_PAGE_SIZE: {err}")))?;
    let seed_path = settings.seed_path();
    let seed = load_seed(&seed_path).map_err(std::io::Error::other)?;
    info!(
        path = %seed_path.display(),
        categories = seed.categories.len(),
        questions = seed.questions.len(),
        "trivia store seeded"
    );

    let repository = Arc::new(InMemoryTriviaRepository::from_seed(seed));
    let service = TriviaService::new(repository).with_page_size(page_size);
    let http_state = HttpState::from_service(Arc::new(service));

    let bind_addr = settings.bind_addr()?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, http_state, ServerConfig::new(bind_addr))?;
    info!(%bind_addr, page_size = page_size.get(), "trivia service listening");
    server.await
}
