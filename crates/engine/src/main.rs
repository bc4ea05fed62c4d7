//! Impostor Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use impostor_engine::api;
use impostor_engine::infrastructure::{
    clock::{SeededRandom, SystemClock, SystemRandom},
    gemini::GeminiClient,
    ports::{ClockPort, RandomPort},
    resilient_llm::ResilientLlmClient,
    settings::EngineSettings,
    stats_sink::TracingStatsSink,
};
use impostor_engine::App;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "impostor_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Impostor Engine");

    let settings = EngineSettings::from_env();

    // Create infrastructure clients
    let gemini = GeminiClient::new(
        settings.gemini_api_key.clone(),
        &settings.gemini_base_url,
        &settings.gemini_model,
        settings.dialogue_timeout_secs,
    );
    if gemini.is_configured() {
        tracing::info!(model = %settings.gemini_model, "Dialogue model configured");
    } else {
        tracing::warn!("GEMINI_API_KEY not set; questions will fail until it is configured");
    }

    let retry_config = settings.retry_config();
    tracing::info!(
        "Dialogue client configured with retry: max_retries={}, base_delay_ms={}",
        retry_config.max_retries,
        retry_config.base_delay_ms
    );
    let llm = Arc::new(ResilientLlmClient::new(Arc::new(gemini), retry_config));

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let random: Arc<dyn RandomPort> = match settings.game_seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded case generation");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(SystemRandom::new()),
    };

    // Create application
    let app = Arc::new(App::new(
        llm,
        clock,
        random,
        Arc::new(TracingStatsSink),
        settings.hidden_evidence_selection,
    ));

    // Sweep idle sessions
    let sweep_sessions = app.sessions.clone();
    let idle_ttl = Duration::from_secs(settings.session_idle_ttl_secs);
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(SESSION_SWEEP_INTERVAL).await;
            let removed = sweep_sessions.cleanup_expired(idle_ttl);
            if removed > 0 {
                tracing::info!(removed, remaining = sweep_sessions.len(), "Swept idle sessions");
            }
        }
    });

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(settings.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", settings.server_host, settings.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.map(str::trim).filter(|s| !s.is_empty())?;

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
