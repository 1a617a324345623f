//! Civic Complaint Assistant server entry point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use civic_complaint_assistant::adapters::http::{create_router, ChatHandlers};
use civic_complaint_assistant::adapters::{
    InMemoryComplaintRepository, InMemorySessionStore, LoggingNotifier, PostgresComplaintRepository,
    WebhookNotifier, WebhookNotifierConfig,
};
use civic_complaint_assistant::application::{HandleTurnHandler, ResetSessionHandler};
use civic_complaint_assistant::config::AppConfig;
use civic_complaint_assistant::domain::conversation::DialogueEngine;
use civic_complaint_assistant::ports::{ComplaintNotifier, ComplaintRepository, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "Starting Civic Complaint Assistant"
    );

    let repository = init_repository(&config).await?;
    let notifier = init_notifier(&config)?;
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let engine = DialogueEngine::new(config.dialogue.engine_config());
    tracing::info!(
        collect_contact = config.dialogue.collect_contact,
        ask_priority = config.dialogue.ask_priority,
        screen_descriptions = config.dialogue.screen_descriptions,
        "Dialogue configured"
    );

    let turn_handler = HandleTurnHandler::new(Arc::clone(&sessions), repository, notifier, engine)
        .with_collaborator_timeout(config.dialogue.collaborator_timeout());
    let reset_handler = ResetSessionHandler::new(sessions);
    let handlers = ChatHandlers::new(Arc::new(turn_handler), Arc::new(reset_handler));

    let app = create_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. RUST_LOG wins over
/// the configured level.
fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let fmt_layer = if config.is_production() {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

async fn init_repository(
    config: &AppConfig,
) -> Result<Arc<dyn ComplaintRepository>, Box<dyn std::error::Error>> {
    if !config.database.is_configured() {
        tracing::warn!("No database URL configured, complaints are kept in memory only");
        return Ok(Arc::new(InMemoryComplaintRepository::new()));
    }

    let repository = PostgresComplaintRepository::connect(&config.database).await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        "Connected to PostgreSQL"
    );
    Ok(Arc::new(repository))
}

fn init_notifier(
    config: &AppConfig,
) -> Result<Arc<dyn ComplaintNotifier>, Box<dyn std::error::Error>> {
    let Some(url) = config.notification.webhook_url() else {
        tracing::info!("No webhook URL configured, complaint notifications are logged only");
        return Ok(Arc::new(LoggingNotifier::new()));
    };

    let notifier = WebhookNotifier::new(WebhookNotifierConfig {
        url: url.to_string(),
        timeout: config.notification.timeout(),
        signing_secret: config.notification.signing_secret.clone(),
    })?;
    tracing::info!(
        signed = config.notification.signing_secret.is_some(),
        "Webhook notifier configured"
    );
    Ok(Arc::new(notifier))
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
