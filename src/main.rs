use std::env;
use std::net::TcpListener;

use anyhow::Context;

use sqlx::postgres::PgPoolOptions;

use pmc_site::app;
use pmc_site::client::EmailClient;
use pmc_site::dispatch::{Dispatcher, EmailNotifier};
use pmc_site::settings::Settings;
use pmc_site::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let subscriber = telemetry::create_subscriber(env_filter, std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let settings = Settings::load().expect("Failed to load settings");

    // The pool is built lazily so a down database keeps the site serving;
    // insert attempts surface the failure per-request instead.
    let pool = match &settings.database {
        Some(database) => Some(PgPoolOptions::new().connect_lazy_with(database.with_db())),
        None => {
            tracing::warn!("database not configured, contact messages will not be saved");
            None
        }
    };

    let notifier = match &settings.email {
        Some(email) => {
            let client = EmailClient::new(
                email.sender(),
                email.api_timeout(),
                email.api_base_url(),
                email.api_auth_token(),
            )?;
            Some(EmailNotifier::new(client, email.notify_recipient()))
        }
        None => {
            tracing::warn!("email credentials not configured, notifications will not be sent");
            None
        }
    };

    let dispatcher = Dispatcher::new(pool, notifier);

    let listener = TcpListener::bind(settings.app.addr())?;
    tracing::info!("serving site on http://{}", listener.local_addr()?);

    app::run(listener, dispatcher, settings.app.public_dir().to_path_buf())?
        .await
        .context("Failed to run app")
}
