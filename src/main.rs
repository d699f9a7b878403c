//! Contact Book - Main entry point
//!
//! Runs the contact form in the terminal. The form is drawn on stdout and
//! logs go to stderr.

use anyhow::Result;
use contact_book::client::{AsyncContactClient, AsyncContactClientImpl};
use contact_book::form::Notifier;
use contact_book::ui::{Acknowledgements, Console, FormScreen, TerminalNotifier};
use contact_book::{Config, ContactClient, FormController};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Saving contacts to {}", config.endpoint_url);

    let sync_client = ContactClient::new(&config);
    let metrics = sync_client.metrics().clone();
    let client = Arc::new(AsyncContactClientImpl::new(sync_client)) as Arc<dyn AsyncContactClient>;

    let console = Arc::new(Console::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    ));
    let acks = Arc::new(Acknowledgements::new());
    let notifier =
        Arc::new(TerminalNotifier::new(console.clone(), acks.clone())) as Arc<dyn Notifier>;

    let controller = Arc::new(FormController::new(client, notifier).with_metrics(metrics));
    let screen = FormScreen::new(controller.clone(), console, acks);

    screen.run().await?;

    let summary = controller.metrics().summary();
    info!(
        "Session finished: {} submissions, {} saved, {} invalid, {} server errors, \
         {} network errors",
        summary.submissions_total,
        summary.contacts_saved_total,
        summary.validation_failures_total,
        summary.server_errors_total,
        summary.transport_errors_total
    );
    Ok(())
}
