//! Submit a booking for an event from the command line.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use event_rsvp::client::{BookingForm, HttpBookingClient};
use reqwest::Url;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `book-event` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "book-event",
    about = "Book a seat at an event through the RSVP API",
    version
)]
struct CliArgs {
    /// Base URL of the RSVP API.
    #[arg(long = "api-url", value_name = "url", default_value = "http://localhost:8080/")]
    api_url: Url,
    /// Identifier of the event to book.
    #[arg(long = "event-id", value_name = "uuid")]
    event_id: String,
    /// Slug of the event page.
    #[arg(long, value_name = "slug")]
    slug: String,
    /// Email address to register.
    #[arg(long, value_name = "email")]
    email: String,
    /// Request timeout in seconds.
    #[arg(long = "timeout-secs", default_value_t = 10)]
    timeout_secs: u64,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> Result<()> {
    let client = HttpBookingClient::new(&args.api_url, Duration::from_secs(args.timeout_secs))
        .wrap_err("build booking client")?;

    let mut form = BookingForm::new(args.event_id, args.slug);
    form.set_email(args.email);
    form.submit(&client)
        .await
        .wrap_err_with(|| format!("booking via {}", client.endpoint()))?;

    if let Some(message) = form.confirmation() {
        println!("{message}");
    }
    Ok(())
}
