//! Testimonial admin console
//!
//! A line-oriented front end for the testimonial admin panel. It drives the
//! editor against an in-memory store, seeded from a JSON file when
//! `TESTIMONIALS_SEED` is set.

mod commands;
mod config;
mod console;
mod error;

use std::sync::Arc;

use anyhow::{Context, Result};
use testimonial_admin::{InMemoryTestimonialStore, TestimonialEditor, TestimonialService};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use console::{Console, Reply};

fn build_store(config: &Config) -> Result<InMemoryTestimonialStore> {
    let store = match &config.seed_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read seed file {}", path.display()))?;
            InMemoryTestimonialStore::from_json(&json)
                .with_context(|| format!("Invalid seed file {}", path.display()))?
        }
        None => InMemoryTestimonialStore::new(),
    };
    Ok(store.reject_updates_for(config.rejected_update_ids.iter().copied()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout is the console
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,testimonial_admin=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting testimonial admin console");

    let config = Config::from_env();
    let store = Arc::new(build_store(&config)?);
    let service = Arc::new(TestimonialService::new(store));
    service
        .load()
        .await
        .context("Failed to load testimonials")?;

    let console = Console::new(TestimonialEditor::new(service));

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(b"Testimonial admin. Type `help` for commands.\n> ")
        .await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        match console.handle_line(&line).await {
            Reply::Quit => break,
            Reply::Print(output) => {
                if !output.is_empty() {
                    stdout.write_all(output.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                }
                stdout.write_all(b"> ").await?;
                stdout.flush().await?;
            }
        }
    }

    tracing::info!("Console closed");
    Ok(())
}
