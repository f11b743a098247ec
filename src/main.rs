//! Replay a recorded booking session against an in-memory view.
//!
//! Usage: `campground-booking <session.json> [--html]`
//!
//! The session file is a JSON array of events. The final view is printed as
//! JSON, or the summary panel as HTML with `--html`.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use campground_booking::summary::render_summary_html;
use campground_booking::wizard::{BookingApp, Event, MemoryView, StepOutcome};
use campground_booking::BookingConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campground_booking=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: campground-booking <session.json> [--html]")?;
    let html = args.any(|a| a == "--html");

    let config = BookingConfig::from_env().context("failed to load configuration")?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read session file {}", path))?;
    let events: Vec<Event> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse session file {}", path))?;
    info!("Replaying {} events from {}", events.len(), path);

    let mut view = MemoryView::new();
    let mut app = BookingApp::new(config, &view);

    for outcome in app.replay(&mut view, &events) {
        match outcome {
            StepOutcome::Advanced { from, to } => info!("Advanced from {} to {}", from, to),
            StepOutcome::Rejected(failure) => {
                for error in &failure.errors {
                    info!("Rejected {}: {}", failure.step, error);
                }
            }
            StepOutcome::Completed(confirmation) => {
                info!("{} (reference {})", confirmation.message, confirmation.reference)
            }
            StepOutcome::NotShown { submitted, current } => {
                info!("Ignored submit of {} while {} is shown", submitted, current)
            }
        }
    }

    if html {
        let panel = app.booking().summary(&view);
        println!("{}", render_summary_html(&panel)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    Ok(())
}
