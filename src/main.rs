//! EventManager client
//!
//! Main application entry point: loads the current event snapshot and prints
//! the dashboard and the event listing.

use chrono::{Offset, Utc};
use tracing::{error, info, warn};

use EventManager::{
    config::Settings,
    models::{Credentials, Event},
    pipeline::EventListPipeline,
    services::{ServiceFactory, StaticEventSource},
    state::{Clock, EventBoard, SystemClock},
    utils::{helpers, logging},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on drop
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", EventManager::info());

    let services = ServiceFactory::new(&settings)?;
    let pipeline = EventListPipeline::from_config(&settings.pipeline);
    let offset = settings.pipeline.utc_offset().unwrap_or_else(|| Utc.fix());
    let clock = SystemClock::new(offset);

    let logged_in = match settings.session.credentials() {
        Some((email, password)) => {
            let credentials = Credentials {
                email: email.to_string(),
                password: password.to_string(),
            };
            match services.auth_service.login(&credentials).await {
                Ok(user) => Some(user),
                Err(e) => {
                    error!(error = %e, "Login failed, continuing as visitor");
                    None
                }
            }
        }
        None => None,
    };

    let mut board = EventBoard::new(pipeline, clock, logged_in.as_ref().map(|user| user.email.clone()));

    if logged_in.is_some() {
        if let Err(e) = board.refresh(&services.event_service).await {
            warn!(error = %e, "Could not load events");
        }
    } else {
        board.refresh(&StaticEventSource::mock()).await?;
    }

    print_dashboard(&board, &settings);

    if logged_in.is_some() {
        if let Err(e) = services.auth_service.logout().await {
            warn!(error = %e, "Logout failed");
        }
    }

    info!("Done");
    Ok(())
}

fn print_dashboard<C: Clock>(board: &EventBoard<C>, settings: &Settings) {
    let overview = board.overview();
    let pipeline = &settings.pipeline;

    match board.participant() {
        Some(email) => println!("Welcome back, {}", email),
        None => println!("Welcome, visitor"),
    }
    println!();
    println!("Total events:    {}", overview.total_events);
    println!("Events joined:   {}", overview.events_joined);
    println!("Upcoming events: {}", overview.upcoming_events);

    println!();
    println!("Top events");
    for event in board.top_events(pipeline.top_events_limit) {
        println!("  {} ({} attendees)", event.title, event.attendee_count);
    }

    println!();
    println!("Upcoming events");
    for event in board.upcoming_events(pipeline.upcoming_limit) {
        println!("  {}", event.title);
    }

    println!();
    println!("All events");
    for event in board.listing() {
        print_event(board, &event, pipeline.description_word_limit);
    }
}

fn print_event<C: Clock>(board: &EventBoard<C>, event: &Event, word_limit: usize) {
    let offset = *board.now().offset();
    let when = event
        .occurs_at_in(offset)
        .map(helpers::format_event_time)
        .unwrap_or_else(|| event.occurs_at.clone());
    let button = board.join_button(&event.id);

    println!("  {} by {}", event.title, event.owner_name);
    println!("    {} @ {}", when, event.location);
    println!("    {}", helpers::truncate_description(&event.description, word_limit));
    println!(
        "    {} attendees [{}{}]",
        event.attendee_count,
        button.label,
        if button.disabled { ", disabled" } else { "" }
    );
}
