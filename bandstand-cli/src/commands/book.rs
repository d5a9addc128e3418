//! Simulated ticket booking for a show.

use anyhow::{Result, bail};
use bandstand_core::booking::{self, BookingFlow};
use bandstand_core::tour;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::render::Render;

pub async fn run(date: &str) -> Result<()> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", date))?;

    let dates = tour::dates();
    let Some(stop) = tour::stop_on(&dates, day) else {
        bail!(
            "No show on {}. Run `bandstand tour` to see the schedule.",
            day
        );
    };

    println!("Booking tickets for:");
    println!("  {}", stop.render());
    println!();

    let mut flow = BookingFlow::new();
    flow.submit();

    let spinner = create_spinner("Processing...".to_string());
    tokio::time::sleep(booking::PROCESSING_DELAY).await;
    flow.finish_processing();
    spinner.finish_and_clear();

    println!("{}", "Booked Successfully!".green().bold());

    // The confirmation stays up for a moment before the form resets
    tokio::time::sleep(booking::CONFIRMATION_DELAY).await;
    flow.acknowledge();

    Ok(())
}
