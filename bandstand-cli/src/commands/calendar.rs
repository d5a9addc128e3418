//! Month-grid view of the tour calendar.

use anyhow::Result;
use bandstand_core::calendar::{CalendarState, MonthStep};
use bandstand_core::tour;
use chrono::Datelike;

use crate::render::{Render, render_grid};

pub fn run(year: Option<i32>, month: Option<u32>, offset: i32) -> Result<()> {
    let mut state = match (year, month) {
        (Some(year), Some(month)) => {
            if !(1..=12).contains(&month) {
                anyhow::bail!("Month must be 1-12, got {}", month);
            }
            CalendarState::from_parts(year, month - 1)
        }
        (None, None) => CalendarState::now(),
        _ => anyhow::bail!("--year and --month must be given together"),
    };

    let step = if offset >= 0 {
        MonthStep::Next
    } else {
        MonthStep::Previous
    };
    for _ in 0..offset.unsigned_abs() {
        state = state.advance_month(step);
    }

    let dates = tour::dates();
    println!("{}", render_grid(&state, &state.grid(&dates)));

    let this_month: Vec<_> = dates
        .iter()
        .filter(|stop| stop.date.year() == state.year && stop.date.month0() == state.month)
        .collect();
    if !this_month.is_empty() {
        println!();
        for stop in this_month {
            println!("  {}", stop.render());
        }
    }

    Ok(())
}
