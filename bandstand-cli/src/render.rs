//! Terminal rendering for bandstand-core types.
//!
//! Extension trait in the same spirit as the site's view layer: the core
//! hands over plain state, this module decides how it looks on a tty.

use bandstand_core::calendar::{CalendarState, DayCell};
use bandstand_core::cart::CartItem;
use bandstand_core::catalog::Product;
use bandstand_core::tour::TourDate;
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for TourDate {
    fn render(&self) -> String {
        format!(
            "{}  {}  {}",
            self.date.format("%b %e %Y"),
            self.venue.bold(),
            self.city.dimmed()
        )
    }
}

impl Render for Product {
    fn render(&self) -> String {
        format!(
            "{:<14} {:<20} {}  {}",
            self.slug,
            self.name,
            format!("{:>7}", self.price).green(),
            self.category.dimmed()
        )
    }
}

impl Render for CartItem {
    fn render(&self) -> String {
        format!(
            "{:<20} {}  {}",
            self.name,
            format!("{:>7}", self.price).green(),
            format!("#{}", self.id).dimmed()
        )
    }
}

/// Render the month header, weekday row and six-week grid.
///
/// Tour dates come out red and bold, days outside the displayed month
/// dimmed. Widths are fixed before styling so the escape codes don't
/// throw the columns off.
pub fn render_grid(state: &CalendarState, cells: &[DayCell]) -> String {
    let mut lines = Vec::new();

    lines.push(state.first_of_month().format("%B %Y").to_string());
    lines.push("Su Mo Tu We Th Fr Sa".dimmed().to_string());

    for week in cells.chunks(7) {
        let row: Vec<String> = week.iter().map(render_cell).collect();
        lines.push(row.join(" "));
    }

    lines.join("\n")
}

fn render_cell(cell: &DayCell) -> String {
    let day = format!("{:>2}", cell.day);
    if cell.tour_date {
        day.red().bold().to_string()
    } else if cell.outside_month {
        day.dimmed().to_string()
    } else {
        day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandstand_core::tour;

    #[test]
    fn grid_renders_header_plus_six_weeks() {
        let state = CalendarState::from_parts(2025, 9);
        let rendered = render_grid(&state, &state.grid(&tour::dates()));

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].contains("October 2025"));
    }
}
