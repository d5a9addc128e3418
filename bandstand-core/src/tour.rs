//! The fixed tour schedule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single stop on the tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourDate {
    pub date: NaiveDate,
    pub venue: String,
    pub city: String,
}

/// The five stops of the 2025 world tour.
///
/// This list is the only configuration the site has; nothing is loaded
/// from disk or network.
pub fn dates() -> Vec<TourDate> {
    [
        (15, "Madison Square Garden", "New York, NY"),
        (18, "The Forum", "Los Angeles, CA"),
        (22, "United Center", "Chicago, IL"),
        (25, "TD Garden", "Boston, MA"),
        (28, "Climate Pledge Arena", "Seattle, WA"),
    ]
    .into_iter()
    .map(|(day, venue, city)| TourDate {
        date: NaiveDate::from_ymd_opt(2025, 10, day).unwrap(),
        venue: venue.to_string(),
        city: city.to_string(),
    })
    .collect()
}

/// Whether `day` is a show day, compared by calendar date only.
pub fn is_tour_date(dates: &[TourDate], day: NaiveDate) -> bool {
    dates.iter().any(|stop| stop.date == day)
}

/// The stop played on `day`, if any.
pub fn stop_on(dates: &[TourDate], day: NaiveDate) -> Option<&TourDate> {
    dates.iter().find(|stop| stop.date == day)
}
