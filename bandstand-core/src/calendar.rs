//! Month navigation and the 42-cell calendar grid.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::tour::{self, TourDate};

/// Number of cells in the month view: six full weeks.
pub const GRID_CELLS: usize = 42;

/// One day cell in the rendered month grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Day-of-month number shown in the cell.
    pub day: u32,
    /// True when the cell belongs to the previous or next month.
    pub outside_month: bool,
    /// True when the band plays on this date.
    pub tour_date: bool,
}

/// Direction of month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthStep {
    Next,
    Previous,
}

/// The calendar's navigation position: a (year, month) pair.
///
/// `month` is zero-based (0 = January) and always normalized to 0..=11;
/// navigating past either end rolls the year. The position starts at the
/// real-world current month but diverges from it as the user navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarState {
    pub year: i32,
    pub month: u32,
}

impl CalendarState {
    /// Start at the current month.
    pub fn now() -> CalendarState {
        let today = Local::now().date_naive();
        CalendarState {
            year: today.year(),
            month: today.month0(),
        }
    }

    /// Position at an explicit year and zero-based month.
    ///
    /// `month` is taken modulo 12 so the normalization invariant holds for
    /// any input.
    pub fn from_parts(year: i32, month: u32) -> CalendarState {
        CalendarState {
            year,
            month: month % 12,
        }
    }

    /// Move one month forward or back. Pure: returns the new position.
    #[must_use]
    pub fn advance_month(self, step: MonthStep) -> CalendarState {
        match step {
            MonthStep::Next => {
                if self.month == 11 {
                    CalendarState {
                        year: self.year + 1,
                        month: 0,
                    }
                } else {
                    CalendarState {
                        month: self.month + 1,
                        ..self
                    }
                }
            }
            MonthStep::Previous => {
                if self.month == 0 {
                    CalendarState {
                        year: self.year - 1,
                        month: 11,
                    }
                } else {
                    CalendarState {
                        month: self.month - 1,
                        ..self
                    }
                }
            }
        }
    }

    /// First day of the displayed month.
    pub fn first_of_month(&self) -> NaiveDate {
        // month is 0..=11 by invariant, so this cannot fail
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap()
    }

    /// The six-week grid for the displayed month, Sunday-first.
    ///
    /// Backs up from the 1st to the nearest preceding (or same) Sunday and
    /// emits 42 consecutive days. Cells outside the displayed month and
    /// cells falling on a tour date are flagged for the renderer.
    pub fn grid(&self, tour_dates: &[TourDate]) -> Vec<DayCell> {
        let first = self.first_of_month();
        let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);

        (0..GRID_CELLS as i64)
            .map(|offset| {
                let date = start + Duration::days(offset);
                DayCell {
                    date,
                    day: date.day(),
                    outside_month: date.month0() != self.month,
                    tour_date: tour::is_tour_date(tour_dates, date),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    // --- grid shape ---

    #[test]
    fn grid_is_42_consecutive_days() {
        for (year, month) in [(2025, 9), (2024, 1), (2025, 0), (2025, 11)] {
            let cells = CalendarState::from_parts(year, month).grid(&[]);
            assert_eq!(cells.len(), GRID_CELLS);
            for pair in cells.windows(2) {
                assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
            }
        }
    }

    #[test]
    fn grid_starts_on_sunday_and_contains_the_first() {
        let state = CalendarState::from_parts(2025, 9);
        let cells = state.grid(&[]);

        assert_eq!(cells[0].date.weekday(), Weekday::Sun);
        assert!(cells.iter().any(|c| c.date == state.first_of_month()));
    }

    #[test]
    fn cells_outside_displayed_month_are_flagged() {
        // October 2025 starts on a Wednesday: the grid leads with
        // September days and trails into November.
        let cells = CalendarState::from_parts(2025, 9).grid(&[]);

        assert!(cells[0].outside_month);
        assert_eq!(cells[0].day, 28); // Sep 28
        let inside = cells.iter().filter(|c| !c.outside_month).count();
        assert_eq!(inside, 31);
    }

    // --- navigation ---

    #[test]
    fn advance_rolls_year_at_both_ends() {
        let december = CalendarState::from_parts(2025, 11);
        let next = december.advance_month(MonthStep::Next);
        assert_eq!(next, CalendarState::from_parts(2026, 0));

        let january = CalendarState::from_parts(2025, 0);
        let previous = january.advance_month(MonthStep::Previous);
        assert_eq!(previous, CalendarState::from_parts(2024, 11));
    }

    #[test]
    fn twelve_steps_forward_is_same_month_next_year() {
        let start = CalendarState::from_parts(2025, 9);

        let mut state = start;
        for _ in 0..12 {
            state = state.advance_month(MonthStep::Next);
        }
        assert_eq!(state, CalendarState::from_parts(2026, 9));

        // Previous is the exact inverse
        for _ in 0..12 {
            state = state.advance_month(MonthStep::Previous);
        }
        assert_eq!(state, start);
    }

    // --- tour-date marking ---

    #[test]
    fn october_2025_marks_exactly_the_five_show_days() {
        let dates = crate::tour::dates();
        let cells = CalendarState::from_parts(2025, 9).grid(&dates);

        let marked: Vec<u32> = cells
            .iter()
            .filter(|c| c.tour_date)
            .map(|c| c.day)
            .collect();
        assert_eq!(marked, vec![15, 18, 22, 25, 28]);
    }

    #[test]
    fn november_2025_has_no_show_days_of_its_own() {
        let dates = crate::tour::dates();
        let november = CalendarState::from_parts(2025, 9).advance_month(MonthStep::Next);
        assert_eq!(november, CalendarState::from_parts(2025, 10));

        let cells = november.grid(&dates);
        assert!(cells.iter().filter(|c| !c.outside_month).all(|c| !c.tour_date));

        // November 2025 starts on a Saturday, so its grid leads with
        // Oct 26-31; the Oct 28 show still gets marked there.
        let leading_show = cells.iter().find(|c| c.tour_date).unwrap();
        assert_eq!(leading_show.date, NaiveDate::from_ymd_opt(2025, 10, 28).unwrap());
        assert!(leading_show.outside_month);
    }
}
