//! Date arithmetic behind the dashboard: the month grid and the
//! upcoming-appointments buckets.
//!
//! All functions take "today" as a parameter instead of reading the clock,
//! so they are pure and the frontend decides which clock to use.

pub mod grid;
pub mod upcoming;

pub use grid::{DayCell, DaySelection, GridCell, MonthView, appointments_on, build_grid, select_day};
pub use upcoming::{UpcomingBuckets, group_upcoming};
