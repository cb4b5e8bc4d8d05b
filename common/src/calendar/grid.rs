use std::collections::HashMap;

use chrono::{Datelike, Months, NaiveDate};

use crate::format::month_name;
use crate::model::appointment::{Appointment, AppointmentStatus, date_key};

/// Maximum status dots drawn under a day number.
pub const MAX_INDICATORS: usize = 3;

/// The month currently displayed by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    /// Month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// `None` when `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    pub fn month(self) -> u32 {
        self.first.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    /// Empty cells before day 1: its weekday index with Sunday = 0.
    pub fn leading_blanks(self) -> usize {
        self.first.weekday().num_days_from_sunday() as usize
    }

    pub fn days_in_month(self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first).num_days() as u32,
            // Only reachable in December of chrono's maximum year.
            None => 31,
        }
    }

    /// Date of day number `day`, or `None` if the month has no such day.
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    /// "Octubre 2026"
    pub fn title(self) -> String {
        format!("{} {}", month_name(self.month()), self.year())
    }
}

/// One numbered cell of the month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub appointments: Vec<Appointment>,
    pub is_today: bool,
    pub is_past: bool,
    pub is_selected: bool,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Past days (today excluded) cannot be clicked.
    pub fn is_selectable(&self) -> bool {
        !self.is_past
    }

    /// Statuses of the first few appointments, for the dots under the number.
    pub fn indicators(&self) -> Vec<AppointmentStatus> {
        self.appointments
            .iter()
            .take(MAX_INDICATORS)
            .map(|a| a.estado)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridCell {
    Blank,
    Day(DayCell),
}

/// Renders `month` into cells: leading blanks, then one cell per day carrying
/// the appointments booked on it.
pub fn build_grid(
    month: MonthView,
    appointments: &[Appointment],
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<GridCell> {
    let mut by_day: HashMap<String, Vec<Appointment>> = HashMap::new();
    for appointment in appointments {
        if let Some(key) = appointment.date_key() {
            by_day.entry(key).or_default().push(appointment.clone());
        }
    }

    let blanks = month.leading_blanks();
    let days = month.days_in_month();
    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.extend(std::iter::repeat_n(GridCell::Blank, blanks));

    for day in 1..=days {
        let Some(date) = month.day(day) else { break };
        cells.push(GridCell::Day(DayCell {
            date,
            appointments: by_day.remove(&date_key(date)).unwrap_or_default(),
            is_today: date == today,
            is_past: date < today,
            is_selected: selected == Some(date),
        }));
    }
    cells
}

/// Appointments whose normalized date equals `date`, in list order.
pub fn appointments_on(date: NaiveDate, appointments: &[Appointment]) -> Vec<Appointment> {
    let key = date_key(date);
    appointments
        .iter()
        .filter(|a| a.date_key().as_deref() == Some(key.as_str()))
        .cloned()
        .collect()
}

/// A clicked day and everything booked on it.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySelection {
    pub date: NaiveDate,
    pub appointments: Vec<Appointment>,
}

impl DaySelection {
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

/// Resolves a click on day number `day` of `month`.
///
/// Returns `None` for past days and for day numbers the month does not have.
pub fn select_day(
    month: MonthView,
    day: u32,
    appointments: &[Appointment],
    today: NaiveDate,
) -> Option<DaySelection> {
    let date = month.day(day)?;
    if date < today {
        return None;
    }
    Some(DaySelection {
        date,
        appointments: appointments_on(date, appointments),
    })
}
