//! Spanish display helpers shared by the calendar, the modal and the
//! upcoming-appointments panel.

use chrono::{Datelike, NaiveDate};

use crate::model::appointment::parse_time;

const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Column headers of the calendar, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];

const WEEKDAYS_LONG: [&str; 7] = [
    "domingo",
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
];

/// Capitalized month name for `month` in 1..=12; empty otherwise.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// `"14:30"` → `"2:30 PM"`. Unreadable input is returned unchanged.
pub fn format_time_12h(hora: &str) -> String {
    match parse_time(hora) {
        Some(time) => time.format("%-I:%M %p").to_string(),
        None => hora.to_string(),
    }
}

/// `"lunes, 19 de octubre de 2026"`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        WEEKDAYS_LONG[date.weekday().num_days_from_sunday() as usize],
        date.day(),
        month_name(date.month()).to_lowercase(),
        date.year()
    )
}

/// `"lun 19 oct"`
pub fn format_short_date(date: NaiveDate) -> String {
    let weekday: String = WEEKDAYS_LONG[date.weekday().num_days_from_sunday() as usize]
        .chars()
        .take(3)
        .collect();
    let month: String = month_name(date.month())
        .to_lowercase()
        .chars()
        .take(3)
        .collect();
    format!("{} {} {}", weekday, date.day(), month)
}

/// Greeting shown on the dashboard header for the local hour (0..=23).
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "¡Buenos días"
    } else if hour < 18 {
        "¡Buenas tardes"
    } else {
        "¡Buenas noches"
    }
}

/// "1 consulta programada" / "3 consultas programadas"
pub fn scheduled_count(count: usize) -> String {
    if count == 1 {
        "1 consulta programada".to_string()
    } else {
        format!("{} consultas programadas", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(format_time_12h("00:05"), "12:05 AM");
        assert_eq!(format_time_12h("12:00"), "12:00 PM");
        assert_eq!(format_time_12h("14:30"), "2:30 PM");
        assert_eq!(format_time_12h("tarde"), "tarde");
    }

    #[test]
    fn long_and_short_dates() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_long_date(date), "lunes, 19 de octubre de 2026");
        assert_eq!(format_short_date(date), "lun 19 oct");
    }

    #[test]
    fn greeting_boundaries() {
        assert_eq!(greeting(11), "¡Buenos días");
        assert_eq!(greeting(12), "¡Buenas tardes");
        assert_eq!(greeting(18), "¡Buenas noches");
    }

    #[test]
    fn month_name_out_of_range() {
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }
}
