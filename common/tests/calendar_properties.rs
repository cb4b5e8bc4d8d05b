//! Properties of the month grid and the upcoming-appointments buckets.

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

use common::calendar::{GridCell, MonthView, build_grid, group_upcoming, select_day};
use common::{Appointment, AppointmentStatus};

fn appointment(id: i64, date: NaiveDate, hour: u32, minute: u32, estado: AppointmentStatus) -> Appointment {
    Appointment {
        id: Some(id),
        usuario_id: Some(1),
        nombre_paciente: "Ana López".into(),
        telefono: String::new(),
        email: "ana@example.com".into(),
        servicio: "fisioterapia".into(),
        fecha_cita: date.format("%Y-%m-%d").to_string(),
        hora_cita: format!("{:02}:{:02}", hour, minute),
        estado,
        mensaje: None,
        created_at: None,
    }
}

fn status() -> impl Strategy<Value = AppointmentStatus> {
    prop_oneof![
        Just(AppointmentStatus::Pendiente),
        Just(AppointmentStatus::Confirmada),
        Just(AppointmentStatus::Cancelada),
        Just(AppointmentStatus::Completada),
    ]
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Appointments spread from two weeks before to two months after the base date.
fn appointments() -> impl Strategy<Value = Vec<Appointment>> {
    prop::collection::vec((-14i64..60, 0u32..24, 0u32..60, status()), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (offset, hour, minute, estado))| {
                let date = if offset >= 0 {
                    base_date() + Days::new(offset as u64)
                } else {
                    base_date() - Days::new(offset.unsigned_abs())
                };
                appointment(i as i64 + 1, date, hour, minute, estado)
            })
            .collect()
    })
}

#[test]
fn february_of_common_year_has_28_cells() {
    let month = MonthView::new(2026, 2).unwrap();
    let grid = build_grid(month, &[], base_date(), None);
    let days = grid.iter().filter(|c| matches!(c, GridCell::Day(_))).count();
    assert_eq!(days, 28);
}

#[test]
fn month_starting_on_wednesday_has_three_blanks() {
    // 2026-04-01 is a Wednesday.
    let month = MonthView::new(2026, 4).unwrap();
    let grid = build_grid(month, &[], base_date(), None);
    let blanks = grid.iter().take_while(|c| **c == GridCell::Blank).count();
    assert_eq!(blanks, 3);
}

#[test]
fn grid_flags_today_past_and_selection() {
    let today = base_date();
    let month = MonthView::containing(today);
    let selected = NaiveDate::from_ymd_opt(2026, 10, 21);
    let list = vec![appointment(1, today, 9, 0, AppointmentStatus::Confirmada)];
    let days: Vec<_> = build_grid(month, &list, today, selected)
        .into_iter()
        .filter_map(|c| match c {
            GridCell::Day(day) => Some(day),
            GridCell::Blank => None,
        })
        .collect();

    assert!(days[17].is_past && !days[17].is_selectable());
    assert!(days[18].is_today && !days[18].is_past);
    assert_eq!(days[18].indicators(), vec![AppointmentStatus::Confirmada]);
    assert!(days[20].is_selected);
    assert!(days[19].appointments.is_empty());
}

#[test]
fn past_day_cannot_be_selected() {
    let month = MonthView::containing(base_date());
    assert_eq!(select_day(month, 18, &[], base_date()), None);
    assert!(select_day(month, 19, &[], base_date()).is_some());
    assert_eq!(select_day(month, 32, &[], base_date()), None);
}

proptest! {
    #[test]
    fn grid_shape_matches_calendar(year in 1900i32..2200, month in 1u32..=12) {
        let view = MonthView::new(year, month).unwrap();
        let grid = build_grid(view, &[], base_date(), None);
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

        let blanks = grid.iter().take_while(|c| **c == GridCell::Blank).count();
        prop_assert_eq!(blanks, first.weekday().num_days_from_sunday() as usize);

        let days: Vec<u32> = grid
            .iter()
            .filter_map(|c| match c {
                GridCell::Day(day) => Some(day.day()),
                GridCell::Blank => None,
            })
            .collect();
        let expected = (1..=31)
            .take_while(|d| NaiveDate::from_ymd_opt(year, month, *d).is_some())
            .count();
        prop_assert_eq!(days.len(), expected);
        prop_assert_eq!(days.first().copied(), Some(1));
        prop_assert_eq!(grid.len(), blanks + expected);
    }

    #[test]
    fn buckets_partition_active_upcoming(list in appointments()) {
        let today = base_date();
        let buckets = group_upcoming(&list, today);
        let eligible: Vec<&Appointment> = list
            .iter()
            .filter(|a| a.is_active() && a.date().is_some_and(|d| d >= today))
            .collect();

        prop_assert_eq!(buckets.total(), eligible.len());
        for a in &eligible {
            let hits = [&buckets.today, &buckets.tomorrow, &buckets.this_week, &buckets.later]
                .iter()
                .filter(|b| b.iter().any(|x| x.id == a.id))
                .count();
            prop_assert_eq!(hits, 1);
        }
        for bucket in [&buckets.today, &buckets.tomorrow, &buckets.this_week, &buckets.later] {
            prop_assert!(bucket.iter().all(|a| a.is_active()));
        }

        let tomorrow = today + Days::new(1);
        prop_assert!(buckets.today.iter().all(|a| a.date() == Some(today)));
        prop_assert!(buckets.tomorrow.iter().all(|a| a.date() == Some(tomorrow)));
        let week_end = today + Days::new(7);
        let within_week = buckets
            .this_week
            .iter()
            .filter_map(|a| a.date())
            .all(|d| d > tomorrow && d < week_end);
        prop_assert!(within_week, "this_week holds a date outside days 2..=6");
        prop_assert!(buckets.later.iter().all(|a| a.date().unwrap() >= today + Days::new(7)));
    }

    #[test]
    fn buckets_are_sorted_by_date_then_time(list in appointments()) {
        let buckets = group_upcoming(&list, base_date());
        for bucket in [&buckets.today, &buckets.tomorrow, &buckets.this_week, &buckets.later] {
            for pair in bucket.windows(2) {
                let a = (pair[0].date(), pair[0].time());
                let b = (pair[1].date(), pair[1].time());
                prop_assert!(a <= b);
            }
        }
    }

    #[test]
    fn selecting_a_day_is_idempotent(list in appointments(), day in 1u32..=31) {
        let month = MonthView::containing(base_date());
        let first = select_day(month, day, &list, base_date());
        let second = select_day(month, day, &list, base_date());
        prop_assert_eq!(&first, &second);
        if let Some(selection) = first {
            let key = selection.date_key();
            prop_assert!(selection.appointments.iter().all(|a| a.fecha_cita == key));
            let expected = list.iter().filter(|a| a.fecha_cita == key).count();
            prop_assert_eq!(selection.appointments.len(), expected);
        }
    }
}
