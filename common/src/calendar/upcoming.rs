use chrono::{Days, NaiveDate, NaiveTime};

use crate::model::appointment::Appointment;

/// Days ahead of today where the "later" bucket begins.
pub const WEEK_HORIZON_DAYS: u64 = 7;

/// Active appointments from today on, split into four disjoint windows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpcomingBuckets {
    pub today: Vec<Appointment>,
    pub tomorrow: Vec<Appointment>,
    /// Two to six days from today.
    pub this_week: Vec<Appointment>,
    /// Seven or more days from today.
    pub later: Vec<Appointment>,
}

impl UpcomingBuckets {
    pub fn total(&self) -> usize {
        self.today.len() + self.tomorrow.len() + self.this_week.len() + self.later.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Buckets `appointments` relative to `today` (the local calendar date).
///
/// Cancelled and completed appointments are left out, as are appointments
/// dated before today or whose date cannot be read. Each bucket is sorted by
/// date, then time.
pub fn group_upcoming(appointments: &[Appointment], today: NaiveDate) -> UpcomingBuckets {
    let tomorrow = today.checked_add_days(Days::new(1));
    let horizon = today.checked_add_days(Days::new(WEEK_HORIZON_DAYS));

    let mut dated: Vec<(NaiveDate, Option<NaiveTime>, &Appointment)> = appointments
        .iter()
        .filter(|a| a.is_active())
        .filter_map(|a| a.date().map(|d| (d, a.time(), a)))
        .filter(|(d, _, _)| *d >= today)
        .collect();
    dated.sort_by(|a, b| (a.0, a.1, &a.2.hora_cita).cmp(&(b.0, b.1, &b.2.hora_cita)));

    let mut buckets = UpcomingBuckets::default();
    for (date, _, appointment) in dated {
        let bucket = if date == today {
            &mut buckets.today
        } else if Some(date) == tomorrow {
            &mut buckets.tomorrow
        } else if horizon.is_none_or(|h| date < h) {
            &mut buckets.this_week
        } else {
            &mut buckets.later
        };
        bucket.push(appointment.clone());
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::appointment::AppointmentStatus;

    fn appointment(id: i64, fecha: &str, hora: &str, estado: AppointmentStatus) -> Appointment {
        Appointment {
            id: Some(id),
            usuario_id: Some(1),
            nombre_paciente: "Ana López".into(),
            telefono: String::new(),
            email: "ana@example.com".into(),
            servicio: "fisioterapia".into(),
            fecha_cita: fecha.into(),
            hora_cita: hora.into(),
            estado,
            mensaje: None,
            created_at: None,
        }
    }

    fn ids(list: &[Appointment]) -> Vec<i64> {
        list.iter().filter_map(|a| a.id).collect()
    }

    #[test]
    fn buckets_by_distance_from_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let list = vec![
            appointment(1, "2026-10-19", "09:00", AppointmentStatus::Pendiente),
            appointment(2, "2026-10-20", "09:00", AppointmentStatus::Confirmada),
            appointment(3, "2026-10-21", "09:00", AppointmentStatus::Pendiente),
            appointment(4, "2026-10-25", "09:00", AppointmentStatus::Pendiente),
            appointment(5, "2026-10-26", "09:00", AppointmentStatus::Pendiente),
            appointment(6, "2026-12-01", "09:00", AppointmentStatus::Pendiente),
        ];
        let buckets = group_upcoming(&list, today);
        assert_eq!(ids(&buckets.today), vec![1]);
        assert_eq!(ids(&buckets.tomorrow), vec![2]);
        assert_eq!(ids(&buckets.this_week), vec![3, 4]);
        assert_eq!(ids(&buckets.later), vec![5, 6]);
    }

    #[test]
    fn past_and_closed_appointments_are_dropped() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let list = vec![
            appointment(1, "2026-10-18", "09:00", AppointmentStatus::Pendiente),
            appointment(2, "2026-10-19", "09:00", AppointmentStatus::Cancelada),
            appointment(3, "2026-10-20", "09:00", AppointmentStatus::Completada),
            appointment(4, "pronto", "09:00", AppointmentStatus::Pendiente),
        ];
        assert!(group_upcoming(&list, today).is_empty());
    }

    #[test]
    fn sorts_by_time_within_a_day() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let list = vec![
            appointment(1, "2026-10-19", "16:00", AppointmentStatus::Pendiente),
            appointment(2, "2026-10-19", "08:30", AppointmentStatus::Pendiente),
            appointment(3, "2026-10-19", "12:15", AppointmentStatus::Confirmada),
        ];
        assert_eq!(ids(&group_upcoming(&list, today).today), vec![2, 3, 1]);
    }
}
