//! Appointment model.
//!
//! `fecha_cita` and `hora_cita` travel as strings on the wire. Every date
//! comparison in the client goes through [`Appointment::date`], which reads the
//! calendar fields of the string directly instead of round-tripping through a
//! UTC timestamp, so a booking never drifts to the neighbouring day.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Date format of `fecha_cita`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lifecycle state of an appointment. Transitions are owned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pendiente,
    Confirmada,
    Cancelada,
    Completada,
}

impl AppointmentStatus {
    /// Every status, in lifecycle order. Drives the calendar legend.
    pub const ALL: [AppointmentStatus; 4] = [
        Self::Pendiente,
        Self::Confirmada,
        Self::Cancelada,
        Self::Completada,
    ];

    /// Cancelled and completed appointments are closed: they cannot be
    /// cancelled again and never show up as upcoming.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pendiente | Self::Confirmada)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Confirmada => "Confirmada",
            Self::Cancelada => "Cancelada",
            Self::Completada => "Completada",
        }
    }

    /// CSS modifier used by badges and calendar dots.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pendiente => "status-pending",
            Self::Confirmada => "status-confirmed",
            Self::Cancelada => "status-cancelled",
            Self::Completada => "status-completed",
        }
    }
}

/// A booking as returned by `GET /api/appointments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_id: Option<i64>,
    pub nombre_paciente: String,
    pub telefono: String,
    pub email: String,
    pub servicio: String,
    pub fecha_cita: String,
    pub hora_cita: String,
    #[serde(default)]
    pub estado: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Appointment {
    /// Calendar date of the appointment.
    ///
    /// Only the leading `YYYY-MM-DD` is read, so values such as
    /// `2026-10-19T00:00:00.000Z` normalize to the same day as `2026-10-19`.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.fecha_cita)
    }

    /// Normalized `YYYY-MM-DD` key, or `None` when `fecha_cita` is not a date.
    pub fn date_key(&self) -> Option<String> {
        self.date().map(date_key)
    }

    /// Start time, accepting both `HH:MM` and `HH:MM:SS`.
    pub fn time(&self) -> Option<NaiveTime> {
        parse_time(&self.hora_cita)
    }

    pub fn is_active(&self) -> bool {
        self.estado.is_active()
    }
}

/// Key used to match appointments to calendar days.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let head = value.trim().get(..10)?;
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}
