//! Request payloads sent to the REST API, plus the client-side form rules
//! that run before anything leaves the browser.

use serde::Serialize;

use crate::error::ValidationError;
use crate::model::appointment::{Appointment, AppointmentStatus, parse_date, parse_time};
use crate::model::service::find_service;
use crate::model::user::User;

/// Minimum password length accepted by the registration form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Body of `POST /api/auth/login`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        Ok(())
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct RegisterData {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
}

impl RegisterData {
    /// Checks the registration form. `confirm_password` is the second password
    /// field, which is never sent to the server.
    pub fn validate(&self, confirm_password: &str) -> Result<(), ValidationError> {
        if self.nombre.trim().is_empty() {
            return Err(ValidationError::MissingField("nombre"));
        }
        if self.apellido.trim().is_empty() {
            return Err(ValidationError::MissingField("apellido"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.password != confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }

    /// Trimmed copy ready to send; a blank phone number is omitted.
    pub fn normalized(&self) -> Self {
        Self {
            nombre: self.nombre.trim().to_string(),
            apellido: self.apellido.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            telefono: non_blank(self.telefono.as_deref()),
        }
    }
}

/// Body of `POST /api/appointments`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub nombre_paciente: String,
    pub telefono: String,
    pub email: String,
    pub servicio: String,
    pub fecha_cita: String,
    pub hora_cita: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
}

impl NewAppointment {
    /// The appointment as the server is expected to store it: no id yet and
    /// in the default `pendiente` state.
    pub fn pending(&self) -> Appointment {
        Appointment {
            id: None,
            usuario_id: None,
            nombre_paciente: self.nombre_paciente.clone(),
            telefono: self.telefono.clone(),
            email: self.email.clone(),
            servicio: self.servicio.clone(),
            fecha_cita: self.fecha_cita.clone(),
            hora_cita: self.hora_cita.clone(),
            estado: AppointmentStatus::Pendiente,
            mensaje: self.mensaje.clone(),
            created_at: None,
        }
    }
}

/// The fields the patient fills in the booking modal. Identity fields are
/// taken from the signed-in user when the request is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub servicio: String,
    pub fecha_cita: String,
    pub hora_cita: String,
    pub mensaje: String,
}

impl BookingForm {
    /// Empty form pre-filled with the selected day.
    pub fn for_date(fecha_cita: &str) -> Self {
        Self {
            fecha_cita: fecha_cita.to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.servicio.is_empty() {
            return Err(ValidationError::MissingField("servicio"));
        }
        if find_service(&self.servicio).is_none() {
            return Err(ValidationError::UnknownService(self.servicio.clone()));
        }
        if parse_date(&self.fecha_cita).is_none() {
            return Err(ValidationError::InvalidDate(self.fecha_cita.clone()));
        }
        if self.hora_cita.trim().is_empty() {
            return Err(ValidationError::MissingField("hora_cita"));
        }
        if parse_time(&self.hora_cita).is_none() {
            return Err(ValidationError::InvalidTime(self.hora_cita.clone()));
        }
        Ok(())
    }

    /// Validates the form and builds the request body for `user`.
    pub fn into_request(self, user: &User) -> Result<NewAppointment, ValidationError> {
        self.validate()?;
        Ok(NewAppointment {
            nombre_paciente: user.full_name(),
            telefono: user.telefono.clone().unwrap_or_default(),
            email: user.email.clone(),
            servicio: self.servicio,
            fecha_cita: self.fecha_cita,
            hora_cita: self.hora_cita.trim().to_string(),
            mensaje: non_blank(Some(&self.mensaje)),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
