//! Error types.
//!
//! `ApiError` describes what went wrong on the wire. The higher-level errors
//! map it onto the few outcomes the UI actually distinguishes; their `Display`
//! strings are the Spanish messages shown to the patient.

use thiserror::Error;

/// Transport-level failure of a REST call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Form rule violated before any request was issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Completa todos los campos obligatorios")]
    MissingField(&'static str),

    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,

    #[error("La contraseña debe tener al menos {min} caracteres")]
    PasswordTooShort { min: usize },

    #[error("Selecciona un servicio válido")]
    UnknownService(String),

    #[error("Selecciona una fecha válida")]
    InvalidDate(String),

    #[error("Indica una hora válida")]
    InvalidTime(String),
}

/// Failure of login or registration.
///
/// Bad credentials, a duplicate email and a dead network all collapse into
/// the same generic message; the detail goes to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Credenciales incorrectas. Verifica tu email y contraseña.")]
    LoginFailed,

    #[error("Error al crear la cuenta. El email podría estar en uso.")]
    RegistrationFailed,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Failure of an appointment write (create or cancel).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Tu sesión ha expirado. Inicia sesión de nuevo.")]
    NotAuthenticated,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("No se pudo completar la operación. Por favor intenta de nuevo.")]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_passes_through_auth_error() {
        let err = AuthError::from(ValidationError::PasswordTooShort { min: 6 });
        assert_eq!(err.to_string(), "La contraseña debe tener al menos 6 caracteres");
    }

    #[test]
    fn api_error_exposes_status() {
        assert_eq!(ApiError::Status(404).status(), Some(404));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }
}
