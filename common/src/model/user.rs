use serde::{Deserialize, Serialize};

/// Authenticated patient as returned by `/api/auth/me`, login and register.
///
/// The client never edits a user after sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// "Nombre Apellido", used as `nombre_paciente` on new bookings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre.trim(), self.apellido.trim())
            .trim()
            .to_string()
    }
}
