//! Contract of the clinic REST API.
//!
//! The server is an external collaborator. This trait lists the only calls
//! the client makes. Unauthenticated calls take no token parameter, so a
//! bearer token cannot leak into them.
//!
//! The futures are not `Send`: the browser runs everything on one thread.

use crate::error::ApiError;
use crate::model::appointment::Appointment;
use crate::model::user::User;
use crate::requests::{LoginRequest, NewAppointment, RegisterData};
use crate::responses::AuthResponse;

#[allow(async_fn_in_trait)]
pub trait ClinicApi {
    /// `POST /api/auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /api/auth/register`
    async fn register(&self, request: &RegisterData) -> Result<AuthResponse, ApiError>;

    /// `GET /api/auth/me`
    async fn me(&self, token: &str) -> Result<User, ApiError>;

    /// `GET /api/appointments`, scoped to the token's owner.
    async fn list_appointments(&self, token: &str) -> Result<Vec<Appointment>, ApiError>;

    /// `POST /api/appointments`
    async fn create_appointment(
        &self,
        token: &str,
        request: &NewAppointment,
    ) -> Result<Appointment, ApiError>;

    /// `DELETE /api/appointments/{id}`
    async fn cancel_appointment(&self, token: &str, id: i64) -> Result<(), ApiError>;
}
