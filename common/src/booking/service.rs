use std::future::Future;

use log::{info, warn};

use crate::api::ClinicApi;
use crate::error::BookingError;
use crate::model::appointment::Appointment;
use crate::model::user::User;
use crate::requests::BookingForm;
use crate::session::{AuthGate, CredentialStore};

/// Fetches the signed-in patient's appointments.
///
/// Never fails: a missing token or any API error is logged and yields an
/// empty list, so the dashboard still renders.
pub async fn load<A: ClinicApi, S: CredentialStore>(gate: &AuthGate<A, S>) -> Vec<Appointment> {
    let Some(token) = gate.bearer() else {
        warn!("no session token; showing no appointments");
        return Vec::new();
    };
    match gate.api().list_appointments(&token).await {
        Ok(appointments) => appointments,
        Err(e) => {
            warn!("error loading appointments: {}", e);
            Vec::new()
        }
    }
}

/// Validates `form`, fills in the patient's identity and creates the booking.
pub async fn submit<A: ClinicApi, S: CredentialStore>(
    gate: &AuthGate<A, S>,
    user: &User,
    form: BookingForm,
) -> Result<Appointment, BookingError> {
    let request = form.into_request(user)?;
    let token = gate.bearer().ok_or(BookingError::NotAuthenticated)?;
    let created = gate.api().create_appointment(&token, &request).await?;
    info!(
        "appointment booked for {} {}",
        request.fecha_cita, request.hora_cita
    );
    Ok(created)
}

/// Asks the server to cancel appointment `id`. The caller refreshes its list
/// only on success.
pub async fn cancel<A: ClinicApi, S: CredentialStore>(
    gate: &AuthGate<A, S>,
    id: i64,
) -> Result<(), BookingError> {
    let token = gate.bearer().ok_or(BookingError::NotAuthenticated)?;
    gate.api().cancel_appointment(&token, id).await?;
    info!("appointment {} cancelled", id);
    Ok(())
}

/// Awaits a booking write and calls `on_changed` once it has succeeded.
///
/// The hook runs in the task that issued the request, so the dashboard
/// still re-fetches when the view that started the write is gone by then.
pub async fn notify_on_success<T, F, C>(write: F, on_changed: C) -> Result<T, BookingError>
where
    F: Future<Output = Result<T, BookingError>>,
    C: FnOnce(),
{
    let result = write.await;
    if result.is_ok() {
        on_changed();
    }
    result
}
