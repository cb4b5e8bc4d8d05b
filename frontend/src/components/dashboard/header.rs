use chrono::NaiveDate;
use common::booking::AppointmentBook;
use common::calendar::group_upcoming;
use common::format::greeting;
use common::{AppointmentStatus, User};
use yew::prelude::*;

use crate::components::helpers::local_hour;

fn stat_card(icon: &str, value: usize, label: &str) -> Html {
    html! {
        <div class="stat-card">
            <i class="material-icons">{ icon.to_string() }</i>
            <div>
                <strong>{ value }</strong>
                <span>{ label.to_string() }</span>
            </div>
        </div>
    }
}

/// Greeting, logout button and a few counters over the patient's bookings.
pub fn dashboard_header(
    user: &User,
    book: &AppointmentBook,
    today: NaiveDate,
    on_logout: Callback<MouseEvent>,
) -> Html {
    let appointments = book.appointments();
    let upcoming = group_upcoming(appointments, today).total();
    let pending = appointments
        .iter()
        .filter(|a| a.estado == AppointmentStatus::Pendiente)
        .count();

    html! {
        <header class="dashboard-header">
            <div class="dashboard-greeting">
                <h1>{ format!("{}, {}!", greeting(local_hour()), user.nombre) }</h1>
                <p>{ "Tu salud es nuestra prioridad" }</p>
            </div>
            <button class="btn-logout" onclick={on_logout}>
                <i class="material-icons">{ "logout" }</i>
                { "Cerrar sesión" }
            </button>
            <div class="stat-cards">
                { stat_card("event", upcoming, "Próximas citas") }
                { stat_card("schedule", pending, "Pendientes") }
                { stat_card("description", appointments.len(), "Total de citas") }
            </div>
        </header>
    }
}
