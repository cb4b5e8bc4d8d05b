//! Side panel listing upcoming appointments grouped by proximity.

use chrono::NaiveDate;
use common::calendar::{group_upcoming, UpcomingBuckets};
use common::format::{format_short_date, format_time_12h, scheduled_count};
use common::model::service::service_label;
use common::Appointment;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UpcomingProps {
    pub appointments: Vec<Appointment>,
    pub today: NaiveDate,
    #[prop_or_default]
    pub refreshing: bool,
    pub on_refresh: Callback<()>,
}

pub struct UpcomingAppointments {
    buckets: UpcomingBuckets,
}

impl Component for UpcomingAppointments {
    type Message = ();
    type Properties = UpcomingProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            buckets: group_upcoming(&props.appointments, props.today),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.appointments != old_props.appointments || props.today != old_props.today {
            self.buckets = group_upcoming(&props.appointments, props.today);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_refresh = props.on_refresh.clone();
        let total = self.buckets.total();

        html! {
            <div class="upcoming">
                <div class="upcoming-header">
                    <div>
                        <h2>{ "Próximas Citas" }</h2>
                        <p>{ scheduled_count(total) }</p>
                    </div>
                    <button class="icon-btn" title="Actualizar" disabled={props.refreshing}
                            onclick={Callback::from(move |_| on_refresh.emit(()))}>
                        <i class="material-icons">{ "refresh" }</i>
                    </button>
                </div>
                if total == 0 {
                    <div class="upcoming-empty">
                        <i class="material-icons">{ "event_available" }</i>
                        <p>{ "No tienes citas programadas" }</p>
                    </div>
                } else {
                    { section("Hoy", "today", &self.buckets.today) }
                    { section("Mañana", "tomorrow", &self.buckets.tomorrow) }
                    { section("Esta semana", "this-week", &self.buckets.this_week) }
                    { section("Más adelante", "later", &self.buckets.later) }
                }
            </div>
        }
    }
}

fn section(title: &str, category: &str, appointments: &[Appointment]) -> Html {
    if appointments.is_empty() {
        return Html::default();
    }
    html! {
        <section class={classes!("upcoming-section", category.to_string())}>
            <h3>
                { title.to_string() }
                <span class="count">{ appointments.len() }</span>
            </h3>
            { for appointments.iter().map(card) }
        </section>
    }
}

fn card(appointment: &Appointment) -> Html {
    let date = appointment
        .date()
        .map(format_short_date)
        .unwrap_or_else(|| appointment.fecha_cita.clone());
    html! {
        <div class="appointment-card" key={appointment.id.map(|id| id.to_string()).unwrap_or_default()}>
            <div class="appointment-card-title">
                <h4>{ service_label(&appointment.servicio).to_string() }</h4>
                <span class={classes!("badge", appointment.estado.css_class())}>
                    { appointment.estado.label() }
                </span>
            </div>
            <div class="appointment-card-when">
                <span><i class="material-icons">{ "calendar_today" }</i>{ date }</span>
                <span><i class="material-icons">{ "schedule" }</i>{ format_time_12h(&appointment.hora_cita) }</span>
            </div>
            if let Some(mensaje) = &appointment.mensaje {
                <p class="appointment-card-note">{ mensaje.clone() }</p>
            }
        </div>
    }
}
