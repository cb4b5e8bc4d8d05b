//! View rendering for the day modal: the list of the day's appointments or
//! the booking form, inside a `ModalSheet`.

use common::booking::{ModalMode, SubmitPhase};
use common::format::{format_long_date, format_time_12h};
use common::model::service::service_label;
use common::{Appointment, SERVICES};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::helpers::{input_value, select_value, textarea_value};
use crate::components::overlay::ModalSheet;

use super::messages::Msg;
use super::state::CalendarModal;

pub fn view(component: &CalendarModal, ctx: &Context<CalendarModal>) -> Html {
    let link = ctx.link();
    let modal = &component.modal;
    let date = format_long_date(modal.selection().date);

    let body = match modal.mode() {
        ModalMode::View => build_list(component, link),
        ModalMode::Create => build_form(component, link),
    };

    html! {
        <ModalSheet on_close={link.callback(|_| Msg::Close)}>
            <div class="calendar-modal">
                <div class="calendar-modal-header">
                    <i class="material-icons">{ "event" }</i>
                    <div>
                        <h2>
                            { match modal.mode() {
                                ModalMode::View => "Citas del día",
                                ModalMode::Create => "Agendar cita",
                            } }
                        </h2>
                        <p class="calendar-modal-date">{ date }</p>
                    </div>
                </div>
                { body }
            </div>
        </ModalSheet>
    }
}

fn build_list(component: &CalendarModal, link: &Scope<CalendarModal>) -> Html {
    html! {
        <div class="calendar-modal-list">
            { for component.modal.appointments().iter().map(|a| build_item(component, a, link)) }
            <button class="btn-primary" onclick={link.callback(|_| Msg::ShowCreate)}>
                <i class="material-icons">{ "add" }</i>
                { "Agendar otra cita este día" }
            </button>
        </div>
    }
}

fn build_item(component: &CalendarModal, appointment: &Appointment, link: &Scope<CalendarModal>) -> Html {
    let modal = &component.modal;
    let cancel = match appointment.id {
        Some(id) if appointment.is_active() => {
            let busy = modal.cancelling() == Some(id);
            html! {
                <button class="btn-cancel" disabled={!modal.can_cancel(appointment)}
                        onclick={link.callback(move |_| Msg::Cancel(id))}>
                    { if busy { "Cancelando..." } else { "Cancelar" } }
                </button>
            }
        }
        _ => Html::default(),
    };

    html! {
        <div class="calendar-modal-item">
            <div class="calendar-modal-item-head">
                <strong>{ service_label(&appointment.servicio).to_string() }</strong>
                <span class={classes!("badge", appointment.estado.css_class())}>
                    { appointment.estado.label() }
                </span>
            </div>
            <p>
                <i class="material-icons">{ "schedule" }</i>
                { format_time_12h(&appointment.hora_cita) }
            </p>
            if let Some(mensaje) = &appointment.mensaje {
                <p class="calendar-modal-note">{ mensaje.clone() }</p>
            }
            { cancel }
        </div>
    }
}

fn build_form(component: &CalendarModal, link: &Scope<CalendarModal>) -> Html {
    let modal = &component.modal;
    let form = modal.form();
    let submitting = modal.is_submitting();

    if *modal.phase() == SubmitPhase::Succeeded {
        return html! {
            <div class="calendar-modal-success">
                <i class="material-icons">{ "check_circle" }</i>
                <h3>{ "¡Cita agendada!" }</h3>
                <p>{ "Te contactaremos para confirmar tu cita." }</p>
            </div>
        };
    }

    html! {
        <form class="calendar-modal-form" onsubmit={link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        })}>
            if let Some(error) = modal.error() {
                <div class="alert alert-error">{ error.to_string() }</div>
            }

            <label for="booking-service">{ "Servicio" }</label>
            <select id="booking-service" required=true
                    onchange={link.callback(|e: Event| Msg::SetService(select_value(&e)))}>
                <option value="" selected={form.servicio.is_empty()}>{ "Selecciona un servicio" }</option>
                { for SERVICES.iter().map(|s| html! {
                    <option value={s.id} selected={form.servicio == s.id}>{ s.name }</option>
                }) }
            </select>

            <label for="booking-time">{ "Hora" }</label>
            <input id="booking-time" type="time" required=true
                   value={form.hora_cita.clone()}
                   oninput={link.callback(|e: InputEvent| Msg::SetTime(input_value(&e)))} />

            <label for="booking-message">{ "Mensaje (opcional)" }</label>
            <textarea id="booking-message" rows="3"
                      placeholder="Cuéntanos el motivo de tu consulta"
                      value={form.mensaje.clone()}
                      oninput={link.callback(|e: InputEvent| Msg::SetMessage(textarea_value(&e)))} />

            <div class="calendar-modal-actions">
                if modal.can_switch_to_view() {
                    <button type="button" class="btn-secondary" disabled={submitting}
                            onclick={link.callback(|_| Msg::ShowList)}>
                        { "Ver Citas" }
                    </button>
                }
                <button type="submit" class="btn-primary" disabled={submitting}>
                    { if submitting { "Agendando..." } else { "Agendar Cita" } }
                </button>
            </div>
        </form>
    }
}
