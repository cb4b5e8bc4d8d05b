//! Update function for the day modal.
//!
//! Form edits go straight into `ModalState`. Submissions and cancellations
//! run through `common::booking` on the session gate. The dashboard refresh
//! and the cancel-failure toast are fired from the spawned task itself, since
//! the modal may be closed before the request settles; the messages only
//! update the modal's own state.

use common::booking::{self, AUTO_CLOSE_DELAY_MS};
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{confirm, show_toast};
use crate::session::session_of;

use super::messages::Msg;
use super::state::CalendarModal;

const CANCEL_PROMPT: &str = "¿Estás seguro de que deseas cancelar esta cita?";

pub fn update(component: &mut CalendarModal, ctx: &Context<CalendarModal>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::SetService(servicio) => {
            component.modal.form_mut().servicio = servicio;
            true
        }
        Msg::SetTime(hora) => {
            component.modal.form_mut().hora_cita = hora;
            false
        }
        Msg::SetMessage(mensaje) => {
            component.modal.form_mut().mensaje = mensaje;
            false
        }
        Msg::ShowCreate => {
            component.modal.switch_to_create();
            true
        }
        Msg::ShowList => component.modal.switch_to_view(),
        Msg::Submit => {
            let Some(session) = session_of(ctx) else {
                debug!("calendar modal rendered outside a session context");
                return false;
            };
            let Some(form) = component.modal.begin_submit() else {
                return false;
            };
            let gate = session.gate.clone();
            let user = props.user.clone();
            let on_changed = props.on_changed.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let write = booking::submit(&gate, &user, form);
                match booking::notify_on_success(write, || on_changed.emit(())).await {
                    Ok(_) => link.send_message(Msg::Booked),
                    Err(e) => link.send_message(Msg::BookingFailed(e.to_string())),
                }
            });
            true
        }
        Msg::Booked => {
            component.modal.submit_succeeded();
            let link = ctx.link().clone();
            component._close_timer = Some(Timeout::new(AUTO_CLOSE_DELAY_MS, move || {
                link.send_message(Msg::Close)
            }));
            true
        }
        Msg::BookingFailed(message) => {
            warn!("booking failed: {}", message);
            component.modal.submit_failed(message);
            true
        }
        Msg::Cancel(id) => {
            let Some(session) = session_of(ctx) else {
                return false;
            };
            if !confirm(CANCEL_PROMPT) || !component.modal.begin_cancel(id) {
                return false;
            }
            let gate = session.gate.clone();
            let on_changed = props.on_changed.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let write = booking::cancel(&gate, id);
                match booking::notify_on_success(write, || on_changed.emit(())).await {
                    Ok(()) => link.send_message(Msg::Cancelled),
                    Err(e) => {
                        warn!("error cancelling appointment {}: {}", id, e);
                        show_toast("Error al cancelar la cita");
                        link.send_message(Msg::CancelFailed)
                    }
                }
            });
            true
        }
        Msg::Cancelled => {
            component.modal.cancel_finished();
            props.on_close.emit(());
            false
        }
        Msg::CancelFailed => {
            component.modal.cancel_finished();
            true
        }
        Msg::Close => {
            component._close_timer = None;
            props.on_close.emit(());
            false
        }
    }
}
