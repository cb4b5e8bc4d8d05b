//! Patient dashboard.
//!
//! `DashboardPage` owns the appointment list. The calendar, the upcoming
//! panel and the day modal get it through props and report back through
//! callbacks; after any booking or cancellation the page fetches the whole
//! list again.

mod calendar;
mod calendar_modal;
mod header;
mod upcoming;

use chrono::NaiveDate;
use common::booking::{self, AppointmentBook, RefreshTicket};
use common::calendar::DaySelection;
use common::{Appointment, User};
use log::debug;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{local_today, spinner};
use crate::session::session_of;
use calendar::CalendarComponent;
use calendar_modal::CalendarModal;
use upcoming::UpcomingAppointments;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub user: User,
}

pub enum Msg {
    Refresh,
    Loaded(RefreshTicket, Vec<Appointment>),
    DaySelected(DaySelection),
    CloseModal,
    Logout,
}

pub struct DashboardPage {
    book: AppointmentBook,
    selection: Option<DaySelection>,
    today: NaiveDate,
}

impl Component for DashboardPage {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Refresh);
        Self {
            book: AppointmentBook::new(),
            selection: None,
            today: local_today(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Refresh => {
                let Some(session) = session_of(ctx) else {
                    debug!("dashboard rendered outside a session context");
                    return false;
                };
                let ticket = self.book.start_refresh();
                let gate = session.gate.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let appointments = booking::load(&gate).await;
                    link.send_message(Msg::Loaded(ticket, appointments));
                });
                true
            }
            Msg::Loaded(ticket, appointments) => {
                if !self.book.replace(ticket, appointments) {
                    debug!("dropping appointment list from a superseded fetch");
                    return false;
                }
                self.today = local_today();
                true
            }
            Msg::DaySelected(selection) => {
                self.selection = Some(selection);
                true
            }
            Msg::CloseModal => {
                self.selection = None;
                true
            }
            Msg::Logout => {
                if let Some(session) = session_of(ctx) {
                    session.logout();
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let user = &ctx.props().user;

        let body = if self.book.has_loaded() {
            html! {
                <div class="dashboard-grid">
                    <div class="dashboard-calendar">
                        <CalendarComponent
                            appointments={self.book.appointments().to_vec()}
                            today={self.today}
                            on_select={link.callback(Msg::DaySelected)} />
                    </div>
                    <aside class="dashboard-upcoming">
                        <UpcomingAppointments
                            appointments={self.book.appointments().to_vec()}
                            today={self.today}
                            refreshing={self.book.is_loading()}
                            on_refresh={link.callback(|_| Msg::Refresh)} />
                    </aside>
                </div>
            }
        } else {
            spinner("Cargando calendario...")
        };

        html! {
            <div class="dashboard">
                { header::dashboard_header(user, &self.book, self.today, link.callback(|_| Msg::Logout)) }
                { body }
                if let Some(selection) = &self.selection {
                    <CalendarModal
                        selection={selection.clone()}
                        user={user.clone()}
                        on_close={link.callback(|_| Msg::CloseModal)}
                        on_changed={link.callback(|_| Msg::Refresh)} />
                }
            </div>
        }
    }
}
