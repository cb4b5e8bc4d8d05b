//! View rendering for the month calendar.
//!
//! Header with month navigation, a row of weekday initials and the day grid.
//! Past days are rendered disabled; each day shows up to three dots colored
//! by appointment status.

use common::calendar::{build_grid, DayCell, GridCell};
use common::format::WEEKDAY_HEADERS;
use common::AppointmentStatus;
use yew::html::Scope;
use yew::prelude::*;

use super::day_grid::DayGrid;
use super::messages::Msg;
use super::state::CalendarComponent;

pub fn view(component: &CalendarComponent, ctx: &Context<CalendarComponent>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let cells = build_grid(
        component.month,
        &props.appointments,
        props.today,
        component.selected,
    );

    html! {
        <div class="calendar">
            { build_header(component, link) }
            <DayGrid class="calendar-weekdays">
                { for WEEKDAY_HEADERS.iter().map(|d| html! { <div class="calendar-weekday">{ *d }</div> }) }
            </DayGrid>
            <DayGrid class="calendar-days">
                { for cells.iter().map(|cell| build_cell(cell, link)) }
            </DayGrid>
            { build_legend() }
        </div>
    }
}

fn build_header(component: &CalendarComponent, link: &Scope<CalendarComponent>) -> Html {
    html! {
        <div class="calendar-header">
            <button class="icon-btn" title="Mes anterior" onclick={link.callback(|_| Msg::PreviousMonth)}>
                <i class="material-icons">{ "chevron_left" }</i>
            </button>
            <h2>{ component.month.title() }</h2>
            <button class="icon-btn" title="Mes siguiente" onclick={link.callback(|_| Msg::NextMonth)}>
                <i class="material-icons">{ "chevron_right" }</i>
            </button>
            <button class="btn-today" onclick={link.callback(|_| Msg::Today)}>{ "Hoy" }</button>
        </div>
    }
}

fn build_cell(cell: &GridCell, link: &Scope<CalendarComponent>) -> Html {
    match cell {
        GridCell::Blank => html! { <div class="calendar-day empty"></div> },
        GridCell::Day(day) => build_day(day, link),
    }
}

fn build_day(day: &DayCell, link: &Scope<CalendarComponent>) -> Html {
    let number = day.day();
    let class = classes!(
        "calendar-day",
        day.is_today.then_some("today"),
        day.is_past.then_some("past"),
        day.is_selected.then_some("selected"),
        (!day.appointments.is_empty()).then_some("has-appointments"),
    );
    let onclick = if day.is_selectable() {
        Some(link.callback(move |_: MouseEvent| Msg::SelectDay(number)))
    } else {
        None
    };

    html! {
        <button class={class} disabled={!day.is_selectable()} onclick={onclick}>
            <span class="day-number">{ number }</span>
            <div class="day-indicators">
                { for day.indicators().into_iter().map(|status| html! {
                    <span class={classes!("indicator", status.css_class())} title={status.label()}></span>
                }) }
            </div>
        </button>
    }
}

fn build_legend() -> Html {
    html! {
        <div class="calendar-legend">
            { for AppointmentStatus::ALL.iter().map(|status| html! {
                <span>
                    <span class={classes!("indicator", status.css_class())}></span>
                    { status.label() }
                </span>
            }) }
        </div>
    }
}
