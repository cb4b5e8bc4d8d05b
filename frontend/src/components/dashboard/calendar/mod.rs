//! Month calendar: root module wiring the Yew `Component` implementation
//! with submodules for messages, props, state and view rendering.
//!
//! The grid itself comes from `common::calendar::build_grid`; this component
//! only keeps track of the displayed month and turns clicks into
//! [`DaySelection`](common::calendar::DaySelection)s for the parent.

use common::calendar::{select_day, MonthView};
use log::debug;
use yew::prelude::*;

mod day_grid;
mod messages;
mod props;
mod state;
mod view;

pub use messages::Msg;
pub use props::CalendarProps;
pub use state::CalendarComponent;

impl Component for CalendarComponent {
    type Message = Msg;
    type Properties = CalendarProps;

    fn create(ctx: &Context<Self>) -> Self {
        CalendarComponent::new(ctx.props().today)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::PreviousMonth => {
                self.month = self.month.previous();
                true
            }
            Msg::NextMonth => {
                self.month = self.month.next();
                true
            }
            Msg::Today => {
                self.month = MonthView::containing(props.today);
                true
            }
            Msg::SelectDay(day) => {
                match select_day(self.month, day, &props.appointments, props.today) {
                    Some(selection) => {
                        self.selected = Some(selection.date);
                        props.on_select.emit(selection);
                        true
                    }
                    None => {
                        debug!("ignoring click on day {} of {}", day, self.month.title());
                        false
                    }
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
