//! Day modal: root module wiring the Yew `Component` implementation with
//! submodules for messages, props, state, update logic and view rendering.
//!
//! The modal opens in list mode when the selected day already has
//! appointments and straight into the booking form otherwise. The mode,
//! form and in-flight flags live in [`ModalState`](common::booking::ModalState);
//! this component only drives the network calls and the auto-close timer.

use common::booking::ModalState;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CalendarModalProps;
pub use state::CalendarModal;

impl Component for CalendarModal {
    type Message = Msg;
    type Properties = CalendarModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        CalendarModal::new(ctx.props().selection.clone())
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let selection = &ctx.props().selection;
        if *selection != old_props.selection {
            self.modal = ModalState::open(selection.clone());
            self._close_timer = None;
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
