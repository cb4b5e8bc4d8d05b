//! Login and registration dialog.

mod login_form;
mod register_form;

use yew::prelude::*;

use crate::components::overlay::ModalSheet;
use login_form::LoginForm;
use register_form::RegisterForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct AuthDialogProps {
    pub initial: AuthView,
    pub on_close: Callback<()>,
}

pub enum Msg {
    Switch(AuthView),
}

pub struct AuthDialog {
    view: AuthView,
}

impl Component for AuthDialog {
    type Message = Msg;
    type Properties = AuthDialogProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            view: ctx.props().initial,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Switch(view) => {
                let changed = self.view != view;
                self.view = view;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_close = ctx.props().on_close.clone();
        let body = match self.view {
            AuthView::Login => html! {
                <LoginForm
                    on_switch={link.callback(|_| Msg::Switch(AuthView::Register))}
                    on_done={on_close.clone()} />
            },
            AuthView::Register => html! {
                <RegisterForm
                    on_switch={link.callback(|_| Msg::Switch(AuthView::Login))}
                    on_done={on_close.clone()} />
            },
        };

        html! {
            <ModalSheet {on_close}>
                { body }
            </ModalSheet>
        }
    }
}
