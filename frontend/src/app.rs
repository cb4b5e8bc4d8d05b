//! Root component: owns the session and picks the page.

use std::rc::Rc;

use common::{AuthGate, Session, SessionEvent};
use log::debug;
use wasm_bindgen::JsValue;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::HttpClinicApi;
use crate::components::dashboard::DashboardPage;
use crate::components::helpers::spinner;
use crate::components::home::HomePage;
use crate::config::TOKEN_STORAGE_KEY;
use crate::session::{Gate, Page, SessionContext};
use crate::storage::LocalCredentialStore;

pub enum Msg {
    Session(SessionEvent),
    Navigate(Page),
}

pub struct App {
    gate: Rc<Gate>,
    session: Session,
    page: Page,
    restore_started: bool,
    dispatch: Callback<SessionEvent>,
    navigate: Callback<Page>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let gate = AuthGate::new(
            HttpClinicApi::new(),
            LocalCredentialStore::new(TOKEN_STORAGE_KEY),
        );
        Self {
            gate: Rc::new(gate),
            session: Session::new(),
            page: current_page(),
            restore_started: false,
            dispatch: ctx.link().callback(Msg::Session),
            navigate: ctx.link().callback(Msg::Navigate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Session(event) => {
                let signed_in = matches!(event, SessionEvent::SignedIn(_));
                self.session.apply(event);
                if signed_in {
                    self.go_to(Page::Dashboard);
                } else if !self.session.is_authenticated() && self.page == Page::Dashboard {
                    self.go_to(Page::Home);
                }
                true
            }
            Msg::Navigate(page) => {
                let page = if page == Page::Dashboard
                    && !self.session.is_restoring()
                    && !self.session.is_authenticated()
                {
                    Page::Home
                } else {
                    page
                };
                self.go_to(page);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let context = SessionContext {
            gate: Rc::clone(&self.gate),
            user: self.session.user().cloned(),
            restoring: self.session.is_restoring(),
            dispatch: self.dispatch.clone(),
            navigate: self.navigate.clone(),
        };

        let page = match (self.page, self.session.user()) {
            (Page::Dashboard, Some(user)) => html! { <DashboardPage user={user.clone()} /> },
            (Page::Dashboard, None) if self.session.is_restoring() => spinner("Cargando tu panel..."),
            _ => html! { <HomePage /> },
        };

        html! {
            <ContextProvider<SessionContext> context={context}>
                { page }
            </ContextProvider<SessionContext>>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.restore_started {
            self.restore_started = true;
            let gate = Rc::clone(&self.gate);
            let link = ctx.link().clone();
            spawn_local(async move {
                let user = gate.restore().await;
                link.send_message(Msg::Session(SessionEvent::Restored(user)));
            });
        }
    }
}

impl App {
    fn go_to(&mut self, page: Page) {
        if self.page == page {
            return;
        }
        self.page = page;
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if history
                .push_state_with_url(&JsValue::NULL, "", Some(page.path()))
                .is_err()
            {
                debug!("could not update location to {}", page.path());
            }
        }
    }
}

fn current_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Page::from_path(&path))
        .unwrap_or(Page::Home)
}
