//! Public landing page: header, hero, services, about and footer, plus the
//! login/register dialog.

mod sections;

use yew::context::ContextHandle;
use yew::prelude::*;

use crate::components::auth::{AuthDialog, AuthView};
use crate::components::helpers::scroll_to;
use crate::session::{session_of, Page, SessionContext};

/// In-page anchors shown in the navigation bar.
const NAV_LINKS: [(&str, &str); 3] = [
    ("Inicio", "inicio"),
    ("Servicios", "servicios"),
    ("Nosotros", "nosotros"),
];

pub enum Msg {
    OpenAuth(AuthView),
    CloseAuth,
    ToggleMenu,
    ScrollTo(&'static str),
    GoToDashboard,
    SessionChanged(SessionContext),
}

pub struct HomePage {
    auth_view: Option<AuthView>,
    menu_open: bool,
    signed_in: bool,
    /// The stored token is still being checked; sign-in waits for it.
    restoring: bool,
    _session_listener: Option<ContextHandle<SessionContext>>,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let subscription = ctx
            .link()
            .context::<SessionContext>(ctx.link().callback(Msg::SessionChanged));
        let (signed_in, restoring) = subscription
            .as_ref()
            .map_or((false, false), |(session, _)| {
                (session.is_authenticated(), session.restoring)
            });
        Self {
            auth_view: None,
            menu_open: false,
            signed_in,
            restoring,
            _session_listener: subscription.map(|(_, handle)| handle),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenAuth(_) if self.restoring => false,
            Msg::OpenAuth(view) => {
                self.auth_view = Some(view);
                self.menu_open = false;
                true
            }
            Msg::CloseAuth => {
                self.auth_view = None;
                true
            }
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Msg::ScrollTo(id) => {
                scroll_to(id);
                if self.menu_open {
                    self.menu_open = false;
                    return true;
                }
                false
            }
            Msg::GoToDashboard => {
                if let Some(session) = session_of(ctx) {
                    session.navigate.emit(Page::Dashboard);
                }
                false
            }
            Msg::SessionChanged(session) => {
                let state = (session.is_authenticated(), session.restoring);
                let changed = (self.signed_in, self.restoring) != state;
                (self.signed_in, self.restoring) = state;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let nav = NAV_LINKS
            .iter()
            .map(|(label, id)| {
                let id: &'static str = *id;
                html! {
                    <a href={format!("#{}", id)}
                       onclick={link.callback(move |e: MouseEvent| {
                           e.prevent_default();
                           Msg::ScrollTo(id)
                       })}>
                        { *label }
                    </a>
                }
            })
            .collect::<Html>();

        let account = if self.signed_in {
            html! {
                <button class="nav-cta" onclick={link.callback(|_| Msg::GoToDashboard)}>
                    { "Mi panel" }
                </button>
            }
        } else {
            html! {
                <button class="nav-cta" disabled={self.restoring}
                        onclick={link.callback(|_| Msg::OpenAuth(AuthView::Login))}>
                    { "Iniciar sesión" }
                </button>
            }
        };

        html! {
            <main>
                <header class="site-header">
                    <h2 class="logo">{ "Clínica Wenka" }</h2>
                    <nav class={classes!("site-nav", self.menu_open.then_some("open"))}>
                        { nav }
                        { account }
                    </nav>
                    <button class="menu-toggle" aria-label="Toggle menu"
                            onclick={link.callback(|_| Msg::ToggleMenu)}>
                        <i class="material-icons">{ if self.menu_open { "close" } else { "menu" } }</i>
                    </button>
                </header>

                <section id="inicio">
                    { sections::hero(link.callback(|_| Msg::ScrollTo("servicios")),
                                     link.callback(|_| Msg::OpenAuth(AuthView::Register))) }
                </section>
                <section id="servicios">
                    { sections::services() }
                </section>
                <section id="nosotros">
                    { sections::about() }
                </section>
                { sections::footer() }

                if let Some(view) = self.auth_view {
                    <AuthDialog initial={view} on_close={link.callback(|_| Msg::CloseAuth)} />
                }
            </main>
        }
    }
}
