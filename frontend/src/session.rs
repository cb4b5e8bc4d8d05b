//! Session context shared with the component tree.
//!
//! `App` owns the [`Gate`] and the [`Session`](common::Session) state and
//! hands this context down through a `ContextProvider`. Children never change
//! the session themselves: they run gate operations and report the outcome
//! through [`SessionContext::dispatch`].

use std::rc::Rc;

use common::{AuthGate, SessionEvent, User};
use yew::{Callback, Component, Context};

use crate::api::HttpClinicApi;
use crate::storage::LocalCredentialStore;

pub type Gate = AuthGate<HttpClinicApi, LocalCredentialStore>;

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Dashboard => "/dashboard",
        }
    }

    pub fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/') == "/dashboard" {
            Page::Dashboard
        } else {
            Page::Home
        }
    }
}

#[derive(Clone)]
pub struct SessionContext {
    pub gate: Rc<Gate>,
    pub user: Option<User>,
    pub restoring: bool,
    pub dispatch: Callback<SessionEvent>,
    pub navigate: Callback<Page>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.gate, &other.gate)
            && self.user == other.user
            && self.restoring == other.restoring
            && self.dispatch == other.dispatch
            && self.navigate == other.navigate
    }
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn signed_in(&self, user: User) {
        self.dispatch.emit(SessionEvent::SignedIn(user));
    }

    /// Clears the stored token and drops the user.
    pub fn logout(&self) {
        self.gate.logout();
        self.dispatch.emit(SessionEvent::SignedOut);
    }
}

/// Current session context of a struct component, read on demand.
pub fn session_of<C: Component>(ctx: &Context<C>) -> Option<SessionContext> {
    ctx.link()
        .context::<SessionContext>(Callback::noop())
        .map(|(session, _)| session)
}
