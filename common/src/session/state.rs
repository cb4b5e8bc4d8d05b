use crate::model::user::User;

/// Whether the persisted token has been checked yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Restoring,
    Ready,
}

/// Something that changed who is signed in.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Outcome of the startup token check.
    Restored(Option<User>),
    SignedIn(User),
    SignedOut,
}

/// Client-side view of the session, held by the top-level component.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    status: SessionStatus,
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            // A sign-in or sign-out that landed first wins over the startup check.
            SessionEvent::Restored(_) if self.status == SessionStatus::Ready => {}
            SessionEvent::Restored(user) => {
                self.status = SessionStatus::Ready;
                self.user = user;
            }
            SessionEvent::SignedIn(user) => {
                self.status = SessionStatus::Ready;
                self.user = Some(user);
            }
            SessionEvent::SignedOut => {
                self.status = SessionStatus::Ready;
                self.user = None;
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_restoring(&self) -> bool {
        self.status == SessionStatus::Restoring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            nombre: "Ana".into(),
            apellido: "López".into(),
            email: "ana@example.com".into(),
            telefono: None,
            created_at: None,
        }
    }

    #[test]
    fn starts_restoring_and_anonymous() {
        let session = Session::new();
        assert!(session.is_restoring());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn failed_restore_leaves_session_anonymous() {
        let mut session = Session::new();
        session.apply(SessionEvent::Restored(None));
        assert!(!session.is_restoring());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn late_restore_does_not_override_sign_in() {
        let mut session = Session::new();
        session.apply(SessionEvent::SignedIn(user()));
        session.apply(SessionEvent::Restored(None));
        assert_eq!(session.user(), Some(&user()));
    }

    #[test]
    fn sign_out_drops_user() {
        let mut session = Session::new();
        session.apply(SessionEvent::SignedIn(user()));
        assert!(session.is_authenticated());
        session.apply(SessionEvent::SignedOut);
        assert_eq!(session.user(), None);
    }
}
