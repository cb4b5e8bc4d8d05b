use std::cell::RefCell;

/// Persistence for the bearer token.
///
/// The browser implementation writes to `localStorage`; tests use
/// [`MemoryCredentialStore`]. Methods take `&self` because storage backends
/// are shared handles.
pub trait CredentialStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// In-memory store, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RefCell<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

impl<S: CredentialStore + ?Sized> CredentialStore for std::rc::Rc<S> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}
