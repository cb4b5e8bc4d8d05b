use log::{info, warn};

use crate::api::ClinicApi;
use crate::error::AuthError;
use crate::model::user::User;
use crate::requests::{LoginRequest, RegisterData};
use crate::responses::AuthResponse;

use super::store::CredentialStore;

/// Authentication gate: pairs the API with the credential store.
///
/// Each operation either leaves a token persisted and returns the signed-in
/// user, or fails without touching whatever session already exists.
pub struct AuthGate<A, S> {
    api: A,
    store: S,
}

impl<A: ClinicApi, S: CredentialStore> AuthGate<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Token to attach to authenticated calls, if any.
    pub fn bearer(&self) -> Option<String> {
        self.store.get()
    }

    /// Validates the persisted token against `/api/auth/me`.
    ///
    /// A token the server rejects, or that cannot be checked at all, is
    /// removed and the session starts signed out. If a login or logout
    /// replaced the token while the check was pending, the store is left
    /// alone and `None` is returned.
    pub async fn restore(&self) -> Option<User> {
        let token = self.store.get()?;
        let result = self.api.me(&token).await;
        if self.store.get().as_deref() != Some(token.as_str()) {
            info!("session changed while restoring; discarding the check");
            return None;
        }
        match result {
            Ok(user) => {
                info!("session restored for user {}", user.id);
                Some(user)
            }
            Err(e) => {
                warn!("stored session is no longer valid: {}", e);
                self.store.clear();
                None
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let request = LoginRequest::new(email, password);
        request.validate()?;
        match self.api.login(&request).await {
            Ok(response) => Ok(self.accept(response)),
            Err(e) => {
                warn!("login failed: {}", e);
                Err(AuthError::LoginFailed)
            }
        }
    }

    /// `confirm_password` is checked locally and never sent.
    pub async fn register(
        &self,
        data: &RegisterData,
        confirm_password: &str,
    ) -> Result<User, AuthError> {
        data.validate(confirm_password)?;
        match self.api.register(&data.normalized()).await {
            Ok(response) => Ok(self.accept(response)),
            Err(e) => {
                warn!("registration failed: {}", e);
                Err(AuthError::RegistrationFailed)
            }
        }
    }

    pub fn logout(&self) {
        self.store.clear();
        info!("signed out");
    }

    fn accept(&self, response: AuthResponse) -> User {
        self.store.set(&response.token);
        info!("signed in as user {}", response.user.id);
        response.user
    }
}
