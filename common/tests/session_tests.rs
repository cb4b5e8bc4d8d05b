//! Authentication gate against an in-memory API.

mod support;

use std::rc::Rc;

use common::requests::RegisterData;
use common::session::MemoryCredentialStore;
use common::{
    AuthError, AuthGate, ClinicApi, CredentialStore, Session, SessionEvent, ValidationError,
};

use support::FakeClinic;

fn gate_with(
    api: FakeClinic,
    store: MemoryCredentialStore,
) -> (AuthGate<FakeClinic, Rc<MemoryCredentialStore>>, Rc<MemoryCredentialStore>) {
    let store = Rc::new(store);
    (AuthGate::new(api, Rc::clone(&store)), store)
}

#[tokio::test]
async fn restore_without_token_skips_the_server() {
    let (gate, _) = gate_with(FakeClinic::new(), MemoryCredentialStore::default());
    assert_eq!(gate.restore().await, None);
    assert_eq!(gate.api().me_calls.get(), 0);
}

#[tokio::test]
async fn restore_with_valid_token_returns_user() {
    let api = FakeClinic::new();
    let (user, token) = api.seed_user("Ana", "ana@example.com", "secreto1");
    let (gate, store) = gate_with(api, MemoryCredentialStore::with_token(&token));

    assert_eq!(gate.restore().await, Some(user));
    assert_eq!(store.get(), Some(token));
}

#[tokio::test]
async fn rejected_token_signs_out_and_clears_storage() {
    let api = FakeClinic::new();
    let (_, token) = api.seed_user("Ana", "ana@example.com", "secreto1");
    api.revoke(&token);
    let (gate, store) = gate_with(api, MemoryCredentialStore::with_token(&token));

    let mut session = Session::new();
    session.apply(SessionEvent::Restored(gate.restore().await));

    assert!(!session.is_authenticated());
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn login_persists_token() {
    let api = FakeClinic::new();
    let (user, _) = api.seed_user("Ana", "ana@example.com", "secreto1");
    let (gate, store) = gate_with(api, MemoryCredentialStore::default());

    let signed_in = gate.login(" ana@example.com ", "secreto1").await.unwrap();
    assert_eq!(signed_in, user);
    let token = store.get().expect("token stored");
    assert_eq!(gate.api().me(&token).await.unwrap(), user);
}

#[tokio::test]
async fn failed_login_keeps_existing_session() {
    let api = FakeClinic::new();
    let (_, token) = api.seed_user("Ana", "ana@example.com", "secreto1");
    let (gate, store) = gate_with(api, MemoryCredentialStore::with_token(&token));

    let err = gate.login("ana@example.com", "equivocada").await.unwrap_err();
    assert_eq!(err, AuthError::LoginFailed);
    assert_eq!(store.get(), Some(token));
}

#[tokio::test]
async fn empty_credentials_fail_before_the_request() {
    let (gate, _) = gate_with(FakeClinic::new(), MemoryCredentialStore::default());
    let err = gate.login("", "x").await.unwrap_err();
    assert_eq!(err, AuthError::Invalid(ValidationError::MissingField("email")));
}

#[tokio::test]
async fn register_then_duplicate_email_fails() {
    let (gate, store) = gate_with(FakeClinic::new(), MemoryCredentialStore::default());
    let data = RegisterData {
        nombre: "Luis".into(),
        apellido: "Pérez".into(),
        email: "luis@example.com".into(),
        password: "secreto1".into(),
        telefono: Some(String::new()),
    };

    let user = gate.register(&data, "secreto1").await.unwrap();
    assert_eq!(user.email, "luis@example.com");
    assert_eq!(user.telefono, None);
    let first_token = store.get();
    assert!(first_token.is_some());

    let err = gate.register(&data, "secreto1").await.unwrap_err();
    assert_eq!(err, AuthError::RegistrationFailed);
    assert_eq!(store.get(), first_token);
}

#[tokio::test]
async fn register_validates_locally() {
    let (gate, store) = gate_with(FakeClinic::new(), MemoryCredentialStore::default());
    let data = RegisterData {
        nombre: "Luis".into(),
        apellido: "Pérez".into(),
        email: "luis@example.com".into(),
        password: "secreto1".into(),
        telefono: None,
    };
    let err = gate.register(&data, "secreto2").await.unwrap_err();
    assert_eq!(err, AuthError::Invalid(ValidationError::PasswordMismatch));
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn logout_clears_token() {
    let api = FakeClinic::new();
    let (_, token) = api.seed_user("Ana", "ana@example.com", "secreto1");
    let (gate, store) = gate_with(api, MemoryCredentialStore::with_token(&token));

    gate.logout();
    assert_eq!(store.get(), None);
    assert_eq!(gate.bearer(), None);
}

#[tokio::test]
async fn login_during_restore_survives_the_stale_token_check() {
    let api = FakeClinic::new();
    let (user, stale) = api.seed_user("Ana", "ana@example.com", "secreto1");
    api.revoke(&stale);
    api.me_yields.set(2);
    let (gate, store) = gate_with(api, MemoryCredentialStore::with_token(&stale));

    let (restored, login) = tokio::join!(gate.restore(), gate.login("ana@example.com", "secreto1"));

    assert_eq!(restored, None);
    assert_eq!(login.unwrap(), user);
    let fresh = store.get().expect("login token kept");
    assert_ne!(fresh, stale);

    let mut session = Session::new();
    session.apply(SessionEvent::SignedIn(user.clone()));
    session.apply(SessionEvent::Restored(restored));
    assert_eq!(session.user(), Some(&user));
}
