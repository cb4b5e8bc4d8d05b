//! Session handling: where the bearer token lives and who is signed in.
//!
//! The session is an explicit object. The top-level UI component creates one
//! [`AuthGate`], calls [`AuthGate::restore`] once, and tears the session down
//! with [`AuthGate::logout`]. Nothing here is global.

mod gate;
mod state;
mod store;

pub use gate::AuthGate;
pub use state::{Session, SessionEvent, SessionStatus};
pub use store::{CredentialStore, MemoryCredentialStore};
