//! Shared domain layer for the clinic site.
//!
//! Everything here is target-independent: the WASM frontend links it for its
//! data types and view logic, and the test suite exercises it natively.
//!
//! # Modules
//!
//! - [`model`]: users, appointments and the static service catalog
//! - [`requests`] / [`responses`]: request and response bodies of the REST API
//! - [`api`]: the `ClinicApi` contract the frontend talks through
//! - [`session`]: credential store and authentication gate
//! - [`calendar`]: month grid and upcoming-appointment buckets
//! - [`booking`]: dashboard appointment list, booking operations, modal state
//! - [`format`]: Spanish display helpers
//! - [`error`]: error types

pub mod api;
pub mod booking;
pub mod calendar;
pub mod error;
pub mod format;
pub mod model;
pub mod requests;
pub mod responses;
pub mod session;

pub use api::ClinicApi;
pub use error::{ApiError, AuthError, BookingError, ValidationError};
pub use model::appointment::{Appointment, AppointmentStatus};
pub use model::service::{Service, SERVICES};
pub use model::user::User;
pub use session::{AuthGate, CredentialStore, Session, SessionEvent};
