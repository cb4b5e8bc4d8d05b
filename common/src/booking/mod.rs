//! Dashboard booking flow.
//!
//! The dashboard owns one [`AppointmentBook`]. Children read it and report
//! intent upward; after every successful write the whole list is fetched
//! again with [`load`] instead of being patched locally.

mod book;
mod modal;
mod service;

pub use book::{AppointmentBook, RefreshTicket};
pub use modal::{AUTO_CLOSE_DELAY_MS, ModalMode, ModalState, SubmitPhase};
pub use service::{cancel, load, notify_on_success, submit};
