//! Domain models shared between the frontend and the tests.

pub mod appointment;
pub mod service;
pub mod user;
