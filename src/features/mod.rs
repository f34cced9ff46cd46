//! Domain features, one module per backend resource: a thin typed client
//! plus its payload types, with auth also owning session state and guards.

pub mod auth;
pub mod cleaning;
pub mod clients;
pub mod employees;
pub mod rooms;
pub mod stats;
