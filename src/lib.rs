//! # frontdesk-web
//!
//! Leptos + WASM frontend for a hotel-management REST backend: client-side
//! routing with an authentication guard, a token-backed session store, a
//! thin JSON HTTP layer, and read-only views over rooms, clients,
//! employees, the cleaning rota, and reports.
//!
//! Authentication is token presence and nothing more: the login endpoint
//! issues a token, it lives under one localStorage key, every request
//! carries it as `Authorization: Token <value>`, and logout deletes it
//! locally. The backend remains the authority on every request.

pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod components;
pub mod features;
pub mod routes;
