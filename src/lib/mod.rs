//! Shared frontend utilities: API access, configuration, the endpoint
//! registry, errors, and build metadata.
//!
//! The backend authenticates requests with a DRF token: the login endpoint
//! returns `{"auth_token": "..."}`, the client persists it under a fixed
//! localStorage key, and every subsequent request carries
//! `Authorization: Token <value>`. Centralizing the request helpers here
//! keeps that header injection in one place; callers never touch the token.

pub mod api;
pub mod build_info;
pub mod config;
pub mod endpoints;
pub mod errors;

pub use api::{get_json, get_json_with_query, post_json};
pub use errors::AppError;
