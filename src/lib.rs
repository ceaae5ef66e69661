//! # iiko-web
//!
//! Leptos + WASM single-page client for the iiko users API: registration,
//! login by password or one-time code, cookie-held access/refresh tokens, and a
//! dashboard route gated on the access token.
//!
//! Browser glue compiles only under the `csr` feature. Everything else builds
//! and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
