//! Client-side state: token cookies, the session identity, and the flows that
//! change them.
//!
//! DESIGN
//! ======
//! `cookies` and `session` are leaf stores; `auth` is the only module that
//! writes to both.

pub mod auth;
pub mod cookies;
pub mod session;
