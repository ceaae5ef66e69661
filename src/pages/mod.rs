//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signals and submit handler and delegates the
//! session work to `state::auth`.

pub mod dashboard;
pub mod login;
pub mod register;
