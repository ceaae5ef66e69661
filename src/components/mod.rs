//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the token store and session from Leptos context providers
//! installed by the app root.

pub mod header;
pub mod require_auth;
