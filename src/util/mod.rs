//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps routing decisions out of components so they stay unit-testable.

pub mod auth;
