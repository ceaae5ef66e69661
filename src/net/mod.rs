//! Network layer for the external users API.
//!
//! DESIGN
//! ======
//! `types` holds the wire DTOs; `api` owns transport and endpoint paths.

pub mod api;
pub mod types;
