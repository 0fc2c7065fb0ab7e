//! Middleware modules.

pub mod error;
