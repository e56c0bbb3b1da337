//! External service clients.

pub mod auth;
