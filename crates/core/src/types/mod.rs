//! Core types for the BEWEAR storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credentials;
pub mod email;
pub mod id;
pub mod password;
pub mod price;

pub use credentials::{Credentials, CredentialsError};
pub use email::{Email, EmailError};
pub use id::*;
pub use password::{Password, PasswordError};
pub use price::Price;
