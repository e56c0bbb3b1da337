//! BEWEAR Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront:
//!
//! - [`types::Email`], [`types::Password`], [`types::Credentials`] - validated
//!   sign-in input; a [`types::Credentials`] value can only be constructed
//!   from input that passed validation, so unvalidated credentials can never
//!   reach the authentication boundary.
//! - [`types::Price`] - integer-cents price with BRL display formatting.
//! - [`types::ProductId`], [`types::VariantId`] - newtype entity IDs.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
