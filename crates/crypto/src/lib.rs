//! Cryptographic utilities for Tremendous clients.
//!
//! This crate provides HS256 compact-token (JWT) signing and
//! verification for embed payloads. Signature checks compare in
//! constant time.

#![warn(missing_docs)]

mod error;
mod jwt;

pub use error::{CryptoError, Result};
pub use jwt::{encode_hs256, verify_hs256};
