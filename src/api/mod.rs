//! HTTP client module for the GL.iNet router firmware API.
//!
//! This module provides the `ApiClient` for the fixed set of management
//! endpoints the firmware exposes: login, public IP, internet reachability,
//! the connected-client list, and modem status/control.
//!
//! Authenticated endpoints take the opaque session token verbatim in the
//! `Authorization` header; the token is obtained from the login endpoint.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
