//! Session bootstrap for router commands.
//!
//! This module turns a stored credential (or a fresh login) into a
//! `SessionHandle`, the authenticated request context every command uses
//! for the lifetime of one invocation.

pub mod session;

pub use session::{authenticate_and_persist, login, resolve_session, SessionHandle};
