//! Auth Service Library
//!
//! Registration and login use cases over the storage engine.

pub mod service;

pub use service::{AuthService, Authenticator};
