//! # Route Modules
//!
//! Each module exposes a `router()` returning `Router<AppState>`.

pub mod hooks;
pub mod validate;
