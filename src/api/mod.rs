//! Endpoint groups
//!
//! Each submodule implements one endpoint group as methods on
//! [`crate::Client`].

pub mod chat;
pub mod files;
pub mod fine_tuning;
