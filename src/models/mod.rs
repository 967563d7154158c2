//! API data models
//!
//! This module contains the request and response shapes for the chat
//! completion, file, and fine-tuning endpoints.

pub mod chat;
pub mod files;
pub mod fine_tuning;
