//! This crate contains all shared UI for the admin console.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

mod clients;
pub use clients::{AdminClients, use_clients};

pub mod admin;
