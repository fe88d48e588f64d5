//! Client library for the Bridge research study platform web API:
//! study configuration, survey authoring and versioning, schedule plans,
//! and user accounts.
//!
//! Sign in with an [Account] to obtain a [Session], then use its
//! [ResearcherClient] or [UserClient] to issue calls.

pub mod account;
mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod types;

pub use account::Account;
pub use client::base::BaseBridgeClient;
pub use client::researcher::ResearcherClient;
pub use client::session::{Session, SessionBuilder};
pub use client::user::UserClient;
pub use errors::BridgeError;
