//! Command implementations for the Codehop CLI

pub mod add;
pub mod completions;
pub mod helpers;
pub mod list;
pub mod open;
pub mod remove;
pub mod resolve;
pub mod version;
